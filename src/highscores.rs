//! High score list
//!
//! A score is the total fuel (seconds) left over across both levels of a
//! finished game. The list is kept sorted from best to worst.

use serde::{Deserialize, Serialize};

/// Number of entries shown on the high score screen
pub const DISPLAYED_HIGH_SCORES: usize = 5;

/// Ordered (descending) list of historical scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    scores: Vec<f32>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build from scores in any order
    pub fn from_scores(scores: Vec<f32>) -> Self {
        let mut high_scores = Self { scores };
        high_scores.sort();
        high_scores
    }

    /// Add a score and re-sort. Returns the rank achieved (1-indexed).
    pub fn add_score(&mut self, score: f32) -> usize {
        self.scores.push(score);
        self.sort();
        // Ties rank after existing equal scores
        self.scores.iter().rposition(|&s| s == score).map_or(self.scores.len(), |i| i + 1)
    }

    /// Scores, best first
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// The best `n` scores, best first
    pub fn top(&self, n: usize) -> &[f32] {
        &self.scores[..n.min(self.scores.len())]
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<f32> {
        self.scores.first().copied()
    }

    fn sort(&mut self) {
        self.scores.sort_by(|a, b| b.total_cmp(a));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores_sorts_descending() {
        let scores = HighScores::from_scores(vec![3.0, 10.5, 7.25]);
        assert_eq!(scores.scores(), &[10.5, 7.25, 3.0]);
        assert_eq!(scores.top_score(), Some(10.5));
    }

    #[test]
    fn test_add_score_keeps_order() {
        let mut scores = HighScores::from_scores(vec![50.0, 30.0, 10.0]);
        assert_eq!(scores.add_score(40.0), 2);
        assert_eq!(scores.scores(), &[50.0, 40.0, 30.0, 10.0]);
        assert_eq!(scores.add_score(1.0), 5);
        assert_eq!(scores.add_score(99.0), 1);
        assert_eq!(scores.len(), 6);
    }

    #[test]
    fn test_top() {
        let scores = HighScores::from_scores(vec![1.0, 2.0, 3.0]);
        assert_eq!(scores.top(2), &[3.0, 2.0]);
        assert_eq!(scores.top(DISPLAYED_HIGH_SCORES).len(), 3);
        assert!(HighScores::new().top(3).is_empty());
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let scores = HighScores::from_scores(vec![2.0, 4.0]);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"scores":[4.0,2.0]}"#);
    }
}
