//! Training sample data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::analysis::{AnalysisRequest, SessionId, SuggestionStyle, UserId};
use crate::game::entities::{Action, Card, Chips};

/// Training sample ID type
pub type SampleId = Uuid;

/// How the hand ended for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleOutcome {
    Won,
    Lost,
    Split,
    Folded,
    Pending,
}

impl std::fmt::Display for SampleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleOutcome::Won => write!(f, "won"),
            SampleOutcome::Lost => write!(f, "lost"),
            SampleOutcome::Split => write!(f, "split"),
            SampleOutcome::Folded => write!(f, "folded"),
            SampleOutcome::Pending => write!(f, "pending"),
        }
    }
}

/// One recorded decision (append-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub id: SampleId,
    pub user_id: UserId,
    pub session_id: SessionId,
    pub hole_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    pub pot_size: Chips,
    pub current_bet: Chips,
    pub stack_size: Chips,
    /// What the engine suggested, if a suggestion was shown
    pub recommended_action: Option<Action>,
    pub style: Option<SuggestionStyle>,
    /// What the player actually did
    pub action_taken: Action,
    pub amount: Chips,
    pub outcome: SampleOutcome,
    pub created_at: DateTime<Utc>,
}

impl TrainingSample {
    /// Record the action a player took for an analyzed request.
    pub fn from_request(request: &AnalysisRequest, action_taken: Action, amount: Chips) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            session_id: request.session_id,
            hole_cards: request.hole_cards.clone(),
            community_cards: request.community_cards.clone(),
            pot_size: request.pot_size,
            current_bet: request.current_bet,
            stack_size: request.stack_size,
            recommended_action: None,
            style: None,
            action_taken,
            amount,
            outcome: SampleOutcome::Pending,
            created_at: Utc::now(),
        }
    }

    /// Attach the suggestion that was shown to the player
    pub fn with_suggestion(mut self, style: SuggestionStyle, recommended_action: Action) -> Self {
        self.style = Some(style);
        self.recommended_action = Some(recommended_action);
        self
    }

    pub fn with_outcome(mut self, outcome: SampleOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Whether the player followed the suggestion
    pub fn followed_suggestion(&self) -> Option<bool> {
        self.recommended_action
            .map(|recommended| recommended == self.action_taken)
    }
}

/// Aggregate counts over stored samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    pub total: usize,
    pub by_outcome: HashMap<SampleOutcome, usize>,
    pub by_action: HashMap<Action, usize>,
    /// Samples where the player took the suggested action
    pub followed_suggestions: usize,
}

impl TrainingStats {
    pub fn record(&mut self, sample: &TrainingSample) {
        self.total += 1;
        *self.by_outcome.entry(sample.outcome).or_default() += 1;
        *self.by_action.entry(sample.action_taken).or_default() += 1;
        if sample.followed_suggestion() == Some(true) {
            self.followed_suggestions += 1;
        }
    }
}

impl<'a> FromIterator<&'a TrainingSample> for TrainingStats {
    fn from_iter<I: IntoIterator<Item = &'a TrainingSample>>(samples: I) -> Self {
        let mut stats = Self::default();
        for sample in samples {
            stats.record(sample);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            user_id: 3,
            session_id: Uuid::new_v4(),
            hole_cards: vec!["Ah".parse().unwrap(), "Kd".parse().unwrap()],
            community_cards: vec![],
            bet_history: vec![],
            pot_size: 60,
            current_bet: 20,
            stack_size: 980,
        }
    }

    #[test]
    fn test_sample_from_request() {
        let req = request();
        let sample = TrainingSample::from_request(&req, Action::Call, 20);
        assert_eq!(sample.user_id, 3);
        assert_eq!(sample.session_id, req.session_id);
        assert_eq!(sample.hole_cards, req.hole_cards);
        assert_eq!(sample.outcome, SampleOutcome::Pending);
        assert_eq!(sample.followed_suggestion(), None);
    }

    #[test]
    fn test_followed_suggestion() {
        let sample = TrainingSample::from_request(&request(), Action::Call, 20)
            .with_suggestion(SuggestionStyle::Gto, Action::Call);
        assert_eq!(sample.followed_suggestion(), Some(true));

        let sample = sample.with_suggestion(SuggestionStyle::Professional, Action::Raise);
        assert_eq!(sample.followed_suggestion(), Some(false));
    }

    #[test]
    fn test_stats_from_samples() {
        let req = request();
        let samples = vec![
            TrainingSample::from_request(&req, Action::Call, 20).with_outcome(SampleOutcome::Won),
            TrainingSample::from_request(&req, Action::Call, 20).with_outcome(SampleOutcome::Lost),
            TrainingSample::from_request(&req, Action::Fold, 0)
                .with_outcome(SampleOutcome::Folded)
                .with_suggestion(SuggestionStyle::Gto, Action::Fold),
        ];

        let stats: TrainingStats = samples.iter().collect();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_action[&Action::Call], 2);
        assert_eq!(stats.by_action[&Action::Fold], 1);
        assert_eq!(stats.by_outcome[&SampleOutcome::Won], 1);
        assert_eq!(stats.by_outcome.get(&SampleOutcome::Split), None);
        assert_eq!(stats.followed_suggestions, 1);
    }

    #[test]
    fn test_stats_serialize_with_named_keys() {
        let req = request();
        let sample = TrainingSample::from_request(&req, Action::AllIn, 980);
        let stats: TrainingStats = std::iter::once(&sample).collect();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["by_action"]["all_in"], 1);
        assert_eq!(json["by_outcome"]["pending"], 1);
    }
}
