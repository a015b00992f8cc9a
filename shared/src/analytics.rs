use serde::{Serialize, Deserialize};

use crate::survey_state::SurveyState;

/// Summary figures derived from the current state. Cheap enough to
/// recompute on every render pass; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnalytics {
    pub total_votes: u64,
    pub total_surveys: usize,
    pub average_votes_per_survey: f64,
}

pub fn compute_analytics(state: &SurveyState) -> SurveyAnalytics {
    let total_votes = state.total_votes();
    let total_surveys = state.surveys().len();
    let average_votes_per_survey = if total_surveys > 0 {
        total_votes as f64 / total_surveys as f64
    } else {
        0.0
    };
    SurveyAnalytics {
        total_votes,
        total_surveys,
        average_votes_per_survey,
    }
}
