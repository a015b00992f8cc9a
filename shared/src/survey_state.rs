use std::fmt;
use std::rc::Rc;
use time::OffsetDateTime;

use crate::models::{Survey, UserVoteRecord, VoteTally};
use crate::store::{self, KeyValueStore, SURVEYS_KEY, USER_VOTES_KEY, VOTES_KEY};

/// Owns the session's survey list, vote tally, and user-vote record, and
/// mirrors every mutation into the injected store.
///
/// Initialization is two-phase: [`SurveyState::new`] yields empty defaults
/// so the first render never blocks on storage, and [`load_persisted`]
/// overwrites them once the backing store is reachable.
///
/// [`load_persisted`]: SurveyState::load_persisted
#[derive(Clone)]
pub struct SurveyState {
    store: Rc<dyn KeyValueStore>,
    surveys: Vec<Survey>,
    votes: VoteTally,
    user_votes: UserVoteRecord,
    last_id: i64,
}

impl PartialEq for SurveyState {
    // Store identity is irrelevant: two states are equal when their data is.
    fn eq(&self, other: &Self) -> bool {
        self.surveys == other.surveys
            && self.votes == other.votes
            && self.user_votes == other.user_votes
    }
}

impl fmt::Debug for SurveyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurveyState")
            .field("surveys", &self.surveys)
            .field("votes", &self.votes)
            .field("user_votes", &self.user_votes)
            .finish()
    }
}

impl SurveyState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            surveys: Vec::new(),
            votes: VoteTally::new(),
            user_votes: UserVoteRecord::new(),
            last_id: 0,
        }
    }

    /// Restores a previous session from the store. Each key falls back to
    /// its default independently, so one corrupt entry does not discard the
    /// rest.
    pub fn load_persisted(&mut self) {
        self.surveys = store::load_or_default(self.store.as_ref(), SURVEYS_KEY);
        self.votes = store::load_or_default(self.store.as_ref(), VOTES_KEY);
        self.user_votes = store::load_or_default(self.store.as_ref(), USER_VOTES_KEY);
        // Keep ids increasing across reloads even if the clock moved back.
        self.last_id = self
            .surveys
            .iter()
            .filter_map(|s| s.id.parse().ok())
            .fold(self.last_id, i64::max);
    }

    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }

    pub fn vote_count(&self, survey_id: &str) -> u32 {
        self.votes.get(survey_id).copied().unwrap_or(0)
    }

    pub fn user_votes(&self) -> &[String] {
        &self.user_votes
    }

    /// Appends a new survey and persists the list. Empty or whitespace-only
    /// titles are rejected as a no-op; accepted text is stored verbatim.
    pub fn add_survey(&mut self, title: &str, description: Option<String>) -> bool {
        if title.trim().is_empty() {
            return false;
        }
        let created_at = OffsetDateTime::now_utc();
        let survey = Survey {
            id: self.next_id(created_at),
            title: title.to_owned(),
            description,
            created_at,
        };
        self.surveys.push(survey);
        store::persist(self.store.as_ref(), SURVEYS_KEY, &self.surveys);
        true
    }

    pub fn has_voted(&self, survey_id: &str) -> bool {
        self.user_votes.iter().any(|id| id == survey_id)
    }

    /// Counts one vote for `survey_id` unless this session already voted on
    /// it; repeat calls leave the tally untouched.
    pub fn add_vote(&mut self, survey_id: &str) {
        if self.has_voted(survey_id) {
            return;
        }
        *self.votes.entry(survey_id.to_owned()).or_insert(0) += 1;
        self.user_votes.push(survey_id.to_owned());
        store::persist(self.store.as_ref(), VOTES_KEY, &self.votes);
        store::persist(self.store.as_ref(), USER_VOTES_KEY, &self.user_votes);
    }

    /// Surveys ranked by vote count, highest first. The sort is stable, so
    /// equal counts keep creation order. `limit` truncates the result.
    pub fn top_surveys(&self, limit: Option<usize>) -> Vec<Survey> {
        let mut ranked = self.surveys.clone();
        ranked.sort_by(|a, b| self.vote_count(&b.id).cmp(&self.vote_count(&a.id)));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Sum of every tally entry, including entries whose survey no longer
    /// renders. Zero when the tally is empty.
    pub fn total_votes(&self) -> u64 {
        self.votes.values().map(|&n| u64::from(n)).sum()
    }

    // Millisecond clock bumped past the last issued id, so two surveys
    // created on the same tick still get distinct, ordered ids.
    fn next_id(&mut self, created_at: OffsetDateTime) -> String {
        let now_ms = (created_at.unix_timestamp_nanos() / 1_000_000) as i64;
        self.last_id = now_ms.max(self.last_id + 1);
        self.last_id.to_string()
    }
}
