#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::analytics::compute_analytics;
    use crate::store::{KeyValueStore, MemoryStore, StoreError, VOTES_KEY};
    use crate::survey_state::SurveyState;
    use crate::validation::{
        validate_new_survey, ValidationError, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
    };

    fn state() -> SurveyState {
        SurveyState::new(Rc::new(MemoryStore::new()))
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn add_survey_preserves_insertion_order() {
        let mut s = state();
        assert!(s.add_survey("First", None));
        assert!(s.add_survey("Second", Some("details".into())));
        let titles: Vec<_> = s.surveys().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn survey_ids_are_unique_and_increasing() {
        let mut s = state();
        for i in 0..10 {
            assert!(s.add_survey(&format!("Survey {i}"), None));
        }
        let ids: Vec<i64> = s.surveys().iter().map(|s| s.id.parse().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn blank_titles_are_rejected() {
        let mut s = state();
        assert!(!s.add_survey("", None));
        assert!(!s.add_survey("   ", Some("ignored".into())));
        assert!(s.surveys().is_empty());
    }

    #[test]
    fn first_vote_counts_repeat_votes_do_not() {
        let mut s = state();
        s.add_survey("Color", None);
        let id = s.surveys()[0].id.clone();
        assert_eq!(s.vote_count(&id), 0);

        s.add_vote(&id);
        assert_eq!(s.vote_count(&id), 1);
        assert!(s.has_voted(&id));

        s.add_vote(&id);
        assert_eq!(s.vote_count(&id), 1);
        assert_eq!(s.total_votes(), 1);
    }

    #[test]
    fn has_voted_mirrors_the_vote_record() {
        let mut s = state();
        s.add_survey("A", None);
        s.add_survey("B", None);
        let (a, b) = (s.surveys()[0].id.clone(), s.surveys()[1].id.clone());

        s.add_vote(&b);
        assert!(!s.has_voted(&a));
        assert!(s.has_voted(&b));
        assert_eq!(s.user_votes(), [b]);
    }

    #[test]
    fn ranking_sorts_by_votes_and_keeps_ties_in_creation_order() {
        let mut s = state();
        for title in ["A", "B", "C", "D"] {
            s.add_survey(title, None);
        }
        let third = s.surveys()[2].id.clone();
        s.add_vote(&third);

        let ranked: Vec<_> = s.top_surveys(None).into_iter().map(|s| s.title).collect();
        assert_eq!(ranked, ["C", "A", "B", "D"]);
    }

    #[test]
    fn ranking_respects_the_limit() {
        let mut s = state();
        for title in ["A", "B", "C"] {
            s.add_survey(title, None);
        }
        let second = s.surveys()[1].id.clone();
        s.add_vote(&second);

        let top: Vec<_> = s.top_surveys(Some(2)).into_iter().map(|s| s.title).collect();
        assert_eq!(top, ["B", "A"]);
        assert!(s.top_surveys(Some(0)).is_empty());
    }

    #[test]
    fn single_vote_moves_second_survey_to_first() {
        let mut s = state();
        s.add_survey("A", None);
        s.add_survey("B", None);
        let b = s.surveys()[1].id.clone();

        s.add_vote(&b);
        let ranked: Vec<_> = s.top_surveys(None).into_iter().map(|s| s.title).collect();
        assert_eq!(ranked, ["B", "A"]);
        assert_eq!(s.total_votes(), 1);
    }

    #[test]
    fn state_round_trips_through_the_store() {
        let store = Rc::new(MemoryStore::new());
        let mut original = SurveyState::new(store.clone());
        original.add_survey("Lunch spot", Some("Where to eat on Friday".into()));
        original.add_survey("Team name", None);
        let id = original.surveys()[0].id.clone();
        original.add_vote(&id);

        let mut restored = SurveyState::new(store);
        restored.load_persisted();
        assert_eq!(original, restored);
    }

    #[test]
    fn malformed_votes_entry_falls_back_to_an_empty_tally() {
        let store = Rc::new(MemoryStore::new());
        store.set(VOTES_KEY, "{not json").unwrap();

        let mut s = SurveyState::new(store);
        s.load_persisted();
        assert_eq!(s.total_votes(), 0);
    }

    #[test]
    fn unavailable_store_still_leaves_a_working_session() {
        let mut s = SurveyState::new(Rc::new(BrokenStore));
        s.load_persisted();
        assert!(s.add_survey("Ephemeral", None));
        let id = s.surveys()[0].id.clone();
        s.add_vote(&id);
        assert_eq!(s.vote_count(&id), 1);
    }

    #[test]
    fn restored_session_keeps_issuing_increasing_ids() {
        let store = Rc::new(MemoryStore::new());
        let mut first = SurveyState::new(store.clone());
        first.add_survey("Old", None);
        let old_id: i64 = first.surveys()[0].id.parse().unwrap();

        let mut second = SurveyState::new(store);
        second.load_persisted();
        second.add_survey("New", None);
        let new_id: i64 = second.surveys()[1].id.parse().unwrap();
        assert!(new_id > old_id);
    }

    #[test]
    fn description_key_is_absent_when_none() {
        let mut s = state();
        s.add_survey("Bare", None);
        s.add_survey("Documented", Some("has one".into()));

        let bare = serde_json::to_value(&s.surveys()[0]).unwrap();
        assert!(bare.get("description").is_none());
        assert!(bare.get("createdAt").is_some());

        let documented = serde_json::to_value(&s.surveys()[1]).unwrap();
        assert_eq!(documented["description"], "has one");
    }

    #[test]
    fn analytics_cover_empty_and_populated_states() {
        let mut s = state();
        let empty = compute_analytics(&s);
        assert_eq!(empty.total_surveys, 0);
        assert_eq!(empty.average_votes_per_survey, 0.0);

        s.add_survey("A", None);
        s.add_survey("B", None);
        let id = s.surveys()[0].id.clone();
        s.add_vote(&id);

        let populated = compute_analytics(&s);
        assert_eq!(populated.total_votes, 1);
        assert_eq!(populated.total_surveys, 2);
        assert_eq!(populated.average_votes_per_survey, 0.5);
    }

    #[test]
    fn validation_limits() {
        assert!(validate_new_survey("Favorite color", None).is_ok());
        assert!(matches!(
            validate_new_survey("  ", None),
            Err(ValidationError::EmptyTitle)
        ));

        let long_title = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert!(matches!(
            validate_new_survey(&long_title, None),
            Err(ValidationError::TitleTooLong)
        ));

        let long_description = "y".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(matches!(
            validate_new_survey("ok", Some(long_description.as_str())),
            Err(ValidationError::DescriptionTooLong)
        ));
    }
}
