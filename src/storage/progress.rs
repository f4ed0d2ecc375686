//! Save/restore of in-progress quiz state, keyed by a fixed storage key.
//!
//! A saved record is only honored when it is well-formed AND still resumable:
//! malformed JSON, an empty question list, or a question index at or past the
//! end are all treated as corrupt, and the key is removed rather than
//! surfacing an error.

use log::warn;
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, Result};
use crate::quiz::constants::PROGRESS_STORAGE_KEY;
use crate::quiz::types::{Question, UserAnswer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuizState {
    pub questions: Vec<Question>,
    pub answers: Vec<UserAnswer>,
    pub question_index: usize,
}

pub fn save_progress(store: &mut dyn KeyValueStore, state: &SavedQuizState) -> Result<()> {
    let json = serde_json::to_string(state)?;
    store.set(PROGRESS_STORAGE_KEY, &json)
}

/// Loads a resumable session, discarding anything corrupt or stale.
pub fn load_progress(store: &mut dyn KeyValueStore) -> Option<SavedQuizState> {
    let json = store.get(PROGRESS_STORAGE_KEY)?;
    match serde_json::from_str::<SavedQuizState>(&json) {
        Ok(state) if !state.questions.is_empty() && state.question_index < state.questions.len() => {
            Some(state)
        }
        Ok(_) => {
            warn!("Discarding stale quiz progress");
            clear_progress(store);
            None
        }
        Err(e) => {
            warn!("Discarding unreadable quiz progress: {}", e);
            clear_progress(store);
            None
        }
    }
}

pub fn clear_progress(store: &mut dyn KeyValueStore) {
    if let Err(e) = store.remove(PROGRESS_STORAGE_KEY) {
        warn!("Failed to clear quiz progress: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank::QUESTION_BANK;
    use crate::quiz::session::build_session;
    use crate::quiz::types::AnswerValue;
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_with_index(question_index: usize) -> SavedQuizState {
        let questions = build_session(&QUESTION_BANK, &mut StdRng::seed_from_u64(11));
        let answers = vec![
            UserAnswer { question_id: 1, value: AnswerValue::Number(25.0) },
            UserAnswer { question_id: 2, value: AnswerValue::Text("Organized".to_string()) },
        ];
        SavedQuizState { questions, answers, question_index }
    }

    #[test]
    fn saved_state_round_trips() {
        let mut store = MemoryStore::new();
        let state = state_with_index(3);

        save_progress(&mut store, &state).unwrap();
        let restored = load_progress(&mut store).unwrap();

        assert_eq!(restored, state);
    }

    #[test]
    fn index_at_question_count_is_rejected_as_stale() {
        let mut store = MemoryStore::new();
        let state = state_with_index(16);

        save_progress(&mut store, &state).unwrap();
        assert_eq!(load_progress(&mut store), None);
        // The stale record is removed, not left behind.
        assert_eq!(store.get(PROGRESS_STORAGE_KEY), None);
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let mut store = MemoryStore::new();
        let state = SavedQuizState {
            questions: Vec::new(),
            answers: Vec::new(),
            question_index: 0,
        };

        save_progress(&mut store, &state).unwrap();
        assert_eq!(load_progress(&mut store), None);
    }

    #[test]
    fn malformed_json_is_discarded_and_key_removed() {
        let mut store = MemoryStore::new();
        store.set(PROGRESS_STORAGE_KEY, "{\"questions\": oops").unwrap();

        assert_eq!(load_progress(&mut store), None);
        assert_eq!(store.get(PROGRESS_STORAGE_KEY), None);
    }

    #[test]
    fn absent_key_is_simply_no_session() {
        let mut store = MemoryStore::new();
        assert_eq!(load_progress(&mut store), None);
    }
}
