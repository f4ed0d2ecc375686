pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::*;

use serde::{Deserialize, Serialize};

/// Lifecycle of an analysis request as surfaced to the UI layer. Collaborator
/// failures land in `Error`; the core does not retry them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisState {
    Idle,
    Loading,
    Success,
    Error,
}

impl AnalysisState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisState::Success | AnalysisState::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AnalysisState::Loading).unwrap(), r#""loading""#);
        let state: AnalysisState = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(state, AnalysisState::Error);
    }

    #[test]
    fn only_success_and_error_are_terminal() {
        assert!(!AnalysisState::Idle.is_terminal());
        assert!(!AnalysisState::Loading.is_terminal());
        assert!(AnalysisState::Success.is_terminal());
        assert!(AnalysisState::Error.is_terminal());
    }
}
