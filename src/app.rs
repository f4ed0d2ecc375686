//! The application-level quiz session state machine. Session state is an
//! explicit value with defined transitions, persisted through the key-value
//! store on every change so a session survives restarts:
//!
//! NoSession -> InProgress (start), InProgress -> InProgress (answer),
//! InProgress -> Completed (final question scored, saved state deleted),
//! InProgress -> Abandoned (restart, saved state deleted).

use log::info;
use rand::Rng;

use crate::ai::types::NamedTrait;
use crate::quiz::answers::{find_answer, is_answered, record_answer};
use crate::quiz::archetype::{resolve_archetype, Archetype};
use crate::quiz::bank::QUESTION_BANK;
use crate::quiz::profile::{build_chart_data, build_profile_text, TraitScoreData};
use crate::quiz::scoring::compute_scores;
use crate::quiz::session::build_session;
use crate::quiz::types::{AnswerValue, PersonalityDimensions, Question, TraitKey, UserAnswer};
use crate::storage::progress::{clear_progress, load_progress, save_progress, SavedQuizState};
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPhase {
    Start,
    Quiz,
    Results,
}

#[derive(Debug, Clone)]
pub struct QuizResults {
    pub scores: PersonalityDimensions,
    pub archetype: &'static Archetype,
    pub chart_data: TraitScoreData,
    pub explained_traits: Vec<NamedTrait>,
    pub profile_text: String,
}

/// Outcome of advancing past the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved { pillar_completed: Option<String> },
    Finished,
}

pub struct QuizApp<S: KeyValueStore> {
    store: S,
    phase: AppPhase,
    questions: Vec<Question>,
    answers: Vec<UserAnswer>,
    question_index: usize,
    results: Option<QuizResults>,
}

impl<S: KeyValueStore> QuizApp<S> {
    /// Opens the app, resuming a persisted in-progress session when a valid
    /// one exists. Corrupt or stale saved state is discarded silently.
    pub fn new(mut store: S) -> Self {
        let resumed = load_progress(&mut store);
        match resumed {
            Some(SavedQuizState { questions, answers, question_index }) => {
                info!(
                    "Resuming saved quiz at question {} of {}",
                    question_index + 1,
                    questions.len()
                );
                Self {
                    store,
                    phase: AppPhase::Quiz,
                    questions,
                    answers,
                    question_index,
                    results: None,
                }
            }
            None => Self {
                store,
                phase: AppPhase::Start,
                questions: Vec::new(),
                answers: Vec::new(),
                question_index: 0,
                results: None,
            },
        }
    }

    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.question_index)
    }

    /// Percentage of questions completed, 0-100.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            0.0
        } else {
            (self.question_index as f64 / self.questions.len() as f64) * 100.0
        }
    }

    pub fn is_current_answered(&self) -> bool {
        self.current_question()
            .map(|q| is_answered(q, &self.answers))
            .unwrap_or(false)
    }

    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Builds a fresh randomized session and enters the quiz.
    pub fn start_quiz<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions = build_session(&QUESTION_BANK, rng);
        self.answers.clear();
        self.question_index = 0;
        self.results = None;
        self.phase = AppPhase::Quiz;
        self.save();
        info!("Quiz started with {} questions", self.questions.len());
    }

    /// Upserts an answer and resaves the whole session state.
    pub fn record_answer(&mut self, answer: UserAnswer) {
        if self.phase != AppPhase::Quiz {
            return;
        }
        record_answer(&mut self.answers, answer);
        self.save();
    }

    /// Advances to the next question, or scores the session when the current
    /// question was the last one. Returns `None` outside the quiz phase.
    pub fn next_question(&mut self) -> Option<Advance> {
        if self.phase != AppPhase::Quiz {
            return None;
        }

        if self.question_index < self.questions.len().saturating_sub(1) {
            let pillar_completed = self.pillar_completion_message();
            self.question_index += 1;
            self.save();
            Some(Advance::Moved { pillar_completed })
        } else {
            self.finish();
            Some(Advance::Finished)
        }
    }

    /// Abandons any session in progress and returns to the start screen.
    pub fn restart(&mut self) {
        self.phase = AppPhase::Start;
        self.questions.clear();
        self.answers.clear();
        self.question_index = 0;
        self.results = None;
        clear_progress(&mut self.store);
        info!("Quiz restarted");
    }

    /// Section-complete message shown when the current question closes out a
    /// scored pillar, i.e. the next question belongs to a different trait.
    fn pillar_completion_message(&self) -> Option<String> {
        let current = self.current_question()?;
        let next = self.questions.get(self.question_index + 1)?;
        if current.trait_key != next.trait_key && current.trait_key.dimension().is_some() {
            Some(format!("{} section complete!", current.trait_key.pillar_name()))
        } else {
            None
        }
    }

    fn finish(&mut self) {
        let scores = compute_scores(&self.questions, &self.answers);
        let archetype = resolve_archetype(&scores);
        let qualitative = self.qualitative_answer();
        let profile_text = build_profile_text(&scores, archetype, qualitative.as_deref());

        self.results = Some(QuizResults {
            scores,
            archetype,
            chart_data: build_chart_data(&scores),
            explained_traits: vec![NamedTrait {
                name: archetype.name.to_string(),
                description: archetype.description.to_string(),
            }],
            profile_text,
        });
        self.phase = AppPhase::Results;
        clear_progress(&mut self.store);
        info!("Quiz completed: {} ({})", archetype.name, archetype.code);
    }

    /// The committed free-text answer to the qualitative question, if any.
    fn qualitative_answer(&self) -> Option<String> {
        let question = self
            .questions
            .iter()
            .find(|q| q.trait_key == TraitKey::QualitativeFulfillment)?;
        match &find_answer(&self.answers, question.id)?.value {
            AnswerValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn save(&mut self) {
        let state = SavedQuizState {
            questions: self.questions.clone(),
            answers: self.answers.clone(),
            question_index: self.question_index,
        };
        if let Err(e) = save_progress(&mut self.store, &state) {
            log::error!("Failed to save quiz progress: {}", e);
        }
    }
}
