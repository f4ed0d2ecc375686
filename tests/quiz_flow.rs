//! End-to-end flow: a full session answered toward fixed poles must land on
//! the expected archetype, produce the expected profile text, and leave the
//! persistence key in the right state at every phase.

use careerfinder_lib::app::{Advance, AppPhase, QuizApp};
use careerfinder_lib::quiz::constants::PROGRESS_STORAGE_KEY;
use careerfinder_lib::quiz::types::{
    AnswerValue, Dimension, Question, QuestionKind, TraitKey, UserAnswer,
};
use careerfinder_lib::storage::{KeyValueStore, MemoryStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Picks the option pushing `dim` as far as `want_positive` says; sliders use
/// the matching endpoint.
fn extreme_answer(question: &Question, want_positive: bool) -> AnswerValue {
    match &question.kind {
        QuestionKind::MultipleChoice { options } | QuestionKind::ImageChoice { options } => {
            let dim = question.trait_key.dimension().expect("scored question");
            let pick = options
                .iter()
                .max_by(|a, b| {
                    let a = a.effect(dim).unwrap_or(0.0);
                    let b = b.effect(dim).unwrap_or(0.0);
                    let (a, b) = if want_positive { (a, b) } else { (-a, -b) };
                    a.partial_cmp(&b).unwrap()
                })
                .expect("options are non-empty");
            AnswerValue::Text(pick.text.clone())
        }
        QuestionKind::Slider { .. } => {
            AnswerValue::Number(if want_positive { 100.0 } else { 0.0 })
        }
        QuestionKind::TextInput => AnswerValue::Text("Building useful things.".to_string()),
        QuestionKind::Ranking { .. } | QuestionKind::Rating { .. } => {
            AnswerValue::Text(String::new())
        }
    }
}

#[test]
fn fully_negative_session_resolves_to_istj_with_turbulent_identity() {
    let mut app = QuizApp::new(MemoryStore::new());
    app.start_quiz(&mut StdRng::seed_from_u64(2024));

    loop {
        let question = app.current_question().cloned().expect("question available");
        // Most-negative for mind/energy/nature/tactics, most-positive for
        // identity.
        let want_positive = question.trait_key == TraitKey::Identity;
        app.record_answer(UserAnswer {
            question_id: question.id,
            value: extreme_answer(&question, want_positive),
        });
        match app.next_question().expect("in quiz phase") {
            Advance::Moved { .. } => continue,
            Advance::Finished => break,
        }
    }

    assert_eq!(app.phase(), AppPhase::Results);
    let results = app.results().expect("results computed");

    assert_eq!(results.archetype.code, "ISTJ");
    assert_eq!(results.archetype.name, "The Logistician");
    for dim in [Dimension::Mind, Dimension::Energy, Dimension::Nature, Dimension::Tactics] {
        assert_eq!(results.scores.get(dim), -100.0);
    }
    assert_eq!(results.scores.identity, 100.0);

    assert!(results.profile_text.contains("100% Introverted"));
    assert!(results.profile_text.contains("100% Turbulent"));
    assert!(results
        .profile_text
        .contains("**User's Definition of a Fulfilling Career:** \"Building useful things.\""));

    // Chart values sit on the 0-100 scale: -100 -> 0, +100 -> 100.
    assert_eq!(results.chart_data.values, [0.0, 0.0, 0.0, 0.0, 100.0]);

    // Completion deletes the persisted session.
    assert_eq!(app.store_mut().get(PROGRESS_STORAGE_KEY), None);
}

#[test]
fn mid_quiz_state_survives_a_restart_of_the_app() {
    let mut app = QuizApp::new(MemoryStore::new());
    app.start_quiz(&mut StdRng::seed_from_u64(7));

    for _ in 0..3 {
        let question = app.current_question().cloned().unwrap();
        app.record_answer(UserAnswer {
            question_id: question.id,
            value: extreme_answer(&question, false),
        });
        assert!(matches!(app.next_question(), Some(Advance::Moved { .. })));
    }

    let saved_questions = app.questions().to_vec();
    let saved_answers = app.answers().to_vec();
    let store = std::mem::replace(app.store_mut(), MemoryStore::new());
    drop(app);

    let resumed = QuizApp::new(store);
    assert_eq!(resumed.phase(), AppPhase::Quiz);
    assert_eq!(resumed.question_index(), 3);
    assert_eq!(resumed.questions(), saved_questions.as_slice());
    assert_eq!(resumed.answers(), saved_answers.as_slice());
}

#[test]
fn stale_saved_state_is_dropped_on_load() {
    let mut seed_app = QuizApp::new(MemoryStore::new());
    seed_app.start_quiz(&mut StdRng::seed_from_u64(1));

    // Forge a record claiming the session already passed its last question.
    let mut forged: serde_json::Value =
        serde_json::from_str(&seed_app.store_mut().get(PROGRESS_STORAGE_KEY).unwrap()).unwrap();
    forged["questionIndex"] = serde_json::json!(16);

    let mut store = MemoryStore::new();
    store.set(PROGRESS_STORAGE_KEY, &forged.to_string()).unwrap();

    let mut app = QuizApp::new(store);
    assert_eq!(app.phase(), AppPhase::Start);
    assert_eq!(app.store_mut().get(PROGRESS_STORAGE_KEY), None);
}

#[test]
fn reanswering_a_question_keeps_one_ledger_entry() {
    let mut app = QuizApp::new(MemoryStore::new());
    app.start_quiz(&mut StdRng::seed_from_u64(3));

    let question = app.current_question().cloned().unwrap();
    app.record_answer(UserAnswer {
        question_id: question.id,
        value: extreme_answer(&question, false),
    });
    app.record_answer(UserAnswer {
        question_id: question.id,
        value: extreme_answer(&question, true),
    });

    assert_eq!(app.answers().len(), 1);
}
