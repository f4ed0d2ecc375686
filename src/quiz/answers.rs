use super::types::{AnswerValue, Question, QuestionKind, UserAnswer};

/// Records an answer, replacing any existing entry for the same question id.
/// The ledger is a mapping from question id to value, not an append-only log.
pub fn record_answer(answers: &mut Vec<UserAnswer>, answer: UserAnswer) {
    if let Some(existing) = answers.iter_mut().find(|a| a.question_id == answer.question_id) {
        *existing = answer;
    } else {
        answers.push(answer);
    }
}

pub fn find_answer(answers: &[UserAnswer], question_id: u32) -> Option<&UserAnswer> {
    answers.iter().find(|a| a.question_id == question_id)
}

/// Whether a question counts as answered. Text-input questions require a
/// non-empty trimmed string; every other type is answered as soon as any
/// entry exists for it (a slider at 0 counts).
pub fn is_answered(question: &Question, answers: &[UserAnswer]) -> bool {
    let Some(answer) = find_answer(answers, question.id) else {
        return false;
    };
    match question.kind {
        QuestionKind::TextInput => match &answer.value {
            AnswerValue::Text(text) => !text.trim().is_empty(),
            _ => false,
        },
        _ => true,
    }
}
