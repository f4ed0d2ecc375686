use rand::seq::SliceRandom;
use rand::Rng;

use super::bank::QuestionBank;
use super::types::Question;

/// Builds a fresh quiz session from the bank: flattens all pillars into one
/// sequence, shuffles it with the provided randomness source, and reassigns
/// sequential ids `1..=N` so downstream answer-matching uses session-local
/// ids rather than bank ids.
pub fn build_session<R: Rng + ?Sized>(bank: &QuestionBank, rng: &mut R) -> Vec<Question> {
    let mut questions: Vec<Question> = bank.questions().cloned().collect();
    questions.shuffle(rng);
    for (index, question) in questions.iter_mut().enumerate() {
        question.id = index as u32 + 1;
    }
    questions
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::quiz::bank::QUESTION_BANK;

    #[test]
    fn session_contains_every_bank_question_renumbered() {
        let mut rng = StdRng::seed_from_u64(7);
        let session = build_session(&QUESTION_BANK, &mut rng);

        assert_eq!(session.len(), QUESTION_BANK.len());
        for (index, question) in session.iter().enumerate() {
            assert_eq!(question.id, index as u32 + 1);
        }

        let mut texts: Vec<&str> = session.iter().map(|q| q.text.as_str()).collect();
        let mut bank_texts: Vec<&str> = QUESTION_BANK.questions().map(|q| q.text.as_str()).collect();
        texts.sort_unstable();
        bank_texts.sort_unstable();
        assert_eq!(texts, bank_texts);
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let first = build_session(&QUESTION_BANK, &mut StdRng::seed_from_u64(42));
        let second = build_session(&QUESTION_BANK, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
