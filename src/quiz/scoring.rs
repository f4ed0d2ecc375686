use super::answers::find_answer;
use super::constants::{NORMALIZATION_RANGE, SLIDER_MAX_EFFECT, SLIDER_NEUTRAL};
use super::types::{
    AnswerOption, AnswerValue, Dimension, PersonalityDimensions, Question, QuestionKind, TraitKey,
    UserAnswer,
};

/// Reduces a session's questions and answer ledger into normalized
/// per-dimension scores in [-100, 100].
///
/// Every scored question contributes to the maximum achievable weight
/// (`max_scores`) whether or not it was answered, so a skipped question
/// dilutes the final score toward 0 rather than shrinking the denominator.
/// For choice questions the denominator accumulates for every dimension any
/// option's effects touch, not just the question's own trait key.
pub fn compute_scores(questions: &[Question], answers: &[UserAnswer]) -> PersonalityDimensions {
    let mut scores = PersonalityDimensions::default();
    let mut max_scores = PersonalityDimensions::default();

    for question in questions {
        // Exclude qualitative questions from scoring
        if question.trait_key == TraitKey::QualitativeFulfillment {
            continue;
        }

        let answer = find_answer(answers, question.id);
        match &question.kind {
            QuestionKind::MultipleChoice { options } | QuestionKind::ImageChoice { options } => {
                for dim in Dimension::ALL {
                    let max_effect = options
                        .iter()
                        .filter_map(|option| option.effect(dim))
                        .map(f64::abs)
                        .fold(0.0_f64, f64::max);
                    *max_scores.get_mut(dim) += max_effect;

                    if let Some(answer) = answer {
                        if let Some(weight) =
                            selected_option(options, answer).and_then(|o| o.effect(dim))
                        {
                            *scores.get_mut(dim) += weight;
                        }
                    }
                }
            }
            QuestionKind::Slider { .. } => {
                if let Some(dim) = question.trait_key.dimension() {
                    *max_scores.get_mut(dim) += SLIDER_MAX_EFFECT;
                    if let Some(AnswerValue::Number(value)) = answer.map(|a| &a.value) {
                        // Map slider 0-100 to a score from -SLIDER_MAX_EFFECT
                        // to +SLIDER_MAX_EFFECT
                        *scores.get_mut(dim) +=
                            ((*value - SLIDER_NEUTRAL) / SLIDER_NEUTRAL) * SLIDER_MAX_EFFECT;
                    }
                }
            }
            QuestionKind::TextInput
            | QuestionKind::Ranking { .. }
            | QuestionKind::Rating { .. } => {}
        }
    }

    for dim in Dimension::ALL {
        if max_scores.get(dim) > 0.0 {
            *scores.get_mut(dim) = scores.get(dim) / max_scores.get(dim) * NORMALIZATION_RANGE;
        }
    }

    scores
}

/// The option whose text equals the stored answer value, if the answer is a
/// string at all.
fn selected_option<'a>(options: &'a [AnswerOption], answer: &UserAnswer) -> Option<&'a AnswerOption> {
    match &answer.value {
        AnswerValue::Text(text) => options.iter().find(|o| o.text == *text),
        _ => None,
    }
}
