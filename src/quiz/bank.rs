//! The static question bank: five scored pillars of three questions each,
//! plus one qualitative free-text question. Process-wide data; a session
//! holds a derived, renumbered copy.

use once_cell::sync::Lazy;

use super::constants::{MILD_EFFECT, MODERATE_EFFECT, STRONG_EFFECT};
use super::types::{AnswerOption, Dimension, EffectMap, Question, QuestionKind, TraitKey};

pub struct Pillar {
    pub key: TraitKey,
    pub questions: Vec<Question>,
}

pub struct QuestionBank {
    pub pillars: Vec<Pillar>,
}

impl QuestionBank {
    /// All questions, in pillar order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.pillars.iter().flat_map(|p| p.questions.iter())
    }

    pub fn len(&self) -> usize {
        self.pillars.iter().map(|p| p.questions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub static QUESTION_BANK: Lazy<QuestionBank> = Lazy::new(default_bank);

fn effect(dim: Dimension, weight: f64) -> Option<EffectMap> {
    Some(EffectMap::from([(dim, weight)]))
}

fn choice(text: &str, dim: Dimension, weight: f64) -> AnswerOption {
    AnswerOption {
        text: text.to_string(),
        effects: effect(dim, weight),
        image_url: None,
        trait_name: None,
    }
}

fn image_choice(text: &str, dim: Dimension, weight: f64, image_url: &str) -> AnswerOption {
    AnswerOption {
        text: text.to_string(),
        effects: effect(dim, weight),
        image_url: Some(image_url.to_string()),
        trait_name: None,
    }
}

fn multiple_choice(id: u32, text: &str, key: TraitKey, options: Vec<AnswerOption>) -> Question {
    Question {
        id,
        text: text.to_string(),
        trait_key: key,
        kind: QuestionKind::MultipleChoice { options },
    }
}

fn slider(id: u32, text: &str, key: TraitKey, left: &str, right: &str) -> Question {
    Question {
        id,
        text: text.to_string(),
        trait_key: key,
        kind: QuestionKind::Slider {
            labels: [left.to_string(), right.to_string()],
        },
    }
}

fn default_bank() -> QuestionBank {
    use Dimension::*;

    QuestionBank {
        pillars: vec![
            Pillar {
                key: TraitKey::Mind, // Introvert (-) vs Extrovert (+)
                questions: vec![
                    multiple_choice(1, "After a social event, you feel:", TraitKey::Mind, vec![
                        choice("Drained and in need of solitude", Mind, -STRONG_EFFECT),
                        choice("A little tired, but generally content", Mind, -MILD_EFFECT),
                        choice("Energized and ready for more", Mind, STRONG_EFFECT),
                    ]),
                    multiple_choice(2, "In a group discussion, you are more likely to:", TraitKey::Mind, vec![
                        choice("Speak up frequently with your ideas", Mind, MODERATE_EFFECT),
                        choice("Listen carefully and speak when you have a well-formed thought", Mind, -MODERATE_EFFECT),
                    ]),
                    slider(3, "My ideal weekend involves more:", TraitKey::Mind,
                        "Quiet time for myself", "Activities with other people"),
                ],
            },
            Pillar {
                key: TraitKey::Energy, // Observant (-) vs Intuitive (+)
                questions: vec![
                    multiple_choice(4, "When learning something new, you prefer:", TraitKey::Energy, vec![
                        choice("Practical, hands-on experience", Energy, -STRONG_EFFECT),
                        choice("Exploring the underlying theories and concepts", Energy, STRONG_EFFECT),
                    ]),
                    multiple_choice(5, "You are more interested in:", TraitKey::Energy, vec![
                        choice("The reality of how things work now", Energy, -MODERATE_EFFECT),
                        choice("The possibilities of what things could be", Energy, MODERATE_EFFECT),
                    ]),
                    slider(6, "I tend to focus on:", TraitKey::Energy,
                        "Concrete details", "Abstract ideas"),
                ],
            },
            Pillar {
                key: TraitKey::Nature, // Thinking (-) vs Feeling (+)
                questions: vec![
                    multiple_choice(7, "When making a decision, you prioritize:", TraitKey::Nature, vec![
                        choice("Logic, efficiency, and objective truth", Nature, -STRONG_EFFECT),
                        choice("Harmony, empathy, and the impact on people", Nature, STRONG_EFFECT),
                    ]),
                    multiple_choice(8, "When a friend is upset, your first instinct is to:", TraitKey::Nature, vec![
                        choice("Offer emotional support and understanding", Nature, MODERATE_EFFECT),
                        choice("Help them analyze the problem and find a solution", Nature, -MODERATE_EFFECT),
                    ]),
                    slider(9, "My decision-making is guided more by:", TraitKey::Nature,
                        "My head", "My heart"),
                ],
            },
            Pillar {
                key: TraitKey::Tactics, // Judging (-) vs Prospecting (+)
                questions: vec![
                    multiple_choice(10, "When it comes to plans, you:", TraitKey::Tactics, vec![
                        choice("Prefer to have a detailed plan and stick to it", Tactics, -STRONG_EFFECT),
                        choice("See a plan as a rough guideline that can change", Tactics, MODERATE_EFFECT / 1.5),
                        choice("Prefer to keep your options open and be spontaneous", Tactics, STRONG_EFFECT),
                    ]),
                    Question {
                        id: 11,
                        text: "Which word describes you better?".to_string(),
                        trait_key: TraitKey::Tactics,
                        kind: QuestionKind::ImageChoice {
                            options: vec![
                                image_choice("Organized", Tactics, -STRONG_EFFECT,
                                    "https://picsum.photos/id/183/400/300"),
                                image_choice("Spontaneous", Tactics, STRONG_EFFECT,
                                    "https://picsum.photos/id/1015/400/300"),
                            ],
                        },
                    },
                    slider(12, "I prefer my work to be:", TraitKey::Tactics,
                        "Scheduled and structured", "Flexible and adaptable"),
                ],
            },
            Pillar {
                key: TraitKey::Identity, // Assertive (-) vs Turbulent (+)
                questions: vec![
                    multiple_choice(13, "When facing a challenge, you are more likely to feel:", TraitKey::Identity, vec![
                        choice("Confident and self-assured in your abilities", Identity, -STRONG_EFFECT),
                        choice("Anxious and worried about the outcome", Identity, STRONG_EFFECT),
                    ]),
                    multiple_choice(14, "After making a decision, you tend to:", TraitKey::Identity, vec![
                        choice("Feel confident in your choice", Identity, -MODERATE_EFFECT),
                        choice("Frequently second-guess yourself", Identity, MODERATE_EFFECT),
                    ]),
                    slider(15, "I am generally:", TraitKey::Identity,
                        "Calm and relaxed", "Prone to worry"),
                ],
            },
            Pillar {
                key: TraitKey::QualitativeFulfillment,
                questions: vec![Question {
                    id: 16,
                    text: "In one sentence, describe what \"a fulfilling career\" means to you."
                        .to_string(),
                    trait_key: TraitKey::QualitativeFulfillment,
                    kind: QuestionKind::TextInput,
                }],
            },
        ],
    }
}
