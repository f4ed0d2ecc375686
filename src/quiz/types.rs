use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five scored personality axes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Mind,     // Introvert (-) to Extrovert (+)
    Energy,   // Observant (-) to Intuitive (+)
    Nature,   // Thinking (-) to Feeling (+)
    Tactics,  // Judging (-) to Prospecting (+)
    Identity, // Assertive (-) to Turbulent (+)
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Mind,
        Dimension::Energy,
        Dimension::Nature,
        Dimension::Tactics,
        Dimension::Identity,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Mind => "Mind",
            Dimension::Energy => "Energy",
            Dimension::Nature => "Nature",
            Dimension::Tactics => "Tactics",
            Dimension::Identity => "Identity",
        };
        write!(f, "{}", name)
    }
}

/// The trait a question is nominally about: a scored dimension, or the
/// qualitative marker for the free-text question that is excluded from all
/// scoring arithmetic.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TraitKey {
    Mind,
    Energy,
    Nature,
    Tactics,
    Identity,
    QualitativeFulfillment,
}

impl TraitKey {
    /// The scored dimension this key refers to, if any.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            TraitKey::Mind => Some(Dimension::Mind),
            TraitKey::Energy => Some(Dimension::Energy),
            TraitKey::Nature => Some(Dimension::Nature),
            TraitKey::Tactics => Some(Dimension::Tactics),
            TraitKey::Identity => Some(Dimension::Identity),
            TraitKey::QualitativeFulfillment => None,
        }
    }

    /// Pillar name as shown in section-complete messages.
    pub fn pillar_name(&self) -> &'static str {
        match self {
            TraitKey::Mind => "Mind",
            TraitKey::Energy => "Energy",
            TraitKey::Nature => "Nature",
            TraitKey::Tactics => "Tactics",
            TraitKey::Identity => "Identity",
            TraitKey::QualitativeFulfillment => "Qualitative",
        }
    }
}

/// Signed effect weights an answer option contributes toward dimensions.
pub type EffectMap = BTreeMap<Dimension, f64>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    /// For choice questions, the score changes this option applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// For ranking/rating options, identifies what is being ranked/rated.
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "trait")]
    pub trait_name: Option<String>,
}

impl AnswerOption {
    pub fn effect(&self, dim: Dimension) -> Option<f64> {
        self.effects.as_ref().and_then(|e| e.get(&dim)).copied()
    }
}

/// The per-type payload of a question. One variant per question type, each
/// carrying only the fields that type needs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice { options: Vec<AnswerOption> },
    ImageChoice { options: Vec<AnswerOption> },
    Slider { labels: [String; 2] },
    Ranking { options: Vec<AnswerOption> },
    Rating { options: Vec<AnswerOption> },
    TextInput,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Session-local id, unique within a built session.
    pub id: u32,
    pub text: String,
    pub trait_key: TraitKey,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingAnswer {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub value: f64,
}

/// The value a user committed for one question.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    TextList(Vec<String>),
    Ratings(Vec<RatingAnswer>),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: u32,
    pub value: AnswerValue,
}

/// Normalized per-dimension scores, each in [-100, 100] after normalization.
/// Negative values lean toward the first pole (Introvert/Observant/Thinking/
/// Judging/Assertive), positive toward the second.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PersonalityDimensions {
    pub mind: f64,
    pub energy: f64,
    pub nature: f64,
    pub tactics: f64,
    pub identity: f64,
}

impl PersonalityDimensions {
    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Mind => self.mind,
            Dimension::Energy => self.energy,
            Dimension::Nature => self.nature,
            Dimension::Tactics => self.tactics,
            Dimension::Identity => self.identity,
        }
    }

    pub fn get_mut(&mut self, dim: Dimension) -> &mut f64 {
        match dim {
            Dimension::Mind => &mut self.mind,
            Dimension::Energy => &mut self.energy,
            Dimension::Nature => &mut self.nature,
            Dimension::Tactics => &mut self.tactics,
            Dimension::Identity => &mut self.identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_serializes_to_stored_wire_format() {
        let question = Question {
            id: 3,
            text: "My ideal weekend involves more:".to_string(),
            trait_key: TraitKey::Mind,
            kind: QuestionKind::Slider {
                labels: [
                    "Quiet time for myself".to_string(),
                    "Activities with other people".to_string(),
                ],
            },
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "slider");
        assert_eq!(json["traitKey"], "mind");
        assert_eq!(json["labels"][0], "Quiet time for myself");
    }

    #[test]
    fn question_deserializes_from_stored_wire_format() {
        let json = r#"{
            "id": 1,
            "text": "After a social event, you feel:",
            "type": "multiple-choice",
            "traitKey": "mind",
            "options": [
                { "text": "Drained and in need of solitude", "effects": { "mind": -20 } },
                { "text": "Energized and ready for more", "effects": { "mind": 20 } }
            ]
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.trait_key, TraitKey::Mind);
        match &question.kind {
            QuestionKind::MultipleChoice { options } => {
                assert_eq!(options.len(), 2);
                assert_eq!(options[0].effect(Dimension::Mind), Some(-20.0));
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn qualitative_trait_key_round_trips() {
        let json = serde_json::to_string(&TraitKey::QualitativeFulfillment).unwrap();
        assert_eq!(json, r#""qualitative_fulfillment""#);
        let back: TraitKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TraitKey::QualitativeFulfillment);
    }

    #[test]
    fn answer_value_distinguishes_numbers_and_text() {
        let slider: UserAnswer = serde_json::from_str(r#"{"questionId":3,"value":50}"#).unwrap();
        assert_eq!(slider.value, AnswerValue::Number(50.0));

        let choice: UserAnswer =
            serde_json::from_str(r#"{"questionId":1,"value":"Energized and ready for more"}"#)
                .unwrap();
        assert_eq!(
            choice.value,
            AnswerValue::Text("Energized and ready for more".to_string())
        );
    }
}
