//! Structured records returned by the analysis collaborator. The schema is
//! owned by the collaborator; these mirror its wire shape (camelCase keys).

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeSummary {
    pub name: String,
    pub description: String,
}

/// A named strength, growth area, or explained trait.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NamedTrait {
    pub name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestion {
    pub career: String,
    pub description: String,
    pub reasoning: String,
    pub required_skills: Vec<String>,
    pub day_in_the_life: String,
    pub potential_challenges: Vec<String>,
    pub growth_opportunities: String,
    pub suggested_first_steps: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysis {
    pub archetype: ArchetypeSummary,
    pub strengths: Vec<NamedTrait>,
    pub growth_areas: Vec<NamedTrait>,
    pub suggestions: Vec<CareerSuggestion>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityFit {
    /// Score from 1 to 10.
    pub score: i32,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillOverlap {
    pub natural_skills: Vec<String>,
    pub skills_to_develop: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerComparison {
    pub career_name: String,
    pub personality_fit: PersonalityFit,
    pub skill_overlap: SkillOverlap,
    pub long_term_potential: String,
    pub work_life_balance: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    pub suggested_resource: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: String,
    pub pro_tip: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOption {
    pub text: String,
    pub outcome: String,
    pub feedback: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerSimulation {
    pub scenario: String,
    pub options: Vec<SimulationOption>,
}
