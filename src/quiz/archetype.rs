use std::collections::HashMap;

use lazy_static::lazy_static;

use super::types::PersonalityDimensions;

/// One of the sixteen fixed personality archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

lazy_static! {
    /// Static, read-only archetype catalogue keyed by 4-letter code.
    pub static ref ARCHETYPES: HashMap<&'static str, Archetype> = {
        let mut m = HashMap::new();
        // Analysts
        m.insert("INTJ", Archetype { code: "INTJ", name: "The Architect", description: "Imaginative and strategic thinkers, with a plan for everything. They are rational, quick-witted, and value knowledge and competence above all." });
        m.insert("INTP", Archetype { code: "INTP", name: "The Logician", description: "Innovative inventors with an unquenchable thirst for knowledge. They are logical, analytical, and enjoy exploring complex theories and ideas." });
        m.insert("ENTJ", Archetype { code: "ENTJ", name: "The Commander", description: "Bold, imaginative and strong-willed leaders, always finding or creating a way. They are decisive, efficient, and enjoy long-range planning and goal setting." });
        m.insert("ENTP", Archetype { code: "ENTP", name: "The Debater", description: "Smart and curious thinkers who cannot resist an intellectual challenge. They are energetic, quick-witted, and enjoy debating ideas from all angles." });
        // Diplomats
        m.insert("INFJ", Archetype { code: "INFJ", name: "The Advocate", description: "Quiet and mystical, yet very inspiring and tireless idealists. They are insightful, principled, and strive to have a lasting positive impact on the world." });
        m.insert("INFP", Archetype { code: "INFP", name: "The Mediator", description: "Poetic, kind and altruistic people, always eager to help a good cause. They are creative, idealistic, and guided by a strong inner moral compass." });
        m.insert("ENFJ", Archetype { code: "ENFJ", name: "The Protagonist", description: "Charismatic and inspiring leaders, able to mesmerize their listeners. They are passionate, altruistic, and excel at bringing people together." });
        m.insert("ENFP", Archetype { code: "ENFP", name: "The Campaigner", description: "Enthusiastic, creative and sociable free spirits, who can always find a reason to smile. They are outgoing, imaginative, and see life as a grand adventure." });
        // Sentinels
        m.insert("ISTJ", Archetype { code: "ISTJ", name: "The Logistician", description: "Practical and fact-minded individuals, whose reliability cannot be doubted. They are responsible, organized, and dedicated to upholding traditions and standards." });
        m.insert("ISFJ", Archetype { code: "ISFJ", name: "The Defender", description: "Very dedicated and warm protectors, always ready to defend their loved ones. They are supportive, reliable, and pay close attention to practical details." });
        m.insert("ESTJ", Archetype { code: "ESTJ", name: "The Executive", description: "Excellent administrators, unsurpassed at managing things or people. They are organized, efficient, and value order and structure." });
        m.insert("ESFJ", Archetype { code: "ESFJ", name: "The Consul", description: "Extraordinarily caring, social and popular people, always eager to help. They are warm-hearted, conscientious, and thrive in harmonious environments." });
        // Explorers
        m.insert("ISTP", Archetype { code: "ISTP", name: "The Virtuoso", description: "Bold and practical experimenters, masters of all kinds of tools. They are observant, adaptable, and enjoy hands-on problem-solving." });
        m.insert("ISFP", Archetype { code: "ISFP", name: "The Adventurer", description: "Flexible and charming artists, always ready to explore and experience something new. They are spontaneous, aesthetically inclined, and live in the present moment." });
        m.insert("ESTP", Archetype { code: "ESTP", name: "The Entrepreneur", description: "Smart, energetic and very perceptive people, who truly enjoy living on the edge. They are action-oriented, resourceful, and excel at navigating crises." });
        m.insert("ESFP", Archetype { code: "ESFP", name: "The Entertainer", description: "Spontaneous, energetic and enthusiastic people - life is never boring around them. They are outgoing, friendly, and love to be the center of attention." });
        m
    };
}

/// Maps normalized scores to an archetype by testing the sign of four
/// dimensions in fixed order. Identity (Assertive/Turbulent) is scored and
/// displayed but does not participate in the 4-letter code.
pub fn resolve_archetype(scores: &PersonalityDimensions) -> &'static Archetype {
    let mut code = String::with_capacity(4);
    code.push(if scores.mind < 0.0 { 'I' } else { 'E' });
    code.push(if scores.energy < 0.0 { 'S' } else { 'N' });
    code.push(if scores.nature < 0.0 { 'T' } else { 'F' });
    code.push(if scores.tactics < 0.0 { 'J' } else { 'P' });

    // All 16 sign combinations are present in the catalogue; a miss is a
    // programming defect, not a user-facing error.
    ARCHETYPES
        .get(code.as_str())
        .unwrap_or_else(|| panic!("archetype catalogue is missing code {}", code))
}
