use serde::Serialize;

use super::archetype::Archetype;
use super::types::PersonalityDimensions;

/// Chart-ready trait series: each dimension mapped from [-100, 100] onto a
/// 0-100 scale, in fixed label order. Styling belongs to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitScoreData {
    pub labels: [&'static str; 5],
    pub values: [f64; 5],
}

pub fn build_chart_data(scores: &PersonalityDimensions) -> TraitScoreData {
    // Convert -100 to 100 score to a 0 to 100 scale for the chart
    let to_percent = |score: f64| (score + 100.0) / 2.0;
    TraitScoreData {
        labels: ["Extroversion", "Intuition", "Feeling", "Prospecting", "Turbulence"],
        values: [
            to_percent(scores.mind),
            to_percent(scores.energy),
            to_percent(scores.nature),
            to_percent(scores.tactics),
            to_percent(scores.identity),
        ],
    }
}

/// Renders the structured profile text handed to the analysis collaborator.
/// This text is the collaborator's only context, so it must be stable and
/// information-complete: archetype, description, the five trait percentages,
/// and the user's own words when they gave any.
pub fn build_profile_text(
    scores: &PersonalityDimensions,
    archetype: &Archetype,
    qualitative_answer: Option<&str>,
) -> String {
    let mut parts = vec![
        format!("**Personality Archetype:** {} ({})", archetype.name, archetype.code),
        format!("**Archetype Description:** {}", archetype.description),
        "\n**Core Trait Analysis:**".to_string(),
        format!("- **Mind:** {}", toward_pole(scores.mind, "Extraverted", "Introverted")),
        format!("- **Energy:** {}", toward_pole(scores.energy, "Intuitive", "Observant")),
        format!("- **Nature:** {}", toward_pole(scores.nature, "Feeling", "Thinking")),
        format!("- **Tactics:** {}", toward_pole(scores.tactics, "Prospecting", "Judging")),
        format!("- **Identity:** {}", toward_pole(scores.identity, "Turbulent", "Assertive")),
    ];

    if let Some(answer) = qualitative_answer {
        let trimmed = answer.trim();
        if !trimmed.is_empty() {
            parts.push(format!(
                "\n**User's Definition of a Fulfilling Career:** \"{}\"",
                trimmed
            ));
        }
    }

    parts.join("\n")
}

fn toward_pole(score: f64, positive: &str, negative: &str) -> String {
    let val = ((score + 100.0) / 2.0).round() as i64;
    if score > 0.0 {
        format!("{}% {}", val, positive)
    } else {
        format!("{}% {}", 100 - val, negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::archetype::resolve_archetype;

    fn scores(mind: f64, energy: f64, nature: f64, tactics: f64, identity: f64) -> PersonalityDimensions {
        PersonalityDimensions { mind, energy, nature, tactics, identity }
    }

    #[test]
    fn chart_data_maps_scores_onto_zero_to_hundred() {
        let data = build_chart_data(&scores(-100.0, 0.0, 50.0, 100.0, -50.0));
        assert_eq!(
            data.labels,
            ["Extroversion", "Intuition", "Feeling", "Prospecting", "Turbulence"]
        );
        assert_eq!(data.values, [0.0, 50.0, 75.0, 100.0, 25.0]);
    }

    #[test]
    fn profile_text_names_archetype_and_poles() {
        let scores = scores(-100.0, -60.0, 30.0, -10.0, 100.0);
        let archetype = resolve_archetype(&scores);
        let text = build_profile_text(&scores, archetype, None);

        assert!(text.starts_with("**Personality Archetype:** The Logistician (ISTJ)"));
        assert!(text.contains("**Archetype Description:**"));
        assert!(text.contains("- **Mind:** 100% Introverted"));
        assert!(text.contains("- **Energy:** 80% Observant"));
        assert!(text.contains("- **Nature:** 65% Feeling"));
        assert!(text.contains("- **Tactics:** 55% Judging"));
        assert!(text.contains("- **Identity:** 100% Turbulent"));
    }

    #[test]
    fn zero_score_reports_fifty_percent_toward_the_negative_pole() {
        let scores = scores(0.0, 0.0, 0.0, 0.0, 0.0);
        let archetype = resolve_archetype(&scores);
        let text = build_profile_text(&scores, archetype, None);
        assert!(text.contains("- **Mind:** 50% Introverted"));
    }

    #[test]
    fn qualitative_answer_is_trimmed_and_quoted() {
        let scores = scores(10.0, 10.0, 10.0, 10.0, 10.0);
        let archetype = resolve_archetype(&scores);
        let text = build_profile_text(&scores, archetype, Some("  Helping people grow.  "));
        assert!(text.ends_with(
            "**User's Definition of a Fulfilling Career:** \"Helping people grow.\""
        ));
    }

    #[test]
    fn blank_qualitative_answer_is_omitted() {
        let scores = scores(10.0, 10.0, 10.0, 10.0, 10.0);
        let archetype = resolve_archetype(&scores);
        let with_blank = build_profile_text(&scores, archetype, Some("   "));
        let without = build_profile_text(&scores, archetype, None);
        assert_eq!(with_blank, without);
    }
}
