use anyhow::Result;
use log::{error, info, warn};
use reqwest::Client;
use serde_json::{json, Value};

use super::types::{
    CareerComparison, CareerSimulation, CareerSuggestion, FullAnalysis, InterviewQuestion,
    LearningStep, NamedTrait,
};

const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Client for the generative-analysis collaborator. The engine owns only the
/// inputs it sends here; response schemas belong to the collaborator.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Builds a client from the embedded or runtime GEMINI_API_KEY, if any.
    pub fn from_env() -> Option<Self> {
        let api_key = option_env!("GEMINI_API_KEY")
            .map(str::to_string)
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.is_empty());

        match api_key {
            Some(key) => Some(Self::new(key)),
            None => {
                warn!("GEMINI_API_KEY not set - AI analysis features are disabled");
                None
            }
        }
    }

    async fn generate(&self, prompt: &str, response_schema: Option<Value>) -> Result<String> {
        let mut generation_config = json!({});
        if let Some(schema) = response_schema {
            generation_config = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }

        let request_body = json!({
            "contents": [ { "parts": [ { "text": prompt } ] } ],
            "generationConfig": generation_config,
        });

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, GEMINI_MODEL
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Gemini API request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Gemini API error {}: {}", status, body);
            return Err(anyhow::anyhow!("Gemini API error: {}", status));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse Gemini response: {}", e))?;

        let text = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("No content in Gemini response"))?
            .trim()
            .to_string();

        Ok(text)
    }

    /// The primary analysis: archetype restatement, strengths, growth areas,
    /// and five career suggestions, derived solely from the profile text.
    pub async fn get_analysis_and_suggestions(
        &self,
        personality_profile: &str,
    ) -> Result<FullAnalysis> {
        info!("Requesting personality analysis and career suggestions");

        let prompt = format!(
            r#"You are an expert career counselor and personality analyst, specializing in frameworks similar to the Myers-Briggs Type Indicator (MBTI).
A user has completed a comprehensive personality assessment. Their detailed profile is as follows:

{personality_profile}

Based *only* on the provided personality profile, perform a comprehensive analysis. Please provide the following in a structured JSON format:

1.  **Personality Archetype**: Use the exact archetype name and description provided in the profile. Do not invent a new one.
2.  **Strengths**: Identify 3 key strengths that are hallmarks of this specific personality archetype. For each, provide a name and a brief, insightful description of how this strength manifests professionally.
3.  **Growth Areas**: Identify 2-3 potential areas for growth that are common challenges for this archetype. Frame these constructively as opportunities for development. For each, provide a name and a brief description.
4.  **Career Suggestions**: Suggest FIVE distinct and well-suited career paths. For each career, you MUST provide:
    a. The career title.
    b. A concise one-paragraph description of the career.
    c. A brief but specific explanation for why it aligns with the user's personality profile, referencing their core traits (e.g., "Your combination of Introversion and Intuition makes you ideal for...").
    d. A list of 3-5 key skills required for this career.
    e. A detailed "Day-in-the-Life" narrative. This should be a multi-paragraph, engaging story that walks the user through a typical workday from morning to evening, highlighting key tasks, interactions, and the general atmosphere of the job, all tailored to their personality type.
    f. A list of 2-3 "Potential Challenges" the user might face in this role, specifically based on their archetype's potential weaknesses.
    g. A "Growth Opportunities" paragraph describing the long-term prospects or advancement paths in this field.
    h. A list of 3 actionable "Suggested First Steps" someone with this profile can take to explore this career."#
        );

        let named_trait_schema = json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "description": { "type": "STRING" }
            },
            "required": ["name", "description"]
        });

        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "archetype": named_trait_schema.clone(),
                "strengths": { "type": "ARRAY", "items": named_trait_schema.clone() },
                "growthAreas": { "type": "ARRAY", "items": named_trait_schema },
                "suggestions": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "career": { "type": "STRING" },
                            "description": { "type": "STRING" },
                            "reasoning": { "type": "STRING" },
                            "requiredSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "dayInTheLife": { "type": "STRING" },
                            "potentialChallenges": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "growthOpportunities": { "type": "STRING" },
                            "suggestedFirstSteps": { "type": "ARRAY", "items": { "type": "STRING" } }
                        },
                        "required": ["career", "description", "reasoning", "requiredSkills", "dayInTheLife", "potentialChallenges", "growthOpportunities", "suggestedFirstSteps"]
                    }
                }
            },
            "required": ["archetype", "strengths", "growthAreas", "suggestions"]
        });

        let response = self.generate(&prompt, Some(schema)).await?;
        let analysis = serde_json::from_str(&response)
            .map_err(|e| anyhow::anyhow!("Unexpected analysis payload: {}", e))?;

        info!("Received full analysis from Gemini");
        Ok(analysis)
    }

    pub async fn get_career_comparison(
        &self,
        personality_profile: &str,
        careers: &[CareerSuggestion],
    ) -> Result<Vec<CareerComparison>> {
        let career_titles: Vec<&str> = careers.iter().map(|c| c.career.as_str()).collect();
        let career_titles = career_titles.join(", ");
        info!("Requesting career comparison for: {}", career_titles);

        let prompt = format!(
            r#"You are a comparative career analyst AI. A user with the following personality profile wants to compare these careers: {career_titles}.

User Profile:
{personality_profile}

For each career, provide a comparative analysis on the following dimensions, focusing on how they relate to the user's profile. Return the response as a valid JSON array.

1.  **Personality Fit**: A score from 1 to 10 on how well the career aligns with their archetype and traits, and a brief explanation for the score.
2.  **Skill Overlap**: A list of skills they might naturally possess that are valuable for this role, and a list of key skills they would need to develop.
3.  **Long-Term Potential**: A concise summary of growth opportunities and career advancement paths.
4.  **Work-Life Balance**: A realistic, qualitative description of the typical work-life balance in this field."#
        );

        let schema = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "careerName": { "type": "STRING" },
                    "personalityFit": {
                        "type": "OBJECT",
                        "properties": {
                            "score": { "type": "INTEGER", "description": "Score from 1 to 10" },
                            "explanation": { "type": "STRING" }
                        },
                        "required": ["score", "explanation"]
                    },
                    "skillOverlap": {
                        "type": "OBJECT",
                        "properties": {
                            "naturalSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
                            "skillsToDevelop": { "type": "ARRAY", "items": { "type": "STRING" } }
                        },
                        "required": ["naturalSkills", "skillsToDevelop"]
                    },
                    "longTermPotential": { "type": "STRING" },
                    "workLifeBalance": { "type": "STRING" }
                },
                "required": ["careerName", "personalityFit", "skillOverlap", "longTermPotential", "workLifeBalance"]
            }
        });

        let response = self.generate(&prompt, Some(schema)).await?;
        serde_json::from_str(&response)
            .map_err(|e| anyhow::anyhow!("Unexpected comparison payload: {}", e))
    }

    pub async fn get_career_testimonial(
        &self,
        archetype_name: &str,
        career_name: &str,
    ) -> Result<String> {
        let prompt = format!(
            r#"You are a creative writer. Write a short, inspiring, first-person testimonial (around 100-120 words) from the perspective of a person with the "{archetype_name}" personality archetype who is happy and successful working as a "{career_name}".
The tone should be authentic, encouraging, and reflect the core traits of the archetype. It should touch upon why the career is a good fit for their personality, perhaps mentioning how they overcame a typical challenge for their type in this role. Do not use quotation marks around the entire text."#
        );

        self.generate(&prompt, None).await
    }

    pub async fn get_learning_path(
        &self,
        archetype_name: &str,
        career_name: &str,
        skills_to_develop: &[String],
    ) -> Result<Vec<LearningStep>> {
        let skills = skills_to_develop.join(", ");
        let prompt = format!(
            r#"You are an expert career development coach. A user with the "{archetype_name}" personality is interested in becoming a "{career_name}".
Their identified skills to develop are: {skills}.

Create a concise, actionable, 3-step learning path to help them acquire these skills. For each step, provide a title, a short description (1-2 sentences), and a specific, real-world suggested resource (e.g., a well-known online course, book, platform, or project idea).
Return the response as a valid JSON array."#
        );

        let schema = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "step": { "type": "INTEGER" },
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "suggestedResource": { "type": "STRING" }
                },
                "required": ["step", "title", "description", "suggestedResource"]
            }
        });

        let response = self.generate(&prompt, Some(schema)).await?;
        serde_json::from_str(&response)
            .map_err(|e| anyhow::anyhow!("Unexpected learning path payload: {}", e))
    }

    pub async fn get_interview_questions(
        &self,
        archetype_name: &str,
        career_name: &str,
        growth_areas: &[NamedTrait],
    ) -> Result<Vec<InterviewQuestion>> {
        let growth_area_names: Vec<&str> = growth_areas.iter().map(|g| g.name.as_str()).collect();
        let growth_area_names = growth_area_names.join(", ");

        let prompt = format!(
            r#"You are an expert HR interviewer and career coach. A candidate with the "{archetype_name}" personality is applying for a "{career_name}" role.
Their potential growth areas are: {growth_area_names}.

Generate 3 insightful interview questions for this candidate. Include one behavioral question that specifically and subtly probes one of their potential growth areas.
For each question, provide a concise "proTip" (max 2-3 sentences) on how to best answer it, keeping the candidate's personality strengths and weaknesses in mind.
Return the response as a valid JSON array."#
        );

        let schema = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "question": { "type": "STRING" },
                    "proTip": { "type": "STRING" }
                },
                "required": ["question", "proTip"]
            }
        });

        let response = self.generate(&prompt, Some(schema)).await?;
        serde_json::from_str(&response)
            .map_err(|e| anyhow::anyhow!("Unexpected interview questions payload: {}", e))
    }

    pub async fn get_career_simulation(
        &self,
        archetype_name: &str,
        career_name: &str,
        growth_areas: &[NamedTrait],
    ) -> Result<CareerSimulation> {
        let growth_area_names: Vec<&str> = growth_areas.iter().map(|g| g.name.as_str()).collect();
        let growth_area_names = growth_area_names.join(", ");

        let prompt = format!(
            r#"You are an expert in career simulation and interactive training. A user with the "{archetype_name}" personality is exploring a career as a "{career_name}". Their potential growth areas are: {growth_area_names}.

Create a short, text-based career simulation challenge. The response must be a valid JSON object.
1.  **scenario**: A concise, realistic workplace scenario (2-3 sentences) that a "{career_name}" might face. The scenario should present a problem or decision point that subtly relates to the user's archetype or growth areas.
2.  **options**: An array of exactly THREE distinct, plausible actions the user could take. For each option, provide:
    a. **text**: The action described in a single sentence.
    b. **outcome**: A brief description of the immediate result of this action.
    c. **feedback**: A personalized analysis (2 sentences) explaining *why* this choice aligns well or poorly with the "{archetype_name}" personality. Reference a specific trait or growth area in your feedback."#
        );

        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "scenario": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "text": { "type": "STRING" },
                            "outcome": { "type": "STRING" },
                            "feedback": { "type": "STRING" }
                        },
                        "required": ["text", "outcome", "feedback"]
                    }
                }
            },
            "required": ["scenario", "options"]
        });

        let response = self.generate(&prompt, Some(schema)).await?;
        serde_json::from_str(&response)
            .map_err(|e| anyhow::anyhow!("Unexpected simulation payload: {}", e))
    }
}
