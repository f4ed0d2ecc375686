use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::types::FullAnalysis;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Premium,
    Professional,
    Enterprise,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    Trialing,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscription {
    pub tier: SubscriptionTier,
    pub plan_id: String,
    pub status: SubscriptionStatus,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    pub cancel_at_period_end: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResult {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub archetype: String,
    pub analysis: FullAnalysis,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    // NOTE: In a real-world app this must be a securely stored hash. The
    // whole account layer is an explicit mock.
    pub password: String,
    #[serde(default)]
    pub results: Vec<UserResult>,
    #[serde(default)]
    pub tests_taken: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<UserSubscription>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: SubscriptionTier,
    pub price: f64,
    pub billing_period: BillingPeriod,
    pub features: Vec<&'static str>,
}

/// Per-tier feature gates. `-1` on counted features means unlimited.
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAccess {
    pub unlimited_tests: bool,
    pub max_tests: i32,
    pub max_career_suggestions: i32,
    pub detailed_career_info: bool,
    pub career_comparison: bool,
    pub learning_paths: bool,
    pub interview_prep: bool,
    pub career_simulation: bool,
    pub pdf_export: bool,
    pub email_delivery: bool,
    pub resume_builder: bool,
    pub job_matching: bool,
    pub mentor_matching: bool,
    pub progress_tracking: bool,
    pub skill_assessments: bool,
    pub priority_support: bool,
    pub coaching_sessions: i32,
}

pub static SUBSCRIPTION_PLANS: Lazy<Vec<SubscriptionPlan>> = Lazy::new(|| {
    vec![
        SubscriptionPlan {
            id: "free",
            name: "Free",
            tier: SubscriptionTier::Free,
            price: 0.0,
            billing_period: BillingPeriod::Monthly,
            features: vec![
                "1 personality test",
                "Basic archetype results",
                "3 career suggestions (basic)",
                "Limited sharing",
            ],
        },
        SubscriptionPlan {
            id: "premium-monthly",
            name: "Premium",
            tier: SubscriptionTier::Premium,
            price: 14.99,
            billing_period: BillingPeriod::Monthly,
            features: vec![
                "Unlimited personality tests",
                "Full detailed career analysis",
                "5+ career suggestions with full details",
                "Career comparison tool",
                "Personalized learning paths",
                "Interview preparation",
                "Career simulation exercises",
                "PDF export",
                "Email delivery",
                "Priority support",
            ],
        },
        SubscriptionPlan {
            id: "premium-yearly",
            name: "Premium (Yearly)",
            tier: SubscriptionTier::Premium,
            price: 149.0,
            billing_period: BillingPeriod::Yearly,
            features: vec!["All Premium features", "Save 17% vs monthly", "2 months free"],
        },
        SubscriptionPlan {
            id: "professional-monthly",
            name: "Professional",
            tier: SubscriptionTier::Professional,
            price: 29.99,
            billing_period: BillingPeriod::Monthly,
            features: vec![
                "Everything in Premium",
                "Skill assessment tests",
                "Job matching (Indeed, LinkedIn)",
                "Career roadmap builder",
                "Mentor matching",
                "Resume/LinkedIn optimization",
                "2 monthly coaching sessions",
                "Exclusive webinars",
                "24-hour priority support",
            ],
        },
        SubscriptionPlan {
            id: "professional-yearly",
            name: "Professional (Yearly)",
            tier: SubscriptionTier::Professional,
            price: 299.0,
            billing_period: BillingPeriod::Yearly,
            features: vec!["All Professional features", "Save 17% vs monthly", "2 months free"],
        },
    ]
});

const FREE_ACCESS: FeatureAccess = FeatureAccess {
    unlimited_tests: false,
    max_tests: 1,
    max_career_suggestions: 3,
    detailed_career_info: false,
    career_comparison: false,
    learning_paths: false,
    interview_prep: false,
    career_simulation: false,
    pdf_export: false,
    email_delivery: false,
    resume_builder: false,
    job_matching: false,
    mentor_matching: false,
    progress_tracking: false,
    skill_assessments: false,
    priority_support: false,
    coaching_sessions: 0,
};

const PREMIUM_ACCESS: FeatureAccess = FeatureAccess {
    unlimited_tests: true,
    max_tests: -1,
    max_career_suggestions: 5,
    detailed_career_info: true,
    career_comparison: true,
    learning_paths: true,
    interview_prep: true,
    career_simulation: true,
    pdf_export: true,
    email_delivery: true,
    resume_builder: true,
    job_matching: false,
    mentor_matching: false,
    progress_tracking: false,
    skill_assessments: false,
    priority_support: true,
    coaching_sessions: 1,
};

const PROFESSIONAL_ACCESS: FeatureAccess = FeatureAccess {
    unlimited_tests: true,
    max_tests: -1,
    max_career_suggestions: 10,
    detailed_career_info: true,
    career_comparison: true,
    learning_paths: true,
    interview_prep: true,
    career_simulation: true,
    pdf_export: true,
    email_delivery: true,
    resume_builder: true,
    job_matching: true,
    mentor_matching: true,
    progress_tracking: true,
    skill_assessments: true,
    priority_support: true,
    coaching_sessions: 2,
};

const ENTERPRISE_ACCESS: FeatureAccess = FeatureAccess {
    unlimited_tests: true,
    max_tests: -1,
    max_career_suggestions: -1,
    detailed_career_info: true,
    career_comparison: true,
    learning_paths: true,
    interview_prep: true,
    career_simulation: true,
    pdf_export: true,
    email_delivery: true,
    resume_builder: true,
    job_matching: true,
    mentor_matching: true,
    progress_tracking: true,
    skill_assessments: true,
    priority_support: true,
    coaching_sessions: -1,
};

impl FeatureAccess {
    pub const fn for_tier(tier: SubscriptionTier) -> &'static FeatureAccess {
        match tier {
            SubscriptionTier::Free => &FREE_ACCESS,
            SubscriptionTier::Premium => &PREMIUM_ACCESS,
            SubscriptionTier::Professional => &PROFESSIONAL_ACCESS,
            SubscriptionTier::Enterprise => &ENTERPRISE_ACCESS,
        }
    }
}
