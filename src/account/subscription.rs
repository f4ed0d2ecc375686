//! Tier resolution and feature gating (the paywall), plus the mock
//! upgrade/cancel flow. Billing is explicitly not integrated; upgrades only
//! rewrite the stored subscription record.

use chrono::{Duration, Utc};
use log::info;

use super::auth::{AuthManager, AuthOutcome};
use super::models::{
    BillingPeriod, FeatureAccess, SubscriptionPlan, SubscriptionStatus, SubscriptionTier, User,
    UserSubscription, SUBSCRIPTION_PLANS,
};
use crate::ai::types::CareerSuggestion;
use crate::storage::KeyValueStore;

/// The effective tier for a (possibly anonymous) user. Anything but an
/// active or trialing subscription falls back to free.
pub fn current_tier(user: Option<&User>) -> SubscriptionTier {
    let Some(user) = user else {
        return SubscriptionTier::Free;
    };
    let Some(subscription) = &user.subscription else {
        return SubscriptionTier::Free;
    };
    match subscription.status {
        SubscriptionStatus::Active | SubscriptionStatus::Trialing => subscription.tier,
        _ => SubscriptionTier::Free,
    }
}

pub fn feature_access(user: Option<&User>) -> &'static FeatureAccess {
    FeatureAccess::for_tier(current_tier(user))
}

/// A paywall decision: either allowed, or denied with a user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl AccessDecision {
    fn allowed() -> Self {
        Self { allowed: true, reason: None }
    }

    fn denied(reason: String) -> Self {
        Self { allowed: false, reason: Some(reason) }
    }
}

pub fn can_take_test(user: Option<&User>) -> AccessDecision {
    let access = feature_access(user);

    if access.unlimited_tests {
        return AccessDecision::allowed();
    }

    // Allow the first test for anonymous visitors.
    let Some(user) = user else {
        return AccessDecision::allowed();
    };

    if user.tests_taken as i32 >= access.max_tests {
        return AccessDecision::denied(format!(
            "You've reached your limit of {} test(s). Upgrade to Premium for unlimited tests!",
            access.max_tests
        ));
    }

    AccessDecision::allowed()
}

pub fn can_access_career_details(user: Option<&User>) -> AccessDecision {
    if !feature_access(user).detailed_career_info {
        return AccessDecision::denied(
            "Upgrade to Premium to access detailed career information, day-in-the-life scenarios, and personalized insights!"
                .to_string(),
        );
    }
    AccessDecision::allowed()
}

/// Suggestions visible at the user's tier; `-1` means no cap.
pub fn limit_career_suggestions<'a>(
    suggestions: &'a [CareerSuggestion],
    user: Option<&User>,
) -> &'a [CareerSuggestion] {
    let max = feature_access(user).max_career_suggestions;
    if max < 0 {
        return suggestions;
    }
    &suggestions[..suggestions.len().min(max as usize)]
}

pub fn plans() -> &'static [SubscriptionPlan] {
    &SUBSCRIPTION_PLANS
}

pub fn plans_by_billing_period(period: BillingPeriod) -> Vec<&'static SubscriptionPlan> {
    SUBSCRIPTION_PLANS.iter().filter(|p| p.billing_period == period).collect()
}

/// Mock upgrade: validates the plan and rewrites the stored subscription.
pub fn upgrade_subscription(
    auth: &mut AuthManager,
    store: &mut dyn KeyValueStore,
    plan_id: &str,
) -> AuthOutcome {
    if auth.current_user().is_none() {
        return AuthOutcome { success: false, message: "Please log in to upgrade".to_string() };
    }

    let Some(plan) = SUBSCRIPTION_PLANS.iter().find(|p| p.id == plan_id) else {
        return AuthOutcome { success: false, message: "Invalid plan selected".to_string() };
    };

    let period_days = match plan.billing_period {
        BillingPeriod::Monthly => 30,
        BillingPeriod::Yearly => 365,
    };
    let now = Utc::now();
    let subscription = UserSubscription {
        tier: plan.tier,
        plan_id: plan.id.to_string(),
        status: SubscriptionStatus::Active,
        current_period_start: now,
        current_period_end: now + Duration::days(period_days),
        cancel_at_period_end: false,
    };

    auth.update_user_subscription(store, subscription);
    info!("User upgraded to plan {}", plan.id);
    AuthOutcome { success: true, message: format!("Successfully upgraded to {}!", plan.name) }
}

/// Mock cancel: the subscription stays active until the period end.
pub fn cancel_subscription(auth: &mut AuthManager, store: &mut dyn KeyValueStore) -> AuthOutcome {
    let Some(subscription) = auth.current_user().and_then(|u| u.subscription.clone()) else {
        return AuthOutcome { success: false, message: "No active subscription found".to_string() };
    };

    let period_end = subscription.current_period_end;
    auth.update_user_subscription(
        store,
        UserSubscription { cancel_at_period_end: true, ..subscription },
    );
    AuthOutcome {
        success: true,
        message: format!(
            "Your subscription will remain active until {}",
            period_end.format("%Y-%m-%d")
        ),
    }
}

pub fn reactivate_subscription(auth: &mut AuthManager, store: &mut dyn KeyValueStore) -> AuthOutcome {
    let Some(subscription) = auth.current_user().and_then(|u| u.subscription.clone()) else {
        return AuthOutcome { success: false, message: "No subscription found".to_string() };
    };

    auth.update_user_subscription(
        store,
        UserSubscription { cancel_at_period_end: false, ..subscription },
    );
    AuthOutcome { success: true, message: "Subscription reactivated successfully!".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::auth::RegisterRequest;
    use crate::storage::MemoryStore;

    fn logged_in_auth(store: &mut MemoryStore) -> AuthManager {
        let mut auth = AuthManager::default();
        let outcome = auth.register(
            store,
            RegisterRequest {
                name: "Alex".to_string(),
                email: "alex@example.com".to_string(),
                password: "hunter22".to_string(),
            },
        );
        assert!(outcome.success);
        auth
    }

    #[test]
    fn anonymous_users_are_free_tier() {
        assert_eq!(current_tier(None), SubscriptionTier::Free);
        assert!(can_take_test(None).allowed);
    }

    #[test]
    fn free_user_is_blocked_after_first_test() {
        let mut store = MemoryStore::new();
        let mut auth = logged_in_auth(&mut store);

        assert!(can_take_test(auth.current_user()).allowed);

        auth.increment_test_count(&mut store);
        let decision = can_take_test(auth.current_user());
        assert!(!decision.allowed);
        assert!(decision.reason.unwrap().contains("limit of 1 test(s)"));
    }

    #[test]
    fn upgrade_unlocks_unlimited_tests_and_details() {
        let mut store = MemoryStore::new();
        let mut auth = logged_in_auth(&mut store);
        auth.increment_test_count(&mut store);

        let outcome = upgrade_subscription(&mut auth, &mut store, "premium-monthly");
        assert!(outcome.success, "{}", outcome.message);

        assert_eq!(current_tier(auth.current_user()), SubscriptionTier::Premium);
        assert!(can_take_test(auth.current_user()).allowed);
        assert!(can_access_career_details(auth.current_user()).allowed);
    }

    #[test]
    fn unknown_plan_is_rejected() {
        let mut store = MemoryStore::new();
        let mut auth = logged_in_auth(&mut store);

        let outcome = upgrade_subscription(&mut auth, &mut store, "platinum-weekly");
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Invalid plan selected");
    }

    #[test]
    fn canceled_subscription_falls_back_to_free() {
        let mut store = MemoryStore::new();
        let mut auth = logged_in_auth(&mut store);
        upgrade_subscription(&mut auth, &mut store, "premium-monthly");

        // cancel_at_period_end keeps it active; an actually canceled status
        // drops the tier.
        cancel_subscription(&mut auth, &mut store);
        assert_eq!(current_tier(auth.current_user()), SubscriptionTier::Premium);

        let mut subscription = auth.current_user().unwrap().subscription.clone().unwrap();
        subscription.status = SubscriptionStatus::Canceled;
        auth.update_user_subscription(&mut store, subscription);
        assert_eq!(current_tier(auth.current_user()), SubscriptionTier::Free);
    }

    #[test]
    fn career_details_are_gated_for_free_tier() {
        let mut store = MemoryStore::new();
        let auth = logged_in_auth(&mut store);

        let decision = can_access_career_details(auth.current_user());
        assert!(!decision.allowed);
        assert!(decision.reason.unwrap().contains("Upgrade to Premium"));
    }

    #[test]
    fn suggestion_list_is_capped_by_tier() {
        use crate::ai::types::CareerSuggestion;

        let suggestion = |career: &str| CareerSuggestion {
            career: career.to_string(),
            description: String::new(),
            reasoning: String::new(),
            required_skills: Vec::new(),
            day_in_the_life: String::new(),
            potential_challenges: Vec::new(),
            growth_opportunities: String::new(),
            suggested_first_steps: Vec::new(),
        };
        let suggestions: Vec<_> =
            ["A", "B", "C", "D", "E"].iter().map(|c| suggestion(c)).collect();

        let visible = limit_career_suggestions(&suggestions, None);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn yearly_plans_are_filterable() {
        let yearly = plans_by_billing_period(BillingPeriod::Yearly);
        assert_eq!(yearly.len(), 2);
        assert!(yearly.iter().all(|p| p.billing_period == BillingPeriod::Yearly));
    }
}
