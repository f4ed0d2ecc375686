//! Analytics event tracking. Event construction and buffering happen here;
//! actual delivery (gtag) is an external concern, so events are kept
//! in-process and mirrored to the log. Tracking is a no-op until a
//! measurement id is configured.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone)]
pub struct Analytics {
    enabled: bool,
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl Analytics {
    pub fn new(measurement_id: Option<&str>) -> Self {
        let enabled = match measurement_id {
            Some(id) if !id.is_empty() => {
                info!("Analytics initialized with measurement id {}", id);
                true
            }
            _ => {
                warn!("Analytics not configured. Set GA_MEASUREMENT_ID to enable event tracking.");
                false
            }
        };
        Self {
            enabled,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Disabled tracker for contexts that never report.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn track_event(&self, name: &str, params: Value) {
        if !self.enabled {
            return;
        }
        debug!("analytics event {}: {}", name, params);
        self.events.lock().push(AnalyticsEvent {
            name: name.to_string(),
            params,
            timestamp: Utc::now(),
        });
    }

    pub fn track_quiz_started(&self) {
        self.track_event("quiz_started", json!({ "event_category": "engagement" }));
    }

    pub fn track_quiz_completed(&self, archetype: &str) {
        self.track_event(
            "quiz_completed",
            json!({ "event_category": "engagement", "archetype": archetype }),
        );
    }

    pub fn track_question_answered(&self, question_number: usize, total_questions: usize) {
        let progress = if total_questions == 0 {
            0
        } else {
            ((question_number as f64 / total_questions as f64) * 100.0).round() as i64
        };
        self.track_event(
            "question_answered",
            json!({
                "event_category": "engagement",
                "question_number": question_number,
                "total_questions": total_questions,
                "progress_percentage": progress,
            }),
        );
    }

    pub fn track_signup(&self, method: &str) {
        self.track_event("sign_up", json!({ "method": method }));
    }

    pub fn track_upgrade_initiated(&self, plan: &str, price: f64) {
        self.track_event(
            "begin_checkout",
            json!({
                "event_category": "conversion",
                "items": [ { "item_name": plan, "price": price } ],
            }),
        );
    }

    pub fn track_upgrade_completed(&self, plan: &str, price: f64) {
        self.track_event(
            "purchase",
            json!({
                "event_category": "conversion",
                "transaction_id": Uuid::new_v4().to_string(),
                "value": price,
                "items": [ { "item_name": plan, "price": price } ],
            }),
        );
    }

    /// Snapshot of buffered events, oldest first.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_buffered_when_enabled() {
        let analytics = Analytics::new(Some("G-TEST123"));
        analytics.track_quiz_started();
        analytics.track_quiz_completed("The Architect");

        let events = analytics.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "quiz_started");
        assert_eq!(events[1].params["archetype"], "The Architect");
    }

    #[test]
    fn question_progress_is_rounded_percentage() {
        let analytics = Analytics::new(Some("G-TEST123"));
        analytics.track_question_answered(4, 16);

        let events = analytics.events();
        assert_eq!(events[0].params["progress_percentage"], 25);
    }

    #[test]
    fn unconfigured_tracker_records_nothing() {
        let analytics = Analytics::new(None);
        analytics.track_quiz_started();
        analytics.track_signup("email");
        assert!(analytics.events().is_empty());
    }

    #[test]
    fn purchase_events_carry_a_transaction_id() {
        let analytics = Analytics::new(Some("G-TEST123"));
        analytics.track_upgrade_completed("Premium", 14.99);

        let events = analytics.events();
        assert_eq!(events[0].name, "purchase");
        assert!(events[0].params["transaction_id"].as_str().unwrap().len() > 0);
    }
}
