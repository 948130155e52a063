use crate::logger::log_to_file;

/// An event reported after a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub action: &'static str,
    pub category: &'static str,
    pub label: &'static str,
}

/// Emitted after a contact submission was accepted
pub const CONTACT_FORM_SUBMIT: AnalyticsEvent = AnalyticsEvent {
    action: "contact_form_submit",
    category: "engagement",
    label: "contact_form",
};

/// Destination for analytics events. Tracking must never fail the caller.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Writes events to the session log, tagged with the measurement id if any
pub struct LogAnalytics {
    measurement_id: Option<String>,
}

impl LogAnalytics {
    pub fn new(measurement_id: Option<String>) -> Self {
        Self { measurement_id }
    }
}

impl AnalyticsSink for LogAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        log_to_file(&format!(
            "analytics [{}] event={} category={} label={}",
            self.measurement_id.as_deref().unwrap_or("-"),
            event.action,
            event.category,
            event.label
        ));
    }
}
