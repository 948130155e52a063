//! Contact-form controller.
//!
//! Drives one form from submit to acknowledgment:
//! validate, lock the form, race the request against the deadline, report the
//! outcome, unlock. The host calls [`ContactFormController::submit`] directly,
//! or splits it into [`begin`](ContactFormController::begin) /
//! [`PendingSubmission::send`] / [`finish`](ContactFormController::finish)
//! when the request has to run on another task while the UI keeps drawing.

use crate::analytics::{AnalyticsSink, CONTACT_FORM_SUBMIT};
use crate::config::Config;
use crate::form::{validate, ContactRequest};
use crate::logger::log_to_file;
use crate::notification::Severity;
use crate::port::FormPort;
use crate::submit::{submit_with_timeout, ContactClient, ContactTransport, SubmissionOutcome, SubmitResult};
use std::sync::Arc;
use std::time::Duration;

pub const SENDING_MESSAGE: &str = "Sending message...";

pub struct ContactFormController {
    config: Config,
    transport: Arc<dyn ContactTransport>,
    analytics: Option<Arc<dyn AnalyticsSink>>,
}

/// A validated request whose form is locked until the outcome is finished
pub struct PendingSubmission {
    request: ContactRequest,
    transport: Arc<dyn ContactTransport>,
    timeout: Duration,
    log_errors: bool,
}

impl PendingSubmission {
    /// Run the request against its deadline. Never fails; every path maps to an outcome.
    pub async fn send(self) -> SubmissionOutcome {
        let result = submit_with_timeout(self.transport.as_ref(), &self.request, self.timeout).await;

        if let Some(line) = self.diagnostic(&result) {
            log_to_file(&line);
        }

        SubmissionOutcome::from_result(result)
    }

    /// Log line for a finished race. Timeouts and network errors stay quiet
    /// when error logging is switched off.
    fn diagnostic(&self, result: &SubmitResult) -> Option<String> {
        match result {
            SubmitResult::Cancelled if self.log_errors => Some(format!(
                "Contact form timed out after {} ms",
                self.timeout.as_millis()
            )),
            SubmitResult::Failed(e) if self.log_errors => Some(format!("Contact form error: {}", e)),
            SubmitResult::Cancelled | SubmitResult::Failed(_) => None,
            SubmitResult::Response(response) => {
                Some(format!("Contact endpoint answered HTTP {}", response.status))
            }
        }
    }
}

impl ContactFormController {
    /// Bind to a form if the host has one.
    ///
    /// A missing form is not an error; there is simply nothing to control.
    /// A missing config falls back to [`Config::fallback`].
    pub fn attach<P>(form: Option<&P>, config: Option<Config>) -> Option<Self>
    where
        P: FormPort + ?Sized,
    {
        if form.is_none() {
            log_to_file("Contact form not found");
            return None;
        }

        let config = config.unwrap_or_else(Config::fallback);
        let transport = Arc::new(ContactClient::new(config.contact_api_url.clone()));
        log_to_file(&format!(
            "Contact form initialized with API URL: {}",
            transport.endpoint()
        ));

        Some(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn ContactTransport>) -> Self {
        Self {
            config,
            transport,
            analytics: None,
        }
    }

    pub fn with_analytics(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate and lock the form.
    ///
    /// Returns `None` when the form is already locked or the input is
    /// rejected; in the latter case the error notification is already shown.
    pub fn begin<P>(&self, form: &mut P) -> Option<PendingSubmission>
    where
        P: FormPort + ?Sized,
    {
        if form.is_locked() {
            log_to_file("Submit ignored: a submission is already in flight");
            return None;
        }

        let fields = form.read_fields();
        let request = match validate(&fields, &self.config.contact_form) {
            Ok(request) => request,
            Err(e) => {
                form.show_notification(&e.to_string(), Severity::Error);
                return None;
            }
        };

        form.disable_form();
        form.show_notification(SENDING_MESSAGE, Severity::Info);

        Some(PendingSubmission {
            request,
            transport: Arc::clone(&self.transport),
            timeout: self.config.submit_timeout(),
            log_errors: self.config.enable_error_logging,
        })
    }

    /// Report the outcome and unlock the form. Call exactly once per `begin`.
    pub fn finish<P>(&self, form: &mut P, outcome: SubmissionOutcome)
    where
        P: FormPort + ?Sized,
    {
        match &outcome {
            SubmissionOutcome::Delivered(msg) => {
                form.show_notification(msg, Severity::Success);
                form.clear_form();
                self.track_delivery();
            }
            other => form.show_notification(other.message(), Severity::Error),
        }

        form.enable_form();
    }

    /// Full submit handler: begin, send, finish.
    ///
    /// Returns the outcome, or `None` if nothing was sent.
    pub async fn submit<P>(&self, form: &mut P) -> Option<SubmissionOutcome>
    where
        P: FormPort + ?Sized,
    {
        let pending = self.begin(form)?;
        let outcome = pending.send().await;
        self.finish(form, outcome.clone());
        Some(outcome)
    }

    fn track_delivery(&self) {
        if !self.config.enable_analytics {
            return;
        }
        if let Some(sink) = &self.analytics {
            sink.track(&CONTACT_FORM_SUBMIT);
        }
    }
}
