//! Contact endpoint client and the time-boxed submission race.

use crate::error::SubmitError;
use crate::form::ContactRequest;
use crate::logger::log_to_file;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Shown when a 2xx body carries no `message`
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Shown when a non-2xx body carries no `error`
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to send message. Please try again.";

pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Optional fields the endpoint may put in its JSON body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A response that made it back from the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ContactResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can deliver a contact request
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError>;
}

/// HTTP transport for the contact endpoint
pub struct ContactClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ContactClient {
    /// No client-side timeout here; the deadline is enforced by [`submit_with_timeout`]
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for ContactClient {
    async fn post(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        // Unparsable bodies degrade to the defaults for their status class
        let body = serde_json::from_slice::<ResponseBody>(&bytes).unwrap_or_else(|e| {
            log_to_file(&format!("Contact endpoint returned unparsable body (HTTP {}): {}", status, e));
            ResponseBody::default()
        });

        Ok(ContactResponse { status, body })
    }
}

/// How the race between the request and the deadline ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Response(ContactResponse),
    Cancelled,
    Failed(SubmitError),
}

/// Post `request`, cancelling it if `timeout` elapses first.
///
/// One cancellation token per call, fired only by the deadline branch. Losing
/// the race drops the request future, which aborts the connection. Dropping
/// this future drops the deadline with it.
pub async fn submit_with_timeout<T>(transport: &T, request: &ContactRequest, timeout: Duration) -> SubmitResult
where
    T: ContactTransport + ?Sized,
{
    let token = CancellationToken::new();
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);

    tokio::select! {
        _ = &mut deadline => {
            token.cancel();
            SubmitResult::Cancelled
        }
        _ = token.cancelled() => SubmitResult::Cancelled,
        res = transport.post(request) => match res {
            Ok(response) => SubmitResult::Response(response),
            Err(e) => SubmitResult::Failed(e),
        },
    }
}

/// What the user is told about a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered(String),
    Rejected(String),
    NetworkFailure,
    TimedOut,
}

impl SubmissionOutcome {
    pub fn from_result(result: SubmitResult) -> Self {
        match result {
            SubmitResult::Cancelled => SubmissionOutcome::TimedOut,
            SubmitResult::Failed(_) => SubmissionOutcome::NetworkFailure,
            SubmitResult::Response(response) => {
                if response.is_success() {
                    SubmissionOutcome::Delivered(
                        response
                            .body
                            .message
                            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
                    )
                } else {
                    SubmissionOutcome::Rejected(
                        response
                            .body
                            .error
                            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
                    )
                }
            }
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered(_))
    }

    /// Notification text for this outcome
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Delivered(msg) | SubmissionOutcome::Rejected(msg) => msg,
            SubmissionOutcome::NetworkFailure => NETWORK_ERROR_MESSAGE,
            SubmissionOutcome::TimedOut => TIMEOUT_MESSAGE,
        }
    }
}
