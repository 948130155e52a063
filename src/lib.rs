// folio-contact - portfolio contact form client
pub mod analytics;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod logger;
pub mod notification;
pub mod port;
pub mod submit;

pub use config::{Config, Environment, FormLimits};
pub use controller::{ContactFormController, PendingSubmission};
pub use error::{ConfigError, SubmitError, ValidationError};
pub use form::{ContactRequest, FormFields};
pub use notification::{Notification, NotificationCenter, Severity};
pub use port::FormPort;
pub use submit::{ContactClient, ContactTransport, SubmissionOutcome};
