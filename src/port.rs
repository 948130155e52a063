use crate::form::FormFields;
use crate::notification::Severity;

/// Label shown on the submit control while a submission is pending
pub const PENDING_LABEL: &str = "Sending...";

/// The surface of a contact form that the controller drives.
///
/// Hosts implement this over whatever renders the form. The controller never
/// touches rendering state any other way.
pub trait FormPort {
    /// Current raw field values
    fn read_fields(&self) -> FormFields;

    /// True while the submit control and inputs are disabled
    fn is_locked(&self) -> bool;

    /// Disable the submit control and inputs; the submit label becomes [`PENDING_LABEL`]
    fn disable_form(&mut self);

    /// Re-enable everything and restore the original submit label
    fn enable_form(&mut self);

    /// Replace the visible notification
    fn show_notification(&mut self, text: &str, severity: Severity);

    /// Reset all fields to empty
    fn clear_form(&mut self);
}
