//! Contact slice.
//!
//! Submitting the form validates all four fields independently, and only a fully valid
//! form is turned into a `mailto:` link the browser navigates to. There is no server: the
//! visitor's own mail client sends the message.

mod mailto;
mod validate;

pub use mailto::{compose_mailto, encode_component};
pub use validate::{FieldError, FieldErrors, ValidContact, is_valid_email, validate};

use folio_domain::contact::ContactForm;
use folio_kernel::HostError;
use folio_kernel::host::Browser;
use tracing::{info, warn};

/// Notice shown once the mail client has been handed the message.
pub const CONFIRMATION: &str =
    "Thank you for your message! Your email client will open to send the message.";

/// Result of one submission attempt.
#[derive(Debug)]
pub enum Submission {
    /// The mail link was opened; the form has been cleared.
    Sent { link: String },
    /// At least one field failed; nothing was sent and the form is untouched.
    Rejected(FieldErrors),
    /// The form was valid but the browser refused the navigation; the form is untouched.
    Failed(HostError),
}

impl Submission {
    /// Inline errors to display; empty unless rejected.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        match self {
            Self::Rejected(errors) => errors.clone(),
            Self::Sent { .. } | Self::Failed(_) => FieldErrors::default(),
        }
    }
}

/// Hands valid contact forms over to the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDesk {
    recipient: String,
}

impl ContactDesk {
    #[must_use]
    pub fn new(recipient: impl Into<String>) -> Self {
        Self { recipient: recipient.into() }
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Validates `form`; when valid, opens the mail link, resets the form and confirms.
    pub fn submit(&self, form: &mut ContactForm, browser: &impl Browser) -> Submission {
        let contact = match validate(form) {
            Ok(contact) => contact,
            Err(errors) => {
                info!(failed = ?errors.failed(), "Contact form rejected");
                return Submission::Rejected(errors);
            },
        };

        let link = compose_mailto(&self.recipient, &contact);
        if let Err(err) = browser.navigate(&link) {
            warn!(%err, "Could not open the mail client");
            return Submission::Failed(err);
        }

        form.reset();
        browser.notify(CONFIRMATION);
        info!("Contact message handed to the mail client");
        Submission::Sent { link }
    }
}
