use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::relay::{ContactRelay, RelayError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
}

/// A form that passed validation; fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Same rule the browser applies to <input type="email">, loosely.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() > 1
        && domain.split('.').all(|part| !part.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    /// Validation failed; the relay was never called.
    Rejected(FormError),
    Failed(RelayError),
}

impl SubmitOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Sent => Notification {
                kind: NotificationKind::Success,
                title: "Message Sent Successfully!".to_string(),
                description: "Thank you for your message. I'll get back to you soon.".to_string(),
            },
            SubmitOutcome::Rejected(err) => Notification {
                kind: NotificationKind::Error,
                title: "Check your details".to_string(),
                description: err.to_string(),
            },
            SubmitOutcome::Failed(_) => Notification {
                kind: NotificationKind::Error,
                title: "Error".to_string(),
                description: "Failed to send message. Please try again.".to_string(),
            },
        }
    }

    /// Only a delivered message empties the form.
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Raises the submitting flag for its lifetime.
struct Submitting<F: FnMut(bool)>(F);

impl<F: FnMut(bool)> Submitting<F> {
    fn start(mut set: F) -> Self {
        set(true);
        Self(set)
    }
}

impl<F: FnMut(bool)> Drop for Submitting<F> {
    fn drop(&mut self) {
        (self.0)(false);
    }
}

/// Validates `form` and hands it to `relay`. `set_submitting` sees `true`
/// before the relay is called and `false` on every way out, including the
/// future being dropped mid-send.
pub async fn submit<R, F>(form: &ContactForm, relay: &R, set_submitting: F) -> SubmitOutcome
where
    R: ContactRelay,
    F: FnMut(bool),
{
    let message = match form.validate() {
        Ok(message) => message,
        Err(err) => return SubmitOutcome::Rejected(err),
    };
    let _submitting = Submitting::start(set_submitting);
    match relay.send(&message).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct MockRelay {
        result: Result<(), RelayError>,
        calls: Cell<usize>,
    }

    impl MockRelay {
        fn new(result: Result<(), RelayError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl ContactRelay for MockRelay {
        async fn send(&self, _message: &ContactMessage) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: "Let's build an engine".into(),
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let form = ContactForm {
            name: "  Ada ".into(),
            email: " ada@example.com ".into(),
            message: "\nhi\n".into(),
        };
        let message = form.validate().unwrap();
        assert_eq!(message.name(), "Ada");
        assert_eq!(message.email(), "ada@example.com");
        assert_eq!(message.message(), "hi");
    }

    #[test]
    fn test_validate_required_fields() {
        let mut form = valid_form();
        form.name = "   ".into();
        assert_eq!(form.validate(), Err(FormError::MissingName));

        let mut form = valid_form();
        form.email.clear();
        assert_eq!(form.validate(), Err(FormError::MissingEmail));

        let mut form = valid_form();
        form.message.clear();
        assert_eq!(form.validate(), Err(FormError::MissingMessage));
    }

    #[test]
    fn test_validate_email_shape() {
        for bad in [
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "a da@example.com",
            "ada@@x.com",
            "ada@x..com",
        ] {
            let form = ContactForm {
                email: bad.into(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut form = valid_form();
        form.clear();
        assert_eq!(form, ContactForm::default());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_never_reaches_relay() {
        let relay = MockRelay::new(Ok(()));
        let mut flags = Vec::new();
        let form = ContactForm {
            name: String::new(),
            ..valid_form()
        };

        let outcome = submit(&form, &relay, |f| flags.push(f)).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(FormError::MissingName));
        assert_eq!(relay.calls.get(), 0);
        assert!(flags.is_empty());
        assert!(!outcome.clears_form());
        assert_eq!(outcome.notification().kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_successful_send_clears_form() {
        let relay = MockRelay::new(Ok(()));
        let mut flags = Vec::new();
        let mut form = valid_form();

        let outcome = submit(&form, &relay, |f| flags.push(f)).await;
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.calls.get(), 1);
        assert_eq!(flags, vec![true, false]);
        assert_eq!(outcome.notification().kind, NotificationKind::Success);

        if outcome.clears_form() {
            form.clear();
        }
        assert_eq!(form, ContactForm::default());
    }

    #[tokio::test]
    async fn test_failed_send_keeps_form_and_clears_flag() {
        let relay = MockRelay::new(Err(RelayError::Transport("offline".into())));
        let mut flags = Vec::new();
        let form = valid_form();

        let outcome = submit(&form, &relay, |f| flags.push(f)).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(RelayError::Transport("offline".into()))
        );
        assert_eq!(flags, vec![true, false]);
        assert!(!outcome.clears_form());
        assert_eq!(form, valid_form());

        let note = outcome.notification();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.title, "Error");
    }

    #[test]
    fn test_dropped_submission_clears_flag() {
        let mut flags = Vec::new();
        let guard = Submitting::start(|f| flags.push(f));
        drop(guard);
        assert_eq!(flags, vec![true, false]);
    }
}
