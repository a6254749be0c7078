//! Contact form fields, validation and the submit lifecycle.

use crate::error::ContactError;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Service,
        Self::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Service => "Service",
            Self::Message => "Message",
        }
    }

    pub fn required(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::Email | Self::Message
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Service => &mut self.service,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(missing) = ContactField::ALL
            .into_iter()
            .find(|field| field.required() && self.get(*field).trim().is_empty())
        {
            return Err(ContactError::MissingField(missing));
        }

        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub data: ContactFormData,
    pub status: SubmitStatus,
}

impl ContactFormState {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn update(&mut self, field: ContactField, value: String) {
        self.data.set(field, value);
    }

    /// Validates and moves to `Submitting`, returning the payload to send.
    /// Validation failures are recorded in the status.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::InFlight);
        }

        if let Err(error) = self.data.validate() {
            self.status = SubmitStatus::Failed(error.to_string());
            return Err(error);
        }

        self.status = SubmitStatus::Submitting;
        Ok(self.data.clone())
    }

    /// The message being sent, if a submit is in flight.
    pub fn pending_payload(&self) -> Option<&ContactFormData> {
        self.is_submitting().then_some(&self.data)
    }

    pub fn finish(&mut self, outcome: Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.data = ContactFormData::default();
                self.status = SubmitStatus::Success;
            }
            Err(error) => {
                self.status = SubmitStatus::Failed(error.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        ContactFormData {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            service: "Consulting".to_string(),
            message: "Let's build an engine.".to_string(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn first_missing_required_field_is_reported() {
        let mut data = filled();
        data.last_name = "   ".to_string();
        data.message.clear();

        assert_eq!(
            data.validate(),
            Err(ContactError::MissingField(ContactField::LastName))
        );
    }

    #[test]
    fn phone_and_service_are_optional() {
        let mut data = filled();
        data.service.clear();
        assert!(data.validate().is_ok());
        assert!(!ContactField::Phone.required());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["ada", "ada@", "@example.com", "ada@example", "ada@exa mple.com", "a@b@c.com", "ada@.com"] {
            let mut data = filled();
            data.email = email.to_string();
            assert!(
                matches!(data.validate(), Err(ContactError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn payload_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(filled()).expect("serializable");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
    }

    #[test]
    fn successful_submit_clears_fields() {
        let mut state = ContactFormState {
            data: filled(),
            ..ContactFormState::default()
        };

        let payload = state.begin_submit().expect("valid form");
        assert_eq!(payload, filled());
        assert!(state.is_submitting());
        assert_eq!(state.begin_submit(), Err(ContactError::InFlight));

        state.finish(Ok(()));
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.data, ContactFormData::default());
    }

    #[test]
    fn failed_submit_keeps_fields() {
        let mut state = ContactFormState {
            data: filled(),
            ..ContactFormState::default()
        };
        state.begin_submit().expect("valid form");

        state.finish(Err(ContactError::Rejected { status: 503 }));
        assert_eq!(
            state.status,
            SubmitStatus::Failed(
                "the contact service rejected the message (HTTP 503)".to_string()
            )
        );
        assert_eq!(state.data, filled());
    }

    #[test]
    fn pending_payload_only_while_sending() {
        let mut state = ContactFormState::default();
        assert_eq!(state.pending_payload(), None);

        let _ = state.begin_submit();
        assert_eq!(state.pending_payload(), None);

        state.data = filled();
        state.begin_submit().expect("valid form");
        assert_eq!(state.pending_payload(), Some(&filled()));

        state.finish(Ok(()));
        assert_eq!(state.pending_payload(), None);
    }

    #[test]
    fn validation_failure_is_shown_without_submitting() {
        let mut state = ContactFormState::default();
        state.update(ContactField::FirstName, "Ada".to_string());

        assert_eq!(
            state.begin_submit(),
            Err(ContactError::MissingField(ContactField::LastName))
        );
        assert_eq!(
            state.status,
            SubmitStatus::Failed("Last Name is required".to_string())
        );
    }
}
