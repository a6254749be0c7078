use crate::contact::ContactField;
use thiserror::Error;

/// Failures surfaced by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),

    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    #[error("a message is already being sent")]
    InFlight,

    #[error("could not reach the contact service: {0}")]
    Network(String),

    #[error("the contact service rejected the message (HTTP {status})")]
    Rejected { status: u16 },
}

impl ContactError {
    /// Short reason used in structured log lines.
    pub fn class(&self) -> &'static str {
        match self {
            Self::MissingField(_) | Self::InvalidEmail(_) => "validation",
            Self::InFlight => "in_flight",
            Self::Network(_) => "network",
            Self::Rejected { .. } => "rejected",
        }
    }
}
