//! Contact form-related definitions.

use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use service::{command::send_contact_message, domain::contact};

/// Type of an inquiry.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
pub enum InquiryType {
    /// Question about subscriptions.
    Subscription,

    /// Partnership request.
    Partnership,

    /// Technical support.
    Support,

    /// Complaint or suggestion.
    Complaint,

    /// Anything else.
    Other,
}

impl From<InquiryType> for contact::InquiryType {
    fn from(kind: InquiryType) -> Self {
        match kind {
            InquiryType::Subscription => Self::Subscription,
            InquiryType::Partnership => Self::Partnership,
            InquiryType::Support => Self::Support,
            InquiryType::Complaint => Self::Complaint,
            InquiryType::Other => Self::Other,
        }
    }
}

/// Contact form as filled in by a visitor.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct ContactInput {
    /// Sender name.
    pub name: String,

    /// Sender email address.
    pub email: String,

    /// Sender phone number.
    pub phone: String,

    /// Type of the inquiry.
    pub inquiry_type: Option<InquiryType>,

    /// Message text, at least 10 characters.
    pub message: String,
}

impl From<ContactInput> for contact::Form {
    fn from(input: ContactInput) -> Self {
        let ContactInput {
            name,
            email,
            phone,
            inquiry_type,
            message,
        } = input;
        Self {
            name,
            email,
            phone,
            inquiry_type: inquiry_type.map(Into::into),
            message,
        }
    }
}

/// Field of a `ContactInput`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "ContactField")]
pub enum Field {
    /// Sender name.
    Name,

    /// Email address.
    Email,

    /// Phone number.
    Phone,

    /// Inquiry type.
    InquiryType,

    /// Message text.
    Message,
}

impl From<contact::Field> for Field {
    fn from(field: contact::Field) -> Self {
        use contact::Field as F;

        match field {
            F::Name => Self::Name,
            F::Email => Self::Email,
            F::Phone => Self::Phone,
            F::InquiryType => Self::InquiryType,
            F::Message => Self::Message,
        }
    }
}

/// Problem found in a `ContactInput` field.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "ContactViolation")]
pub struct Violation {
    /// `ContactField` the problem is found in.
    pub field: Field,

    /// Human-readable description of the problem.
    pub message: String,
}

impl From<contact::Violation> for Violation {
    fn from(violation: contact::Violation) -> Self {
        Self {
            field: violation.field().into(),
            message: violation.to_string(),
        }
    }
}

/// Result of sending a contact message.
///
/// Either a WhatsApp `link` carrying the message is prepared, or the
/// `violations` explain why not.
#[derive(Clone, Debug, GraphQLObject)]
pub struct ContactResult {
    /// WhatsApp deep link with the pre-filled message.
    pub link: Option<String>,

    /// Problems preventing the message from being sent.
    pub violations: Vec<Violation>,
}

impl From<send_contact_message::Output> for ContactResult {
    fn from(output: send_contact_message::Output) -> Self {
        use send_contact_message::Output as O;

        match output {
            O::Sent(link) => Self {
                link: Some(link.to_string()),
                violations: vec![],
            },
            O::Rejected(violations) => Self {
                link: None,
                violations: violations.into_iter().map(Into::into).collect(),
            },
        }
    }
}
