//! Contact [`Form`] definitions.

use common::define_kind;
use derive_more::Display;

use super::customer::{Email, Phone};

define_kind! {
    #[doc = "Type of an inquiry sent through the contact [`Form`]."]
    enum InquiryType {
        #[doc = "Question about subscriptions."]
        Subscription = 1,

        #[doc = "Partnership request."]
        Partnership = 2,

        #[doc = "Technical support."]
        Support = 3,

        #[doc = "Complaint or suggestion."]
        Complaint = 4,

        #[doc = "Anything else."]
        Other = 5,
    }
}

impl InquiryType {
    /// Human-readable label of this [`InquiryType`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Subscription => "استفسار عن الاشتراكات",
            Self::Partnership => "طلب شراكة",
            Self::Support => "الدعم الفني",
            Self::Complaint => "شكوى أو اقتراح",
            Self::Other => "أخرى",
        }
    }
}

/// Contact form as filled in by a visitor.
#[derive(Clone, Debug, Default)]
pub struct Form {
    /// Raw sender name.
    pub name: String,

    /// Raw email address.
    pub email: String,

    /// Raw phone number.
    pub phone: String,

    /// Selected [`InquiryType`], if any.
    pub inquiry_type: Option<InquiryType>,

    /// Raw message text.
    pub message: String,
}

impl Form {
    /// Validates this [`Form`] into an [`Inquiry`].
    ///
    /// # Errors
    ///
    /// With every found [`Violation`] in the [`Form`] fields order.
    pub fn validate(&self) -> Result<Inquiry, Vec<Violation>> {
        use Violation as V;

        let mut violations = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            violations.push(V::NameRequired);
        }

        let email = if self.email.trim().is_empty() {
            violations.push(V::EmailRequired);
            None
        } else {
            Email::new(self.email.clone()).or_else(|| {
                violations.push(V::EmailInvalid);
                None
            })
        };

        let phone = if self.phone.trim().is_empty() {
            violations.push(V::PhoneRequired);
            None
        } else {
            Phone::new(&self.phone).or_else(|| {
                violations.push(V::PhoneInvalid);
                None
            })
        };

        if self.inquiry_type.is_none() {
            violations.push(V::InquiryTypeRequired);
        }

        let message = self.message.trim();
        if message.is_empty() {
            violations.push(V::MessageRequired);
        } else if message.chars().count() < Inquiry::MIN_MESSAGE_LEN {
            violations.push(V::MessageTooShort);
        }

        match (email, phone, self.inquiry_type) {
            (Some(email), Some(phone), Some(inquiry_type))
                if violations.is_empty() =>
            {
                Ok(Inquiry {
                    sender: name.to_owned(),
                    email,
                    phone,
                    inquiry_type,
                    message: message.to_owned(),
                })
            }
            _ => Err(violations),
        }
    }
}

/// Field of a contact [`Form`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
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

/// Violation found while validating a contact [`Form`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Violation {
    /// Sender name is blank.
    #[display("الاسم مطلوب")]
    NameRequired,

    /// Email address is blank.
    #[display("البريد الإلكتروني مطلوب")]
    EmailRequired,

    /// Email address is malformed.
    #[display("البريد الإلكتروني غير صحيح")]
    EmailInvalid,

    /// Phone number is blank.
    #[display("رقم الهاتف مطلوب")]
    PhoneRequired,

    /// Phone number is malformed.
    #[display("رقم الهاتف غير صحيح")]
    PhoneInvalid,

    /// No inquiry type selected.
    #[display("نوع الاستفسار مطلوب")]
    InquiryTypeRequired,

    /// Message is blank.
    #[display("الرسالة مطلوبة")]
    MessageRequired,

    /// Message is too short.
    #[display("الرسالة يجب أن تكون 10 أحرف على الأقل")]
    MessageTooShort,
}

impl Violation {
    /// Returns the [`Field`] this [`Violation`] is reported for.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::PhoneRequired | Self::PhoneInvalid => Field::Phone,
            Self::InquiryTypeRequired => Field::InquiryType,
            Self::MessageRequired | Self::MessageTooShort => Field::Message,
        }
    }
}

/// Validated inquiry ready to be handed off.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Inquiry {
    /// Trimmed sender name.
    pub sender: String,

    /// Sender [`Email`].
    pub email: Email,

    /// Sender [`Phone`].
    pub phone: Phone,

    /// [`InquiryType`] of this [`Inquiry`].
    pub inquiry_type: InquiryType,

    /// Trimmed message text.
    pub message: String,
}

impl Inquiry {
    /// Minimal number of characters in a message.
    pub const MIN_MESSAGE_LEN: usize = 10;
}

#[cfg(test)]
mod spec {
    use super::{Field, Form, InquiryType, Violation};

    fn form() -> Form {
        Form {
            name: "سارة".into(),
            email: "sara@example.com".into(),
            phone: "0551234567".into(),
            inquiry_type: Some(InquiryType::Partnership),
            message: "  نرغب في الانضمام كشريك  ".into(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let inquiry = form().validate().unwrap();
        assert_eq!(inquiry.message, "نرغب في الانضمام كشريك");
        assert_eq!(inquiry.inquiry_type.label(), "طلب شراكة");
    }

    #[test]
    fn requires_everything() {
        assert_eq!(
            Form::default().validate().unwrap_err(),
            [
                Violation::NameRequired,
                Violation::EmailRequired,
                Violation::PhoneRequired,
                Violation::InquiryTypeRequired,
                Violation::MessageRequired,
            ],
        );
    }

    #[test]
    fn rejects_short_message() {
        let violations = Form {
            message: " قصيرة ".into(),
            ..form()
        }
        .validate()
        .unwrap_err();
        assert_eq!(violations, [Violation::MessageTooShort]);
        assert_eq!(violations[0].field(), Field::Message);
    }

    #[test]
    fn parses_inquiry_type_ids() {
        assert_eq!(
            "complaint".parse::<InquiryType>().unwrap(),
            InquiryType::Complaint,
        );
    }
}
