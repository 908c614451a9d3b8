//! Subscription registration and `Invoice`-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject, GraphQLScalar};
use service::domain::subscription;

use crate::api::{
    pricing::{Quote, Tier},
    scalar,
};

/// Registration form as filled in by a customer.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "RegistrationInput")]
pub struct RegistrationInput {
    /// `CardTier` to subscribe for.
    pub tier: Tier,

    /// Customer name, at least 3 characters.
    pub name: String,

    /// Mobile phone number of 10 to 15 digits, optionally prefixed with `+`.
    pub phone: String,

    /// Place the customer works at.
    pub work_location: String,

    /// Email address.
    pub email: String,

    /// Discount code, if any.
    pub discount_code: Option<String>,
}

impl From<RegistrationInput> for subscription::Form {
    fn from(input: RegistrationInput) -> Self {
        let RegistrationInput {
            tier,
            name,
            phone,
            work_location,
            email,
            discount_code,
        } = input;
        Self {
            tier: tier.into(),
            name,
            phone,
            work_location,
            email,
            discount_code: discount_code.unwrap_or_default(),
        }
    }
}

/// Field of a `RegistrationInput`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "RegistrationField")]
pub enum Field {
    /// Customer name.
    Name,

    /// Phone number.
    Phone,

    /// Work location.
    WorkLocation,

    /// Email address.
    Email,

    /// Discount code.
    DiscountCode,
}

impl From<subscription::Field> for Field {
    fn from(field: subscription::Field) -> Self {
        use subscription::Field as F;

        match field {
            F::Name => Self::Name,
            F::Phone => Self::Phone,
            F::WorkLocation => Self::WorkLocation,
            F::Email => Self::Email,
            F::DiscountCode => Self::DiscountCode,
        }
    }
}

/// Problem found in a `RegistrationInput` field.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "RegistrationViolation")]
pub struct Violation {
    /// `RegistrationField` the problem is found in.
    pub field: Field,

    /// Human-readable description of the problem.
    pub message: String,
}

impl From<subscription::Violation> for Violation {
    fn from(violation: subscription::Violation) -> Self {
        Self {
            field: violation.field().into(),
            message: violation.to_string(),
        }
    }
}

/// Number of an `Invoice`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "InvoiceNumber",
    with = scalar::Via::<subscription::Number>,
)]
pub struct Number(subscription::Number);

/// Invoice issued for a registration, awaiting a bank transfer.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Invoice {
    /// Number of this `Invoice`.
    pub number: Number,

    /// `DateTime` this `Invoice` was issued at.
    pub issued_at: DateTime,

    /// `CardTier` being paid for.
    pub tier: Tier,

    /// Customer name.
    pub customer_name: String,

    /// Normalized customer phone number.
    pub phone: String,

    /// Place the customer works at.
    pub work_location: String,

    /// Customer email address.
    pub email: String,

    /// Normalized discount code, if any.
    pub discount_code: Option<String>,

    /// Indicator whether a discount is applied.
    pub discount_applied: bool,

    /// `PriceQuote` to be paid.
    pub quote: Quote,
}

impl From<subscription::Invoice> for Invoice {
    fn from(invoice: subscription::Invoice) -> Self {
        let discount_applied = invoice.discount_applied();
        let subscription::Invoice {
            number,
            issued_at,
            registration: reg,
            quote,
        } = invoice;
        Self {
            number: number.into(),
            issued_at: issued_at.coerce(),
            tier: reg.tier.into(),
            customer_name: reg.name.to_string(),
            phone: reg.phone.to_string(),
            work_location: reg.work_location.to_string(),
            email: reg.email.to_string(),
            discount_code: reg.discount_code.map(|c| c.to_string()),
            discount_applied,
            quote: quote.into(),
        }
    }
}

/// Result of a subscription registration.
///
/// Either an `Invoice` is issued, or the `violations` explain why not.
#[derive(Clone, Debug, GraphQLObject)]
pub struct RegistrationResult {
    /// Issued `Invoice`, if the registration is accepted.
    pub invoice: Option<Invoice>,

    /// Problems preventing the registration.
    pub violations: Vec<Violation>,

    /// `PriceQuote` of the selected `CardTier`.
    pub quote: Quote,
}

/// Already issued `Invoice` to confirm the payment of.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct InvoiceInput {
    /// Number of the issued `Invoice`.
    pub number: Number,

    /// Registration the `Invoice` was issued for.
    pub registration: RegistrationInput,
}

#[cfg(test)]
mod spec {
    use service::domain::subscription;

    use crate::api::pricing::Tier;

    use super::{Field, RegistrationInput, Violation};

    #[test]
    fn fills_form_with_blank_code() {
        let form = subscription::Form::from(RegistrationInput {
            tier: Tier::Family,
            name: "محمد".into(),
            phone: "0501234567".into(),
            work_location: "الرياض".into(),
            email: "m@example.com".into(),
            discount_code: None,
        });
        assert_eq!(form.discount_code, "");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn describes_violation() {
        let violation =
            Violation::from(subscription::Violation::DiscountCodeInvalid);
        assert_eq!(violation.field, Field::DiscountCode);
        assert_eq!(violation.message, "كود الخصم غير صحيح");
    }
}
