//! Subscription registration and [`Invoice`] definitions.

use std::{str::FromStr, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display};
use regex::Regex;
use smart_default::SmartDefault;

use super::{
    customer::{Email, Name, Phone, WorkLocation},
    discount::{self, Code},
    Quote, Tier,
};

/// Registration form as filled in by a customer.
#[derive(Clone, Debug, SmartDefault)]
pub struct Form {
    /// [`Tier`] of the card to subscribe for.
    #[default(Tier::Vip)]
    pub tier: Tier,

    /// Raw customer name.
    pub name: String,

    /// Raw mobile phone number.
    pub phone: String,

    /// Raw work location.
    pub work_location: String,

    /// Raw email address.
    pub email: String,

    /// Raw discount code, blank if none.
    pub discount_code: String,
}

impl Form {
    /// Returns the discount code [`discount::Outcome`] of this [`Form`].
    #[must_use]
    pub fn discount(&self) -> discount::Outcome {
        discount::validate(&self.discount_code)
    }

    /// Quotes the selected [`Tier`] of this [`Form`].
    ///
    /// Unrecognized discount codes are ignored here, so the base price is
    /// still shown while the code is reported as a [`Violation`].
    #[must_use]
    pub fn quote(&self) -> Quote {
        Quote::new(self.tier, self.discount())
    }

    /// Validates this [`Form`] into a [`Registration`].
    ///
    /// # Errors
    ///
    /// With every found [`Violation`] in the [`Form`] fields order.
    pub fn validate(&self) -> Result<Registration, Vec<Violation>> {
        use Violation as V;

        let mut violations = Vec::new();

        let name = if self.name.trim().is_empty() {
            violations.push(V::NameRequired);
            None
        } else {
            Name::new(&self.name).or_else(|| {
                violations.push(V::NameTooShort);
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

        let work_location = WorkLocation::new(&self.work_location).or_else(|| {
            violations.push(V::WorkLocationRequired);
            None
        });

        let email = if self.email.trim().is_empty() {
            violations.push(V::EmailRequired);
            None
        } else {
            Email::new(self.email.clone()).or_else(|| {
                violations.push(V::EmailInvalid);
                None
            })
        };

        let discount_code = Code::new(&self.discount_code);
        if discount_code.as_ref().is_some_and(|c| !c.is_recognized()) {
            violations.push(V::DiscountCodeInvalid);
        }

        match (name, phone, work_location, email) {
            (Some(name), Some(phone), Some(work_location), Some(email))
                if violations.is_empty() =>
            {
                Ok(Registration {
                    tier: self.tier,
                    name,
                    phone,
                    work_location,
                    email,
                    discount_code,
                })
            }
            _ => Err(violations),
        }
    }
}

/// Field of a registration [`Form`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
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

/// Violation found while validating a registration [`Form`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Violation {
    /// Customer name is blank.
    #[display("اسم العميل مطلوب")]
    NameRequired,

    /// Customer name is too short.
    #[display("الاسم يجب أن يكون 3 أحرف على الأقل")]
    NameTooShort,

    /// Phone number is blank.
    #[display("رقم الجوال مطلوب")]
    PhoneRequired,

    /// Phone number is malformed.
    #[display("رقم الجوال غير صحيح")]
    PhoneInvalid,

    /// Work location is blank.
    #[display("مكان العمل مطلوب")]
    WorkLocationRequired,

    /// Email address is blank.
    #[display("البريد الإلكتروني مطلوب")]
    EmailRequired,

    /// Email address is malformed.
    #[display("البريد الإلكتروني غير صحيح")]
    EmailInvalid,

    /// Discount code is not recognized.
    #[display("كود الخصم غير صحيح")]
    DiscountCodeInvalid,
}

impl Violation {
    /// Returns the [`Field`] this [`Violation`] is reported for.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameRequired | Self::NameTooShort => Field::Name,
            Self::PhoneRequired | Self::PhoneInvalid => Field::Phone,
            Self::WorkLocationRequired => Field::WorkLocation,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::DiscountCodeInvalid => Field::DiscountCode,
        }
    }
}

/// Validated subscription registration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registration {
    /// [`Tier`] of the card to subscribe for.
    pub tier: Tier,

    /// Customer [`Name`].
    pub name: Name,

    /// Customer [`Phone`].
    pub phone: Phone,

    /// Customer [`WorkLocation`].
    pub work_location: WorkLocation,

    /// Customer [`Email`].
    pub email: Email,

    /// Recognized discount [`Code`], if any.
    pub discount_code: Option<Code>,
}

impl Registration {
    /// Quotes this [`Registration`].
    #[must_use]
    pub fn quote(&self) -> Quote {
        Quote::new(self.tier, self.discount_code.as_ref().into())
    }
}

/// Invoice issued for a [`Registration`], awaiting a bank transfer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invoice {
    /// [`Number`] of this [`Invoice`].
    pub number: Number,

    /// [`DateTime`] this [`Invoice`] was issued at.
    pub issued_at: IssueDateTime,

    /// [`Registration`] this [`Invoice`] is issued for.
    pub registration: Registration,

    /// [`Quote`] to be paid.
    pub quote: Quote,
}

impl Invoice {
    /// Issues a new [`Invoice`] for the provided [`Registration`].
    #[must_use]
    pub fn issue(registration: Registration, issued_at: IssueDateTime) -> Self {
        Self::restore(Number::at(issued_at), registration, issued_at)
    }

    /// Restores an already issued [`Invoice`] by its [`Number`].
    #[must_use]
    pub fn restore(
        number: Number,
        registration: Registration,
        issued_at: IssueDateTime,
    ) -> Self {
        let quote = registration.quote();
        Self {
            number,
            issued_at,
            registration,
            quote,
        }
    }

    /// Indicates whether a discount is applied to this [`Invoice`].
    #[must_use]
    pub fn discount_applied(&self) -> bool {
        self.quote.is_discounted()
    }
}

/// Number of an [`Invoice`] in `INV-<unix millis>` format.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Number(String);

impl Number {
    /// Creates a new [`Number`] for an [`Invoice`] issued at the provided
    /// [`DateTime`].
    #[must_use]
    pub fn at(issued_at: IssueDateTime) -> Self {
        Self(format!("INV-{}", issued_at.unix_timestamp_millis()))
    }

    /// Creates a new [`Number`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Number`].
    fn check(number: &str) -> bool {
        /// Regular expression checking [`Number`] format.
        static REGEX: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^INV-[0-9]{1,20}$").expect("valid regex"));

        REGEX.is_match(number)
    }
}

impl FromStr for Number {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Number`")
    }
}

/// [`DateTime`] when an [`Invoice`] was issued.
pub type IssueDateTime = DateTimeOf<(Invoice, unit::Issue)>;
