//! [`Money`]-related definitions.

use std::{fmt, iter, ops, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{define_kind, Locale, Percent};

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Zero amount in [`Currency::Sar`].
    pub const ZERO: Self = Self::sar(Decimal::ZERO);

    /// Creates a new [`Money`] amount in [`Currency::Sar`].
    #[must_use]
    pub const fn sar(amount: Decimal) -> Self {
        Self {
            amount,
            currency: Currency::Sar,
        }
    }

    /// Rounds this [`Money`] to whole currency units, rounding halves away
    /// from zero.
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency,
        }
    }

    /// Returns the provided [`Percent`] share of this [`Money`], unrounded.
    #[must_use]
    pub fn share(self, percent: Percent) -> Self {
        Self {
            amount: percent.of(self.amount),
            currency: self.currency,
        }
    }

    /// Formats this [`Money`] for display in the provided [`Locale`],
    /// followed by the localized [`Currency`] symbol.
    ///
    /// Whole amounts are shown without fraction digits, other ones with two.
    #[must_use]
    pub fn localized(&self, locale: Locale) -> String {
        format!(
            "{} {}",
            self.localized_amount(locale),
            self.currency.symbol(locale),
        )
    }

    /// Formats only the amount of this [`Money`] in the provided [`Locale`].
    #[must_use]
    pub fn localized_amount(&self, locale: Locale) -> String {
        let digits = if self.amount.is_integer() { 0 } else { 2 };
        locale.format(self.amount, digits)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.trunc().normalize())
        } else {
            write!(f, "{}{currency}", amount.normalize())
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 || !s.is_char_boundary(s.len() - 3) {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

impl ops::Add for Money {
    type Output = Self;

    /// # Panics
    ///
    /// If the [`Currency`] of both amounts differs.
    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.currency, rhs.currency, "currency mismatch");
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

impl ops::Sub for Money {
    type Output = Self;

    /// # Panics
    ///
    /// If the [`Currency`] of both amounts differs.
    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(self.currency, rhs.currency, "currency mismatch");
        Self {
            amount: self.amount - rhs.amount,
            currency: self.currency,
        }
    }
}

impl iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Saudi Riyal."]
        Sar = 1,
    }
}

impl Currency {
    /// Returns the symbol of this [`Currency`] in the provided [`Locale`].
    #[must_use]
    pub const fn symbol(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Sar, Locale::ArSa) => "ريال",
            (Self::Sar, Locale::EnUs) => "SAR",
        }
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use std::str::FromStr as _;

    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let s = String::deserialize(d)?;
            Self::from_str(&s).map_err(D::Error::custom)
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is an integer;
    /// - `minor` is an optional integer;
    /// - `currency` is a three-letter currency code.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}
