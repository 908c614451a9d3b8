//! [`Percent`]-related definitions.

use std::{fmt, str::FromStr};

#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use rust_decimal::Decimal;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided values is
    /// not less than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "`#[expect]` is not fulfilled inside `unsafe` blocks"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must not be less than `0` and not greater than
    /// `100`.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Creates a new [`Percent`] from the provided number of tenths of a
    /// percent, so `175` stands for `17.5%`.
    ///
    /// # Panics
    ///
    /// If `tenths` is greater than `1000`. Fails the build when used in
    /// `const` context.
    #[must_use]
    pub const fn from_tenths(tenths: u32) -> Self {
        assert!(tenths <= 1000, "`Percent` cannot be greater than `100`");
        Self(Decimal::from_parts(tenths, 0, 0, false, 1))
    }

    /// Returns the numeric value of this [`Percent`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Applies this [`Percent`] to the provided `amount`.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            Serialize::serialize(&self.0, s)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            Self::new(<Decimal as Deserialize>::deserialize(d)?)
                .ok_or_else(|| D::Error::custom("invalid percent value"))
        }
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Floating-point percentage.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Percent = super::Percent;

    impl Percent {
        fn to_output<S: ScalarValue>(m: &Percent) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Percent` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Percent` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use super::Percent;

    #[test]
    fn accepts_bounds_inclusive() {
        assert!(Percent::new(Decimal::ZERO).is_some());
        assert!(Percent::new(Decimal::ONE_HUNDRED).is_some());
        assert!(Percent::new(Decimal::NEGATIVE_ONE).is_none());
        assert!(Percent::new(Decimal::from(101)).is_none());
    }

    #[test]
    fn parses_fractional() {
        let p = Percent::from_str("17.5").unwrap();
        assert_eq!(p.of(Decimal::from(300)), Decimal::from_str("52.5").unwrap());
        assert!(Percent::from_str("abc").is_err());
        assert!(Percent::from_str("100.01").is_err());
    }

    #[test]
    fn builds_from_tenths() {
        const RATE: Percent = Percent::from_tenths(275);
        assert_eq!(RATE.value(), Decimal::from_str("27.5").unwrap());
        assert_eq!(RATE.to_string(), "27.5");
        assert_eq!(Percent::from_tenths(350).to_string(), "35");
    }

    proptest! {
        #[test]
        fn never_exceeds_the_amount(
            pct in 0_u32..=100,
            amount in 0_u32..1_000_000,
        ) {
            let p = Percent::new(Decimal::from(pct)).unwrap();
            let amount = Decimal::from(amount);
            let share = p.of(amount);
            prop_assert!(share >= Decimal::ZERO);
            prop_assert!(share <= amount);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_decimal() {
        let p = Percent::from_str("17.5").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Percent>(&json).unwrap(), p);
        assert_eq!(serde_json::from_str::<Percent>("17.5").unwrap(), p);
        assert!(serde_json::from_str::<Percent>("120").is_err());
        assert!(serde_json::from_str::<Percent>("-1").is_err());
    }
}
