//! Discount [`Code`] definitions.

use common::Percent;
use derive_more::{AsRef, Display};

/// The only currently recognized discount [`Code`].
pub const RECOGNIZED: &str = "BAKM589";

/// Reduction off the base price granted by the [`RECOGNIZED`] [`Code`].
pub const RATE: Percent = Percent::from_tenths(500);

/// Normalized discount code: trimmed and uppercased, never empty.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Code(String);

impl Code {
    /// Normalizes the provided raw `code` into a [`Code`].
    ///
    /// [`None`] is returned if nothing but whitespace is provided.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Option<Self> {
        let code = code.as_ref().trim();
        (!code.is_empty()).then(|| Self(code.to_uppercase()))
    }

    /// Indicates whether this [`Code`] grants a discount.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.0 == RECOGNIZED
    }
}

/// Outcome of validating a raw discount code.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Outcome {
    /// No code supplied.
    Empty,

    /// Recognized code supplied.
    Valid,

    /// Unrecognized code supplied.
    Invalid,
}

impl Outcome {
    /// Indicates whether this [`Outcome`] grants a discount.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<Option<&Code>> for Outcome {
    fn from(code: Option<&Code>) -> Self {
        match code {
            None => Self::Empty,
            Some(c) if c.is_recognized() => Self::Valid,
            Some(_) => Self::Invalid,
        }
    }
}

/// Validates the provided raw discount `code`.
#[must_use]
pub fn validate(code: &str) -> Outcome {
    Code::new(code).as_ref().into()
}

#[cfg(test)]
mod spec {
    use proptest::prelude::*;

    use super::{validate, Code, Outcome};

    #[test]
    fn ignores_case_and_surrounding_whitespace() {
        assert_eq!(validate("bakm589"), Outcome::Valid);
        assert_eq!(validate("BAKM589"), Outcome::Valid);
        assert_eq!(validate("  BaKm589  "), Outcome::Valid);
    }

    #[test]
    fn treats_blank_as_empty() {
        assert_eq!(validate(""), Outcome::Empty);
        assert_eq!(validate("   \t"), Outcome::Empty);
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(validate("BAKM58"), Outcome::Invalid);
        assert_eq!(validate("BAKM 589"), Outcome::Invalid);
        assert!(!Outcome::Invalid.is_applied());
        assert!(!Outcome::Empty.is_applied());
        assert!(Outcome::Valid.is_applied());
    }

    #[test]
    fn normalizes_code() {
        assert_eq!(Code::new(" save10 ").unwrap().as_ref(), "SAVE10");
        assert!(Code::new(" ").is_none());
    }

    proptest! {
        #[test]
        fn only_one_code_is_valid(s in "\\PC{0,12}") {
            let outcome = validate(&s);
            if s.trim().is_empty() {
                prop_assert_eq!(outcome, Outcome::Empty);
            } else if s.trim().to_uppercase() == "BAKM589" {
                prop_assert_eq!(outcome, Outcome::Valid);
            } else {
                prop_assert_eq!(outcome, Outcome::Invalid);
            }
        }
    }
}
