//! Customer contact details definitions.

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display};
use regex::Regex;

/// Full name of a customer.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Minimal number of characters in a [`Name`].
    pub const MIN_LEN: usize = 3;

    /// Creates a new [`Name`] if the given `name` is valid once trimmed.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        Self::check(name).then(|| Self(name.to_owned()))
    }

    /// Checks whether the given trimmed `name` is a valid [`Name`].
    fn check(name: &str) -> bool {
        name.chars().count() >= Self::MIN_LEN
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Mobile phone number of a customer, without any whitespace.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid once all the
    /// whitespace is removed from it.
    #[must_use]
    pub fn new(number: impl AsRef<str>) -> Option<Self> {
        let number: String = number
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: &str) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[+]?[0-9]{10,15}$").expect("valid regex")
        });

        REGEX.is_match(number)
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Email address of a customer.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: &str) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        REGEX.is_match(address)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Place a customer works at.
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str)]
pub struct WorkLocation(String);

impl WorkLocation {
    /// Creates a new [`WorkLocation`] if the given `place` is not blank.
    #[must_use]
    pub fn new(place: impl AsRef<str>) -> Option<Self> {
        let place = place.as_ref().trim();
        (!place.is_empty()).then(|| Self(place.to_owned()))
    }
}

#[cfg(test)]
mod spec {
    use super::{Email, Name, Phone, WorkLocation};

    #[test]
    fn name_needs_three_chars() {
        assert_eq!(Name::new("  علي  ").unwrap().as_ref(), "علي");
        assert!(Name::new("Al").is_none());
        assert!(Name::new("  ").is_none());
    }

    #[test]
    fn phone_ignores_whitespace() {
        assert_eq!(Phone::new("+966 59 031 7360").unwrap().as_ref(), "+966590317360");
        assert!(Phone::new("0501234567").is_some());
        assert!(Phone::new("050123456").is_none());
        assert!(Phone::new("05012345678901234").is_none());
        assert!(Phone::new("050-123-4567").is_none());
        assert!(Phone::new("++966590317360").is_none());
    }

    #[test]
    fn email_needs_at_and_dot() {
        assert!(Email::new("user@example.com").is_some());
        assert!(Email::new("user@example").is_none());
        assert!(Email::new("user example@x.com").is_none());
        assert!(Email::new(" user@example.com").is_none());
        assert!(Email::new("@example.com").is_none());
    }

    #[test]
    fn work_location_is_trimmed() {
        assert_eq!(WorkLocation::new(" الرياض ").unwrap().as_ref(), "الرياض");
        assert!(WorkLocation::new("\t").is_none());
    }
}
