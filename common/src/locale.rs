//! [`Locale`]-aware number formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::define_kind;

define_kind! {
    #[doc = "Locale to format numbers for display."]
    enum Locale {
        #[doc = "Arabic (Saudi Arabia), using Arabic-Indic digits."]
        ArSa = 1,

        #[doc = "English (United States)."]
        EnUs = 2,
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ArSa
    }
}

impl Locale {
    /// Returns the thousands group separator of this [`Locale`].
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::ArSa => '\u{066C}',
            Self::EnUs => ',',
        }
    }

    /// Returns the decimal separator of this [`Locale`].
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::ArSa => '\u{066B}',
            Self::EnUs => '.',
        }
    }

    /// Returns the prefix marking negative numbers in this [`Locale`].
    #[must_use]
    pub const fn minus_sign(self) -> &'static str {
        match self {
            // Arabic letter mark keeps the sign attached in RTL text.
            Self::ArSa => "\u{061C}-",
            Self::EnUs => "-",
        }
    }

    /// Maps the provided ASCII digit into the digit of this [`Locale`].
    #[must_use]
    pub fn digit(self, ascii: char) -> char {
        match self {
            Self::ArSa => ascii
                .to_digit(10)
                .and_then(|d| char::from_u32(0x0660 + d))
                .unwrap_or(ascii),
            Self::EnUs => ascii,
        }
    }

    /// Formats the provided `value` with exactly `fraction_digits` digits
    /// after the decimal separator, grouping thousands.
    ///
    /// The `value` is rounded half away from zero, so only the displayed
    /// string is affected, never the value itself.
    #[must_use]
    pub fn format(self, value: Decimal, fraction_digits: u32) -> String {
        let rounded = value.round_dp_with_strategy(
            fraction_digits,
            RoundingStrategy::MidpointAwayFromZero,
        );

        let mut plain = rounded.abs();
        plain.rescale(fraction_digits);
        let plain = plain.to_string();
        let (int, frac) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut out = String::with_capacity(plain.len() * 3);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push_str(self.minus_sign());
        }
        let len = int.len();
        for (i, c) in int.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator());
            }
            out.push(self.digit(c));
        }
        if !frac.is_empty() {
            out.push(self.decimal_separator());
            out.extend(frac.chars().map(|c| self.digit(c)));
        }
        out
    }
}

#[cfg(test)]
mod spec {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use super::Locale;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn groups_thousands_in_english() {
        assert_eq!(Locale::EnUs.format(decimal("1500"), 0), "1,500");
        assert_eq!(Locale::EnUs.format(decimal("1234567"), 0), "1,234,567");
        assert_eq!(Locale::EnUs.format(decimal("999"), 0), "999");
        assert_eq!(Locale::EnUs.format(decimal("0"), 0), "0");
        assert_eq!(Locale::EnUs.format(decimal("-240"), 0), "-240");
        assert_eq!(Locale::EnUs.format(decimal("-1260"), 0), "-1,260");
    }

    #[test]
    fn pads_and_rounds_fraction() {
        assert_eq!(Locale::EnUs.format(decimal("350"), 2), "350.00");
        assert_eq!(Locale::EnUs.format(decimal("1234.5"), 2), "1,234.50");
        assert_eq!(Locale::EnUs.format(decimal("0.125"), 2), "0.13");
        assert_eq!(Locale::EnUs.format(decimal("2.5"), 0), "3");
    }

    #[test]
    fn never_prints_negative_zero() {
        assert_eq!(Locale::EnUs.format(decimal("-0.001"), 2), "0.00");
    }

    #[test]
    fn uses_arabic_indic_digits() {
        assert_eq!(
            Locale::ArSa.format(decimal("1260"), 0),
            "\u{0661}\u{066C}\u{0662}\u{0666}\u{0660}",
        );
        assert_eq!(
            Locale::ArSa.format(decimal("-240"), 0),
            "\u{061C}-\u{0662}\u{0664}\u{0660}",
        );
        assert_eq!(
            Locale::ArSa.format(decimal("7.5"), 2),
            "\u{0667}\u{066B}\u{0665}\u{0660}",
        );
    }

    proptest! {
        #[test]
        fn strips_back_to_the_same_integer(n in -10_000_000_i64..10_000_000) {
            let formatted = Locale::EnUs.format(Decimal::from(n), 0);
            let digits: String =
                formatted.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(digits.parse::<i64>().unwrap(), n);
        }
    }
}
