//! [`Locale`] definitions.

use juniper::GraphQLEnum;

/// Locale to format amounts for display in.
#[derive(Clone, Copy, Debug, Default, Eq, GraphQLEnum, PartialEq)]
pub enum Locale {
    /// Arabic (Saudi Arabia), with Arabic-Indic digits.
    #[default]
    ArSa,

    /// English (United States).
    EnUs,
}

impl From<Locale> for common::Locale {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::ArSa => Self::ArSa,
            Locale::EnUs => Self::EnUs,
        }
    }
}
