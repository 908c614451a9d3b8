//! [`Partner`] definitions.

use common::Percent;
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business giving discounts to card holders.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Partner {
    /// ID of this [`Partner`].
    pub id: Id,

    /// Name of this [`Partner`].
    pub name: String,

    /// ID of the [`Category`] this [`Partner`] belongs to.
    pub category_id: CategoryId,

    /// URL of this [`Partner`]'s logo.
    pub logo_url: String,

    /// Alternative text of this [`Partner`]'s logo.
    pub logo_alt: String,

    /// Discount this [`Partner`] gives to card holders.
    pub discount_percentage: Percent,

    /// Street address of this [`Partner`].
    pub address: String,

    /// Phone number of this [`Partner`].
    pub phone: String,

    /// Google Maps link to this [`Partner`]'s location.
    #[serde(default)]
    pub google_maps_location: Option<String>,

    /// City this [`Partner`] is located in.
    pub location_city: String,

    /// Special terms of this [`Partner`]'s discount.
    #[serde(default)]
    pub special_terms: Option<String>,

    /// Indicator whether this [`Partner`] is featured.
    #[serde(default)]
    pub is_featured: bool,
}

/// ID of a [`Partner`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

/// Category grouping [`Partner`]s in the directory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Category {
    /// ID of this [`Category`].
    pub id: CategoryId,

    /// Name of this [`Category`].
    pub name: String,

    /// Name of the icon representing this [`Category`].
    pub icon: String,

    /// Human-readable range of discounts given in this [`Category`].
    pub discount_range: String,

    /// Color this [`Category`] is highlighted with.
    pub color: String,
}

/// ID of a partner [`Category`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(str)]
#[from(&str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct CategoryId(String);
