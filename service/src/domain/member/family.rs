//! Family [`Member`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{member, Tier};

/// Relative covered by the card of a card holder.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Member {
    /// ID of this family [`Member`].
    pub id: Id,

    /// ID of the card holder this family [`Member`] belongs to.
    #[serde(rename = "user_id")]
    pub holder_id: member::Id,

    /// [`Name`] of this family [`Member`].
    #[serde(rename = "member_name")]
    pub name: Name,

    /// Relationship of this family [`Member`] to the card holder.
    #[serde(default)]
    pub relationship: Option<String>,

    /// Phone number of this family [`Member`].
    #[serde(default)]
    pub phone: Option<String>,

    /// Email of this family [`Member`].
    #[serde(default)]
    pub email: Option<String>,

    /// Indicator whether this family [`Member`] is covered by the card.
    #[serde(default)]
    pub is_active: bool,

    /// [`DateTime`] when this family [`Member`] was added.
    pub created_at: CreationDateTime,
}

/// Maximum number of family [`Member`]s a card of the provided [`Tier`]
/// covers besides its holder.
#[must_use]
pub const fn max_members(tier: Tier) -> usize {
    tier.capacity() as usize - 1
}

/// ID of a family [`Member`].
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

/// Name of a family [`Member`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[as_ref(str)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Maximum number of characters in a [`Name`].
    pub const MAX_LEN: usize = 100;

    /// Creates a new [`Name`] out of the provided raw `name`, trimming it.
    ///
    /// [`None`] if the `name` is blank or too long.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        (!name.is_empty() && name.chars().count() <= Self::MAX_LEN)
            .then(|| Self(name.to_owned()))
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let raw = String::deserialize(d)?;
        Self::new(&raw).ok_or_else(|| D::Error::custom("invalid `Name`"))
    }
}

/// [`DateTime`] when a family [`Member`] was added.
pub type CreationDateTime = DateTimeOf<(Member, unit::Creation)>;
