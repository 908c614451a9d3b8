//! [`Member`] definitions.

pub mod family;
pub mod session;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tier;

pub use self::session::Session;

/// Card holder registered in the identity service.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Member {
    /// ID of this [`Member`].
    pub id: Id,

    /// Email of this [`Member`].
    #[serde(default)]
    pub email: Option<String>,

    /// Full name of this [`Member`].
    #[serde(default)]
    pub full_name: Option<String>,

    /// Phone number of this [`Member`].
    #[serde(default)]
    pub phone: Option<String>,

    /// Postal address of this [`Member`].
    #[serde(default)]
    pub address: Option<String>,

    /// City this [`Member`] lives in.
    #[serde(default)]
    pub city: Option<String>,

    /// Place this [`Member`] works at.
    #[serde(default)]
    pub work_at: Option<String>,

    /// URL of this [`Member`]'s card image.
    #[serde(default)]
    pub card_image: Option<String>,

    /// [`Tier`] of this [`Member`]'s card, if one is issued.
    #[serde(rename = "card_type", default, with = "card_type")]
    pub tier: Option<Tier>,

    /// [`DateTime`] when the membership started.
    #[serde(default)]
    pub membership_start_date: Option<StartDateTime>,

    /// [`DateTime`] when the membership expires.
    #[serde(default)]
    pub membership_expiry_date: Option<ExpirationDateTime>,

    /// Indicator whether the membership is active.
    #[serde(default)]
    pub is_active: bool,

    /// [`DateTime`] when this [`Member`] was created.
    pub created_at: CreationDateTime,
}

impl Member {
    /// Number of days left before the membership expires, counting any
    /// started day as a full one.
    ///
    /// [`None`] if the membership has no expiry date.
    #[must_use]
    pub fn days_until_expiry<Of: ?Sized>(
        &self,
        now: DateTimeOf<Of>,
    ) -> Option<i64> {
        self.membership_expiry_date.map(|at| now.days_until(at))
    }

    /// Returns the [`RenewalNotice`] to be shown at the provided
    /// [`DateTime`], if any.
    #[must_use]
    pub fn renewal_notice<Of: ?Sized>(
        &self,
        now: DateTimeOf<Of>,
    ) -> Option<RenewalNotice> {
        RenewalNotice::new(self.days_until_expiry(now)?)
    }
}

/// Notice urging a [`Member`] to renew the membership.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenewalNotice {
    /// Membership expires within a month.
    Reminder {
        /// Number of days left.
        days_left: i64,
    },

    /// Membership expires within a week or has already expired.
    Urgent {
        /// Number of days left.
        days_left: i64,
    },
}

impl RenewalNotice {
    /// Number of days before expiry a [`RenewalNotice::Reminder`] starts.
    pub const REMINDER_DAYS: i64 = 30;

    /// Number of days before expiry a [`RenewalNotice::Urgent`] starts.
    pub const URGENT_DAYS: i64 = 7;

    /// Creates a new [`RenewalNotice`] for the provided number of days left,
    /// if it's time to renew.
    #[must_use]
    pub const fn new(days_left: i64) -> Option<Self> {
        if days_left > Self::REMINDER_DAYS {
            None
        } else if days_left > Self::URGENT_DAYS {
            Some(Self::Reminder { days_left })
        } else {
            Some(Self::Urgent { days_left })
        }
    }

    /// Returns the number of days left before the membership expires.
    #[must_use]
    pub const fn days_left(self) -> i64 {
        match self {
            Self::Reminder { days_left } | Self::Urgent { days_left } => {
                days_left
            }
        }
    }

    /// Indicates whether this [`RenewalNotice`] is urgent.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Urgent { .. })
    }
}

/// ID of a [`Member`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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

/// [`DateTime`] when a [`Member`] was created.
pub type CreationDateTime = DateTimeOf<(Member, unit::Creation)>;

/// [`DateTime`] when a [`Member`]ship started.
pub type StartDateTime = DateTimeOf<(Member, unit::Start)>;

/// [`DateTime`] when a [`Member`]ship expires.
pub type ExpirationDateTime = DateTimeOf<(Member, unit::Expiration)>;

mod card_type {
    //! [`Tier`] stored either as its numeric ID or as its lowercase name.

    use std::fmt;

    use serde::{de, Deserializer, Serialize as _, Serializer};

    use crate::domain::Tier;

    #[expect(clippy::ref_option, reason = "`serde(with)` signature")]
    pub(super) fn serialize<S: Serializer>(
        tier: &Option<Tier>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        tier.map(Tier::u8).serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Tier>, D::Error> {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Option<Tier>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a card tier ID or name")
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(None)
            }

            fn visit_some<D: Deserializer<'de>>(
                self,
                d: D,
            ) -> Result<Self::Value, D::Error> {
                d.deserialize_any(self)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u8::try_from(v)
                    .ok()
                    .and_then(Tier::from_u8)
                    .map(Some)
                    .ok_or_else(|| E::custom(format!("unknown card tier `{v}`")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(format!("unknown card tier `{v}`")))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse()
                    .map(Some)
                    .map_err(|_| E::custom(format!("unknown card tier `{v}`")))
            }
        }

        d.deserialize_option(Visitor)
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::DateTime;

    use crate::domain::Tier;

    use super::{Member, RenewalNotice};

    const DAY: Duration = Duration::from_secs(86_400);

    fn member(expiry: Option<DateTime>) -> Member {
        Member {
            id: super::Id::default(),
            email: None,
            full_name: Some("نورة".into()),
            phone: None,
            address: None,
            city: None,
            work_at: None,
            card_image: None,
            tier: Some(Tier::Family),
            membership_start_date: None,
            membership_expiry_date: expiry.map(DateTime::coerce),
            is_active: true,
            created_at: DateTime::UNIX_EPOCH.coerce(),
        }
    }

    #[test]
    fn counts_started_days() {
        let now = DateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let m = member(Some(now + DAY * 3 + Duration::from_secs(1)));
        assert_eq!(m.days_until_expiry(now), Some(4));

        let m = member(Some(now - DAY));
        assert_eq!(m.days_until_expiry(now), Some(-1));

        assert_eq!(member(None).days_until_expiry(now), None);
        assert_eq!(member(None).renewal_notice(now), None);
    }

    #[test]
    fn escalates_renewal_notice() {
        assert_eq!(RenewalNotice::new(31), None);
        assert_eq!(
            RenewalNotice::new(30),
            Some(RenewalNotice::Reminder { days_left: 30 }),
        );
        assert_eq!(
            RenewalNotice::new(8),
            Some(RenewalNotice::Reminder { days_left: 8 }),
        );
        assert!(RenewalNotice::new(7).unwrap().is_urgent());
        assert!(RenewalNotice::new(-2).unwrap().is_urgent());
        assert_eq!(RenewalNotice::new(-2).unwrap().days_left(), -2);
    }

    #[test]
    fn decodes_card_type_from_id_or_name() {
        let row = |card_type: &str| {
            serde_json::from_str::<Member>(&format!(
                r#"{{
                    "id": "3b5e0d7c-6f1a-4a43-9a0f-7d2f1c9b8e21",
                    "card_type": {card_type},
                    "is_active": true,
                    "created_at": "2024-01-01T00:00:00+00:00"
                }}"#,
            ))
        };

        assert_eq!(row("1").unwrap().tier, Some(Tier::Vip));
        assert_eq!(row(r#""family""#).unwrap().tier, Some(Tier::Family));
        assert_eq!(row("null").unwrap().tier, None);
        assert!(row("9").is_err());
        assert!(row(r#""gold""#).is_err());
    }
}
