//! Card holder-related definitions.

use common::DateTime;
use derive_more::{Display, From, Into};
use juniper::{GraphQLObject, GraphQLScalar};
use service::{
    domain::{self, member},
    read,
};
use uuid::Uuid;

use crate::api::pricing::Tier;

/// Unique identifier of a card holder.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(member::Id)]
#[into(member::Id)]
#[graphql(name = "MemberId", transparent)]
pub struct Id(Uuid);

/// Profile of a card holder.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "MemberProfile")]
pub struct Profile {
    /// Unique identifier of the card holder.
    pub id: Id,

    /// Email of the card holder.
    pub email: Option<String>,

    /// Full name of the card holder.
    pub full_name: Option<String>,

    /// Phone number of the card holder.
    pub phone: Option<String>,

    /// Street address of the card holder.
    pub address: Option<String>,

    /// City the card holder lives in.
    pub city: Option<String>,

    /// Place the card holder works at.
    pub work_at: Option<String>,

    /// URL of the card image.
    pub card_image: Option<String>,

    /// `CardTier` of the held card, if any.
    pub tier: Option<Tier>,

    /// `DateTime` when the membership started.
    pub membership_start_date: Option<DateTime>,

    /// `DateTime` when the membership expires.
    pub membership_expiry_date: Option<DateTime>,

    /// Indicator whether the membership is active.
    pub is_active: bool,

    /// `DateTime` when the profile was created.
    pub created_at: DateTime,
}

impl From<domain::Member> for Profile {
    fn from(member: domain::Member) -> Self {
        let domain::Member {
            id,
            email,
            full_name,
            phone,
            address,
            city,
            work_at,
            card_image,
            tier,
            membership_start_date,
            membership_expiry_date,
            is_active,
            created_at,
        } = member;
        Self {
            id: id.into(),
            email,
            full_name,
            phone,
            address,
            city,
            work_at,
            card_image,
            tier: tier.map(Into::into),
            membership_start_date: membership_start_date.map(|d| d.coerce()),
            membership_expiry_date: membership_expiry_date.map(|d| d.coerce()),
            is_active,
            created_at: created_at.coerce(),
        }
    }
}

/// Notice urging a card holder to renew the membership.
#[derive(Clone, Copy, Debug, GraphQLObject)]
pub struct RenewalNotice {
    /// Number of days left before the membership expires.
    pub days_left: i32,

    /// Indicator whether the membership expires within a week or has
    /// expired already.
    pub is_urgent: bool,
}

impl From<member::RenewalNotice> for RenewalNotice {
    fn from(notice: member::RenewalNotice) -> Self {
        Self {
            days_left: saturate(notice.days_left()),
            is_urgent: notice.is_urgent(),
        }
    }
}

/// Dashboard of the authenticated card holder.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "MemberDashboard")]
pub struct Dashboard {
    /// Profile of the card holder, if it exists.
    pub profile: Option<Profile>,

    /// Number of active family members.
    pub family_count: i32,

    /// Maximum number of family members the held card covers.
    pub family_limit: Option<i32>,

    /// Number of days left before the membership expires.
    pub days_until_expiry: Option<i32>,

    /// Notice to renew the membership, if it's time to.
    pub renewal_notice: Option<RenewalNotice>,

    /// `DateTime` when the current session expires.
    pub session_expires_at: DateTime,
}

impl Dashboard {
    /// Renders the provided [`read::Dashboard`] as of the provided `now`.
    #[must_use]
    pub fn new(
        dashboard: read::Dashboard,
        now: DateTime,
        session_expires_at: DateTime,
    ) -> Self {
        let read::Dashboard {
            member_id: _,
            profile,
            family_count,
        } = dashboard;
        Self {
            days_until_expiry: profile
                .as_ref()
                .and_then(|p| p.days_until_expiry(now))
                .map(saturate),
            renewal_notice: profile
                .as_ref()
                .and_then(|p| p.renewal_notice(now))
                .map(Into::into),
            family_limit: profile
                .as_ref()
                .and_then(|p| p.tier)
                .map(|t| saturate(member::family::max_members(t))),
            family_count: saturate(u32::from(family_count)),
            profile: profile.map(Into::into),
            session_expires_at,
        }
    }
}

/// Converts the provided number into [`i32`], saturating on overflow.
fn saturate<N: TryInto<i32> + PartialOrd + Default>(n: N) -> i32 {
    let negative = n < N::default();
    n.try_into()
        .unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

pub mod family {
    //! Family member-related definitions.

    use common::DateTime;
    use derive_more::{AsRef, Display, From, Into};
    use juniper::{GraphQLObject, GraphQLScalar};
    use service::domain::member::family;
    use uuid::Uuid;

    use crate::api::scalar;

    /// Unique identifier of a `FamilyMember`.
    #[derive(
        Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
    )]
    #[from(family::Id)]
    #[into(family::Id)]
    #[graphql(name = "FamilyMemberId", transparent)]
    pub struct Id(Uuid);

    /// Name of a `FamilyMember`.
    #[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
    #[graphql(
        name = "FamilyMemberName",
        with = scalar::Via::<family::Name>,
    )]
    pub struct Name(family::Name);

    /// Relative covered by the card of a card holder.
    #[derive(Clone, Debug, GraphQLObject)]
    #[graphql(name = "FamilyMember")]
    pub struct Member {
        /// Unique identifier of this `FamilyMember`.
        pub id: Id,

        /// Name of this `FamilyMember`.
        pub name: Name,

        /// Relationship of this `FamilyMember` to the card holder.
        pub relationship: Option<String>,

        /// Phone number of this `FamilyMember`.
        pub phone: Option<String>,

        /// Email of this `FamilyMember`.
        pub email: Option<String>,

        /// Indicator whether this `FamilyMember` is covered by the card.
        pub is_active: bool,

        /// `DateTime` when this `FamilyMember` was added.
        pub created_at: DateTime,
    }

    impl From<family::Member> for Member {
        fn from(member: family::Member) -> Self {
            let family::Member {
                id,
                holder_id: _,
                name,
                relationship,
                phone,
                email,
                is_active,
                created_at,
            } = member;
            Self {
                id: id.into(),
                name: name.into(),
                relationship,
                phone,
                email,
                is_active,
                created_at: created_at.coerce(),
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::DateTime;
    use service::{
        domain::{self, member},
        read,
    };

    use super::{saturate, Dashboard};

    fn profile(expires_in_days: u64) -> domain::Member {
        let now = DateTime::UNIX_EPOCH;
        domain::Member {
            id: member::Id::default(),
            email: Some("m@example.com".into()),
            full_name: None,
            phone: None,
            address: None,
            city: None,
            work_at: None,
            card_image: None,
            tier: Some(domain::Tier::Family),
            membership_start_date: Some(now.coerce()),
            membership_expiry_date: Some(
                (now + Duration::from_secs(expires_in_days * 86_400)).coerce(),
            ),
            is_active: true,
            created_at: now.coerce(),
        }
    }

    #[test]
    fn renders_renewal_state() {
        let dashboard = Dashboard::new(
            read::Dashboard {
                member_id: member::Id::default(),
                profile: Some(profile(5)),
                family_count: 2.into(),
            },
            DateTime::UNIX_EPOCH,
            DateTime::UNIX_EPOCH,
        );
        assert_eq!(dashboard.days_until_expiry, Some(5));
        assert!(dashboard.renewal_notice.is_some_and(|n| n.is_urgent));
        assert_eq!(dashboard.family_count, 2);
        assert_eq!(dashboard.family_limit, Some(5));
    }

    #[test]
    fn renders_missing_profile() {
        let dashboard = Dashboard::new(
            read::Dashboard {
                member_id: member::Id::default(),
                profile: None,
                family_count: 0.into(),
            },
            DateTime::UNIX_EPOCH,
            DateTime::UNIX_EPOCH,
        );
        assert!(dashboard.profile.is_none());
        assert_eq!(dashboard.days_until_expiry, None);
        assert!(dashboard.renewal_notice.is_none());
    }

    #[test]
    fn saturates_numbers() {
        assert_eq!(saturate(i64::MAX), i32::MAX);
        assert_eq!(saturate(i64::MIN), i32::MIN);
        assert_eq!(saturate(42_usize), 42);
    }
}
