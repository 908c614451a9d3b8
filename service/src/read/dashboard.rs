//! Member [`Dashboard`] read model.

use derive_more::{From, Into};
use serde::Deserialize as _;

use crate::domain::{member, Member};

use super::realtime::{Event, Kind, Table};

/// Number of active family members of a card holder.
#[derive(Clone, Copy, Debug, Default, Eq, From, Hash, Into, PartialEq)]
pub struct FamilyCount(u32);

impl FamilyCount {
    /// Increments this [`FamilyCount`].
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Decrements this [`FamilyCount`], never going below zero.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

/// Dashboard of a single [`Member`], reconciled with change [`Event`]s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dashboard {
    /// ID of the watched [`Member`].
    pub member_id: member::Id,

    /// Profile of the watched [`Member`], if it exists.
    pub profile: Option<Member>,

    /// [`FamilyCount`] of the watched [`Member`].
    pub family_count: FamilyCount,
}

impl Dashboard {
    /// Applies the provided change [`Event`] to this [`Dashboard`].
    ///
    /// Rows of other [`Member`]s and of unrelated tables are ignored. Family
    /// members are counted only while they're active, so deactivating and
    /// reactivating updates adjust the [`FamilyCount`] too.
    #[must_use]
    pub fn apply(mut self, event: &Event) -> Self {
        match (event.table, event.kind) {
            (Table::UserProfiles, Kind::Insert | Kind::Update) => {
                if let Some(profile) = event
                    .row::<Member>()
                    .filter(|m| m.id == self.member_id)
                {
                    self.profile = Some(profile);
                }
            }
            (Table::UserProfiles, Kind::Delete) => {
                if event.id::<member::Id>().map_or(true, |id| id == self.member_id)
                {
                    self.profile = None;
                }
            }
            (Table::FamilyMembers, kind) => {
                if self.holds(event) {
                    let before = kind != Kind::Insert && is_active(&event.old);
                    let after = kind != Kind::Delete && is_active(&event.new);
                    self.family_count = match (before, after) {
                        (false, true) => self.family_count.increment(),
                        (true, false) => self.family_count.decrement(),
                        (true, true) | (false, false) => self.family_count,
                    };
                }
            }
            (Table::Categories | Table::Partners | Table::Other, _) => {}
        }
        self
    }

    /// Indicates whether the family member row of the provided [`Event`]
    /// belongs to the watched [`Member`].
    ///
    /// Rows without a holder are assumed to be pre-filtered by the
    /// subscription.
    fn holds(&self, event: &Event) -> bool {
        [&event.new, &event.old]
            .into_iter()
            .find_map(|row| {
                member::Id::deserialize(row.get("user_id")?).ok()
            })
            .map_or(true, |holder| holder == self.member_id)
    }
}

/// Indicates whether the provided family member row is active.
///
/// Rows missing the `is_active` column (like key-only `old` rows) are
/// considered active, as the column defaults to `true`.
fn is_active(row: &serde_json::Value) -> bool {
    row.get("is_active")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(true)
}
