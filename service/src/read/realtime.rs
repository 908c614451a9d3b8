//! Change notifications of the remote data service.
//!
//! Every notification is decoded into an [`Event`], which read models fold
//! into their state with a pure reducer, so no live subscription is needed
//! to reconcile them.

use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

/// Table a change [`Event`] is emitted for.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// Profiles of card holders.
    UserProfiles,

    /// Family members of card holders.
    FamilyMembers,

    /// Partner categories.
    Categories,

    /// Partners.
    Partners,

    /// Any table no read model is interested in.
    #[serde(other)]
    Other,
}

/// Kind of a change [`Event`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    /// Row is inserted.
    Insert,

    /// Row is updated.
    Update,

    /// Row is deleted.
    Delete,
}

/// Change of a single row.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Event {
    /// [`Table`] the row belongs to.
    pub table: Table,

    /// [`Kind`] of this [`Event`].
    #[serde(rename = "eventType")]
    pub kind: Kind,

    /// Row after the change, empty for [`Kind::Delete`].
    #[serde(default)]
    pub new: Value,

    /// Row before the change.
    ///
    /// Usually carries the primary key only.
    #[serde(default)]
    pub old: Value,
}

impl Event {
    /// Decodes an [`Event`] from the provided JSON `payload`.
    ///
    /// # Errors
    ///
    /// If the `payload` is not a valid change notification.
    pub fn from_payload(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Decodes the row after the change.
    ///
    /// [`None`] for [`Kind::Delete`] or if the row doesn't decode as `T`.
    #[must_use]
    pub fn row<T: DeserializeOwned>(&self) -> Option<T> {
        if self.kind == Kind::Delete {
            return None;
        }
        T::deserialize(&self.new).ok()
    }

    /// Decodes the `id` of the changed row, looking into the row after the
    /// change first.
    #[must_use]
    pub fn id<T: DeserializeOwned>(&self) -> Option<T> {
        [&self.new, &self.old]
            .into_iter()
            .find_map(|row| T::deserialize(row.get("id")?).ok())
    }
}

#[cfg(test)]
mod spec {
    use uuid::Uuid;

    use super::{Event, Kind, Table};

    #[test]
    fn decodes_payload() {
        let ev = Event::from_payload(
            r#"{
                "schema": "public",
                "table": "family_members",
                "eventType": "INSERT",
                "new": {"id": "0f0e0d0c-0b0a-4908-8706-050403020100"},
                "old": {}
            }"#,
        )
        .unwrap();
        assert_eq!(ev.table, Table::FamilyMembers);
        assert_eq!(ev.kind, Kind::Insert);
        assert_eq!(
            ev.id::<Uuid>().unwrap().to_string(),
            "0f0e0d0c-0b0a-4908-8706-050403020100",
        );
    }

    #[test]
    fn reads_deleted_id_from_old_row() {
        let ev = Event::from_payload(
            r#"{
                "table": "partners",
                "eventType": "DELETE",
                "new": {},
                "old": {"id": "3b5e0d7c-6f1a-4a43-9a0f-7d2f1c9b8e21"}
            }"#,
        )
        .unwrap();
        assert!(ev.row::<serde_json::Value>().is_none());
        assert!(ev.id::<Uuid>().is_some());
    }

    #[test]
    fn tolerates_unknown_tables() {
        let ev = Event::from_payload(
            r#"{"table": "audit_log", "eventType": "UPDATE"}"#,
        )
        .unwrap();
        assert_eq!(ev.table, Table::Other);
        assert!(ev.id::<Uuid>().is_none());
    }

    #[test]
    fn rejects_unknown_kinds() {
        assert!(Event::from_payload(
            r#"{"table": "partners", "eventType": "TRUNCATE"}"#,
        )
        .is_err());
    }
}
