//! [`Query`] collection related to family [`Member`]s.

use common::operations::By;

#[cfg(doc)]
use crate::{domain::member::family::Member, Query};
use crate::domain::member::{self, family};

use super::DatabaseQuery;

/// Queries active family [`Member`]s of a card holder ordered by the time
/// they were added.
pub type ByHolder = DatabaseQuery<By<Vec<family::Member>, member::Id>>;
