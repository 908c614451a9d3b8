//! GraphQL API definitions.

pub mod contact;
pub mod locale;
pub mod member;
mod mutation;
pub mod partner;
pub mod pricing;
mod query;
pub mod savings;
pub mod scalar;
pub mod subscription;

use juniper::EmptySubscription;

use crate::Context;

pub use self::{mutation::Mutation, query::Query};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;
