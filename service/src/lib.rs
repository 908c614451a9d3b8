//! Service contains the business logic of the membership card platform.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use derive_more::Debug;

#[cfg(doc)]
use infra::Database;

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// [JWT] decoding key of the identity service issuing member sessions.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    #[debug(skip)]
    pub jwt_decoding_key: jsonwebtoken::DecodingKey,

    /// Expected `aud` claim of member session [JWT]s.
    ///
    /// [JWT]: https://datatracker.ietf.org/doc/html/rfc7519
    pub jwt_audience: String,

    /// Payment handoff [`domain::handoff::Details`].
    pub payment: domain::handoff::Details,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub const fn new(config: Config, database: Db) -> Self {
        Self { config, database }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub const fn database(&self) -> &Db {
        &self.database
    }
}

#[cfg(test)]
mod spec {
    //! Shared test helpers.

    use common::DateTime;
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;

    use crate::{domain::handoff, Config, Service};

    /// Secret used for signing test sessions.
    pub(crate) const SECRET: &[u8] = b"test-secret";

    /// Creates a new test [`Service`] over the provided `db`.
    pub(crate) fn service<Db>(db: Db) -> Service<Db> {
        Service::new(
            Config {
                jwt_decoding_key: jsonwebtoken::DecodingKey::from_secret(
                    SECRET,
                ),
                jwt_audience: "authenticated".into(),
                payment: handoff::Details::default(),
            },
            db,
        )
    }

    /// Signs a new test session token for the provided `sub`.
    pub(crate) fn token(sub: &str, expires_at: DateTime) -> String {
        #[derive(Serialize)]
        struct Claims<'a> {
            sub: &'a str,
            aud: &'a str,
            exp: i64,
        }

        jsonwebtoken::encode(
            &Header::default(),
            &Claims {
                sub,
                aud: "authenticated",
                exp: expires_at.unix_timestamp(),
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }
}
