//! [`Session`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Member;
use crate::domain::member;

/// Claims of a [`Member`] session issued by the identity service.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Session {
    /// ID of the [`Member`] this [`Session`] belongs to.
    #[serde(rename = "sub")]
    pub member_id: member::Id,

    /// Email the [`Member`] signed in with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// [`DateTime`] when this [`Session`] expires.
    #[serde(rename = "exp", with = "common::datetime::serde::unix_timestamp")]
    pub expires_at: ExpirationDateTime,
}

impl Session {
    /// Indicates whether this [`Session`] is expired at the provided
    /// [`DateTime`].
    #[must_use]
    pub fn is_expired_at<Of: ?Sized>(&self, at: DateTimeOf<Of>) -> bool {
        self.expires_at.coerce::<()>() <= at.coerce()
    }
}

/// Access token of a [`Session`].
#[derive(AsRef, Clone, Debug, Display)]
#[as_ref(str)]
pub struct Token(String);

impl Token {
    /// Creates a new [`Token`] if the provided raw `token` is not blank.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let token = token.as_ref().trim();
        (!token.is_empty()).then(|| Self(token.to_owned()))
    }
}

/// [`DateTime`] of a [`Session`] expiration.
pub type ExpirationDateTime = DateTimeOf<(Session, unit::Expiration)>;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::DateTime;

    use super::{Session, Token};

    #[test]
    fn trims_token() {
        assert_eq!(Token::new("  abc.def ").unwrap().as_ref(), "abc.def");
        assert!(Token::new(" \t").is_none());
    }

    #[test]
    fn decodes_identity_service_claims() {
        let session: Session = serde_json::from_str(
            r#"{
                "sub": "8a4f1f52-4a4b-4f4c-9b8f-0e2d3c4b5a69",
                "email": "m@example.com",
                "exp": 1700000000,
                "role": "authenticated"
            }"#,
        )
        .unwrap();
        assert_eq!(
            session.member_id.to_string(),
            "8a4f1f52-4a4b-4f4c-9b8f-0e2d3c4b5a69",
        );
        assert_eq!(session.expires_at.unix_timestamp(), 1_700_000_000);

        let expiry = DateTime::from_unix_timestamp(1_700_000_000).unwrap();
        assert!(!session.is_expired_at(expiry - Duration::from_secs(1)));
        assert!(session.is_expired_at(expiry));
    }
}
