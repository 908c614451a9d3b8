//! [`Query`] validating a discount [`Code`].

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::discount::Code;
use crate::{
    domain::discount::{self, Outcome},
    Service,
};

use super::Query;

/// [`Query`] validating a raw discount [`Code`] as it's being typed.
#[derive(Clone, Debug)]
pub struct ValidateDiscountCode {
    /// Raw discount [`Code`] typed so far.
    pub code: String,
}

impl<Db> Query<ValidateDiscountCode> for Service<Db> {
    type Ok = Outcome;
    type Err = Infallible;

    async fn execute(
        &self,
        ValidateDiscountCode { code }: ValidateDiscountCode,
    ) -> Result<Self::Ok, Self::Err> {
        let outcome = discount::validate(&code);
        tracing::debug!(?outcome, "discount code validated");
        Ok(outcome)
    }
}
