//! [`Query`] computing a price [`Quote`].

use std::convert::Infallible;

use crate::{
    domain::{discount::Outcome, Quote, Tier},
    Service,
};

use super::Query;

/// [`Query`] computing a price [`Quote`] of a [`Tier`] card.
#[derive(Clone, Copy, Debug)]
pub struct ComputeQuote {
    /// [`Tier`] to quote.
    pub tier: Tier,

    /// Discount code [`Outcome`] to apply.
    pub discount: Outcome,
}

impl<Db> Query<ComputeQuote> for Service<Db> {
    type Ok = Quote;
    type Err = Infallible;

    async fn execute(
        &self,
        ComputeQuote { tier, discount }: ComputeQuote,
    ) -> Result<Self::Ok, Self::Err> {
        let quote = Quote::new(tier, discount);
        tracing::debug!(
            %tier,
            original = %quote.original_price,
            final_price = %quote.final_price,
            "quote computed",
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use crate::{
        domain::{discount::Outcome, Tier},
        query::Query as _,
        spec,
    };

    use super::ComputeQuote;

    #[tokio::test]
    async fn halves_price_for_valid_code() {
        let svc = spec::service(());
        for (tier, base) in [(Tier::Vip, 1500), (Tier::Family, 800)] {
            let q = svc
                .execute(ComputeQuote {
                    tier,
                    discount: Outcome::Valid,
                })
                .await
                .unwrap();
            assert_eq!(q.original_price, Money::sar(Decimal::from(base)));
            assert_eq!(q.discount_amount, Money::sar(Decimal::from(base / 2)));
            assert_eq!(q.final_price, Money::sar(Decimal::from(base / 2)));
        }
    }

    #[tokio::test]
    async fn is_idempotent() {
        let svc = spec::service(());
        let query = ComputeQuote {
            tier: Tier::Family,
            discount: Outcome::Empty,
        };
        let first = svc.execute(query).await.unwrap();
        let second = svc.execute(query).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.final_price, Tier::Family.base_price());
    }
}
