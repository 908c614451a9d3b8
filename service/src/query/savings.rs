//! [`Query`] collection of the savings calculator.

use std::convert::Infallible;

use rust_decimal::Decimal;

use crate::{
    domain::{
        savings::{Estimate, Projection, PurchaseEstimate, Selection},
        Tier,
    },
    Service,
};

use super::Query;

/// [`Query`] projecting annual savings of a [`Selection`] for a single
/// [`Tier`].
#[derive(Clone, Debug)]
pub struct ComputeSavingsProjection {
    /// [`Tier`] to project savings for.
    pub tier: Tier,

    /// Selected categories with their monthly visits.
    pub selection: Selection,
}

impl<Db> Query<ComputeSavingsProjection> for Service<Db> {
    type Ok = Projection;
    type Err = Infallible;

    async fn execute(
        &self,
        query: ComputeSavingsProjection,
    ) -> Result<Self::Ok, Self::Err> {
        let ComputeSavingsProjection { tier, selection } = query;

        let projection = Projection::compute(tier, &selection);
        tracing::debug!(
            %tier,
            categories = projection.lines.len(),
            total = %projection.total,
            "savings projected",
        );
        Ok(projection)
    }
}

/// [`Query`] estimating savings of a [`Selection`] for every [`Tier`].
#[derive(Clone, Debug)]
pub struct EstimateSavings {
    /// Selected categories with their monthly visits.
    pub selection: Selection,
}

impl<Db> Query<EstimateSavings> for Service<Db> {
    type Ok = Estimate;
    type Err = Infallible;

    async fn execute(
        &self,
        EstimateSavings { selection }: EstimateSavings,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(Estimate::new(&selection))
    }
}

/// [`Query`] estimating the discount on a single purchase.
#[derive(Clone, Copy, Debug)]
pub struct EstimatePurchase {
    /// [`Tier`] of the card used.
    pub tier: Tier,

    /// Purchase amount.
    pub amount: Decimal,
}

impl<Db> Query<EstimatePurchase> for Service<Db> {
    type Ok = Option<PurchaseEstimate>;
    type Err = Infallible;

    async fn execute(
        &self,
        EstimatePurchase { tier, amount }: EstimatePurchase,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(PurchaseEstimate::new(tier, amount))
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use crate::{
        domain::{
            savings::{Entry, Estimate, Selection, Visits},
            Category, Tier,
        },
        query::Query as _,
        spec,
    };

    use super::{ComputeSavingsProjection, EstimatePurchase, EstimateSavings};

    #[tokio::test]
    async fn projects_restaurants() {
        let selection = [Entry {
            category: Category::Restaurants,
            visits: Visits::new(2),
        }]
        .into_iter()
        .collect::<Selection>();

        let p = spec::service(())
            .execute(ComputeSavingsProjection {
                tier: Tier::Vip,
                selection,
            })
            .await
            .unwrap();
        assert_eq!(p.total, Money::sar(Decimal::from(1260)));
        assert_eq!(p.net_profit, Money::sar(Decimal::from(-240)));
    }

    #[tokio::test]
    async fn loses_base_price_on_empty_selection() {
        let p = spec::service(())
            .execute(ComputeSavingsProjection {
                tier: Tier::Vip,
                selection: Selection::new(),
            })
            .await
            .unwrap();
        assert_eq!(p.total, Money::ZERO);
        assert_eq!(p.net_profit, Money::sar(Decimal::from(-1500)));

        let e = spec::service(())
            .execute(EstimateSavings {
                selection: Selection::new(),
            })
            .await
            .unwrap();
        assert_eq!(e, Estimate::NoSelection);
    }

    #[tokio::test]
    async fn estimates_positive_purchases_only() {
        let svc = spec::service(());
        let e = svc
            .execute(EstimatePurchase {
                tier: Tier::Vip,
                amount: Decimal::from(200),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(e.discount, Money::sar(Decimal::from(70)));
        assert_eq!(e.final_amount, Money::sar(Decimal::from(130)));

        assert!(svc
            .execute(EstimatePurchase {
                tier: Tier::Family,
                amount: Decimal::ZERO,
            })
            .await
            .unwrap()
            .is_none());
    }
}
