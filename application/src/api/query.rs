//! GraphQL [`Query`]s definitions.

use common::{DateTime, Money};
use juniper::graphql_object;
use service::{domain, query, read, Query as _};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the catalog of all the `CardTier`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "tiers",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn tiers() -> Vec<api::pricing::TierInfo> {
        domain::Tier::ALL.iter().copied().map(Into::into).collect()
    }

    /// Returns the catalog of all the `SpendingCategory`s.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "spendingCategories",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn spending_categories() -> Vec<api::savings::CategoryInfo> {
        domain::Category::ALL
            .iter()
            .copied()
            .map(Into::into)
            .collect()
    }

    /// Validates the provided discount `code`.
    ///
    /// Code is trimmed and matched ignoring its case.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "validateDiscountCode",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn validate_discount_code(
        code: String,
        ctx: &Context,
    ) -> Result<api::pricing::DiscountOutcome, Error> {
        ctx.service()
            .execute(query::ValidateDiscountCode { code })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Quotes the price of the provided `CardTier`.
    ///
    /// Unrecognized `discountCode` doesn't reduce the price.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "quote",
            otel.name = Self::SPAN_NAME,
            tier = ?tier,
        ),
    )]
    pub async fn quote(
        tier: api::pricing::Tier,
        discount_code: Option<String>,
        ctx: &Context,
    ) -> Result<api::pricing::Quote, Error> {
        let discount = ctx
            .service()
            .execute(query::ValidateDiscountCode {
                code: discount_code.unwrap_or_default(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        ctx.service()
            .execute(query::ComputeQuote {
                tier: tier.into(),
                discount,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Projects annual savings of the provided `CardTier` for the provided
    /// spending `selection`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "savingsProjection",
            otel.name = Self::SPAN_NAME,
            tier = ?tier,
        ),
    )]
    pub async fn savings_projection(
        tier: api::pricing::Tier,
        selection: Vec<api::savings::SelectionEntry>,
        ctx: &Context,
    ) -> Result<api::savings::Projection, Error> {
        ctx.service()
            .execute(query::ComputeSavingsProjection {
                tier: tier.into(),
                selection: api::savings::selection(selection),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Estimates annual savings of both `CardTier`s for the provided
    /// spending `selection`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "savingsEstimate",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn savings_estimate(
        selection: Vec<api::savings::SelectionEntry>,
        ctx: &Context,
    ) -> Result<api::savings::Estimate, Error> {
        ctx.service()
            .execute(query::EstimateSavings {
                selection: api::savings::selection(selection),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Estimates the discount on a single purchase of the provided `amount`
    /// made with a card of the provided `CardTier`.
    ///
    /// Nothing is estimated for a non-positive `amount`.
    #[tracing::instrument(
        skip_all,
        fields(
            amount = %amount,
            gql.name = "purchaseEstimate",
            otel.name = Self::SPAN_NAME,
            tier = ?tier,
        ),
    )]
    pub async fn purchase_estimate(
        tier: api::pricing::Tier,
        amount: Money,
        ctx: &Context,
    ) -> Result<Option<api::savings::PurchaseEstimate>, Error> {
        ctx.service()
            .execute(query::EstimatePurchase {
                tier: tier.into(),
                amount: amount.amount,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|e| e.map(Into::into))
    }

    /// Returns the partner directory narrowed by the provided `PartnerCategory`
    /// ID.
    ///
    /// Every `Partner` is listed if no `category` (or `all`) is provided.
    #[tracing::instrument(
        skip_all,
        fields(
            category = ?category,
            gql.name = "partnerDirectory",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn partner_directory(
        category: Option<String>,
        ctx: &Context,
    ) -> Result<api::partner::Directory, Error> {
        let filter = category
            .map_or(Ok(read::directory::Filter::All), |c| c.parse())
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;
        ctx.service()
            .execute(query::PartnerDirectory { filter })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the bank transfer details to pay for a card with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "paymentDetails",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub fn payment_details(ctx: &Context) -> api::pricing::PaymentDetails {
        ctx.service().config().payment.clone().into()
    }

    /// Returns the dashboard of the authenticated card holder.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - no valid session token is provided;
    /// - `NO_PROFILE` - the authenticated card holder has no profile.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myDashboard",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_dashboard(
        ctx: &Context,
    ) -> Result<api::member::Dashboard, Error> {
        let session = ctx.current_session().await?;
        let dashboard = ctx
            .service()
            .execute(query::MyDashboard {
                member_id: session.member_id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        Ok(api::member::Dashboard::new(
            dashboard,
            DateTime::now(),
            session.expires_at,
        ))
    }

    /// Returns the active family members of the authenticated card holder in
    /// the order they were added.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - no valid session token is provided;
    /// - `NO_PROFILE` - the authenticated card holder has no profile.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "myFamilyMembers",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn my_family_members(
        ctx: &Context,
    ) -> Result<Vec<api::member::family::Member>, Error> {
        let my_id = ctx.current_session().await?.member_id;
        ctx.service()
            .execute(query::family_members::ByHolder::by(my_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|members| members.into_iter().map(Into::into).collect())
    }
}
