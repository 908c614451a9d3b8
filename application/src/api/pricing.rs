//! Card [`Tier`]s and price [`Quote`]-related definitions.

use common::{Money, Percent};
use juniper::{graphql_object, GraphQLEnum, GraphQLObject};
use service::domain::{self, discount, handoff};

use crate::api::{self, locale::Locale};

/// Tier of a membership card.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "CardTier")]
pub enum Tier {
    /// VIP card.
    Vip,

    /// Family card.
    Family,
}

impl From<domain::Tier> for Tier {
    fn from(tier: domain::Tier) -> Self {
        use domain::Tier as T;

        match tier {
            T::Vip => Self::Vip,
            T::Family => Self::Family,
        }
    }
}

impl From<Tier> for domain::Tier {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Vip => Self::Vip,
            Tier::Family => Self::Family,
        }
    }
}

/// Catalog entry of a card `CardTier`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "CardTierInfo")]
pub struct TierInfo {
    /// `CardTier` being described.
    pub tier: Tier,

    /// Human-readable name of the card.
    pub name: String,

    /// Annual price of the card.
    pub price: Money,

    /// Number of persons the card covers, holder included.
    pub capacity: i32,

    /// Discount the card gives on a single purchase.
    pub purchase_discount: Percent,
}

impl From<domain::Tier> for TierInfo {
    fn from(tier: domain::Tier) -> Self {
        Self {
            tier: tier.into(),
            name: tier.display_name().to_owned(),
            price: tier.base_price(),
            capacity: tier.capacity().into(),
            purchase_discount: tier.purchase_discount(),
        }
    }
}

/// Outcome of validating a discount code.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "DiscountCodeOutcome")]
pub enum DiscountOutcome {
    /// No code is provided.
    Empty,

    /// Code is recognized and grants a discount.
    Valid,

    /// Code is not recognized.
    Invalid,
}

impl From<discount::Outcome> for DiscountOutcome {
    fn from(outcome: discount::Outcome) -> Self {
        use discount::Outcome as O;

        match outcome {
            O::Empty => Self::Empty,
            O::Valid => Self::Valid,
            O::Invalid => Self::Invalid,
        }
    }
}

impl From<DiscountOutcome> for discount::Outcome {
    fn from(outcome: DiscountOutcome) -> Self {
        match outcome {
            DiscountOutcome::Empty => Self::Empty,
            DiscountOutcome::Valid => Self::Valid,
            DiscountOutcome::Invalid => Self::Invalid,
        }
    }
}

/// Price of a card after an optional discount.
#[derive(Clone, Copy, Debug)]
pub struct Quote {
    /// [`Tier`] being quoted.
    pub tier: Tier,

    /// Base price of the [`Tier`].
    pub original_price: Money,

    /// Amount taken off the [`Quote::original_price`].
    pub discount_amount: Money,

    /// Price to be paid.
    pub final_price: Money,

    /// Indicator whether any discount is applied.
    pub is_discounted: bool,
}

/// Price of a card after an optional discount.
#[graphql_object(name = "PriceQuote")]
impl Quote {
    /// `CardTier` being quoted.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Base price of the `CardTier`.
    #[must_use]
    pub fn original_price(&self) -> Money {
        self.original_price
    }

    /// Amount taken off the `originalPrice`.
    #[must_use]
    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    /// Price to be paid.
    #[must_use]
    pub fn final_price(&self) -> Money {
        self.final_price
    }

    /// Indicator whether any discount is applied.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.is_discounted
    }

    /// `originalPrice` formatted for display in the provided `Locale`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "PriceQuote.formattedOriginalPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn formatted_original_price(
        &self,
        #[graphql(default)] locale: Locale,
    ) -> String {
        self.original_price.localized(locale.into())
    }

    /// `discountAmount` formatted for display in the provided `Locale`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "PriceQuote.formattedDiscountAmount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn formatted_discount_amount(
        &self,
        #[graphql(default)] locale: Locale,
    ) -> String {
        self.discount_amount.localized(locale.into())
    }

    /// `finalPrice` formatted for display in the provided `Locale`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "PriceQuote.formattedFinalPrice",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn formatted_final_price(
        &self,
        #[graphql(default)] locale: Locale,
    ) -> String {
        self.final_price.localized(locale.into())
    }
}

impl From<domain::Quote> for Quote {
    fn from(quote: domain::Quote) -> Self {
        Self {
            tier: quote.tier.into(),
            original_price: quote.original_price,
            discount_amount: quote.discount_amount,
            final_price: quote.final_price,
            is_discounted: quote.is_discounted(),
        }
    }
}

/// Bank transfer details to pay for a card with.
#[derive(Clone, Debug, GraphQLObject)]
pub struct PaymentDetails {
    /// WhatsApp number receiving payment confirmations.
    pub whatsapp_number: String,

    /// Name of the bank to transfer money to.
    pub bank_name: String,

    /// Bank account number to transfer money to.
    pub account_number: String,

    /// IBAN of the bank account to transfer money to.
    pub iban: String,
}

impl From<handoff::Details> for PaymentDetails {
    fn from(details: handoff::Details) -> Self {
        let handoff::Details {
            whatsapp_number,
            bank_name,
            account_number,
            iban,
        } = details;
        Self {
            whatsapp_number,
            bank_name,
            account_number,
            iban,
        }
    }
}

#[cfg(test)]
mod spec {
    use juniper::{
        graphql_object, graphql_value, EmptyMutation, EmptySubscription,
        RootNode, Variables,
    };
    use service::domain::{self, discount};

    use super::Quote;

    struct Root;

    #[graphql_object]
    impl Root {
        fn quote(code: String) -> Quote {
            domain::Quote::new(domain::Tier::Vip, discount::validate(&code))
                .into()
        }
    }

    fn execute(query: &str) -> juniper::Value {
        let schema = RootNode::new(
            Root,
            EmptyMutation::<()>::new(),
            EmptySubscription::<()>::new(),
        );
        let (res, errs) =
            juniper::execute_sync(query, None, &schema, &Variables::new(), &())
                .unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        res
    }

    #[test]
    fn formats_prices_in_locale() {
        let res = execute(
            r#"{ quote(code: " bakm589 ") {
                finalPrice
                formattedOriginalPrice(locale: EN_US)
                formattedDiscountAmount(locale: EN_US)
                formattedFinalPrice
            } }"#,
        );
        assert_eq!(
            res,
            graphql_value!({"quote": {
                "finalPrice": "750SAR",
                "formattedOriginalPrice": "1,500 SAR",
                "formattedDiscountAmount": "750 SAR",
                "formattedFinalPrice": "٧٥٠ ريال"
            }}),
        );
    }

    #[test]
    fn formats_undiscounted_price() {
        let res = execute(
            r#"{ quote(code: "nope") {
                isDiscounted
                formattedFinalPrice(locale: EN_US)
            } }"#,
        );
        assert_eq!(
            res,
            graphql_value!({"quote": {
                "isDiscounted": false,
                "formattedFinalPrice": "1,500 SAR"
            }}),
        );
    }
}
