//! Spending [`Category`] and savings [`Projection`]-related definitions.

use common::{Money, Percent};
use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLObject};
use service::domain::{self, savings};

use crate::api::{self, locale::Locale, pricing::Tier};

/// Spending category the card gives discounts in.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "SpendingCategory")]
pub enum Category {
    /// Medicine and health.
    Medicine,

    /// Restaurants.
    Restaurants,

    /// Clothing.
    Clothing,

    /// Sweets.
    Sweets,

    /// Sports.
    Sports,
}

impl From<domain::Category> for Category {
    fn from(category: domain::Category) -> Self {
        use domain::Category as C;

        match category {
            C::Medicine => Self::Medicine,
            C::Restaurants => Self::Restaurants,
            C::Clothing => Self::Clothing,
            C::Sweets => Self::Sweets,
            C::Sports => Self::Sports,
        }
    }
}

impl From<Category> for domain::Category {
    fn from(category: Category) -> Self {
        match category {
            Category::Medicine => Self::Medicine,
            Category::Restaurants => Self::Restaurants,
            Category::Clothing => Self::Clothing,
            Category::Sweets => Self::Sweets,
            Category::Sports => Self::Sports,
        }
    }
}

/// Catalog entry of a `SpendingCategory`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "SpendingCategoryInfo")]
pub struct CategoryInfo {
    /// `SpendingCategory` being described.
    pub category: Category,

    /// Human-readable name of the `SpendingCategory`.
    pub name: String,

    /// Name of the icon representing the `SpendingCategory`.
    pub icon: String,

    /// Average amount spent per visit.
    pub average_spending: Money,

    /// Discount given by the VIP card.
    pub vip_discount: Percent,

    /// Discount given by the family card.
    pub family_discount: Percent,
}

impl From<domain::Category> for CategoryInfo {
    fn from(category: domain::Category) -> Self {
        Self {
            category: category.into(),
            name: category.name().to_owned(),
            icon: category.icon().to_owned(),
            average_spending: category.average_spending(),
            vip_discount: category.discount(domain::Tier::Vip),
            family_discount: category.discount(domain::Tier::Family),
        }
    }
}

/// Selected `SpendingCategory` along with its monthly visits.
#[derive(Clone, Copy, Debug, GraphQLInputObject)]
#[graphql(name = "SpendingSelectionEntry")]
pub struct SelectionEntry {
    /// Selected `SpendingCategory`.
    pub category: Category,

    /// Monthly visits, clamped to at least `1`.
    ///
    /// Defaults to `2` when omitted.
    pub visits: Option<i32>,
}

impl From<SelectionEntry> for savings::Entry {
    fn from(entry: SelectionEntry) -> Self {
        Self {
            category: entry.category.into(),
            visits: entry.visits.map_or_else(savings::Visits::default, |n| {
                savings::Visits::new(u32::try_from(n).unwrap_or(0))
            }),
        }
    }
}

/// Collects the provided [`SelectionEntry`]s into a [`savings::Selection`].
pub(crate) fn selection(
    entries: impl IntoIterator<Item = SelectionEntry>,
) -> savings::Selection {
    entries.into_iter().map(Into::into).collect()
}

/// Annual savings in a single `SpendingCategory`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "SavingsLine")]
pub struct Line {
    /// `SpendingCategory` the savings are made in.
    pub category: Category,

    /// Monthly visits in the `SpendingCategory`.
    pub visits: i32,

    /// Discount applied in the `SpendingCategory`.
    pub discount: Percent,

    /// Exact annual savings, not rounded.
    pub annual_savings: Money,
}

impl From<savings::Line> for Line {
    fn from(line: savings::Line) -> Self {
        Self {
            category: line.category.into(),
            visits: i32::try_from(line.visits.get()).unwrap_or(i32::MAX),
            discount: line.discount,
            annual_savings: line.annual_savings,
        }
    }
}

/// Annual savings a card is projected to bring.
#[derive(Clone, Debug)]
pub struct Projection {
    /// [`Tier`] the projection is made for.
    pub tier: Tier,

    /// Per-[`Category`] savings in the selection order.
    pub lines: Vec<Line>,

    /// Total annual savings rounded to whole riyals.
    pub total: Money,

    /// [`Projection::total`] minus the card price, negative for a loss.
    pub net_profit: Money,

    /// Indicator whether the card pays for itself.
    pub is_profitable: bool,
}

/// Annual savings a card is projected to bring.
#[graphql_object(name = "SavingsProjection")]
impl Projection {
    /// `CardTier` the projection is made for.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Per-`SpendingCategory` savings in the selection order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Total annual savings rounded to whole riyals.
    #[must_use]
    pub fn total(&self) -> Money {
        self.total
    }

    /// `total` minus the card price, negative for a loss.
    #[must_use]
    pub fn net_profit(&self) -> Money {
        self.net_profit
    }

    /// Indicator whether the card pays for itself.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.is_profitable
    }

    /// `total` formatted for display in the provided `Locale`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SavingsProjection.formattedTotal",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn formatted_total(&self, #[graphql(default)] locale: Locale) -> String {
        self.total.localized(locale.into())
    }

    /// `netProfit` formatted for display in the provided `Locale`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "SavingsProjection.formattedNetProfit",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    #[must_use]
    pub fn formatted_net_profit(
        &self,
        #[graphql(default)] locale: Locale,
    ) -> String {
        self.net_profit.localized(locale.into())
    }
}

impl From<savings::Projection> for Projection {
    fn from(projection: savings::Projection) -> Self {
        let is_profitable = projection.is_profitable();
        let savings::Projection {
            tier,
            lines,
            total,
            net_profit,
        } = projection;
        Self {
            tier: tier.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            total,
            net_profit,
            is_profitable,
        }
    }
}

/// Savings estimate of both card tiers.
///
/// Both projections are absent while nothing is selected.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "SavingsEstimate")]
pub struct Estimate {
    /// Projection for the VIP card.
    pub vip: Option<Projection>,

    /// Projection for the family card.
    pub family: Option<Projection>,
}

impl From<savings::Estimate> for Estimate {
    fn from(estimate: savings::Estimate) -> Self {
        match estimate {
            savings::Estimate::NoSelection => Self {
                vip: None,
                family: None,
            },
            savings::Estimate::Projected { vip, family } => Self {
                vip: Some(vip.into()),
                family: Some(family.into()),
            },
        }
    }
}

/// Discount estimate of a single purchase made with a card.
#[derive(Clone, Copy, Debug, GraphQLObject)]
pub struct PurchaseEstimate {
    /// `CardTier` of the card used.
    pub tier: Tier,

    /// Purchase amount before the discount.
    pub amount: Money,

    /// Discount amount.
    pub discount: Money,

    /// Amount paid after the discount.
    pub final_amount: Money,
}

impl From<savings::PurchaseEstimate> for PurchaseEstimate {
    fn from(estimate: savings::PurchaseEstimate) -> Self {
        let savings::PurchaseEstimate {
            tier,
            amount,
            discount,
            final_amount,
        } = estimate;
        Self {
            tier: tier.into(),
            amount,
            discount,
            final_amount,
        }
    }
}
