//! Spending [`Category`] catalog.

use common::{define_kind, Money, Percent};
use rust_decimal::Decimal;

use super::Tier;

define_kind! {
    #[doc = "Spending category covered by partner discounts."]
    enum Category {
        #[doc = "Medicine and health care."]
        Medicine = 1,

        #[doc = "Restaurants."]
        Restaurants = 2,

        #[doc = "Clothing."]
        Clothing = 3,

        #[doc = "Sweets and desserts."]
        Sweets = 4,

        #[doc = "Sports."]
        Sports = 5,
    }
}

impl Category {
    /// Lowercase identifier of this [`Category`].
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Medicine => "medicine",
            Self::Restaurants => "restaurants",
            Self::Clothing => "clothing",
            Self::Sweets => "sweets",
            Self::Sports => "sports",
        }
    }

    /// Human-readable name of this [`Category`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Medicine => "الطب والصحة",
            Self::Restaurants => "المطاعم",
            Self::Clothing => "الملابس",
            Self::Sweets => "الحلويات",
            Self::Sports => "الرياضة",
        }
    }

    /// Name of the icon representing this [`Category`].
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Medicine => "HeartIcon",
            Self::Restaurants => "BuildingStorefrontIcon",
            Self::Clothing => "ShoppingBagIcon",
            Self::Sweets => "CakeIcon",
            Self::Sports => "TrophyIcon",
        }
    }

    /// Average amount spent in this [`Category`] per visit.
    #[must_use]
    pub fn average_spending(self) -> Money {
        Money::sar(Decimal::from(match self {
            Self::Medicine => 500,
            Self::Restaurants => 300,
            Self::Clothing => 800,
            Self::Sweets => 200,
            Self::Sports => 400,
        }))
    }

    /// Discount a card of the provided [`Tier`] gives in this [`Category`].
    #[must_use]
    pub const fn discount(self, tier: Tier) -> Percent {
        let tenths = match (self, tier) {
            (Self::Medicine | Self::Sweets, Tier::Vip) => 200,
            (Self::Medicine | Self::Sweets, Tier::Family) => 150,
            (Self::Restaurants, Tier::Vip) => 175,
            (Self::Restaurants, Tier::Family) => 125,
            (Self::Clothing, Tier::Vip) => 275,
            (Self::Clothing, Tier::Family) => 200,
            (Self::Sports, Tier::Vip) => 250,
            (Self::Sports, Tier::Family) => 180,
        };
        Percent::from_tenths(tenths)
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::domain::Tier;

    use super::Category;

    #[test]
    fn lists_five_categories() {
        assert_eq!(Category::ALL.len(), 5);
        for c in Category::ALL {
            assert_eq!(Category::from_str(c.id()).unwrap(), *c);
        }
    }

    #[test]
    fn vip_always_gives_more() {
        for c in Category::ALL {
            assert!(c.discount(Tier::Vip) > c.discount(Tier::Family));
        }
    }

    #[test]
    fn keeps_discounts_within_range() {
        let min = Decimal::from_str("12.5").unwrap();
        let max = Decimal::from_str("27.5").unwrap();
        for c in Category::ALL {
            for &t in Tier::ALL {
                let d = c.discount(t).value();
                assert!(d >= min && d <= max, "{c} {t}: {d}");
            }
        }
    }

    #[test]
    fn restaurants() {
        let c = Category::Restaurants;
        assert_eq!(c.average_spending().amount, Decimal::from(300));
        assert_eq!(c.discount(Tier::Vip).to_string(), "17.5");
        assert_eq!(c.discount(Tier::Family).to_string(), "12.5");
        assert_eq!(c.name(), "المطاعم");
    }
}
