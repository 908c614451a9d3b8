//! [`Tier`] catalog.

use common::{define_kind, Money, Percent};
use rust_decimal::Decimal;

define_kind! {
    #[doc = "Membership card tier."]
    enum Tier {
        #[doc = "VIP card."]
        Vip = 1,

        #[doc = "Family card."]
        Family = 2,
    }
}

impl Tier {
    /// Fixed annual price of this [`Tier`].
    #[must_use]
    pub fn base_price(self) -> Money {
        Money::sar(match self {
            Self::Vip => Decimal::from(1500),
            Self::Family => Decimal::from(800),
        })
    }

    /// Number of persons a card of this [`Tier`] covers, holder included.
    #[must_use]
    pub const fn capacity(self) -> u8 {
        match self {
            Self::Vip | Self::Family => 6,
        }
    }

    /// Human-readable name of this [`Tier`].
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Vip => "بطاقة VIP",
            Self::Family => "بطاقة العائلة",
        }
    }

    /// Flat discount a card of this [`Tier`] gives on a single purchase.
    #[must_use]
    pub const fn purchase_discount(self) -> Percent {
        match self {
            Self::Vip => Percent::from_tenths(350),
            Self::Family => Percent::from_tenths(250),
        }
    }
}
