//! Price [`Quote`] definitions.

use common::Money;

use super::{
    discount::{self, Outcome},
    Tier,
};

/// Price of a [`Tier`] card after an optional discount.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Quote {
    /// [`Tier`] being quoted.
    pub tier: Tier,

    /// Base price of the [`Tier`].
    pub original_price: Money,

    /// Amount taken off the `original_price`.
    pub discount_amount: Money,

    /// Price to be paid.
    pub final_price: Money,
}

impl Quote {
    /// Quotes the provided [`Tier`] given the discount code [`Outcome`].
    ///
    /// Only [`Outcome::Valid`] reduces the price.
    #[must_use]
    pub fn new(tier: Tier, discount: Outcome) -> Self {
        let original_price = tier.base_price();
        let discount_amount = if discount.is_applied() {
            original_price.share(discount::RATE)
        } else {
            Money::ZERO
        };
        Self {
            tier,
            original_price,
            discount_amount,
            final_price: original_price - discount_amount,
        }
    }

    /// Indicates whether any discount is applied in this [`Quote`].
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        !self.discount_amount.amount.is_zero()
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::domain::{discount, Tier};

    use super::{Outcome, Quote};

    fn sar(n: i64) -> Money {
        Money::sar(Decimal::from(n))
    }

    #[test]
    fn halves_vip_price_with_valid_code() {
        let q = Quote::new(Tier::Vip, Outcome::Valid);
        assert_eq!(q.original_price, sar(1500));
        assert_eq!(q.discount_amount, sar(750));
        assert_eq!(q.final_price, sar(750));
        assert!(q.is_discounted());
    }

    #[test]
    fn halves_family_price_with_valid_code() {
        let q = Quote::new(Tier::Family, Outcome::Valid);
        assert_eq!(q.original_price, sar(800));
        assert_eq!(q.discount_amount, sar(400));
        assert_eq!(q.final_price, sar(400));
    }

    #[test]
    fn keeps_base_price_without_code() {
        for &t in Tier::ALL {
            let q = Quote::new(t, Outcome::Empty);
            assert_eq!(q.original_price, t.base_price());
            assert_eq!(q.discount_amount, sar(0));
            assert_eq!(q.final_price, t.base_price());
            assert!(!q.is_discounted());
        }
    }

    #[test]
    fn is_idempotent() {
        for &t in Tier::ALL {
            for o in [Outcome::Empty, Outcome::Valid, Outcome::Invalid] {
                assert_eq!(Quote::new(t, o), Quote::new(t, o));
            }
        }
    }

    proptest! {
        #[test]
        fn invalid_codes_never_discount(
            s in "[A-Za-z0-9]{1,10}",
            vip in any::<bool>(),
        ) {
            prop_assume!(s.to_uppercase() != discount::RECOGNIZED);
            let tier = if vip { Tier::Vip } else { Tier::Family };

            let outcome = discount::validate(&s);
            prop_assert_eq!(outcome, Outcome::Invalid);

            let q = Quote::new(tier, outcome);
            prop_assert_eq!(q, Quote::new(tier, Outcome::Empty));
            prop_assert!(q.final_price.amount >= Decimal::ZERO);
            prop_assert!(q.final_price.amount <= q.original_price.amount);
        }
    }
}
