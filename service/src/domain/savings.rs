//! Savings [`Projection`]s and the [`Calculator`] driving them.

use std::num::NonZeroU32;

use common::{Money, Percent};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

use super::{Category, Tier};

/// Monthly visit count of a [`Category`], never less than `1`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, SmartDefault)]
pub struct Visits(#[default(Visits::DEFAULT.0)] NonZeroU32);

impl Visits {
    /// [`Visits`] a freshly selected [`Category`] starts with.
    pub const DEFAULT: Self = Self(NonZeroU32::MIN.saturating_add(1));

    /// Smallest possible [`Visits`].
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Creates new [`Visits`] clamping the provided `count` to at least `1`.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        match NonZeroU32::new(count) {
            Some(n) => Self(n),
            None => Self::MIN,
        }
    }

    /// Returns the count of these [`Visits`].
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns these [`Visits`] increased by one.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns these [`Visits`] decreased by one, but never below
    /// [`Visits::MIN`].
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self::new(self.get() - 1)
    }
}

/// Selected [`Category`] along with its monthly [`Visits`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    /// Selected [`Category`].
    pub category: Category,

    /// Monthly [`Visits`] in the [`Category`].
    pub visits: Visits,
}

/// Ordered set of selected [`Category`]s, each present at most once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection(Vec<Entry>);

impl Selection {
    /// Creates a new empty [`Selection`].
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the selected [`Entry`]s in their selection order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    /// Indicates whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the [`Visits`] of the provided [`Category`], if it's selected.
    #[must_use]
    pub fn visits(&self, category: Category) -> Option<Visits> {
        self.position(category).map(|i| self.0[i].visits)
    }

    /// Selects the provided [`Category`] with [`Visits::DEFAULT`], or
    /// deselects it if it's selected already.
    pub fn toggle(&mut self, category: Category) {
        if let Some(i) = self.position(category) {
            let _: Entry = self.0.remove(i);
        } else {
            self.0.push(Entry {
                category,
                visits: Visits::default(),
            });
        }
    }

    /// Sets [`Visits`] of the provided [`Category`], selecting it if needed.
    pub fn set_visits(&mut self, category: Category, visits: Visits) {
        if let Some(i) = self.position(category) {
            self.0[i].visits = visits;
        } else {
            self.0.push(Entry { category, visits });
        }
    }

    /// Increments [`Visits`] of the provided [`Category`] if it's selected.
    pub fn increment(&mut self, category: Category) {
        if let Some(i) = self.position(category) {
            self.0[i].visits = self.0[i].visits.increment();
        }
    }

    /// Decrements [`Visits`] of the provided [`Category`] if it's selected.
    pub fn decrement(&mut self, category: Category) {
        if let Some(i) = self.position(category) {
            self.0[i].visits = self.0[i].visits.decrement();
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the position of the provided [`Category`] in this
    /// [`Selection`].
    fn position(&self, category: Category) -> Option<usize> {
        self.0.iter().position(|e| e.category == category)
    }
}

impl FromIterator<Entry> for Selection {
    /// Collects [`Entry`]s, with a repeated [`Category`] keeping its first
    /// position and its last [`Visits`].
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut selection = Self::new();
        for Entry { category, visits } in iter {
            selection.set_visits(category, visits);
        }
        selection
    }
}

/// Annual savings in a single [`Category`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Line {
    /// [`Category`] the savings are made in.
    pub category: Category,

    /// Monthly [`Visits`] in the [`Category`].
    pub visits: Visits,

    /// Discount applied in the [`Category`].
    pub discount: Percent,

    /// Exact annual savings, not rounded.
    pub annual_savings: Money,
}

/// Annual savings a card of some [`Tier`] is projected to bring.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Projection {
    /// [`Tier`] the [`Projection`] is made for.
    pub tier: Tier,

    /// Per-[`Category`] savings in the [`Selection`] order.
    pub lines: Vec<Line>,

    /// Total annual savings rounded to whole currency units.
    pub total: Money,

    /// `total` minus the [`Tier`] base price, negative for a loss.
    pub net_profit: Money,
}

impl Projection {
    /// Months in a year.
    const MONTHS: u32 = 12;

    /// Projects annual savings of the provided [`Selection`] for the provided
    /// [`Tier`].
    ///
    /// The total sum is rounded half away from zero once, after summing all
    /// the exact per-[`Category`] savings.
    #[must_use]
    pub fn compute(tier: Tier, selection: &Selection) -> Self {
        let lines: Vec<_> = selection
            .entries()
            .iter()
            .map(|&Entry { category, visits }| {
                let discount = category.discount(tier);
                let yearly = category.average_spending().amount
                    * Decimal::from(visits.get())
                    * Decimal::from(Self::MONTHS);
                Line {
                    category,
                    visits,
                    discount,
                    annual_savings: Money::sar(discount.of(yearly)),
                }
            })
            .collect();
        let total = lines.iter().map(|l| l.annual_savings).sum::<Money>().round();

        Self {
            tier,
            lines,
            total,
            net_profit: total - tier.base_price(),
        }
    }

    /// Indicates whether this [`Projection`] pays the card off.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.net_profit.amount.is_sign_positive()
            && !self.net_profit.amount.is_zero()
    }
}

/// Savings estimate shown to a user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Estimate {
    /// No [`Category`] is selected yet, so there is nothing to show but a
    /// prompt.
    NoSelection,

    /// [`Projection`]s for both [`Tier`]s.
    Projected {
        /// [`Projection`] for the [`Tier::Vip`].
        vip: Projection,

        /// [`Projection`] for the [`Tier::Family`].
        family: Projection,
    },
}

impl Estimate {
    /// Estimates savings of the provided [`Selection`], projecting each
    /// [`Tier`] on its own.
    #[must_use]
    pub fn new(selection: &Selection) -> Self {
        if selection.is_empty() {
            return Self::NoSelection;
        }
        Self::Projected {
            vip: Projection::compute(Tier::Vip, selection),
            family: Projection::compute(Tier::Family, selection),
        }
    }
}

/// View-model of the savings calculator widget.
///
/// Until marked [`ready`], it ignores any interaction and estimates nothing.
///
/// [`ready`]: Calculator::ready
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Calculator {
    /// Indicator whether the widget is able to take interactions.
    pub ready: bool,

    /// Current [`Selection`].
    selection: Selection,
}

impl Calculator {
    /// Creates a new [`Calculator`] with the provided readiness and nothing
    /// selected.
    #[must_use]
    pub const fn new(ready: bool) -> Self {
        Self {
            ready,
            selection: Selection::new(),
        }
    }

    /// Returns the current [`Selection`].
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggles the provided [`Category`].
    pub fn toggle(&mut self, category: Category) {
        if self.ready {
            self.selection.toggle(category);
        }
    }

    /// Sets [`Visits`] of the provided [`Category`] clamping them to at
    /// least `1`.
    pub fn set_visits(&mut self, category: Category, count: u32) {
        if self.ready {
            self.selection.set_visits(category, Visits::new(count));
        }
    }

    /// Increments [`Visits`] of the provided [`Category`].
    pub fn increment(&mut self, category: Category) {
        if self.ready {
            self.selection.increment(category);
        }
    }

    /// Decrements [`Visits`] of the provided [`Category`].
    pub fn decrement(&mut self, category: Category) {
        if self.ready {
            self.selection.decrement(category);
        }
    }

    /// Clears the [`Selection`].
    pub fn clear(&mut self) {
        if self.ready {
            self.selection.clear();
        }
    }

    /// Estimates savings from scratch for the current [`Selection`].
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        if self.ready {
            Estimate::new(&self.selection)
        } else {
            Estimate::NoSelection
        }
    }
}

/// Discount estimate of a single purchase made with a card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PurchaseEstimate {
    /// [`Tier`] of the card used.
    pub tier: Tier,

    /// Purchase amount before the discount.
    pub amount: Money,

    /// Discount amount.
    pub discount: Money,

    /// Amount paid after the discount.
    pub final_amount: Money,
}

impl PurchaseEstimate {
    /// Estimates the discount on a purchase of the provided `amount`.
    ///
    /// [`None`] is returned if the `amount` is not positive.
    #[must_use]
    pub fn new(tier: Tier, amount: Decimal) -> Option<Self> {
        if amount <= Decimal::ZERO {
            return None;
        }
        let amount = Money::sar(amount);
        let discount = amount.share(tier.purchase_discount());
        Some(Self {
            tier,
            amount,
            discount,
            final_amount: amount - discount,
        })
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::domain::{Category, Tier};

    use super::{
        Calculator, Entry, Estimate, Projection, PurchaseEstimate, Selection,
        Visits,
    };

    fn sar(n: i64) -> Money {
        Money::sar(Decimal::from(n))
    }

    fn entry(category: Category, visits: u32) -> Entry {
        Entry {
            category,
            visits: Visits::new(visits),
        }
    }

    #[test]
    fn empty_selection_is_a_full_loss() {
        let p = Projection::compute(Tier::Vip, &Selection::new());
        assert_eq!(p.total, sar(0));
        assert_eq!(p.net_profit, sar(-1500));
        assert!(p.lines.is_empty());
        assert!(!p.is_profitable());
    }

    #[test]
    fn projects_restaurants_for_vip() {
        let selection: Selection =
            [entry(Category::Restaurants, 2)].into_iter().collect();
        let p = Projection::compute(Tier::Vip, &selection);
        assert_eq!(p.total, sar(1260));
        assert_eq!(p.net_profit, sar(-240));
        assert_eq!(p.lines[0].annual_savings, sar(1260));
    }

    #[test]
    fn sums_all_lines() {
        let selection: Selection = [
            entry(Category::Sports, 1),
            entry(Category::Clothing, 3),
        ]
        .into_iter()
        .collect();
        let p = Projection::compute(Tier::Family, &selection);
        // 400 * 12 * 18% = 864, 800 * 3 * 12 * 20% = 5760
        assert_eq!(p.total, sar(6624));
        assert_eq!(p.net_profit, sar(5824));
        assert!(p.is_profitable());
    }

    #[test]
    fn distinguishes_no_selection_from_zero() {
        assert_eq!(Estimate::new(&Selection::new()), Estimate::NoSelection);

        let selection: Selection =
            [entry(Category::Sweets, 1)].into_iter().collect();
        match Estimate::new(&selection) {
            Estimate::Projected { vip, family } => {
                assert_eq!(vip.tier, Tier::Vip);
                assert_eq!(family.tier, Tier::Family);
                assert_eq!(vip.total, sar(480));
                assert_eq!(family.total, sar(360));
            }
            Estimate::NoSelection => panic!("expected projection"),
        }
    }

    #[test]
    fn collects_repeated_category_once() {
        let selection: Selection = [
            entry(Category::Sweets, 1),
            entry(Category::Sports, 4),
            entry(Category::Sweets, 5),
        ]
        .into_iter()
        .collect();
        assert_eq!(selection.entries().len(), 2);
        assert_eq!(selection.entries()[0].category, Category::Sweets);
        assert_eq!(selection.visits(Category::Sweets), Some(Visits::new(5)));
    }

    #[test]
    fn clamps_visits() {
        assert_eq!(Visits::new(0), Visits::MIN);
        assert_eq!(Visits::MIN.decrement(), Visits::MIN);
        assert_eq!(Visits::default().get(), 2);
        assert_eq!(Visits::default().decrement().decrement().get(), 1);
        assert_eq!(Visits::MIN.increment().get(), 2);
    }

    #[test]
    fn calculator_ignores_interaction_until_ready() {
        let mut calc = Calculator::new(false);
        calc.toggle(Category::Medicine);
        assert!(calc.selection().is_empty());
        assert_eq!(calc.estimate(), Estimate::NoSelection);

        calc.ready = true;
        calc.toggle(Category::Medicine);
        assert_eq!(calc.selection().visits(Category::Medicine), Some(Visits::DEFAULT));
        assert_ne!(calc.estimate(), Estimate::NoSelection);

        calc.ready = false;
        assert_eq!(calc.estimate(), Estimate::NoSelection);
    }

    #[test]
    fn calculator_walks_the_widget_states() {
        let mut calc = Calculator::new(true);
        assert_eq!(calc.estimate(), Estimate::NoSelection);

        calc.toggle(Category::Restaurants);
        calc.decrement(Category::Restaurants);
        calc.decrement(Category::Restaurants);
        assert_eq!(calc.selection().visits(Category::Restaurants), Some(Visits::MIN));

        calc.increment(Category::Restaurants);
        calc.set_visits(Category::Sports, 0);
        assert_eq!(calc.selection().visits(Category::Sports), Some(Visits::MIN));

        calc.toggle(Category::Sports);
        assert_eq!(calc.selection().visits(Category::Sports), None);
        match calc.estimate() {
            Estimate::Projected { vip, .. } => assert_eq!(vip.total, sar(1260)),
            Estimate::NoSelection => panic!("expected projection"),
        }

        calc.clear();
        assert_eq!(calc.estimate(), Estimate::NoSelection);
    }

    #[test]
    fn estimates_purchase() {
        let vip = PurchaseEstimate::new(Tier::Vip, Decimal::from(200)).unwrap();
        assert_eq!(vip.discount, sar(70));
        assert_eq!(vip.final_amount, sar(130));

        let family =
            PurchaseEstimate::new(Tier::Family, Decimal::new(9999, 2)).unwrap();
        assert_eq!(family.discount.amount, Decimal::new(249_975, 4));

        assert!(PurchaseEstimate::new(Tier::Vip, Decimal::ZERO).is_none());
        assert!(PurchaseEstimate::new(Tier::Vip, Decimal::NEGATIVE_ONE).is_none());
    }

    fn any_selection() -> impl Strategy<Value = Selection> {
        prop::collection::vec((0..Category::ALL.len(), 0_u32..40), 1..8)
            .prop_map(|picks| {
                picks
                    .into_iter()
                    .map(|(i, v)| entry(Category::ALL[i], v))
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn tiers_never_share_totals(selection in any_selection()) {
            let vip = Projection::compute(Tier::Vip, &selection);
            let family = Projection::compute(Tier::Family, &selection);
            prop_assert_ne!(vip.total, family.total);
            prop_assert!(vip.total.amount > family.total.amount);
        }

        #[test]
        fn visits_never_drop_below_one(start in 0_u32..5, steps in 0_usize..10) {
            let mut v = Visits::new(start);
            for _ in 0..steps {
                v = v.decrement();
                prop_assert!(v.get() >= 1);
            }
        }

        #[test]
        fn recomputes_from_scratch(selection in any_selection()) {
            let mut calc = Calculator::new(true);
            for e in selection.entries() {
                calc.set_visits(e.category, e.visits.get());
            }
            prop_assert_eq!(calc.estimate(), Estimate::new(&selection));
        }
    }
}
