//! Cart and checkout state
//!
//! Holds the lines the guest has picked plus the tip choice, and derives
//! checkout totals from them. Every mutation persists through the session
//! store before returning, so the cart survives reloads. Totals are
//! recomputed on demand, never cached.

use serde::{Deserialize, Serialize};

use crate::session::{SessionError, SessionStore};
use shared::models::Dish;

/// Service fee applied to every check, in percent
pub const SERVICE_FEE_PERCENT: i64 = 10;

/// One cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub dish_id: i64,
    pub name: String,
    /// Unit price in minor currency units
    pub price: i64,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity as i64
    }
}

/// How `add_item` treats a dish that is already in the cart
///
/// Guest menu carts append a fresh line each time; authenticated
/// checkout carts merge into the existing line. Both are intended
/// behavior, not variants of one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPolicy {
    AppendLine,
    MergeByDish,
}

/// Tip selection
///
/// Percent and fixed amount are mutually exclusive; setting one replaces
/// the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TipChoice {
    #[default]
    None,
    /// Percent of the subtotal
    Percent(u8),
    /// Fixed amount in minor currency units
    Amount(i64),
}

/// Derived totals, in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTotals {
    pub subtotal: i64,
    pub service_fee_percent: i64,
    pub service_fee: i64,
    pub tip: i64,
    pub total: i64,
}

/// Percent of an amount, rounded half-up to the nearest minor unit
fn percent_of(amount: i64, percent: i64) -> i64 {
    (amount * percent + 50) / 100
}

/// Cart state machine
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    tip: TipChoice,
    policy: CartPolicy,
}

impl Cart {
    /// Load the persisted cart from the session store
    pub fn load(store: &SessionStore, policy: CartPolicy) -> Self {
        Self {
            lines: store.cart(),
            tip: TipChoice::None,
            policy,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across all lines
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn tip(&self) -> TipChoice {
        self.tip
    }

    /// Add one unit of a dish
    ///
    /// Under `MergeByDish` an existing line for the dish gains quantity;
    /// under `AppendLine` a new line is appended regardless.
    pub fn add_item(&mut self, store: &mut SessionStore, dish: &Dish) -> Result<(), SessionError> {
        match self.policy {
            CartPolicy::MergeByDish => {
                if let Some(line) = self.lines.iter_mut().find(|l| l.dish_id == dish.id) {
                    line.quantity += 1;
                } else {
                    self.lines.push(Self::line_from(dish));
                }
            }
            CartPolicy::AppendLine => {
                self.lines.push(Self::line_from(dish));
            }
        }
        self.persist(store)
    }

    fn line_from(dish: &Dish) -> CartLine {
        CartLine {
            dish_id: dish.id,
            name: dish.name.clone(),
            price: dish.price,
            quantity: 1,
            image_url: dish.image_url.clone(),
        }
    }

    /// Add `delta` to a line's quantity; the line is removed when the
    /// result drops to zero or below
    pub fn update_quantity(
        &mut self,
        store: &mut SessionStore,
        index: usize,
        delta: i32,
    ) -> Result<(), SessionError> {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity += delta;
            if line.quantity <= 0 {
                self.lines.remove(index);
            }
            self.persist(store)?;
        }
        Ok(())
    }

    /// Remove a line unconditionally
    pub fn remove_item(
        &mut self,
        store: &mut SessionStore,
        index: usize,
    ) -> Result<(), SessionError> {
        if index < self.lines.len() {
            self.lines.remove(index);
            self.persist(store)?;
        }
        Ok(())
    }

    /// Empty the cart and reset the tip
    pub fn clear(&mut self, store: &mut SessionStore) -> Result<(), SessionError> {
        self.lines.clear();
        self.tip = TipChoice::None;
        self.persist(store)
    }

    /// Select a percent tip, clearing any fixed amount
    pub fn set_tip_percent(&mut self, percent: u8) {
        self.tip = TipChoice::Percent(percent);
    }

    /// Enter a fixed tip amount, clearing any selected percent
    pub fn set_tip_amount(&mut self, amount: i64) {
        self.tip = TipChoice::Amount(amount);
    }

    pub fn clear_tip(&mut self) {
        self.tip = TipChoice::None;
    }

    pub fn subtotal(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checkout totals: subtotal + service fee + tip
    pub fn totals(&self) -> CheckoutTotals {
        let subtotal = self.subtotal();
        let service_fee = percent_of(subtotal, SERVICE_FEE_PERCENT);
        let tip = match self.tip {
            TipChoice::None => 0,
            TipChoice::Percent(p) => percent_of(subtotal, p as i64),
            TipChoice::Amount(a) => a,
        };
        CheckoutTotals {
            subtotal,
            service_fee_percent: SERVICE_FEE_PERCENT,
            service_fee,
            tip,
            total: subtotal + service_fee + tip,
        }
    }

    /// Pre-checkout "my check" totals: subtotal + service fee, no tip
    pub fn check_totals(&self) -> CheckoutTotals {
        let subtotal = self.subtotal();
        let service_fee = percent_of(subtotal, SERVICE_FEE_PERCENT);
        CheckoutTotals {
            subtotal,
            service_fee_percent: SERVICE_FEE_PERCENT,
            service_fee,
            tip: 0,
            total: subtotal + service_fee,
        }
    }

    fn persist(&self, store: &mut SessionStore) -> Result<(), SessionError> {
        store.set_cart(&self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: i64, price: i64) -> Dish {
        Dish {
            id,
            category_id: 1,
            name: format!("Dish {}", id),
            description: None,
            price,
            image_url: None,
            is_available: true,
            on_stop_list: false,
        }
    }

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn test_merge_policy_bumps_quantity() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);

        cart.add_item(&mut store, &dish(1, 2500)).unwrap();
        cart.add_item(&mut store, &dish(1, 2500)).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_append_policy_keeps_separate_lines() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::AppendLine);

        cart.add_item(&mut store, &dish(1, 2500)).unwrap();
        cart.add_item(&mut store, &dish(1, 2500)).unwrap();

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_quantity_never_zero_or_negative() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);

        cart.add_item(&mut store, &dish(1, 1000)).unwrap();
        cart.update_quantity(&mut store, 0, 2).unwrap();
        assert_eq!(cart.lines()[0].quantity, 3);

        cart.update_quantity(&mut store, 0, -5).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);

        cart.add_item(&mut store, &dish(1, 1000)).unwrap();
        cart.add_item(&mut store, &dish(2, 2000)).unwrap();
        cart.remove_item(&mut store, 0).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].dish_id, 2);
    }

    #[test]
    fn test_guest_check_scenario() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);

        cart.add_item(&mut store, &dish(1, 2500)).unwrap();
        cart.add_item(&mut store, &dish(1, 2500)).unwrap();
        cart.add_item(&mut store, &dish(2, 1000)).unwrap();

        let totals = cart.check_totals();
        assert_eq!(totals.subtotal, 6000);
        assert_eq!(totals.service_fee, 600);
        assert_eq!(totals.tip, 0);
        assert_eq!(totals.total, 6600);
    }

    #[test]
    fn test_checkout_tip_percent() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);

        cart.add_item(&mut store, &dish(1, 2500)).unwrap();
        cart.add_item(&mut store, &dish(1, 2500)).unwrap();
        cart.add_item(&mut store, &dish(2, 1000)).unwrap();
        cart.set_tip_percent(15);

        let totals = cart.totals();
        assert_eq!(totals.subtotal, 6000);
        assert_eq!(totals.tip, 900);
        assert_eq!(totals.total, 6000 + 600 + 900);
    }

    #[test]
    fn test_totals_idempotent() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);

        cart.add_item(&mut store, &dish(1, 3333)).unwrap();
        cart.set_tip_percent(10);

        assert_eq!(cart.totals(), cart.totals());
    }

    #[test]
    fn test_tip_mutual_exclusivity() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);
        cart.add_item(&mut store, &dish(1, 1000)).unwrap();

        cart.set_tip_percent(10);
        assert_eq!(cart.tip(), TipChoice::Percent(10));

        cart.set_tip_amount(500);
        assert_eq!(cart.tip(), TipChoice::Amount(500));

        cart.set_tip_percent(20);
        assert_eq!(cart.tip(), TipChoice::Percent(20));

        cart.clear_tip();
        assert_eq!(cart.tip(), TipChoice::None);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 10% of 5 minor units is 0.5, rounds up to 1
        assert_eq!(percent_of(5, 10), 1);
        assert_eq!(percent_of(4, 10), 0);
        assert_eq!(percent_of(6000, 10), 600);
        assert_eq!(percent_of(3333, 10), 333);
    }

    #[test]
    fn test_cart_persists_across_load() {
        let (_dir, mut store) = store();
        let mut cart = Cart::load(&store, CartPolicy::MergeByDish);
        cart.add_item(&mut store, &dish(1, 1500)).unwrap();
        cart.add_item(&mut store, &dish(1, 1500)).unwrap();

        let reloaded = Cart::load(&store, CartPolicy::MergeByDish);
        assert_eq!(reloaded.lines().len(), 1);
        assert_eq!(reloaded.lines()[0].quantity, 2);
    }
}
