//! # Orders
//!
//! An [`Order`] is one customer's basket: an ordered list of menu items plus
//! the observers told about every change.
//!
//! ## Basket Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  Session Action          Order Method            Basket Change          │
//! │  ──────────────          ────────────            ─────────────          │
//! │                                                                         │
//! │  Pick menu item ───────► add_item() ───────────► items.push(item)      │
//! │                                                                         │
//! │  Pick basket line ─────► remove_item(i) ───────► items.remove(i)       │
//! │                                                                         │
//! │  View basket ──────────► render_basket() ──────► (read only)           │
//! │                                                                         │
//! │  Pay ──────────────────► generate_bill() ──────► (read only, snapshot) │
//! │                                                                         │
//! │  NOTE: observers run after every successful add / remove.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::bill::Bill;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MenuItem, TaxRate};
use crate::DEFAULT_TAX_RATE;

// =============================================================================
// Order Id
// =============================================================================

/// Registry-scoped order number. Restarts at 1 for every registry.
///
/// Sized like the registry's order list, so the next id is always
/// `len + 1` with no narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(usize);

impl OrderId {
    pub const fn new(n: usize) -> Self {
        OrderId(n)
    }

    pub const fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Observers
// =============================================================================

/// What just happened to a basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderChange {
    /// `position` is where the item landed (0-based).
    ItemAdded { position: usize, name: String },
    /// `position` is where the item was before removal (0-based).
    ItemRemoved { position: usize, name: String },
}

impl fmt::Display for OrderChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderChange::ItemAdded { name, .. } => write!(f, "added {}", name),
            OrderChange::ItemRemoved { name, .. } => write!(f, "removed {}", name),
        }
    }
}

/// Told about every successful basket mutation.
///
/// Runs synchronously, after the change is applied, with the order in its
/// new state.
pub trait OrderObserver {
    fn order_updated(&self, order: &Order, change: &OrderChange);
}

/// Any `Fn(&Order, &OrderChange)` closure can observe an order.
impl<F> OrderObserver for F
where
    F: Fn(&Order, &OrderChange),
{
    fn order_updated(&self, order: &Order, change: &OrderChange) {
        self(order, change)
    }
}

/// Default observer: one structured log event per change.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderLogger;

impl OrderObserver for OrderLogger {
    fn order_updated(&self, order: &Order, change: &OrderChange) {
        info!(
            order_id = %order.id(),
            customer_id = %order.customer().id(),
            %change,
            items_in_basket = order.len(),
            "Order updated"
        );
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's basket.
///
/// ## Invariants
/// - `items` reflects exactly the add / remove history (duplicates allowed)
/// - Removal shifts later items down, leaving no gaps
pub struct Order {
    id: OrderId,
    customer: Customer,
    items: Vec<MenuItem>,
    observers: Vec<Box<dyn OrderObserver>>,
}

impl Order {
    /// Creates an empty order with the given observers already attached.
    pub fn new(id: OrderId, customer: Customer, observers: Vec<Box<dyn OrderObserver>>) -> Self {
        Order {
            id,
            customer,
            items: Vec::new(),
            observers,
        }
    }

    /// Adds another observer; it sees only changes made from now on.
    pub fn attach(&mut self, observer: Box<dyn OrderObserver>) {
        self.observers.push(observer);
    }

    /// Appends an item to the end of the basket.
    pub fn add_item(&mut self, item: MenuItem) {
        let change = OrderChange::ItemAdded {
            position: self.items.len(),
            name: item.name().to_string(),
        };
        self.items.push(item);
        self.notify(&change);
    }

    /// Removes the item at a 0-based position and returns it.
    ///
    /// ## Errors
    /// `InvalidSelection` when `position >= len`. The basket is left as it
    /// was and no observer runs.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::{CoreError, CustomerSequence, MenuItem, Money, Order, OrderId};
    ///
    /// let customer = CustomerSequence::new().register("Sam").unwrap();
    /// let mut order = Order::new(OrderId::new(1), customer, Vec::new());
    ///
    /// assert!(matches!(order.remove_item(0), Err(CoreError::InvalidSelection { .. })));
    ///
    /// order.add_item(MenuItem::drink("Tea", Money::from_pence(180), "Medium"));
    /// assert_eq!(order.remove_item(0).unwrap().name(), "Tea");
    /// assert!(order.is_empty());
    /// ```
    pub fn remove_item(&mut self, position: usize) -> CoreResult<MenuItem> {
        if position >= self.items.len() {
            return Err(CoreError::InvalidSelection {
                position,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(position);
        let change = OrderChange::ItemRemoved {
            position,
            name: removed.name().to_string(),
        };
        self.notify(&change);
        Ok(removed)
    }

    /// Sum of the prices of everything in the basket.
    pub fn calculate_total(&self) -> Money {
        self.items.iter().map(MenuItem::price).sum()
    }

    /// Freezes the basket into a bill at the default 10% rate.
    pub fn generate_bill(&self) -> Bill {
        self.generate_bill_with_rate(DEFAULT_TAX_RATE)
    }

    /// Freezes the basket into a bill at the given rate.
    ///
    /// Does not touch the order; later changes to it do not reach the bill.
    pub fn generate_bill_with_rate(&self, tax_rate: TaxRate) -> Bill {
        Bill::from_order(self, tax_rate)
    }

    /// The basket as printed after each change.
    ///
    /// ```rust
    /// use cafe_core::{CustomerSequence, MenuItem, Money, Order, OrderId};
    ///
    /// let customer = CustomerSequence::new().register("Sam").unwrap();
    /// let mut order = Order::new(OrderId::new(1), customer, Vec::new());
    /// assert_eq!(order.render_basket(), "Your basket is currently empty.\n");
    ///
    /// order.add_item(MenuItem::food("Salad", Money::from_pence(390), "Healthy"));
    /// assert_eq!(
    ///     order.render_basket(),
    ///     "--- Your Basket ---\n1. Food: Salad - £3.90\nTotal so far: £3.90\n"
    /// );
    /// ```
    pub fn render_basket(&self) -> String {
        if self.items.is_empty() {
            return "Your basket is currently empty.\n".to_string();
        }

        let mut out = String::from("--- Your Basket ---\n");
        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, item.details()));
        }
        out.push_str(&format!("Total so far: {}\n", self.calculate_total()));
        out
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn notify(&self, change: &OrderChange) {
        for observer in &self.observers {
            observer.order_updated(self, change);
        }
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("customer", &self.customer)
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
