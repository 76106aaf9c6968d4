//! # Order Registry
//!
//! Owns every order opened during a session and the counters that number
//! orders and customers.
//!
//! ## Order Lifecycle
//! ```text
//! ┌──────────────┐  register_customer   ┌──────────────┐
//! │  Name prompt │─────────────────────►│   Customer   │
//! └──────────────┘                      └──────┬───────┘
//!                                              │ create_order
//!                                              ▼
//!                                       ┌──────────────┐
//!                                       │ Order (id n) │◄── default hook attached
//!                                       └──────┬───────┘
//!                                              │ stays in `orders` for good
//!                                              ▼
//!                                       generate_bill()
//! ```
//!
//! Orders are never dropped from the registry, paid or not. For a single
//! till session that is fine; a long-running process would need a way to
//! retire them.

use tracing::info;

use crate::customer::{Customer, CustomerSequence};
use crate::error::{CoreError, CoreResult};
use crate::order::{Order, OrderId, OrderLogger, OrderObserver};
use crate::validation::ValidationResult;

/// Builds the observer attached to each new order.
pub type HookFactory = Box<dyn Fn() -> Box<dyn OrderObserver>>;

pub struct OrderRegistry {
    orders: Vec<Order>,
    customers: CustomerSequence,
    hook: HookFactory,
}

impl OrderRegistry {
    /// Registry whose orders log every change through [`OrderLogger`].
    pub fn new() -> Self {
        Self::with_hook(|| -> Box<dyn OrderObserver> { Box::new(OrderLogger) })
    }

    /// Registry that attaches the observer built by `hook` to each order.
    pub fn with_hook<F>(hook: F) -> Self
    where
        F: Fn() -> Box<dyn OrderObserver> + 'static,
    {
        OrderRegistry {
            orders: Vec::new(),
            customers: CustomerSequence::new(),
            hook: Box::new(hook),
        }
    }

    /// Validates the name and issues the next customer id.
    pub fn register_customer(&mut self, name: &str) -> ValidationResult<Customer> {
        let customer = self.customers.register(name)?;
        info!(customer_id = %customer.id(), name = customer.name(), "Customer registered");
        Ok(customer)
    }

    /// Opens a new order for `customer`.
    ///
    /// The id is one more than the number of orders already held, so the
    /// first order of every registry is `1`.
    pub fn create_order(&mut self, customer: Customer) -> &mut Order {
        let id = OrderId::new(self.orders.len() + 1);
        info!(order_id = %id, customer_id = %customer.id(), "Order created");

        let order = Order::new(id, customer, vec![(self.hook)()]);
        self.orders.push(order);

        let last = self.orders.len() - 1;
        &mut self.orders[last]
    }

    pub fn get(&self, id: OrderId) -> CoreResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id() == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: OrderId) -> CoreResult<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))
    }

    /// Every order opened so far, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OrderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderRegistry")
            .field("orders", &self.orders)
            .field("customers", &self.customers)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
