//! # Bill
//!
//! The checkout snapshot. A bill copies everything it prints out of the
//! order at the moment it is generated, so the basket can keep changing
//! without the bill changing with it.
//!
//! ## Checkout Flow
//! ```text
//! Order.items ──► calculate_total() ──► Bill.subtotal   (frozen)
//!                                           │
//!                               × tax_rate, exact Decimal
//!                                           │
//!                                           ▼
//!                                    Bill.tax_amount()
//!                                           │
//!                                           ▼
//!                            Bill.calculate_final_amount()
//!                                           │
//!                              rounded to the penny only in render()
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::customer::Customer;
use crate::money::{format_pounds, Money};
use crate::order::{Order, OrderId};
use crate::types::{MenuItem, TaxRate};

/// Short opaque bill reference: six upper-case hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId(String);

impl BillId {
    /// Draws a fresh id from a random UUID.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        BillId(hex[..6].to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable checkout snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    id: BillId,
    order_id: OrderId,
    customer: Customer,
    items: Vec<MenuItem>,
    subtotal: Money,
    tax_rate: TaxRate,
    issued_at: DateTime<Utc>,
}

impl Bill {
    pub(crate) fn from_order(order: &Order, tax_rate: TaxRate) -> Self {
        Bill {
            id: BillId::generate(),
            order_id: order.id(),
            customer: order.customer().clone(),
            items: order.items().to_vec(),
            subtotal: order.calculate_total(),
            tax_rate,
            issued_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &BillId {
        &self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Items as they were when the bill was generated.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Tax on the subtotal in pounds. Not rounded: 10% of £2.75 is £0.275.
    pub fn tax_amount(&self) -> Decimal {
        self.subtotal.to_decimal() * self.tax_rate.as_fraction()
    }

    /// What the customer pays, in pounds: `subtotal × (1 + tax_rate)`.
    ///
    /// ```rust
    /// use cafe_core::{Decimal, MenuItem, Money, OrderRegistry};
    ///
    /// let mut registry = OrderRegistry::new();
    /// let customer = registry.register_customer("Alex").unwrap();
    /// let order = registry.create_order(customer);
    /// order.add_item(MenuItem::food("Salad", Money::from_pence(390), "Healthy"));
    /// order.add_item(MenuItem::drink("Tea", Money::from_pence(180), "Medium"));
    ///
    /// let bill = order.generate_bill();
    /// assert_eq!(bill.subtotal().to_string(), "£5.70");
    /// assert_eq!(bill.calculate_final_amount(), Decimal::new(627, 2));
    /// ```
    pub fn calculate_final_amount(&self) -> Decimal {
        self.subtotal.to_decimal() + self.tax_amount()
    }

    /// The printed receipt. Amounts are rounded to the penny here and
    /// nowhere else.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(" Cafe Bill \n");
        out.push_str(&format!("Bill ID: {}\n", self.id));
        out.push_str(&format!("Order ID: {}\n", self.order_id));
        out.push_str(&format!(
            "Customer: {} (Customer ID: {})\n\n",
            self.customer.name(),
            self.customer.id()
        ));

        out.push_str("Items:\n");
        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, item.details()));
        }

        out.push_str(&format!("\nSubtotal: {}\n", self.subtotal));
        out.push_str(&format!("Tax: {}\n", self.tax_rate));
        out.push_str(&format!(
            "Total: {}\n",
            format_pounds(self.calculate_final_amount())
        ));
        out.push_str("---------------------\n\n");
        out.push_str(&format!(
            "Thank you {}! Please do come again!\n",
            self.customer.name()
        ));

        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
