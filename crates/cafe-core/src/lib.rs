//! # cafe-core: Pure Business Logic for the Café Till
//!
//! This crate holds the whole ordering domain: menu items, the catalog,
//! customers, orders, bills and the registry that hands out ids.
//! Nothing in here reads input or prints output.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Till Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cafe-cli (console harness)                   │   │
//! │  │    Name prompt ──► Menu ──► Basket ──► Pay ──► Receipt          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │ catalog  │ │  order   │ │   bill   │          │   │
//! │  │   │  Money   │ │ MenuItem │ │  Order   │ │   Bill   │          │   │
//! │  │   │ TaxRate  │ │ Catalog  │ │ Observer │ │ snapshot │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐                        │   │
//! │  │   │ customer │ │ registry │ │validation│                        │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer pence prices and exact decimal bill amounts
//! - [`types`] - Tax rate, item kinds and menu items
//! - [`catalog`] - The ordered menu shown to customers
//! - [`customer`] - Customer identity and id sequence
//! - [`order`] - The basket and its observers
//! - [`bill`] - Checkout snapshot
//! - [`registry`] - Order lifecycle and id assignment
//! - [`validation`] - Input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::{Decimal, MenuItem, Money, OrderRegistry};
//!
//! let mut registry = OrderRegistry::new();
//! let customer = registry.register_customer("Jamie").unwrap();
//! let order = registry.create_order(customer);
//!
//! order.add_item(MenuItem::drink("Coffee", Money::from_pence(200), "Small"));
//!
//! let bill = order.generate_bill();
//! assert_eq!(bill.calculate_final_amount(), Decimal::new(220, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::{Bill, BillId};
pub use catalog::{MenuCatalog, MenuEntry};
pub use customer::{Customer, CustomerId, CustomerSequence};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_pounds, Money};
pub use rust_decimal::Decimal;
pub use order::{Order, OrderChange, OrderId, OrderLogger, OrderObserver};
pub use registry::OrderRegistry;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax applied at checkout unless the caller picks another rate: 10%.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Longest customer name accepted at the name prompt.
pub const MAX_CUSTOMER_NAME_LEN: usize = 50;

/// Longest menu item name accepted when building a catalog.
pub const MAX_ITEM_NAME_LEN: usize = 100;
