//! # Customers
//!
//! A customer is just a name and a number. Numbers come from a
//! [`CustomerSequence`] owned by whoever registers customers (normally the
//! [`OrderRegistry`](crate::registry::OrderRegistry)), so two registries never
//! share a counter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{validate_customer_name, ValidationResult};

/// Sequential customer number, shown zero-padded: `001`, `002`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(u32);

impl CustomerId {
    pub const fn new(n: u32) -> Self {
        CustomerId(n)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    id: CustomerId,
}

impl Customer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Text shown once the customer's order is open.
    pub fn greeting(&self, order_id: impl fmt::Display) -> String {
        format!(
            "Welcome {}! (Customer ID: {})\nYour Order ID is {}",
            self.name, self.id, order_id
        )
    }
}

/// Hands out customer ids starting at 1.
#[derive(Debug, Clone, Default)]
pub struct CustomerSequence {
    issued: u32,
}

impl CustomerSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the name and issues the next id.
    ///
    /// A rejected name does not consume an id.
    pub fn register(&mut self, name: &str) -> ValidationResult<Customer> {
        let name = validate_customer_name(name)?;
        self.issued += 1;
        Ok(Customer {
            name,
            id: CustomerId(self.issued),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_padded() {
        let mut seq = CustomerSequence::new();
        let alex = seq.register("Alex").unwrap();
        let sam = seq.register("Sam").unwrap();

        assert_eq!(alex.id().to_string(), "001");
        assert_eq!(sam.id().to_string(), "002");
        assert!(sam.id() > alex.id());
        assert_eq!(CustomerId::new(1234).to_string(), "1234");
    }

    #[test]
    fn test_register_trims_name() {
        let mut seq = CustomerSequence::new();
        let c = seq.register("  Jamie ").unwrap();
        assert_eq!(c.name(), "Jamie");
    }

    #[test]
    fn test_blank_name_does_not_consume_id() {
        let mut seq = CustomerSequence::new();
        assert!(seq.register("   ").is_err());

        let c = seq.register("Robin").unwrap();
        assert_eq!(c.id().value(), 1);
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut a = CustomerSequence::new();
        let mut b = CustomerSequence::new();
        a.register("One").unwrap();
        a.register("Two").unwrap();

        assert_eq!(b.register("Three").unwrap().id().value(), 1);
    }

    #[test]
    fn test_greeting() {
        let mut seq = CustomerSequence::new();
        let c = seq.register("Alex").unwrap();
        assert_eq!(
            c.greeting(1),
            "Welcome Alex! (Customer ID: 001)\nYour Order ID is 1"
        );
    }
}
