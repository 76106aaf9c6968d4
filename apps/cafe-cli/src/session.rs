//! # Session Loop
//!
//! The interactive counter. Generic over its input and output so tests can
//! script a whole visit with a `Cursor` and read back what was printed.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter your first name ──► Welcome + order id                          │
//! │         ▲                        │                                      │
//! │         │                        ▼                                      │
//! │         │       ┌─── 1. Add item ────► numbered menu, 0 = back          │
//! │         │       ├─── 2. Remove item ─► numbered basket, 0 = back        │
//! │         │       ├─── 3. View basket                                     │
//! │         ├───────┼─── 4. Pay ─────────► bill printed                     │
//! │         └───────┴─── 0. Back ────────► goodbye                          │
//! │                                                                         │
//! │  End of input at any prompt ends the session.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use cafe_core::validation::parse_selection;
use cafe_core::{Customer, MenuCatalog, OrderId, OrderRegistry, TaxRate};
use tracing::{debug, info};

use crate::config::ConfigState;
use crate::error::CliError;

/// Whether the loop should keep going after a sub-menu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfInput,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    catalog: MenuCatalog,
    registry: OrderRegistry,
    store_name: String,
    tax_rate: TaxRate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, catalog: MenuCatalog, config: &ConfigState) -> Self {
        Self::with_registry(input, output, catalog, OrderRegistry::new(), config)
    }

    /// Same as [`Session::new`] with a caller-built registry.
    pub fn with_registry(
        input: R,
        output: W,
        catalog: MenuCatalog,
        registry: OrderRegistry,
        config: &ConfigState,
    ) -> Self {
        Session {
            input,
            output,
            catalog,
            registry,
            store_name: config.store_name.clone(),
            tax_rate: config.tax_rate,
        }
    }

    /// Serves customers until input runs out. Returns the registry so the
    /// caller can see every order taken.
    pub fn run(mut self) -> Result<OrderRegistry, CliError> {
        writeln!(
            self.output,
            " Welcome to {}, What can we get you! ",
            self.store_name
        )?;

        while let Some(customer) = self.prompt_customer()? {
            let order = self.registry.create_order(customer);
            let order_id = order.id();
            let greeting = order.customer().greeting(order_id);
            writeln!(self.output, "\n{}\n", greeting)?;

            if self.serve(order_id)? == Flow::EndOfInput {
                break;
            }
        }

        Ok(self.registry)
    }

    /// Asks for a name until a usable one arrives. `None` on end of input.
    fn prompt_customer(&mut self) -> Result<Option<Customer>, CliError> {
        loop {
            let Some(line) = self.read_line("\nEnter your first name: ")? else {
                return Ok(None);
            };

            match self.registry.register_customer(&line) {
                Ok(customer) => return Ok(Some(customer)),
                Err(e) if e.is_empty_input() => continue,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Main options for one open order.
    fn serve(&mut self, order_id: OrderId) -> Result<Flow, CliError> {
        loop {
            writeln!(
                self.output,
                "\n1. Add item\n2. Remove item\n3. View basket\n4. Pay\n0. Back to main menu"
            )?;
            let Some(choice) = self.read_line("Choose: ")? else {
                return Ok(Flow::EndOfInput);
            };

            let flow = match choice.as_str() {
                "1" => self.add_items(order_id)?,
                "2" => self.remove_items(order_id)?,
                "3" => {
                    let basket = self.registry.get(order_id)?.render_basket();
                    writeln!(self.output, "\n{}", basket)?;
                    Flow::Continue
                }
                "4" => {
                    self.pay(order_id)?;
                    return Ok(Flow::Continue);
                }
                "0" => {
                    let order = self.registry.get(order_id)?;
                    writeln!(
                        self.output,
                        "Goodbye {}! Returning to main menu...\n",
                        order.customer().name()
                    )?;
                    return Ok(Flow::Continue);
                }
                other => {
                    debug!(choice = other, "Unknown main option");
                    Flow::Continue
                }
            };

            if flow == Flow::EndOfInput {
                return Ok(flow);
            }
        }
    }

    fn add_items(&mut self, order_id: OrderId) -> Result<Flow, CliError> {
        loop {
            write!(self.output, "\n{}", self.catalog.render())?;
            writeln!(self.output, "0. Back to main options")?;

            let Some(line) = self.read_line("Item number to add: ")? else {
                return Ok(Flow::EndOfInput);
            };
            let number = match parse_selection(&line) {
                Ok(number) => number,
                Err(e) => {
                    debug!(%e, "Rejected menu input");
                    writeln!(self.output, "Enter a valid number.")?;
                    continue;
                }
            };
            if number == 0 {
                return Ok(Flow::Continue);
            }

            match self.catalog.select(number) {
                Ok(item) => {
                    let item = item.clone();
                    let name = item.name().to_string();
                    let order = self.registry.get_mut(order_id)?;
                    order.add_item(item);
                    let basket = order.render_basket();
                    writeln!(self.output, "\nAdded {} to your basket.", name)?;
                    writeln!(self.output, "\n{}", basket)?;
                }
                Err(e) => {
                    debug!(%e, "Rejected menu selection");
                    writeln!(self.output, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn remove_items(&mut self, order_id: OrderId) -> Result<Flow, CliError> {
        loop {
            let order = self.registry.get(order_id)?;
            let basket = order.render_basket();
            let empty = order.is_empty();
            writeln!(self.output, "\n{}", basket)?;
            if empty {
                return Ok(Flow::Continue);
            }
            writeln!(self.output, "0. Back to main options")?;

            let Some(line) = self.read_line("Item number to remove: ")? else {
                return Ok(Flow::EndOfInput);
            };
            let number = match parse_selection(&line) {
                Ok(number) => number,
                Err(e) => {
                    debug!(%e, "Rejected basket input");
                    writeln!(self.output, "Enter a valid number.")?;
                    continue;
                }
            };
            if number == 0 {
                return Ok(Flow::Continue);
            }

            // Screen numbers start at 1, basket positions at 0
            match self.registry.get_mut(order_id)?.remove_item(number - 1) {
                Ok(removed) => {
                    writeln!(self.output, "\nRemoved {} from your basket.", removed.name())?;
                }
                Err(e) => {
                    debug!(%e, "Rejected basket selection");
                    writeln!(self.output, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    fn pay(&mut self, order_id: OrderId) -> Result<(), CliError> {
        let bill = self.registry.get(order_id)?.generate_bill_with_rate(self.tax_rate);
        info!(
            bill_id = %bill.id(),
            order_id = %bill.order_id(),
            subtotal = %bill.subtotal(),
            total = %bill.calculate_final_amount(),
            issued_at = %bill.issued_at(),
            "Bill issued"
        );
        writeln!(self.output, "\n{}", bill.render())?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line. `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
