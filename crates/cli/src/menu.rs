//! Interactive numbered menu over an [`Inventory`].
//!
//! Generic over its reader and writer so the whole loop can be driven from
//! memory in tests.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use inventory_core::errors::CoreError;
use inventory_core::models::product::ProductUpdate;
use inventory_core::services::input;
use inventory_core::Inventory;
use tracing::{debug, error};

const MENU: &str = "\
=== INVENTORY MANAGEMENT ===
1. Add product
2. List inventory
3. Find product
4. Update product
5. Delete product
6. Total inventory value
7. List products by supplier
8. Save and exit";

/// One entry of the menu, parsed from the user's line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Find,
    Update,
    Delete,
    TotalValue,
    BySupplier,
    SaveAndExit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::List,
            "3" => MenuChoice::Find,
            "4" => MenuChoice::Update,
            "5" => MenuChoice::Delete,
            "6" => MenuChoice::TotalValue,
            "7" => MenuChoice::BySupplier,
            "8" => MenuChoice::SaveAndExit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run until the user picks "save and exit" or input ends, then save.
    ///
    /// Errors from individual operations are shown and the loop goes on;
    /// only I/O on the terminal itself or the final save is returned.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Select an option: ")? else {
                debug!("input closed, saving before exit");
                return self.save_and_exit();
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu choice");
            if let Flow::Exit = self.dispatch(choice)? {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add()?,
            MenuChoice::List => self.list()?,
            MenuChoice::Find => self.find()?,
            MenuChoice::Update => self.update()?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::TotalValue => self.total_value()?,
            MenuChoice::BySupplier => self.by_supplier()?,
            MenuChoice::SaveAndExit => {
                self.save_and_exit()?;
                return Ok(Flow::Exit);
            }
            MenuChoice::Invalid(option) => {
                writeln!(self.output, "---> Invalid option '{option}'. Try again.")?;
            }
        }
        Ok(Flow::Continue)
    }

    // ── Actions ─────────────────────────────────────────────────────

    fn add(&mut self) -> io::Result<()> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(price) = self.prompt("Price: ")? else {
            return Ok(());
        };
        let Some(stock) = self.prompt("Stock: ")? else {
            return Ok(());
        };
        let known: Vec<String> = self
            .inventory
            .suppliers()
            .iter()
            .map(|s| format!("{} ({})", s.code, s.name))
            .collect();
        writeln!(self.output, "Known suppliers: {}", known.join(", "))?;
        let Some(supplier_code) = self.prompt("Supplier code: ")? else {
            return Ok(());
        };

        let result = input::parse_price(&price).and_then(|price| {
            let stock = input::parse_stock(&stock)?;
            self.inventory
                .add_new_product(code.trim(), name.trim(), price, stock, supplier_code.trim())
                .map(|p| p.to_string())
        });
        match result {
            Ok(rendered) => writeln!(self.output, "---> Product added: {rendered}"),
            Err(e) => self.report(&e),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let lines = self.inventory.list_all();
        if lines.is_empty() {
            return writeln!(self.output, "---> The inventory is empty.");
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn find(&mut self) -> io::Result<()> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(());
        };
        match self.inventory.find(code.trim()) {
            Some(product) => writeln!(self.output, "\n{product}"),
            None => writeln!(self.output, "---> Product not found: {}", code.trim()),
        }
    }

    fn update(&mut self) -> io::Result<()> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(());
        };
        let code = code.trim().to_string();
        if self.inventory.find(&code).is_none() {
            return self.report(&CoreError::ProductNotFound(code));
        }

        writeln!(self.output, "Leave a field blank to keep its current value.")?;
        let Some(name) = self.prompt("New name: ")? else {
            return Ok(());
        };
        let Some(price) = self.prompt("New price: ")? else {
            return Ok(());
        };
        let Some(stock) = self.prompt("New stock: ")? else {
            return Ok(());
        };

        let result = build_update(&name, &price, &stock)
            .and_then(|update| self.inventory.update(&code, update).map(|p| p.to_string()));
        match result {
            Ok(rendered) => writeln!(self.output, "---> Product updated: {rendered}"),
            Err(e) => self.report(&e),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(());
        };
        let removed = self.inventory.remove(code.trim());
        if removed == 0 {
            writeln!(self.output, "---> Product not found: {}", code.trim())?;
            return Ok(());
        }
        writeln!(self.output, "---> Removed {removed} product(s). Updated list:")?;
        self.list()
    }

    fn total_value(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Total inventory value: {:.2} €",
            self.inventory.total_value()
        )
    }

    fn by_supplier(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Supplier name: ")? else {
            return Ok(());
        };
        let lines: Result<Vec<String>, CoreError> = self
            .inventory
            .list_by_supplier(name.trim())
            .map(|products| products.iter().map(|p| p.to_string()).collect());
        match lines {
            Ok(lines) => {
                for line in lines {
                    writeln!(self.output, "{line}")?;
                }
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn save_and_exit(&mut self) -> anyhow::Result<()> {
        if let Err(e) = self.inventory.save_default() {
            error!(error = %e, "failed to save inventory");
            writeln!(self.output, "---> Could not save the inventory: {e}")?;
            return Err(e).with_context(|| {
                format!(
                    "saving inventory to {}",
                    self.inventory.file_name().display()
                )
            });
        }
        writeln!(self.output, "---> Inventory saved. Exiting...")?;
        Ok(())
    }

    // ── Terminal helpers ────────────────────────────────────────────

    /// Show `label` and read one line. `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, err: &CoreError) -> io::Result<()> {
        writeln!(self.output, "---> {err}")
    }
}

/// Turn the three optional update answers into a [`ProductUpdate`].
fn build_update(name: &str, price: &str, stock: &str) -> Result<ProductUpdate, CoreError> {
    Ok(ProductUpdate {
        name: input::optional_text(name),
        price: input::parse_optional_price(price)?,
        stock: input::parse_optional_stock(stock)?,
    })
}
