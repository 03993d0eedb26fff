//! Bill-splitting session state.
//!
//! Items, participants, and fees for one shared bill, owned explicitly and
//! passed into the splitting engine rather than reached for through any
//! ambient store. A session can be persisted to a single JSON file between
//! CLI invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{ReconstructedRow, ReconstructedTable};
use crate::split::{self, generate_colors, parse_price};

/// One purchasable line item on the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,

    /// Item price
    pub price: f64,

    /// Names of the participants sharing this item
    #[serde(default)]
    pub assignments: Vec<String>,
}

impl Item {
    /// Create an unassigned item.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            assignments: Vec::new(),
        }
    }
}

/// A bill-level fee (tax, tip, delivery) or discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee name, unique within the session
    pub name: String,

    /// Fee amount; negative values represent discounts
    pub price: f64,

    /// Divide equally across all participants instead of proportionally
    /// to item spend
    pub even_split: bool,
}

impl Fee {
    /// Create a new fee.
    pub fn new(name: impl Into<String>, price: f64, even_split: bool) -> Self {
        Self {
            name: name.into(),
            price,
            even_split,
        }
    }
}

/// Outcome of importing reconstructed rows as items.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Ids of the items created
    pub imported: Vec<String>,

    /// Rows whose value did not parse as a price
    pub skipped: Vec<ReconstructedRow>,
}

/// State for one shared bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Items keyed by generated id
    #[serde(default)]
    pub items: BTreeMap<String, Item>,

    /// Participant names, in the order they were added
    #[serde(default)]
    pub people: Vec<String>,

    /// Display color per participant
    #[serde(default)]
    pub colors: HashMap<String, String>,

    /// Fees, applied in insertion order
    #[serde(default)]
    pub fees: Vec<Fee>,

    /// Last computed per-person totals
    #[serde(default)]
    pub totals: BTreeMap<String, f64>,

    /// Tables accumulated from receipt scans
    #[serde(default)]
    pub tables: Vec<ReconstructedTable>,

    /// When this session was created
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            people: Vec::new(),
            colors: HashMap::new(),
            fees: Vec::new(),
            totals: BTreeMap::new(),
            tables: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Load a session from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Save the session to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Add an item and return its generated id.
    pub fn add_item(&mut self, name: impl Into<String>, price: f64) -> String {
        let id = Uuid::new_v4().to_string();
        self.items.insert(id.clone(), Item::new(name, price));
        id
    }

    /// Replace an item's name and price.
    pub fn update_item(&mut self, id: &str, name: impl Into<String>, price: f64) -> Result<()> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))?;
        item.name = name.into();
        item.price = price;
        Ok(())
    }

    /// Remove an item.
    pub fn remove_item(&mut self, id: &str) -> Result<Item> {
        self.items
            .remove(id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))
    }

    /// Add a participant and refresh the color assignments.
    pub fn add_person(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.people.contains(&name) {
            return Err(Error::DuplicatePerson(name));
        }
        self.people.push(name);
        self.colors = generate_colors(&self.people);
        Ok(())
    }

    /// Assign or unassign a participant to an item.
    pub fn set_assignment(&mut self, item_id: &str, person: &str, assigned: bool) -> Result<()> {
        if !self.people.iter().any(|p| p == person) {
            return Err(Error::UnknownPerson(person.to_string()));
        }
        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| Error::UnknownItem(item_id.to_string()))?;

        if assigned {
            if !item.assignments.iter().any(|p| p == person) {
                item.assignments.push(person.to_string());
            }
        } else {
            item.assignments.retain(|p| p != person);
        }
        Ok(())
    }

    /// Add a fee, replacing any existing fee with the same name in place.
    pub fn add_fee(&mut self, name: impl Into<String>, price: f64, even_split: bool) {
        let name = name.into();
        match self.fees.iter_mut().find(|f| f.name == name) {
            Some(fee) => {
                fee.price = price;
                fee.even_split = even_split;
            }
            None => self.fees.push(Fee::new(name, price, even_split)),
        }
    }

    /// Rename and update a fee. The fee moves to the end of the pass order.
    pub fn update_fee(
        &mut self,
        old_name: &str,
        new_name: impl Into<String>,
        price: f64,
        even_split: bool,
    ) -> Result<()> {
        let index = self
            .fees
            .iter()
            .position(|f| f.name == old_name)
            .ok_or_else(|| Error::UnknownFee(old_name.to_string()))?;
        self.fees.remove(index);
        self.fees.push(Fee::new(new_name, price, even_split));
        Ok(())
    }

    /// Remove a fee by name.
    pub fn remove_fee(&mut self, name: &str) -> Result<Fee> {
        let index = self
            .fees
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| Error::UnknownFee(name.to_string()))?;
        Ok(self.fees.remove(index))
    }

    /// Append reconstructed tables from one receipt scan.
    pub fn add_tables(&mut self, tables: Vec<ReconstructedTable>) {
        self.tables.extend(tables);
    }

    /// Import a reconstructed table's rows as items.
    ///
    /// Rows whose value does not parse as a price are skipped and reported,
    /// not treated as a fault. OCR output is noisy and the caller decides
    /// what to do with the remainder.
    pub fn import_table(&mut self, table: &ReconstructedTable) -> ImportReport {
        let mut report = ImportReport::default();
        for row in &table.rows {
            match parse_price(&row.value) {
                Some(price) => {
                    let id = self.add_item(row.key.clone(), price);
                    report.imported.push(id);
                }
                None => {
                    log::debug!("import: no price in row {:?}", row);
                    report.skipped.push(row.clone());
                }
            }
        }
        report
    }

    /// Per-person item subtotals for the current state.
    pub fn subtotals(&self) -> BTreeMap<String, f64> {
        split::compute_subtotals(&self.items, &self.people)
    }

    /// Run the splitting engine and cache the per-person totals.
    pub fn calculate(&mut self) -> &BTreeMap<String, f64> {
        let summary = split::compute_totals(&self.items, &self.people, &self.fees);
        self.totals = summary.totals;
        &self.totals
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
