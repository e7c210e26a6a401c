//! Shared output formatting for context items.

use contextkit_core::reference::classify;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Row for the items table.
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Reference")]
    reference: String,
}

/// Item as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct ItemOutput<'a> {
    pub index: usize,
    pub kind: &'static str,
    pub reference: &'a str,
}

pub fn items_table(items: &[String]) -> String {
    let rows: Vec<ItemRow> = items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRow {
            index,
            kind: classify(item).as_str(),
            reference: item.clone(),
        })
        .collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

pub fn print_items_json(items: &[String]) {
    let output: Vec<ItemOutput<'_>> = items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemOutput {
            index,
            kind: classify(item).as_str(),
            reference: item,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}
