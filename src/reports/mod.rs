// ===== pfcrack/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use pfcrack::error::PfResult;
use pfcrack::key::Key;
use pfcrack::optimizer::SearchOutcome;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub key: String,
    pub fitness: f64,
    pub plaintext: String,
}

impl From<&SearchOutcome> for SearchReport {
    fn from(outcome: &SearchOutcome) -> Self {
        Self {
            key: outcome.key.to_string(),
            fitness: outcome.fitness,
            plaintext: outcome.plaintext.clone(),
        }
    }
}

pub fn to_json(outcome: &SearchOutcome) -> PfResult<String> {
    Ok(serde_json::to_string_pretty(&SearchReport::from(outcome))?)
}

pub fn print_key_grid(title: &str, key: &Key) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled);

    for row in key.rows() {
        table.add_row(
            row.iter()
                .map(|&b| Cell::new((b as char).to_string()).set_alignment(CellAlignment::Center)),
        );
    }

    println!("\n=== {} ===", title);
    println!("{table}");
}

pub fn print_outcome(title: &str, outcome: &SearchOutcome) {
    print_key_grid(title, &outcome.key);
    println!("Key: {}", outcome.key);
    println!("Score: {:.4}", outcome.fitness);
    println!("Plaintext: {}", outcome.plaintext);
}
