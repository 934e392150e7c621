//! CSV loader for bulk stock intake (simple format)

use std::path::Path;

use wiq_domain::model::StockReceipt;
use wiq_types::{Error, Result};

/// Load stock receipts from a simple CSV file
///
/// Expected columns (header optional):
/// item_id, quantity, height, [bin], [bin_capacity], [notes]
pub fn load_receipts_from_csv(path: &Path) -> Result<Vec<StockReceipt>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Import(format!("Failed to read CSV file: {}", e)))?;
    let mut receipts = Vec::new();
    let mut lines = content.lines();
    let first_line = lines
        .next()
        .ok_or_else(|| Error::Import("CSV file is empty".to_string()))?;
    let headers: Vec<&str> = first_line.split(',').map(|s| s.trim()).collect();
    let is_header = headers.iter().any(|h| {
        let h = h.to_lowercase();
        h.contains("item") || h.contains("quantity") || h.contains("qty") || h.contains("height")
    });
    if !is_header {
        if let Some(receipt) = parse_csv_line(first_line) {
            receipts.push(receipt);
        }
    }
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(receipt) = parse_csv_line(line) {
            receipts.push(receipt);
        }
    }
    Ok(receipts)
}

fn parse_csv_line(line: &str) -> Option<StockReceipt> {
    let fields: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
    if fields.len() < 3 {
        return None;
    }
    let item_id = fields.first()?.to_string();
    if item_id.is_empty() {
        return None;
    }
    let quantity: u32 = fields.get(1)?.parse().ok()?;
    let height: u32 = fields.get(2)?.parse().ok()?;

    let mut receipt = StockReceipt::new(item_id, quantity, height);
    if let Some(bin) = fields.get(3).filter(|s| !s.is_empty()) {
        receipt = receipt.with_location(*bin);
    }
    if let Some(capacity) = fields.get(4).and_then(|s| s.parse::<u32>().ok()) {
        receipt = receipt.with_bin_capacity(capacity);
    }
    if let Some(notes) = fields.get(5).filter(|s| !s.is_empty()) {
        receipt = receipt.with_notes(*notes);
    }
    Some(receipt)
}
