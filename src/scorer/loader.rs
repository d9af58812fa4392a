// ===== pfcrack/src/scorer/loader.rs =====
use crate::error::{PfError, PfResult};
use crate::key::ALPHABET;
use crate::scorer::QUAD_LEN;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Parses a quadgram frequency table: one record per line, formatted
/// `"<4-symbol-key> <integer-count>"`, space-separated.
///
/// Malformed records (field count other than two, wrong-length quadgram,
/// non-integer count) are rejected rather than skipped; a partially
/// loaded table would silently corrupt the search.
pub fn load_quadgrams<R: Read>(reader: R) -> PfResult<HashMap<String, u64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut counts = HashMap::new();

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() != 2 {
            return Err(PfError::Input(format!(
                "Quadgram record {} has {} fields, expected 2",
                row_idx + 1,
                rec.len()
            )));
        }

        let quad = rec[0].trim().to_ascii_uppercase();
        if quad.len() != QUAD_LEN {
            return Err(PfError::Input(format!(
                "Quadgram '{}' on record {} is not {} symbols",
                quad,
                row_idx + 1,
                QUAD_LEN
            )));
        }

        let count: u64 = rec[1].trim().parse().map_err(|_| {
            PfError::Input(format!(
                "Non-integer count '{}' on record {}",
                &rec[1],
                row_idx + 1
            ))
        })?;

        counts.insert(quad, count);
    }

    Ok(counts)
}

pub fn load_quadgram_file<P: AsRef<Path>>(path: P) -> PfResult<HashMap<String, u64>> {
    info!("Loading quadgram table: {}", path.as_ref().display());
    let counts = load_quadgrams(File::open(path)?)?;
    debug!("Loaded {} quadgrams", counts.len());
    Ok(counts)
}

/// Reads a ciphertext and normalizes it to the cipher alphabet:
/// uppercased, J folded into I, whitespace dropped. Any other symbol is
/// rejected here so the core never sees out-of-alphabet input.
pub fn load_ciphertext<R: Read>(mut reader: R) -> PfResult<Vec<u8>> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;

    let mut symbols = Vec::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_whitespace() {
            continue;
        }
        let b = match c.to_ascii_uppercase() {
            'J' => b'I',
            u if u.is_ascii_uppercase() => u as u8,
            _ => {
                return Err(PfError::Input(format!(
                    "Ciphertext symbol '{}' is outside the cipher alphabet",
                    c
                )));
            }
        };
        debug_assert!(ALPHABET.contains(&b));
        symbols.push(b);
    }

    Ok(symbols)
}

pub fn load_ciphertext_file<P: AsRef<Path>>(path: P) -> PfResult<Vec<u8>> {
    info!("Loading ciphertext: {}", path.as_ref().display());
    let symbols = load_ciphertext(File::open(path)?)?;
    debug!(
        "Loaded {} symbols ({} digraphs)",
        symbols.len(),
        symbols.len() / 2
    );
    Ok(symbols)
}
