// ===== pfcrack/src/cipher.rs =====
use crate::error::PfResult;
use crate::key::{Key, GRID_SIZE};

/// Deciphers one digraph under the standard Playfair decryption rules.
///
/// Decryption shifts opposite to encryption: same row moves one column
/// left, same column moves one row up, otherwise the two symbols swap
/// columns (rectangle rule). The row rule is checked first, so a doubled
/// symbol (both cells coincide) falls through it and decrypts to an
/// identical pair rather than erroring.
#[inline(always)]
fn decipher_digraph(a: u8, b: u8, key: &Key) -> PfResult<(u8, u8)> {
    let (r0, c0) = key.position(a)?;
    let (r1, c1) = key.position(b)?;

    if r0 == r1 {
        let p0 = key.letter_at(r0, (c0 + GRID_SIZE - 1) % GRID_SIZE);
        let p1 = key.letter_at(r1, (c1 + GRID_SIZE - 1) % GRID_SIZE);
        Ok((p0, p1))
    } else if c0 == c1 {
        let p0 = key.letter_at((r0 + GRID_SIZE - 1) % GRID_SIZE, c0);
        let p1 = key.letter_at((r1 + GRID_SIZE - 1) % GRID_SIZE, c1);
        Ok((p0, p1))
    } else {
        Ok((key.letter_at(r0, c1), key.letter_at(r1, c0)))
    }
}

/// Deciphers a full ciphertext under `key`. Pure and deterministic.
///
/// The ciphertext is split into adjacent non-overlapping digraphs; an
/// odd trailing symbol is ignored. Output length is always
/// `2 * (ciphertext.len() / 2)`, written into a pre-sized buffer.
pub fn decipher(ciphertext: &[u8], key: &Key) -> PfResult<Vec<u8>> {
    let pair_count = ciphertext.len() / 2;
    let mut plaintext = vec![0u8; pair_count * 2];

    for i in 0..pair_count {
        let (p0, p1) = decipher_digraph(ciphertext[2 * i], ciphertext[2 * i + 1], key)?;
        plaintext[2 * i] = p0;
        plaintext[2 * i + 1] = p1;
    }

    Ok(plaintext)
}
