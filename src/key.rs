// ===== pfcrack/src/key.rs =====
use crate::error::{PfError, PfResult};
use fastrand::Rng;
use std::fmt;

/// The 25-letter Playfair alphabet, J folded into I.
pub const ALPHABET: [u8; 25] = *b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

pub const KEY_LEN: usize = 25;
pub const GRID_SIZE: usize = 5;

const NO_POS: u8 = 255;

/// A Playfair key: a permutation of the 25-letter alphabet, read
/// row-major into a 5x5 grid (`grid[r][c] = letters[5r + c]`).
///
/// A reverse-lookup table (symbol -> grid index) is maintained alongside
/// the letters so `position` is O(1); the lookup runs on every symbol of
/// every digraph of every search iteration.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    letters: [u8; KEY_LEN],
    pos_map: [u8; 256],
}

fn build_pos_map(letters: &[u8; KEY_LEN]) -> [u8; 256] {
    let mut map = [NO_POS; 256];
    for (idx, &b) in letters.iter().enumerate() {
        map[b as usize] = idx as u8;
    }
    map
}

impl Key {
    /// Uniformly random permutation of the alphabet (Fisher-Yates via
    /// the caller-owned RNG, so seeded runs are reproducible).
    pub fn random(rng: &mut Rng) -> Self {
        let mut letters = ALPHABET;
        rng.shuffle(&mut letters);
        let pos_map = build_pos_map(&letters);
        Key { letters, pos_map }
    }

    /// Parses a 25-character key string, rejecting wrong length,
    /// out-of-alphabet symbols and duplicates.
    pub fn from_letters(s: &str) -> PfResult<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != KEY_LEN {
            return Err(PfError::Input(format!(
                "Key must be exactly {} letters, got {}",
                KEY_LEN,
                bytes.len()
            )));
        }

        let mut letters = [0u8; KEY_LEN];
        let mut seen = [false; 256];
        for (i, &b) in bytes.iter().enumerate() {
            let upper = b.to_ascii_uppercase();
            if !ALPHABET.contains(&upper) {
                return Err(PfError::Input(format!(
                    "Symbol '{}' is not in the Playfair alphabet",
                    b as char
                )));
            }
            if seen[upper as usize] {
                return Err(PfError::Input(format!(
                    "Duplicate symbol '{}' in key",
                    upper as char
                )));
            }
            seen[upper as usize] = true;
            letters[i] = upper;
        }

        let pos_map = build_pos_map(&letters);
        Ok(Key { letters, pos_map })
    }

    /// Grid coordinates of a symbol. Every alphabet symbol is present in
    /// every valid key, so a miss here means the permutation invariant
    /// was broken somewhere upstream.
    #[inline(always)]
    pub fn position(&self, symbol: u8) -> PfResult<(usize, usize)> {
        let idx = self.pos_map[symbol as usize];
        if idx == NO_POS {
            return Err(PfError::Invariant(format!(
                "Symbol '{}' missing from key grid",
                symbol as char
            )));
        }
        let idx = idx as usize;
        Ok((idx / GRID_SIZE, idx % GRID_SIZE))
    }

    #[inline(always)]
    pub fn letter_at(&self, row: usize, col: usize) -> u8 {
        self.letters[row * GRID_SIZE + col]
    }

    /// Child key with two uniformly random positions swapped. The two
    /// indices are drawn independently and may coincide; a no-op swap is
    /// a valid mutation. The parent is left untouched.
    pub fn mutated(&self, rng: &mut Rng) -> Self {
        let i = rng.usize(0..KEY_LEN);
        let j = rng.usize(0..KEY_LEN);

        let mut child = self.clone();
        child.letters.swap(i, j);
        child.pos_map[child.letters[i] as usize] = i as u8;
        child.pos_map[child.letters[j] as usize] = j as u8;
        child
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.letters
    }

    /// Grid row slices, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.letters.chunks(GRID_SIZE)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Letters are always ASCII uppercase
        f.write_str(&String::from_utf8_lossy(&self.letters))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self)
    }
}

impl std::str::FromStr for Key {
    type Err = PfError;

    fn from_str(s: &str) -> PfResult<Self> {
        Key::from_letters(s)
    }
}
