// ===== pfcrack/src/scorer/mod.rs =====
pub mod loader;

use crate::error::{PfError, PfResult};
use std::collections::HashMap;

pub const QUAD_LEN: usize = 4;

/// Quadgram language model: log10 probabilities for known 4-symbol
/// windows plus a floor value for everything else.
///
/// Built once at startup, immutable afterwards. Plain data, so it is
/// safe to share read-only across threads should parallel restarts ever
/// be added.
#[derive(Debug)]
pub struct QuadgramModel {
    log_probs: HashMap<[u8; QUAD_LEN], f64>,
    floor: f64,
}

impl QuadgramModel {
    /// Normalizes raw frequency counts into log10 probabilities.
    ///
    /// The floor is `min(log_probs) - 1`, strictly worse than every
    /// known quadgram. An empty table leaves the floor undefined and a
    /// zero count has no log probability, so both are rejected.
    pub fn build(counts: &HashMap<String, u64>) -> PfResult<Self> {
        if counts.is_empty() {
            return Err(PfError::Input(
                "Quadgram table is empty; floor value undefined".to_string(),
            ));
        }

        let total: u64 = counts.values().sum();
        let mut log_probs = HashMap::with_capacity(counts.len());
        let mut min_log = f64::INFINITY;

        for (quad, &count) in counts {
            if count == 0 {
                return Err(PfError::Input(format!(
                    "Non-positive count for quadgram '{}'",
                    quad
                )));
            }
            let bytes: [u8; QUAD_LEN] = quad.as_bytes().try_into().map_err(|_| {
                PfError::Input(format!(
                    "Quadgram '{}' is not exactly {} symbols",
                    quad, QUAD_LEN
                ))
            })?;

            let lp = ((count as f64) / (total as f64)).log10();
            if lp < min_log {
                min_log = lp;
            }
            log_probs.insert(bytes, lp);
        }

        Ok(QuadgramModel {
            log_probs,
            floor: min_log - 1.0,
        })
    }

    /// Sums log probabilities over every 4-symbol window of `text`
    /// (`len - 3` windows). Unknown windows contribute the floor.
    /// Higher (less negative) is better. Texts shorter than one window
    /// score a neutral 0.0.
    #[inline]
    pub fn score(&self, text: &[u8]) -> f64 {
        if text.len() < QUAD_LEN {
            return 0.0;
        }

        let mut fitness = 0.0;
        for window in text.windows(QUAD_LEN) {
            // windows() yields exactly QUAD_LEN bytes
            let quad: [u8; QUAD_LEN] = window.try_into().unwrap_or([0; QUAD_LEN]);
            fitness += self.log_probs.get(&quad).copied().unwrap_or(self.floor);
        }
        fitness
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn len(&self) -> usize {
        self.log_probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_probs.is_empty()
    }
}
