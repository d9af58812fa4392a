// ===== pfcrack/src/optimizer/mod.rs =====
use crate::cipher::decipher;
use crate::config::ScheduleParams;
use crate::error::PfResult;
use crate::key::Key;
use crate::scorer::QuadgramModel;
use std::sync::Arc;

/// Observer for accepted search transitions. The annealer calls this on
/// every accepted key (including accepted downhill moves); rejections
/// are silent.
pub trait ProgressSink {
    fn on_accept(&mut self, fitness: f64, iterations_remaining: usize, key: &Key, plaintext: &str);
}

/// Sink for callers that only want the final result.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_accept(&mut self, _fitness: f64, _remaining: usize, _key: &Key, _plaintext: &str) {}
}

/// Metropolis acceptance criterion. A strict improvement is accepted
/// unconditionally without consulting `draw`; a worsening (or equal)
/// move is accepted iff a fresh uniform draw in [0,1) lands below
/// exp(delta / temperature).
#[inline(always)]
pub fn metropolis_accept(delta: f64, temperature: f64, draw: impl FnOnce() -> f64) -> bool {
    if delta > 0.0 {
        return true;
    }
    draw() < (delta / temperature).exp()
}

pub struct SearchOutcome {
    pub key: Key,
    pub plaintext: String,
    pub fitness: f64,
}

/// Simulated-annealing search for the Playfair key.
///
/// Owns its RNG (seedable for reproducible runs) and the current search
/// state; the quadgram model and ciphertext are read-only once the
/// search starts.
#[derive(Debug)]
pub struct Annealer {
    model: Arc<QuadgramModel>,
    ciphertext: Vec<u8>,
    params: ScheduleParams,
    rng: fastrand::Rng,
}

impl Annealer {
    pub fn new(
        model: Arc<QuadgramModel>,
        ciphertext: Vec<u8>,
        params: ScheduleParams,
        seed: Option<u64>,
    ) -> PfResult<Self> {
        params.validate()?;

        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        Ok(Annealer {
            model,
            ciphertext,
            params,
            rng,
        })
    }

    /// Runs the full temperature schedule and returns the best-fitness
    /// candidate seen. Errors from decipherment (broken key invariant)
    /// abort the search immediately; there is no retry.
    pub fn run<S: ProgressSink>(&mut self, sink: &mut S) -> PfResult<SearchOutcome> {
        let mut current_key = Key::random(&mut self.rng);
        let mut current_text = decipher(&self.ciphertext, &current_key)?;
        let mut current_fit = self.model.score(&current_text);

        let mut best_key = current_key.clone();
        let mut best_text = current_text.clone();
        let mut best_fit = current_fit;

        sink.on_accept(
            current_fit,
            self.params.inner_iters,
            &current_key,
            &String::from_utf8_lossy(&current_text),
        );

        let mut temp = self.params.temp_start;
        while temp > 0.0 {
            let mut remaining = self.params.inner_iters;
            while remaining > 0 {
                let cand_key = current_key.mutated(&mut self.rng);
                let cand_text = decipher(&self.ciphertext, &cand_key)?;
                let cand_fit = self.model.score(&cand_text);
                let delta = cand_fit - current_fit;

                if metropolis_accept(delta, temp, || self.rng.f64()) {
                    current_key = cand_key;
                    current_text = cand_text;
                    current_fit = cand_fit;

                    if current_fit > best_fit {
                        best_key = current_key.clone();
                        best_text = current_text.clone();
                        best_fit = current_fit;
                    }

                    sink.on_accept(
                        current_fit,
                        remaining,
                        &current_key,
                        &String::from_utf8_lossy(&current_text),
                    );
                }

                remaining -= 1;
            }
            temp -= self.params.temp_step;
        }

        Ok(SearchOutcome {
            key: best_key,
            plaintext: String::from_utf8_lossy(&best_text).into_owned(),
            fitness: best_fit,
        })
    }
}
