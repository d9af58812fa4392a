// ===== pfcrack/src/config.rs =====
use crate::error::{PfError, PfResult};
use clap::Args;

/// Annealing temperature schedule. Defaults are tuned for ciphertexts of
/// a few hundred symbols; longer texts tolerate a lower starting
/// temperature.
#[derive(Args, Debug, Clone)]
pub struct ScheduleParams {
    /// Starting temperature of the schedule.
    #[arg(long, default_value_t = 200.0)]
    pub temp_start: f64,

    /// Amount subtracted from the temperature after each level.
    #[arg(long, default_value_t = 10.0)]
    pub temp_step: f64,

    /// Mutations evaluated at each temperature level.
    #[arg(long, default_value_t = 10_000)]
    pub inner_iters: usize,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            temp_start: 200.0,
            temp_step: 10.0,
            inner_iters: 10_000,
        }
    }
}

impl ScheduleParams {
    /// Rejects schedules that would never run or never terminate.
    pub fn validate(&self) -> PfResult<()> {
        if !(self.temp_start > 0.0) {
            return Err(PfError::Config(format!(
                "temp_start must be positive, got {}",
                self.temp_start
            )));
        }
        if !(self.temp_step > 0.0) {
            return Err(PfError::Config(format!(
                "temp_step must be positive, got {}",
                self.temp_step
            )));
        }
        if self.inner_iters == 0 {
            return Err(PfError::Config(
                "inner_iters must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
