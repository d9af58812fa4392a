// ===== pfcrack/src/cmd/search.rs =====
use crate::reports;
use clap::Args;
use pfcrack::config::ScheduleParams;
use pfcrack::error::PfResult;
use pfcrack::key::Key;
use pfcrack::optimizer::{Annealer, ProgressSink};
use pfcrack::scorer::QuadgramModel;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: ScheduleParams,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Emit the final result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Console observer: new-best transitions at info level, everything
/// else at debug. At high temperature nearly half of all mutations are
/// accepted, so unconditional printing would drown the terminal.
struct ConsoleSink {
    best_seen: f64,
}

impl ConsoleSink {
    fn new() -> Self {
        Self {
            best_seen: f64::NEG_INFINITY,
        }
    }
}

impl ProgressSink for ConsoleSink {
    fn on_accept(&mut self, fitness: f64, remaining: usize, key: &Key, plaintext: &str) {
        if fitness > self.best_seen {
            self.best_seen = fitness;
            info!(
                "best score so far: {:.2} ({} iterations left in level)",
                fitness, remaining
            );
            info!("key: {}", key);
            info!("plaintext: {}", truncate(plaintext, 80));
        } else {
            debug!("accepted downhill move: {:.2}", fitness);
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() > max {
        &s[..max]
    } else {
        s
    }
}

pub fn run(args: SearchArgs, model: Arc<QuadgramModel>, ciphertext: Vec<u8>) -> PfResult<()> {
    info!(
        "Starting annealing search: T0={}, step={}, {} iterations/level",
        args.params.temp_start, args.params.temp_step, args.params.inner_iters
    );

    let mut annealer = Annealer::new(model, ciphertext, args.params, args.seed)?;
    let mut sink = ConsoleSink::new();

    let start = Instant::now();
    let outcome = annealer.run(&mut sink)?;
    info!("Search finished in {:.1}s", start.elapsed().as_secs_f32());

    if args.json {
        println!("{}", reports::to_json(&outcome)?);
    } else {
        reports::print_outcome("RECOVERED", &outcome);
    }
    Ok(())
}
