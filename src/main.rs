// ===== pfcrack/src/main.rs =====
use clap::{Parser, Subcommand};
use pfcrack::scorer::loader::{load_ciphertext_file, load_quadgram_file};
use pfcrack::scorer::QuadgramModel;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/quadgrams.txt")]
    quadgrams: String,

    #[arg(global = true, short, long, default_value = "data/ciphertext.txt")]
    ciphertext: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recover the key by simulated annealing
    Search(cmd::search::SearchArgs),
    /// Decipher under an explicit 25-letter key and report its fitness
    Decrypt(cmd::decrypt::DecryptArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let counts = load_quadgram_file(&cli.quadgrams).unwrap_or_else(|e| {
        error!("Failed to load quadgram table: {}", e);
        process::exit(1);
    });

    let model = match QuadgramModel::build(&counts) {
        Ok(m) => Arc::new(m),
        Err(e) => {
            error!("Failed to build language model: {}", e);
            process::exit(1);
        }
    };
    info!("Language model ready ({} quadgrams)", model.len());

    let ciphertext = load_ciphertext_file(&cli.ciphertext).unwrap_or_else(|e| {
        error!("Failed to load ciphertext: {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args, model, ciphertext),
        Commands::Decrypt(args) => cmd::decrypt::run(args, model, ciphertext),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
