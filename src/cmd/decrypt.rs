// ===== pfcrack/src/cmd/decrypt.rs =====
use crate::reports;
use clap::Args;
use pfcrack::cipher::decipher;
use pfcrack::error::PfResult;
use pfcrack::key::Key;
use pfcrack::optimizer::SearchOutcome;
use pfcrack::scorer::QuadgramModel;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// 25-letter key grid, row-major
    #[arg(short, long)]
    pub key: String,

    /// Emit the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: DecryptArgs, model: Arc<QuadgramModel>, ciphertext: Vec<u8>) -> PfResult<()> {
    let key = Key::from_letters(&args.key)?;
    let plaintext = decipher(&ciphertext, &key)?;
    let fitness = model.score(&plaintext);

    let outcome = SearchOutcome {
        key,
        plaintext: String::from_utf8_lossy(&plaintext).into_owned(),
        fitness,
    };

    if args.json {
        println!("{}", reports::to_json(&outcome)?);
    } else {
        reports::print_outcome("SUPPLIED KEY", &outcome);
    }
    Ok(())
}
