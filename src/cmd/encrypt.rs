use clap::Args;
use roughness::error::{MrResult, RoughnessError};
use roughness::vigenere;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Path to the plaintext file
    pub plaintext_file: PathBuf,

    /// Vigenère key (ASCII letters)
    #[arg(
        short,
        long,
        conflicts_with = "random_key_length",
        required_unless_present = "random_key_length"
    )]
    pub key: Option<String>,

    /// Generate a random key of this length instead of passing one
    #[arg(long)]
    pub random_key_length: Option<usize>,

    /// Seed for --random-key-length
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

pub fn run(args: &EncryptArgs) -> MrResult<()> {
    let key = match (&args.key, args.random_key_length) {
        (Some(key), _) => key.clone(),
        (None, Some(len)) => vigenere::random_key(len, args.seed)?,
        (None, None) => {
            return Err(RoughnessError::Config(
                "Either --key or --random-key-length is required".to_string(),
            ))
        }
    };

    info!("🔑 Encrypting with key '{}' (length {})", key, key.len());

    let plaintext = fs::read_to_string(&args.plaintext_file)?;
    print!("{}", vigenere::encrypt(&plaintext, &key)?);
    Ok(())
}
