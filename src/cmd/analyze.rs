use crate::reports::{self, OutputFormat};
use clap::{ArgMatches, Args};
use roughness::analysis::TracingSink;
use roughness::api;
use roughness::config::AnalysisConfig;
use roughness::error::MrResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the text file containing the ciphertext
    pub ciphertext_file: PathBuf,

    /// Possible key lengths, separated by commas (e.g. "2,3,4,5")
    pub key_lengths: String,

    /// Output format: plain, table, json or csv
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,

    /// JSON file with analysis settings; explicit flags override it
    #[arg(long = "config")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run(args: &AnalyzeArgs, matches: Option<&ArgMatches>) -> MrResult<()> {
    let config = match &args.config_file {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path.display());
            let mut file_config = AnalysisConfig::load_from_file(path)?;
            if let Some(m) = matches {
                file_config.merge_from_cli(&args.config, m);
            }
            file_config
        }
        None => args.config.clone(),
    };

    let report = api::analyze_file(
        &args.ciphertext_file,
        &args.key_lengths,
        &config,
        &mut TracingSink,
    )?;

    println!("{}", reports::render(&report, args.format)?);
    Ok(())
}
