use super::common::{LogLevel, init_logging};
use camino::Utf8PathBuf;
use clap::Parser;
use componentry::Result;
use componentry::extract::{ExtractorConfig, run};

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Root directory containing component sources
    #[arg(long, default_value = "src/components", value_name = "PATH")]
    pub source: Utf8PathBuf,

    /// Directory where component templates and metadata are written
    #[arg(long, default_value = "templates/components", value_name = "PATH")]
    pub output: Utf8PathBuf,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub async fn process_extract(args: &ExtractArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = ExtractorConfig {
        source_root: args.source.clone(),
        output_root: args.output.clone(),
    };

    let report = run(&config).await?;
    println!("Extracted {} components to {}", report.extracted, args.output);
    Ok(())
}
