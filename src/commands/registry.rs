use super::common::{LogLevel, init_logging};
use camino::Utf8PathBuf;
use clap::Parser;
use componentry::Result;
use componentry::metadata::{VERSION_ENV_VAR, VERSION_FALLBACK};
use componentry::registry::{RegistryConfig, generate};

#[derive(Parser, Debug)]
pub struct RegistryArgs {
    /// Extractor output directory to scan for metadata documents
    #[arg(long, default_value = "templates/components", value_name = "PATH")]
    pub templates: Utf8PathBuf,

    /// Path of the registry file to write
    #[arg(long, default_value = "registry.json", value_name = "PATH")]
    pub output: Utf8PathBuf,

    /// Version string recorded in the registry
    #[arg(long, value_name = "VERSION", env = VERSION_ENV_VAR, default_value = VERSION_FALLBACK)]
    pub registry_version: String,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub async fn process_registry(args: &RegistryArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = RegistryConfig {
        templates_root: args.templates.clone(),
        output_path: args.output.clone(),
        version: args.registry_version.clone(),
    };

    let registry = generate(&config).await?;
    println!("Wrote registry with {} components to {}", registry.components.len(), args.output);
    Ok(())
}
