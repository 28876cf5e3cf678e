//! Command implementations

use super::Args;
use crate::config::{cli::CliConfig, ConfigBuilder, ConfigSource, FileConfig};
use crate::core::CoverageWalker;
use crate::error::Result;
use crate::models::report::CoverageReport;
use crate::output::{create_formatter, create_writer, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Synchronize banners from the coverage report
    Sync(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Sync(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Sync(args) => {
                // Convert Args to CliConfig
                let cli_config = CliConfig::from_args(args);

                // Load settings from CLI config
                let partial_settings = cli_config.load()?;

                // Build final settings
                let config_builder = ConfigBuilder::new();

                // Add config file if specified
                let config_builder = if let Some(config_path) = cli_config.config_path() {
                    config_builder.add_config_file(config_path)?
                } else {
                    // Try to load default config file
                    config_builder.try_add_default_config_file()
                };

                // Merge CLI settings (highest priority)
                let settings = config_builder.merge(partial_settings).build()?;

                // Display startup information
                if !settings.quiet {
                    println!(
                        "bannersync v{} - coverage banner synchronizer",
                        env!("CARGO_PKG_VERSION")
                    );
                    println!("Coverage report: {}", settings.report_path.display());
                    println!("Output format: {}", settings.output_format);

                    if settings.verbose {
                        println!("Settings: {:#?}", settings);
                    }
                }

                // Load the coverage report
                let report = CoverageReport::from_file(&settings.report_path)?;

                if settings.verbose {
                    println!(
                        "Report contains {} file rows across {} modules",
                        report.file_count(),
                        report.modules.len()
                    );
                }

                // Run the batch
                let walker = CoverageWalker::new(settings.clone())?;
                let results = if settings.show_progress && !settings.quiet {
                    let reporter = ProgressReporter::new(settings.quiet, settings.verbose);
                    let results = walker.sync_with_progress(&report, |current, total, message| {
                        reporter.update(current, total, message);
                    })?;
                    reporter.finish("Banner update complete");
                    results
                } else {
                    walker.sync(&report)?
                };

                // Format and write the summary
                let formatter = create_formatter(
                    &settings.output_format,
                    settings.use_colors,
                    settings.verbose,
                );
                let output = formatter.format(&results)?;

                let writer = create_writer(&settings);
                writer.write(&output)?;

                Ok(())
            }
            Command::Init => {
                let config = FileConfig::new();

                if config.create_default()? {
                    println!("Created default configuration at {}", config.path().display());
                } else {
                    println!(
                        "Configuration file already exists at: {}",
                        config.path().display()
                    );
                    println!("To overwrite it, delete the file first and run this command again.");
                }
                Ok(())
            }
        }
    }
}
