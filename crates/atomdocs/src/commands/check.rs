//! `atomdocs check` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use atomdocs_config::{CliSettings, Config};
use atomdocs_site::{MissingPage, Site, SiteConfig};
use atomdocs_storage::FsStorage;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover atomdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the source directory is
    /// unreadable, or any navigation entry has no source file.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source_dir = config.docs_resolved.source_dir.clone();

        if !std::fs::metadata(&source_dir)?.is_dir() {
            return Err(CliError::Validation(format!(
                "Source path is not a directory: {}",
                source_dir.display()
            )));
        }

        let site = Site::new(
            Arc::new(FsStorage::new(source_dir.clone())),
            Arc::new(config.navigation),
            SiteConfig {
                default_version: config.docs_resolved.default_version,
            },
        );

        let missing = site.check();
        tracing::debug!(
            source_dir = %source_dir.display(),
            missing = missing.len(),
            "Checked navigation"
        );
        report(output, &site, &missing);

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} navigation {} without a source file",
                missing.len(),
                if missing.len() == 1 { "entry" } else { "entries" }
            )))
        }
    }
}

/// Print the outcome of a check.
fn report(output: &Output, site: &Site, missing: &[MissingPage]) {
    if site.navigation().is_empty() {
        output.warning("Navigation is empty: nothing to check");
        return;
    }

    if missing.is_empty() {
        output.success(&format!(
            "All pages present ({})",
            site.versions().join(", ")
        ));
        return;
    }

    for page in missing {
        output.error(&format!("Missing {}/{}", page.version, page.page_key));
        output.detail(&page.source_path.display().to_string());
    }
}
