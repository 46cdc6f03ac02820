use crate::cli::PrintArgs;
use crate::flow::FlowType;
use crate::report::OutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report defaults. Every field may be overridden on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Category keys or titles, printed in this order.
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub flow: Option<FlowType>,
}

impl ReportConfig {
    /// Apply command-line flags on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, args: &PrintArgs) -> Self {
        if let Some(format) = args.format {
            self.format = Some(format);
        }
        if !args.categories.is_empty() {
            self.categories = args.categories.clone();
        }
        if let Some(flow) = args.flow {
            self.flow = Some(flow);
        }
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

pub fn load_config_file(path: &Path) -> Result<CatalogConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let cfg: CatalogConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    Ok(cfg)
}

/// Load the config named on the command line. Nothing is read when no path
/// is given.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Option<(PathBuf, CatalogConfig)>> {
    let Some(p) = explicit_path else {
        return Ok(None);
    };
    let cfg = load_config_file(p)?;
    Ok(Some((p.to_path_buf(), cfg)))
}
