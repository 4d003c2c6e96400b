//! Server configuration: command-line flags with environment fallbacks

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use compliance_engine::ValidationEngine;
use shared_types::RuleCatalog;
use tracing::{info, warn};

/// Command-line arguments for the compliance server
#[derive(Parser, Debug)]
#[command(name = "compliance-server")]
#[command(about = "SOP compliance validation server")]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// JSON rule catalog used to reclassify missing-section issues
    #[arg(long, env = "RULES_PATH")]
    pub rules: Option<PathBuf>,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "RATE_LIMIT", default_value = "10")]
    pub rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Loads the rule catalog, or an empty one when no path is configured
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<RuleCatalog> {
    let Some(path) = path else {
        info!("No rule catalog configured; using built-in classifications");
        return Ok(RuleCatalog::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule catalog {}", path.display()))?;
    let catalog = RuleCatalog::from_json(&json)
        .with_context(|| format!("Failed to parse rule catalog {}", path.display()))?;

    let known = ValidationEngine::new().catalog_rule_names();
    for rule in catalog.rules() {
        if !known.contains(&rule.name.as_str()) {
            warn!("Rule catalog entry '{}' matches no section check", rule.name);
        }
    }

    info!("Loaded {} rules from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["compliance-server"]);
        assert_eq!(args.rate_limit, 10);
        assert!(args.rules.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_no_catalog_path_gives_empty_catalog() {
        assert!(load_catalog(None).unwrap().is_empty());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let err = load_catalog(Some(Path::new("/nonexistent/rules.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read rule catalog"));
    }
}
