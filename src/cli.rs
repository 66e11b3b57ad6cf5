use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::catalog::Resource;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "datadeck",
    about = "Terminal browser for paginated REST collections",
    version
)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the upstream API base URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Collection to open at startup.
    #[arg(long, value_enum)]
    pub resource: Option<ResourceArg>,

    /// Write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResourceArg {
    Users,
    Products,
}

impl From<ResourceArg> for Resource {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Users => Resource::Users,
            ResourceArg::Products => Resource::Products,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(resource) = self.resource {
            config.ui.start_resource = Resource::from(resource).item_key().to_string();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
