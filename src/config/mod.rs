pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "tailor-finder")]
#[command(about = "Search, filter and sort the tailor catalog")]
pub struct CliConfig {
    /// TOML configuration file; command-line values override it
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON catalog file (defaults to the built-in catalog)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Free-text search over name, specialties and location
    #[arg(short, long)]
    pub search: Option<String>,

    /// Price tier filter: economy, medium or premium
    #[arg(short, long)]
    pub price: Option<String>,

    /// Specialty filter (whole specialty, case-insensitive)
    #[arg(long)]
    pub specialty: Option<String>,

    /// Sort key: rating, distance or price
    #[arg(long)]
    pub sort: Option<String>,

    /// Output formats: table, json, csv
    #[arg(short, long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Write results into this directory instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show a single tailor by id
    #[arg(long)]
    pub id: Option<String>,

    /// Print the available filter and sort options
    #[arg(long)]
    pub list_options: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file (if any) and lays the command-line values over it.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(catalog) = &self.catalog {
            config.set_catalog_path(catalog.clone());
        }
        if let Some(search) = &self.search {
            config.query.search = Some(search.clone());
        }
        if let Some(price) = &self.price {
            config.query.price = Some(price.clone());
        }
        if let Some(specialty) = &self.specialty {
            config.query.specialty = Some(specialty.clone());
        }
        if let Some(sort) = &self.sort {
            config.query.sort = Some(sort.clone());
        }
        if !self.format.is_empty() {
            config.output.formats = Some(self.format.clone());
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
    }
}
