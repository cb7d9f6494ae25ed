pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{catalog::Catalog, engine::FinderEngine, pipeline::FinderPipeline};
pub use crate::domain::model::{PriceTier, SearchCriteria, SearchResult, SortKey, TailorRecord};
pub use crate::utils::error::{FinderError, Result};
