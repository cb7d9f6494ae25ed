pub mod catalog;
pub mod engine;
pub mod pipeline;
pub mod render;
pub mod search;

pub use crate::domain::model::{SearchCriteria, SearchResult, TailorRecord};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, Storage};
pub use crate::utils::error::Result;
