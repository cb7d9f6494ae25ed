use crate::domain::model::{SearchCriteria, SearchResult, TailorRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Output formats understood by the load step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["table", "json", "csv"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }

    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputFormat::Table => "tailors.txt",
            OutputFormat::Json => "tailors.json",
            OutputFormat::Csv => "tailors.csv",
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    /// JSON catalog to load; `None` selects the built-in catalog.
    fn catalog_path(&self) -> Option<&str>;
    /// Directory for rendered files; `None` prints to stdout.
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> Vec<OutputFormat>;
    fn output_filename(&self, format: OutputFormat) -> String {
        format.default_filename().to_string()
    }
    /// Fails when a configured filter value is not one the catalog knows.
    fn criteria(&self) -> Result<SearchCriteria>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TailorRecord>>;
    async fn transform(&self, data: Vec<TailorRecord>) -> Result<SearchResult>;
    async fn load(&self, result: SearchResult) -> Result<String>;
}
