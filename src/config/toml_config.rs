use crate::core::{ConfigProvider, OutputFormat};
use crate::domain::model::{PriceTier, SearchCriteria, SortKey};
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_one_of, validate_path,
    validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

/// Raw query values; empty strings mean "unset", as in the listing page dropdowns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    pub search: Option<String>,
    pub price: Option<String>,
    pub specialty: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub formats: Option<Vec<String>>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub table: Option<String>,
    pub json: Option<String>,
    pub csv: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_PATH})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FinderError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            let path = validate_required_field("catalog.path", &catalog.path)?;
            validate_path("catalog.path", path)?;
            validate_file_extension("catalog.path", path, &["json"])?;
        }

        if let Some(price) = non_empty(&self.query.price) {
            let tiers: Vec<&str> = PriceTier::ALL.iter().map(|t| t.as_str()).collect();
            validate_one_of("query.price", price, &tiers)?;
        }

        if let Some(sort) = non_empty(&self.query.sort) {
            if SortKey::parse(sort) == SortKey::Unsorted && sort != "unsorted" {
                tracing::warn!("Unknown sort key '{}', results keep catalog order", sort);
            }
        }

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }

        if let Some(formats) = &self.output.formats {
            if formats.is_empty() {
                return Err(FinderError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: "[]".to_string(),
                    reason: "At least one output format is required".to_string(),
                });
            }
            for format in formats {
                validate_one_of("output.formats", format, &OutputFormat::NAMES)?;
            }
        }

        if let Some(filenames) = &self.output.filenames {
            for (field, name) in [
                ("output.filenames.table", &filenames.table),
                ("output.filenames.json", &filenames.json),
                ("output.filenames.csv", &filenames.csv),
            ] {
                if let Some(name) = name {
                    validate_non_empty_string(field, name)?;
                }
            }
        }

        Ok(())
    }

    pub fn set_catalog_path(&mut self, path: String) {
        self.catalog = Some(CatalogConfig { path: Some(path) });
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.path.as_deref())
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        match &self.output.formats {
            Some(formats) => formats
                .iter()
                .filter_map(|f| OutputFormat::parse(f))
                .collect(),
            None => vec![OutputFormat::Table],
        }
    }

    fn output_filename(&self, format: OutputFormat) -> String {
        let configured = self.output.filenames.as_ref().and_then(|names| match format {
            OutputFormat::Table => names.table.clone(),
            OutputFormat::Json => names.json.clone(),
            OutputFormat::Csv => names.csv.clone(),
        });
        configured.unwrap_or_else(|| format.default_filename().to_string())
    }

    fn criteria(&self) -> Result<SearchCriteria> {
        let price = match non_empty(&self.query.price) {
            None => None,
            Some(raw) => Some(PriceTier::parse(raw).ok_or_else(|| {
                FinderError::InvalidConfigValueError {
                    field: "query.price".to_string(),
                    value: raw.to_string(),
                    reason: "Unknown price tier".to_string(),
                }
            })?),
        };

        Ok(SearchCriteria {
            search: non_empty(&self.query.search).map(str::to_string),
            price,
            specialty: non_empty(&self.query.specialty).map(str::to_string),
            sort: non_empty(&self.query.sort)
                .map(SortKey::parse)
                .unwrap_or_default(),
        })
    }
}
