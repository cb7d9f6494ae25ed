use crate::core::catalog::Catalog;
use crate::core::{render, search, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{SearchResult, TailorRecord};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Loads a catalog, runs one query over it and renders the result.
pub struct FinderPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FinderPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Reads the configured catalog file, or falls back to the built-in catalog.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        match self.config.catalog_path() {
            Some(path) => {
                tracing::debug!("Reading catalog from: {}", path);
                let data = self.storage.read_file(path).await?;
                let catalog = Catalog::from_json_slice(&data)?;
                tracing::info!("📚 Loaded {} tailors from {}", catalog.len(), path);
                Ok(catalog)
            }
            None => {
                tracing::debug!("Using built-in catalog");
                Ok(Catalog::builtin().clone())
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FinderPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<TailorRecord>> {
        Ok(self.load_catalog().await?.into_records())
    }

    async fn transform(&self, data: Vec<TailorRecord>) -> Result<SearchResult> {
        let criteria = self.config.criteria()?;
        tracing::debug!("Search criteria: {:?}", criteria);

        let tailors = search::search(&data, &criteria);
        tracing::debug!(
            "{} of {} tailors matched, sorted by {}",
            tailors.len(),
            data.len(),
            criteria.sort
        );

        Ok(SearchResult::new(criteria, tailors))
    }

    async fn load(&self, result: SearchResult) -> Result<String> {
        let formats = self.config.output_formats();

        let Some(output_dir) = self.config.output_path() else {
            let rendered = formats
                .into_iter()
                .map(|format| render::render(&result, format))
                .collect::<Result<Vec<_>>>()?;
            // 下游關閉管線 (例如 `| head`) 時回傳 IoError 而非 panic
            let mut stdout = std::io::stdout().lock();
            for content in rendered {
                writeln!(stdout, "{}", content)?;
            }
            stdout.flush()?;
            return Ok("stdout".to_string());
        };

        let mut written = Vec::with_capacity(formats.len());
        for format in formats {
            let content = render::render(&result, format)?;
            let path = Path::new(output_dir)
                .join(self.config.output_filename(format))
                .to_string_lossy()
                .into_owned();
            tracing::debug!("Writing {:?} output to {}", format, path);
            self.storage.write_file(&path, content.as_bytes()).await?;
            written.push(path);
        }

        Ok(written.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use crate::domain::model::{PriceTier, SortKey};
    use crate::utils::error::FinderError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                FinderError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_extract_builtin_catalog() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let pipeline = FinderPipeline::new(MockStorage::new(), config);

        let records = pipeline.extract().await.unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].name, "Elite Fashion Tailors");
    }

    #[tokio::test]
    async fn test_extract_catalog_file() {
        let storage = MockStorage::new();
        let json = br#"[
            {"id": "a", "name": "Needle Point", "rating": 4.1, "reviewCount": 3,
             "specialty": ["Shirts"], "location": "Harbor", "distance": "0.3 miles",
             "price": "medium", "availability": "Same day"}
        ]"#;
        storage.put_file("catalog.json", json).await;

        let config = TomlConfig::from_toml_str("[catalog]\npath = \"catalog.json\"\n").unwrap();
        let pipeline = FinderPipeline::new(storage, config);

        let records = pipeline.extract().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, PriceTier::Medium);
    }

    #[tokio::test]
    async fn test_extract_missing_catalog_file() {
        let config = TomlConfig::from_toml_str("[catalog]\npath = \"missing.json\"\n").unwrap();
        let pipeline = FinderPipeline::new(MockStorage::new(), config);

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, FinderError::IoError(_)));
    }

    #[tokio::test]
    async fn test_transform_applies_criteria() {
        let config = TomlConfig::from_toml_str(
            r#"
[query]
price = "premium"
sort = "distance"
"#,
        )
        .unwrap();
        let pipeline = FinderPipeline::new(MockStorage::new(), config);

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();

        let names: Vec<&str> = result.tailors.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Elite Fashion Tailors",
                "Creative Stitches",
                "Heritage Custom Tailoring"
            ]
        );
        assert_eq!(result.criteria.sort, SortKey::Distance);
        assert_eq!(result.summary, "3 tailors found");
        assert_eq!(result.sorted_by, "Nearest");
    }

    #[tokio::test]
    async fn test_transform_rejects_unknown_price_tier() {
        let config = TomlConfig::from_toml_str("[query]\nprice = \"luxury\"\n").unwrap();
        let pipeline = FinderPipeline::new(MockStorage::new(), config);

        let records = pipeline.extract().await.unwrap();
        let err = pipeline.transform(records).await.unwrap_err();
        assert!(matches!(err, FinderError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_load_to_stdout() {
        let storage = MockStorage::new();
        let config = TomlConfig::from_toml_str("[output]\nformats = [\"csv\"]\n").unwrap();
        let pipeline = FinderPipeline::new(storage.clone(), config);

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        assert_eq!(pipeline.load(result).await.unwrap(), "stdout");
        assert!(storage.files.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_writes_each_format() {
        let storage = MockStorage::new();
        let config = TomlConfig::from_toml_str(
            r#"
[query]
search = "alterations"

[output]
path = "out"
formats = ["json", "csv"]

[output.filenames]
csv = "alterations.csv"
"#,
        )
        .unwrap();
        let pipeline = FinderPipeline::new(storage.clone(), config);

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        let written = pipeline.load(result).await.unwrap();

        let json_path = Path::new("out").join("tailors.json").to_string_lossy().into_owned();
        let csv_path = Path::new("out").join("alterations.csv").to_string_lossy().into_owned();
        assert_eq!(written, format!("{}, {}", json_path, csv_path));

        let json = storage.get_file(&json_path).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["count"], 2);

        let csv = String::from_utf8(storage.get_file(&csv_path).await.unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }
}
