use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub catalog_size: usize,
    pub matched: usize,
    pub summary: String,
    pub destination: String,
}

pub struct FinderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FinderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🔎 Starting tailor search");

        let catalog = self.pipeline.extract().await?;
        let catalog_size = catalog.len();
        tracing::info!("Catalog holds {} tailors", catalog_size);

        let result = self.pipeline.transform(catalog).await?;
        let matched = result.count;
        let summary = result.summary.clone();
        tracing::info!("{} (sorted by {})", summary, result.sorted_by);

        let destination = self.pipeline.load(result).await?;
        tracing::info!("📁 Results written to: {}", destination);

        Ok(RunSummary {
            catalog_size,
            matched,
            summary,
            destination,
        })
    }
}
