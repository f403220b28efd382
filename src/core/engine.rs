use crate::core::{Pipeline, RewriteStats};
use crate::utils::error::Result;

pub struct RewriteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RewriteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RewriteStats> {
        tracing::debug!("Starting header rewrite");

        // Extract
        let lines = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} lines", lines.len());

        // Transform
        let result = self.pipeline.transform(lines).await?;
        tracing::debug!(
            "Expanded {} streamTo declarations",
            result.stats.declarations_expanded
        );

        // Load
        let stats = self.pipeline.load(result).await?;
        tracing::info!(
            lines_read = stats.lines_read,
            declarations_expanded = stats.declarations_expanded,
            lines_written = stats.lines_written,
            "Header rewrite completed"
        );

        Ok(stats)
    }
}
