use crate::core::rewriter;
use crate::core::{Line, Pipeline, RewriteResult, RewriteStats, Storage};
use crate::utils::error::Result;

/// Reads a header from storage, rewrites it, writes it back out.
pub struct HeaderPipeline<S: Storage> {
    storage: S,
}

impl<S: Storage> HeaderPipeline<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

/// Splits after every `\n`. A trailing unterminated line is kept; empty
/// input has no lines.
pub fn split_lines(data: &[u8]) -> Vec<Line> {
    data.split_inclusive(|&b| b == b'\n')
        .map(<[u8]>::to_vec)
        .collect()
}

pub fn join_lines(lines: &[Line]) -> Vec<u8> {
    let mut data = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        data.extend_from_slice(line);
        data.push(b'\n');
    }
    data
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for HeaderPipeline<S> {
    async fn extract(&self) -> Result<Vec<Line>> {
        let data = self.storage.read_input().await?;
        tracing::debug!("Read {} bytes of header input", data.len());
        Ok(split_lines(&data))
    }

    async fn transform(&self, lines: Vec<Line>) -> Result<RewriteResult> {
        Ok(rewriter::rewrite(lines))
    }

    async fn load(&self, result: RewriteResult) -> Result<RewriteStats> {
        let data = join_lines(&result.lines);
        tracing::debug!("Writing {} bytes of rewritten header", data.len());
        self.storage.write_output(&data).await?;
        Ok(result.stats)
    }
}
