use crate::domain::model::{Line, RewriteResult, RewriteStats};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_input(&self) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_output(&self, data: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the header is read from and written to. `None` means the standard stream.
pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Line>>;
    async fn transform(&self, lines: Vec<Line>) -> Result<RewriteResult>;
    async fn load(&self, result: RewriteResult) -> Result<RewriteStats>;
}
