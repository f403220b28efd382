use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Standard input/output, or files when paths are given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl LocalStorage {
    pub fn new(input_path: Option<PathBuf>, output_path: Option<PathBuf>) -> Self {
        Self {
            input_path,
            output_path,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.input_path().map(PathBuf::from),
            config.output_path().map(PathBuf::from),
        )
    }
}

impl Storage for LocalStorage {
    async fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input_path {
            Some(path) => {
                tracing::debug!("Reading header from {}", path.display());
                Ok(tokio::fs::read(path).await?)
            }
            None => {
                tracing::debug!("Reading header from stdin");
                let mut data = Vec::new();
                tokio::io::stdin().read_to_end(&mut data).await?;
                Ok(data)
            }
        }
    }

    async fn write_output(&self, data: &[u8]) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, data).await?;
                tracing::debug!("Header written to {}", path.display());
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(data).await?;
                stdout.flush().await?;
            }
        }
        Ok(())
    }
}
