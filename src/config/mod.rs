pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_distinct_paths, validate_optional_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// Without arguments the header is read from stdin and written to stdout.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "add-compress-methods")]
#[command(about = "Adds CompressStream_t/DeCompressStream_t streamTo overloads to a C++ header")]
pub struct CliConfig {
    /// Read the header from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("input", self.input_path())?;
        validate_optional_path("output", self.output_path())?;
        validate_distinct_paths(self.input_path(), self.output_path())
    }
}
