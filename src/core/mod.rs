pub mod engine;
pub mod pipeline;
pub mod rewriter;

pub use crate::domain::model::{
    Line, RewriteResult, RewriteStats, StreamToDeclaration, FORWARD_DECLARATIONS,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
