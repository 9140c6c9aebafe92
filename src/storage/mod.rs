//! Storage abstractions for rendered documents.
//!
//! ## Directory Structure
//!
//! ```text
//! output/
//! ├── 2019/
//! │   ├── 01/
//! │   │   ├── 2019-0001_OO일보 보도 관련.md
//! │   │   └── INDEX_2019_01.md
//! │   └── 02/
//! └── 2020/
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Period;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for document storage backends.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Write one document of `period` under `filename`, returning where it went.
    async fn write_document(&self, period: Period, filename: &str, content: &str)
    -> Result<String>;

    /// Read a previously written document, `None` if it does not exist.
    async fn read_document(&self, period: Period, filename: &str) -> Result<Option<String>>;
}
