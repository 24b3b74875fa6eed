pub mod interviews;

use crate::domain::error::Result;
use crate::domain::interview::InterviewRecord;
use async_trait::async_trait;

pub use interviews::SqliteInterviewStore;

/// Append-only collection of generated interviews.
#[async_trait]
pub trait InterviewStore {
    /// Writes a new document and returns the identifier the store assigned to it.
    async fn create(&self, record: &InterviewRecord) -> Result<String>;
}
