mod client;
pub mod models;
mod source_error;

pub use client::ApiClient;
pub use source_error::SourceError;

use crate::domain::{Activity, Association};

/// Where listings come from. The backend is the only production
/// implementation; tests plug in fixed data.
pub trait RecordSource: Send + Sync {
    fn activities(&self) -> Result<Vec<Activity>, SourceError>;

    fn associations(&self) -> Result<Vec<Association>, SourceError>;

    fn association(&self, id: i64) -> Result<Association, SourceError>;

    fn association_activities(&self, id: i64) -> Result<Vec<Activity>, SourceError>;
}
