//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive shell that collects place names and triggers searches.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the prompt loop until the user quits. Each submitted line starts one search cycle.
    async fn run(&self) -> Result<(), DomainError>;
}
