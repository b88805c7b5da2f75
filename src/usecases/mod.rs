//! Application use cases. Orchestrate domain logic via ports.

pub mod renderer;
pub mod search_service;

pub use renderer::{NO_DATA_MESSAGE, render_weather};
pub use search_service::{SearchOutcome, SearchService};
