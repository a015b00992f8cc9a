pub mod analytics;
pub mod models;
pub mod store;
pub mod survey_state;
pub mod validation;

pub use analytics::{compute_analytics, SurveyAnalytics};
pub use models::*;
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use survey_state::SurveyState;
pub use validation::*;

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorage;

#[cfg(test)]
mod tests;
