// Activity tracking: a bounded per-session log of user actions, statistics
// derived from it, and time-on-feature sampling for open views.

pub mod feed;
pub mod handlers;
pub mod models;
pub mod sampler;
pub mod stats;
pub mod store;

pub use sampler::{SamplerRegistry, DEFAULT_SAMPLE_INTERVAL};
pub use store::ActivityStore;
