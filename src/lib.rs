pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{HttpStatusSource, TracingSink};
pub use config::PollerConfig;
pub use core::poller::Poller;
pub use utils::error::{FetchError, PollerError, Result};
