pub mod poller;

pub use crate::domain::model::{PollSummary, StatusRecord};
pub use crate::domain::ports::{StatusSink, StatusSource};
pub use crate::utils::error::Result;
