// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod sink;

pub use http::HttpStatusSource;
pub use sink::TracingSink;
