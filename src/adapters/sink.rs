use crate::domain::model::StatusRecord;
use crate::domain::ports::StatusSink;

/// Emits each body verbatim at info level. The subscriber adds the timestamp.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl StatusSink for TracingSink {
    fn emit(&self, record: &StatusRecord) {
        tracing::info!("{}", record.body);
    }
}
