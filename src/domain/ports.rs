use crate::domain::model::StatusRecord;
use crate::utils::error::FetchError;
use async_trait::async_trait;

#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Where the source fetches from; used in error messages.
    fn endpoint(&self) -> &str;

    /// Issue one request and drain the full body.
    async fn fetch(&self) -> std::result::Result<Vec<u8>, FetchError>;
}

pub trait StatusSink: Send + Sync {
    fn emit(&self, record: &StatusRecord);
}
