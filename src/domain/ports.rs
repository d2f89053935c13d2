use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value surface the calculation store persists into. A key that has
/// never been written reads as `None`.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn write(&self, key: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn collection(&self) -> &str;
    fn currency(&self) -> &str;
}
