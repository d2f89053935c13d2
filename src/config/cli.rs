use crate::domain::ports::Storage;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed key-value storage: one JSON document per key under a base
/// directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", key))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.key_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, data: &[u8]) -> Result<()> {
        let full_path = self.key_path(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
