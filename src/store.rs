use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

use crate::error::AppResult;

/// File-backed collection store. The whole collection lives in one JSON array
/// and every save rewrites the file. Callers own the read-modify-write
/// sequencing: overlapping writers race and the last save wins.
pub struct JsonStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _records: PhantomData,
        }
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. A file that does not exist yet is an empty
    /// collection, not an error.
    pub async fn load(&self) -> AppResult<Vec<T>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Overwrites the backing file with the whole collection.
    pub async fn save(&self, records: &[T]) -> AppResult<()> {
        let raw = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonStore;
    use crate::{error::AppError, models::Product};

    fn widget(id: u64, code: &str) -> Product {
        Product {
            id,
            title: "Widget".to_string(),
            description: "A widget".to_string(),
            code: code.to_string(),
            category: "tools".to_string(),
            price: 9.99,
            stock: 3,
            thumbnails: Vec::new(),
            status: true,
        }
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store: JsonStore<Product> = JsonStore::new(dir.path().join("products.json"));

        let records = store.load().await.expect("load");
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn save_rewrites_the_whole_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store: JsonStore<Product> = JsonStore::new(dir.path().join("products.json"));

        store.save(&[widget(1, "A1"), widget(2, "A2")]).await.expect("save");
        store.save(&[widget(7, "B1")]).await.expect("save");

        let records = store.load().await.expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
    }

    #[tokio::test]
    async fn unparsable_file_is_a_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("products.json");
        std::fs::write(&path, b"not json").expect("write");

        let store: JsonStore<Product> = JsonStore::new(path);
        let err = store.load().await.expect_err("corrupt file must not load");
        assert!(matches!(err, AppError::Corrupted(_)));
    }
}
