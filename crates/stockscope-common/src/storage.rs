use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key-value store on the local filesystem; every key is one `<key>.json` file
/// under `root`, holding a single serialized blob.
///
/// ```ignore
/// let storage = Storage::new("./data");
/// storage.set_item("watchlist", r#"[{"symbol":"AAPL","name":"Apple Inc."}]"#).await?;
/// let blob: Option<String> = storage.get_item("watchlist").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the raw blob stored under `key`; `None` if nothing was ever written.
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Overwrite the blob under `key`, creating the store directory as necessary.
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("failed to create {}", self.root.display()))?;
        let path = self.path(key);
        tokio::fs::write(&path, value)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("stored {} bytes under `{key}`", value.len());
        Ok(())
    }

    /// Read and deserialize the blob under `key`.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item(key).await? {
            Some(blob) => {
                let data: T = serde_json::from_str(&blob)
                    .with_context(|| format!("`{key}` does not hold the expected JSON"))?;
                Ok(Some(data))
            }
            None => Ok(None),
        }
    }

    /// Serialize `data` and store it under `key`.
    pub async fn set_json<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        let blob = serde_json::to_string(data)?;
        self.set_item(key, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        assert_eq!(storage.get_item("watchlist").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("nested"));
        storage.set_item("theme", "\"dark\"").await.unwrap();
        assert_eq!(
            storage.get_item("theme").await.unwrap().as_deref(),
            Some("\"dark\"")
        );
    }

    #[tokio::test]
    async fn json_helpers_reject_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        storage.set_item("numbers", "not json").await.unwrap();
        assert!(storage.get_json::<Vec<u32>>("numbers").await.is_err());

        storage.set_json("numbers", &[1u32, 2, 3]).await.unwrap();
        assert_eq!(
            storage.get_json::<Vec<u32>>("numbers").await.unwrap(),
            Some(vec![1, 2, 3])
        );
    }
}
