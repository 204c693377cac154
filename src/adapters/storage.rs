use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed key/value store: one JSON file per key under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Maps a key such as `@RocketShoes:cart` onto a safe file name.
    ///
    /// ASCII letters, digits and `-` are kept; every other byte becomes `_xx`
    /// (lowercase hex), so distinct keys never share a file.
    pub fn item_path(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file_name.push(char::from(byte));
            } else {
                file_name.push_str(&format!("_{:02x}", byte));
            }
        }
        self.base_path.join(format!("{}.json", file_name))
    }
}

impl Storage for LocalStorage {
    async fn read_item(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.item_path(key);
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_item(&self, key: &str, data: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;

        // 先寫暫存檔再 rename，讀取端不會看到寫到一半的內容
        let path = self.item_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
