use crate::core::Storage;
use crate::utils::error::{BridgeError, Result};
use std::fs;
use std::io::ErrorKind;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        match fs::read(path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BridgeError::SourceNotFoundError {
                path: path.to_string(),
            }),
            Err(e) => Err(BridgeError::IoError(e)),
        }
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        // 先寫到暫存檔再改名,失敗時不會留下寫到一半的目的檔
        let tmp_path = format!("{}.tmp", path);
        fs::write(&tmp_path, data)
            .and_then(|_| fs::rename(&tmp_path, path))
            .map_err(|source| {
                let _ = fs::remove_file(&tmp_path);
                BridgeError::WriteError {
                    path: path.to_string(),
                    source,
                }
            })
    }
}
