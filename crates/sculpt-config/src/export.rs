//! JSON export of sampled data.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::ConfigError;

/// Write `value` as pretty-printed JSON to `path`, creating parent directories.
pub fn export_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
    }
    let file = std::fs::File::create(path).map_err(ConfigError::WriteError)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(ConfigError::ExportError)?;
    writer.flush().map_err(ConfigError::WriteError)?;
    log::info!("Exported {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_export_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/config.json");
        export_json(&path, &Config::default()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["shape"]["kind"], "NONE");
        assert_eq!(value["sampler"]["theta_steps"], 64);
    }

    #[test]
    fn test_export_slice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        export_json(&path, &[[1.0f32, 2.0, 3.0]][..]).unwrap();
        let rows: Vec<[f32; 3]> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows, vec![[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_export_below_regular_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let err = export_json(&blocker.join("out.json"), &1u32).unwrap_err();
        assert!(matches!(err, ConfigError::WriteError(_)), "{err}");
    }
}
