//! Dataset file I/O
//!
//! The JSON file on disk is the sole interface between the generator and the
//! uploader. Write semantics match the original tool: pretty-printed with
//! two-space indentation, truncating overwrite, no partial-write recovery.

use crate::error::{FarmgridError, Result};
use crate::models::Dataset;
use std::fs;
use std::path::Path;

/// Serialize a dataset to `path`, overwriting any existing file.
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> Result<()> {
    let json = serde_json::to_string_pretty(dataset)
        .map_err(|e| FarmgridError::Serialization(e.to_string()))?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Load a dataset from `path`.
///
/// A missing file is reported as `DatasetNotFound` so callers can fail fast
/// before issuing any HTTP call. Malformed records (a missing `garden_id`,
/// a non-numeric coordinate) are rejected here by typed deserialization
/// instead of surfacing mid-upload.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FarmgridError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| FarmgridError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_dataset;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("datatest.json");

        let dataset = generate_dataset(&mut StdRng::seed_from_u64(7));
        write_dataset(&path, &dataset).unwrap();

        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_write_is_pretty_printed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("datatest.json");

        let dataset = generate_dataset(&mut StdRng::seed_from_u64(7));
        write_dataset(&path, &dataset).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"points\""));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("datatest.json");
        fs::write(&path, "stale garbage").unwrap();

        let dataset = generate_dataset(&mut StdRng::seed_from_u64(7));
        write_dataset(&path, &dataset).unwrap();

        assert_eq!(load_dataset(&path).unwrap(), dataset);
    }

    #[test]
    fn test_missing_file_is_dataset_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_dataset(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FarmgridError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_malformed_record_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("datatest.json");
        // Color sample missing garden_id.
        fs::write(
            &path,
            r#"{"points":[],"colors":[{"device_id":"esp32s3_01","latitude":14.042,"longitude":100.610,"r":1,"g":2,"b":3,"ts":4}]}"#,
        )
        .unwrap();

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, FarmgridError::Serialization(_)));
    }
}
