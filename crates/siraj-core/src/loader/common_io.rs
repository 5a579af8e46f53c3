// crates/siraj-core/src/loader/common_io.rs
use crate::error::{Result, SirajError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a catalog file, buffers it and unwraps gzip when the name ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SirajError::NotFound(format!("Catalog not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(SirajError::Unsupported(format!(
                "{} is gzipped but the `compact` feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_is_detected_by_extension() {
        assert!(is_gzip(Path::new("data/restaurants.csv.gz")));
        assert!(is_gzip(Path::new("R.CSV.GZ")));
        assert!(!is_gzip(Path::new("data/restaurants.csv")));
    }

    #[cfg(not(feature = "compact"))]
    #[test]
    fn gzip_without_compact_is_data_load_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("restaurants.csv.gz");
        std::fs::write(&path, b"\x1f\x8b").unwrap();

        let err = open_stream(&path).err().unwrap();
        assert!(matches!(err, SirajError::Unsupported(_)));
        assert!(err.is_data_load());
    }
}
