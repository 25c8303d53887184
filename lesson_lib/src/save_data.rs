//! Handling of the small binary save file on disc

use std::fs::File;
use std::io;
use std::io::{Read, Write};
use std::path::Path;

pub const TOTAL_DATA: usize = 10;

const FILE_SIZE: usize = TOTAL_DATA * 4;

/// Ten signed integers stored back to back in little endian, with no header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveData {
    pub values: [i32; TOTAL_DATA],
}

impl SaveData {
    /// Attempt to load the values from `path`. If the file does not exist a zero-filled one is
    /// written in its place.
    ///
    /// Files shorter than expected are rejected instead of being partially loaded.
    pub fn load_or_create(path: &Path) -> io::Result<SaveData> {
        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "Save file '{}' doesn't appear to exist, creating a new one",
                    path.display()
                );
                let data = SaveData::default();
                data.save(path)?;
                return Ok(data);
            }
            Err(e) => return Err(e),
        };

        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "Not a file!"));
        }

        let mut raw = [0u8; FILE_SIZE];
        file.read_exact(&mut raw).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                let msg = format!(
                    "Invalid file size (expected at least {}B, got {}B instead)",
                    FILE_SIZE,
                    metadata.len()
                );
                io::Error::new(io::ErrorKind::InvalidData, msg)
            } else {
                e
            }
        })?;

        let mut data = SaveData::default();
        for (v, bytes) in data.values.iter_mut().zip(raw.chunks_exact(4)) {
            *v = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        info!("Loaded save file '{}'", path.display());

        Ok(data)
    }

    /// Rewrite the whole file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut raw = Vec::with_capacity(FILE_SIZE);
        for v in self.values {
            raw.extend_from_slice(&v.to_le_bytes());
        }

        let mut file = File::create(path)?;
        file.write_all(&raw)?;
        file.flush()?;

        info!("Wrote save file '{}'", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lesson_lib_{}_{}.bin", name, std::process::id()))
    }

    #[test]
    fn missing_file_is_created() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);

        let data = SaveData::load_or_create(&path).unwrap();
        assert_eq!(data.values, [0; TOTAL_DATA]);
        assert_eq!(std::fs::read(&path).unwrap(), vec![0u8; FILE_SIZE]);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn values_survive_a_round_trip() {
        let path = temp_path("round_trip");
        let mut data = SaveData::default();
        data.values[0] = -1;
        data.values[9] = 0x1234_5678;
        data.save(&path).unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..4], &[0xff; 4]);
        assert_eq!(&raw[36..], &[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(SaveData::load_or_create(&path).unwrap(), data);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn short_file_is_rejected() {
        let path = temp_path("short");
        std::fs::write(&path, [1u8; 7]).unwrap();

        let err = SaveData::load_or_create(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        std::fs::remove_file(path).unwrap();
    }
}
