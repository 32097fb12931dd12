//! Saving downloaded bodies.
//!
//! Bodies are written to a `.part` temp file, synced, then atomically renamed
//! to the final name, so an interrupted run never leaves a truncated file
//! under a real name.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `file.pdf` → `file.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `dir` (and parents) if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))
}

/// Writes `data` to `dir/name`, replacing any existing file. Returns the final path.
pub fn save(dir: &Path, name: impl AsRef<Path>, data: &[u8]) -> Result<PathBuf> {
    let final_path = dir.join(name);
    let tp = temp_path(&final_path);

    let result = write_synced(&tp, data).and_then(|()| {
        fs::rename(&tp, &final_path).with_context(|| {
            format!("failed to rename {} to {}", tp.display(), final_path.display())
        })
    });
    if let Err(e) = result {
        let _ = fs::remove_file(&tp);
        return Err(e);
    }
    Ok(final_path)
}

fn write_synced(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to create temp file: {}", path.display()))?;
    file.write_all(data)
        .with_context(|| format!("write {}", path.display()))?;
    file.sync_all().context("storage sync failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("manual.pdf"));
        assert_eq!(p.to_string_lossy(), "manual.pdf.part");
        let p2 = temp_path(Path::new("/tmp/firmware.zip"));
        assert_eq!(p2.to_string_lossy(), "/tmp/firmware.zip.part");
    }

    #[test]
    fn save_writes_and_removes_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), "manual.pdf", b"%PDF-1.4").unwrap();
        assert_eq!(path, dir.path().join("manual.pdf"));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn save_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), "a.zip", b"old contents").unwrap();
        let path = save(dir.path(), "a.zip", b"new").unwrap();
        assert_eq!(fs::read(path).unwrap(), b"new");
    }

    #[test]
    fn save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(save(&missing, "a.pdf", b"x").is_err());
    }

    #[test]
    fn ensure_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Assets").join("PDFs");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }
}
