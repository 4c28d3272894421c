//! Reading inputs and writing results, with backups for in-place edits.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{Error, Result};

/// Where cleaned text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    InPlace { backup: bool },
}

/// Read an input file, or stdin for `-`.
pub fn read_input(input: &Path) -> Result<String> {
    if is_stdin(input) {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    if !input.exists() {
        return Err(Error::InputNotFound(input.display().to_string()));
    }
    Ok(fs::read_to_string(input)?)
}

pub fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

/// Write `content` to `destination`. Returns the backup path for in-place
/// edits that made one.
pub fn write_output(
    input: &Path,
    destination: &Destination,
    content: &str,
) -> Result<Option<PathBuf>> {
    match destination {
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(None)
        }
        Destination::File(path) => {
            fs::write(path, content)?;
            info!("wrote {}", path.display());
            Ok(None)
        }
        Destination::InPlace { backup } => {
            if is_stdin(input) {
                return Err(Error::InPlaceStdin);
            }
            if *backup {
                write_in_place_with_backup(input, content).map(Some)
            } else {
                fs::write(input, content)?;
                Ok(None)
            }
        }
    }
}

/// `<stem>.<unix-seconds>.bak` beside the input, or `<file>.bak` when that
/// name is already taken.
pub fn backup_path(input: &Path) -> PathBuf {
    backup_path_at(input, chrono::Utc::now().timestamp())
}

fn backup_path_at(input: &Path, timestamp: i64) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let timestamped = input.with_file_name(format!("{stem}.{timestamp}.bak"));
    if !timestamped.exists() {
        return timestamped;
    }
    let mut fallback = input.as_os_str().to_os_string();
    fallback.push(".bak");
    PathBuf::from(fallback)
}

fn write_in_place_with_backup(input: &Path, content: &str) -> Result<PathBuf> {
    let backup = backup_path(input);
    if backup.exists() {
        warn!("backup file {} already exists, overwriting", backup.display());
    }
    fs::copy(input, &backup)?;
    info!("backed up {} to {}", input.display(), backup.display());

    // Writing through the existing file keeps its permissions.
    if let Err(e) = fs::write(input, content) {
        if fs::copy(&backup, input).is_ok() {
            warn!("write failed, restored {} from backup", input.display());
        }
        return Err(e.into());
    }
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_input_is_reported() {
        let temp = TempDir::new().unwrap();
        let err = read_input(&temp.path().join("nope.c")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[test]
    fn in_place_keeps_backup() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("main.c");
        fs::write(&input, "int x; // c\n").unwrap();

        let backup = write_output(&input, &Destination::InPlace { backup: true }, "int x; \n")
            .unwrap()
            .unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), "int x; \n");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "int x; // c\n");
        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("main.") && name.ends_with(".bak"));
    }

    #[cfg(unix)]
    #[test]
    fn in_place_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let input = temp.path().join("run.sh");
        fs::write(&input, "echo hi # c\n").unwrap();
        fs::set_permissions(&input, fs::Permissions::from_mode(0o755)).unwrap();

        write_output(&input, &Destination::InPlace { backup: true }, "echo hi \n").unwrap();

        let mode = fs::metadata(&input).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn in_place_without_backup_overwrites() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("a.sh");
        fs::write(&input, "echo # hi\n").unwrap();

        let backup =
            write_output(&input, &Destination::InPlace { backup: false }, "echo \n").unwrap();

        assert!(backup.is_none());
        assert_eq!(fs::read_to_string(&input).unwrap(), "echo \n");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn backup_path_falls_back_when_taken() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("x.py");

        let first = backup_path_at(&input, 1_700_000_000);
        assert_eq!(first, temp.path().join("x.1700000000.bak"));
        fs::write(&first, "").unwrap();

        let second = backup_path_at(&input, 1_700_000_000);
        assert_eq!(second, temp.path().join("x.py.bak"));
    }

    #[test]
    fn in_place_rejects_stdin() {
        let err = write_output(Path::new("-"), &Destination::InPlace { backup: true }, "")
            .unwrap_err();
        assert!(matches!(err, Error::InPlaceStdin));
    }
}
