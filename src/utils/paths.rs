use dirs::home_dir;
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const HOME_ENV: &str = "TEAM_LEDGER_HOME";
const DEFAULT_DIR_NAME: &str = ".team_ledger";
const RECORDS_DIR: &str = "records";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Resolves the on-disk layout under the application data directory.
pub struct PathResolver;

impl PathResolver {
    /// `$TEAM_LEDGER_HOME`, falling back to `~/.team_ledger`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn records_dir_in(base: &Path) -> PathBuf {
        base.join(RECORDS_DIR)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Sibling path used while a file is being rewritten: `Expenses.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a temporary sibling and renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn tmp_path_keeps_the_original_extension() {
        assert_eq!(
            tmp_path(Path::new("records/Expenses.json")),
            PathBuf::from("records/Expenses.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("notes")), PathBuf::from("notes.tmp"));
    }

    #[test]
    fn atomic_write_replaces_contents_and_cleans_up() {
        let temp = TempDir::new().expect("temp dir");
        let target = temp.path().join("nested").join("table.json");
        write_atomic(&target, "[1]").expect("first write");
        write_atomic(&target, "[2]").expect("second write");
        assert_eq!(fs::read_to_string(&target).expect("read"), "[2]");
        assert!(!tmp_path(&target).exists());
    }
}
