use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Check if `path` has one of the given `extensions`, ignoring ASCII case
pub fn filetype_supported<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(OsStr::to_str) else {
        return false;
    };

    extensions
        .iter()
        .any(|supported| supported.as_ref().eq_ignore_ascii_case(ext))
}

/// Get the directory `path` lives in, `.` for a bare file name
#[must_use]
pub fn get_parent_folder(path: &Path) -> Cow<'_, Path> {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.into(),
        _ => Path::new(".").into(),
    }
}

/// Get the config directory of the app, it is not created
pub fn get_app_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow!("failed to find os config dir."))?;
    path.push("mp3tag");

    Ok(path)
}
