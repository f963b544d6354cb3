//! Resolution of stored setting values into filesystem paths.
//!
//! Settings may hold paths relative to the installation directory (the
//! Windows and macOS bundles ship `html/index.html` next to the binary).
//! Relative values are joined onto the executable's directory; absolute
//! values pass through untouched.

use std::path::{Path, PathBuf};

use crate::domain::settings::SettingKey;

/// Joins `value` onto `app_dir` when it is a relative path.
///
/// # Examples
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use visualino_core::paths::resolve_relative;
///
/// # #[cfg(unix)]
/// # {
/// assert_eq!(
///     resolve_relative("visualino.ino", Path::new("/opt/app")),
///     PathBuf::from("/opt/app/visualino.ino"),
/// );
/// assert_eq!(
///     resolve_relative("/tmp/x.ino", Path::new("/opt/app")),
///     PathBuf::from("/tmp/x.ino"),
/// );
/// # }
/// ```
pub fn resolve_relative(value: &str, app_dir: &Path) -> PathBuf {
    let path = Path::new(value);
    if path.is_relative() {
        app_dir.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Turns the raw `stored` value of `key` into a path.
///
/// An absent or empty value falls back to [`SettingKey::default_value`];
/// the result is then passed through [`resolve_relative`].
pub fn resolve_setting(stored: Option<&str>, key: SettingKey, app_dir: &Path) -> PathBuf {
    let value = stored
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| key.default_value());
    resolve_relative(value, app_dir)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
