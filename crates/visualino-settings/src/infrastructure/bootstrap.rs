//! First-run bootstrap: seeds the user's settings file from a bundled default.
//!
//! Installers ship a `config.ini` with sensible per-platform values (for
//! example the IDE path inside the Windows bundle).  When the user's settings
//! lack an IDE path, that file is copied into the settings location before
//! the store is reopened.
//!
//! Every step is best-effort.  Failures are logged and reported through
//! [`BootstrapOutcome`], never returned as errors, because the key defaults
//! keep the application usable without any settings file at all.

use std::path::PathBuf;

use tracing::{info, warn};

use super::locations::Locations;

/// What a bootstrap attempt did.
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// The bundled file was copied into the settings location.
    Copied { from: PathBuf },
    /// No bundled file was found in the data directories or next to the
    /// executable.
    SourceMissing { searched: PathBuf },
    /// A settings file already exists and was left untouched.
    TargetExists,
    /// The copy itself failed.
    Failed {
        from: PathBuf,
        source: std::io::Error,
    },
}

impl BootstrapOutcome {
    /// Returns `true` if the settings file was seeded.
    pub fn is_copied(&self) -> bool {
        matches!(self, BootstrapOutcome::Copied { .. })
    }
}

/// Resolves the bundled file to copy.
///
/// The data directories are searched first; otherwise the file next to the
/// executable is used, whether or not it exists.
pub fn find_source(file_name: &str, locations: &Locations) -> PathBuf {
    locations
        .locate(file_name)
        .unwrap_or_else(|| locations.app_dir.join(file_name))
}

/// Copies `file_name` into `locations.settings_file`.
///
/// The caller must have released any open handle on the settings file.
/// An existing settings file is never overwritten.
pub fn run(file_name: &str, locations: &Locations) -> BootstrapOutcome {
    let source = find_source(file_name, locations);
    let target = &locations.settings_file;

    if let Some(dir) = locations.settings_dir() {
        if !dir.exists() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!("could not create settings directory {}: {e}", dir.display());
            }
        }
    }

    if !source.is_file() {
        warn!(
            "default settings {} not found; using built-in defaults",
            source.display()
        );
        return BootstrapOutcome::SourceMissing { searched: source };
    }

    if target.exists() {
        warn!(
            "settings file {} already exists; not replacing it with {}",
            target.display(),
            source.display()
        );
        return BootstrapOutcome::TargetExists;
    }

    match std::fs::copy(&source, target) {
        Ok(_) => {
            info!(from = %source.display(), to = %target.display(), "seeded settings file");
            BootstrapOutcome::Copied { from: source }
        }
        Err(e) => {
            warn!(
                "could not copy {} to {}: {e}",
                source.display(),
                target.display()
            );
            BootstrapOutcome::Failed {
                from: source,
                source: e,
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
