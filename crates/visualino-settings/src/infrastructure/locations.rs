//! Platform-appropriate file locations for the settings store.
//!
//! Resolves three things for a given [`Platform`]:
//!
//! - **Settings file** – the user-scoped INI file:
//!   - Linux:   `$XDG_CONFIG_HOME/visualino/visualino.ini` (or `~/.config/...`)
//!   - Windows: `%APPDATA%\visualino\visualino.ini`
//!   - macOS:   `~/.config/visualino/visualino.ini`
//! - **Data directories** – where bundled resources such as the default
//!   `config.ini` are searched for, most specific first.
//! - **Application directory** – the directory holding the running
//!   executable, against which relative setting values are resolved.
//!
//! Environment lookups go through a closure so the resolution rules can be
//! tested for every platform on any host.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use visualino_core::Platform;

/// Error type for location resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The base directory for user configuration could not be determined.
    #[error("could not determine user config directory: {var} is not set")]
    NoConfigDir { var: &'static str },
}

/// Every path the settings store needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    /// The user-scoped INI settings file.
    pub settings_file: PathBuf,
    /// Ordered directories searched for bundled resources.
    pub data_dirs: Vec<PathBuf>,
    /// Directory containing the running executable.
    pub app_dir: PathBuf,
}

impl Locations {
    /// Resolves locations for `platform` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::NoConfigDir`] when the environment variable
    /// that anchors the user config directory is unset.
    pub fn detect(
        platform: Platform,
        organization: &str,
        application: &str,
    ) -> Result<Self, LocationError> {
        Self::resolve(
            platform,
            organization,
            application,
            executable_dir(),
            |var| std::env::var_os(var),
        )
    }

    /// Resolves locations using `env` for environment lookups.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError::NoConfigDir`] when the config base cannot be
    /// determined.
    pub fn resolve<F>(
        platform: Platform,
        organization: &str,
        application: &str,
        app_dir: PathBuf,
        env: F,
    ) -> Result<Self, LocationError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        // Empty or relative values are ignored, per XDG Base Directory rules.
        let var = |name: &str| {
            env(name)
                .map(PathBuf::from)
                .filter(|p| p.is_absolute())
        };
        let home = var("HOME");
        let ini_name = format!("{application}.ini");
        let namespaced = |base: PathBuf| base.join(organization).join(application);

        let (config_dir, data_dirs) = match platform {
            Platform::Linux => {
                let config_home = var("XDG_CONFIG_HOME")
                    .or_else(|| home.as_ref().map(|h| h.join(".config")))
                    .ok_or(LocationError::NoConfigDir { var: "HOME" })?;

                let data_home = var("XDG_DATA_HOME")
                    .or_else(|| home.as_ref().map(|h| h.join(".local").join("share")));
                let system_dirs = env("XDG_DATA_DIRS")
                    .and_then(|v| v.into_string().ok())
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());

                let mut dirs: Vec<PathBuf> = data_home.into_iter().map(namespaced).collect();
                dirs.extend(
                    system_dirs
                        .split(':')
                        .map(PathBuf::from)
                        .filter(|p| p.is_absolute())
                        .map(namespaced),
                );
                (config_home.join(organization), dirs)
            }
            Platform::Windows => {
                let app_data =
                    var("APPDATA").ok_or(LocationError::NoConfigDir { var: "APPDATA" })?;
                let local_app_data = var("LOCALAPPDATA").unwrap_or_else(|| app_data.clone());
                let program_data =
                    var("PROGRAMDATA").unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"));

                let dirs = vec![
                    namespaced(local_app_data),
                    namespaced(program_data),
                    app_dir.clone(),
                    app_dir.join("data"),
                ];
                (app_data.join(organization), dirs)
            }
            Platform::Mac => {
                let home = home.ok_or(LocationError::NoConfigDir { var: "HOME" })?;

                let dirs = vec![
                    namespaced(home.join("Library").join("Application Support")),
                    namespaced(PathBuf::from("/Library/Application Support")),
                    app_dir.join("..").join("Resources"),
                ];
                (home.join(".config").join(organization), dirs)
            }
        };

        Ok(Self {
            settings_file: config_dir.join(ini_name),
            data_dirs,
            app_dir,
        })
    }

    /// Locations that keep everything next to the executable.
    ///
    /// Used when the user config directory cannot be determined.
    pub fn portable(app_dir: PathBuf, application: &str) -> Self {
        Self {
            settings_file: app_dir.join(format!("{application}.ini")),
            data_dirs: vec![app_dir.clone()],
            app_dir,
        }
    }

    /// Returns the first data directory that contains `file_name` as a file.
    pub fn locate(&self, file_name: &str) -> Option<PathBuf> {
        self.data_dirs
            .iter()
            .map(|dir| dir.join(file_name))
            .find(|candidate| candidate.is_file())
    }

    /// Directory that should contain the settings file.
    pub fn settings_dir(&self) -> Option<&Path> {
        self.settings_file
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
    }
}

/// Directory containing the running executable.
///
/// Falls back to the current directory, then `.`, if the executable path is
/// unavailable.
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
