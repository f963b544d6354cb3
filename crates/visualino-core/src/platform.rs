//! Platform namespaces for settings keys.
//!
//! Every setting lives under a platform prefix (`linux/`, `windows/`, `mac/`)
//! so a single settings file can carry values for all three operating
//! systems side by side.  The running binary only ever reads and writes its
//! own namespace, selected once at startup via [`Platform::current`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Operating system namespace used to qualify setting keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Windows,
    Mac,
}

/// Returned when a string does not name a known [`Platform`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform {0:?} (expected linux, windows, or mac)")]
pub struct ParsePlatformError(pub String);

impl Platform {
    /// All platforms, in namespace order.
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Windows, Platform::Mac];

    /// Returns the platform of the current compilation target.
    ///
    /// Targets other than Windows and macOS share the Linux namespace, which
    /// is what the bundled default configuration ships values for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Linux
        }
    }

    /// The namespace segment as it appears in the settings file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Mac => "mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            "mac" => Ok(Platform::Mac),
            other => Err(ParsePlatformError(other.to_string())),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_namespace_segment() {
        assert_eq!(Platform::Linux.as_str(), "linux");
        assert_eq!(Platform::Windows.as_str(), "windows");
        assert_eq!(Platform::Mac.as_str(), "mac");
    }

    #[test]
    fn test_from_str_accepts_every_namespace() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_namespace() {
        // Arrange / Act
        let result = "macos".parse::<Platform>();

        // Assert – only the exact namespace segment is accepted
        assert_eq!(result, Err(ParsePlatformError("macos".to_string())));
    }

    #[test]
    fn test_current_matches_target_os() {
        let platform = Platform::current();
        #[cfg(target_os = "windows")]
        assert_eq!(platform, Platform::Windows);
        #[cfg(target_os = "macos")]
        assert_eq!(platform, Platform::Mac);
        #[cfg(target_os = "linux")]
        assert_eq!(platform, Platform::Linux);
    }

    #[test]
    fn test_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Platform::Mac).expect("serialize");
        assert_eq!(json, "\"mac\"");
    }
}
