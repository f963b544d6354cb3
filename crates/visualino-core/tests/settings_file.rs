//! Integration tests for reading bundled and user settings files.
//!
//! These exercise the public API end-to-end: INI text in, resolved paths
//! out, across the platform namespaces a single file can hold.

use std::path::Path;

use visualino_core::{ini, resolve_setting, Platform, SettingKey};

/// Shaped like the `config.ini` shipped with the Windows and macOS bundles.
const BUNDLED_CONFIG: &str = "\
; Visualino default settings
[linux]
arduino_ide_path=/usr/bin/arduino
html_index=/usr/share/visualino/html/index.html

[windows]
arduino_ide_path=arduino\\arduino.exe
tmp_dir_name=
html_index=html/index.html

[mac]
arduino_ide_path=/Applications/Arduino.app/Contents/MacOS/Arduino
html_index=../Resources/html/index.html
";

#[test]
fn test_bundled_config_populates_every_namespace() {
    let record = ini::parse(BUNDLED_CONFIG).expect("bundled config must parse");

    for platform in Platform::ALL {
        let key = SettingKey::ArduinoIdePath.qualified(platform);
        assert!(
            record.get(&key).is_some_and(|v| !v.is_empty()),
            "{key} must be set in the bundled config"
        );
    }
}

#[cfg(unix)]
#[test]
fn test_bundled_config_resolves_per_platform() {
    // Arrange
    let record = ini::parse(BUNDLED_CONFIG).expect("parse");
    let app_dir = Path::new("/opt/visualino");
    let lookup = |platform: Platform, key: SettingKey| {
        resolve_setting(record.get(&key.qualified(platform)), key, app_dir)
    };

    // Act / Assert – relative values land under the install directory
    assert_eq!(
        lookup(Platform::Mac, SettingKey::HtmlIndex),
        app_dir.join("../Resources/html/index.html")
    );
    assert_eq!(
        lookup(Platform::Windows, SettingKey::HtmlIndex),
        app_dir.join("html/index.html")
    );
    // Empty and missing values both fall back to the defaults.
    assert_eq!(
        lookup(Platform::Windows, SettingKey::TmpDirName),
        Path::new("/tmp/visualino/")
    );
    assert_eq!(
        lookup(Platform::Linux, SettingKey::TmpFileName),
        Path::new("/tmp/visualino/visualino.ino")
    );
}

#[test]
fn test_rewritten_file_keeps_other_namespaces() {
    // Arrange
    let mut record = ini::parse(BUNDLED_CONFIG).expect("parse");

    // Act – update one namespace and write the file back out
    record.insert(
        SettingKey::ArduinoIdePath.qualified(Platform::Linux),
        "/opt/arduino-1.8.19/arduino",
    );
    let reparsed = ini::parse(&ini::serialize(&record)).expect("reparse");

    // Assert
    assert_eq!(reparsed, record);
    assert_eq!(
        reparsed.get("windows/arduino_ide_path"),
        Some("arduino\\arduino.exe")
    );
    assert_eq!(
        reparsed.get("linux/arduino_ide_path"),
        Some("/opt/arduino-1.8.19/arduino")
    );
}

#[test]
fn test_flat_keys_and_sections_describe_the_same_setting() {
    let flat = ini::parse("linux/arduino_ide_path=/custom/arduino\n").expect("parse");
    let sectioned = ini::parse("[linux]\narduino_ide_path=/custom/arduino\n").expect("parse");
    assert_eq!(flat, sectioned);
}
