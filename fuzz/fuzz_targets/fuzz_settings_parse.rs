//! Fuzz target: settings file parser
//!
//! Feeds arbitrary bytes to `SettingsFile::parse` and verifies:
//! - No panics under arbitrary input
//! - Anything accepted also passes `PanelConfig::validate`
//!
//! cargo fuzz run fuzz_settings_parse

#![no_main]

use carpanel::adapters::settings_file::SettingsFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = SettingsFile::parse(text) {
        assert!(config.validate().is_ok());
        assert!(!config.separator.contains('\n'));
    }
});
