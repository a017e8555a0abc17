//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_default_settings_match_documented_defaults() {
    tracing::debug!("Testing default settings");

    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8698);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.vcard.default_version, "3.0");
    assert_eq!(settings.vcard.line_ending, "lf");
    assert_eq!(settings.vcard.default_filename, "contact.vcf");
    assert_eq!(settings.vcard.content_disposition, "attachment");
}

#[test]
fn test_bind_addr() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 5800,
    };

    assert_eq!(config.bind_addr(), "127.0.0.1:5800");
}

#[test]
fn test_vcard_config_clone() {
    let config = VCardConfig {
        default_version: "4.0".to_string(),
        ..VCardConfig::default()
    };

    let cloned = config.clone();
    assert_eq!(cloned.default_version, "4.0");
    assert_eq!(cloned.default_filename, config.default_filename);
}

#[test]
fn test_settings_deserialize_partial_toml() {
    let settings: Settings = Config::builder()
        .add_source(config::File::from_str(
            "[vcard]\ndefault_version = \"4.0\"\nline_ending = \"crlf\"\ndefault_filename = \"card.vcf\"\ncontent_disposition = \"inline\"\n",
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(config::Config::try_deserialize)
        .expect("settings should deserialize");

    assert_eq!(settings.vcard.default_version, "4.0");
    assert_eq!(settings.vcard.line_ending, "crlf");
    assert_eq!(settings.vcard.content_disposition, "inline");
    // Sections missing from the source fall back to defaults
    assert_eq!(settings.server.port, 8698);
    assert_eq!(settings.logging.level, "debug");
}
