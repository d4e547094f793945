// Standard library
use std::path::Path;

// 3rd party crates
use config::{Config, File, FileFormat};

// Current module imports
use super::errors::{SettingsError, ValidationError};
use super::types::Settings;

impl Settings {
    /// Loads and validates settings from the JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let config_file: &str = path.to_str().ok_or_else(|| {
            config::ConfigError::Message(
                "Configuration file path contains invalid UTF-8 characters".into(),
            )
        })?;

        let config: Config = Config::builder()
            .add_source(File::new(config_file, FileFormat::Json))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_token.trim().is_empty() {
            return Err(ValidationError::MissingApiToken);
        }

        if self.zone_id.trim().is_empty() {
            return Err(ValidationError::MissingZoneId);
        }

        if self.domain.trim().is_empty() {
            return Err(ValidationError::MissingDomain);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_a_complete_config() {
        let file = write_config(
            r#"{
                "api_token": "token",
                "zone_id": "zone123",
                "domain": "home.example.com",
                "proxied": true,
                "update_interval_mins": 5
            }"#,
        );

        let settings = Settings::load(file.path()).expect("load succeeds");
        assert_eq!(settings.zone_id, "zone123");
        assert_eq!(settings.domain, "home.example.com");
        assert!(settings.proxied);
        assert_eq!(settings.update_interval_mins, 5);
    }

    #[test]
    fn zero_interval_is_accepted() {
        // 0 selects one-shot mode, so it must pass validation.
        let file = write_config(
            r#"{
                "api_token": "token",
                "zone_id": "zone123",
                "domain": "home.example.com",
                "proxied": false,
                "update_interval_mins": 0
            }"#,
        );

        let settings = Settings::load(file.path()).expect("load succeeds");
        assert_eq!(settings.update_interval_mins, 0);
    }

    #[test]
    fn missing_field_fails_to_load() {
        let file = write_config(
            r#"{
                "api_token": "token",
                "zone_id": "zone123",
                "proxied": false,
                "update_interval_mins": 5
            }"#,
        );

        let result = Settings::load(file.path());
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn malformed_json_fails_to_load() {
        let file = write_config("{ not json");

        let result = Settings::load(file.path());
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn empty_api_token_fails_validation() {
        let file = write_config(
            r#"{
                "api_token": " ",
                "zone_id": "zone123",
                "domain": "home.example.com",
                "proxied": false,
                "update_interval_mins": 5
            }"#,
        );

        let result = Settings::load(file.path());
        assert!(matches!(
            result,
            Err(SettingsError::Validation(ValidationError::MissingApiToken))
        ));
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let settings = Settings {
            api_token: "secret-token-value".to_string(),
            zone_id: "zone123".to_string(),
            domain: "home.example.com".to_string(),
            proxied: false,
            update_interval_mins: 5,
        };

        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("secret-token-value"));
        assert!(rendered.contains("<REDACTED>"));
    }
}
