use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use linkweir::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Queue file: {}", config.output.queue_path);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn valid_config_content() -> &'static str {
        r#"
[harvest]
base-prefix = "https://app.example.com/api/guilds/"
page-template = "https://example.com/servers?page="

[user-agent]
crawler-name = "TestCrawler"
crawler-version = "1.0"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"

[output]
queue-path = "./data/pending_links.csv"
canonical-path = "./data/canonical_urls.csv"
log-path = "./linkweir.log"
"#
    }

    #[test]
    fn test_load_valid_config() {
        let file = create_temp_config(valid_config_content());
        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.harvest.base_prefix,
            "https://app.example.com/api/guilds/"
        );
        assert_eq!(
            config.harvest.page_template,
            "https://example.com/servers?page="
        );
        assert_eq!(config.user_agent.crawler_name, "TestCrawler");
        assert_eq!(config.output.queue_path, "./data/pending_links.csv");
    }

    #[test]
    fn test_missing_section() {
        let content = r#"
[harvest]
base-prefix = "https://app.example.com/api/guilds/"
page-template = "https://example.com/servers?page="
"#;
        let file = create_temp_config(content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let file = create_temp_config("this is not toml [");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
