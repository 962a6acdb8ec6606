use std::path::Path;

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use tracing::{debug, warn};

/// Dotenv file read from the working directory at startup.
pub const DOTENV_FILE: &str = ".env";

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    /// Left empty when unset; the first completion call then fails with an
    /// authentication error instead of the server refusing to start.
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    #[serde(default = "default_book_docs_path")]
    pub book_docs_path: String,
    #[serde(default = "default_assistant_specialization")]
    pub assistant_specialization: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_chat_max_body_bytes")]
    pub chat_max_body_bytes: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_book_docs_path() -> String {
    "../physical-AI-humanoid-robotics-book/docs".to_string()
}

fn default_assistant_specialization() -> String {
    "Physical AI & Humanoid Robotics".to_string()
}

const fn default_http_port() -> u16 {
    8000
}

const fn default_chat_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_base_url: default_base_url(),
            chat_model: default_chat_model(),
            book_docs_path: default_book_docs_path(),
            assistant_specialization: default_assistant_specialization(),
            http_port: default_http_port(),
            chat_max_body_bytes: default_chat_max_body_bytes(),
        }
    }
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    load_config(Path::new(DOTENV_FILE), std::env::vars())
}

/// Layers an optional `config` file, the dotenv file at `dotenv_path`, then
/// `environment`. Later sources win, so real environment variables override
/// values from the dotenv file.
pub fn load_config<I>(dotenv_path: &Path, environment: I) -> Result<AppConfig, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut variables = read_dotenv(dotenv_path);
    variables.extend(environment);

    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default().source(Some(variables)))
        .build()?;

    config.try_deserialize()
}

/// Reads `KEY=value` pairs from a dotenv file; a missing file yields none.
fn read_dotenv(path: &Path) -> Map<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(entries) => entries
            .filter_map(|entry| match entry {
                Ok(pair) => Some(pair),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping malformed dotenv line");
                    None
                }
            })
            .collect(),
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "No dotenv file found");
            Map::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read dotenv file");
            Map::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn config_from_toml(source: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = config_from_toml("").expect("empty source should deserialize");

        assert!(config.openai_api_key.is_empty());
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.chat_model, "gpt-3.5-turbo");
        assert_eq!(
            config.book_docs_path,
            "../physical-AI-humanoid-robotics-book/docs"
        );
        assert_eq!(
            config.assistant_specialization,
            "Physical AI & Humanoid Robotics"
        );
        assert_eq!(config.http_port, 8000);
        assert_eq!(config.chat_max_body_bytes, 65536);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config = config_from_toml(
            r#"
            openai_api_key = "sk-test"
            chat_model = "gpt-4o-mini"
            book_docs_path = "/srv/book/docs"
            http_port = 3000
            "#,
        )
        .expect("valid source should deserialize");

        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.book_docs_path, "/srv/book/docs");
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
    }

    fn write_dotenv(contents: &str) -> tempfile::TempDir {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join(DOTENV_FILE), contents)
            .expect("Failed to write dotenv file");
        temp_dir
    }

    #[test]
    fn test_dotenv_file_supplies_api_key() {
        let temp_dir = write_dotenv("OPENAI_API_KEY=sk-from-dotenv\nHTTP_PORT=9000\n");

        let config = load_config(&temp_dir.path().join(DOTENV_FILE), Vec::new())
            .expect("dotenv values should deserialize");

        assert_eq!(config.openai_api_key, "sk-from-dotenv");
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.chat_model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_environment_overrides_dotenv_file() {
        let temp_dir = write_dotenv("OPENAI_API_KEY=sk-from-dotenv\nCHAT_MODEL=gpt-4o-mini\n");

        let config = load_config(
            &temp_dir.path().join(DOTENV_FILE),
            vec![("OPENAI_API_KEY".to_string(), "sk-from-env".to_string())],
        )
        .expect("layered values should deserialize");

        assert_eq!(config.openai_api_key, "sk-from-env");
        assert_eq!(config.chat_model, "gpt-4o-mini");
    }

    #[test]
    fn test_missing_dotenv_file_is_not_an_error() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

        let config = load_config(&temp_dir.path().join(DOTENV_FILE), Vec::new())
            .expect("missing dotenv file should fall back to defaults");

        assert!(config.openai_api_key.is_empty());
        assert_eq!(config.http_port, 8000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = config_from_toml(r#"http_port = "not-a-port""#);
        assert!(result.is_err());
    }
}
