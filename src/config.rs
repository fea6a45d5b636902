/// Runtime configuration
///
/// Settings come from an optional TOML file, then command-line flags and
/// environment variables override individual values. Without a backend URL
/// the app runs against the offline catalog.
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Parser)]
#[command(name = "pawadopt")]
#[command(about = "Browse, list and adopt rescued pets", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PAWADOPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the hosted backend, e.g. https://xyz.supabase.co
    #[arg(long, env = "PAWADOPT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Public (anon) API key of the hosted backend
    #[arg(long, env = "PAWADOPT_ANON_KEY", hide_env_values = true)]
    pub anon_key: Option<String>,

    /// Ignore any hosted backend and use the local catalog
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Directory for the offline catalog and uploads
    #[arg(long, env = "PAWADOPT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Screen to open first, e.g. "/adopt?type=dog" or "/pet/3"
    pub route: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub backend: BackendSection,
    pub email: EmailSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendSection {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub pets_table: Option<String>,
    pub favorites_table: Option<String>,
    pub image_bucket: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailSection {
    pub endpoint: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

/// Connection settings for the hosted backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Base URL without a trailing slash
    pub url: String,
    pub anon_key: String,
    pub pets_table: String,
    pub favorites_table: String,
    pub image_bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// `None` selects the offline catalog
    pub remote: Option<RemoteConfig>,
    /// `None` selects the dry-run mailer
    pub email: Option<EmailConfig>,
    pub start_route: Option<String>,
}

impl AppConfig {
    /// Resolve the CLI, the config file it points at (or the default one), and defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::read(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => FileConfig::read(&path)?,
                _ => FileConfig::default(),
            },
        };
        Self::resolve(cli, file)
    }

    /// Merge CLI overrides into file settings
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let data_dir = cli
            .data_dir
            .clone()
            .or(file.data_dir)
            .or_else(default_data_dir)
            .ok_or_else(|| Error::Config("could not determine a data directory".into()))?;

        let url = cli.backend_url.clone().or(file.backend.url);
        let anon_key = cli.anon_key.clone().or(file.backend.anon_key);

        let remote = match (cli.offline, url) {
            (true, _) | (false, None) => None,
            (false, Some(url)) => {
                let anon_key = anon_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
                    Error::Config("a backend url needs an anon_key as well".into())
                })?;
                Some(RemoteConfig {
                    url: url.trim_end_matches('/').to_string(),
                    anon_key,
                    pets_table: file.backend.pets_table.unwrap_or_else(|| "pets".into()),
                    favorites_table: file
                        .backend
                        .favorites_table
                        .unwrap_or_else(|| "fav_pets".into()),
                    image_bucket: file
                        .backend
                        .image_bucket
                        .unwrap_or_else(|| "pet-images".into()),
                })
            }
        };

        let email = match (
            file.email.service_id,
            file.email.template_id,
            file.email.public_key,
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailConfig {
                endpoint: file
                    .email
                    .endpoint
                    .unwrap_or_else(|| DEFAULT_EMAIL_ENDPOINT.into()),
                service_id,
                template_id,
                public_key,
            }),
            _ => None,
        };

        Ok(AppConfig {
            data_dir,
            remote,
            email,
            start_route: cli.route.clone(),
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("pawadopt.db")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pawadopt").join("config.toml"))
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("pawadopt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["pawadopt", "--data-dir", "/tmp/pawadopt-test"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_backend_means_offline() {
        let config = AppConfig::resolve(&cli(&[]), FileConfig::default()).unwrap();
        assert!(config.remote.is_none());
        assert!(config.email.is_none());
        assert_eq!(config.db_path(), PathBuf::from("/tmp/pawadopt-test/pawadopt.db"));
    }

    #[test]
    fn test_file_settings_with_defaults() {
        let file = FileConfig::parse(
            r#"
            [backend]
            url = "https://demo.supabase.co/"
            anon_key = "anon"
            pets_table = "listings"

            [email]
            service_id = "svc"
            template_id = "tpl"
            public_key = "pk"
            "#,
        )
        .unwrap();

        let config = AppConfig::resolve(&cli(&[]), file).unwrap();
        let remote = config.remote.unwrap();
        assert_eq!(remote.url, "https://demo.supabase.co");
        assert_eq!(remote.pets_table, "listings");
        assert_eq!(remote.favorites_table, "fav_pets");
        assert_eq!(remote.image_bucket, "pet-images");
        assert_eq!(config.email.unwrap().endpoint, DEFAULT_EMAIL_ENDPOINT);
    }

    #[test]
    fn test_cli_overrides_and_offline_flag() {
        let file = FileConfig {
            backend: BackendSection {
                url: Some("https://file.example".into()),
                anon_key: Some("file-key".into()),
                ..BackendSection::default()
            },
            ..FileConfig::default()
        };

        let config = AppConfig::resolve(
            &cli(&["--backend-url", "https://cli.example", "/pet/2"]),
            file.clone(),
        )
        .unwrap();
        assert_eq!(config.remote.unwrap().url, "https://cli.example");
        assert_eq!(config.start_route.as_deref(), Some("/pet/2"));

        let offline = AppConfig::resolve(&cli(&["--offline"]), file).unwrap();
        assert!(offline.remote.is_none());
    }

    #[test]
    fn test_backend_without_key_is_rejected() {
        let file = FileConfig {
            backend: BackendSection {
                url: Some("https://file.example".into()),
                ..BackendSection::default()
            },
            ..FileConfig::default()
        };
        assert!(matches!(
            AppConfig::resolve(&cli(&[]), file),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(FileConfig::parse("colour = \"blue\"").is_err());
    }
}
