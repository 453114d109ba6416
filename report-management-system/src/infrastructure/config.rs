use std::path::PathBuf;

use serde::Deserialize;

/// アプリケーション設定
///
/// `config.yaml`（任意）に環境変数を上書きで重ねる。ネストは
/// `__` 区切り（例: `MAIL__USERNAME`, `NOTIFICATION__CHECK_INTERVAL`）。
#[derive(Default, Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

#[derive(Clone, Deserialize, Debug)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_bind_address")]
    pub bind_address: String,
    #[serde(default = "HostConfig::default_bind_port")]
    pub bind_port: u16,
}

impl HostConfig {
    fn default_bind_address() -> String {
        "0.0.0.0".to_string()
    }
    fn default_bind_port() -> u16 {
        8080
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_bind_address(),
            bind_port: Self::default_bind_port(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
}

impl DatabaseConfig {
    fn default_url() -> String {
        "sqlite://report_management.db?mode=rwc".to_string()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct UploadConfig {
    #[serde(default = "UploadConfig::default_folder")]
    pub folder: PathBuf,
}

impl UploadConfig {
    fn default_folder() -> PathBuf {
        "uploads".into()
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            folder: Self::default_folder(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct MailConfig {
    #[serde(default = "MailConfig::default_server")]
    pub server: String,
    #[serde(default = "MailConfig::default_port")]
    pub port: u16,
    #[serde(default = "MailConfig::default_use_tls")]
    pub use_tls: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub default_sender: Option<String>,
    #[serde(default = "MailConfig::default_enabled")]
    pub enabled: bool,
}

impl MailConfig {
    fn default_server() -> String {
        "smtp.gmail.com".to_string()
    }
    fn default_port() -> u16 {
        587
    }
    fn default_use_tls() -> bool {
        true
    }
    fn default_enabled() -> bool {
        true
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            server: Self::default_server(),
            port: Self::default_port(),
            use_tls: Self::default_use_tls(),
            username: None,
            password: None,
            default_sender: None,
            enabled: Self::default_enabled(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct NotificationConfig {
    /// 通知チェック間隔（秒）
    #[serde(default = "NotificationConfig::default_check_interval")]
    pub check_interval: u64,
    #[serde(default = "NotificationConfig::default_enabled")]
    pub enabled: bool,
}

impl NotificationConfig {
    fn default_check_interval() -> u64 {
        60
    }
    fn default_enabled() -> bool {
        true
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            check_interval: Self::default_check_interval(),
            enabled: Self::default_enabled(),
        }
    }
}

pub fn build_config() -> anyhow::Result<AppConfig> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default().separator("__"))
        .build()?;
    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = AppConfig::default();
        assert_eq!(config.host.bind_port, 8080);
        assert_eq!(config.mail.server, "smtp.gmail.com");
        assert_eq!(config.mail.port, 587);
        assert!(config.mail.use_tls);
        assert!(config.notification.enabled);
        assert_eq!(config.notification.check_interval, 60);
        assert_eq!(config.upload.folder, PathBuf::from("uploads"));
    }
}
