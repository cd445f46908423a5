use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub mail: MailConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            jwt_secret: std::env::var("JWT_SECRET")
                .context("Cannot load JWT_SECRET env variable")?,
            mail: MailConfig::from_env()?,
        })
    }
}

/// SMTP settings for the order notification mail. With
/// `MAIL_DEVELOPMENT_MODE=true` (the default) nothing is sent and the
/// rendered message is logged instead, so the SMTP variables may be omitted.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from: String,
    pub notify_to: String,
    pub development_mode: bool,
}

impl MailConfig {
    pub fn from_env() -> Result<Self> {
        let development_mode = std::env::var("MAIL_DEVELOPMENT_MODE")
            .map(|v| v.parse().unwrap_or(true))
            .unwrap_or(true);

        if development_mode {
            return Ok(Self {
                smtp_host: String::new(),
                smtp_port: 587,
                smtp_username: String::new(),
                smtp_password: String::new(),
                from: std::env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "noreply@example.com".to_string()),
                notify_to: std::env::var("MAIL_NOTIFY_TO")
                    .unwrap_or_else(|_| "orders@example.com".to_string()),
                development_mode: true,
            });
        }

        Ok(Self {
            smtp_host: std::env::var("SMTP_HOST").context("Cannot load SMTP_HOST env variable")?,
            smtp_port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .context("SMTP_PORT must be a number")?,
            smtp_username: std::env::var("SMTP_USERNAME")
                .context("Cannot load SMTP_USERNAME env variable")?,
            smtp_password: std::env::var("SMTP_PASSWORD")
                .context("Cannot load SMTP_PASSWORD env variable")?,
            from: std::env::var("MAIL_FROM").context("Cannot load MAIL_FROM env variable")?,
            notify_to: std::env::var("MAIL_NOTIFY_TO")
                .context("Cannot load MAIL_NOTIFY_TO env variable")?,
            development_mode: false,
        })
    }
}
