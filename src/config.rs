use anyhow::{anyhow, Result};
use sqlx::postgres::PgConnectOptions;
use std::env;

/// PostgreSQL connection settings for the game statistics database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = required_var("TELEGRAM_BOT_TOKEN")?;

        let host = required_var("PG_HOST")?;
        let port = required_var("PG_PORT")?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid PG_PORT"))?;
        let database = required_var("PG_DATABASE")?;
        let username = required_var("PG_USERNAME")?;
        let password = required_var("PG_PASSWORD")?;

        Ok(Config {
            telegram_bot_token: token,
            database: DatabaseConfig {
                host,
                port,
                database,
                username,
                password,
            },
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    let value = env::var(name).map_err(|_| anyhow!("{name} must be set"))?;

    if value.trim().is_empty() {
        return Err(anyhow!("{name} must be set"));
    }

    Ok(value)
}
