use color_eyre::eyre::{Result, WrapErr};
use std::env;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub github_api: String,
    /// Read from the environment but not wired into any middleware.
    pub cors_origin: String,
    pub cors_methods: String,
}

impl Config {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();

        // PORT wins over SERVER_PORT; a value that is set but not numeric is
        // a startup error rather than a silent fallback.
        let port = match env::var("PORT").or_else(|_| env::var("SERVER_PORT")) {
            Ok(raw) => raw
                .parse()
                .wrap_err_with(|| format!("Invalid server port {raw:?}"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            host: "0.0.0.0".parse().wrap_err("Invalid host IP address")?,
            port,
            github_api: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            cors_methods: env::var("CORS_METHODS").unwrap_or_else(|_| "GET".to_string()),
        })
    }
}
