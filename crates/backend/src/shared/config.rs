/// Runtime configuration, read from the process environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://target/db/eventpass.db?mode=rwc";

/// Load configuration from the environment.
///
/// - `PORT` — listening port (default 3000)
/// - `DATABASE_URL` — store connection string (default: local SQLite file)
pub fn load_config() -> anyhow::Result<Config> {
    let port = match std::env::var("PORT") {
        Ok(raw) => parse_port(&raw)?,
        Err(_) => DEFAULT_PORT,
    };
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    Ok(Config { port, database_url })
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid PORT value: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_port() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(parse_port("not-a-port").is_err());
        assert!(parse_port("70000").is_err());
    }
}
