use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Mounts the `/api/admin/*` write routes. There is no authentication,
    /// so keep this off anywhere the API is public.
    pub admin_enabled: bool,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment. Panics on missing or malformed values.
    pub fn from_env() -> Self {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").expect("DATABASE_URL must be set");

        let is_development = lookup("RUST_ENV").is_some_and(|v| v == "development");

        Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10),
            admin_enabled: parse_flag(&lookup, "ADMIN_ENABLED", is_development),
            run_migrations: parse_flag(&lookup, "RUN_MIGRATIONS", false),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .unwrap_or_else(|_| panic!("Invalid {} value: {}", key, raw)),
        None => default,
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => default,
        Some("1") | Some("true") | Some("yes") => true,
        Some("0") | Some("false") | Some("no") => false,
        Some(other) => panic!("Invalid {} value: {}", key, other),
    }
}
