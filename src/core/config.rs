use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "un segreto meno bello";

// limiti accettati da bcrypt
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

// il pool tiene sempre almeno una connessione aperta, quindi 0 non è valido
fn parse_max_connections(value: &str) -> Result<u32, String> {
    value
        .parse::<u32>()
        .ok()
        .filter(|max| *max > 0)
        .ok_or_else(|| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: Option<u64>,
    pub bcrypt_cost: u32,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:profiles.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = parse_max_connections(
            &env::var("MAX_DB_CONNECTIONS").unwrap_or_else(|_| "10".to_string()),
        )?;

        // assente = nessun limite di vita per le connessioni
        let connection_lifetime_secs = match env::var("DB_CONNECTION_LIFETIME_SECS") {
            Ok(value) => Some(value.parse::<u64>().map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?),
            Err(_) => None,
        };

        let bcrypt_cost = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string())
            .parse::<u32>()
            .ok()
            .filter(|cost| BCRYPT_COST_RANGE.contains(cost))
            .ok_or_else(|| "Invalid BCRYPT_COST: must be a number between 4 and 31".to_string())?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            jwt_secret,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            bcrypt_cost,
            app_env,
        })
    }

    /// Indirizzo di bind nel formato host:porta
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}", self.bind_address());
        info!("   Database: {}", Self::mask_url(&self.database_url));
        info!("   Max DB Connections: {}", self.max_connections);
        match self.connection_lifetime_secs {
            Some(secs) => info!("   Connection Lifetime: {}s", secs),
            None => info!("   Connection Lifetime: unlimited"),
        }
        info!("   Bcrypt Cost: {}", self.bcrypt_cost);
        if self.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("   JWT Secret: USING DEFAULT (INSECURE!)");
        } else {
            info!("   JWT Secret: custom secret configured");
        }
    }

    /// Maschera le credenziali nell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        // URL senza credenziali (es. sqlite) si possono mostrare
        if url.starts_with("sqlite:") {
            return url.to_string();
        }
        "***".to_string()
    }
}
