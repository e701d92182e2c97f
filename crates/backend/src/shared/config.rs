use crate::shared::error::HostError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Built frontend bundle (index.html, wasm, styles, service.html)
    pub dist_dir: String,
    /// Catalog data file, checked once at startup
    pub catalog_file: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[assets]
dist_dir = "dist"
catalog_file = "dist/data.json"
"#;

/// Env variable that overrides `server.port`
pub const PORT_ENV: &str = "HOST_PORT";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> Result<Config, HostError> {
    let mut config = match config_path_next_to_exe() {
        Some(path) if path.exists() => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path).map_err(|source| HostError::Read {
                path: path.display().to_string(),
                source,
            })?;
            parse_config(&contents)?
        }
        Some(path) => {
            tracing::warn!("config.toml not found at: {}", path.display());
            default_config()?
        }
        None => default_config()?,
    };

    apply_port_override(&mut config, std::env::var(PORT_ENV).ok().as_deref())?;
    Ok(config)
}

fn config_path_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

fn default_config() -> Result<Config, HostError> {
    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<Config, HostError> {
    Ok(toml::from_str(contents)?)
}

pub fn apply_port_override(config: &mut Config, value: Option<&str>) -> Result<(), HostError> {
    if let Some(raw) = value {
        config.server.port = raw
            .trim()
            .parse()
            .map_err(|_| HostError::Port(raw.to_string()))?;
    }
    Ok(())
}

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.server.host, self.server.port).parse()?)
    }

    /// Resolves a configured path. Relative paths are taken from the
    /// current directory.
    pub fn resolve(path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(p))
                .unwrap_or_else(|_| p.to_path_buf())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.assets.dist_dir, "dist");
        assert_eq!(config.assets.catalog_file, "dist/data.json");
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_port_override() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        apply_port_override(&mut config, None).unwrap();
        assert_eq!(config.server.port, 8080);

        apply_port_override(&mut config, Some(" 9000 ")).unwrap();
        assert_eq!(config.server.port, 9000);

        assert!(matches!(
            apply_port_override(&mut config, Some("http")),
            Err(HostError::Port(_))
        ));
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_incomplete_config_rejected() {
        assert!(matches!(
            parse_config("[server]\nhost = \"0.0.0.0\"\n"),
            Err(HostError::Config(_))
        ));
    }

    #[test]
    fn test_absolute_path_kept() {
        let abs = if cfg!(windows) { "C:\\data\\catalog.json" } else { "/srv/catalog.json" };
        assert_eq!(Config::resolve(abs), PathBuf::from(abs));
    }
}
