use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::features::reports::models::{Coordinate, Locality};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub map: MapConfig,
    pub submission: SubmissionConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
    pub frontend_url: String,
}

/// Which durable backend holds the report and notification collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

/// What to do when the version marker matches but the stored report
/// collection is smaller than the built-in seed set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Replace the stored reports with the seed set
    RestoreIfSmaller,
    /// Keep whatever was stored; seed only when nothing was stored
    TrustStored,
}

impl SeedPolicy {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "restore-if-smaller" => Ok(SeedPolicy::RestoreIfSmaller),
            "trust-stored" => Ok(SeedPolicy::TrustStored),
            other => Err(format!(
                "SEED_POLICY must be 'restore-if-smaller' or 'trust-stored', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub dir: PathBuf,
    pub seed_policy: SeedPolicy,
}

/// Tile layer and initial viewport for the map views
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Template with `{s}`, `{z}`, `{x}` and `{y}` placeholders
    pub tile_url: String,
    pub tile_subdomains: Vec<String>,
    pub attribution: String,
    pub default_center: Coordinate,
    pub default_zoom: u8,
    pub tile_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    /// Used when neither the photo nor a map pick supplies a location
    pub default_coordinate: Coordinate,
    pub default_locality: Locality,
    pub category_suggestions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            map: MapConfig::from_env()?,
            submission: SubmissionConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    // Photos travel inline as data URIs
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = split_list(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
            frontend_url,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend = match env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "file" => StorageBackend::File,
            "memory" => StorageBackend::Memory,
            other => {
                return Err(format!(
                    "STORAGE_BACKEND must be 'file' or 'memory', got '{}'",
                    other
                ))
            }
        };

        let dir = PathBuf::from(env::var("STORAGE_DIR").unwrap_or_else(|_| "./data".to_string()));

        let seed_policy = SeedPolicy::parse(
            &env::var("SEED_POLICY").unwrap_or_else(|_| "restore-if-smaller".to_string()),
        )?;

        Ok(Self {
            backend,
            dir,
            seed_policy,
        })
    }
}

impl MapConfig {
    const DEFAULT_TILE_URL: &'static str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
    const DEFAULT_ATTRIBUTION: &'static str =
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
    const DEFAULT_ZOOM: u8 = 13;
    const DEFAULT_TILE_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let tile_url = env::var("MAP_TILE_URL").unwrap_or_else(|_| Self::DEFAULT_TILE_URL.to_string());
        let tile_subdomains =
            split_list(&env::var("MAP_TILE_SUBDOMAINS").unwrap_or_else(|_| "a,b,c".to_string()));
        let attribution =
            env::var("MAP_ATTRIBUTION").unwrap_or_else(|_| Self::DEFAULT_ATTRIBUTION.to_string());

        let default_center = Coordinate {
            lat: parse_f64("MAP_DEFAULT_LAT", 11.0168)?,
            lng: parse_f64("MAP_DEFAULT_LNG", 76.9558)?,
        };

        let default_zoom = env::var("MAP_DEFAULT_ZOOM")
            .unwrap_or_else(|_| Self::DEFAULT_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_DEFAULT_ZOOM must be a valid number".to_string())?;

        let tile_timeout_secs = env::var("MAP_TILE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TILE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "MAP_TILE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            tile_url,
            tile_subdomains,
            attribution,
            default_center,
            default_zoom,
            tile_timeout: Duration::from_secs(tile_timeout_secs),
        })
    }
}

impl SubmissionConfig {
    const DEFAULT_SUGGESTIONS: &'static str =
        "Pothole,Streetlight,Garbage,Tree Fall,Water Leak,Traffic,Infrastructure,Safety";

    pub fn from_env() -> Result<Self, String> {
        let default_coordinate = Coordinate {
            lat: parse_f64("DEFAULT_REPORT_LAT", 11.0168)?,
            lng: parse_f64("DEFAULT_REPORT_LNG", 76.9558)?,
        };

        let default_locality = Locality(
            env::var("DEFAULT_LOCALITY_CITY").unwrap_or_else(|_| "Coimbatore".to_string()),
            env::var("DEFAULT_LOCALITY_POSTAL_CODE").unwrap_or_else(|_| "641001".to_string()),
        );

        let category_suggestions = split_list(
            &env::var("CATEGORY_SUGGESTIONS").unwrap_or_else(|_| Self::DEFAULT_SUGGESTIONS.to_string()),
        );

        Ok(Self {
            default_coordinate,
            default_locality,
            category_suggestions,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Civic Radar API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Citizen issue reports, notifications and map views".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_f64(key: &str, default: f64) -> Result<f64, String> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_policy_parse() {
        assert_eq!(
            SeedPolicy::parse("restore-if-smaller").unwrap(),
            SeedPolicy::RestoreIfSmaller
        );
        assert_eq!(
            SeedPolicy::parse(" Trust-Stored ").unwrap(),
            SeedPolicy::TrustStored
        );
        assert!(SeedPolicy::parse("always").is_err());
    }

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(
            split_list(" Pothole, ,Garbage ,"),
            vec!["Pothole".to_string(), "Garbage".to_string()]
        );
    }
}
