use axum::body::Bytes;

use crate::core::config::MapConfig;
use crate::core::error::{AppError, Result};

const MAX_ZOOM: u8 = 19;
const DEFAULT_TILE_CONTENT_TYPE: &str = "image/png";

/// Tile imagery fetched from the public tile service
pub struct TileImage {
    pub content_type: String,
    pub bytes: Bytes,
}

/// Pass-through proxy for map tiles
///
/// No caching and no retries; an upstream failure surfaces as 502.
pub struct TileService {
    client: reqwest::Client,
    url_template: String,
    subdomains: Vec<String>,
}

impl TileService {
    pub fn new(config: &MapConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("CivicRadar/", env!("CARGO_PKG_VERSION"), " (civic-issue-map)"))
            .timeout(config.tile_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url_template: config.tile_url.clone(),
            subdomains: config.tile_subdomains.clone(),
        })
    }

    /// Upstream URL for one tile, rotating over the configured subdomains
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> Result<String> {
        if z > MAX_ZOOM {
            return Err(AppError::BadRequest(format!(
                "Zoom level {} exceeds maximum of {}",
                z, MAX_ZOOM
            )));
        }
        let span = 1u64 << z;
        if u64::from(x) >= span || u64::from(y) >= span {
            return Err(AppError::BadRequest(format!(
                "Tile {}/{}/{} is outside the grid",
                z, x, y
            )));
        }

        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let idx = (u64::from(x) + u64::from(y)) % self.subdomains.len() as u64;
            self.subdomains[idx as usize].as_str()
        };

        Ok(self
            .url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string()))
    }

    pub async fn fetch(&self, z: u8, x: u32, y: u32) -> Result<TileImage> {
        let url = self.tile_url(z, x, y)?;
        tracing::debug!("Fetching tile {}/{}/{} -> {}", z, x, y, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Tile request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Tile request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Tile service returned status: {}", response.status());
            return Err(AppError::ExternalServiceError(format!(
                "Tile service returned status {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_TILE_CONTENT_TYPE)
            .to_string();

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read tile body: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to read tile body: {}", e))
        })?;

        Ok(TileImage {
            content_type,
            bytes,
        })
    }
}
