use thiserror::Error;

/// Rejected render settings. Raised once, before any pixel is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("raster must be at least 1x1, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },
    #[error("zoom must be nonzero")]
    ZeroZoom,
    #[error("view parameter `{0}` is not finite")]
    NonFiniteView(&'static str),
    #[error("escape threshold must be finite and positive, got {0}")]
    BadThreshold(f64),
    #[error("need at least {bands} iterations to fill {bands} color bands, got {max_iterations}")]
    TooFewIterations { max_iterations: u32, bands: u32 },
}
