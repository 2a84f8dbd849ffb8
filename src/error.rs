use thiserror::Error;

/// Errors surfaced by the sketchpad core.
///
/// Undo/redo on an empty history and blank custom-sticker input are not
/// errors; those operations simply do nothing.
#[derive(Debug, Error)]
pub enum SketchError {
    /// No usable drawing surface could be created. Fatal at startup.
    #[error("render target unavailable ({width}x{height})")]
    MissingRenderTarget { width: u32, height: u32 },

    /// The exported raster could not be encoded.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration parsed but holds values the sketchpad cannot use.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SketchError>;
