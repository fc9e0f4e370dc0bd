use thiserror::Error;

/// Errors that can occur while generating a set review
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Scryfall answered with a non-success status and no readable body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Scryfall answered with a structured error payload
    #[error("Scryfall error {code}: {details}")]
    ApiResponse { code: String, details: String },

    /// Card not found on Scryfall
    #[error("Card not found on Scryfall: {0}")]
    CardNotFound(String),

    /// Card has no usable image URI
    #[error("No image available for card: {0}")]
    NoImageAvailable(String),

    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Slide deck container could not be written
    #[error("Slide deck error: {0}")]
    Deck(#[from] zip::result::ZipError),

    /// Grades spreadsheet could not be written
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Run configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
