use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaintError>;

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("There was a problem fetching data from {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("No daily contribution counts found in calendar")]
    NoData,
    #[error("Cannot rasterize text: {0}")]
    Rasterize(String),
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Image error: {0}")]
    Image(#[from] Box<image::ImageError>),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Manual From implementation for unboxed to boxed conversion
impl From<image::ImageError> for PaintError {
    fn from(err: image::ImageError) -> Self {
        PaintError::Image(Box::new(err))
    }
}
