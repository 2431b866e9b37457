use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Invalid dimension: {0:?}")]
    InvalidDimension(String),

    #[error("Invalid surface size: {0}x{1}")]
    SurfaceSize(u32, u32),

    #[error("Bubble not found: {0}")]
    BubbleNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
