use exhibit_config::ConfigGuardRailError;
use thiserror::Error;

use crate::types::CarouselKey;

/// Reasons a carousel (or the whole page) could not be brought up.
///
/// None of these are fatal to the page: the embedding context logs them and
/// leaves the affected region in its static markup.
#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("{key}: carousel region not found")]
    MissingRegion { key: CarouselKey },

    #[error("{key}: no slides found")]
    NoSlides { key: CarouselKey },

    #[error("{key}: slide provider failed: {message}")]
    Provider { key: CarouselKey, message: String },

    #[error("invalid exhibit configuration: {0}")]
    Config(#[from] ConfigGuardRailError),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
