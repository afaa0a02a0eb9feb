use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid thumbnail size 0 along the {axis} axis")]
    ZeroSizedAxis { axis: &'static str },

    #[error("thumbnail channel axis must hold 3 samples, found {samples}")]
    BadChannelCount { samples: usize },

    #[error("pixel buffer length {actual} does not match {width}x{height} RGB samples")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },
}
