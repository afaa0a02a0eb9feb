mod error;
mod image_type;
mod thumbnail;


pub use error::{CoreError, Result};
pub use image_type::ImageType;
pub use thumbnail::{Thumbnail, ThumbnailMeta};
