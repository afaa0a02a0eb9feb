use crate::model::Thumbnail;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct ThumbnailService;

impl ThumbnailService {
    pub fn validate(&self, thumbnail: &Thumbnail) -> Result<()> {
        thumbnail.validate()?;
        Ok(())
    }
}
