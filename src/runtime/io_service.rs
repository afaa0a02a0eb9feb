use std::path::Path;

use crate::formats::read_thumbnail;
use crate::model::Thumbnail;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct IoService;

impl IoService {
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Thumbnail> {
        Ok(read_thumbnail(path)?)
    }
}
