use serde::{Deserialize, Serialize};

use crate::modules::picture::domain::Picture;
use crate::shared::application::UpdateFrom;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureDto {
    pub id: Option<i32>,
    pub content: Option<Vec<u8>>,
    pub position: Option<i32>,
}

crate::impl_transfer_record!(PictureDto);

impl From<Picture> for PictureDto {
    fn from(picture: Picture) -> Self {
        Self {
            id: picture.id,
            content: Some(picture.content),
            position: picture.position,
        }
    }
}

impl From<PictureDto> for Picture {
    fn from(dto: PictureDto) -> Self {
        Self {
            id: dto.id,
            content: dto.content.unwrap_or_default(),
            position: dto.position,
        }
    }
}

impl UpdateFrom<PictureDto> for Picture {
    fn apply(&mut self, dto: PictureDto) {
        self.content = dto.content.unwrap_or_default();
    }
}
