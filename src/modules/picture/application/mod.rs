pub mod dto;
pub mod validator;

pub use dto::PictureDto;
pub use validator::{validate_picture_reference, PictureValidator};

use crate::modules::picture::domain::Picture;
use crate::shared::application::CatalogFacade;

pub type PictureFacade = CatalogFacade<Picture, PictureDto>;
