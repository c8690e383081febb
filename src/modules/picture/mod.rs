pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{PictureDto, PictureFacade, PictureValidator};
pub use domain::Picture;
pub use infrastructure::PictureRepositoryImpl;
