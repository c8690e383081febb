pub mod format;
pub mod game;

pub use format::Format;
pub use game::Game;
