pub mod music;
pub mod song;

pub use music::Music;
pub use song::Song;
