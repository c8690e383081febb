// Catalog record types, one bounded context each
pub mod book;
pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod picture;
pub mod show;
