pub mod episode;
pub mod season;
pub mod show;

pub use episode::Episode;
pub use season::Season;
pub use show::Show;
