pub mod models;
pub mod repository;

pub use repository::ShowRepositoryImpl;

use crate::modules::show::domain::{Season, Show};
use crate::shared::infrastructure::AssignIds;

crate::impl_assign_ids!(crate::modules::show::domain::Episode);

impl AssignIds for Season {
    fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i32) {
        if self.id.is_none() {
            self.id = Some(next_id());
        }
        for episode in &mut self.episodes {
            episode.assign_ids(next_id);
        }
    }
}

impl AssignIds for Show {
    fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i32) {
        if self.id.is_none() {
            self.id = Some(next_id());
        }
        for season in &mut self.seasons {
            season.assign_ids(next_id);
        }
    }
}
