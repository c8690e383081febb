pub mod models;
pub mod repository;

pub use repository::MusicRepositoryImpl;

use crate::modules::music::domain::Music;
use crate::shared::infrastructure::AssignIds;

crate::impl_assign_ids!(crate::modules::music::domain::Song);

impl AssignIds for Music {
    fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i32) {
        if self.id.is_none() {
            self.id = Some(next_id());
        }
        for song in &mut self.songs {
            song.assign_ids(next_id);
        }
    }
}
