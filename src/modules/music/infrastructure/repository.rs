use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{MusicChangeset, MusicRow, SongChangeset, SongRow};
use crate::modules::music::domain::{Music, Song};
use crate::schema::{music, songs};
use crate::shared::domain::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

pub struct MusicRepositoryImpl {
    db: Arc<Database>,
}

impl MusicRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn load_music(conn: &mut PgConnection, rows: Vec<MusicRow>) -> AppResult<Vec<Music>> {
    let music_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();

    let song_rows = songs::table
        .filter(songs::music_id.eq_any(&music_ids))
        .order((songs::position.asc(), songs::id.asc()))
        .select(SongRow::as_select())
        .load(conn)?;

    let mut songs_by_music: HashMap<i32, Vec<Song>> = HashMap::new();
    for row in song_rows {
        songs_by_music
            .entry(row.music_id)
            .or_default()
            .push(Song::from(row));
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let songs = songs_by_music.remove(&row.id).unwrap_or_default();
            row.into_music(songs)
        })
        .collect())
}

fn find_music(conn: &mut PgConnection, id: i32) -> AppResult<Option<Music>> {
    let row = music::table
        .find(id)
        .select(MusicRow::as_select())
        .first(conn)
        .optional()?;

    match row {
        Some(row) => Ok(load_music(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

/// Make the stored songs of `music_id` match `items`
fn write_songs(conn: &mut PgConnection, music_id: i32, items: &[Song]) -> AppResult<()> {
    let keep: Vec<i32> = items.iter().filter_map(|s| s.id).collect();
    diesel::delete(
        songs::table
            .filter(songs::music_id.eq(music_id))
            .filter(songs::id.ne_all(&keep)),
    )
    .execute(conn)?;

    for song in items {
        let record = SongChangeset::new(music_id, song);
        match song.id {
            Some(id) => {
                let updated = diesel::update(
                    songs::table.find(id).filter(songs::music_id.eq(music_id)),
                )
                .set(&record)
                .execute(conn)?;
                if updated == 0 {
                    return Err(AppError::not_found("Song", id));
                }
            }
            None => {
                diesel::insert_into(songs::table)
                    .values(&record)
                    .execute(conn)?;
            }
        }
    }
    Ok(())
}

fn update_music(conn: &mut PgConnection, item: &Music) -> AppResult<Music> {
    let id = item
        .id
        .ok_or_else(|| AppError::InvalidInput("Music without ID can't be updated".to_string()))?;

    let updated = diesel::update(music::table.find(id))
        .set(MusicChangeset::from(item))
        .execute(conn)?;
    if updated == 0 {
        return Err(AppError::not_found("Music", id));
    }

    write_songs(conn, id, &item.songs)?;
    find_music(conn, id)?.ok_or_else(|| AppError::not_found("Music", id))
}

fn insert_music(conn: &mut PgConnection, item: &Music) -> AppResult<Music> {
    let id: i32 = diesel::insert_into(music::table)
        .values(MusicChangeset::from(item))
        .returning(music::id)
        .get_result(conn)?;
    write_songs(conn, id, &item.songs)?;
    find_music(conn, id)?.ok_or_else(|| AppError::not_found("Music", id))
}

fn delete_music(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let deleted = diesel::delete(music::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::not_found("Music", id));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository<Music> for MusicRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Music>> {
        self.db
            .run(|conn| {
                let rows = music::table
                    .order((music::position.asc(), music::id.asc()))
                    .select(MusicRow::as_select())
                    .load(conn)?;
                load_music(conn, rows)
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Music>> {
        self.db.run(move |conn| find_music(conn, id)).await
    }

    async fn insert(&self, item: &Music) -> AppResult<Music> {
        let item = item.clone();
        let stored = self
            .db
            .run(move |conn| conn.transaction::<_, AppError, _>(|conn| insert_music(conn, &item)))
            .await?;

        LogContext::db_operation("insert", "music", None);
        Ok(stored)
    }

    async fn update(&self, item: &Music) -> AppResult<Music> {
        let item = item.clone();
        self.db
            .run(move |conn| conn.transaction::<_, AppError, _>(|conn| update_music(conn, &item)))
            .await
    }

    async fn update_all(&self, items: &[Music]) -> AppResult<()> {
        let items = items.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for item in &items {
                        update_music(conn, item)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.db.run(move |conn| delete_music(conn, id)).await
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.db
            .run(|conn| {
                diesel::delete(music::table).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[Music]) -> AppResult<()> {
        let siblings = siblings.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    delete_music(conn, id)?;
                    for album in &siblings {
                        update_music(conn, album)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn insert_and_reorder(&self, item: &Music, siblings: &[Music]) -> AppResult<Music> {
        let (item, siblings) = (item.clone(), siblings.to_vec());
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for album in &siblings {
                        update_music(conn, album)?;
                    }
                    insert_music(conn, &item)
                })
            })
            .await
    }
}
