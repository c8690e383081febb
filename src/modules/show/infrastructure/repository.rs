use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{
    EpisodeChangeset, EpisodeRow, SeasonChangeset, SeasonRow, ShowChangeset, ShowRow,
};
use crate::modules::genre::infrastructure::genres_by_id;
use crate::modules::show::domain::{Episode, Season, Show};
use crate::schema::{episodes, seasons, tv_shows};
use crate::shared::domain::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

/// Shows with their seasons and episodes, stored across three tables
pub struct ShowRepositoryImpl {
    db: Arc<Database>,
}

impl ShowRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn load_shows(conn: &mut PgConnection, rows: Vec<ShowRow>) -> AppResult<Vec<Show>> {
    let show_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();

    let season_rows = seasons::table
        .filter(seasons::tv_show_id.eq_any(&show_ids))
        .order((seasons::position.asc(), seasons::id.asc()))
        .select(SeasonRow::as_select())
        .load(conn)?;
    let season_ids: Vec<i32> = season_rows.iter().map(|r| r.id).collect();

    let episode_rows = episodes::table
        .filter(episodes::season_id.eq_any(&season_ids))
        .order((episodes::position.asc(), episodes::id.asc()))
        .select(EpisodeRow::as_select())
        .load(conn)?;

    let mut episodes_by_season: HashMap<i32, Vec<Episode>> = HashMap::new();
    for row in episode_rows {
        episodes_by_season
            .entry(row.season_id)
            .or_default()
            .push(Episode::from(row));
    }

    let mut seasons_by_show: HashMap<i32, Vec<Season>> = HashMap::new();
    for row in season_rows {
        let show_id = row.tv_show_id;
        let episodes = episodes_by_season.remove(&row.id).unwrap_or_default();
        seasons_by_show
            .entry(show_id)
            .or_default()
            .push(row.into_season(episodes)?);
    }

    let mut genre_ids: Vec<i32> = rows.iter().flat_map(|r| r.genre_ids.iter().copied()).collect();
    genre_ids.sort_unstable();
    genre_ids.dedup();
    let genres = genres_by_id(conn, &genre_ids)?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let seasons = seasons_by_show.remove(&row.id).unwrap_or_default();
            row.into_show(&genres, seasons)
        })
        .collect())
}

fn find_show(conn: &mut PgConnection, id: i32) -> AppResult<Option<Show>> {
    let row = tv_shows::table
        .find(id)
        .select(ShowRow::as_select())
        .first(conn)
        .optional()?;

    match row {
        Some(row) => Ok(load_shows(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

/// Make the stored seasons of `show_id` match `items`
fn write_seasons(conn: &mut PgConnection, show_id: i32, items: &[Season]) -> AppResult<()> {
    let keep: Vec<i32> = items.iter().filter_map(|s| s.id).collect();
    diesel::delete(
        seasons::table
            .filter(seasons::tv_show_id.eq(show_id))
            .filter(seasons::id.ne_all(&keep)),
    )
    .execute(conn)?;

    for season in items {
        let record = SeasonChangeset::new(show_id, season);
        let season_id = match season.id {
            Some(id) => {
                let updated = diesel::update(
                    seasons::table
                        .find(id)
                        .filter(seasons::tv_show_id.eq(show_id)),
                )
                .set(&record)
                .execute(conn)?;
                if updated == 0 {
                    return Err(AppError::not_found("Season", id));
                }
                id
            }
            None => diesel::insert_into(seasons::table)
                .values(&record)
                .returning(seasons::id)
                .get_result(conn)?,
        };
        write_episodes(conn, season_id, &season.episodes)?;
    }
    Ok(())
}

fn write_episodes(conn: &mut PgConnection, season_id: i32, items: &[Episode]) -> AppResult<()> {
    let keep: Vec<i32> = items.iter().filter_map(|e| e.id).collect();
    diesel::delete(
        episodes::table
            .filter(episodes::season_id.eq(season_id))
            .filter(episodes::id.ne_all(&keep)),
    )
    .execute(conn)?;

    for episode in items {
        let record = EpisodeChangeset::new(season_id, episode);
        match episode.id {
            Some(id) => {
                let updated = diesel::update(
                    episodes::table
                        .find(id)
                        .filter(episodes::season_id.eq(season_id)),
                )
                .set(&record)
                .execute(conn)?;
                if updated == 0 {
                    return Err(AppError::not_found("Episode", id));
                }
            }
            None => {
                diesel::insert_into(episodes::table)
                    .values(&record)
                    .execute(conn)?;
            }
        }
    }
    Ok(())
}

fn update_show(conn: &mut PgConnection, show: &Show) -> AppResult<Show> {
    let id = show
        .id
        .ok_or_else(|| AppError::InvalidInput("Show without ID can't be updated".to_string()))?;

    let updated = diesel::update(tv_shows::table.find(id))
        .set(ShowChangeset::from(show))
        .execute(conn)?;
    if updated == 0 {
        return Err(AppError::not_found("Show", id));
    }

    write_seasons(conn, id, &show.seasons)?;
    find_show(conn, id)?.ok_or_else(|| AppError::not_found("Show", id))
}

fn insert_show(conn: &mut PgConnection, show: &Show) -> AppResult<Show> {
    let id: i32 = diesel::insert_into(tv_shows::table)
        .values(ShowChangeset::from(show))
        .returning(tv_shows::id)
        .get_result(conn)?;
    write_seasons(conn, id, &show.seasons)?;
    find_show(conn, id)?.ok_or_else(|| AppError::not_found("Show", id))
}

fn delete_show(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let deleted = diesel::delete(tv_shows::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::not_found("Show", id));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository<Show> for ShowRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Show>> {
        self.db
            .run(|conn| {
                let rows = tv_shows::table
                    .order((tv_shows::position.asc(), tv_shows::id.asc()))
                    .select(ShowRow::as_select())
                    .load(conn)?;
                load_shows(conn, rows)
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Show>> {
        self.db.run(move |conn| find_show(conn, id)).await
    }

    async fn insert(&self, item: &Show) -> AppResult<Show> {
        let show = item.clone();
        let stored = self
            .db
            .run(move |conn| conn.transaction::<_, AppError, _>(|conn| insert_show(conn, &show)))
            .await?;

        LogContext::db_operation("insert", "tv_shows", None);
        Ok(stored)
    }

    async fn update(&self, item: &Show) -> AppResult<Show> {
        let show = item.clone();
        self.db
            .run(move |conn| conn.transaction::<_, AppError, _>(|conn| update_show(conn, &show)))
            .await
    }

    async fn update_all(&self, items: &[Show]) -> AppResult<()> {
        let items = items.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for show in &items {
                        update_show(conn, show)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.db.run(move |conn| delete_show(conn, id)).await
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.db
            .run(|conn| {
                diesel::delete(tv_shows::table).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[Show]) -> AppResult<()> {
        let siblings = siblings.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    delete_show(conn, id)?;
                    for show in &siblings {
                        update_show(conn, show)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn insert_and_reorder(&self, item: &Show, siblings: &[Show]) -> AppResult<Show> {
        let (item, siblings) = (item.clone(), siblings.to_vec());
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for show in &siblings {
                        update_show(conn, show)?;
                    }
                    insert_show(conn, &item)
                })
            })
            .await
    }
}
