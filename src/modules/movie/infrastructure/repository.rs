use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{MovieChangeset, MovieRow};
use crate::modules::genre::infrastructure::genres_by_id;
use crate::modules::movie::domain::Movie;
use crate::schema::movies;
use crate::shared::domain::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Attach genres to loaded rows with a single genre query
fn load_movies(conn: &mut PgConnection, rows: Vec<MovieRow>) -> AppResult<Vec<Movie>> {
    let mut ids: Vec<i32> = rows.iter().flat_map(|r| r.genre_ids.iter().copied()).collect();
    ids.sort_unstable();
    ids.dedup();

    let genres = genres_by_id(conn, &ids)?;
    rows.into_iter().map(|row| row.into_movie(&genres)).collect()
}

fn update_row(conn: &mut PgConnection, movie: &Movie) -> AppResult<Movie> {
    let id = movie
        .id
        .ok_or_else(|| AppError::InvalidInput("Movie without ID can't be updated".to_string()))?;

    let row = diesel::update(movies::table.find(id))
        .set(MovieChangeset::from(movie))
        .returning(MovieRow::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found("Movie", id))?;

    let mut stored = load_movies(conn, vec![row])?;
    stored
        .pop()
        .ok_or_else(|| AppError::InternalError("updated movie was not returned".to_string()))
}

fn insert_row(conn: &mut PgConnection, movie: &Movie) -> AppResult<Movie> {
    let row = diesel::insert_into(movies::table)
        .values(MovieChangeset::from(movie))
        .returning(MovieRow::as_returning())
        .get_result(conn)?;

    let mut stored = load_movies(conn, vec![row])?;
    stored
        .pop()
        .ok_or_else(|| AppError::InternalError("inserted movie was not returned".to_string()))
}

fn delete_row(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let deleted = diesel::delete(movies::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::not_found("Movie", id));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository<Movie> for MovieRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        self.db
            .run(|conn| {
                let rows = movies::table
                    .order((movies::position.asc(), movies::id.asc()))
                    .select(MovieRow::as_select())
                    .load(conn)?;
                load_movies(conn, rows)
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        self.db
            .run(move |conn| {
                let row = movies::table
                    .find(id)
                    .select(MovieRow::as_select())
                    .first(conn)
                    .optional()?;
                match row {
                    Some(row) => Ok(load_movies(conn, vec![row])?.pop()),
                    None => Ok(None),
                }
            })
            .await
    }

    async fn insert(&self, item: &Movie) -> AppResult<Movie> {
        let movie = item.clone();
        let stored = self.db.run(move |conn| insert_row(conn, &movie)).await?;

        LogContext::db_operation("insert", "movies", None);
        Ok(stored)
    }

    async fn update(&self, item: &Movie) -> AppResult<Movie> {
        let movie = item.clone();
        self.db.run(move |conn| update_row(conn, &movie)).await
    }

    async fn update_all(&self, items: &[Movie]) -> AppResult<()> {
        let items = items.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for movie in &items {
                        update_row(conn, movie)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.db.run(move |conn| delete_row(conn, id)).await
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.db
            .run(|conn| {
                diesel::delete(movies::table).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[Movie]) -> AppResult<()> {
        let siblings = siblings.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    delete_row(conn, id)?;
                    for movie in &siblings {
                        update_row(conn, movie)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn insert_and_reorder(&self, item: &Movie, siblings: &[Movie]) -> AppResult<Movie> {
        let (item, siblings) = (item.clone(), siblings.to_vec());
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for movie in &siblings {
                        update_row(conn, movie)?;
                    }
                    insert_row(conn, &item)
                })
            })
            .await
    }
}
