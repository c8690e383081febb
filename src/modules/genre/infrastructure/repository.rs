use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{GenreChangeset, GenreRow};
use crate::modules::genre::domain::Genre;
use crate::schema::genres;
use crate::shared::domain::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

pub struct GenreRepositoryImpl {
    db: Arc<Database>,
}

impl GenreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Stored genres keyed by ID; used to resolve the genre arrays of movies and shows
pub fn genres_by_id(conn: &mut PgConnection, ids: &[i32]) -> QueryResult<HashMap<i32, Genre>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = genres::table
        .filter(genres::id.eq_any(ids))
        .select(GenreRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(|row| (row.id, Genre::from(row))).collect())
}

/// Genres for `ids` in the given order; IDs without a stored genre are skipped
pub fn resolve_genres(ids: &[i32], lookup: &HashMap<i32, Genre>) -> Vec<Genre> {
    ids.iter().filter_map(|id| lookup.get(id).cloned()).collect()
}

fn update_row(conn: &mut PgConnection, genre: &Genre) -> AppResult<Genre> {
    let id = genre
        .id
        .ok_or_else(|| AppError::InvalidInput("Genre without ID can't be updated".to_string()))?;

    let row = diesel::update(genres::table.find(id))
        .set(GenreChangeset::from(genre))
        .returning(GenreRow::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found("Genre", id))?;
    Ok(row.into())
}

fn insert_row(conn: &mut PgConnection, genre: &Genre) -> AppResult<Genre> {
    let row = diesel::insert_into(genres::table)
        .values(GenreChangeset::from(genre))
        .returning(GenreRow::as_returning())
        .get_result(conn)?;
    Ok(row.into())
}

fn delete_row(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let deleted = diesel::delete(genres::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::not_found("Genre", id));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository<Genre> for GenreRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        self.db
            .run(|conn| {
                let rows = genres::table
                    .order((genres::position.asc(), genres::id.asc()))
                    .select(GenreRow::as_select())
                    .load(conn)?;
                Ok(rows.into_iter().map(Genre::from).collect())
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        self.db
            .run(move |conn| {
                let row = genres::table
                    .find(id)
                    .select(GenreRow::as_select())
                    .first(conn)
                    .optional()?;
                Ok(row.map(Genre::from))
            })
            .await
    }

    async fn insert(&self, item: &Genre) -> AppResult<Genre> {
        let genre = item.clone();
        let stored = self.db.run(move |conn| insert_row(conn, &genre)).await?;

        LogContext::db_operation("insert", "genres", None);
        Ok(stored)
    }

    async fn update(&self, item: &Genre) -> AppResult<Genre> {
        let genre = item.clone();
        self.db.run(move |conn| update_row(conn, &genre)).await
    }

    async fn update_all(&self, items: &[Genre]) -> AppResult<()> {
        let items = items.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for genre in &items {
                        update_row(conn, genre)?;
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
                diesel::delete(genres::table).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[Genre]) -> AppResult<()> {
        let siblings = siblings.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    delete_row(conn, id)?;
                    for genre in &siblings {
                        update_row(conn, genre)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn insert_and_reorder(&self, item: &Genre, siblings: &[Genre]) -> AppResult<Genre> {
        let (item, siblings) = (item.clone(), siblings.to_vec());
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for genre in &siblings {
                        update_row(conn, genre)?;
                    }
                    insert_row(conn, &item)
                })
            })
            .await
    }
}
