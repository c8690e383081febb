use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{GameChangeset, GameRow};
use crate::modules::game::domain::Game;
use crate::schema::games;
use crate::shared::domain::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

pub struct GameRepositoryImpl {
    db: Arc<Database>,
}

impl GameRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn update_row(conn: &mut PgConnection, game: &Game) -> AppResult<Game> {
    let id = game
        .id
        .ok_or_else(|| AppError::InvalidInput("Game without ID can't be updated".to_string()))?;

    let row = diesel::update(games::table.find(id))
        .set(GameChangeset::from(game))
        .returning(GameRow::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found("Game", id))?;
    Ok(row.into())
}

fn insert_row(conn: &mut PgConnection, game: &Game) -> AppResult<Game> {
    let row = diesel::insert_into(games::table)
        .values(GameChangeset::from(game))
        .returning(GameRow::as_returning())
        .get_result(conn)?;
    Ok(row.into())
}

fn delete_row(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let deleted = diesel::delete(games::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::not_found("Game", id));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository<Game> for GameRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Game>> {
        self.db
            .run(|conn| {
                let rows = games::table
                    .order((games::position.asc(), games::id.asc()))
                    .select(GameRow::as_select())
                    .load(conn)?;
                Ok(rows.into_iter().map(Game::from).collect())
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Game>> {
        self.db
            .run(move |conn| {
                let row = games::table
                    .find(id)
                    .select(GameRow::as_select())
                    .first(conn)
                    .optional()?;
                Ok(row.map(Game::from))
            })
            .await
    }

    async fn insert(&self, item: &Game) -> AppResult<Game> {
        let game = item.clone();
        let stored = self.db.run(move |conn| insert_row(conn, &game)).await?;

        LogContext::db_operation("insert", "games", None);
        Ok(stored)
    }

    async fn update(&self, item: &Game) -> AppResult<Game> {
        let game = item.clone();
        self.db.run(move |conn| update_row(conn, &game)).await
    }

    async fn update_all(&self, items: &[Game]) -> AppResult<()> {
        let items = items.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for game in &items {
                        update_row(conn, game)?;
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
                diesel::delete(games::table).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[Game]) -> AppResult<()> {
        let siblings = siblings.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    delete_row(conn, id)?;
                    for game in &siblings {
                        update_row(conn, game)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn insert_and_reorder(&self, item: &Game, siblings: &[Game]) -> AppResult<Game> {
        let (item, siblings) = (item.clone(), siblings.to_vec());
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for game in &siblings {
                        update_row(conn, game)?;
                    }
                    insert_row(conn, &item)
                })
            })
            .await
    }
}
