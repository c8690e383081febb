use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{PictureChangeset, PictureRow};
use crate::modules::picture::domain::Picture;
use crate::schema::pictures;
use crate::shared::domain::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

pub struct PictureRepositoryImpl {
    db: Arc<Database>,
}

impl PictureRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn update_row(conn: &mut PgConnection, picture: &Picture) -> AppResult<Picture> {
    let id = picture
        .id
        .ok_or_else(|| AppError::InvalidInput("Picture without ID can't be updated".to_string()))?;

    let row = diesel::update(pictures::table.find(id))
        .set(PictureChangeset::from(picture))
        .returning(PictureRow::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found("Picture", id))?;
    Ok(row.into())
}

fn insert_row(conn: &mut PgConnection, picture: &Picture) -> AppResult<Picture> {
    let row = diesel::insert_into(pictures::table)
        .values(PictureChangeset::from(picture))
        .returning(PictureRow::as_returning())
        .get_result(conn)?;
    Ok(row.into())
}

fn delete_row(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let deleted = diesel::delete(pictures::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::not_found("Picture", id));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository<Picture> for PictureRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Picture>> {
        self.db
            .run(|conn| {
                let rows = pictures::table
                    .order((pictures::position.asc(), pictures::id.asc()))
                    .select(PictureRow::as_select())
                    .load(conn)?;
                Ok(rows.into_iter().map(Picture::from).collect())
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Picture>> {
        self.db
            .run(move |conn| {
                let row = pictures::table
                    .find(id)
                    .select(PictureRow::as_select())
                    .first(conn)
                    .optional()?;
                Ok(row.map(Picture::from))
            })
            .await
    }

    async fn insert(&self, item: &Picture) -> AppResult<Picture> {
        let picture = item.clone();
        let stored = self.db.run(move |conn| insert_row(conn, &picture)).await?;

        LogContext::db_operation("insert", "pictures", None);
        Ok(stored)
    }

    async fn update(&self, item: &Picture) -> AppResult<Picture> {
        let picture = item.clone();
        self.db.run(move |conn| update_row(conn, &picture)).await
    }

    async fn update_all(&self, items: &[Picture]) -> AppResult<()> {
        let items = items.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for picture in &items {
                        update_row(conn, picture)?;
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
                diesel::delete(pictures::table).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[Picture]) -> AppResult<()> {
        let siblings = siblings.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    delete_row(conn, id)?;
                    for picture in &siblings {
                        update_row(conn, picture)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn insert_and_reorder(&self, item: &Picture, siblings: &[Picture]) -> AppResult<Picture> {
        let (item, siblings) = (item.clone(), siblings.to_vec());
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for picture in &siblings {
                        update_row(conn, picture)?;
                    }
                    insert_row(conn, &item)
                })
            })
            .await
    }
}
