use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use super::models::{BookChangeset, BookRow};
use crate::modules::book::domain::Book;
use crate::schema::books;
use crate::shared::domain::CatalogRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::LogContext;

pub struct BookRepositoryImpl {
    db: Arc<Database>,
}

impl BookRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn update_row(conn: &mut PgConnection, book: &Book) -> AppResult<Book> {
    let id = book
        .id
        .ok_or_else(|| AppError::InvalidInput("Book without ID can't be updated".to_string()))?;

    let row = diesel::update(books::table.find(id))
        .set(BookChangeset::from(book))
        .returning(BookRow::as_returning())
        .get_result(conn)
        .optional()?
        .ok_or_else(|| AppError::not_found("Book", id))?;
    Book::try_from(row)
}

fn insert_row(conn: &mut PgConnection, book: &Book) -> AppResult<Book> {
    let row = diesel::insert_into(books::table)
        .values(BookChangeset::from(book))
        .returning(BookRow::as_returning())
        .get_result(conn)?;
    Book::try_from(row)
}

fn delete_row(conn: &mut PgConnection, id: i32) -> AppResult<()> {
    let deleted = diesel::delete(books::table.find(id)).execute(conn)?;
    if deleted == 0 {
        return Err(AppError::not_found("Book", id));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository<Book> for BookRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        self.db
            .run(|conn| {
                books::table
                    .order((books::position.asc(), books::id.asc()))
                    .select(BookRow::as_select())
                    .load(conn)?
                    .into_iter()
                    .map(Book::try_from)
                    .collect()
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        self.db
            .run(move |conn| {
                books::table
                    .find(id)
                    .select(BookRow::as_select())
                    .first(conn)
                    .optional()?
                    .map(Book::try_from)
                    .transpose()
            })
            .await
    }

    async fn insert(&self, item: &Book) -> AppResult<Book> {
        let book = item.clone();
        let stored = self.db.run(move |conn| insert_row(conn, &book)).await?;

        LogContext::db_operation("insert", "books", None);
        Ok(stored)
    }

    async fn update(&self, item: &Book) -> AppResult<Book> {
        let book = item.clone();
        self.db.run(move |conn| update_row(conn, &book)).await
    }

    async fn update_all(&self, items: &[Book]) -> AppResult<()> {
        let items = items.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for book in &items {
                        update_row(conn, book)?;
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
                diesel::delete(books::table).execute(conn)?;
                Ok(())
            })
            .await
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[Book]) -> AppResult<()> {
        let siblings = siblings.to_vec();
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    delete_row(conn, id)?;
                    for book in &siblings {
                        update_row(conn, book)?;
                    }
                    Ok(())
                })
            })
            .await
    }

    async fn insert_and_reorder(&self, item: &Book, siblings: &[Book]) -> AppResult<Book> {
        let (item, siblings) = (item.clone(), siblings.to_vec());
        self.db
            .run(move |conn| {
                conn.transaction::<_, AppError, _>(|conn| {
                    for book in &siblings {
                        update_row(conn, book)?;
                    }
                    insert_row(conn, &item)
                })
            })
            .await
    }
}
