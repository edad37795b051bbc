use log::debug;
use sqlx::{Pool, Sqlite};

use crate::error::Error;
use crate::types::{Bid, Book};

// AUTOINCREMENT so ids keep growing past deletions and are never reused
pub const TABLE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS books (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	title TEXT NOT NULL UNIQUE,
	author TEXT NOT NULL,
	rating INTEGER NOT NULL
);
"#;

/// Data-access layer for the `books` table. Clones share the pool.
#[derive(Clone)]
pub struct BookStore {
	pool: Pool<Sqlite>,
}

impl BookStore {
	pub fn new(pool: Pool<Sqlite>) -> Self {
		BookStore { pool }
	}

	/// Applies the table schema. Safe to run on every startup.
	pub async fn init_schema(&self) -> Result<(), Error> {
		sqlx::query(TABLE_SCHEMA).execute(&self.pool).await?;
		Ok(())
	}

	pub async fn list_all(&self) -> Result<Vec<Book>, Error> {
		let books = sqlx::query_as::<_, Book>(
			"SELECT id, title, author, rating FROM books ORDER BY id",
		)
		.fetch_all(&self.pool)
		.await?;
		Ok(books)
	}

	pub async fn get(&self, id: Bid) -> Result<Book, Error> {
		sqlx::query_as::<_, Book>(
			"SELECT id, title, author, rating FROM books WHERE id = ?",
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(Error::NotFound)
	}

	/// Inserts one book and returns it with its storage-assigned id.
	/// A duplicate title comes back as `Error::Conflict`.
	pub async fn insert(
		&self,
		title: &str,
		author: &str,
		rating: i64,
	) -> Result<Book, Error> {
		let book = sqlx::query_as::<_, Book>(
			"INSERT INTO books (title, author, rating) VALUES (?, ?, ?) \
			 RETURNING id, title, author, rating",
		)
		.bind(title)
		.bind(author)
		.bind(rating)
		.fetch_one(&self.pool)
		.await
		.map_err(|err| match &err {
			sqlx::Error::Database(db) if db.is_unique_violation() => Error::Conflict,
			_ => Error::Db(err),
		})?;
		debug!("inserted book {}", book.id);
		Ok(book)
	}

	/// Changes the rating of one book, nothing else.
	pub async fn update_rating(&self, id: Bid, rating: i64) -> Result<Book, Error> {
		sqlx::query_as::<_, Book>(
			"UPDATE books SET rating = ? WHERE id = ? \
			 RETURNING id, title, author, rating",
		)
		.bind(rating)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?
		.ok_or(Error::NotFound)
	}

	pub async fn delete(&self, id: Bid) -> Result<(), Error> {
		let done = sqlx::query("DELETE FROM books WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;
		if done.rows_affected() == 0 {
			return Err(Error::NotFound);
		}
		debug!("deleted book {id}");
		Ok(())
	}
}
