use bookshelf::error::Error;
use bookshelf::sql::BookStore;
use sqlx::sqlite::SqlitePoolOptions;

async fn mem_store() -> BookStore {
	// one connection, or every pool checkout would see a fresh :memory: db
	let pool = SqlitePoolOptions::new()
		.max_connections(1)
		.connect("sqlite::memory:")
		.await
		.unwrap();
	let store = BookStore::new(pool);
	store.init_schema().await.unwrap();
	store
}

#[tokio::test]
async fn insert_adds_exactly_one_record() {
	let store = mem_store().await;

	let book = store.insert("Dune", "Frank Herbert", 9).await.unwrap();

	let all = store.list_all().await.unwrap();
	assert_eq!(all, vec![book.clone()]);
	assert_eq!(book.title, "Dune");
	assert_eq!(book.author, "Frank Herbert");
	assert_eq!(book.rating, 9);
}

#[tokio::test]
async fn duplicate_title_is_a_conflict_and_changes_nothing() {
	let store = mem_store().await;
	store.insert("Dune", "Frank Herbert", 9).await.unwrap();

	let err = store.insert("Dune", "Someone Else", 2).await.unwrap_err();
	assert!(matches!(err, Error::Conflict));

	let all = store.list_all().await.unwrap();
	assert_eq!(all.len(), 1);
	assert_eq!(all[0].author, "Frank Herbert");
	assert_eq!(all[0].rating, 9);
}

#[tokio::test]
async fn update_rating_touches_only_the_rating() {
	let store = mem_store().await;
	let book = store.insert("Dune", "Frank Herbert", 9).await.unwrap();

	let updated = store.update_rating(book.id, 3).await.unwrap();

	assert_eq!(updated.id, book.id);
	assert_eq!(updated.title, book.title);
	assert_eq!(updated.author, book.author);
	assert_eq!(updated.rating, 3);
}

#[tokio::test]
async fn update_of_absent_id_is_not_found_and_changes_nothing() {
	let store = mem_store().await;
	let book = store.insert("Dune", "Frank Herbert", 9).await.unwrap();

	let err = store.update_rating(book.id + 1, 5).await.unwrap_err();
	assert!(matches!(err, Error::NotFound));

	assert_eq!(store.get(book.id).await.unwrap().rating, 9);
}

#[tokio::test]
async fn delete_of_absent_id_is_not_found_and_changes_nothing() {
	let store = mem_store().await;
	let book = store.insert("Dune", "Frank Herbert", 9).await.unwrap();

	let err = store.delete(book.id + 1).await.unwrap_err();
	assert!(matches!(err, Error::NotFound));

	assert_eq!(store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleted_book_is_gone_from_get_and_list() {
	let store = mem_store().await;
	let keep = store.insert("Dune", "Frank Herbert", 9).await.unwrap();
	let gone = store.insert("Emma", "Jane Austen", 7).await.unwrap();

	store.delete(gone.id).await.unwrap();

	let err = store.get(gone.id).await.unwrap_err();
	assert!(matches!(err, Error::NotFound));
	assert_eq!(store.list_all().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
	let store = mem_store().await;
	let first = store.insert("Dune", "Frank Herbert", 9).await.unwrap();
	store.delete(first.id).await.unwrap();

	let second = store.insert("Emma", "Jane Austen", 7).await.unwrap();
	assert!(second.id > first.id);
}

#[tokio::test]
async fn full_lifecycle_scenario() {
	let store = mem_store().await;

	store.insert("Dune", "Frank Herbert", 9).await.unwrap();
	let all = store.list_all().await.unwrap();
	assert_eq!(all.len(), 1);
	assert_eq!(all[0].id, 1);
	assert_eq!(all[0].title, "Dune");
	assert_eq!(all[0].author, "Frank Herbert");
	assert_eq!(all[0].rating, 9);

	store.update_rating(1, 10).await.unwrap();
	assert_eq!(store.get(1).await.unwrap().rating, 10);

	store.delete(1).await.unwrap();
	assert_eq!(store.list_all().await.unwrap(), vec![]);
}
