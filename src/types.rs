use serde::Deserialize;

pub type Bid = i64;

/// One catalogued book, as stored in the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
	pub id: Bid,
	pub title: String,
	pub author: String,
	pub rating: i64,
}

/// Raw add-form payload. Everything is text until validation has run;
/// missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookFormRaw {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub author: String,
	#[serde(default)]
	pub rating: String,
}

#[derive(Debug, Deserialize)]
pub struct IdParam {
	pub id: Bid,
}

#[derive(Debug, Deserialize)]
pub struct EditFormRaw {
	pub id: Bid,
	#[serde(default)]
	pub rating: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
	pub id: Bid,
}
