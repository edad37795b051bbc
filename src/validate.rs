use crate::types::BookFormRaw;

pub const RATING_MIN: i64 = 0;
pub const RATING_MAX: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldReason {
	Required,
	OutOfRange,
	Duplicate,
}

/// One failed form field and why it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
	pub field: &'static str,
	pub reason: FieldReason,
}

impl FieldError {
	pub fn message(&self) -> &'static str {
		match self.reason {
			FieldReason::Required => "required",
			FieldReason::OutOfRange => "must be a whole number from 0 to 10",
			FieldReason::Duplicate => "a book with this title already exists",
		}
	}

	/// Built by the add handler when storage reports a duplicate title,
	/// so the conflict shows up on the form like any other field error.
	pub fn duplicate_title() -> Self {
		FieldError { field: "title", reason: FieldReason::Duplicate }
	}
}

/// A validated add-form payload, ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
	pub title: String,
	pub author: String,
	pub rating: i64,
}

/// Checks the whole add form. Pure, and runs to completion: every failing
/// field is reported, not just the first.
pub fn validate_book(raw: &BookFormRaw) -> Result<NewBook, Vec<FieldError>> {
	let mut errors = Vec::new();

	let title = raw.title.trim();
	if title.is_empty() {
		errors.push(FieldError { field: "title", reason: FieldReason::Required });
	}
	let author = raw.author.trim();
	if author.is_empty() {
		errors.push(FieldError { field: "author", reason: FieldReason::Required });
	}

	let rating = match validate_rating(&raw.rating) {
		Ok(rating) => Some(rating),
		Err(err) => {
			errors.push(err);
			None
		}
	};

	match rating {
		Some(rating) if errors.is_empty() => Ok(NewBook {
			title: title.to_string(),
			author: author.to_string(),
			rating,
		}),
		_ => Err(errors),
	}
}

/// Checks the rating field alone; the edit form submits nothing else.
pub fn validate_rating(raw: &str) -> Result<i64, FieldError> {
	let raw = raw.trim();
	if raw.is_empty() {
		return Err(FieldError { field: "rating", reason: FieldReason::Required });
	}
	match raw.parse::<i64>() {
		Ok(rating) if (RATING_MIN..=RATING_MAX).contains(&rating) => Ok(rating),
		_ => Err(FieldError { field: "rating", reason: FieldReason::OutOfRange }),
	}
}
