use maud::{html, Markup};

use crate::types::{Book, BookFormRaw};
use crate::validate::FieldError;

fn page(title: &str, content: Markup) -> Markup {
	html! {
		head {
			title { (title) " - bookshelf" }
		}
		body {
			nav {
				a href="/" { "all books" }
				" | "
				a href="/add" { "add a book" }
			}
			h1 { (title) }
			(content)
		}
	}
}

fn errors_for(errors: &[FieldError], field: &'static str) -> Markup {
	html! {
		@for err in errors.iter().filter(|e| e.field == field) {
			small { (err.message()) }
		}
	}
}

pub fn list_page(books: &[Book]) -> Markup {
	page("all books", html! {
		table {
			thead { tr {
				th { "Title" }
				th { "Author" }
				th { "Rating" }
				th { }
				th { }
			} }
			tbody {
				@for book in books {
					tr {
						td { (book.title) }
						td { (book.author) }
						td { (book.rating) "/10" }
						td { a href={ "/edit?id=" (book.id) } { "edit rating" } }
						td { a href={ "/delete?id=" (book.id) } { "delete" } }
					}
				}
			}
		}
		@if books.is_empty() {
			p { "Library is empty." }
		}
	})
}

pub fn add_page(raw: &BookFormRaw, errors: &[FieldError]) -> Markup {
	page("add a book", html! {
		form method="POST" action="/add" {
			p {
				label { "Book Name" }
				input name="title" type="text" value=(raw.title) {}
				(errors_for(errors, "title"))
			}
			p {
				label { "Book Author" }
				input name="author" type="text" value=(raw.author) {}
				(errors_for(errors, "author"))
			}
			p {
				label { "Rating" }
				input name="rating" type="number" min="0" max="10" value=(raw.rating) {}
				(errors_for(errors, "rating"))
			}
			button { "Add Book" }
		}
	})
}

pub fn edit_page(book: &Book, error: Option<&FieldError>) -> Markup {
	page("edit rating", html! {
		p { (book.title) " by " (book.author) }
		p { "Current rating: " (book.rating) "/10" }
		form method="POST" action="/edit" {
			input name="id" type="hidden" value=(book.id) {}
			label { "New rating" }
			input name="rating" type="number" min="0" max="10" {}
			@if let Some(err) = error {
				small { (err.message()) }
			}
			button { "Change Rating" }
		}
	})
}

pub fn confirm_delete_page(book: &Book) -> Markup {
	page("delete book", html! {
		p { "Delete " (book.title) " by " (book.author) "?" }
		form method="POST" action="/delete" {
			input name="id" type="hidden" value=(book.id) {}
			button { "Delete" }
		}
		p { a href="/" { "back to the list" } }
	})
}

pub fn not_found_page() -> Markup {
	page("not found", html! {
		p { "No such book." }
		p { a href="/" { "back to the list" } }
	})
}

pub fn server_error_page() -> Markup {
	page("something went wrong", html! {
		p { "The library is unavailable right now. Try again later." }
	})
}
