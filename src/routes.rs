use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use log::info;
use maud::Markup;

use crate::error::Error;
use crate::sql::BookStore;
use crate::types::{BookFormRaw, DeleteForm, EditFormRaw, IdParam};
use crate::validate::{self, FieldError};
use crate::views;

pub fn router(store: BookStore) -> Router {
	Router::new()
		.route("/", get(list))
		.route("/add", get(add_form).post(add))
		.route("/edit", get(edit_form).post(edit))
		// GET is only the confirmation page; deleting takes a POST
		.route("/delete", get(confirm_delete).post(delete))
		.with_state(store)
}

async fn list(State(store): State<BookStore>) -> Result<Markup, Error> {
	let books = store.list_all().await?;
	Ok(views::list_page(&books))
}

async fn add_form() -> Markup {
	views::add_page(&BookFormRaw::default(), &[])
}

async fn add(
	State(store): State<BookStore>,
	Form(raw): Form<BookFormRaw>,
) -> Result<Response, Error> {
	let new = match validate::validate_book(&raw) {
		Ok(new) => new,
		Err(errors) => return Ok(views::add_page(&raw, &errors).into_response()),
	};
	match store.insert(&new.title, &new.author, new.rating).await {
		Ok(book) => {
			info!("added book {}: {}", book.id, book.title);
			Ok(Redirect::to("/add").into_response())
		}
		Err(Error::Conflict) => {
			let errors = [FieldError::duplicate_title()];
			Ok(views::add_page(&raw, &errors).into_response())
		}
		Err(err) => Err(err),
	}
}

async fn edit_form(
	State(store): State<BookStore>,
	Query(param): Query<IdParam>,
) -> Result<Markup, Error> {
	let book = store.get(param.id).await?;
	Ok(views::edit_page(&book, None))
}

async fn edit(
	State(store): State<BookStore>,
	Form(form): Form<EditFormRaw>,
) -> Result<Response, Error> {
	let book = store.get(form.id).await?;
	let rating = match validate::validate_rating(&form.rating) {
		Ok(rating) => rating,
		Err(err) => return Ok(views::edit_page(&book, Some(&err)).into_response()),
	};
	store.update_rating(form.id, rating).await?;
	info!("rated book {} at {rating}", form.id);
	Ok(Redirect::to("/").into_response())
}

async fn confirm_delete(
	State(store): State<BookStore>,
	Query(param): Query<IdParam>,
) -> Result<Markup, Error> {
	let book = store.get(param.id).await?;
	Ok(views::confirm_delete_page(&book))
}

async fn delete(
	State(store): State<BookStore>,
	Form(form): Form<DeleteForm>,
) -> Result<Redirect, Error> {
	store.delete(form.id).await?;
	info!("deleted book {}", form.id);
	Ok(Redirect::to("/"))
}
