//! Bookstore handlers. Successful responses are wrapped as `{"data": ...}`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        book::{BookDto, CreateBookDto, UpdateBookDto},
    },
    server::{
        error::AppError,
        model::book::{Book, BookQuery, BookSort, CreateBookParams, UpdateBookParams},
        service::book::BookService,
        state::BookstoreState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "book";

#[derive(Deserialize)]
pub struct BookListParams {
    pub title: Option<String>,
    pub sort: Option<String>,
}

/// List live books.
///
/// Filters by title substring when `title` is given and sorts by cost when `sort` is `asc`
/// or `desc`; otherwise books are ordered by id.
#[utoipa::path(
    get,
    path = "/books",
    tag = BOOK_TAG,
    params(
        ("title" = Option<String>, Query, description = "Substring to match against titles"),
        ("sort" = Option<String>, Query, description = "Sort by cost: asc or desc")
    ),
    responses(
        (status = 200, description = "Matching books", body = DataDto<Vec<BookDto>>),
        (status = 400, description = "Unknown sort", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_books(
    State(state): State<BookstoreState>,
    Query(params): Query<BookListParams>,
) -> Result<impl IntoResponse, AppError> {
    let sort = params
        .sort
        .as_deref()
        .map(str::parse::<BookSort>)
        .transpose()?;
    let query = BookQuery {
        title: params.title.filter(|t| !t.trim().is_empty()),
        sort,
    };

    let books = BookService::new(&state.db).list(query).await?;

    Ok((
        StatusCode::OK,
        Json(DataDto {
            data: books.into_iter().map(Book::into_dto).collect::<Vec<_>>(),
        }),
    ))
}

/// Get one book.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "The book", body = DataDto<BookDto>),
        (status = 404, description = "Record not found!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<BookstoreState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto { data: book.into_dto() })))
}

/// Add a book.
///
/// # Returns
/// - `201 Created` - Book stored
/// - `400 Bad Request` - Missing title or author, or negative cost
#[utoipa::path(
    post,
    path = "/books",
    tag = BOOK_TAG,
    request_body = CreateBookDto,
    responses(
        (status = 201, description = "Book created", body = DataDto<BookDto>),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<BookstoreState>,
    Json(payload): Json<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBookParams::from_dto(payload)?;
    let book = BookService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(DataDto { data: book.into_dto() })))
}

/// Update the provided fields of a book.
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book id")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Book updated", body = DataDto<BookDto>),
        (status = 400, description = "Invalid book data", body = ErrorDto),
        (status = 404, description = "Record not found!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<BookstoreState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateBookParams::from_dto(payload)?;
    let book = BookService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(DataDto { data: book.into_dto() })))
}

/// Soft-delete a book.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i32, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DataDto<bool>),
        (status = 404, description = "Record not found!", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<BookstoreState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BookService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DataDto { data: true })))
}
