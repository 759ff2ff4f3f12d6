use std::result;

use portfolio_db_sqlite::Store;
use rocket::{
    form::Form, get, http::Status, post, response::Redirect, routes,
    serde::json::Json, FromForm, Route, State,
};

use crate::core::{prelude::*, usecases};

mod error;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type StatusResult = result::Result<Status, ApiError>;

/// Where clients are sent after submitting a new comment.
pub const LANDING_PAGE: &str = "/index.html";

pub fn routes() -> Vec<Route> {
    routes![
        // ---   comments   --- //
        get_comments,
        post_comment,
        // ---   purge   --- //
        post_delete_comments,
    ]
}

#[derive(Debug, FromForm)]
pub struct CommentQuery {
    // Only the first occurrence counts
    #[field(name = "comment-limit")]
    comment_limit: Vec<String>,
}

/// Fields of a new comment, accepted both in the query string
/// and in an url-encoded or multipart body.
#[derive(Debug, Default, FromForm)]
pub struct CommentParams {
    #[field(name = "comment-input")]
    comment: Vec<String>,
    #[field(name = "name-input")]
    name: Vec<String>,
}

impl CommentParams {
    /// Appends the values of `other` after the own ones.
    fn chain(mut self, other: Self) -> Self {
        self.comment.extend(other.comment);
        self.name.extend(other.name);
        self
    }
}

impl From<CommentParams> for usecases::NewComment {
    fn from(from: CommentParams) -> Self {
        let CommentParams { comment, name } = from;
        Self {
            comment: comment.into_iter().next(),
            name: name.into_iter().next(),
        }
    }
}

#[get("/add-comments?<query..>")]
pub fn get_comments(store: &State<Store>, query: CommentQuery) -> Result<Vec<String>> {
    let limit = CommentLimit::parse_or_default(query.comment_limit.first().map(String::as_str));
    let comments = usecases::recent_comments(&store.read()?, limit)?;
    Ok(Json(comments))
}

// A missing or unsupported body is treated like an empty form.
#[post("/add-comments?<query..>", data = "<form>")]
pub fn post_comment(
    store: &State<Store>,
    query: CommentParams,
    form: Option<Form<CommentParams>>,
) -> result::Result<Redirect, ApiError> {
    let params = query.chain(form.map(Form::into_inner).unwrap_or_default());
    usecases::add_comment(&store.write()?, params.into())?;
    Ok(Redirect::found(LANDING_PAGE))
}

#[post("/delete-comments")]
pub fn post_delete_comments(store: &State<Store>) -> StatusResult {
    store
        .write()?
        .transaction(|tx| usecases::purge_comments(tx))?;
    Ok(Status::Ok)
}
