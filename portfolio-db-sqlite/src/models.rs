#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use portfolio_core::entities as e;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub comment: Option<&'a str>,
    pub name: Option<&'a str>,
}

impl<'a> From<&'a e::Comment> for NewComment<'a> {
    fn from(from: &'a e::Comment) -> Self {
        let e::Comment {
            id,
            created_at,
            comment,
            name,
        } = from;
        Self {
            id: id.as_str(),
            created_at: created_at.as_millis(),
            comment: comment.as_deref(),
            name: name.as_deref(),
        }
    }
}

#[derive(Queryable)]
pub struct Comment {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub comment: Option<String>,
    pub name: Option<String>,
}

impl From<Comment> for e::Comment {
    fn from(from: Comment) -> Self {
        let Comment {
            rowid: _,
            id,
            created_at,
            comment,
            name,
        } = from;
        Self {
            id: id.into(),
            created_at: e::TimestampMs::from_millis(created_at),
            comment,
            name,
        }
    }
}
