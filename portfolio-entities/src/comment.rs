use crate::{id::*, time::*};

/// A comment left by a visitor of the site.
///
/// Both text fields are optional: a submitted form that lacks
/// one of the inputs is stored as is, without any rejection.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub created_at : TimestampMs,
    pub comment    : Option<String>,
    pub name       : Option<String>,
}

impl Comment {
    pub fn new(comment: Option<String>, name: Option<String>) -> Self {
        Self {
            id: Id::new(),
            created_at: TimestampMs::now(),
            comment,
            name,
        }
    }
}
