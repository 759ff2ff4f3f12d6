use diesel::{self, prelude::*, result::Error as DieselError};

use portfolio_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}
