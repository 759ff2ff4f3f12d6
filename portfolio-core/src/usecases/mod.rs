mod add_comment;
mod error;
mod purge_comments;
mod recent_comments;


pub use self::{add_comment::*, error::Error, purge_comments::*, recent_comments::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
