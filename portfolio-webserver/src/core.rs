pub use portfolio_core::{entities, limit, repositories, usecases};

pub mod prelude {
    pub use super::{entities::*, limit::CommentLimit, repositories::*};
}
