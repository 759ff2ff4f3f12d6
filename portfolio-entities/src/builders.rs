pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::comment_builder::*;

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.comment.comment = Some(comment.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.comment.name = Some(name.into());
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.comment.created_at = TimestampMs::from_millis(millis);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    created_at: TimestampMs::now(),
                    comment: None,
                    name: None,
                },
            }
        }
    }
}
