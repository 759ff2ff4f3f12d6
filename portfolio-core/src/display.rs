use crate::entities::*;

/// Placeholder for an attribute that has never been submitted.
pub const ABSENT: &str = "null";

/// Renders a comment as `"<comment> by <name>"`.
pub fn display_string(comment: &Comment) -> String {
    let Comment { comment, name, .. } = comment;
    format!(
        "{} by {}",
        comment.as_deref().unwrap_or(ABSENT),
        name.as_deref().unwrap_or(ABSENT)
    )
}
