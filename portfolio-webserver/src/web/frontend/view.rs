use maud::{html, Markup, DOCTYPE};

use crate::core::limit::CommentLimit;

const MAIN_JS_URL: &str = "/main.js";
const MAIN_CSS_URL: &str = "/main.css";

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
                script src=(MAIN_JS_URL) defer {}
            }
            body {
                (content)
            }
        }
    }
}

pub fn index() -> Markup {
    page(
        "Portfolio",
        html! {
            main {
                h1 { "Portfolio" }
                section id="comments" {
                    h2 { "Comments" }
                    (comment_form())
                    (comment_limit_form())
                    ul id="comments-container" {}
                    button id="delete-comments" type="button" { "Delete all comments" }
                }
            }
        },
    )
}

fn comment_form() -> Markup {
    html! {
        form action="/add-comments" method="POST" {
            label for="name-input" { "Name" }
            input type="text" id="name-input" name="name-input";
            label for="comment-input" { "Comment" }
            textarea id="comment-input" name="comment-input" rows=(3) {}
            input class="btn" type="submit" value="Post";
        }
    }
}

fn comment_limit_form() -> Markup {
    html! {
        form id="comment-limit-form" {
            label for="comment-limit" { "Number of comments" }
            input
                type="number"
                id="comment-limit"
                name="comment-limit"
                min=(CommentLimit::MIN)
                max=(CommentLimit::MAX)
                value=(CommentLimit::DEFAULT.get());
        }
    }
}
