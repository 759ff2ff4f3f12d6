use portfolio_entities::builders::*;

use super::*;

pub mod prelude {
    use crate::web::{self, api};

    pub use crate::web::tests::prelude::{LocalResponse as Response, *};

    pub fn setup() -> (Client, Store) {
        web::tests::setup(vec![("/", api::routes())])
    }

    /// A client on a store without any tables, so that every
    /// access of the store fails.
    pub fn setup_without_schema() -> Client {
        let store = Store::open(":memory:", 1).unwrap();
        web::tests::setup_with_store(vec![("/", api::routes())], store)
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn submit_comment<'c>(client: &'c Client, body: &str) -> Response<'c> {
        client
            .post("/add-comments")
            .header(ContentType::Form)
            .body(body.to_owned())
            .dispatch()
    }

    pub fn fetch_comments(client: &Client, uri: &str) -> Vec<String> {
        let res = client.get(uri.to_owned()).dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        serde_json::from_str(&res.into_string().unwrap()).unwrap()
    }
}

use self::prelude::*;

fn add_comments_directly(store: &Store, count: i64) {
    let db = store.write().unwrap();
    for i in 0..count {
        db.create_comment(
            Comment::build()
                .comment(&format!("comment {i}"))
                .name("someone")
                .created_at(1_000 + i)
                .finish(),
        )
        .unwrap();
    }
}

#[test]
fn list_comments_of_empty_store() {
    let (client, _) = setup();
    let res = client.get("/add-comments").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    assert_eq!("[]", res.into_string().unwrap());
}

#[test]
fn add_a_comment_and_redirect() {
    let (client, db) = setup();
    let res = submit_comment(&client, "comment-input=Hello&name-input=Ada");
    assert_eq!(res.status(), Status::Found);
    assert_eq!(res.headers().get_one("Location"), Some("/index.html"));
    assert_eq!(1, db.read().unwrap().count_comments().unwrap());
    assert_eq!(
        vec!["Hello by Ada"],
        fetch_comments(&client, "/add-comments?comment-limit=1")
    );
}

#[test]
fn most_recent_comment_first() {
    let (client, _) = setup();
    submit_comment(&client, "comment-input=A&name-input=X");
    submit_comment(&client, "comment-input=B&name-input=Y");
    assert_eq!(
        vec!["B by Y"],
        fetch_comments(&client, "/add-comments?comment-limit=1")
    );
    assert_eq!(
        vec!["B by Y", "A by X"],
        fetch_comments(&client, "/add-comments")
    );
}

#[test]
fn list_comments_ordered_by_timestamp() {
    let (client, db) = setup();
    {
        let db = db.write().unwrap();
        for (c, t) in [("middle", 20), ("oldest", 10), ("newest", 30)] {
            db.create_comment(Comment::build().comment(c).name("n").created_at(t).finish())
                .unwrap();
        }
    }
    assert_eq!(
        vec!["newest by n", "middle by n", "oldest by n"],
        fetch_comments(&client, "/add-comments")
    );
}

#[test]
fn zero_limit_returns_empty_array() {
    let (client, db) = setup();
    add_comments_directly(&db, 3);
    let res = client.get("/add-comments?comment-limit=0").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!("[]", res.into_string().unwrap());
}

#[test]
fn negative_limit_returns_empty_array() {
    let (client, db) = setup();
    add_comments_directly(&db, 3);
    assert!(fetch_comments(&client, "/add-comments?comment-limit=-3").is_empty());
}

#[test]
fn limit_is_respected() {
    let (client, db) = setup();
    add_comments_directly(&db, 20);
    for limit in [1, 5, 10, 19, 20, 50, 100] {
        let comments = fetch_comments(&client, &format!("/add-comments?comment-limit={limit}"));
        assert_eq!(comments.len(), limit.min(20));
    }
}

#[test]
fn default_limit_for_missing_or_malformed_input() {
    let (client, db) = setup();
    add_comments_directly(&db, 15);
    let expected = fetch_comments(&client, "/add-comments?comment-limit=10");
    assert_eq!(10, expected.len());
    assert_eq!(expected, fetch_comments(&client, "/add-comments"));
    assert_eq!(
        expected,
        fetch_comments(&client, "/add-comments?comment-limit=abc")
    );
    assert_eq!(expected, fetch_comments(&client, "/add-comments?comment-limit="));
    assert_eq!(
        expected,
        fetch_comments(&client, "/add-comments?comment-limit=2.5")
    );
    assert_eq!(
        expected,
        fetch_comments(&client, "/add-comments?comment-limit=99999999999")
    );
}

#[test]
fn large_limit_is_capped() {
    let (client, db) = setup();
    add_comments_directly(&db, 105);
    assert_eq!(
        100,
        fetch_comments(&client, "/add-comments?comment-limit=101").len()
    );
    assert_eq!(
        100,
        fetch_comments(&client, "/add-comments?comment-limit=5000").len()
    );
    let comments = fetch_comments(&client, "/add-comments?comment-limit=100");
    assert_eq!("comment 104 by someone", comments[0]);
    assert_eq!("comment 5 by someone", comments[99]);
}

#[test]
fn unknown_query_parameters_are_ignored() {
    let (client, db) = setup();
    add_comments_directly(&db, 3);
    assert_eq!(
        2,
        fetch_comments(&client, "/add-comments?foo=bar&comment-limit=2").len()
    );
}

#[test]
fn add_comment_without_fields() {
    let (client, _) = setup();
    let res = submit_comment(&client, "");
    assert_eq!(res.status(), Status::Found);
    assert_eq!(vec!["null by null"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn add_comment_with_empty_fields() {
    let (client, _) = setup();
    submit_comment(&client, "comment-input=&name-input=");
    assert_eq!(vec![" by "], fetch_comments(&client, "/add-comments"));
}

#[test]
fn add_comment_with_only_a_name() {
    let (client, _) = setup();
    submit_comment(&client, "name-input=Grace");
    assert_eq!(vec!["null by Grace"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn add_comment_with_encoded_text() {
    let (client, _) = setup();
    submit_comment(
        &client,
        "comment-input=Hello%2C%20world%21&name-input=Ada%20Lovelace&extra=ignored",
    );
    assert_eq!(
        vec!["Hello, world! by Ada Lovelace"],
        fetch_comments(&client, "/add-comments")
    );
}

#[test]
fn delete_all_comments() {
    let (client, db) = setup();
    add_comments_directly(&db, 7);
    submit_comment(&client, "comment-input=Hello&name-input=Ada");
    let res = client.post("/delete-comments").dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert!(res.into_string().unwrap_or_default().is_empty());
    assert_eq!(0, db.read().unwrap().count_comments().unwrap());
    for limit in ["0", "1", "10", "100"] {
        assert!(fetch_comments(&client, &format!("/add-comments?comment-limit={limit}")).is_empty());
    }
}

#[test]
fn delete_comments_of_empty_store() {
    let (client, _) = setup();
    let res = client.post("/delete-comments").dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn add_after_delete() {
    let (client, _) = setup();
    submit_comment(&client, "comment-input=first&name-input=X");
    client.post("/delete-comments").dispatch();
    submit_comment(&client, "comment-input=second&name-input=Y");
    assert_eq!(vec!["second by Y"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn delete_is_not_available_via_get() {
    let (client, db) = setup();
    add_comments_directly(&db, 1);
    let res = client.get("/delete-comments").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    assert_eq!(1, db.read().unwrap().count_comments().unwrap());
}

#[test]
fn add_comment_without_body() {
    let (client, _) = setup();
    let res = client.post("/add-comments").dispatch();
    assert_eq!(res.status(), Status::Found);
    assert_eq!(res.headers().get_one("Location"), Some("/index.html"));
    assert_eq!(vec!["null by null"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn add_comment_with_plain_text_body() {
    let (client, _) = setup();
    let res = client
        .post("/add-comments")
        .header(ContentType::Plain)
        .body("comment-input=Hello&name-input=Ada")
        .dispatch();
    assert_eq!(res.status(), Status::Found);
    assert_eq!(vec!["null by null"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn add_comment_with_query_parameters() {
    let (client, _) = setup();
    let res = client
        .post("/add-comments?comment-input=Hi&name-input=Me")
        .dispatch();
    assert_eq!(res.status(), Status::Found);
    assert_eq!(vec!["Hi by Me"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn query_parameters_precede_form_fields() {
    let (client, _) = setup();
    client
        .post("/add-comments?name-input=Query")
        .header(ContentType::Form)
        .body("comment-input=Body&name-input=Body")
        .dispatch();
    assert_eq!(vec!["Body by Query"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn first_of_repeated_form_fields_is_stored() {
    let (client, _) = setup();
    submit_comment(&client, "comment-input=one&comment-input=two&name-input=Ada");
    assert_eq!(vec!["one by Ada"], fetch_comments(&client, "/add-comments"));
}

#[test]
fn first_of_repeated_limits_is_used() {
    let (client, db) = setup();
    add_comments_directly(&db, 15);
    assert_eq!(
        5,
        fetch_comments(&client, "/add-comments?comment-limit=5&comment-limit=7").len()
    );
    assert_eq!(
        10,
        fetch_comments(&client, "/add-comments?comment-limit=abc&comment-limit=7").len()
    );
}

#[test]
fn store_failures_are_internal_server_errors() {
    let client = setup_without_schema();

    let res = client.get("/add-comments").dispatch();
    assert_eq!(res.status(), Status::InternalServerError);
    assert_ne!(res.content_type(), Some(ContentType::JSON));

    let res = submit_comment(&client, "comment-input=Hello&name-input=Ada");
    assert_eq!(res.status(), Status::InternalServerError);
    assert_eq!(res.headers().get_one("Location"), None);

    let res = client.post("/delete-comments").dispatch();
    assert_eq!(res.status(), Status::InternalServerError);
}
