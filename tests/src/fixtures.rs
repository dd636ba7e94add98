//! Seed stores used across the integration tests.

use recache_core::{record, Collection, Store, Value};

/// A todo list with a settings singleton.
pub fn todos() -> Store {
    Store::new()
        .with(
            "todos",
            Collection::sequence(vec![
                record! { "id" => 1, "text" => "a", "done" => false },
                record! { "id" => 2, "text" => "b", "done" => true },
            ]),
        )
        .with(
            "settings",
            Collection::singleton(record! { "theme" => "dark", "__typename" => "Settings" }),
        )
}

/// Posts with comment relations, plus the comments themselves.
pub fn blog() -> Store {
    let comment = |id: i64, body: &str| {
        record! { "id" => id, "body" => body, "__typename" => "Comment" }
    };

    Store::new()
        .with(
            "posts",
            Collection::sequence(vec![
                record! {
                    "id" => "p1",
                    "title" => "Hello",
                    "comments" => vec![Value::record(comment(10, "first"))],
                    "__typename" => "Post",
                },
                record! {
                    "id" => "p2",
                    "title" => "Again",
                    "comments" => Vec::<Value>::new(),
                    "__typename" => "Post",
                },
            ]),
        )
        .with(
            "comments",
            Collection::sequence(vec![comment(10, "first")]),
        )
        .with(
            "viewer",
            Collection::singleton(record! { "id" => "u1", "name" => "Ann" }),
        )
}

/// The `todos` fixture in JSON form.
pub const TODOS_JSON: &str = r#"{
    "todos": [
        {"id": 1, "text": "a", "done": false},
        {"id": 2, "text": "b", "done": true}
    ],
    "settings": {"theme": "dark", "__typename": "Settings"}
}"#;
