//! Blog scenarios: relation mutations.

use pretty_assertions::assert_eq;
use recache_tests::prelude::*;

mod connect {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("connect")
            .store(fixtures::blog())
            .step(
                "create_comment",
                MutationCommand::create_array("comments", record! { "id" => 11, "body" => "second" }),
                |a| a.has("comments", 11).shares("posts"),
            )
            .step(
                "connect_comment",
                MutationCommand::connect("posts", "p1", "comments", record! { "id" => 11 }),
                |a| {
                    a.linked("posts", "p1", "comments", 11)
                        .linked("posts", "p1", "comments", 10)
                        .shares("comments")
                        .shares("viewer")
                },
            )
            .step(
                "create_and_connect",
                MutationCommand::create_and_connect("posts", "p2", "comments", record! { "id" => 12 }),
                |a| a.linked("posts", "p2", "comments", 12).not_linked("posts", "p1", "comments", 12),
            )
    }

    #[test]
    fn test_connect() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod disconnect {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("disconnect")
            .store(fixtures::blog())
            .step(
                "disconnect_comment",
                MutationCommand::disconnect("posts", "p1", "comments", record! { "id" => 10 }),
                |a| a.not_linked("posts", "p1", "comments", 10).has("comments", 10),
            )
            .step(
                "disconnect_absent",
                MutationCommand::disconnect("posts", "p2", "comments", record! { "id" => 10 }),
                |a| a.not_linked("posts", "p2", "comments", 10),
            )
    }

    #[test]
    fn test_disconnect() {
        scenario().run().unwrap();
    }
}

mod disconnect_and_delete {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("disconnect_and_delete")
            .store(fixtures::blog())
            .step(
                "unlink",
                MutationCommand::disconnect_and_delete("posts", "p1", "comments", record! { "id" => 10 }),
                |a| a.not_linked("posts", "p1", "comments", 10).has("comments", 10),
            )
            .step(
                "delete",
                MutationCommand::delete_array("comments", 10),
                |a| a.missing("comments", 10).shares("posts"),
            )
    }

    #[test]
    fn test_unlink_then_delete() {
        scenario().run().unwrap();
    }
}

mod relation_failures {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("relation_failures")
            .store(fixtures::blog())
            .step(
                "unknown_owner",
                MutationCommand::connect("posts", "p9", "comments", record! { "id" => 1 }),
                |a| a.error("Record not found"),
            )
            .step(
                "not_a_relation",
                MutationCommand::connect("posts", "p1", "title", record! { "id" => 1 }),
                |a| a.error("Missing relation"),
            )
            .step(
                "payload_without_id",
                MutationCommand::disconnect("posts", "p1", "comments", record! { "body" => "x" }),
                |a| a.error("Malformed payload"),
            )
    }

    #[test]
    fn test_relation_failures() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_connected_record_is_tagged() {
    // GIVEN
    let store = fixtures::blog();
    let command = MutationCommand::connect(
        "posts",
        "p2",
        "comments",
        record! { "id" => 13, "author" => record! { "name" => "Bo" } },
    );

    // WHEN
    let after = apply(&store, &command).unwrap();

    // THEN
    let post = after.get("posts").unwrap().find(&Id::from("p2")).unwrap();
    let linked = post.relation("comments").unwrap()[0].as_record().unwrap();
    assert!(linked.is_tagged());
    assert_eq!(
        linked.get("author"),
        Some(&Value::record(record! { "name" => "Bo", "__typename" => Value::Null }))
    );
}
