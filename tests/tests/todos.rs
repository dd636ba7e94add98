//! Todo-list scenarios: sequence and singleton mutations.

use recache_tests::prelude::*;

mod create_and_update {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("create_and_update")
            .store(fixtures::todos())
            .step(
                "append_todo",
                MutationCommand::create_array("todos", record! { "id" => 3, "text" => "c" }),
                |a| a.len("todos", 3).has("todos", 3).field("todos", 3, "__typename", Value::Null).shares("settings"),
            )
            .step(
                "rename_first",
                MutationCommand::update_array("todos", 1, record! { "text" => "b" }),
                |a| {
                    a.field("todos", 1, "text", "b")
                        .field("todos", 1, "done", false)
                        .field("todos", 1, "__typename", Value::Null)
                        .len("todos", 3)
                },
            )
            .step(
                "update_settings",
                MutationCommand::update_object("settings", record! { "theme" => "light" }),
                |a| {
                    a.singleton_field("settings", "theme", "light")
                        .singleton_field("settings", "__typename", "Settings")
                        .shares("todos")
                },
            )
    }

    #[test]
    fn test_create_and_update() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod delete {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("delete")
            .store(fixtures::todos())
            .step("delete_first", MutationCommand::delete_array("todos", 1), |a| {
                a.missing("todos", 1).has("todos", 2).len("todos", 1)
            })
            .step("delete_absent", MutationCommand::delete_array("todos", 1), |a| {
                a.len("todos", 1)
            })
            .step("delete_last", MutationCommand::delete_array("todos", 2), |a| {
                a.len("todos", 0)
            })
    }

    #[test]
    fn test_delete() {
        scenario().run().unwrap();
    }
}

mod failures {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("failures")
            .store(fixtures::todos())
            .step(
                "update_unknown_id",
                MutationCommand::update_array("todos", 99, record! { "text" => "x" }),
                |a| a.error("Record not found"),
            )
            .step(
                "delete_from_absent_key",
                MutationCommand::delete_array("tags", 1),
                |a| a.error("Missing collection"),
            )
            .step(
                "update_object_on_sequence",
                MutationCommand::update_object("todos", record! { "text" => "x" }),
                |a| a.error("Shape mismatch"),
            )
            .step(
                "append_to_singleton",
                MutationCommand::create_array("settings", record! { "id" => 1 }),
                |a| a.error("Shape mismatch"),
            )
            .step("noop", MutationCommand::Noop, |a| a.unchanged())
            .step(
                "still_intact",
                MutationCommand::update_array("todos", 2, record! { "done" => false }),
                |a| a.len("todos", 2).field("todos", 2, "done", false),
            )
    }

    #[test]
    fn test_failures_leave_store_unchanged() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_scenario_reports_failed_assertion() {
    // GIVEN
    let scenario = Scenario::new("wrong_expectation")
        .store(fixtures::todos())
        .step("delete", MutationCommand::delete_array("todos", 1), |a| {
            a.has("todos", 1)
        });

    // WHEN
    let err = scenario.run().unwrap_err();

    // THEN
    assert!(matches!(err, ScenarioError::AssertionFailed { .. }));
}

#[test]
fn test_create_missing_collections_disabled() {
    let executor = MutationExecutor::new(
        EngineConfig::default().with_create_missing_collections(false),
    );
    let command = MutationCommand::create_array("tags", record! { "id" => "t" });

    let err = executor.apply(&fixtures::todos(), &command).unwrap_err();

    assert!(matches!(err, MutationError::MissingKey { ref key } if key == "tags"));
}
