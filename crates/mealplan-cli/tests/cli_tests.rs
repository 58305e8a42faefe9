use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn mp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mp").expect("Failed to find mp binary");
    cmd.arg("--no-color");
    cmd
}

/// Run a command against the database and return its stdout
fn run_ok(db_arg: &str, args: &[&str]) -> String {
    let output = mp_cmd()
        .args(["--database-file", db_arg])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("Invalid UTF-8")
}

/// Pull the identifier out of a "Created <kind> with ID: <id>" line
fn extract_id_from_output(output: &str) -> String {
    let start = output
        .find("with ID: ")
        .map(|pos| pos + "with ID: ".len())
        .expect("No ID found in output");
    output[start..]
        .split_whitespace()
        .next()
        .expect("Empty ID")
        .to_string()
}

#[test]
fn test_cli_create_plan_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mp_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "create",
            "Family week",
            "--description",
            "Dinners for four",
            "--category",
            "family",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: plan-"))
        .stdout(predicate::str::contains("# Family week"))
        .stdout(predicate::str::contains("Dinners for four"))
        .stdout(predicate::str::contains("- Active: yes"));
}

#[test]
fn test_cli_create_plan_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mp_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "plan", "create", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create plan"));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mp_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_no_command_without_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mp_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active plan"));
}

#[test]
fn test_cli_no_command_shows_week() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["plan", "create", "Week"]);
    run_ok(db_arg, &["meal", "add", "Tacos", "--type", "dinner", "--day", "tue"]);

    mp_cmd()
        .args(["--database-file", db_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week"))
        .stdout(predicate::str::contains("## Monday"))
        .stdout(predicate::str::contains("- **Dinner**: Tacos"))
        .stdout(predicate::str::contains("## Sunday"));
}

#[test]
fn test_cli_activate_and_delete_guard() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let first = extract_id_from_output(&run_ok(db_arg, &["plan", "create", "First"]));
    let second = extract_id_from_output(&run_ok(db_arg, &["plan", "create", "Second"]));

    mp_cmd()
        .args(["--database-file", db_arg, "plan", "delete", &first])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot delete the active plan"));

    mp_cmd()
        .args(["--database-file", db_arg, "plan", "activate", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan 'Second' is now active"));

    mp_cmd()
        .args(["--database-file", db_arg, "plan", "delete", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan 'First'"));

    mp_cmd()
        .args(["--database-file", db_arg, "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second"))
        .stdout(predicate::str::contains("(active)"))
        .stdout(predicate::str::contains("First").not());
}

#[test]
fn test_cli_update_and_duplicate_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = extract_id_from_output(&run_ok(db_arg, &["plan", "create", "Week"]));

    mp_cmd()
        .args([
            "--database-file",
            db_arg,
            "plan",
            "update",
            &id,
            "--name",
            "Cutting week",
            "--category",
            "fitness",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan with ID:"))
        .stdout(predicate::str::contains("- Updated name"))
        .stdout(predicate::str::contains("- Updated category"));

    mp_cmd()
        .args(["--database-file", db_arg, "plan", "duplicate", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Cutting week (Copy)"))
        .stdout(predicate::str::contains("- Active: no"));
}

#[test]
fn test_cli_show_unknown_plan_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mp_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "show",
            "plan-missing",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID plan-missing not found"));
}

#[test]
fn test_cli_meal_requires_active_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mp_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "meal",
            "add",
            "Porridge",
            "--type",
            "breakfast",
            "--day",
            "monday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active plan"));
}

#[test]
fn test_cli_meal_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["plan", "create", "Week"]);
    let output = run_ok(
        db_arg,
        &[
            "meal",
            "add",
            "Pizza",
            "-t",
            "dinner",
            "-d",
            "friday",
            "--ingredients",
            "cheese,dough",
            "--cook-time",
            "25",
        ],
    );
    assert!(output.contains("Created meal with ID: meal-"));
    assert!(output.contains("#### Recipe: Pizza (custom)"));
    let meal_id = extract_id_from_output(&output);

    mp_cmd()
        .args(["--database-file", db_arg, "meal", "favorite", &meal_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked"));

    mp_cmd()
        .args(["--database-file", db_arg, "meal", "list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza ★"));

    mp_cmd()
        .args(["--database-file", db_arg, "meal", "search", "DOUGH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pizza"));

    mp_cmd()
        .args(["--database-file", db_arg, "meal", "filter", "--max-cook-time", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 active filters"))
        .stdout(predicate::str::contains("No meals found."));

    mp_cmd()
        .args(["--database-file", db_arg, "meal", "delete", &meal_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted meal 'Pizza'"));

    // Deleting again is a no-op
    mp_cmd()
        .args(["--database-file", db_arg, "meal", "delete", &meal_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn test_cli_delete_missing_entries() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    // Without an active plan the lookup error is reported, not swallowed
    mp_cmd()
        .args(["--database-file", db_arg, "meal", "delete", "meal-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active plan"));

    run_ok(db_arg, &["plan", "create", "Week"]);

    for (kind, id) in [
        ("plan", "plan-missing"),
        ("meal", "meal-missing"),
        ("recipe", "recipe-missing"),
    ] {
        mp_cmd()
            .args(["--database-file", db_arg, kind, "delete", id])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("{id} does not exist; nothing deleted")));
    }
}

#[test]
fn test_cli_recipe_cascade() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["plan", "create", "Week"]);
    let recipe_id = extract_id_from_output(&run_ok(
        db_arg,
        &["recipe", "add", "Dal", "--ingredients", "lentils,onion", "--servings", "4"],
    ));
    let meal_id = extract_id_from_output(&run_ok(
        db_arg,
        &["meal", "add", "Dal night", "-t", "dinner", "-d", "wed", "--recipe", &recipe_id],
    ));

    mp_cmd()
        .args(["--database-file", db_arg, "recipe", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Dal"));

    mp_cmd()
        .args(["--database-file", db_arg, "recipe", "delete", &recipe_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted recipe 'Dal'"));

    mp_cmd()
        .args(["--database-file", db_arg, "plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dal night"))
        .stdout(predicate::str::contains("No recipes in this plan."));

    mp_cmd()
        .args(["--database-file", db_arg, "shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ingredients to shop for."));

    assert!(!meal_id.is_empty());
}

#[test]
fn test_cli_shopping_list_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let list_path = temp_dir.path().join("list.txt");

    run_ok(db_arg, &["plan", "create", "Week"]);
    run_ok(
        db_arg,
        &["meal", "add", "Pizza", "-t", "dinner", "-d", "fri", "-i", "cheese,dough"],
    );
    run_ok(
        db_arg,
        &["meal", "add", "Salad", "-t", "lunch", "-d", "fri", "-i", "Cheese,greens"],
    );

    mp_cmd()
        .args([
            "--database-file",
            db_arg,
            "shopping",
            "--output",
            list_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2x) cheese *from Pizza, Salad*"))
        .stdout(predicate::str::contains("Wrote 3 item(s)"));

    let text = std::fs::read_to_string(&list_path).expect("list file should exist");
    assert_eq!(text, "(2x) cheese\ndough\ngreens");
}

#[test]
fn test_cli_stats_and_prep() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["plan", "create", "Week"]);
    run_ok(
        db_arg,
        &["meal", "add", "Roast", "-t", "dinner", "-d", "sun", "--cook-time", "90", "--servings", "4"],
    );

    mp_cmd()
        .args(["--database-file", db_arg, "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Total meals: 1"))
        .stdout(predicate::str::contains("- Sunday: 1"));

    mp_cmd()
        .args(["--database-file", db_arg, "prep", "--day", "sunday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Preparation for Sunday"))
        .stdout(predicate::str::contains("- Total cook time: 1 h 30 min"))
        .stdout(predicate::str::contains("- Total servings: 4"));
}

#[test]
fn test_cli_export_and_import() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let export_dir = temp_dir.path().join("exports");

    run_ok(db_arg, &["plan", "create", "Source"]);
    run_ok(db_arg, &["meal", "add", "Tacos", "-t", "dinner", "-d", "tue"]);

    let output = run_ok(
        db_arg,
        &["export", "--dir", export_dir.to_str().unwrap()],
    );
    assert!(output.contains("Exported to"));

    let exported = std::fs::read_dir(&export_dir)
        .expect("export dir should exist")
        .next()
        .expect("one export file")
        .expect("readable entry")
        .path();
    let file_name = exported.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("meal-planner-data-"));

    let target = extract_id_from_output(&run_ok(db_arg, &["plan", "create", "Target"]));
    run_ok(db_arg, &["plan", "activate", &target]);

    mp_cmd()
        .args(["--database-file", db_arg, "import", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 meal(s) and 0 recipe(s)"));

    mp_cmd()
        .args(["--database-file", db_arg, "meal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tacos"));
}

#[test]
fn test_cli_import_rejects_malformed_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let bad = temp_dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"version": 2, "meals": []}"#).unwrap();

    run_ok(db_arg, &["plan", "create", "Week"]);

    mp_cmd()
        .args(["--database-file", db_arg, "import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid import file"));

    let blank = temp_dir.path().join("blank.json");
    std::fs::write(
        &blank,
        r#"{"meals":[{"id":"","name":"   ","type":"dinner","day":"Monday"}]}"#,
    )
    .unwrap();

    mp_cmd()
        .args(["--database-file", db_arg, "import", blank.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("meals[0]"));

    mp_cmd()
        .args(["--database-file", db_arg, "meal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No meals found."));
}

#[test]
fn test_cli_clear_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["plan", "create", "Week"]);

    mp_cmd()
        .args(["--database-file", db_arg, "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));

    mp_cmd()
        .args(["--database-file", db_arg, "clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 plan(s)"));

    mp_cmd()
        .args(["--database-file", db_arg, "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_schema() {
    mp_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exportDate\""))
        .stdout(predicate::str::contains("\"meals\""));
}

#[test]
fn test_cli_rejects_unknown_day() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mp_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "meal",
            "add",
            "Soup",
            "-t",
            "lunch",
            "-d",
            "funday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
