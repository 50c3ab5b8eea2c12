//! End-to-end tests for the rbviz binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rbviz() -> Command {
    let mut cmd = Command::cargo_bin("rbviz").unwrap();
    cmd.env_remove("RBVIZ_CONFIG");
    cmd
}

#[test]
fn show_draws_ascending_three() {
    rbviz()
        .args(["show", "--keys", "10,20,30"])
        .assert()
        .success()
        .stdout("20 (black)\n|-- L 10 (red)\n`-- R 30 (red)\n");
}

#[test]
fn show_empty_tree() {
    rbviz()
        .arg("show")
        .assert()
        .success()
        .stdout("Tree is Empty\n");
}

#[test]
fn show_inorder_accepts_negative_keys() {
    rbviz()
        .args(["show", "--inorder", "--keys", "-5,3,0"])
        .assert()
        .success()
        .stdout("-5(red) 0(black) 3(red)\n");
}

#[test]
fn show_json_format() {
    let output = rbviz()
        .args(["show", "--format", "json", "--keys", "1,2,3,4"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["len"], 4);
    assert_eq!(value["root"]["key"], 2);
    assert_eq!(value["root"]["color"], "black");
}

#[test]
fn run_prints_status_lines() {
    rbviz()
        .args(["run", "--quiet", "insert 10", "insert 20", "insert 10", "search 10", "delete 7"])
        .assert()
        .success()
        .stdout(
            "Inserted: 10\nInserted: 20\nDuplicate: 10 already present\nFound 10 [Color: black]\nNode 7 not found.\n",
        );
}

#[test]
fn run_draws_final_tree_with_highlight() {
    rbviz()
        .args(["run", "insert 10; insert 20; insert 30", "search 30"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "20 (black)\n|-- L 10 (red)\n`-- R 30 (red) <==\n",
        ));
}

#[test]
fn run_rejects_invalid_integer() {
    rbviz()
        .args(["run", "insert 1", "insert one"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please enter a valid integer."));
}

#[test]
fn run_reads_script_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("ops.rbviz");
    std::fs::write(&script, "# build\ninsert 5\ninsert 3; insert 8\ndelete 3\ncheck\n").unwrap();

    rbviz()
        .args(["run", "--quiet", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: 3"))
        .stdout(predicate::str::contains("Tree is valid: 2 keys"));
}

#[test]
fn journal_goes_to_stderr() {
    rbviz()
        .args(["--log-format", "compact", "run", "--quiet", "insert 4", "insert 4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("I insert: inserted 4"))
        .stderr(predicate::str::contains("already present").not());

    rbviz()
        .args(["--log-level", "debug", "--log-format", "compact", "run", "--quiet", "insert 4", "insert 4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("D insert: 4 already present"));
}

#[test]
fn repl_reads_stdin() {
    rbviz()
        .arg("repl")
        .write_stdin("insert 5 # first\n\nsearch 5\ninsert five\nshow\nquit\ninsert 6\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ready. Tree is empty.\nInserted: 5\nFound 5 [Color: black]\n"))
        .stdout(predicate::str::contains("5 (black) <=="))
        .stdout(predicate::str::contains("Inserted: 6").not())
        .stderr(predicate::str::contains("error: Please enter a valid integer."));
}

#[test]
fn layout_emits_coordinates() {
    let output = rbviz()
        .args(["layout", "--keys", "10,20,30", "--highlight", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!((nodes[0]["x"].as_i64(), nodes[0]["y"].as_i64()), (Some(2000), Some(50)));
    assert_eq!((nodes[1]["x"].as_i64(), nodes[1]["y"].as_i64()), (Some(1600), Some(110)));
    assert_eq!(nodes[1]["highlighted"], true);
    assert_eq!(value["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn config_seeds_and_selects_renderer() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rbviz.yaml");
    std::fs::write(&path, "render: json\nseed: [10, 20, 30]\n").unwrap();

    let output = rbviz()
        .arg("--config")
        .arg(&path)
        .arg("show")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["len"], 3);

    rbviz()
        .arg("--config")
        .arg(&path)
        .args(["show", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("20 (black)\n"));
}

#[test]
fn show_saves_snapshot_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.json");

    rbviz()
        .args(["show", "--keys", "10,20,30,40"])
        .arg("--out")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Wrote "));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["len"], 4);
    assert_eq!(value["height"], 3);
    assert_eq!(value["root"]["key"], 20);
}

#[test]
fn out_of_range_layout_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rbviz.json");
    std::fs::write(&path, r#"{"layout": {"origin_x": 9223372036854775807}}"#).unwrap();

    rbviz()
        .arg("--config")
        .arg(&path)
        .args(["layout", "--keys", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("layout.origin_x"));
}

#[test]
fn init_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rbviz.yaml");

    rbviz().arg("init").arg(&path).assert().success();
    let loaded = rbviz_config::load_config(&path).unwrap();
    assert_eq!(loaded, rbviz_config::RbvizConfig::default());

    rbviz()
        .arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn missing_config_fails() {
    rbviz()
        .args(["--config", "/nonexistent/rbviz.yaml", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read config"));
}
