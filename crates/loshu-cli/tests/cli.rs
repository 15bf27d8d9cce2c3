//! CLI command integration tests.
//! The binary reads only embedded assets, so no scratch state is needed.

use assert_cmd::Command;
use predicates::prelude::*;

fn loshu_cmd() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("loshu").unwrap();
    cmd
}

#[test]
fn square_three_prints_padded_grid() {
    loshu_cmd()
        .args(["square", "3"])
        .assert()
        .success()
        .stdout("  8   1   6\n  3   5   7\n  4   9   2\n");
}

#[test]
fn square_four_prints_padded_grid() {
    loshu_cmd()
        .args(["square", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 16   2   3  13"))
        .stdout(predicate::str::contains("  4  14  15   1"));
}

#[test]
fn square_unsupported_size_exits_zero() {
    for n in ["0", "1", "2", "5", "10", "-1"] {
        loshu_cmd()
            .args(["square", n])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "currently only n = 3 or 4 is supported",
            ));
    }
}

#[test]
fn square_json_output() {
    loshu_cmd()
        .args(["square", "3", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"order\":3"))
        .stdout(predicate::str::contains("\"cells\":[8,1,6,3,5,7,4,9,2]"));
}

#[test]
fn hello_greets() {
    loshu_cmd().arg("hello").assert().success().stdout("Hello!\n");
}

#[test]
fn quote_prints_bundled_text() {
    loshu_cmd()
        .arg("quote")
        .assert()
        .success()
        .stdout(predicate::str::contains("already taken"));
}

#[test]
fn dot_known_value() {
    loshu_cmd()
        .args(["dot", "1,2,3", "4,5,6"])
        .assert()
        .success()
        .stdout("32\n");
}

#[test]
fn dot_length_mismatch_fails() {
    loshu_cmd()
        .args(["dot", "1,2", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lengths differ"));
}

#[test]
fn dot_rejects_non_numeric() {
    loshu_cmd()
        .args(["dot", "1,two", "3,4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn missing_required_args() {
    // square without n
    loshu_cmd()
        .arg("square")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));

    // dot without vectors
    loshu_cmd()
        .arg("dot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
