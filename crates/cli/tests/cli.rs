// CLI surface smoke tests; the server itself is covered by router tests.

use assert_cmd::Command;

#[test]
fn help_lists_the_serve_subcommand() {
    let assert = Command::cargo_bin("bookshelf-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("serve"));
}

#[test]
fn unknown_subcommands_are_rejected() {
    Command::cargo_bin("bookshelf-cli")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
