// tests/cli_tests.rs

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn tokens_dumps_kind_names_in_order() {
    Command::cargo_bin("vsharp")
        .unwrap()
        .args(["tokens", "tests/fixtures/simple.vsh"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Comment\nKwDefine\nKwPublic\n"))
        .stdout(predicate::str::contains("KwReturn"))
        .stdout(predicate::str::ends_with("EOF\n"));
}

#[test]
fn tokens_fails_on_missing_file() {
    Command::cargo_bin("vsharp")
        .unwrap()
        .args(["tokens", "tests/fixtures/missing.vsh"])
        .assert()
        .failure();
}

#[test]
fn lsp_answers_over_stdio() {
    let initialize = r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#;
    let exit = r#"{"jsonrpc":"2.0","method":"exit"}"#;
    let input = format!(
        "Content-Length: {}\r\n\r\n{}Content-Length: {}\r\n\r\n{}",
        initialize.len(),
        initialize,
        exit.len(),
        exit
    );

    Command::cargo_bin("vsharp")
        .unwrap()
        .arg("lsp")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Content-Length:"))
        .stdout(predicate::str::contains("completionProvider"));
}
