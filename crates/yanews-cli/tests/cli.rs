use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn yanews(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yanews").unwrap();
    cmd.env_remove("YANEWS_USER")
        .env_remove("YANEWS_DATA_DIR")
        .arg("--no-color")
        .arg("--data-dir")
        .arg(data.path());
    cmd
}

/// Data directory with one news item (id 1)
fn with_news() -> TempDir {
    let data = TempDir::new().unwrap();
    yanews(&data)
        .args(["publish", "--title", "Заголовок", "--text", "Текст "])
        .assert()
        .success();
    data
}

#[test]
fn home_is_limited_to_one_page() {
    let data = TempDir::new().unwrap();
    yanews(&data).args(["seed", "--count", "12"]).assert().success();

    let output = yanews(&data).args(["home", "--json"]).output().unwrap();
    assert!(output.status.success());
    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 10);
}

#[test]
fn anonymous_comment_redirects_to_login() {
    let data = with_news();

    yanews(&data)
        .args(["comment", "1", "Новый текст"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("302 /auth/login/?next=/news/1/"));

    yanews(&data)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments (0)"))
        .stdout(predicate::str::contains("You can leave a comment.").not());
}

#[test]
fn author_comment_redirects_to_comments() {
    let data = with_news();

    yanews(&data)
        .args(["--user", "Автор", "comment", "1", "Новый текст"])
        .assert()
        .success()
        .stdout(predicate::str::contains("302 /news/1/#comments"));

    yanews(&data)
        .args(["--user", "Автор", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments (1)"))
        .stdout(predicate::str::contains("Новый текст"))
        .stdout(predicate::str::contains("You can leave a comment."));
}

#[test]
fn censored_comment_is_redisplayed() {
    let data = with_news();

    yanews(&data)
        .args(["--user", "Автор", "comment", "1", "Не ругайтесь!, ('редиска', 'негодяй')"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("200"))
        .stdout(predicate::str::contains("Не ругайтесь!"))
        .stdout(predicate::str::contains("Comments (0)"));
}

#[test]
fn only_author_can_edit_and_delete() {
    let data = with_news();
    yanews(&data)
        .args(["--user", "Автор", "comment", "1", "Текст комментария"])
        .assert()
        .success();

    yanews(&data)
        .args(["--user", "Не автор", "edit", "1", "Отредактированный текст"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("404"));

    yanews(&data)
        .args(["--user", "Не автор", "delete", "1", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("404"));

    yanews(&data)
        .args(["--user", "Автор", "edit", "1", "Отредактированный текст"])
        .assert()
        .success()
        .stdout(predicate::str::contains("302 /news/1/#comments"));

    yanews(&data)
        .args(["--user", "Автор", "edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Отредактированный текст"));

    yanews(&data)
        .args(["--user", "Автор", "delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("302 /news/1/#comments"));

    yanews(&data)
        .args(["--user", "Автор", "delete", "1", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("404"));
}

#[test]
fn anonymous_edit_redirects_to_login() {
    let data = with_news();

    yanews(&data)
        .args(["edit", "7", "text"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("302 /auth/login/?next=/edit_comment/7/"));

    yanews(&data)
        .args(["delete", "7", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("302 /auth/login/?next=/delete_comment/7/"));
}

#[test]
fn forbid_policy_from_config() {
    let data = with_news();
    std::fs::write(
        data.path().join("config.toml"),
        "[news]\ndenial_policy = \"forbid\"\n",
    )
    .unwrap();

    yanews(&data)
        .args(["--user", "Автор", "comment", "1", "Текст комментария"])
        .assert()
        .success();

    yanews(&data)
        .args(["--user", "Не автор", "delete", "1", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("403"));
}

#[test]
fn comments_lists_only_own() {
    let data = with_news();
    yanews(&data)
        .args(["--user", "Автор", "comment", "1", "Мой комментарий"])
        .assert()
        .success();
    yanews(&data)
        .args(["--user", "Не автор", "comment", "1", "Чужой комментарий"])
        .assert()
        .success();

    yanews(&data)
        .args(["--user", "Автор", "comments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Мой комментарий"))
        .stdout(predicate::str::contains("Чужой комментарий").not());

    yanews(&data)
        .args(["comments"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--user"));
}

#[test]
fn home_prints_status_line() {
    let data = with_news();

    yanews(&data)
        .args(["home"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("200 /"))
        .stdout(predicate::str::contains("Заголовок"));
}
