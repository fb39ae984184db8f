//! End-to-end `pgdiff sync` tests: a live database, a target schema piped on
//! stdin, and an assertion on the printed statements and exit code.

use crate::helpers::harness::with_test_db;
use assert_cmd::Command;
use predicates::prelude::*;

#[tokio::test]
#[ignore = "needs DATABASE_URL and a reachable Docker daemon"]
async fn no_drift_prints_nothing_and_exits_zero() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (id SERIAL PRIMARY KEY)").await;

        let mut cmd = Command::cargo_bin("pgdiff").unwrap();
        cmd.arg("sync")
            .arg(db.url())
            .write_stdin("CREATE TABLE t (id SERIAL PRIMARY KEY);")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL and a reachable Docker daemon"]
async fn added_column_is_reported_and_exits_one() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (id SERIAL PRIMARY KEY)").await;

        let mut cmd = Command::cargo_bin("pgdiff").unwrap();
        cmd.arg("sync")
            .arg(db.url())
            .write_stdin(
                "CREATE TABLE t (id SERIAL PRIMARY KEY, note TEXT NOT NULL DEFAULT '');",
            )
            .assert()
            .code(1)
            .stdout(predicate::str::contains("ADD COLUMN note"));
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL and a reachable Docker daemon"]
async fn schema_filter_ignores_objects_outside_the_glob() {
    with_test_db(async |db| {
        db.execute("CREATE SCHEMA reporting").await;
        db.execute("CREATE TABLE reporting.t (id INT)").await;

        let mut cmd = Command::cargo_bin("pgdiff").unwrap();
        cmd.arg("sync")
            .arg(db.url())
            .args(["--schemas", "public"])
            .write_stdin("")
            .assert()
            .success();
    })
    .await;
}
