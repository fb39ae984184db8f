use crate::helpers::harness::with_test_db;
use pgdiff::catalog::view::fetch;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn fetches_normalized_select_text() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (a INT)").await;
        db.execute("CREATE VIEW v AS SELECT a FROM t").await;

        let views = fetch(db.pool()).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].schema, "public");
        assert_eq!(views[0].name, "v");
        assert!(views[0].definition.to_lowercase().contains("select a"));
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn materialized_views_are_not_fetched() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (a INT)").await;
        db.execute("CREATE MATERIALIZED VIEW mv AS SELECT a FROM t")
            .await;

        let views = fetch(db.pool()).await.unwrap();
        assert!(!views.iter().any(|v| v.name == "mv"));
    })
    .await;
}
