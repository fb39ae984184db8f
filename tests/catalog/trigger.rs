use crate::helpers::harness::with_test_db;
use pgdiff::catalog::trigger::fetch;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn fetches_trigger_table_and_definition() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (id INT)").await;
        db.execute(
            "CREATE FUNCTION noop() RETURNS TRIGGER AS $$ BEGIN RETURN NEW; END; $$ LANGUAGE plpgsql",
        )
        .await;
        db.execute("CREATE TRIGGER tr BEFORE INSERT ON t FOR EACH ROW EXECUTE FUNCTION noop()")
            .await;

        let triggers = fetch(db.pool()).await.unwrap();
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].name, "tr");
        assert_eq!(triggers[0].table_name, "t");
        assert!(triggers[0].definition.starts_with("CREATE TRIGGER"));
    })
    .await;
}
