use crate::helpers::harness::with_test_db;
use pgdiff::catalog::dependency::fetch;
use pgdiff::object::Identity;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn view_depends_on_its_underlying_table() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (a INT)").await;
        db.execute("CREATE VIEW v AS SELECT a FROM t").await;

        let edges = fetch(db.pool()).await.unwrap();
        assert!(edges.iter().any(|e| {
            e.prerequisite == Identity::new("public.t") && e.dependent == Identity::new("public.v")
        }));
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn index_depends_on_its_table() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (a INT)").await;
        db.execute("CREATE INDEX t_a_idx ON t (a)").await;

        let edges = fetch(db.pool()).await.unwrap();
        assert!(edges.iter().any(|e| {
            e.prerequisite == Identity::new("public.t")
                && e.dependent == Identity::new("public.t_a_idx")
        }));
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn trigger_depends_on_its_table_and_function() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (id INT)").await;
        db.execute(
            "CREATE FUNCTION noop() RETURNS TRIGGER AS $$ BEGIN RETURN NEW; END; $$ LANGUAGE plpgsql",
        )
        .await;
        db.execute("CREATE TRIGGER tr BEFORE INSERT ON t FOR EACH ROW EXECUTE FUNCTION noop()")
            .await;

        let edges = fetch(db.pool()).await.unwrap();
        let trigger_identity = Identity::new("public.tr on public.t");
        assert!(edges.iter().any(|e| {
            e.prerequisite == Identity::new("public.t") && e.dependent == trigger_identity
        }));
        assert!(edges.iter().any(|e| {
            e.prerequisite == Identity::new("public.noop()") && e.dependent == trigger_identity
        }));
    })
    .await;
}
