use crate::helpers::harness::with_test_db;
use pgdiff::catalog::index::fetch;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn primary_key_backing_index_is_flagged() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (id SERIAL PRIMARY KEY)").await;

        let indexes = fetch(db.pool()).await.unwrap();
        let pk_index = indexes.iter().find(|i| i.name == "t_pkey").unwrap();
        assert!(pk_index.is_pk);
        assert!(pk_index.is_unique);
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn plain_index_is_neither_unique_nor_pk() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (a INT)").await;
        db.execute("CREATE INDEX t_a_idx ON t (a)").await;

        let indexes = fetch(db.pool()).await.unwrap();
        let idx = indexes.iter().find(|i| i.name == "t_a_idx").unwrap();
        assert!(!idx.is_pk);
        assert!(!idx.is_unique);
        assert!(idx.definition.starts_with("CREATE INDEX"));
    })
    .await;
}
