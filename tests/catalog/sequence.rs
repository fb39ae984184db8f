use crate::helpers::harness::with_test_db;
use pgdiff::catalog::sequence::fetch;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn fetches_standalone_sequence_attributes() {
    with_test_db(async |db| {
        db.execute("CREATE SEQUENCE s START WITH 5 INCREMENT BY 2 CYCLE")
            .await;

        let sequences = fetch(db.pool()).await.unwrap();
        let seq = sequences.iter().find(|s| s.name == "s").unwrap();
        assert_eq!(seq.start_value, 5);
        assert_eq!(seq.increment, 2);
        assert!(seq.cycle);
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn serial_column_sequence_is_fetched() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE t (id SERIAL PRIMARY KEY)").await;

        let sequences = fetch(db.pool()).await.unwrap();
        assert!(sequences.iter().any(|s| s.name == "t_id_seq"));
    })
    .await;
}
