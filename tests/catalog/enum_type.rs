use crate::helpers::harness::with_test_db;
use pgdiff::catalog::enum_type::fetch;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn fetches_elements_in_sort_order() {
    with_test_db(async |db| {
        db.execute("CREATE TYPE mood AS ENUM ('sad', 'ok', 'great')")
            .await;

        let enums = fetch(db.pool()).await.unwrap();
        let mood = enums.iter().find(|e| e.name == "mood").unwrap();
        assert_eq!(mood.elements, vec!["sad", "ok", "great"]);
    })
    .await;
}
