use crate::helpers::harness::with_test_db;
use pgdiff::catalog::function::fetch;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn definition_is_rendered_as_create_or_replace() {
    with_test_db(async |db| {
        db.execute(
            "CREATE FUNCTION add_one(x INT) RETURNS INT AS $$ SELECT x + 1 $$ LANGUAGE sql",
        )
        .await;

        let functions = fetch(db.pool()).await.unwrap();
        let f = functions.iter().find(|f| f.name == "add_one").unwrap();
        assert!(f.definition.contains("CREATE OR REPLACE FUNCTION"));
        assert_eq!(f.signature, "integer");
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn overloaded_functions_get_distinct_signatures() {
    with_test_db(async |db| {
        db.execute("CREATE FUNCTION f(x INT) RETURNS INT AS $$ SELECT x $$ LANGUAGE sql")
            .await;
        db.execute("CREATE FUNCTION f(x TEXT) RETURNS TEXT AS $$ SELECT x $$ LANGUAGE sql")
            .await;

        let functions = fetch(db.pool()).await.unwrap();
        let signatures: Vec<&str> = functions
            .iter()
            .filter(|f| f.name == "f")
            .map(|f| f.signature.as_str())
            .collect();
        assert_eq!(signatures.len(), 2);
        assert!(signatures.contains(&"integer"));
        assert!(signatures.contains(&"text"));
    })
    .await;
}
