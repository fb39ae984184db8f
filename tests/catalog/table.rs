use crate::helpers::harness::with_test_db;
use pgdiff::catalog::table::fetch;

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn fetches_columns_in_definition_order() {
    with_test_db(async |db| {
        db.execute(
            "CREATE TABLE users (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT
            )",
        )
        .await;

        let tables = fetch(db.pool()).await.unwrap();
        assert_eq!(tables.len(), 1);
        let table = &tables[0];

        assert_eq!(table.schema, "public");
        assert_eq!(table.name, "users");
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.columns[0].name, "id");
        assert!(table.columns[0].not_null);
        assert!(table.columns[0].default.is_some());
        assert_eq!(table.columns[1].name, "name");
        assert!(table.columns[1].not_null);
        assert_eq!(table.columns[2].name, "email");
        assert!(!table.columns[2].not_null);

        assert_eq!(table.constraints.len(), 1);
        assert!(table.constraints[0].definition.starts_with("PRIMARY KEY"));
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn fetches_compound_primary_key_as_one_constraint() {
    with_test_db(async |db| {
        db.execute(
            "CREATE TABLE order_items (
                order_id INTEGER NOT NULL,
                product_id INTEGER NOT NULL,
                PRIMARY KEY (order_id, product_id)
            )",
        )
        .await;

        let tables = fetch(db.pool()).await.unwrap();
        let table = &tables[0];
        assert_eq!(table.constraints.len(), 1);
        assert_eq!(
            table.constraints[0].definition,
            "PRIMARY KEY (order_id, product_id)"
        );
    })
    .await;
}

#[tokio::test]
#[ignore = "needs DATABASE_URL"]
async fn plain_table_is_not_mistaken_for_extension_owned() {
    with_test_db(async |db| {
        db.execute("CREATE TABLE owned_by_us (id INT)").await;
        let tables = fetch(db.pool()).await.unwrap();
        assert!(tables.iter().any(|t| t.name == "owned_by_us"));
    })
    .await;
}
