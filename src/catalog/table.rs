//! Catalog query for tables, their columns, and their constraints. Columns
//! are `{name, type, default, not_null}`; constraints are `{name,
//! definition}` rendered through `pg_get_constraintdef`. Dependency edges
//! are fetched separately (`catalog::dependency`).

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::object::{Column, Constraint, Table};

const TABLES_QUERY: &str = r#"
    SELECT n.nspname AS schema_name, c.relname AS table_name
    FROM pg_class c
    JOIN pg_namespace n ON c.relnamespace = n.oid
    WHERE c.relkind = 'r'
      AND n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND NOT EXISTS (
          SELECT 1 FROM pg_depend d WHERE d.objid = c.oid AND d.deptype = 'e'
      )
    ORDER BY n.nspname, c.relname
"#;

const COLUMNS_QUERY: &str = r#"
    SELECT
        a.attname AS column_name,
        format_type(a.atttypid, a.atttypmod) AS data_type,
        pg_get_expr(ad.adbin, ad.adrelid) AS default_value,
        a.attnotnull AS not_null
    FROM pg_attribute a
    JOIN pg_class c ON a.attrelid = c.oid
    JOIN pg_namespace n ON c.relnamespace = n.oid
    LEFT JOIN pg_attrdef ad ON ad.adrelid = a.attrelid AND ad.adnum = a.attnum
    WHERE n.nspname = $1
      AND c.relname = $2
      AND a.attnum > 0
      AND NOT a.attisdropped
    ORDER BY a.attnum
"#;

const CONSTRAINTS_QUERY: &str = r#"
    SELECT conname AS constraint_name, pg_get_constraintdef(oid) AS definition
    FROM pg_constraint
    WHERE conrelid = (
        SELECT c.oid FROM pg_class c
        JOIN pg_namespace n ON c.relnamespace = n.oid
        WHERE n.nspname = $1 AND c.relname = $2
    )
    ORDER BY conname
"#;

pub async fn fetch(pool: &PgPool) -> Result<Vec<Table>> {
    let table_rows = sqlx::query(TABLES_QUERY).fetch_all(pool).await?;

    let mut tables = Vec::with_capacity(table_rows.len());
    for row in table_rows {
        let schema: String = row.get("schema_name");
        let name: String = row.get("table_name");

        let column_rows = sqlx::query(COLUMNS_QUERY)
            .bind(&schema)
            .bind(&name)
            .fetch_all(pool)
            .await?;
        let columns = column_rows
            .into_iter()
            .map(|r| Column {
                name: r.get("column_name"),
                r#type: r.get("data_type"),
                default: r.get("default_value"),
                not_null: r.get("not_null"),
            })
            .collect();

        let constraint_rows = sqlx::query(CONSTRAINTS_QUERY)
            .bind(&schema)
            .bind(&name)
            .fetch_all(pool)
            .await?;
        let constraints = constraint_rows
            .into_iter()
            .map(|r| Constraint {
                name: r.get("constraint_name"),
                definition: r.get("definition"),
            })
            .collect();

        tables.push(Table {
            schema,
            name,
            columns,
            constraints,
        });
    }

    Ok(tables)
}
