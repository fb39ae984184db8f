//! Catalog query for enum types: `pg_type.typtype = 'e'` only. Composite
//! types, domains, and ranges are outside this crate's closed seven-kind
//! object model and aren't queried for.

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::object::Enum;

const ENUM_TYPES_QUERY: &str = r#"
    SELECT n.nspname AS schema_name, t.typname AS type_name
    FROM pg_type t
    JOIN pg_namespace n ON t.typnamespace = n.oid
    WHERE t.typtype = 'e'
      AND n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND NOT EXISTS (
          SELECT 1 FROM pg_depend d WHERE d.objid = t.oid AND d.deptype = 'e'
      )
    ORDER BY n.nspname, t.typname
"#;

const ENUM_VALUES_QUERY: &str = r#"
    SELECT e.enumlabel AS label
    FROM pg_enum e
    JOIN pg_type t ON e.enumtypid = t.oid
    JOIN pg_namespace n ON t.typnamespace = n.oid
    WHERE n.nspname = $1 AND t.typname = $2
    ORDER BY e.enumsortorder
"#;

pub async fn fetch(pool: &PgPool) -> Result<Vec<Enum>> {
    let type_rows = sqlx::query(ENUM_TYPES_QUERY).fetch_all(pool).await?;

    let mut enums = Vec::with_capacity(type_rows.len());
    for row in type_rows {
        let schema: String = row.get("schema_name");
        let name: String = row.get("type_name");

        let value_rows = sqlx::query(ENUM_VALUES_QUERY)
            .bind(&schema)
            .bind(&name)
            .fetch_all(pool)
            .await?;
        let elements = value_rows.into_iter().map(|r| r.get("label")).collect();

        enums.push(Enum {
            schema,
            name,
            elements,
        });
    }

    Ok(enums)
}
