//! Catalog query for indexes. `pg_get_indexdef` renders the full `CREATE
//! INDEX ...` text directly, so `definition` holds the statement PostgreSQL
//! itself produces rather than one reassembled from structured column
//! metadata.

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::object::Index;

const INDEXES_QUERY: &str = r#"
    SELECT
        n.nspname AS schema_name,
        ic.relname AS index_name,
        pg_get_indexdef(i.indexrelid) AS definition,
        i.indisunique AS is_unique,
        i.indisprimary AS is_pk
    FROM pg_index i
    JOIN pg_class ic ON ic.oid = i.indexrelid
    JOIN pg_class tc ON tc.oid = i.indrelid
    JOIN pg_namespace n ON ic.relnamespace = n.oid
    WHERE n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND tc.relkind IN ('r', 'p')
      AND NOT EXISTS (
          SELECT 1 FROM pg_depend d WHERE d.objid = ic.oid AND d.deptype = 'e'
      )
    ORDER BY n.nspname, ic.relname
"#;

pub async fn fetch(pool: &PgPool) -> Result<Vec<Index>> {
    let rows = sqlx::query(INDEXES_QUERY).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|r| Index {
            schema: r.get("schema_name"),
            name: r.get("index_name"),
            definition: r.get("definition"),
            is_unique: r.get("is_unique"),
            is_pk: r.get("is_pk"),
        })
        .collect())
}
