//! Catalog query for views. `pg_get_viewdef` supplies the normalized select
//! text; dependency edges are fetched separately (`catalog::dependency`).

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::object::View;

const VIEWS_QUERY: &str = r#"
    SELECT
        n.nspname AS schema_name,
        c.relname AS view_name,
        pg_get_viewdef(c.oid, true) AS definition
    FROM pg_class c
    JOIN pg_namespace n ON c.relnamespace = n.oid
    WHERE c.relkind = 'v'
      AND n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND NOT EXISTS (
          SELECT 1 FROM pg_depend d WHERE d.objid = c.oid AND d.deptype = 'e'
      )
    ORDER BY n.nspname, c.relname
"#;

pub async fn fetch(pool: &PgPool) -> Result<Vec<View>> {
    let rows = sqlx::query(VIEWS_QUERY).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|r| View {
            schema: r.get("schema_name"),
            name: r.get("view_name"),
            definition: r.get::<String, _>("definition").trim().to_string(),
        })
        .collect())
}
