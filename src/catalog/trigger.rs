//! Catalog query for triggers. `pg_get_triggerdef` is the authoritative
//! `definition` source; internal triggers and system schemas are excluded.

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::object::Trigger;

const TRIGGERS_QUERY: &str = r#"
    SELECT
        tn.nspname AS schema_name,
        c.relname AS table_name,
        t.tgname AS trigger_name,
        pg_get_triggerdef(t.oid) AS definition
    FROM pg_trigger t
    JOIN pg_class c ON t.tgrelid = c.oid
    JOIN pg_namespace tn ON c.relnamespace = tn.oid
    WHERE tn.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND NOT t.tgisinternal
      AND c.relkind IN ('r', 'v', 'm', 'p')
    ORDER BY tn.nspname, c.relname, t.tgname
"#;

pub async fn fetch(pool: &PgPool) -> Result<Vec<Trigger>> {
    let rows = sqlx::query(TRIGGERS_QUERY).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|r| Trigger {
            schema: r.get("schema_name"),
            table_name: r.get("table_name"),
            name: r.get("trigger_name"),
            definition: r.get("definition"),
        })
        .collect())
}
