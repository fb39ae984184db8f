//! Catalog query for functions.
//!
//! The argument-type signature comes from
//! `pg_get_function_identity_arguments`, which disambiguates overloaded
//! functions for their `identity`. `definition` is `pg_get_functiondef`,
//! which PostgreSQL always renders as `CREATE OR REPLACE FUNCTION ...`, so
//! the diff handler can pass it through unmodified.

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::object::Function;

const FUNCTIONS_QUERY: &str = r#"
    SELECT
        n.nspname AS schema_name,
        p.proname AS function_name,
        pg_get_function_identity_arguments(p.oid) AS signature,
        pg_get_functiondef(p.oid) AS definition
    FROM pg_proc p
    JOIN pg_namespace n ON p.pronamespace = n.oid
    WHERE n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND p.prokind IN ('f', 'p')
      AND NOT EXISTS (
          SELECT 1 FROM pg_depend d WHERE d.objid = p.oid AND d.deptype = 'e'
      )
    ORDER BY n.nspname, p.proname, signature
"#;

pub async fn fetch(pool: &PgPool) -> Result<Vec<Function>> {
    let rows = sqlx::query(FUNCTIONS_QUERY).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|r| Function {
            schema: r.get("schema_name"),
            name: r.get("function_name"),
            signature: r.get("signature"),
            definition: r.get("definition"),
        })
        .collect())
}
