//! Catalog query for sequences: just the attributes needed to re-emit a
//! `CREATE SEQUENCE` statement (ownership and comment tracking aren't
//! collected here).

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::object::Sequence;

const SEQUENCES_QUERY: &str = r#"
    SELECT
        n.nspname AS schema_name,
        c.relname AS sequence_name,
        t.typname AS data_type,
        COALESCE(seq.seqstart, 1) AS start_value,
        COALESCE(seq.seqmin, 1) AS min_value,
        COALESCE(seq.seqmax, 9223372036854775807) AS max_value,
        COALESCE(seq.seqincrement, 1) AS increment_by,
        COALESCE(seq.seqcycle, false) AS cycle
    FROM pg_class c
    JOIN pg_namespace n ON c.relnamespace = n.oid
    LEFT JOIN pg_sequence seq ON seq.seqrelid = c.oid
    LEFT JOIN pg_type t ON seq.seqtypid = t.oid
    WHERE c.relkind = 'S'
      AND n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND NOT EXISTS (
          SELECT 1 FROM pg_depend d WHERE d.objid = c.oid AND d.deptype = 'e'
      )
    ORDER BY n.nspname, c.relname
"#;

fn normalize_type(raw: &str) -> String {
    match raw {
        "int4" => "integer".to_string(),
        "int8" => "bigint".to_string(),
        "int2" => "smallint".to_string(),
        other => other.to_string(),
    }
}

pub async fn fetch(pool: &PgPool) -> Result<Vec<Sequence>> {
    let rows = sqlx::query(SEQUENCES_QUERY).fetch_all(pool).await?;
    Ok(rows
        .into_iter()
        .map(|r| Sequence {
            schema: r.get("schema_name"),
            name: r.get("sequence_name"),
            data_type: normalize_type(
                &r.get::<Option<String>, _>("data_type")
                    .unwrap_or_else(|| "integer".to_string()),
            ),
            start_value: r.get("start_value"),
            min_value: r.get("min_value"),
            max_value: r.get("max_value"),
            increment: r.get("increment_by"),
            cycle: r.get("cycle"),
        })
        .collect())
}
