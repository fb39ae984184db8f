//! Catalog inspector. Given an open connection pool and an optional sequence
//! of schema-name glob patterns, produces an `Inspection`: one query per
//! object kind, in a fixed order (table, view, index, sequence, enum,
//! function, trigger), plus one query for dependency edges.
//!
//! These fetch functions use runtime `sqlx::query` plus `Row::get` column
//! access rather than the compile-time-checked `query!`/`query_as!` macros,
//! which need a `.sqlx` offline cache built against a live schema — runtime
//! queries are the same `sqlx` idiom without that build-time prerequisite.

pub mod dependency;
pub mod enum_type;
pub mod function;
pub mod index;
pub mod sequence;
pub mod table;
pub mod trigger;
pub mod view;

use anyhow::Result;
use glob::Pattern;
use sqlx::PgPool;
use tracing::info;

use crate::inspection::Inspection;
use crate::object::DbObject;

/// Issues the seven per-kind catalog queries plus the dependency query,
/// applies schema filtering, and assembles an `Inspection`.
pub async fn inspect(pool: &PgPool, schema_patterns: &[String]) -> Result<Inspection> {
    let patterns: Vec<Pattern> = schema_patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(|e| anyhow::anyhow!("invalid schema pattern {p:?}: {e}")))
        .collect::<Result<_>>()?;

    let matches_filter = |schema: &str| -> bool {
        patterns.is_empty() || patterns.iter().any(|p| p.matches(schema))
    };

    info!("inspecting catalog (schema filter: {:?})", schema_patterns);

    let mut objects: Vec<DbObject> = Vec::new();

    objects.extend(
        table::fetch(pool)
            .await?
            .into_iter()
            .filter(|t| matches_filter(&t.schema))
            .map(DbObject::Table),
    );
    objects.extend(
        view::fetch(pool)
            .await?
            .into_iter()
            .filter(|v| matches_filter(&v.schema))
            .map(DbObject::View),
    );
    objects.extend(
        index::fetch(pool)
            .await?
            .into_iter()
            .filter(|i| matches_filter(&i.schema))
            .map(DbObject::Index),
    );
    objects.extend(
        sequence::fetch(pool)
            .await?
            .into_iter()
            .filter(|s| matches_filter(&s.schema))
            .map(DbObject::Sequence),
    );
    objects.extend(
        enum_type::fetch(pool)
            .await?
            .into_iter()
            .filter(|e| matches_filter(&e.schema))
            .map(DbObject::Enum),
    );
    objects.extend(
        function::fetch(pool)
            .await?
            .into_iter()
            .filter(|f| matches_filter(&f.schema))
            .map(DbObject::Function),
    );
    objects.extend(
        trigger::fetch(pool)
            .await?
            .into_iter()
            .filter(|t| matches_filter(&t.schema))
            .map(DbObject::Trigger),
    );

    let edges = dependency::fetch(pool).await?;

    let server_version_num: Option<i32> = sqlx::query_scalar("SHOW server_version_num")
        .fetch_one(pool)
        .await
        .ok()
        .and_then(|s: String| s.parse().ok());

    Inspection::with_server_version(objects, edges, server_version_num)
}
