//! Catalog query for dependency edges.
//!
//! An edge referencing an object this model does not track (an
//! extension-owned type, say) is fine to emit here: `Inspection::new`
//! silently discards edges whose endpoint is missing from the object map.
//!
//! Resolution of an OID pair to the text `Identity` scheme happens in Rust
//! rather than in SQL, so the formatting rules only live in one place
//! (`object::DbObject::identity`/these helpers) instead of being duplicated
//! across several query strings.

use anyhow::Result;
use sqlx::PgPool;
use sqlx::Row;

use crate::inspection::DependencyEdge;
use crate::object::Identity;

/// Relation-to-relation dependencies: view-on-table/view, index-on-table.
/// `pg_rewrite` carries the view's query rule, so a view's dependency on its
/// underlying tables shows up as `pg_depend` rows whose `classid` is
/// `pg_rewrite` and whose `refclassid` is `pg_class`.
const RELATION_DEPS_QUERY: &str = r#"
    SELECT DISTINCT
        dep_n.nspname AS dep_schema,
        dep_c.relname AS dep_name,
        ref_n.nspname AS ref_schema,
        ref_c.relname AS ref_name
    FROM pg_depend d
    JOIN pg_rewrite r ON d.classid = 'pg_rewrite'::regclass AND d.objid = r.oid
    JOIN pg_class dep_c ON r.ev_class = dep_c.oid
    JOIN pg_namespace dep_n ON dep_c.relnamespace = dep_n.oid
    JOIN pg_class ref_c ON d.refclassid = 'pg_class'::regclass AND d.refobjid = ref_c.oid
    JOIN pg_namespace ref_n ON ref_c.relnamespace = ref_n.oid
    WHERE d.deptype = 'n'
      AND dep_c.oid != ref_c.oid
      AND dep_n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND ref_n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')

    UNION

    SELECT DISTINCT
        idx_n.nspname AS dep_schema,
        idx_c.relname AS dep_name,
        tbl_n.nspname AS ref_schema,
        tbl_c.relname AS ref_name
    FROM pg_index i
    JOIN pg_class idx_c ON idx_c.oid = i.indexrelid
    JOIN pg_namespace idx_n ON idx_c.relnamespace = idx_n.oid
    JOIN pg_class tbl_c ON tbl_c.oid = i.indrelid
    JOIN pg_namespace tbl_n ON tbl_c.relnamespace = tbl_n.oid
    WHERE idx_n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
"#;

/// Function dependencies on tables/views/sequences/types/other functions
/// that PostgreSQL records explicitly in `pg_depend` (normal dependencies
/// from parameter/return types, or from `pg_depend` entries the planner
/// tracks for SQL-language bodies). PL/pgSQL body references to tables are
/// *not* recorded here; that is a PostgreSQL limitation, not a gap in this
/// query.
const FUNCTION_DEPS_QUERY: &str = r#"
    SELECT DISTINCT
        p_n.nspname AS dep_schema,
        p.proname AS dep_name,
        pg_get_function_identity_arguments(p.oid) AS dep_signature,
        ref_n.nspname AS ref_schema,
        ref_obj.relname AS ref_name
    FROM pg_proc p
    JOIN pg_namespace p_n ON p.pronamespace = p_n.oid
    JOIN pg_depend d ON d.objid = p.oid AND d.classid = 'pg_proc'::regclass
    JOIN pg_class ref_obj ON d.refclassid = 'pg_class'::regclass AND d.refobjid = ref_obj.oid
    JOIN pg_namespace ref_n ON ref_obj.relnamespace = ref_n.oid
    WHERE d.deptype = 'n'
      AND p_n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND ref_n.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
"#;

/// Trigger dependencies are structural (a trigger always depends on its own
/// table and its handler function), so these edges are constructed directly
/// rather than discovered through `pg_depend`.
const TRIGGER_DEPS_QUERY: &str = r#"
    SELECT
        tn.nspname AS table_schema,
        c.relname AS table_name,
        t.tgname AS trigger_name,
        fn.nspname AS function_schema,
        p.proname AS function_name,
        pg_get_function_identity_arguments(p.oid) AS function_signature
    FROM pg_trigger t
    JOIN pg_class c ON t.tgrelid = c.oid
    JOIN pg_namespace tn ON c.relnamespace = tn.oid
    JOIN pg_proc p ON t.tgfoid = p.oid
    JOIN pg_namespace fn ON p.pronamespace = fn.oid
    WHERE tn.nspname NOT IN ('pg_catalog', 'information_schema', 'pg_toast')
      AND NOT t.tgisinternal
"#;

pub async fn fetch(pool: &PgPool) -> Result<Vec<DependencyEdge>> {
    let mut edges = Vec::new();

    for row in sqlx::query(RELATION_DEPS_QUERY).fetch_all(pool).await? {
        let dep_schema: String = row.get("dep_schema");
        let dep_name: String = row.get("dep_name");
        let ref_schema: String = row.get("ref_schema");
        let ref_name: String = row.get("ref_name");
        edges.push(DependencyEdge {
            prerequisite: Identity::qualified(&ref_schema, &ref_name),
            dependent: Identity::qualified(&dep_schema, &dep_name),
        });
    }

    for row in sqlx::query(FUNCTION_DEPS_QUERY).fetch_all(pool).await? {
        let dep_schema: String = row.get("dep_schema");
        let dep_name: String = row.get("dep_name");
        let dep_signature: String = row.get("dep_signature");
        let ref_schema: String = row.get("ref_schema");
        let ref_name: String = row.get("ref_name");
        edges.push(DependencyEdge {
            prerequisite: Identity::qualified(&ref_schema, &ref_name),
            dependent: Identity::with_signature(&dep_schema, &dep_name, &dep_signature),
        });
    }

    for row in sqlx::query(TRIGGER_DEPS_QUERY).fetch_all(pool).await? {
        let table_schema: String = row.get("table_schema");
        let table_name: String = row.get("table_name");
        let trigger_name: String = row.get("trigger_name");
        let function_schema: String = row.get("function_schema");
        let function_name: String = row.get("function_name");
        let function_signature: String = row.get("function_signature");

        let trigger_identity = Identity::new(format!(
            "{table_schema}.{trigger_name} on {table_schema}.{table_name}"
        ));

        edges.push(DependencyEdge {
            prerequisite: Identity::qualified(&table_schema, &table_name),
            dependent: trigger_identity.clone(),
        });
        edges.push(DependencyEdge {
            prerequisite: Identity::with_signature(
                &function_schema,
                &function_name,
                &function_signature,
            ),
            dependent: trigger_identity,
        });
    }

    Ok(edges)
}
