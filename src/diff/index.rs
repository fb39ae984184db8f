//! Index diff/create/drop. An index carries its full `CREATE INDEX` text
//! pre-rendered by the catalog inspector, so there's no structural diff to
//! compute here; a changed index is handled as a drop+create pair wherever
//! that decision gets made, not inside this module.

use crate::ctx::PlanContext;
use crate::object::{DbObject, Index};

fn identity(i: &Index) -> String {
    format!("{}.{}", i.schema, i.name)
}

/// Structural diff is a no-op: Postgres has no in-place `ALTER INDEX`
/// that changes what an index indexes, so a changed index is always a
/// drop+create pair rather than something this function renders.
pub fn diff(_ctx: &PlanContext, _old: Option<&DbObject>, _new: Option<&DbObject>) -> Vec<String> {
    Vec::new()
}

/// Suppressed for unique or primary-key-backing indexes: the owning table's
/// constraint block is expected to emit the correct `CREATE INDEX`
/// implicitly.
pub fn create(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(index) = obj.as_index() else {
        return Vec::new();
    };
    if index.is_unique || index.is_pk {
        return Vec::new();
    }
    vec![index.definition.clone()]
}

pub fn drop(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(index) = obj.as_index() else {
        return Vec::new();
    };
    vec![format!("DROP INDEX {}", identity(index))]
}
