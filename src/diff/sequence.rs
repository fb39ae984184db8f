//! Sequence diff/create/drop.

use crate::ctx::PlanContext;
use crate::object::{DbObject, Sequence};

fn identity(s: &Sequence) -> String {
    format!("{}.{}", s.schema, s.name)
}

/// Structural diff (increment, owner, min/max, cycle) is intentionally a
/// no-op: no caller has asked for it yet and it isn't worth the added
/// surface without one.
pub fn diff(_ctx: &PlanContext, _old: Option<&DbObject>, _new: Option<&DbObject>) -> Vec<String> {
    Vec::new()
}

pub fn create(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(seq) = obj.as_sequence() else {
        return Vec::new();
    };
    vec![format!(
        "CREATE SEQUENCE {} AS {} START WITH {} INCREMENT BY {} MINVALUE {} MAXVALUE {}{}",
        identity(seq),
        seq.data_type,
        seq.start_value,
        seq.increment,
        seq.min_value,
        seq.max_value,
        if seq.cycle { " CYCLE" } else { " NO CYCLE" }
    )]
}

pub fn drop(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(seq) = obj.as_sequence() else {
        return Vec::new();
    };
    vec![format!("DROP SEQUENCE {}", identity(seq))]
}
