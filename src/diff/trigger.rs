//! Trigger diff/create/drop.
//!
//! Triggers have no `REPLACE` form, so any definition change is drop then
//! create. Drop always uses `DROP TRIGGER <name> ON <table>`, which needs
//! no parsing of the trigger's `name on table` identity string.

use crate::ctx::PlanContext;
use crate::object::{DbObject, Trigger};

fn drop_statement(t: &Trigger) -> String {
    format!("DROP TRIGGER {} ON {}.{}", t.name, t.schema, t.table_name)
}

pub fn diff(_ctx: &PlanContext, old: Option<&DbObject>, new: Option<&DbObject>) -> Vec<String> {
    match (old.and_then(DbObject::as_trigger), new.and_then(DbObject::as_trigger)) {
        (Some(old), Some(new)) if old.definition != new.definition => {
            vec![drop_statement(old), new.definition.clone()]
        }
        _ => Vec::new(),
    }
}

pub fn create(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(t) = obj.as_trigger() else {
        return Vec::new();
    };
    vec![t.definition.clone()]
}

pub fn drop(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(t) = obj.as_trigger() else {
        return Vec::new();
    };
    vec![drop_statement(t)]
}
