//! Function diff/create/drop.
//!
//! The `CREATE OR REPLACE` form is upheld by the catalog inspector
//! (`pg_get_functiondef` always renders that form), so this handler only
//! needs to detect a definition change and pass it through unmodified.

use crate::ctx::PlanContext;
use crate::object::{DbObject, Function};

fn identity(f: &Function) -> String {
    format!("{}.{}({})", f.schema, f.name, f.signature)
}

pub fn diff(_ctx: &PlanContext, old: Option<&DbObject>, new: Option<&DbObject>) -> Vec<String> {
    match (old.and_then(DbObject::as_function), new.and_then(DbObject::as_function)) {
        (Some(old), Some(new)) if old.definition != new.definition => {
            vec![new.definition.clone()]
        }
        _ => Vec::new(),
    }
}

pub fn create(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(f) = obj.as_function() else {
        return Vec::new();
    };
    vec![f.definition.clone()]
}

pub fn drop(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(f) = obj.as_function() else {
        return Vec::new();
    };
    vec![format!("DROP FUNCTION {}", identity(f))]
}
