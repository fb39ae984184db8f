//! View diff/create/drop. Postgres has no `ALTER VIEW ... AS`, so any
//! definition change is a drop followed by a create.

use crate::ctx::PlanContext;
use crate::object::{DbObject, View};

fn identity(v: &View) -> String {
    format!("{}.{}", v.schema, v.name)
}

pub fn diff(_ctx: &PlanContext, old: Option<&DbObject>, new: Option<&DbObject>) -> Vec<String> {
    match (old.and_then(DbObject::as_view), new.and_then(DbObject::as_view)) {
        (Some(old), Some(new)) if old.definition != new.definition => {
            vec![
                format!("DROP VIEW {}", identity(old)),
                format!("CREATE VIEW {} AS\n{}", identity(new), new.definition),
            ]
        }
        _ => Vec::new(),
    }
}

pub fn create(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(view) = obj.as_view() else {
        return Vec::new();
    };
    vec![format!("CREATE VIEW {} AS\n{}", identity(view), view.definition)]
}

pub fn drop(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(view) = obj.as_view() else {
        return Vec::new();
    };
    vec![format!("DROP VIEW {}", identity(view))]
}
