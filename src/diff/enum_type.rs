//! Enum diff/create/drop.
//!
//! Removing a value isn't expressible as an in-place `ALTER TYPE`, so any
//! removal falls back to drop+recreate. A pure addition emits one
//! `ALTER TYPE ... ADD VALUE '<element>'` per new value instead, preserving
//! existing rows that reference the type.

use crate::ctx::PlanContext;
use crate::object::{DbObject, Enum};
use crate::render::escape_string;

fn identity(e: &Enum) -> String {
    format!("{}.{}", e.schema, e.name)
}

fn create_statement(e: &Enum) -> String {
    let values = e
        .elements
        .iter()
        .map(|v| format!("'{}'", escape_string(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TYPE {} AS ENUM ({})", identity(e), values)
}

pub fn diff(_ctx: &PlanContext, old: Option<&DbObject>, new: Option<&DbObject>) -> Vec<String> {
    match (old.and_then(DbObject::as_enum), new.and_then(DbObject::as_enum)) {
        (Some(old), Some(new)) => {
            let removed = old.elements.iter().any(|e| !new.elements.contains(e));
            if removed {
                return vec![
                    format!("DROP TYPE {}", identity(old)),
                    create_statement(new),
                ];
            }

            // Only additions: one ALTER TYPE ... ADD VALUE per new element.
            new.elements
                .iter()
                .filter(|value| !old.elements.contains(value))
                .map(|value| {
                    format!(
                        "ALTER TYPE {} ADD VALUE '{}'",
                        identity(new),
                        escape_string(value)
                    )
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

pub fn create(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(e) = obj.as_enum() else {
        return Vec::new();
    };
    vec![create_statement(e)]
}

pub fn drop(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(e) = obj.as_enum() else {
        return Vec::new();
    };
    vec![format!("DROP TYPE {}", identity(e))]
}
