//! Table diff/create/drop, including per-column and per-constraint diffing.
//!
//! A changed column emits its alterations in a fixed order — type, then
//! default, then not-null — and every column/constraint alteration for a
//! table is joined into a single combined `ALTER TABLE` statement rather
//! than one statement per change.

use crate::ctx::PlanContext;
use crate::object::{Column, Constraint, DbObject, Table};

fn render_column(col: &Column) -> String {
    let mut s = format!("{} {}", col.name, col.r#type);
    if let Some(default) = &col.default {
        s.push_str(&format!(" DEFAULT {default}"));
    }
    if col.not_null {
        s.push_str(" NOT NULL");
    }
    s
}

/// Per-attribute rules applied independently, in this exact order: type,
/// default, not_null.
fn diff_column(old: &Column, new: &Column) -> Vec<String> {
    let mut alterations = Vec::new();
    if old.r#type != new.r#type {
        alterations.push(format!("ALTER COLUMN {} TYPE {}", new.name, new.r#type));
    }
    if old.default != new.default {
        match &new.default {
            None => alterations.push(format!("ALTER COLUMN {} DROP DEFAULT", new.name)),
            Some(d) => alterations.push(format!("ALTER COLUMN {} SET DEFAULT {}", new.name, d)),
        }
    }
    if old.not_null != new.not_null {
        if new.not_null {
            alterations.push(format!("ALTER COLUMN {} SET NOT NULL", new.name));
        } else {
            alterations.push(format!("ALTER COLUMN {} DROP NOT NULL", new.name));
        }
    }
    alterations
}

fn diff_columns(old: &[Column], new: &[Column]) -> Vec<String> {
    let mut alterations = Vec::new();

    for old_col in old {
        if !new.iter().any(|c| c.name == old_col.name) {
            alterations.push(format!("DROP COLUMN {}", old_col.name));
        }
    }
    for new_col in new {
        match old.iter().find(|c| c.name == new_col.name) {
            None => alterations.push(format!("ADD COLUMN {}", render_column(new_col))),
            Some(old_col) => alterations.extend(diff_column(old_col, new_col)),
        }
    }
    alterations
}

fn diff_constraints(old: &[Constraint], new: &[Constraint]) -> Vec<String> {
    let mut alterations = Vec::new();

    for old_c in old {
        if !new.iter().any(|c| c.name == old_c.name) {
            alterations.push(format!("DROP CONSTRAINT {}", old_c.name));
        }
    }
    for new_c in new {
        match old.iter().find(|c| c.name == new_c.name) {
            None => alterations.push(format!("ADD {} {}", new_c.name, new_c.definition)),
            Some(old_c) if old_c.definition != new_c.definition => {
                alterations.push(format!("DROP CONSTRAINT {}", new_c.name));
                alterations.push(format!("ADD {} {}", new_c.name, new_c.definition));
            }
            Some(_) => {}
        }
    }
    alterations
}

fn identity(schema: &str, name: &str) -> String {
    format!("{schema}.{name}")
}

pub fn diff(_ctx: &PlanContext, old: Option<&DbObject>, new: Option<&DbObject>) -> Vec<String> {
    match (old.and_then(DbObject::as_table), new.and_then(DbObject::as_table)) {
        (Some(old), Some(new)) => {
            // Constraint alterations precede column alterations.
            let mut alterations = diff_constraints(&old.constraints, &new.constraints);
            alterations.extend(diff_columns(&old.columns, &new.columns));

            if alterations.is_empty() {
                return Vec::new();
            }

            vec![format!(
                "ALTER TABLE {} {}",
                identity(&new.schema, &new.name),
                alterations.join(", ")
            )]
        }
        _ => Vec::new(),
    }
}

pub fn create(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(table) = obj.as_table() else {
        return Vec::new();
    };

    let mut column_defs: Vec<String> = table.columns.iter().map(render_column).collect();
    column_defs.extend(
        table
            .constraints
            .iter()
            .map(|c| format!("CONSTRAINT {} {}", c.name, c.definition)),
    );

    vec![format!(
        "CREATE TABLE {} (\n    {}\n)",
        identity(&table.schema, &table.name),
        column_defs.join(",\n    ")
    )]
}

pub fn drop(_ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    let Some(table) = obj.as_table() else {
        return Vec::new();
    };
    vec![format!(
        "DROP TABLE {}",
        identity(&table.schema, &table.name)
    )]
}
