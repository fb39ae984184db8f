//! C1: polymorphic catalog object model.
//!
//! One record shape per object kind, unified behind `DbObject`. Records are
//! plain data: dependency edges are not stored here, they live on the
//! `Inspection` graph (C3) built from a separate dependency query.

pub mod id;

pub use id::{Identity, ObjType};

/// `{name, type, default (nullable), not_null}` per spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub r#type: String,
    pub default: Option<String>,
    pub not_null: bool,
}

/// `{name, definition}`; `definition` is the constraint body after `ADD`,
/// e.g. `PRIMARY KEY (id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub name: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub schema: String,
    pub name: String,
    pub columns: Vec<Column>,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub schema: String,
    pub name: String,
    /// Normalized SQL select text, as returned by `pg_get_viewdef`.
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub schema: String,
    pub name: String,
    /// Full `CREATE INDEX ...` text.
    pub definition: String,
    pub is_unique: bool,
    pub is_pk: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub schema: String,
    pub name: String,
    pub data_type: String,
    pub start_value: i64,
    pub min_value: i64,
    pub max_value: i64,
    pub increment: i64,
    pub cycle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub schema: String,
    pub name: String,
    /// Ordered sequence of label strings.
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub schema: String,
    pub name: String,
    /// Argument-type signature, e.g. `integer, text`. Part of identity.
    pub signature: String,
    /// Full `CREATE [OR REPLACE] FUNCTION ...` text.
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub schema: String,
    pub name: String,
    pub table_name: String,
    /// Full `CREATE TRIGGER ...` text.
    pub definition: String,
}

/// Tagged union over the seven object kinds. A trait-object hierarchy would
/// let a caller add kinds without touching dispatch; the model is meant to
/// be closed, so a plain enum is correct here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbObject {
    Table(Table),
    View(View),
    Index(Index),
    Sequence(Sequence),
    Enum(Enum),
    Function(Function),
    Trigger(Trigger),
}

impl DbObject {
    pub fn obj_type(&self) -> ObjType {
        match self {
            DbObject::Table(_) => ObjType::Table,
            DbObject::View(_) => ObjType::View,
            DbObject::Index(_) => ObjType::Index,
            DbObject::Sequence(_) => ObjType::Sequence,
            DbObject::Enum(_) => ObjType::Enum,
            DbObject::Function(_) => ObjType::Function,
            DbObject::Trigger(_) => ObjType::Trigger,
        }
    }

    pub fn schema(&self) -> &str {
        match self {
            DbObject::Table(t) => &t.schema,
            DbObject::View(v) => &v.schema,
            DbObject::Index(i) => &i.schema,
            DbObject::Sequence(s) => &s.schema,
            DbObject::Enum(e) => &e.schema,
            DbObject::Function(f) => &f.schema,
            DbObject::Trigger(t) => &t.schema,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DbObject::Table(t) => &t.name,
            DbObject::View(v) => &v.name,
            DbObject::Index(i) => &i.name,
            DbObject::Sequence(s) => &s.name,
            DbObject::Enum(e) => &e.name,
            DbObject::Function(f) => &f.name,
            DbObject::Trigger(t) => &t.name,
        }
    }

    pub fn identity(&self) -> Identity {
        match self {
            DbObject::Function(f) => {
                Identity::with_signature(&f.schema, &f.name, &f.signature)
            }
            DbObject::Trigger(t) => {
                Identity::new(format!("{}.{} on {}.{}", t.schema, t.name, t.schema, t.table_name))
            }
            other => Identity::qualified(other.schema(), other.name()),
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            DbObject::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&View> {
        match self {
            DbObject::View(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<&Index> {
        match self {
            DbObject::Index(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            DbObject::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Enum> {
        match self {
            DbObject::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            DbObject::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_trigger(&self) -> Option<&Trigger> {
        match self {
            DbObject::Trigger(t) => Some(t),
            _ => None,
        }
    }
}
