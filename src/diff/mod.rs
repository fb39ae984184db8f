//! Per-kind handler registries.
//!
//! Three registries (`diff`, `create`, `drop`), each mapping `ObjType` to a
//! handler function, built once behind `once_cell::sync::Lazy`: process-wide
//! initialization-time static tables, not mutable runtime state.
//!
//! Handlers return materialized `Vec<String>` fragments. Every handler
//! early-exits on the unchanged case before doing any string formatting, so
//! there's no cost to pay for a lazier return type.

pub mod enum_type;
pub mod function;
pub mod index;
pub mod sequence;
pub mod table;
pub mod trigger;
pub mod view;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ctx::PlanContext;
use crate::object::{DbObject, ObjType};

type DiffFn = fn(&PlanContext, Option<&DbObject>, Option<&DbObject>) -> Vec<String>;
type CreateFn = fn(&PlanContext, &DbObject) -> Vec<String>;
type DropFn = fn(&PlanContext, &DbObject) -> Vec<String>;

static DIFF_REGISTRY: Lazy<HashMap<ObjType, DiffFn>> = Lazy::new(|| {
    let mut m: HashMap<ObjType, DiffFn> = HashMap::new();
    m.insert(ObjType::Table, table::diff);
    m.insert(ObjType::View, view::diff);
    m.insert(ObjType::Index, index::diff);
    m.insert(ObjType::Sequence, sequence::diff);
    m.insert(ObjType::Enum, enum_type::diff);
    m.insert(ObjType::Function, function::diff);
    m.insert(ObjType::Trigger, trigger::diff);
    m
});

static CREATE_REGISTRY: Lazy<HashMap<ObjType, CreateFn>> = Lazy::new(|| {
    let mut m: HashMap<ObjType, CreateFn> = HashMap::new();
    m.insert(ObjType::Table, table::create);
    m.insert(ObjType::View, view::create);
    m.insert(ObjType::Index, index::create);
    m.insert(ObjType::Sequence, sequence::create);
    m.insert(ObjType::Enum, enum_type::create);
    m.insert(ObjType::Function, function::create);
    m.insert(ObjType::Trigger, trigger::create);
    m
});

static DROP_REGISTRY: Lazy<HashMap<ObjType, DropFn>> = Lazy::new(|| {
    let mut m: HashMap<ObjType, DropFn> = HashMap::new();
    m.insert(ObjType::Table, table::drop);
    m.insert(ObjType::View, view::drop);
    m.insert(ObjType::Index, index::drop);
    m.insert(ObjType::Sequence, sequence::drop);
    m.insert(ObjType::Enum, enum_type::drop);
    m.insert(ObjType::Function, function::drop);
    m.insert(ObjType::Trigger, trigger::drop);
    m
});

/// `diff(ctx, source_obj, target_obj)`. Both objects must share `obj_type`
/// and `identity`. No registered handler for the kind means an empty result
/// (no-op), never an error — this keeps dispatch forward-compatible with
/// catalog queries that return a kind the engine doesn't yet handle.
pub fn diff(ctx: &PlanContext, source_obj: &DbObject, target_obj: &DbObject) -> Vec<String> {
    match DIFF_REGISTRY.get(&target_obj.obj_type()) {
        Some(f) => f(ctx, Some(source_obj), Some(target_obj)),
        None => Vec::new(),
    }
}

pub fn create(ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    match CREATE_REGISTRY.get(&obj.obj_type()) {
        Some(f) => f(ctx, obj),
        None => Vec::new(),
    }
}

pub fn drop(ctx: &PlanContext, obj: &DbObject) -> Vec<String> {
    match DROP_REGISTRY.get(&obj.obj_type()) {
        Some(f) => f(ctx, obj),
        None => Vec::new(),
    }
}
