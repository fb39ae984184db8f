//! Change planner. `plan(source, target)` turns two `Inspection`s into an
//! ordered list of SQL statements in three stages: classify each object as
//! create/drop/alter while walking the dependency graph in the right
//! direction for each, deduplicate the raw step sequence down to one step
//! per object, then render each surviving step to text.

use anyhow::Result;

use crate::ctx::PlanContext;
use crate::diff;
use crate::inspection::Inspection;
use crate::object::Identity;
use crate::render::format_statement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Create,
    Drop,
    Alter,
}

#[derive(Debug, Clone)]
struct Step {
    op: Op,
    id: Identity,
}

/// Step 1: classify. Walk `target` in topological order, then `source` in
/// reverse topological order, producing the raw (possibly duplicated)
/// change-set sequence.
fn classify(source: &Inspection, target: &Inspection) -> Result<Vec<Step>> {
    let mut steps = Vec::new();

    for obj in target.iterate_forward()? {
        let id = obj.identity();
        if !source.contains(&id) {
            steps.push(Step { op: Op::Create, id });
            continue;
        }

        for d in source.view_descendants(&id, false)? {
            steps.push(Step { op: Op::Drop, id: d });
        }
        steps.push(Step { op: Op::Alter, id: id.clone() });
        for d in target.view_descendants(&id, true)? {
            steps.push(Step { op: Op::Create, id: d });
        }
    }

    for obj in source.iterate_reverse()? {
        let id = obj.identity();
        if !target.contains(&id) {
            steps.push(Step { op: Op::Drop, id });
        }
    }

    Ok(steps)
}

/// Step 2: deduplicate cascaded views.
///
/// - drop -> keep the first occurrence.
/// - create -> keep the last occurrence.
/// - alter -> keep all occurrences.
fn deduplicate(steps: Vec<Step>) -> Vec<Step> {
    use std::collections::HashSet;

    let mut keep_drop: HashSet<(usize, Identity)> = HashSet::new();
    {
        let mut seen = HashSet::new();
        for (i, s) in steps.iter().enumerate() {
            if s.op == Op::Drop && seen.insert(s.id.clone()) {
                keep_drop.insert((i, s.id.clone()));
            }
        }
    }

    let mut keep_create: HashSet<(usize, Identity)> = HashSet::new();
    {
        let mut last: std::collections::HashMap<Identity, usize> = std::collections::HashMap::new();
        for (i, s) in steps.iter().enumerate() {
            if s.op == Op::Create {
                last.insert(s.id.clone(), i);
            }
        }
        for (id, i) in last {
            keep_create.insert((i, id));
        }
    }

    steps
        .into_iter()
        .enumerate()
        .filter(|(i, s)| match s.op {
            Op::Drop => keep_drop.contains(&(*i, s.id.clone())),
            Op::Create => keep_create.contains(&(*i, s.id.clone())),
            Op::Alter => true,
        })
        .map(|(_, s)| s)
        .collect()
}

/// Step 3: render. Dispatches each surviving step through C4 and passes
/// every fragment through the statement formatter.
fn render(ctx: &PlanContext, steps: &[Step]) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for step in steps {
        let fragments = match step.op {
            Op::Alter => {
                let source_obj = ctx.source.get(&step.id);
                let target_obj = ctx.target.get(&step.id);
                match (source_obj, target_obj) {
                    (Some(s), Some(t)) => diff::diff(ctx, s, t),
                    _ => continue,
                }
            }
            Op::Drop => match ctx.source.get(&step.id) {
                Some(obj) => diff::drop(ctx, obj),
                None => continue,
            },
            Op::Create => match ctx.target.get(&step.id) {
                Some(obj) => diff::create(ctx, obj),
                None => continue,
            },
        };

        for fragment in fragments {
            if fragment.trim().is_empty() {
                continue;
            }
            out.push(format_statement(&fragment));
        }
    }
    Ok(out)
}

/// `plan(source, target)`: the ordered list of SQL statements that converge
/// `source` to `target`.
pub fn plan(source: &Inspection, target: &Inspection) -> Result<Vec<String>> {
    let ctx = PlanContext::new(source, target);
    let steps = classify(source, target)?;
    let steps = deduplicate(steps);
    render(&ctx, &steps)
}
