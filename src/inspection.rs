//! Dependency graph over one database's object universe at one point in
//! time.
//!
//! An edge whose endpoint isn't in the tracked object map is silently
//! dropped rather than treated as an error: catalog inspection only
//! collects seven kinds of objects, so a dependency on something outside
//! that set (an extension-owned type, say) is expected, not anomalous.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, DfsPostOrder, EdgeRef, Reversed};

use crate::object::{DbObject, Identity};

/// An ordered pair `(prerequisite_identity, dependent_identity)`. The
/// dependent cannot exist before the prerequisite; creates must traverse
/// prerequisites first, drops must traverse dependents first.
#[derive(Debug, Clone)]
pub struct DependencyEdge {
    pub prerequisite: Identity,
    pub dependent: Identity,
}

/// The closed world of one database at one point in time: a mapping
/// `identity -> object` plus the dependency DAG over those identities.
///
/// Owns its object records and graph exclusively; nothing is shared across
/// `Inspection`s.
pub struct Inspection {
    objects: BTreeMap<Identity, DbObject>,
    graph: DiGraph<Identity, ()>,
    nodes: BTreeMap<Identity, NodeIndex>,
    /// Opaque server-version metadata; handlers may read it, never require it.
    pub server_version_num: Option<i32>,
    forward_order: OnceCell<Vec<Identity>>,
}

impl Inspection {
    /// Builds an `Inspection` from a flat object list and raw dependency
    /// edges. Edges whose endpoint is not present in `objects` are silently
    /// discarded (they arise from system objects the model does not cover).
    pub fn new(objects: Vec<DbObject>, edges: Vec<DependencyEdge>) -> Result<Self> {
        Self::with_server_version(objects, edges, None)
    }

    pub fn with_server_version(
        objects: Vec<DbObject>,
        edges: Vec<DependencyEdge>,
        server_version_num: Option<i32>,
    ) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut nodes = BTreeMap::new();
        let mut map = BTreeMap::new();

        for obj in objects {
            let id = obj.identity();
            if map.contains_key(&id) {
                return Err(anyhow!("duplicate identity in inspection: {id}"));
            }
            let idx = graph.add_node(id.clone());
            nodes.insert(id.clone(), idx);
            map.insert(id, obj);
        }

        for edge in edges {
            let (Some(&from), Some(&to)) =
                (nodes.get(&edge.prerequisite), nodes.get(&edge.dependent))
            else {
                continue;
            };
            graph.add_edge(from, to, ());
        }

        let inspection = Inspection {
            objects: map,
            graph,
            nodes,
            server_version_num,
            forward_order: OnceCell::new(),
        };
        inspection.forward_order()?;
        Ok(inspection)
    }

    pub fn contains(&self, id: &Identity) -> bool {
        self.objects.contains_key(id)
    }

    pub fn get(&self, id: &Identity) -> Option<&DbObject> {
        self.objects.get(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Every identity in the inspection, for callers that need to walk the
    /// object universe without caring about order (e.g. set-difference
    /// against another inspection).
    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.objects.keys()
    }

    fn forward_order(&self) -> Result<&Vec<Identity>> {
        self.forward_order.get_or_try_init(|| {
            let order = topo_sort_deterministic(&self.graph)
                .map_err(|_| anyhow!("dependency graph contains a cycle"))?;
            Ok(order.into_iter().map(|idx| self.graph[idx].clone()).collect())
        })
    }

    /// Objects in topological order: prerequisites before dependents.
    pub fn iterate_forward(&self) -> Result<Vec<&DbObject>> {
        Ok(self
            .forward_order()?
            .iter()
            .map(|id| &self.objects[id])
            .collect())
    }

    /// Objects in reverse topological order: dependents before prerequisites.
    pub fn iterate_reverse(&self) -> Result<Vec<&DbObject>> {
        let mut v = self.iterate_forward()?;
        v.reverse();
        Ok(v)
    }

    /// Every strict prerequisite of `id`, ordered so closer prerequisites
    /// come last (reverse topological within the ancestor subgraph).
    pub fn ancestors(&self, id: &Identity) -> Result<Vec<&DbObject>> {
        let Some(&start) = self.nodes.get(id) else {
            return Ok(Vec::new());
        };
        let mut seen = std::collections::HashSet::new();
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(&reversed, start);
        while let Some(n) = bfs.next(&reversed) {
            if n != start {
                seen.insert(n);
            }
        }
        let order = self.forward_order()?;
        let mut out: Vec<&DbObject> = order
            .iter()
            .filter(|id| seen.contains(&self.nodes[*id]))
            .map(|id| &self.objects[id])
            .collect();
        out.reverse();
        Ok(out)
    }

    /// Every strict dependent of `id`, ordered topologically (immediate
    /// dependents first).
    pub fn descendants(&self, id: &Identity) -> Result<Vec<&DbObject>> {
        let Some(&start) = self.nodes.get(id) else {
            return Ok(Vec::new());
        };
        let mut seen = std::collections::HashSet::new();
        let mut dfs = DfsPostOrder::new(&self.graph, start);
        while let Some(n) = dfs.next(&self.graph) {
            if n != start {
                seen.insert(n);
            }
        }
        let order = self.forward_order()?;
        Ok(order
            .iter()
            .filter(|id| seen.contains(&self.nodes[*id]))
            .map(|id| &self.objects[id])
            .collect())
    }

    /// Descendants of `id` of kind `view` only, in the order required by the
    /// planner: reverse-topological for drops, topological for creates.
    pub fn view_descendants(&self, id: &Identity, topological: bool) -> Result<Vec<Identity>> {
        let mut views: Vec<Identity> = self
            .descendants(id)?
            .into_iter()
            .filter(|o| o.obj_type() == crate::object::ObjType::View)
            .map(|o| o.identity())
            .collect();
        if !topological {
            views.reverse();
        }
        Ok(views)
    }
}

/// Kahn's algorithm over `petgraph`, breaking ties among equally-ready nodes
/// by ascending node weight (`Identity`'s `Ord`), so the resulting order is
/// deterministic independent of insertion order.
fn topo_sort_deterministic(graph: &DiGraph<Identity, ()>) -> Result<Vec<NodeIndex>, ()> {
    use std::collections::BinaryHeap;
    use std::cmp::Reverse;

    let mut in_degree: BTreeMap<NodeIndex, usize> = BTreeMap::new();
    for n in graph.node_indices() {
        in_degree.insert(n, graph.edges_directed(n, Direction::Incoming).count());
    }

    let mut ready: BinaryHeap<Reverse<(Identity, NodeIndex)>> = BinaryHeap::new();
    for (&n, &deg) in &in_degree {
        if deg == 0 {
            ready.push(Reverse((graph[n].clone(), n)));
        }
    }

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(Reverse((_, n))) = ready.pop() {
        order.push(n);
        for edge in graph.edges_directed(n, Direction::Outgoing) {
            let target = edge.target();
            let deg = in_degree.get_mut(&target).unwrap();
            *deg -= 1;
            if *deg == 0 {
                ready.push(Reverse((graph[target].clone(), target)));
            }
        }
    }

    if order.len() != graph.node_count() {
        return Err(());
    }
    Ok(order)
}
