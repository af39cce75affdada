//! Package graph - the dependency graph reachable from a root descriptor.
//!
//! Nodes are package identities; an edge `a -> b` means `a` depends on `b`.
//! Descriptors sharing an identity collapse into one node.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::core::{PackageDescriptor, PackageIdentity};
use crate::util::diagnostic::DependencyCycleError;

/// The dependency graph of a package.
#[derive(Debug, Clone)]
pub struct PackageGraph {
    /// Package graph
    graph: DiGraph<PackageIdentity, ()>,

    /// Map from identity to node index
    nodes: HashMap<PackageIdentity, NodeIndex>,

    /// The root package
    root: PackageIdentity,
}

impl PackageGraph {
    /// Walk every descriptor reachable from `root`.
    pub fn from_root(root: &dyn PackageDescriptor) -> Self {
        let mut graph = PackageGraph {
            graph: DiGraph::new(),
            nodes: HashMap::new(),
            root: root.identity().clone(),
        };

        graph.add_package(root.identity());
        let mut stack: Vec<Arc<dyn PackageDescriptor>> = root.dependencies();
        for dep in &stack {
            graph.add_edge(root.identity(), dep.identity());
        }

        let mut visited = HashSet::new();
        visited.insert(root.identity().clone());

        while let Some(current) = stack.pop() {
            if !visited.insert(current.identity().clone()) {
                continue;
            }

            for dep in current.dependencies() {
                graph.add_edge(current.identity(), dep.identity());
                stack.push(dep);
            }
        }

        tracing::debug!("package graph of {} has {} packages", graph.root, graph.len());
        graph
    }

    fn add_package(&mut self, id: &PackageIdentity) -> NodeIndex {
        if let Some(&node) = self.nodes.get(id) {
            return node;
        }

        let node = self.graph.add_node(id.clone());
        self.nodes.insert(id.clone(), node);
        node
    }

    fn add_edge(&mut self, from: &PackageIdentity, to: &PackageIdentity) {
        let from = self.add_package(from);
        let to = self.add_package(to);
        if !self.graph.contains_edge(from, to) {
            self.graph.add_edge(from, to, ());
        }
    }

    /// Get the root package identity.
    pub fn root(&self) -> &PackageIdentity {
        &self.root
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if a package is in the graph.
    pub fn contains(&self, id: &PackageIdentity) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get direct dependencies of a package, sorted by identity.
    pub fn deps(&self, id: &PackageIdentity) -> Vec<&PackageIdentity> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Get packages that depend on the given package, sorted by identity.
    pub fn dependents(&self, id: &PackageIdentity) -> Vec<&PackageIdentity> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: &PackageIdentity, dir: Direction) -> Vec<&PackageIdentity> {
        let Some(&node) = self.nodes.get(id) else {
            return Vec::new();
        };

        let mut ids: Vec<_> = self
            .graph
            .neighbors_directed(node, dir)
            .map(|n| &self.graph[n])
            .collect();
        ids.sort();
        ids
    }

    /// Get packages in build order (dependencies before dependents).
    pub fn build_order(&self) -> Result<Vec<&PackageIdentity>> {
        let mut order = toposort(&self.graph, None).map_err(|cycle| DependencyCycleError {
            package: self.graph[cycle.node_id()].to_string(),
        })?;

        // toposort puts `a` before `b` for `a -> b`; `b` must be built first
        order.reverse();
        Ok(order.into_iter().map(|n| &self.graph[n]).collect())
    }

    /// Get all transitive dependencies of a package.
    pub fn transitive_deps(&self, id: &PackageIdentity) -> HashSet<&PackageIdentity> {
        let mut visited = HashSet::new();
        let mut stack = self.deps(id);

        while let Some(current) = stack.pop() {
            if visited.insert(current) {
                stack.extend(self.deps(current));
            }
        }

        visited
    }

    /// Render the graph as an indented tree starting at the root.
    ///
    /// Packages already printed are marked with `(*)` and not expanded
    /// again.
    pub fn tree_lines(&self, max_depth: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut seen = HashSet::new();
        self.render(&self.root, 0, max_depth, &mut seen, &mut lines);
        lines
    }

    fn render<'a>(
        &'a self,
        id: &'a PackageIdentity,
        depth: usize,
        max_depth: usize,
        seen: &mut HashSet<&'a PackageIdentity>,
        lines: &mut Vec<String>,
    ) {
        if depth > max_depth {
            return;
        }

        let is_duplicate = !seen.insert(id);

        let prefix = if depth == 0 {
            String::new()
        } else {
            format!("{}├── ", "│   ".repeat(depth - 1))
        };
        let dup_marker = if is_duplicate { " (*)" } else { "" };
        lines.push(format!("{}{}{}", prefix, id, dup_marker));

        if is_duplicate {
            return;
        }

        for dep in self.deps(id) {
            self.render(dep, depth + 1, max_depth, seen, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StaticDescriptor;
    use crate::ops::task_package;
    use crate::test_support::{leaf, package_with_deps, FIXTURE_REPO};

    fn id(name: &str) -> PackageIdentity {
        PackageIdentity::new(FIXTURE_REPO, name)
    }

    #[test]
    fn test_task_graph() {
        let task = task_package::get_package().unwrap();
        let graph = PackageGraph::from_root(&task);

        assert_eq!(graph.len(), 2);
        let order: Vec<_> = graph
            .build_order()
            .unwrap()
            .into_iter()
            .map(|id| id.name().to_string())
            .collect();
        assert_eq!(order, vec!["core", "task"]);
    }

    #[test]
    fn test_diamond_is_deduplicated() {
        let base = leaf("base");
        let left: Arc<dyn PackageDescriptor> = Arc::new(package_with_deps("left", &[base.clone()]));
        let right: Arc<dyn PackageDescriptor> =
            Arc::new(package_with_deps("right", &[base.clone()]));
        let app = package_with_deps("app", &[left, right]);

        let graph = PackageGraph::from_root(&app);
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.dependents(&id("base")), vec![&id("left"), &id("right")]);
        assert_eq!(graph.deps(&id("app")), vec![&id("left"), &id("right")]);

        let order = graph.build_order().unwrap();
        assert_eq!(order.first(), Some(&&id("base")));
        assert_eq!(order.last(), Some(&&id("app")));

        let transitive = graph.transitive_deps(&id("app"));
        assert_eq!(transitive.len(), 3);
        assert!(transitive.contains(&id("base")));
    }

    #[test]
    fn test_cycle_detected() {
        // b depends on a descriptor sharing a's identity
        let fake_a: Arc<dyn PackageDescriptor> = Arc::new(StaticDescriptor::new(id("a")));
        let b: Arc<dyn PackageDescriptor> = Arc::new(package_with_deps("b", &[fake_a]));
        let a = package_with_deps("a", &[b]);

        let graph = PackageGraph::from_root(&a);
        let err = graph.build_order().unwrap_err();
        assert!(err.downcast_ref::<DependencyCycleError>().is_some());
    }

    #[test]
    fn test_tree_lines() {
        let base = leaf("base");
        let left: Arc<dyn PackageDescriptor> = Arc::new(package_with_deps("left", &[base.clone()]));
        let app = package_with_deps("app", &[left, base]);

        let graph = PackageGraph::from_root(&app);
        let lines = graph.tree_lines(usize::MAX);
        assert_eq!(
            lines,
            vec![
                "github.com/fixture/app",
                "├── github.com/fixture/base",
                "├── github.com/fixture/left",
                "│   ├── github.com/fixture/base (*)",
            ]
        );

        assert_eq!(graph.tree_lines(0), vec!["github.com/fixture/app"]);
    }

    #[test]
    fn test_unknown_package() {
        let graph = PackageGraph::from_root(&package_with_deps("solo", &[]));
        assert!(graph.contains(&id("solo")));
        assert!(!graph.is_empty());
        assert!(graph.deps(&id("missing")).is_empty());
    }
}
