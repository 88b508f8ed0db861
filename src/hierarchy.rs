//! Generic hierarchy engine and tree views over [`Graphable`] nodes.
//!
//! One [`Hierarchy`] implementation serves roles, admin roles, and org units.
//! Node names are matched ignoring case. Every edge is recorded on both
//! ends: in the child's parent set and in the parent's child set.
use crate::{
    config,
    error::{Error, Result},
    graph::Graphable,
    relationship::{Relationship, RelationshipEdits},
};
use dashmap::DashMap;
#[cfg(feature = "persistence")]
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

#[cfg(feature = "audit")]
use log::info;

/// Configuration for hierarchy traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(Serialize, Deserialize))]
pub struct HierarchyConfig {
    /// Maximum hierarchy depth to prevent runaway recursion
    pub max_hierarchy_depth: usize,
    /// Maximum number of nodes visited by a single traversal
    pub max_traversal_size: usize,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            max_hierarchy_depth: 10,
            max_traversal_size: 1000,
        }
    }
}

/// Builder for creating hierarchy configurations.
///
/// # Example
/// ```rust
/// use directory_rbac::hierarchy::HierarchyConfigBuilder;
///
/// let config = HierarchyConfigBuilder::new()
///     .max_depth(15)
///     .max_traversal_size(500)
///     .build();
/// ```
pub struct HierarchyConfigBuilder {
    config: HierarchyConfig,
}

impl HierarchyConfigBuilder {
    /// Create a new hierarchy configuration builder.
    pub fn new() -> Self {
        Self {
            config: HierarchyConfig::default(),
        }
    }

    /// Set the maximum hierarchy depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_hierarchy_depth = depth;
        self
    }

    /// Set the maximum traversal size.
    pub fn max_traversal_size(mut self, size: usize) -> Self {
        self.config.max_traversal_size = size;
        self
    }

    /// Build the hierarchy configuration.
    pub fn build(self) -> HierarchyConfig {
        self.config
    }
}

impl Default for HierarchyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

/// A hierarchy of nodes of one kind.
///
/// # Example
/// ```rust
/// use directory_rbac::{Hierarchy, Relationship, Role};
///
/// let mut roles = Hierarchy::default();
/// roles.insert_node(Role::new("employee"))?;
/// roles.insert_node(Role::new("teller"))?;
/// roles.add_relationship(&Relationship::new("teller", "employee"))?;
///
/// assert!(roles.is_ascendant("teller", "employee")?);
/// # Ok::<(), directory_rbac::Error>(())
/// ```
#[derive(Debug)]
pub struct Hierarchy<N: Graphable> {
    config: HierarchyConfig,
    // key -> node
    nodes: DashMap<String, N>,
}

impl<N: Graphable> Default for Hierarchy<N> {
    /// An empty hierarchy using the process-wide hierarchy settings.
    fn default() -> Self {
        Self::new(config::global().hierarchy.clone())
    }
}

impl<N: Graphable> Hierarchy<N> {
    /// Create an empty hierarchy.
    pub fn new(config: HierarchyConfig) -> Self {
        Self {
            config,
            nodes: DashMap::new(),
        }
    }

    /// Build a hierarchy from nodes whose parent sets are already populated.
    ///
    /// Every parent must name a node in the batch, the result must be
    /// acyclic, and no chain may be longer than the configured depth. Child
    /// sets are rebuilt from the parent sets.
    pub fn load(nodes: impl IntoIterator<Item = N>, config: HierarchyConfig) -> Result<Self> {
        let hierarchy = Self::new(config);

        for mut node in nodes {
            let k = key(node.name());
            if hierarchy.nodes.contains_key(&k) {
                return Err(Error::NodeAlreadyExists(node.name().to_string()));
            }
            node.set_children(HashSet::new());
            hierarchy.nodes.insert(k, node);
        }

        let mut edges = Vec::new();
        for entry in hierarchy.nodes.iter() {
            for parent in entry.value().parents() {
                let pk = key(parent);
                if pk == *entry.key() {
                    return Err(Error::CircularDependency(entry.value().name().to_string()));
                }
                if !hierarchy.nodes.contains_key(&pk) {
                    return Err(Error::NodeNotFound(parent.clone()));
                }
                edges.push((pk, entry.value().name().to_string()));
            }
        }
        for (pk, child) in edges {
            if let Some(mut parent) = hierarchy.nodes.get_mut(&pk) {
                parent.set_child(&child);
            }
        }

        let keys: Vec<String> = hierarchy.nodes.iter().map(|e| e.key().clone()).collect();
        let mut done = HashSet::new();
        for k in &keys {
            let mut visiting = HashSet::new();
            hierarchy.check_acyclic(k, &mut visiting, &mut done)?;
        }

        let mut heights = HashMap::new();
        for k in &keys {
            if hierarchy.longest_chain(k, &|n| hierarchy.parent_keys(n), &mut heights)
                > hierarchy.config.max_hierarchy_depth
            {
                return Err(Error::MaxDepthExceeded(hierarchy.config.max_hierarchy_depth));
            }
        }

        Ok(hierarchy)
    }

    /// Get the configuration.
    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the hierarchy has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether a node with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(&key(name))
    }

    /// Insert a node with no edges.
    ///
    /// Any parents or children already on the node are dropped; wire edges
    /// with [`add_relationship`](Self::add_relationship).
    pub fn insert_node(&mut self, mut node: N) -> Result<()> {
        let k = key(node.name());
        if self.nodes.contains_key(&k) {
            return Err(Error::NodeAlreadyExists(node.name().to_string()));
        }

        node.set_parents(HashSet::new());
        node.set_children(HashSet::new());

        #[cfg(feature = "audit")]
        info!("Hierarchy node '{}' inserted", node.name());

        self.nodes.insert(k, node);
        Ok(())
    }

    /// Remove a node, detaching it from its parents and children.
    pub fn remove_node(&mut self, name: &str) -> Result<N> {
        let (_, node) = self
            .nodes
            .remove(&key(name))
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))?;

        for parent in node.parents() {
            if let Some(mut parent_node) = self.nodes.get_mut(&key(parent)) {
                parent_node.del_child(node.name());
            }
        }
        for child in node.children() {
            if let Some(mut child_node) = self.nodes.get_mut(&key(child)) {
                child_node.del_parent(node.name());
            }
        }

        #[cfg(feature = "audit")]
        info!("Hierarchy node '{name}' removed");

        Ok(node)
    }

    /// Add a child-to-parent edge. Adding an existing edge is a no-op.
    ///
    /// Fails with [`Error::MaxDepthExceeded`] if the edge would create a
    /// chain longer than the configured depth.
    pub fn add_relationship(&mut self, relationship: &Relationship) -> Result<()> {
        let (child, parent) = relationship
            .names()
            .ok_or_else(|| Error::InvalidRelationship(relationship.to_string()))?;
        let (ck, pk) = (key(child), key(parent));

        let child_name = self
            .nodes
            .get(&ck)
            .map(|n| n.name().to_string())
            .ok_or_else(|| Error::NodeNotFound(child.to_string()))?;
        let parent_name = self
            .nodes
            .get(&pk)
            .map(|n| n.name().to_string())
            .ok_or_else(|| Error::NodeNotFound(parent.to_string()))?;

        if ck == pk || self.has_path(&pk, &ck)? {
            return Err(Error::CircularDependency(child.to_string()));
        }
        if self.parent_keys(&ck).contains(&pk) {
            return Ok(());
        }

        let max = self.config.max_hierarchy_depth;
        let above = self.longest_chain(&pk, &|n| self.parent_keys(n), &mut HashMap::new());
        let below = self.longest_chain(&ck, &|n| self.child_keys(n), &mut HashMap::new());
        if above + 1 + below > max {
            return Err(Error::MaxDepthExceeded(max));
        }

        if let Some(mut node) = self.nodes.get_mut(&ck) {
            node.set_parent(&parent_name);
        }
        if let Some(mut node) = self.nodes.get_mut(&pk) {
            node.set_child(&child_name);
        }

        #[cfg(feature = "audit")]
        info!("Hierarchy edge added: '{child}' inherits from '{parent}'");

        Ok(())
    }

    /// Remove a child-to-parent edge. Removing an absent edge is a no-op.
    pub fn remove_relationship(&mut self, relationship: &Relationship) -> Result<()> {
        let (child, parent) = relationship
            .names()
            .ok_or_else(|| Error::InvalidRelationship(relationship.to_string()))?;

        self.nodes
            .get_mut(&key(child))
            .ok_or_else(|| Error::NodeNotFound(child.to_string()))?
            .del_parent(parent);

        if let Some(mut node) = self.nodes.get_mut(&key(parent)) {
            node.del_child(child);
        }

        #[cfg(feature = "audit")]
        info!("Hierarchy edge removed: '{child}' no longer inherits from '{parent}'");

        Ok(())
    }

    /// Apply a set of edits, removals first.
    pub fn apply(&mut self, edits: &RelationshipEdits) -> Result<()> {
        for rel in &edits.removed {
            self.remove_relationship(rel)?;
        }
        for rel in &edits.added {
            self.add_relationship(rel)?;
        }
        Ok(())
    }

    /// Names of the direct parents of a node.
    pub fn parents(&self, name: &str) -> Result<HashSet<String>> {
        self.nodes
            .get(&key(name))
            .map(|n| n.parents().clone())
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))
    }

    /// Names of the direct children of a node.
    pub fn children(&self, name: &str) -> Result<HashSet<String>> {
        self.nodes
            .get(&key(name))
            .map(|n| n.children().clone())
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))
    }

    /// Names of every node above this one.
    pub fn ascendants(&self, name: &str) -> Result<HashSet<String>> {
        let k = key(name);
        if !self.nodes.contains_key(&k) {
            return Err(Error::NodeNotFound(name.to_string()));
        }
        let keys = self.walk(&k, |n| self.parent_keys(n))?;
        Ok(self.display_names(keys))
    }

    /// Names of every node below this one.
    pub fn descendants(&self, name: &str) -> Result<HashSet<String>> {
        let k = key(name);
        if !self.nodes.contains_key(&k) {
            return Err(Error::NodeNotFound(name.to_string()));
        }
        let keys = self.walk(&k, |n| self.child_keys(n))?;
        Ok(self.display_names(keys))
    }

    /// Check whether `ascendant` sits anywhere above `name`.
    pub fn is_ascendant(&self, name: &str, ascendant: &str) -> Result<bool> {
        if !self.nodes.contains_key(&key(ascendant)) {
            return Err(Error::NodeNotFound(ascendant.to_string()));
        }
        let lowered = key(ascendant);
        Ok(self
            .ascendants(name)?
            .iter()
            .any(|a| key(a) == lowered))
    }

    /// Breadth-first walk from `start`, excluding `start` itself.
    fn walk<F>(&self, start: &str, next: F) -> Result<HashSet<String>>
    where
        F: Fn(&str) -> Vec<String>,
    {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([(start.to_string(), 0usize)]);

        while let Some((current, depth)) = queue.pop_front() {
            for neighbour in next(&current) {
                if seen.contains(&neighbour) {
                    continue;
                }
                if depth + 1 > self.config.max_hierarchy_depth {
                    return Err(Error::MaxDepthExceeded(self.config.max_hierarchy_depth));
                }
                if seen.len() >= self.config.max_traversal_size {
                    return Err(Error::TraversalLimitExceeded(self.config.max_traversal_size));
                }
                seen.insert(neighbour.clone());
                queue.push_back((neighbour, depth + 1));
            }
        }

        Ok(seen)
    }

    /// Number of edges on the longest chain leaving `k`. The graph must be
    /// acyclic.
    fn longest_chain<F>(&self, k: &str, next: &F, memo: &mut HashMap<String, usize>) -> usize
    where
        F: Fn(&str) -> Vec<String>,
    {
        if let Some(&length) = memo.get(k) {
            return length;
        }
        let length = next(k)
            .iter()
            .map(|n| self.longest_chain(n, next, memo) + 1)
            .max()
            .unwrap_or(0);
        memo.insert(k.to_string(), length);
        length
    }

    fn parent_keys(&self, k: &str) -> Vec<String> {
        self.nodes
            .get(k)
            .map(|n| n.parents().iter().map(|p| key(p)).collect())
            .unwrap_or_default()
    }

    fn child_keys(&self, k: &str) -> Vec<String> {
        self.nodes
            .get(k)
            .map(|n| n.children().iter().map(|c| key(c)).collect())
            .unwrap_or_default()
    }

    fn display_names(&self, keys: impl IntoIterator<Item = String>) -> HashSet<String> {
        keys.into_iter()
            .filter_map(|k| self.nodes.get(&k).map(|n| n.name().to_string()))
            .collect()
    }

    fn has_path(&self, from: &str, to: &str) -> Result<bool> {
        if from == to {
            return Ok(true);
        }
        Ok(self.walk(from, |n| self.parent_keys(n))?.contains(to))
    }

    fn check_acyclic(
        &self,
        k: &str,
        visiting: &mut HashSet<String>,
        done: &mut HashSet<String>,
    ) -> Result<()> {
        if done.contains(k) {
            return Ok(());
        }
        if !visiting.insert(k.to_string()) {
            let name = self
                .nodes
                .get(k)
                .map(|n| n.name().to_string())
                .unwrap_or_else(|| k.to_string());
            return Err(Error::CircularDependency(name));
        }
        for parent in self.parent_keys(k) {
            self.check_acyclic(&parent, visiting, done)?;
        }
        visiting.remove(k);
        done.insert(k.to_string());
        Ok(())
    }
}

impl<N: Graphable + Clone> Hierarchy<N> {
    /// Get a copy of a node.
    pub fn node(&self, name: &str) -> Option<N> {
        self.nodes.get(&key(name)).map(|n| n.clone())
    }

    /// Build the descendant tree rooted at `root`.
    ///
    /// A node reachable along several paths appears under each of its parents.
    pub fn tree(&self, root: &str) -> Result<HierarchyTree<N>> {
        let k = key(root);
        if !self.nodes.contains_key(&k) {
            return Err(Error::NodeNotFound(root.to_string()));
        }
        let node = self.build_tree_node(&k, 0)?;
        Ok(HierarchyTree::new(node))
    }

    fn build_tree_node(&self, k: &str, depth: usize) -> Result<HierarchyNode<N>> {
        if depth > self.config.max_hierarchy_depth {
            return Err(Error::MaxDepthExceeded(self.config.max_hierarchy_depth));
        }
        let value = self
            .nodes
            .get(k)
            .map(|n| n.clone())
            .ok_or_else(|| Error::NodeNotFound(k.to_string()))?;

        let mut node = HierarchyNode::new(value, depth);
        let mut kids = self.child_keys(k);
        kids.sort();
        for child in kids {
            node.add_child(self.build_tree_node(&child, depth + 1)?);
        }
        Ok(node)
    }
}

/// A descendant tree rooted at one node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "persistence", derive(Serialize, Deserialize))]
pub struct HierarchyTree<N> {
    /// Root node of the tree
    pub root: HierarchyNode<N>,
    /// Number of nodes in the tree, counting repeats
    pub total_nodes: usize,
    /// Maximum depth of the tree
    pub max_depth: usize,
}

/// A single node in a [`HierarchyTree`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "persistence", derive(Serialize, Deserialize))]
pub struct HierarchyNode<N> {
    /// The node value
    pub value: N,
    /// Direct children
    pub children: Vec<HierarchyNode<N>>,
    /// Depth in the tree (root = 0)
    pub depth: usize,
    /// Number of descendants (including indirect children)
    pub descendant_count: usize,
}

impl<N: Graphable> HierarchyTree<N> {
    /// Wrap a built root node.
    pub fn new(root: HierarchyNode<N>) -> Self {
        let total_nodes = root.descendant_count + 1;
        let max_depth = Self::calculate_max_depth(&root);
        Self {
            root,
            total_nodes,
            max_depth,
        }
    }

    fn calculate_max_depth(node: &HierarchyNode<N>) -> usize {
        node.children
            .iter()
            .map(Self::calculate_max_depth)
            .max()
            .unwrap_or(node.depth)
    }

    /// Get all node values in the tree, depth first.
    pub fn flatten(&self) -> Vec<&N> {
        let mut values = Vec::new();
        Self::flatten_node(&self.root, &mut values);
        values
    }

    fn flatten_node<'a>(node: &'a HierarchyNode<N>, values: &mut Vec<&'a N>) {
        values.push(&node.value);
        for child in &node.children {
            Self::flatten_node(child, values);
        }
    }

    /// Find the first node with this name, ignoring case.
    pub fn find_node(&self, name: &str) -> Option<&HierarchyNode<N>> {
        Self::find_node_recursive(&self.root, &key(name))
    }

    fn find_node_recursive<'a>(node: &'a HierarchyNode<N>, k: &str) -> Option<&'a HierarchyNode<N>> {
        if key(node.value.name()) == k {
            return Some(node);
        }
        node.children
            .iter()
            .find_map(|child| Self::find_node_recursive(child, k))
    }
}

impl<N: Graphable> HierarchyNode<N> {
    /// Create a leaf node.
    pub fn new(value: N, depth: usize) -> Self {
        Self {
            value,
            children: Vec::new(),
            depth,
            descendant_count: 0,
        }
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: HierarchyNode<N>) {
        self.descendant_count += child.descendant_count + 1;
        self.children.push(child);
    }

    /// Get all descendant names.
    pub fn descendant_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for child in &self.children {
            names.push(child.value.name().to_string());
            names.extend(child.descendant_names());
        }
        names
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if this node is the root (depth 0).
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{org_unit::OrgUnit, role::Role};

    fn bank() -> Hierarchy<Role> {
        let mut roles = Hierarchy::default();
        for name in ["Employee", "Teller", "Washer", "Manager"] {
            roles.insert_node(Role::new(name)).unwrap();
        }
        roles
            .add_relationship(&Relationship::new("Teller", "Employee"))
            .unwrap();
        roles
            .add_relationship(&Relationship::new("Washer", "Employee"))
            .unwrap();
        roles
            .add_relationship(&Relationship::new("Manager", "Teller"))
            .unwrap();
        roles
    }

    #[test]
    fn test_hierarchy_config_builder() {
        let config = HierarchyConfigBuilder::new()
            .max_depth(15)
            .max_traversal_size(500)
            .build();

        assert_eq!(config.max_hierarchy_depth, 15);
        assert_eq!(config.max_traversal_size, 500);
    }

    #[test]
    fn test_ascendants_and_descendants() {
        let roles = bank();

        let up = roles.ascendants("manager").unwrap();
        assert_eq!(up.len(), 2);
        assert!(up.contains("Teller"));
        assert!(up.contains("Employee"));

        let down = roles.descendants("Employee").unwrap();
        assert_eq!(down.len(), 3);
        assert!(roles.is_ascendant("Manager", "EMPLOYEE").unwrap());
        assert!(!roles.is_ascendant("Employee", "Manager").unwrap());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut roles = bank();
        roles
            .add_relationship(&Relationship::new("teller", "employee"))
            .unwrap();
        assert_eq!(roles.parents("Teller").unwrap().len(), 1);
        assert_eq!(roles.children("Employee").unwrap().len(), 2);
    }

    #[test]
    fn test_remove_absent_edge_is_noop() {
        let mut roles = bank();
        let before = roles.parents("Teller").unwrap();
        roles
            .remove_relationship(&Relationship::new("Teller", "ROLE_A"))
            .unwrap();
        assert_eq!(roles.parents("Teller").unwrap(), before);
    }

    #[test]
    fn test_cycle_rejected() {
        let mut roles = bank();
        let result = roles.add_relationship(&Relationship::new("Employee", "Manager"));
        assert!(matches!(result, Err(Error::CircularDependency(_))));

        let result = roles.add_relationship(&Relationship::new("Teller", "teller"));
        assert!(matches!(result, Err(Error::CircularDependency(_))));
    }

    #[test]
    fn test_incomplete_relationship_rejected() {
        let mut roles = bank();
        let result = roles.add_relationship(&Relationship::empty());
        assert!(matches!(result, Err(Error::InvalidRelationship(_))));
    }

    #[test]
    fn test_remove_node_detaches() {
        let mut roles = bank();
        roles.remove_node("Teller").unwrap();

        assert!(roles.parents("Manager").unwrap().is_empty());
        assert_eq!(roles.children("Employee").unwrap().len(), 1);
        assert!(matches!(
            roles.remove_node("Teller"),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_load_validates() {
        let a = OrgUnit::user("a");
        let b = OrgUnit::user("b").with_parent("a");
        let loaded = Hierarchy::load(vec![a.clone(), b.clone()], HierarchyConfig::default()).unwrap();
        assert_eq!(loaded.children("a").unwrap().len(), 1);

        let dangling = OrgUnit::user("c").with_parent("missing");
        assert!(Hierarchy::load(vec![dangling], HierarchyConfig::default()).is_err());

        let x = OrgUnit::user("x").with_parent("y");
        let y = OrgUnit::user("y").with_parent("x");
        assert!(matches!(
            Hierarchy::load(vec![x, y], HierarchyConfig::default()),
            Err(Error::CircularDependency(_))
        ));

        assert!(matches!(
            Hierarchy::load(vec![a.clone(), a], HierarchyConfig::default()),
            Err(Error::NodeAlreadyExists(_))
        ));
    }

    #[test]
    fn test_edge_past_max_depth_rejected() {
        let config = HierarchyConfigBuilder::new().max_depth(2).build();
        let mut roles = Hierarchy::new(config);
        for name in ["r0", "r1", "r2", "r3"] {
            roles.insert_node(Role::new(name)).unwrap();
        }
        roles.add_relationship(&Relationship::new("r1", "r0")).unwrap();
        roles.add_relationship(&Relationship::new("r2", "r1")).unwrap();

        assert!(matches!(
            roles.add_relationship(&Relationship::new("r3", "r2")),
            Err(Error::MaxDepthExceeded(2))
        ));
        assert!(roles.parents("r3").unwrap().is_empty());
        assert!(roles.children("r2").unwrap().is_empty());

        assert_eq!(roles.ascendants("r2").unwrap().len(), 2);
        assert_eq!(roles.descendants("r0").unwrap().len(), 2);
        assert!(roles.is_ascendant("r2", "r0").unwrap());
        assert!(roles.ascendants("r3").unwrap().is_empty());
    }

    #[test]
    fn test_joining_two_chains_counts_both_sides() {
        let config = HierarchyConfigBuilder::new().max_depth(3).build();
        let mut roles = Hierarchy::new(config);
        for name in ["a0", "a1", "b0", "b1"] {
            roles.insert_node(Role::new(name)).unwrap();
        }
        roles.add_relationship(&Relationship::new("a1", "a0")).unwrap();
        roles.add_relationship(&Relationship::new("b1", "b0")).unwrap();

        // a0 <- a1 <- b0 <- b1 is three edges
        roles.add_relationship(&Relationship::new("b0", "a1")).unwrap();
        assert_eq!(roles.ascendants("b1").unwrap().len(), 3);

        roles.insert_node(Role::new("b2")).unwrap();
        assert!(matches!(
            roles.add_relationship(&Relationship::new("b2", "b1")),
            Err(Error::MaxDepthExceeded(3))
        ));
    }

    #[test]
    fn test_load_rejects_deep_chain() {
        let nodes = vec![
            OrgUnit::user("u0"),
            OrgUnit::user("u1").with_parent("u0"),
            OrgUnit::user("u2").with_parent("u1"),
        ];
        let config = HierarchyConfigBuilder::new().max_depth(1).build();
        assert!(matches!(
            Hierarchy::load(nodes.clone(), config),
            Err(Error::MaxDepthExceeded(1))
        ));

        let config = HierarchyConfigBuilder::new().max_depth(2).build();
        assert!(Hierarchy::load(nodes, config).is_ok());
    }

    #[test]
    fn test_node_children_follow_edges() {
        let mut roles = bank();
        let employee = roles.node("employee").unwrap();
        assert_eq!(employee.children(), &roles.children("Employee").unwrap());
        assert!(employee.has_child("teller"));
        assert!(employee.has_child("washer"));

        roles
            .remove_relationship(&Relationship::new("washer", "EMPLOYEE"))
            .unwrap();
        assert!(!roles.node("Employee").unwrap().has_child("Washer"));

        roles.remove_node("Manager").unwrap();
        assert!(roles.node("Teller").unwrap().children().is_empty());

        let tree = roles.tree("Employee").unwrap();
        assert!(tree.root.value.has_child("Teller"));
    }

    #[test]
    fn test_insert_and_load_reset_children() {
        let mut stale = Role::new("Stale");
        stale.set_child("Ghost");
        let mut roles = Hierarchy::default();
        roles.insert_node(stale).unwrap();
        assert!(roles.node("Stale").unwrap().children().is_empty());

        let mut parent = OrgUnit::perm("apps");
        parent.set_child("ghost");
        let child = OrgUnit::perm("billing").with_parent("apps");
        let loaded = Hierarchy::load(vec![parent, child], HierarchyConfig::default()).unwrap();
        let apps = loaded.node("apps").unwrap();
        assert_eq!(apps.children().len(), 1);
        assert!(apps.has_child("billing"));
    }

    #[test]
    fn test_tree() {
        let roles = bank();
        let tree = roles.tree("Employee").unwrap();

        assert_eq!(tree.total_nodes, 4);
        assert_eq!(tree.max_depth, 2);
        assert!(tree.root.is_root());
        assert_eq!(tree.flatten().len(), 4);

        let teller = tree.find_node("teller").unwrap();
        assert_eq!(teller.depth, 1);
        assert_eq!(teller.descendant_names(), vec!["Manager".to_string()]);
        assert!(tree.find_node("Manager").unwrap().is_leaf());
    }
}
