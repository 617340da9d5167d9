//! Indexed view over the three-tier category hierarchy.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use crate::{
    config::DEFAULT_FALLBACK_CATEGORY_LABEL,
    domain::{Category, CategoryLevel, Displayable, Transaction, TransactionKind},
    errors::{EngineError, Result},
};

/// Structural problem found while indexing categories.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum HierarchyViolation {
    DuplicateId(Uuid),
    PrimaryWithParent(Uuid),
    MissingParent(Uuid),
    DanglingParent { category: Uuid, parent: Uuid },
    WrongParentLevel { category: Uuid, parent: Uuid },
    KindMismatch { category: Uuid, parent: Uuid },
}

impl std::fmt::Display for HierarchyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyViolation::DuplicateId(id) => write!(f, "duplicate category id {id}"),
            HierarchyViolation::PrimaryWithParent(id) => {
                write!(f, "primary category {id} has a parent")
            }
            HierarchyViolation::MissingParent(id) => write!(f, "category {id} has no parent"),
            HierarchyViolation::DanglingParent { category, parent } => {
                write!(f, "category {category} points at missing parent {parent}")
            }
            HierarchyViolation::WrongParentLevel { category, parent } => {
                write!(f, "category {category} has parent {parent} of the wrong level")
            }
            HierarchyViolation::KindMismatch { category, parent } => {
                write!(f, "category {category} and parent {parent} differ in kind")
            }
        }
    }
}

/// Arena of categories plus an id index. Lookups never fail on dangling ids.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    nodes: Vec<Category>,
    index: HashMap<Uuid, usize>,
    duplicates: Vec<Uuid>,
    fallback_label: String,
}

impl Default for CategoryTree {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CategoryTree {
    /// Indexes `categories`, keeping the first entry when ids repeat.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        let mut duplicates = Vec::new();
        for category in categories {
            if index.contains_key(&category.id) {
                tracing::warn!(id = %category.id, code = %category.code, "duplicate category id ignored");
                duplicates.push(category.id);
                continue;
            }
            index.insert(category.id, nodes.len());
            nodes.push(category);
        }
        Self {
            nodes,
            index,
            duplicates,
            fallback_label: DEFAULT_FALLBACK_CATEGORY_LABEL.to_string(),
        }
    }

    /// Like [`CategoryTree::new`] but refuses a hierarchy with any violation.
    pub fn try_new(categories: impl IntoIterator<Item = Category>) -> Result<Self> {
        let tree = Self::new(categories);
        let violations = tree.violations();
        if let Some(first) = violations.first() {
            return Err(EngineError::InvalidHierarchy(format!(
                "{first} ({} problem(s) total)",
                violations.len()
            )));
        }
        Ok(tree)
    }

    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = label.into();
        self
    }

    pub fn fallback_label(&self) -> &str {
        &self.fallback_label
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.nodes.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&Category> {
        self.index.get(&id).map(|idx| &self.nodes[*idx])
    }

    pub fn violations(&self) -> Vec<HierarchyViolation> {
        let mut violations: Vec<HierarchyViolation> = self
            .duplicates
            .iter()
            .map(|id| HierarchyViolation::DuplicateId(*id))
            .collect();
        for node in &self.nodes {
            match (node.level.expected_parent(), node.parent_id) {
                (None, Some(_)) => violations.push(HierarchyViolation::PrimaryWithParent(node.id)),
                (None, None) => {}
                (Some(_), None) => violations.push(HierarchyViolation::MissingParent(node.id)),
                (Some(expected), Some(parent_id)) => match self.get(parent_id) {
                    None => violations.push(HierarchyViolation::DanglingParent {
                        category: node.id,
                        parent: parent_id,
                    }),
                    Some(parent) => {
                        if parent.level != expected {
                            violations.push(HierarchyViolation::WrongParentLevel {
                                category: node.id,
                                parent: parent_id,
                            });
                        }
                        if parent.kind != node.kind {
                            violations.push(HierarchyViolation::KindMismatch {
                                category: node.id,
                                parent: parent_id,
                            });
                        }
                    }
                },
            }
        }
        violations
    }

    /// `"{code} - {name}"`, or the fallback label for absent or unknown ids.
    pub fn display_label(&self, id: Option<Uuid>) -> String {
        id.and_then(|id| self.get(id))
            .map(Displayable::display_label)
            .unwrap_or_else(|| self.fallback_label.clone())
    }

    /// Label for a movement's category; categories it may not carry get the fallback.
    pub fn label_for(&self, txn: &Transaction) -> String {
        self.label_for_with(txn, &self.fallback_label)
    }

    /// Same as [`CategoryTree::label_for`] with a caller-supplied fallback.
    pub fn label_for_with(&self, txn: &Transaction, fallback: &str) -> String {
        txn.category_id
            .and_then(|id| self.get(id))
            .filter(|category| category.is_assignable_to(txn.kind))
            .map(Displayable::display_label)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// The category itself followed by each ancestor up to the root.
    pub fn ancestry(&self, id: Uuid) -> Vec<&Category> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            if !seen.insert(node.id) {
                tracing::warn!(id = %node.id, "cycle detected in category ancestry");
                break;
            }
            chain.push(node);
            cursor = node.parent_id.and_then(|parent| self.get(parent));
        }
        chain
    }

    /// Secondary parent of a Tertiary category, used to auto-fill selections.
    pub fn secondary_ancestor_of(&self, tertiary_id: Uuid) -> Option<Uuid> {
        let node = self.get(tertiary_id)?;
        if node.level != CategoryLevel::Tertiary {
            return None;
        }
        let parent = self.get(node.parent_id?)?;
        (parent.level == CategoryLevel::Secondary && parent.kind == node.kind).then_some(parent.id)
    }

    /// Secondary category a movement's category rolls into, if any.
    pub fn resolve_secondary(&self, id: Uuid) -> Option<Uuid> {
        let node = self.get(id)?;
        match node.level {
            CategoryLevel::Secondary => Some(node.id),
            CategoryLevel::Tertiary => self.secondary_ancestor_of(id),
            CategoryLevel::Primary => None,
        }
    }

    /// All categories of one kind and level, ordered by code.
    pub fn children_of_kind(&self, kind: TransactionKind, level: CategoryLevel) -> Vec<&Category> {
        let mut matches: Vec<&Category> = self
            .nodes
            .iter()
            .filter(|node| node.kind == kind && node.level == level)
            .collect();
        sort_by_code(&mut matches);
        matches
    }

    pub fn children_of(&self, parent_id: Uuid) -> Vec<&Category> {
        let mut matches: Vec<&Category> = self
            .nodes
            .iter()
            .filter(|node| node.parent_id == Some(parent_id))
            .collect();
        sort_by_code(&mut matches);
        matches
    }
}

fn sort_by_code(categories: &mut [&Category]) {
    categories.sort_by(|a, b| a.code.cmp(&b.code).then_with(|| a.name.cmp(&b.name)));
}
