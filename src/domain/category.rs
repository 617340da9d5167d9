//! Domain types representing the chart-of-accounts categories.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{common::*, transaction::TransactionKind};

/// Node of the three-tier classification hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    /// Hierarchical display code such as `1.2.3`.
    pub code: String,
    pub name: String,
    pub level: CategoryLevel,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

impl Category {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        level: CategoryLevel,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            level,
            kind,
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Primary nodes only group; movements may reference Secondary or Tertiary ones.
    pub fn is_assignable_to(&self, kind: TransactionKind) -> bool {
        self.kind == kind && self.level != CategoryLevel::Primary
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryLevel {
    Primary,
    Secondary,
    Tertiary,
}

impl CategoryLevel {
    /// Level a parent must have for a node of this level.
    pub fn expected_parent(self) -> Option<CategoryLevel> {
        match self {
            CategoryLevel::Primary => None,
            CategoryLevel::Secondary => Some(CategoryLevel::Primary),
            CategoryLevel::Tertiary => Some(CategoryLevel::Secondary),
        }
    }
}

impl fmt::Display for CategoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryLevel::Primary => "Primary",
            CategoryLevel::Secondary => "Secondary",
            CategoryLevel::Tertiary => "Tertiary",
        };
        f.write_str(label)
    }
}
