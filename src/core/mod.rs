pub mod category_tree;
pub mod guard;
pub mod services;

pub use category_tree::{CategoryTree, HierarchyViolation};
pub use guard::MutabilityGuard;
