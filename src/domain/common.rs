//! Traits shared by ledger entities, plus the id lookups built on them.

use uuid::Uuid;

/// Movements and categories are addressed by a stable identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Name used in labelled balance maps and statement rows.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Chart-of-accounts style label, e.g. `2.1 - Utilities`.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// First entity carrying `id`, in slice order.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

pub fn find_by_id_mut<T: Identifiable>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

pub fn position_of<T: Identifiable>(items: &[T], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
