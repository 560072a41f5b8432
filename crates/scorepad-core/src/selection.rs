//! Selection state for a drawable collection.
//!
//! A selection refers to drawables by their position in the owning list.
//! Positions go stale when the list changes shape, so every structural
//! mutation goes through a method here that rewrites or drops them.

/// Either nothing, one item picked by a click, or a set gathered by marquee.
///
/// The two populated forms exclude each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Picked by a direct hit.
    Single(usize),
    /// Gathered by a marquee, in list order. Never empty.
    Multi(Vec<usize>),
}

impl Selection {
    /// Build a multi-selection; an empty set collapses to `None`.
    pub fn multi(indices: Vec<usize>) -> Self {
        if indices.is_empty() {
            Selection::None
        } else {
            Selection::Multi(indices)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    /// The single selected index, if the selection came from a click.
    pub fn single(&self) -> Option<usize> {
        match self {
            Selection::Single(index) => Some(*index),
            _ => None,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Selection::Multi(_))
    }

    /// Selected indices in list order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Selection::None => Vec::new(),
            Selection::Single(index) => vec![*index],
            Selection::Multi(indices) => indices.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::None => 0,
            Selection::Single(_) => 1,
            Selection::Multi(indices) => indices.len(),
        }
    }

    /// Follow a swap of two list positions.
    pub fn swap(&mut self, a: usize, b: usize) {
        let remap = |index: &mut usize| {
            if *index == a {
                *index = b;
            } else if *index == b {
                *index = a;
            }
        };
        match self {
            Selection::None => {}
            Selection::Single(index) => remap(index),
            Selection::Multi(indices) => {
                indices.iter_mut().for_each(remap);
                indices.sort_unstable();
            }
        }
    }

    /// Follow the removal of `removed` (ascending list positions).
    ///
    /// Removed items leave the selection; survivors shift down past every
    /// removed position before them.
    pub fn remove(&mut self, removed: &[usize]) {
        let shift = |index: usize| index - removed.iter().filter(|&&r| r < index).count();
        *self = match std::mem::take(self) {
            Selection::None => Selection::None,
            Selection::Single(index) if removed.contains(&index) => Selection::None,
            Selection::Single(index) => Selection::Single(shift(index)),
            Selection::Multi(indices) => Selection::multi(
                indices
                    .into_iter()
                    .filter(|index| !removed.contains(index))
                    .map(shift)
                    .collect(),
            ),
        };
    }
}
