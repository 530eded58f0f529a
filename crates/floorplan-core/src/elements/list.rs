//! Structurally shared element collection.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Element, ElementId};

/// Ordered element collection with cheap clones.
///
/// Cloning shares the backing vector; mutation copies only the outer vector
/// and the one element being changed.
#[derive(Debug, Clone, Default)]
pub struct ElementList(Arc<Vec<Arc<Element>>>);

impl ElementList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Elements in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.0.iter().map(|e| e.as_ref())
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.iter().map(|e| e.id).collect()
    }

    pub fn push(&mut self, element: Element) {
        Arc::make_mut(&mut self.0).push(Arc::new(element));
    }

    /// Keep elements matching the predicate. Returns how many were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Element) -> bool) -> usize {
        if self.iter().all(&mut keep) {
            return 0;
        }
        let before = self.len();
        Arc::make_mut(&mut self.0).retain(|e| keep(e));
        before - self.len()
    }

    /// Mutate one element in place. Returns `None` if the id is absent.
    pub fn update<R>(&mut self, id: ElementId, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let index = self.0.iter().position(|e| e.id == id)?;
        let slot = &mut Arc::make_mut(&mut self.0)[index];
        Some(f(Arc::make_mut(slot)))
    }

    /// Mutate every element the predicate selects.
    pub fn update_where(
        &mut self,
        mut select: impl FnMut(&Element) -> bool,
        mut f: impl FnMut(&mut Element),
    ) {
        if !self.iter().any(&mut select) {
            return;
        }
        for slot in Arc::make_mut(&mut self.0).iter_mut() {
            if select(slot) {
                f(Arc::make_mut(slot));
            }
        }
    }

    /// Whether both lists share the same backing storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn to_vec(&self) -> Vec<Element> {
        self.iter().cloned().collect()
    }
}

impl PartialEq for ElementList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl From<Vec<Element>> for ElementList {
    fn from(elements: Vec<Element>) -> Self {
        Self(Arc::new(elements.into_iter().map(Arc::new).collect()))
    }
}

impl FromIterator<Element> for ElementList {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().map(Arc::new).collect()))
    }
}

impl Serialize for ElementList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for ElementList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Element>::deserialize(deserializer).map(Self::from)
    }
}
