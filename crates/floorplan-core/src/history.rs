//! Linear undo/redo history over versioned scene snapshots.

use std::collections::VecDeque;

use crate::elements::ElementList;
use crate::store::BackgroundImage;

/// The versioned part of the scene.
///
/// Cloning is O(1): element collections share structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub elements: ElementList,
    pub flooring: ElementList,
    pub background_image: Option<BackgroundImage>,
}

/// Undo and redo stacks.
///
/// `past` runs oldest to newest; `future` runs newest to oldest after undo.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<Snapshot>,
    future: Vec<Snapshot>,
    limit: Option<usize>,
}

impl History {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Record the pre-mutation state and drop any redo states.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        self.future.clear();

        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.pop_front();
            }
        }
        log::debug!("history push (past={})", self.past.len());
    }

    /// Step back. `current` becomes the next redo state.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward. `current` becomes the next undo state.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop()?;
        self.past.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
