// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session playlist.
//!
//! Items keep the order in which they were first opened. Opening a source
//! that is already listed updates its entry instead of adding a new one.

use super::play_item::PlayItem;
use std::path::Path;

/// Outcome of adding an item to the playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

/// Insertion-ordered list of play items, unique by source path.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    items: Vec<PlayItem>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `item`, or overwrite the parameters of the entry with the same source.
    pub fn upsert(&mut self, item: PlayItem) -> Upsert {
        match self.items.iter_mut().find(|existing| existing.source == item.source) {
            Some(existing) => {
                *existing = item;
                Upsert::Updated
            }
            None => {
                self.items.push(item);
                Upsert::Inserted
            }
        }
    }

    /// Index of the entry for `source`, if listed.
    pub fn position_of(&self, source: &Path) -> Option<usize> {
        self.items.iter().position(|item| item.is_source(source))
    }

    /// Entry before `source`. `None` at the start or when `source` is unlisted.
    pub fn prev_of(&self, source: &Path) -> Option<&PlayItem> {
        let index = self.position_of(source)?;
        index.checked_sub(1).and_then(|prev| self.items.get(prev))
    }

    /// Entry after `source`. `None` at the end or when `source` is unlisted.
    pub fn next_of(&self, source: &Path) -> Option<&PlayItem> {
        let index = self.position_of(source)?;
        self.items.get(index + 1)
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&PlayItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
