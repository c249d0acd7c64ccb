// Word of the Day - core/paging.rs
//
// Fixed-size pagination over a filtered view, and the set of rows the user
// has ticked for deletion.

use crate::core::query::FilteredView;
use std::collections::BTreeSet;

/// One page of a filtered view. Borrows the view's positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// 1-based page number after clamping.
    pub number: usize,

    /// Total pages in the view (at least 1).
    pub total: usize,

    /// Table positions shown on this page.
    pub positions: &'a [usize],
}

impl Page<'_> {
    pub fn is_first(&self) -> bool {
        self.number <= 1
    }

    pub fn is_last(&self) -> bool {
        self.number >= self.total
    }
}

/// Number of pages needed for `len` rows. Always at least 1 so paging
/// controls stay renderable for an empty view.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Slice page `page_number` (1-based) out of `view`.
///
/// Out-of-range page numbers are clamped to `[1, total_pages]`; a page
/// size of 0 is treated as 1.
pub fn paginate(view: &FilteredView, page_number: usize, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let total = total_pages(view.len(), page_size);
    let number = page_number.clamp(1, total);

    let start = ((number - 1) * page_size).min(view.len());
    let end = (start + page_size).min(view.len());

    Page {
        number,
        total,
        positions: &view.positions()[start..end],
    }
}

/// Table positions ticked for deletion.
///
/// Positions refer to the table the selection was made against; the owner
/// must clear it whenever that table is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    positions: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark or unmark a single position.
    pub fn set(&mut self, position: usize, selected: bool) {
        if selected {
            self.positions.insert(position);
        } else {
            self.positions.remove(&position);
        }
    }

    /// Flip one position and return its new state.
    pub fn toggle(&mut self, position: usize) -> bool {
        let selected = !self.is_selected(position);
        self.set(position, selected);
        selected
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Selected positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
