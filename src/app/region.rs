//! Pointer interaction regions.
//!
//! Rendering records where each field's input and open suggestion list ended
//! up on screen. Input mapping then asks which field (if any) a press landed
//! in, and which fields it landed outside of.

use crate::domain::models::FieldId;
use ratatui::layout::{Position, Rect};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ListRegion {
    area: Rect,
    // Index of the candidate drawn on the first row
    offset: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionMap {
    inputs: BTreeMap<FieldId, Rect>,
    lists: BTreeMap<FieldId, ListRegion>,
}

impl RegionMap {
    pub fn clear(&mut self) {
        self.inputs.clear();
        self.lists.clear();
    }

    pub fn set_input(&mut self, field: FieldId, area: Rect) {
        self.inputs.insert(field, area);
    }

    pub fn set_list(&mut self, field: FieldId, area: Rect, offset: usize) {
        self.lists.insert(field, ListRegion { area, offset });
    }

    /// True when the point is on the field's input or on its list.
    #[must_use]
    pub fn contains(&self, field: FieldId, x: u16, y: u16) -> bool {
        let pos = Position::new(x, y);
        self.inputs.get(&field).is_some_and(|r| r.contains(pos))
            || self.lists.get(&field).is_some_and(|l| l.area.contains(pos))
    }

    /// Every known field whose region does not contain the point.
    #[must_use]
    pub fn outside(&self, x: u16, y: u16) -> Vec<FieldId> {
        self.inputs
            .keys()
            .copied()
            .filter(|field| !self.contains(*field, x, y))
            .collect()
    }

    #[must_use]
    pub fn input_at(&self, x: u16, y: u16) -> Option<FieldId> {
        let pos = Position::new(x, y);
        self.inputs
            .iter()
            .find(|(_, r)| r.contains(pos))
            .map(|(field, _)| *field)
    }

    /// Field whose drawn list (border included) covers the point.
    #[must_use]
    pub fn list_at(&self, x: u16, y: u16) -> Option<FieldId> {
        let pos = Position::new(x, y);
        self.lists
            .iter()
            .find(|(_, list)| list.area.contains(pos))
            .map(|(field, _)| *field)
    }

    /// Candidate index under the point. Lists are drawn with a border, so the
    /// first candidate sits one row below the top edge.
    #[must_use]
    pub fn list_row_at(&self, x: u16, y: u16) -> Option<(FieldId, usize)> {
        let pos = Position::new(x, y);
        self.lists.iter().find_map(|(field, list)| {
            let inner = Rect {
                x: list.area.x.saturating_add(1),
                y: list.area.y.saturating_add(1),
                width: list.area.width.saturating_sub(2),
                height: list.area.height.saturating_sub(2),
            };
            if inner.contains(pos) {
                Some((*field, list.offset + (y - inner.y) as usize))
            } else {
                None
            }
        })
    }
}
