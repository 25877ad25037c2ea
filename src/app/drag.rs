//! Keyboard drag-and-drop for the admin link list.
//!
//! A drag is grabbed on one row and dropped on another. The source is held as
//! a [`LinkId`], so the list can be rebuilt at any time without losing track of
//! what is being moved.

use crate::domain::LinkId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: LinkId,
    },
}

/// What a grab/drop key press turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStep {
    /// Nothing was being dragged; `source` is now held.
    Grabbed(LinkId),
    /// The held link should move to the row the cursor is on.
    Dropped { source: LinkId, target: usize },
}

impl DragState {
    #[must_use]
    pub const fn source(&self) -> Option<LinkId> {
        match self {
            Self::Idle => None,
            Self::Dragging { source } => Some(*source),
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Advances the machine for a grab/drop press on `row`.
    ///
    /// `row_link` is the link currently shown on that row. Pressing on an
    /// empty list does nothing.
    pub fn toggle(&mut self, row: usize, row_link: Option<LinkId>) -> Option<DragStep> {
        match *self {
            Self::Idle => {
                let source = row_link?;
                *self = Self::Dragging { source };
                Some(DragStep::Grabbed(source))
            }
            Self::Dragging { source } => {
                *self = Self::Idle;
                Some(DragStep::Dropped { source, target: row })
            }
        }
    }

    /// Abandons the drag without moving anything.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_then_drop() {
        let id = LinkId::new();
        let mut drag = DragState::default();

        assert_eq!(drag.toggle(1, Some(id)), Some(DragStep::Grabbed(id)));
        assert_eq!(drag.source(), Some(id));

        assert_eq!(
            drag.toggle(3, None),
            Some(DragStep::Dropped { source: id, target: 3 })
        );
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn grabbing_nothing_stays_idle() {
        let mut drag = DragState::default();
        assert_eq!(drag.toggle(0, None), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_reports_whether_a_drag_was_live() {
        let mut drag = DragState::Dragging { source: LinkId::new() };
        assert!(drag.cancel());
        assert!(!drag.cancel());
    }
}
