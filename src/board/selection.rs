//! Single-square selection state machine.

use super::SquareIdx;

/// Outcome of a click on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Clicked square was empty; nothing changed
    Ignored,
    /// Nothing was selected; this square now is
    Selected(SquareIdx),
    /// The selected square was clicked again and is no longer selected
    Cleared(SquareIdx),
    /// Selection moved to another occupied square
    Moved { from: SquareIdx, to: SquareIdx },
}

/// At most one selected square. Starts empty and has no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<SquareIdx>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Selection { selected: None }
    }

    #[inline]
    #[must_use]
    pub const fn selected(&self) -> Option<SquareIdx> {
        self.selected
    }

    #[inline]
    #[must_use]
    pub fn is_selected(&self, idx: SquareIdx) -> bool {
        self.selected == Some(idx)
    }

    /// Apply a click on `idx`. Empty squares never change the selection.
    pub fn click(&mut self, idx: SquareIdx, occupied: bool) -> Transition {
        let transition = if !occupied {
            Transition::Ignored
        } else {
            match self.selected {
                Some(current) if current == idx => {
                    self.selected = None;
                    Transition::Cleared(idx)
                }
                Some(from) => {
                    self.selected = Some(idx);
                    Transition::Moved { from, to: idx }
                }
                None => {
                    self.selected = Some(idx);
                    Transition::Selected(idx)
                }
            }
        };

        #[cfg(feature = "logging")]
        log::debug!("click on square {idx}: {transition:?}");

        transition
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
