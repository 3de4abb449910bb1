/// Visual classification of a slide relative to the current index.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Role {
    Active, // The slide being shown
    Prev,   // Immediately before the active slide (cyclic)
    Next,   // Immediately after the active slide (cyclic)
    None,   // Everything else, hidden
}

impl Role {
    /// Classifies `index` against `current` in a carousel of `count` slides.
    ///
    /// Checks run active, prev, next in that order, so with fewer than four
    /// slides the earlier roles win: one slide is always `Active`, and with
    /// two slides the other one is always `Prev`.
    pub fn of(index: usize, current: usize, count: usize) -> Role {
        if count == 0 {
            return Role::None;
        }

        if index == current {
            Role::Active
        } else if index == (current + count - 1) % count {
            Role::Prev
        } else if index == (current + 1) % count {
            Role::Next
        } else {
            Role::None
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_animating: bool,
}
