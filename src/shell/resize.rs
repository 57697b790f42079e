//! Drag-resize of the sidebar and terminal panel
//!
//! A drag exists only between press and release. The shell keeps at most
//! one [`Drag`] and drops it on the first release event, wherever the
//! pointer happens to be, so no pointer tracking survives the gesture.

/// Inclusive size limits, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Bounds { min, max }
    }

    pub fn clamp(&self, value: i64) -> u32 {
        value.clamp(self.min as i64, self.max as i64) as u32
    }
}

/// What a drag is resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Grows as the pointer moves right
    SidebarWidth,
    /// Grows as the pointer moves up
    TerminalHeight,
}

/// An in-progress resize gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    target: DragTarget,
    start_pointer: i32,
    start_size: u32,
    bounds: Bounds,
}

impl Drag {
    pub fn begin(target: DragTarget, pointer: i32, size: u32, bounds: Bounds) -> Self {
        Drag {
            target,
            start_pointer: pointer,
            start_size: size,
            bounds,
        }
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    /// Size implied by the pointer's current position on the drag axis
    pub fn size_at(&self, pointer: i32) -> u32 {
        let delta = match self.target {
            DragTarget::SidebarWidth => pointer as i64 - self.start_pointer as i64,
            DragTarget::TerminalHeight => self.start_pointer as i64 - pointer as i64,
        };
        self.bounds.clamp(self.start_size as i64 + delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds::new(200, 600);

    #[test]
    fn test_sidebar_follows_pointer_right() {
        let drag = Drag::begin(DragTarget::SidebarWidth, 280, 280, BOUNDS);
        assert_eq!(drag.size_at(380), 380);
        assert_eq!(drag.size_at(230), 230);
        assert_eq!(drag.size_at(0), 200);
        assert_eq!(drag.size_at(5000), 600);
    }

    #[test]
    fn test_terminal_grows_upwards() {
        let drag = Drag::begin(DragTarget::TerminalHeight, 500, 256, BOUNDS);
        assert_eq!(drag.size_at(400), 356);
        assert_eq!(drag.size_at(540), 216);
        assert_eq!(drag.size_at(900), 200);
        assert_eq!(drag.size_at(-1000), 600);
    }
}
