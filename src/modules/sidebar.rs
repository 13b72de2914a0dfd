// Sidebar visibility - pure logic.

/// Viewports at or below this width (px) are treated as narrow.
pub const NARROW_VIEWPORT_MAX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarVisibility {
    open: bool,
    breakpoint: u32,
}

impl Default for SidebarVisibility {
    fn default() -> Self {
        Self::new(NARROW_VIEWPORT_MAX)
    }
}

impl SidebarVisibility {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_narrow(&self, viewport_width: u32) -> bool {
        viewport_width <= self.breakpoint
    }

    /// Flips the state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the sidebar was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A page was activated. Closes the sidebar on narrow viewports.
    pub fn on_page_activated(&mut self, viewport_width: u32) -> bool {
        self.is_narrow(viewport_width) && self.close()
    }

    /// The viewport was resized. Leaving the narrow range closes the sidebar.
    pub fn on_resize(&mut self, viewport_width: u32) -> bool {
        !self.is_narrow(viewport_width) && self.close()
    }
}
