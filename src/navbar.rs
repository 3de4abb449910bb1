//! Navigation bar: scroll-reactive styling, mobile menu and active link.

use tracing::debug;

use crate::anchor::anchor_target;
use crate::constants::*;
use crate::timer::{Debounce, Throttle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Plain,
    DropdownParent { dropdown: usize },
    DropdownChild,
}

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: String,
    pub kind: LinkKind,
}

impl NavLink {
    pub fn new(href: impl Into<String>, kind: LinkKind) -> Self {
        Self { href: href.into(), kind }
    }
}

/// What the page should do after a link was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    DropdownToggled { dropdown: usize, open: bool },
    ScrollTo(String),
    Follow,
}

/// Vertical extent of a page section carrying an id.
#[derive(Debug, Clone)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug)]
pub struct Navbar {
    links: Vec<NavLink>,
    dropdowns: Vec<bool>,
    scrolled: bool,
    menu_open: bool,
    active_link: Option<usize>,
    last_scroll_top: f32,
    scroll_throttle: Throttle,
    highlight_throttle: Throttle,
    resize_debounce: Debounce,
}

impl Navbar {
    pub fn new(links: Vec<NavLink>) -> Self {
        let dropdown_count = links
            .iter()
            .filter_map(|link| match link.kind {
                LinkKind::DropdownParent { dropdown } => Some(dropdown + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        Self {
            links,
            dropdowns: vec![false; dropdown_count],
            scrolled: false,
            menu_open: false,
            active_link: None,
            last_scroll_top: 0.0,
            scroll_throttle: Throttle::new(SCROLL_THROTTLE),
            highlight_throttle: Throttle::new(HIGHLIGHT_THROTTLE),
            resize_debounce: Debounce::new(RESIZE_DEBOUNCE),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_dropdown_open(&self, dropdown: usize) -> bool {
        self.dropdowns.get(dropdown).copied().unwrap_or(false)
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.active_link.and_then(|index| self.links.get(index))
    }

    /// Updates the scrolled style immediately.
    pub fn apply_scroll(&mut self, scroll_top: f32) {
        self.last_scroll_top = scroll_top.max(0.0);
        self.scrolled = self.last_scroll_top > NAVBAR_SCROLL_THRESHOLD;
    }

    /// Raw scroll event; the style and highlight updates are throttled.
    pub fn on_scroll(&mut self, scroll_top: f32) {
        self.last_scroll_top = scroll_top.max(0.0);
        self.scroll_throttle.request();
        self.highlight_throttle.request();
    }

    pub fn on_resize(&mut self) {
        self.resize_debounce.request();
    }

    /// Runs whichever throttled or debounced updates are due.
    pub fn advance(&mut self, dt: f32, sections: &[SectionBounds]) {
        if self.scroll_throttle.advance(dt) {
            self.apply_scroll(self.last_scroll_top);
        }

        let highlight_due = self.highlight_throttle.advance(dt);
        let resize_due = self.resize_debounce.advance(dt);
        if highlight_due || resize_due {
            self.highlight(self.last_scroll_top, sections);
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Link click. On narrow viewports dropdown parents only toggle their
    /// dropdown; every other link closes the mobile menu.
    pub fn activate(&mut self, link: usize, viewport_width: f32) -> LinkOutcome {
        let Some(NavLink { href, kind }) = self.links.get(link).cloned() else {
            return LinkOutcome::Follow;
        };

        match kind {
            LinkKind::DropdownParent { dropdown } if viewport_width <= MOBILE_BREAKPOINT => {
                let open = match self.dropdowns.get_mut(dropdown) {
                    Some(state) => {
                        *state = !*state;
                        *state
                    }
                    None => false,
                };
                debug!(dropdown, open, "mobile dropdown toggled");
                LinkOutcome::DropdownToggled { dropdown, open }
            }
            LinkKind::DropdownParent { .. } => Self::outcome_for(&href),
            LinkKind::Plain | LinkKind::DropdownChild => {
                self.close_menu();
                Self::outcome_for(&href)
            }
        }
    }

    fn outcome_for(href: &str) -> LinkOutcome {
        match anchor_target(href) {
            Some(id) => LinkOutcome::ScrollTo(id.to_owned()),
            None => LinkOutcome::Follow,
        }
    }

    /// Marks the link pointing at the section under the highlight line.
    /// When no section contains that line the previous highlight stays.
    pub fn highlight(&mut self, scroll_y: f32, sections: &[SectionBounds]) {
        let line = scroll_y + NAV_HIGHLIGHT_OFFSET;
        let Some(section) = sections.iter().rev().find(|s| s.contains(line)) else {
            return;
        };

        self.active_link = self
            .links
            .iter()
            .position(|link| anchor_target(&link.href) == Some(section.id.as_str()));
    }
}
