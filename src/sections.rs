//! Collapsible FAQ items and instruction sections.

use tracing::debug;

use crate::anchor::anchor_target;
use crate::input::Key;

/// Header and body of a collapsible block share one open flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone)]
pub struct FaqItem {
    pub key: String,
    disclosure: Disclosure,
}

#[derive(Debug, Default)]
pub struct FaqPage {
    items: Vec<FaqItem>,
}

impl FaqPage {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = keys
            .into_iter()
            .map(|key| FaqItem { key: key.into(), disclosure: Disclosure::default() })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.disclosure.is_open())
    }

    /// Returns the new open state; unknown indices stay closed.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => item.disclosure.toggle(),
            None => false,
        }
    }

    pub fn expand_all(&mut self) {
        self.items.iter_mut().for_each(|item| item.disclosure.open());
    }

    pub fn collapse_all(&mut self) {
        self.items.iter_mut().for_each(|item| item.disclosure.close());
    }

    /// Opens the item with this key and returns it for scrolling.
    pub fn open_item(&mut self, key: &str) -> Option<usize> {
        let index = self.items.iter().position(|item| item.key == key)?;
        self.items[index].disclosure.open();
        debug!(key, index, "faq item opened");
        Some(index)
    }

    /// Same as `open_item`, for a raw `#key` hash.
    pub fn open_deep_link(&mut self, hash: &str) -> Option<usize> {
        self.open_item(anchor_target(hash)?)
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.collapse_all();
        }
    }
}

/// Result of following an anchor on the instructions page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorJump {
    pub scroll_to: String,
    pub opened: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    disclosure: Disclosure,
    subsections: Vec<Disclosure>,
}

#[derive(Debug, Default)]
pub struct InstructionsPage {
    sections: Vec<Section>,
}

impl InstructionsPage {
    /// Each entry is a section id and the number of subsections it holds.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let sections = sections
            .into_iter()
            .map(|(id, subsections)| Section {
                id: id.into(),
                disclosure: Disclosure::default(),
                subsections: vec![Disclosure::default(); subsections],
            })
            .collect();
        Self { sections }
    }

    pub fn is_section_open(&self, section: usize) -> bool {
        self.sections.get(section).is_some_and(|s| s.disclosure.is_open())
    }

    pub fn is_subsection_open(&self, section: usize, subsection: usize) -> bool {
        self.sections
            .get(section)
            .and_then(|s| s.subsections.get(subsection))
            .is_some_and(Disclosure::is_open)
    }

    /// Closing a section also closes everything nested in it.
    pub fn toggle_section(&mut self, section: usize) -> bool {
        let Some(section) = self.sections.get_mut(section) else {
            return false;
        };

        let open = section.disclosure.toggle();
        if !open {
            section.subsections.iter_mut().for_each(Disclosure::close);
        }
        open
    }

    pub fn toggle_subsection(&mut self, section: usize, subsection: usize) -> bool {
        match self.sections.get_mut(section).and_then(|s| s.subsections.get_mut(subsection)) {
            Some(disclosure) => disclosure.toggle(),
            None => false,
        }
    }

    /// Opens the section with this id, as dropdown links and deep links do.
    pub fn open_section(&mut self, id: &str) -> Option<usize> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        self.sections[index].disclosure.open();
        debug!(id, index, "instruction section opened");
        Some(index)
    }

    /// Any anchor is scrolled to; only top-level sections are opened.
    pub fn open_anchor(&mut self, id: &str) -> AnchorJump {
        AnchorJump {
            scroll_to: id.to_owned(),
            opened: self.open_section(id),
        }
    }

    pub fn open_deep_link(&mut self, hash: &str) -> Option<AnchorJump> {
        Some(self.open_anchor(anchor_target(hash)?))
    }

    /// Opens top-level sections only.
    pub fn expand_all(&mut self) {
        self.sections.iter_mut().for_each(|s| s.disclosure.open());
    }

    pub fn collapse_all(&mut self) {
        for section in &mut self.sections {
            section.disclosure.close();
            section.subsections.iter_mut().for_each(Disclosure::close);
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.collapse_all();
        }
    }
}
