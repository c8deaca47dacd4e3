use std::collections::BTreeMap;

use vitrine_logging::vitrine_debug;

use super::ui;

/// One addressable page element: its text, style flags and transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    pub emphasized: bool,
    pub visible: bool,
    pub transform: String,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            text: String::new(),
            emphasized: false,
            visible: true,
            transform: String::new(),
        }
    }
}

/// A mutation the renderer wants applied to one page slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetText { slot: &'static str, text: String },
    SetEmphasis { slot: &'static str, on: bool },
    SetVisible { slot: &'static str, visible: bool },
    SetTransform { slot: &'static str, transform: String },
}

impl DomCommand {
    fn slot(&self) -> &'static str {
        match self {
            DomCommand::SetText { slot, .. }
            | DomCommand::SetEmphasis { slot, .. }
            | DomCommand::SetVisible { slot, .. }
            | DomCommand::SetTransform { slot, .. } => slot,
        }
    }
}

/// In-memory stand-in for the rendered page.
///
/// Commands addressing a slot the page does not carry are skipped, so the
/// same renderer serves pages with and without the optional widgets.
#[derive(Debug, Default)]
pub struct PageDom {
    slots: BTreeMap<&'static str, Element>,
}

impl PageDom {
    /// A page carrying every slot the renderer knows about.
    pub fn standard_page() -> Self {
        let mut dom = Self::default();
        for slot in ui::constants::ALL_SLOTS {
            dom.slots.insert(*slot, Element::default());
        }
        dom
    }

    #[cfg(test)]
    pub fn with_slots(slots: &[&'static str]) -> Self {
        let mut dom = Self::default();
        for slot in slots {
            dom.slots.insert(*slot, Element::default());
        }
        dom
    }

    pub fn get(&self, slot: &str) -> Option<&Element> {
        self.slots.get(slot)
    }

    pub fn apply(&mut self, commands: Vec<DomCommand>) {
        for command in commands {
            let Some(element) = self.slots.get_mut(command.slot()) else {
                vitrine_debug!("slot absent, skipped: {}", command.slot());
                continue;
            };
            match command {
                DomCommand::SetText { text, .. } => element.text = text,
                DomCommand::SetEmphasis { on, .. } => element.emphasized = on,
                DomCommand::SetVisible { visible, .. } => element.visible = visible,
                DomCommand::SetTransform { transform, .. } => element.transform = transform,
            }
        }
    }
}
