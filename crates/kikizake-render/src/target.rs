use std::collections::HashMap;

/// Named render slots, one per chart shown on a page.
///
/// The registry implements the caller-side contract around a drawing: attaching
/// replaces the slot's previous content wholesale (never merges), and attaching
/// to a target that does not exist is a silent no-op — no log, no error. Callers
/// are expected to check existence before doing render work.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    slots: HashMap<String, Option<String>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty slot. Re-registering an existing id clears it.
    pub fn register(&mut self, id: impl Into<String>) {
        self.slots.insert(id.into(), None);
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Replaces the slot's content. Returns `false`, silently, when the target
    /// does not exist.
    pub fn attach(&mut self, id: &str, markup: impl Into<String>) -> bool {
        match self.slots.get_mut(id) {
            Some(slot) => {
                *slot = Some(markup.into());
                true
            }
            None => false,
        }
    }

    /// Currently attached markup, if any.
    pub fn current(&self, id: &str) -> Option<&str> {
        self.slots.get(id)?.as_deref()
    }

    /// Empties a slot without unregistering it. Returns `false` for unknown ids.
    pub fn clear(&mut self, id: &str) -> bool {
        match self.slots.get_mut(id) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }
}
