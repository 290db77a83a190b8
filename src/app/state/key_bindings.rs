use crate::core::PlaneAxis;
use std::collections::HashMap;

/// Aktion, die an eine Taste gebunden ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Schnittebene auf eine Achse ausrichten
    AlignPlane(PlaneAxis),
}

/// Tastenbelegung des Viewers. Tasten werden ohne Groß-/Kleinschreibung verglichen.
#[derive(Debug, Default)]
pub struct KeyBindings {
    bindings: HashMap<char, KeyAction>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindet eine Taste; eine vorhandene Belegung wird überschrieben.
    pub fn bind(&mut self, key: char, action: KeyAction) -> Option<KeyAction> {
        self.bindings.insert(normalize(key), action)
    }

    /// Entfernt die Belegung einer Taste.
    pub fn unbind(&mut self, key: char) -> Option<KeyAction> {
        self.bindings.remove(&normalize(key))
    }

    pub fn lookup(&self, key: char) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindet x/y/z an die Achsen-Ausrichtung der Schnittebene.
    pub fn bind_axis_keys(&mut self) {
        for axis in PlaneAxis::ALL {
            self.bind(axis.key(), KeyAction::AlignPlane(axis));
        }
    }

    /// Entfernt die Achsen-Tasten wieder.
    pub fn unbind_axis_keys(&mut self) {
        for axis in PlaneAxis::ALL {
            if self.lookup(axis.key()) == Some(KeyAction::AlignPlane(axis)) {
                self.unbind(axis.key());
            }
        }
    }
}

fn normalize(key: char) -> char {
    key.to_ascii_lowercase()
}
