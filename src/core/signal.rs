//! Typisierte Publish/Subscribe-Signale für Zustandsänderungen.
//!
//! Single-threaded: Callbacks laufen synchron im Event-Thread. Abonnenten
//! registrieren sich über `connect` und müssen sich über `disconnect`
//! explizit wieder abmelden (z.B. beim Schließen eines Volumens).

use std::cell::{Cell, RefCell};
use std::fmt;

/// Handle einer Signal-Verbindung, wird zum Abmelden benötigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Slot<T> = (SubscriptionId, Box<dyn FnMut(&T)>);

/// Benachrichtigungskanal mit typisiertem Payload.
pub struct Signal<T> {
    slots: RefCell<Vec<Slot<T>>>,
    next_id: Cell<u64>,
    emitting: Cell<bool>,
    /// Abmeldungen während eines laufenden `emit`
    pending_disconnects: RefCell<Vec<SubscriptionId>>,
    pending_clear: Cell<bool>,
}

impl<T> Signal<T> {
    /// Erstellt ein Signal ohne Abonnenten.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            emitting: Cell::new(false),
            pending_disconnects: RefCell::new(Vec::new()),
            pending_clear: Cell::new(false),
        }
    }

    /// Registriert einen Callback und gibt dessen Handle zurück.
    pub fn connect(&self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.slots.borrow_mut().push((id, Box::new(callback)));
        id
    }

    /// Meldet einen Callback ab. Gibt `true` zurück, wenn er registriert war.
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut slots = self.slots.borrow_mut();
        let before = slots.len();
        slots.retain(|(slot_id, _)| *slot_id != id);
        if slots.len() != before {
            return true;
        }
        if self.emitting.get() {
            // Slot steckt gerade im laufenden emit
            self.pending_disconnects.borrow_mut().push(id);
            return true;
        }
        false
    }

    /// Meldet alle Callbacks ab.
    pub fn disconnect_all(&self) {
        self.slots.borrow_mut().clear();
        if self.emitting.get() {
            self.pending_clear.set(true);
        }
    }

    /// Anzahl registrierter Callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Ruft alle registrierten Callbacks mit `value` auf.
    ///
    /// Callbacks dürfen während des Aufrufs neue Verbindungen anlegen oder
    /// bestehende abmelden; beides wirkt ab dem nächsten `emit`.
    pub fn emit(&self, value: &T) {
        if self.emitting.get() {
            log::warn!("Rekursives Signal-emit ignoriert");
            return;
        }

        let mut active = std::mem::take(&mut *self.slots.borrow_mut());
        self.emitting.set(true);
        for (_, callback) in active.iter_mut() {
            callback(value);
        }
        self.emitting.set(false);

        let pending = std::mem::take(&mut *self.pending_disconnects.borrow_mut());
        if self.pending_clear.replace(false) {
            active.clear();
        } else if !pending.is_empty() {
            active.retain(|(id, _)| !pending.contains(id));
        }

        let mut slots = self.slots.borrow_mut();
        // Während emit neu verbundene Slots hinten anhängen
        active.append(&mut slots);
        *slots = active;
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
