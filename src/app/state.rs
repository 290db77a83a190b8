//! Application State: geladenes Tomogramm, Interaktion, View, Tastenbelegung, Signale.

mod app_state;
mod interaction;
mod key_bindings;
mod signals;
mod view;

pub use app_state::{AppState, PlaneSubscriptions};
pub use interaction::{DragGesture, InteractionState, PlaneDragState};
pub use key_bindings::{KeyAction, KeyBindings};
pub use signals::TomoSliceSignals;
pub use view::ViewState;
