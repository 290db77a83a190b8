//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geöffnetes Tomogramm,
/// Drag-Geste, View, Tastenbelegung).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera3D;
pub use crate::core::{ClippingPlane, PlaneAxis, VolumeLayer};
pub use crate::shared::RenderingMode;
pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointerEvent, PointerEventKind, ViewerCursor};
pub use state::{AppState, InteractionState, KeyBindings, PlaneDragState, ViewState};
