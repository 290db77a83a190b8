//! TomoSlice Library.
//! Tomogramm-Schnittebenen-Logik als Library exportiert für Host-Viewer und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, LoggedCommand, PointerEvent, PointerEventKind,
    ViewState, ViewerCursor,
};
pub use core::{
    BoundingBox, Camera3D, ClippingPlane, PlaneAxis, PlaneParameters, Signal, SubscriptionId,
    Volume, VolumeLayer, VolumeLoadError,
};
pub use shared::{RenderingMode, TomoSliceOptions};
