//! Core-Domänentypen: Volumen, Schnittebene, Bounding Box, Geometrie, Signale.

pub mod bounding_box;
pub mod camera;
pub mod clipping_plane;
/// Ray/Plane-Geometrie
///
/// Reine Funktionen für Strahl-Box- und Gerade-Ebene-Schnitte,
/// Punkt-in-Box-Tests, Drag-Projektion und Clamping.
pub mod geometry;
pub mod layer;
pub mod mrc;
pub mod signal;
pub mod volume;

pub use bounding_box::BoundingBox;
pub use camera::Camera3D;
pub use clipping_plane::{ClippingPlane, PlaneAxis, PlaneEvents};
pub use layer::{PlaneParameters, VolumeLayer};
pub use signal::{Signal, SubscriptionId};
pub use volume::{Volume, VolumeLoadError};
