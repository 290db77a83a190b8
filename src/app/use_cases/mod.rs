//! Use-Cases der Application-Layer-Orchestrierung.

pub mod axis_snap;
pub mod camera;
pub mod file_io;
pub mod plane_drag;
pub mod plane_state;
