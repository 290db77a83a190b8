//! Use-Case-Funktionen für Modus, Schichtdicke und Signal-Weiterleitung der Schnittebene.
//!
//! Jede Änderung erzeugt genau eine Benachrichtigung an das Widget: entweder
//! über die Weiterleitung der Ebenen-Events oder, wenn die Ebene sich nicht
//! ändert, direkt aus dem Use-Case.

use crate::app::state::PlaneSubscriptions;
use crate::app::AppState;
use crate::core::VolumeLayer;
use crate::shared::RenderingMode;
use std::rc::Rc;

/// Layer nur dann, wenn seine Schnittebene aktiv ist.
///
/// Gemeinsame Vorbedingung für Drag-Start, Drag-Update und Achsen-Ausrichtung.
pub fn enabled_plane_layer(layer: Option<&mut VolumeLayer>) -> Option<&mut VolumeLayer> {
    layer.filter(|layer| layer.plane.enabled())
}

/// Setzt den Rendering-Modus und schaltet die Schnittebene entsprechend.
pub fn set_rendering_mode(state: &mut AppState, mode: RenderingMode) {
    state.rendering_mode.set(mode);

    let changed = state
        .layer
        .as_mut()
        .is_some_and(|layer| layer.plane.set_enabled(mode.renders_plane()));

    if !mode.renders_plane() && state.interaction.is_dragging() {
        super::plane_drag::end_plane_drag(state);
    }

    if !(changed && state.plane_subscriptions.is_some()) {
        state.signals.rendering_mode_changed.emit(&mode);
    }
    log::debug!("Rendering-Modus: {mode}");
}

/// Setzt die Schichtdicke der Schnittebene.
///
/// Nicht-positive oder nicht-endliche Werte sind ein Fehler. Ohne geöffnetes
/// Tomogramm wird der Wert mit einer Warnung verworfen.
pub fn set_plane_thickness(state: &mut AppState, thickness: f32) -> anyhow::Result<()> {
    if !(thickness.is_finite() && thickness > 0.0) {
        anyhow::bail!("Ungültige Schichtdicke: {thickness} (muss positiv sein)");
    }

    let Some(layer) = state.layer.as_mut() else {
        log::warn!("Schichtdicke {thickness} ignoriert: kein Tomogramm geöffnet");
        return Ok(());
    };

    let changed = layer.plane.set_thickness(thickness);
    if !(changed && state.plane_subscriptions.is_some()) {
        state.signals.plane_thickness_changed.emit(&thickness);
    }
    Ok(())
}

/// Setzt die Sichtbarkeit des Volumen-Layers.
///
/// Ein unsichtbarer Layer nimmt keine Drag-Gesten an; eine laufende Geste wird beendet.
pub fn set_layer_visibility(state: &mut AppState, visible: bool) {
    let Some(layer) = state.layer.as_mut() else {
        return;
    };
    layer.visible = visible;

    if !visible && state.interaction.is_dragging() {
        super::plane_drag::end_plane_drag(state);
    }
}

/// Leitet `plane.enabled` und `plane.thickness` an die Widget-Signale weiter.
pub fn connect_plane_signals(state: &mut AppState) {
    disconnect_plane_signals(state);
    let Some(layer) = state.layer.as_ref() else {
        return;
    };

    let mode_signal = Rc::clone(&state.signals.rendering_mode_changed);
    let current_mode = Rc::clone(&state.rendering_mode);
    let enabled = layer.plane.events.enabled.connect(move |enabled| {
        let mode = RenderingMode::from_plane_enabled(*enabled);
        current_mode.set(mode);
        mode_signal.emit(&mode);
    });

    let thickness_signal = Rc::clone(&state.signals.plane_thickness_changed);
    let thickness = layer
        .plane
        .events
        .thickness
        .connect(move |thickness| thickness_signal.emit(thickness));

    state.plane_subscriptions = Some(PlaneSubscriptions { enabled, thickness });
}

/// Löst die Weiterleitungen der Ebenen-Events.
pub fn disconnect_plane_signals(state: &mut AppState) {
    let Some(subscriptions) = state.plane_subscriptions.take() else {
        return;
    };
    let Some(layer) = state.layer.as_ref() else {
        return;
    };

    let events = &layer.plane.events;
    if !events.enabled.disconnect(subscriptions.enabled)
        || !events.thickness.disconnect(subscriptions.thickness)
    {
        log::warn!("Ebenen-Weiterleitung war bereits gelöst");
    }
}
