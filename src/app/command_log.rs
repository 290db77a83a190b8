//! Command-Log der ausgeführten App-Commands (Diagnose und Tests).

use super::AppCommand;

/// Eintrag im Command-Log.
///
/// Volumen werden nur mit Name und Form festgehalten; das Log hält keine
/// Voxel-Daten am Leben.
#[derive(Debug, Clone)]
pub enum LoggedCommand {
    /// `AppCommand::AddVolumeLayer` ohne Volumen-Daten
    VolumeLayerAdded { name: String, shape: [usize; 3] },
    /// Alle übrigen Commands unverändert
    Command(AppCommand),
}

impl LoggedCommand {
    fn from_command(command: &AppCommand) -> Self {
        match command {
            AppCommand::AddVolumeLayer { name, volume } => Self::VolumeLayerAdded {
                name: name.clone(),
                shape: volume.shape(),
            },
            other => Self::Command(other.clone()),
        }
    }

    /// Der geloggte Command, falls er ohne Volumen-Daten vorliegt.
    pub fn command(&self) -> Option<&AppCommand> {
        match self {
            Self::Command(command) => Some(command),
            Self::VolumeLayerAdded { .. } => None,
        }
    }
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand::from_command(command));
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }
}
