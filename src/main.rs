//! TomoSlice.
//!
//! Öffnet ein Tomogramm (MRC) und richtet die Schnittebene ein, wie es ein
//! Host-Viewer beim Start tun würde. Gibt Volumen- und Ebenen-Zustand im Log aus.

use tomoslice::{AppController, AppIntent, AppState, RenderingMode, TomoSliceOptions};

const USAGE: &str =
    "Aufruf: tomoslice [DATEI.mrc] [--mode volume|plane] [--thickness N] [--save-config]";

fn main() -> anyhow::Result<()> {
    AppRunner::run().inspect_err(|e| log::error!("{e:#}"))
}

/// Kommandozeilen-Argumente
#[derive(Debug, Default)]
struct CliArgs {
    path: Option<String>,
    mode: Option<RenderingMode>,
    thickness: Option<f32>,
    /// Modus und Dicke als neue Standardwerte speichern
    save_config: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--mode ohne Wert. {USAGE}"))?;
                    parsed.mode = Some(value.parse()?);
                }
                "--thickness" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--thickness ohne Wert. {USAGE}"))?;
                    parsed.thickness = Some(value.parse()?);
                }
                "--save-config" => parsed.save_config = true,
                flag if flag.starts_with("--") => {
                    anyhow::bail!("Unbekannte Option: {flag}. {USAGE}")
                }
                _ if parsed.path.is_none() => parsed.path = Some(arg),
                _ => anyhow::bail!("Mehr als eine Datei angegeben. {USAGE}"),
            }
        }
        Ok(parsed)
    }
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("TomoSlice v{} startet...", env!("CARGO_PKG_VERSION"));

        let args = CliArgs::parse(std::env::args().skip(1))?;

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = TomoSliceOptions::config_path();
        let options = TomoSliceOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        if let Some(mode) = args.mode {
            controller.handle_intent(&mut state, AppIntent::RenderingModeChangeRequested { mode })?;
        }

        match args.path {
            Some(path) => {
                controller.handle_intent(&mut state, AppIntent::OpenTomogramRequested { path })?;
                if let Some(thickness) = args.thickness {
                    controller.handle_intent(
                        &mut state,
                        AppIntent::PlaneThicknessChangeRequested { thickness },
                    )?;
                }
                Self::log_summary(&state);
            }
            None => log::info!("Kein Tomogramm angegeben. {USAGE}"),
        }

        if args.save_config {
            Self::options_to_save(&state, args.thickness)?.save_to_file(&config_path)?;
        }
        Ok(())
    }

    /// Aktuelle Optionen mit Modus und Dicke aus der Kommandozeile.
    fn options_to_save(
        state: &AppState,
        thickness: Option<f32>,
    ) -> anyhow::Result<TomoSliceOptions> {
        let mut options = state.options.clone();
        options.default_rendering_mode = state.rendering_mode();
        if let Some(thickness) = thickness {
            if !(thickness.is_finite() && thickness > 0.0) {
                anyhow::bail!("Ungültige Schichtdicke: {thickness} (muss positiv sein)");
            }
            options.default_plane_thickness = thickness;
        }
        Ok(options)
    }

    fn log_summary(state: &AppState) {
        let Some(layer) = state.layer.as_ref() else {
            return;
        };

        log::info!(
            "Volumen '{}': Form (z, y, x) = {:?}, Ausdehnung {:?}",
            layer.name,
            layer.shape(),
            layer.extent().size()
        );
        if let Some((min, max)) = layer.volume().value_range() {
            log::info!("Wertebereich: {min} .. {max}");
        }
        log::info!(
            "Schnittebene: Position {:?}, Normale {:?}, Dicke {}, Modus {}",
            layer.plane.position(),
            layer.plane.normal(),
            layer.plane.thickness(),
            state.rendering_mode()
        );
        log::info!(
            "Kamera: Zentrum {:?}, Winkel {:?}, Zoom {}",
            state.view.camera.center,
            state.view.camera.angles,
            state.view.camera.zoom
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<CliArgs> {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_path_and_flags() {
        let parsed = args(&["t.mrc", "--mode", "plane", "--thickness", "3", "--save-config"])
            .expect("gültige Argumente");
        assert_eq!(parsed.path.as_deref(), Some("t.mrc"));
        assert_eq!(parsed.mode, Some(RenderingMode::Plane));
        assert_eq!(parsed.thickness, Some(3.0));
        assert!(parsed.save_config);

        assert!(args(&["--thickness"]).is_err());
        assert!(args(&["--unbekannt"]).is_err());
        assert!(args(&["a.mrc", "b.mrc"]).is_err());
    }

    #[test]
    fn test_options_to_save_take_mode_and_thickness() {
        let mut state = AppState::new();
        tomoslice::app::use_cases::plane_state::set_rendering_mode(
            &mut state,
            RenderingMode::Plane,
        );

        let options = AppRunner::options_to_save(&state, Some(9.0)).expect("gültige Dicke");
        assert_eq!(options.default_rendering_mode, RenderingMode::Plane);
        assert_eq!(options.default_plane_thickness, 9.0);
        assert!(AppRunner::options_to_save(&state, Some(-1.0)).is_err());
    }
}
