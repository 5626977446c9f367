//! Zentrale Konfiguration für den Zirkel-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Snap-Distanz (Welteinheiten): Features strikt innerhalb dieser Distanz
/// fangen den Cursor.
pub const SNAP_DISTANCE: f64 = 15.0;

// ── Schnittpunkt-Rendering ─────────────────────────────────────────

/// Kantenlänge der Schnittpunkt-Quadrate in Welteinheiten.
pub const INTERSECTION_MARKER_SIZE: f32 = 8.0;
/// Farbe der Schnittpunkt-Marker (RGBA: Rot).
pub const INTERSECTION_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Primitiv-Rendering ─────────────────────────────────────────────

/// Farbe festgeschriebener Primitive (RGBA: Schwarz).
pub const PRIMITIVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Vorschau-Primitive (RGBA: Blau).
pub const PREVIEW_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

// ── Snap-Indikator ─────────────────────────────────────────────────

/// Farbe des Snap-Indikators (RGBA: Grün).
pub const SNAP_INDICATOR_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Radien der beiden Indikator-Ringe in Welteinheiten.
pub const SNAP_INDICATOR_RADII: [f32; 2] = [6.0, 8.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `zirkel_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Snap-Distanz in Welteinheiten
    pub snap_distance: f64,

    // ── Schnittpunkte ───────────────────────────────────────────
    /// Kantenlänge der Schnittpunkt-Marker
    pub intersection_marker_size: f32,
    /// Farbe der Schnittpunkt-Marker (RGBA)
    pub intersection_color: [f32; 4],

    // ── Primitive ───────────────────────────────────────────────
    /// Farbe festgeschriebener Primitive (RGBA)
    pub primitive_color: [f32; 4],
    /// Farbe der Vorschau-Primitive (RGBA)
    pub preview_color: [f32; 4],

    // ── Snap-Indikator ──────────────────────────────────────────
    /// Farbe des Snap-Indikators (RGBA)
    #[serde(default = "default_snap_indicator_color")]
    pub snap_indicator_color: [f32; 4],
    /// Radien der beiden Indikator-Ringe in Welteinheiten
    #[serde(default = "default_snap_indicator_radii")]
    pub snap_indicator_radii: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_distance: SNAP_DISTANCE,
            intersection_marker_size: INTERSECTION_MARKER_SIZE,
            intersection_color: INTERSECTION_COLOR,
            primitive_color: PRIMITIVE_COLOR,
            preview_color: PREVIEW_COLOR,
            snap_indicator_color: SNAP_INDICATOR_COLOR,
            snap_indicator_radii: SNAP_INDICATOR_RADII,
        }
    }
}

/// Serde-Default für `snap_indicator_color` (Abwärtskompatibilität).
fn default_snap_indicator_color() -> [f32; 4] {
    SNAP_INDICATOR_COLOR
}

/// Serde-Default für `snap_indicator_radii` (Abwärtskompatibilität).
fn default_snap_indicator_radii() -> [f32; 2] {
    SNAP_INDICATOR_RADII
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("zirkel_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("zirkel_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_const_fallbacks() {
        let options = EditorOptions::default();

        assert_eq!(options.snap_distance, SNAP_DISTANCE);
        assert_eq!(options.intersection_color, INTERSECTION_COLOR);
        assert_eq!(options.snap_indicator_radii, SNAP_INDICATOR_RADII);
    }

    #[test]
    fn toml_roundtrip_preserves_all_fields() {
        let mut options = EditorOptions::default();
        options.snap_distance = 22.5;
        options.preview_color = [0.1, 0.2, 0.3, 1.0];

        let content = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&content).expect("Deserialisierung erwartet");

        assert_eq!(parsed, options);
    }

    #[test]
    fn load_from_missing_file_yields_defaults() {
        let options = EditorOptions::load_from_file(std::path::Path::new("nicht-vorhanden.toml"));
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn missing_indicator_fields_fall_back_to_defaults() {
        // Alte Options-Dateien ohne Indikator-Felder bleiben lesbar
        let content = r#"
            snap_distance = 10.0
            intersection_marker_size = 8.0
            intersection_color = [1.0, 0.0, 0.0, 1.0]
            primitive_color = [0.0, 0.0, 0.0, 1.0]
            preview_color = [0.0, 0.0, 1.0, 1.0]
        "#;

        let parsed: EditorOptions = toml::from_str(content).expect("Deserialisierung erwartet");
        assert_eq!(parsed.snap_distance, 10.0);
        assert_eq!(parsed.snap_indicator_color, SNAP_INDICATOR_COLOR);
        assert_eq!(parsed.snap_indicator_radii, SNAP_INDICATOR_RADII);
    }
}
