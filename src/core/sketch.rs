//! Die zentrale Sketch-Datenstruktur mit Segmenten, Kreisen und Schnittpunkten.

use glam::DVec2;
use thiserror::Error;

use super::{intersect, Circle, LineSegment, SnapIndex};

/// Fehler an der Store-Grenze: verletzte Vorbedingung beim Einfügen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    /// Radius verletzt die Vorbedingung `radius >= 0` (oder ist nicht endlich)
    #[error("ungültiger Kreisradius: {0}")]
    InvalidRadius(f64),
}

/// Container für die gesamte Konstruktion
///
/// Segmente und Kreise sind append-only und behalten ihre
/// Einfüge-Reihenfolge; die Schnittpunktmenge ist eine reine Funktion
/// dieser beiden Sequenzen und wird nach jeder Mutation vollständig neu
/// aufgebaut, bevor der Store wieder als konsistent gilt.
#[derive(Debug, Clone)]
pub struct Sketch {
    /// Alle Liniensegmente in Einfüge-Reihenfolge
    segments: Vec<LineSegment>,
    /// Alle Kreise in Einfüge-Reihenfolge
    circles: Vec<Circle>,
    /// Alle Schnittpunkte in Berechnungs-Reihenfolge
    intersections: Vec<DVec2>,
    /// Persistenter Snap-Index über allen Snap-Kandidaten
    snap_index: SnapIndex,
}

impl Sketch {
    /// Erstellt einen neuen leeren Sketch
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            circles: Vec::new(),
            intersections: Vec::new(),
            snap_index: SnapIndex::empty(),
        }
    }

    /// Hängt ein Liniensegment an.
    ///
    /// Schlägt nie fehl; auch zusammenfallende Endpunkte werden
    /// akzeptiert, entartete Geometrie behandelt die
    /// Schnittpunktberechnung.
    pub fn add_segment(&mut self, start: DVec2, end: DVec2) {
        self.segments.push(LineSegment::new(start, end));
    }

    /// Hängt einen Kreis an.
    ///
    /// Jeder Radius `>= 0` wird akzeptiert; negative oder nicht-endliche
    /// Radien werden an der Store-Grenze abgewiesen und erreichen die
    /// Schnittpunktberechnung nie.
    pub fn add_circle(&mut self, center: DVec2, radius: f64) -> Result<(), SketchError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SketchError::InvalidRadius(radius));
        }
        self.circles.push(Circle::new(center, radius));
        Ok(())
    }

    /// Baut die Schnittpunktmenge vollständig neu auf.
    ///
    /// Feste Reihenfolge: (1) alle ungeordneten Segment-Paare, (2) alle
    /// (Kreis, Segment)-Paare kreis-major, (3) alle ungeordneten
    /// Kreis-Paare. Die Punkt-Reihenfolge ist damit deterministisch und
    /// entscheidet Snap-Gleichstände. Läuft synchron bis zum Ende und
    /// baut anschließend den Snap-Index neu auf.
    pub fn recompute_intersections(&mut self) {
        self.intersections.clear();

        for i in 0..self.segments.len() {
            for j in (i + 1)..self.segments.len() {
                if let Some(p) = intersect::segment_segment(&self.segments[i], &self.segments[j]) {
                    self.intersections.push(p);
                }
            }
        }

        for circle in &self.circles {
            for segment in &self.segments {
                self.intersections
                    .extend(intersect::segment_circle(circle, segment));
            }
        }

        for i in 0..self.circles.len() {
            for j in (i + 1)..self.circles.len() {
                self.intersections
                    .extend(intersect::circle_circle(&self.circles[i], &self.circles[j]));
            }
        }

        self.snap_index = SnapIndex::from_parts(&self.segments, &self.circles, &self.intersections);

        log::debug!(
            "Schnittpunkte neu berechnet: {} Segmente, {} Kreise, {} Punkte",
            self.segments.len(),
            self.circles.len(),
            self.intersections.len()
        );
    }

    /// Read-only Sicht auf alle Segmente
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Read-only Sicht auf alle Kreise
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Read-only Sicht auf die Schnittpunkte (Stand des letzten Recompute)
    pub fn intersections(&self) -> &[DVec2] {
        &self.intersections
    }

    /// Der aktuelle Snap-Index
    pub fn snap_index(&self) -> &SnapIndex {
        &self.snap_index
    }

    /// Gibt die Anzahl der Segmente zurück
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Gibt die Anzahl der Kreise zurück
    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    /// Gibt die Anzahl der Schnittpunkte zurück
    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}
