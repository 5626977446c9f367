//! Snap-Auflösung: Cursor-Position → relevantestes Ziel in Reichweite.

use glam::DVec2;

use super::{Sketch, SnapClass, SnapMatch};

/// Quelle eines Snap-Treffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapSource {
    /// Abgeleiteter Schnittpunkt (Index in der Schnittpunkt-Sequenz)
    Intersection(usize),
    /// Segment-Endpunkt
    SegmentEndpoint {
        /// Index des Segments in Einfüge-Reihenfolge
        segment: usize,
        /// `false` = Startpunkt, `true` = Endpunkt
        is_end: bool,
    },
    /// Kreismittelpunkt (Index des Kreises in Einfüge-Reihenfolge)
    CircleCenter(usize),
}

/// Aufgelöstes Snap-Ziel: entweder ein Feature in Reichweite oder die
/// unveränderte Cursor-Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapTarget {
    /// Snap auf ein existierendes Feature
    Feature(SnapSource, DVec2),
    /// Freie Position (Roh-Cursor, kein Snap)
    Free(DVec2),
}

impl SnapTarget {
    /// Gibt die Welt-Position des Ziels zurück.
    pub fn position(&self) -> DVec2 {
        match self {
            SnapTarget::Feature(_, pos) => *pos,
            SnapTarget::Free(pos) => *pos,
        }
    }

    /// `true` wenn ein Snap stattgefunden hat (steuert den Indikator).
    pub fn is_snap(&self) -> bool {
        matches!(self, SnapTarget::Feature(..))
    }
}

/// Löst eine Cursor-Position gegen den aktuellen Sketch auf.
///
/// Suchreihenfolge, erster Treffer gewinnt (Distanz strikt kleiner als
/// `snap_distance`): Schnittpunkte in Berechnungs-Reihenfolge, dann
/// Segment-Endpunkte in Einfüge-Reihenfolge (Start vor Ende), dann
/// Kreismittelpunkte. Ohne Treffer bleibt die Cursor-Position
/// unverändert; Grid-Snapping gibt es nicht.
pub fn resolve_snap(pos: DVec2, sketch: &Sketch, snap_distance: f64) -> SnapTarget {
    match sketch.snap_index().first_in_priority_order(pos, snap_distance) {
        Some(hit) => SnapTarget::Feature(source_from_match(&hit), hit.position),
        None => SnapTarget::Free(pos),
    }
}

fn source_from_match(hit: &SnapMatch) -> SnapSource {
    match hit.class {
        SnapClass::Intersection => SnapSource::Intersection(hit.ordinal),
        SnapClass::SegmentEndpoint => SnapSource::SegmentEndpoint {
            segment: hit.ordinal / 2,
            is_end: hit.ordinal % 2 == 1,
        },
        SnapClass::CircleCenter => SnapSource::CircleCenter(hit.ordinal),
    }
}
