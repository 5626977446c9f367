//! Snap-Index (KD-Tree) für schnelle Kandidaten-Abfragen.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::{Circle, LineSegment};

/// Prioritätsklasse eines Snap-Kandidaten.
///
/// Die Variantenreihenfolge ist die Suchreihenfolge: eine niedrigere
/// Klasse gewinnt gegen jede höhere, unabhängig von der Distanz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnapClass {
    /// Abgeleiteter Schnittpunkt
    Intersection,
    /// Endpunkt eines Liniensegments
    SegmentEndpoint,
    /// Kreismittelpunkt
    CircleCenter,
}

/// Ergebnis einer Distanzabfrage gegen den Snap-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMatch {
    /// Prioritätsklasse des Kandidaten
    pub class: SnapClass,
    /// Laufindex innerhalb der Klasse (Scan-Reihenfolge der Quelle)
    pub ordinal: usize,
    /// Welt-Position des Kandidaten
    pub position: DVec2,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Snap-Index über allen Kandidaten eines Sketch.
#[derive(Debug, Clone)]
pub struct SnapIndex {
    tree: KdTree<f64, 2>,
    candidates: Vec<(SnapClass, usize, DVec2)>,
}

impl SnapIndex {
    /// Erstellt einen leeren Snap-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            candidates: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den Store-Sequenzen.
    ///
    /// Kandidaten in Prioritäts- und Scan-Reihenfolge: Schnittpunkte in
    /// Berechnungs-Reihenfolge, dann Segment-Endpunkte (Start vor Ende,
    /// Segmente in Einfüge-Reihenfolge), dann Kreismittelpunkte.
    pub fn from_parts(
        segments: &[LineSegment],
        circles: &[Circle],
        intersections: &[DVec2],
    ) -> Self {
        let mut candidates =
            Vec::with_capacity(intersections.len() + 2 * segments.len() + circles.len());

        for (i, point) in intersections.iter().enumerate() {
            candidates.push((SnapClass::Intersection, i, *point));
        }
        for (i, segment) in segments.iter().enumerate() {
            candidates.push((SnapClass::SegmentEndpoint, 2 * i, segment.start));
            candidates.push((SnapClass::SegmentEndpoint, 2 * i + 1, segment.end));
        }
        for (i, circle) in circles.iter().enumerate() {
            candidates.push((SnapClass::CircleCenter, i, circle.center));
        }

        let entries: Vec<[f64; 2]> = candidates.iter().map(|(_, _, p)| [p.x, p.y]).collect();
        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, candidates }
    }

    /// Gibt die Anzahl indexierter Kandidaten zurück.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Gibt `true` zurück, wenn keine Kandidaten im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Findet alle Kandidaten strikt innerhalb des Radius.
    ///
    /// Sortiert nach (Prioritätsklasse, Scan-Reihenfolge) — der erste
    /// Eintrag ist der Kandidat, den ein linearer Prioritäts-Scan als
    /// ersten treffen würde.
    pub fn within_strict(&self, query: DVec2, radius: f64) -> Vec<SnapMatch> {
        if self.is_empty() || radius <= 0.0 {
            return Vec::new();
        }

        let mut results: Vec<SnapMatch> = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let (class, ordinal, position) = *self.candidates.get(entry.item as usize)?;
                let distance = entry.distance.sqrt();
                // Strikt kleiner: Distanz genau auf der Toleranz zählt nicht
                (distance < radius).then_some(SnapMatch {
                    class,
                    ordinal,
                    position,
                    distance,
                })
            })
            .collect();

        results.sort_by(|a, b| (a.class, a.ordinal).cmp(&(b.class, b.ordinal)));
        results
    }

    /// Liefert den Kandidaten mit der höchsten Snap-Priorität in Reichweite.
    pub fn first_in_priority_order(&self, query: DVec2, radius: f64) -> Option<SnapMatch> {
        self.within_strict(query, radius).into_iter().next()
    }
}
