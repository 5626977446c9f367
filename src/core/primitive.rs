//! Geometrische Primitive: Liniensegmente und Kreise.

use glam::DVec2;

/// Ein Liniensegment zwischen zwei Punkten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Startpunkt (erster Klick)
    pub start: DVec2,
    /// Endpunkt (zweiter Klick)
    pub end: DVec2,
}

impl LineSegment {
    /// Erstellt ein neues Liniensegment
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Länge des Segments
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// `true` wenn Start- und Endpunkt zusammenfallen
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Abgeschlossenes x-Intervall (min, max) des Segments
    pub(crate) fn x_interval(&self) -> (f64, f64) {
        (
            self.start.x.min(self.end.x),
            self.start.x.max(self.end.x),
        )
    }

    /// Abgeschlossenes y-Intervall (min, max) des Segments
    pub(crate) fn y_interval(&self) -> (f64, f64) {
        (
            self.start.y.min(self.end.y),
            self.start.y.max(self.end.y),
        )
    }
}

/// Ein Kreis mit Mittelpunkt und Radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Mittelpunkt
    pub center: DVec2,
    /// Radius (nie negativ, 0 ist erlaubt)
    pub radius: f64,
}

impl Circle {
    /// Erstellt einen neuen Kreis
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn segment_length_and_intervals() {
        let segment = LineSegment::new(DVec2::new(4.0, 1.0), DVec2::new(0.0, -2.0));

        assert_relative_eq!(segment.length(), 5.0);
        assert_eq!(segment.x_interval(), (0.0, 4.0));
        assert_eq!(segment.y_interval(), (-2.0, 1.0));
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        let segment = LineSegment::new(DVec2::new(3.0, 3.0), DVec2::new(3.0, 3.0));
        assert!(segment.is_degenerate());
        assert_eq!(segment.length(), 0.0);
    }
}
