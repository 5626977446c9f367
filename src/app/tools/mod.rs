//! Konstruktions-Werkzeuge: Lineal und Zirkel als expliziter Zustandsautomat.
//!
//! Das aktive Werkzeug ist eine getaggte Variante, die ihren
//! werkzeug-spezifischen Schwebezustand selbst trägt. Werkzeuge erzeugen
//! reine Daten (`ToolPrimitive`), die Mutation erfolgt zentral im
//! Construction-Handler.

use glam::DVec2;

use crate::core::{Circle, LineSegment};

/// Werkzeug-Identität
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    /// Lineal: Liniensegment aus zwei Punkten
    #[default]
    Straightedge,
    /// Zirkel: Kreis aus Mittelpunkt und Radiuspunkt
    Compass,
}

/// Rückgabe von `on_click` — steuert den Werkzeug-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Punkt registriert, weitere Eingabe nötig
    Continue,
    /// Platzierung vollständig — bereit zum Festschreiben
    ReadyToExecute,
}

/// Fertig platziertes oder in Vorschau befindliches Primitiv — reine Daten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolPrimitive {
    /// Liniensegment aus dem Lineal
    Segment(LineSegment),
    /// Kreis aus dem Zirkel
    Circle(Circle),
}

/// Aktives Werkzeug inklusive Schwebezustand.
///
/// Lineal: `None → Some(Segment)` mit erstem Klick (beide Endpunkte auf
/// der Klick-Position), Cursor zieht den Endpunkt nach, zweiter Klick
/// schließt ab. Zirkel: `None → Some(Kreis)` mit Radius 0, Cursor zieht
/// den Radius nach, zweiter Klick schließt ab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveTool {
    /// Lineal mit optional schwebendem Segment
    Straightedge {
        /// Angefangenes Segment (zweiter Punkt folgt dem Cursor)
        pending: Option<LineSegment>,
    },
    /// Zirkel mit optional schwebendem Kreis
    Compass {
        /// Angefangener Kreis (Radius folgt dem Cursor)
        pending: Option<Circle>,
    },
}

impl ActiveTool {
    /// Erstellt das Werkzeug mit leerem Schwebezustand.
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Straightedge => Self::Straightedge { pending: None },
            ToolKind::Compass => Self::Compass { pending: None },
        }
    }

    /// Gibt die Werkzeug-Identität zurück.
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Straightedge { .. } => ToolKind::Straightedge,
            Self::Compass { .. } => ToolKind::Compass,
        }
    }

    /// Verarbeitet einen Klick mit bereits aufgelöster Position.
    pub fn on_click(&mut self, resolved: DVec2) -> ToolAction {
        match self {
            Self::Straightedge { pending } => match pending {
                None => {
                    *pending = Some(LineSegment::new(resolved, resolved));
                    ToolAction::Continue
                }
                Some(segment) => {
                    segment.end = resolved;
                    ToolAction::ReadyToExecute
                }
            },
            Self::Compass { pending } => match pending {
                None => {
                    *pending = Some(Circle::new(resolved, 0.0));
                    ToolAction::Continue
                }
                Some(circle) => {
                    circle.radius = circle.center.distance(resolved);
                    ToolAction::ReadyToExecute
                }
            },
        }
    }

    /// Aktualisiert den Schwebezustand bei Cursor-Bewegung (Live-Vorschau).
    pub fn on_cursor_moved(&mut self, resolved: DVec2) {
        match self {
            Self::Straightedge {
                pending: Some(segment),
            } => segment.end = resolved,
            Self::Compass {
                pending: Some(circle),
            } => circle.radius = circle.center.distance(resolved),
            _ => {}
        }
    }

    /// Entnimmt das fertig platzierte Primitiv und leert den Schwebezustand.
    pub fn take_commit(&mut self) -> Option<ToolPrimitive> {
        match self {
            Self::Straightedge { pending } => pending.take().map(ToolPrimitive::Segment),
            Self::Compass { pending } => pending.take().map(ToolPrimitive::Circle),
        }
    }

    /// Vorschau des unbestätigten Primitivs, falls vorhanden.
    pub fn preview(&self) -> Option<ToolPrimitive> {
        match *self {
            Self::Straightedge { pending } => pending.map(ToolPrimitive::Segment),
            Self::Compass { pending } => pending.map(ToolPrimitive::Circle),
        }
    }

    /// Statuszeile für die UI, abhängig von Werkzeug und Schwebezustand.
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Straightedge { pending: None } => "Klick setzt den ersten Punkt der Linie",
            Self::Straightedge { pending: Some(_) } => {
                "Ziehen für Vorschau, Klick schließt die Linie ab"
            }
            Self::Compass { pending: None } => "Klick setzt den Mittelpunkt",
            Self::Compass { pending: Some(_) } => {
                "Ziehen setzt den Radius, Klick schließt den Kreis ab"
            }
        }
    }
}

impl Default for ActiveTool {
    fn default() -> Self {
        Self::new(ToolKind::default())
    }
}
