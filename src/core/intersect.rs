//! Schnittpunktberechnung für die drei Primitiv-Paarungen.
//!
//! Alle Funktionen sind pure Funktionen über f64-Koordinaten und liefern
//! null, einen oder zwei Punkte. Entartete Lagen (parallel, tangential,
//! disjunkt, verschachtelt, punktförmig) sind reguläre Ergebnisse, keine
//! Fehler. Die Vergleiche gegen null bleiben exakte Gleitkomma-Vergleiche;
//! nur Wurzel-Radikanden werden gegen Unterlauf geklemmt.

use glam::DVec2;

use super::{Circle, LineSegment};

/// Relative Toleranz, ab der zwei Quadratwurzeln als zusammenfallend gelten.
const ROOT_MERGE_EPS: f64 = 1e-9;

/// Schnittpunkt zweier Liniensegmente.
///
/// Löst das parametrische System `P = P1 + u(P2−P1)`, `Q = P3 + v(P4−P3)`
/// über die 2×2-Determinante. Determinante null ⇒ parallel oder kollinear
/// ⇒ kein Schnittpunkt (kollineare Überlappung wird nicht aufgelöst).
/// Der Punkt zählt nur, wenn beide Parameter in `[0, 1]` liegen, der
/// Schnitt also auf beiden endlichen Segmenten liegt.
pub fn segment_segment(first: &LineSegment, second: &LineSegment) -> Option<DVec2> {
    let (p1, p2) = (first.start, first.end);
    let (p3, p4) = (second.start, second.end);

    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 {
        return None;
    }

    let u = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let v = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;

    if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) {
        Some(p1 + u * (p2 - p1))
    } else {
        None
    }
}

/// Schnittpunkte eines Kreises mit einem Liniensegment.
///
/// Die Trägergerade wird in allgemeiner Form `ax + by + c = 0` aufgestellt.
/// Liegt der Mittelpunkt weiter als `radius` von ihr entfernt, gibt es
/// keinen Schnitt. Senkrechte Geraden (`b == 0`) nehmen einen eigenen
/// Zweig, damit nicht durch den Null-Koeffizienten geteilt wird; sonst
/// wird die Steigungsform in die Kreisgleichung eingesetzt und die
/// Quadratik in x gelöst. Wurzeln außerhalb des Segment-Intervalls auf
/// der maßgeblichen Achse werden verworfen; zusammenfallende Wurzeln
/// (Tangente) werden genau einmal gemeldet.
pub fn segment_circle(circle: &Circle, segment: &LineSegment) -> Vec<DVec2> {
    if segment.is_degenerate() {
        // Punktförmiges Segment: keine Trägergerade
        return Vec::new();
    }

    let (p1, p2) = (segment.start, segment.end);
    let center = circle.center;
    let r = circle.radius;

    // Allgemeine Geradenform ax + by + c = 0
    let a = p2.y - p1.y;
    let b = p1.x - p2.x;
    let c = p2.x * p1.y - p1.x * p2.y;

    let dist = (a * center.x + b * center.y + c).abs() / (a * a + b * b).sqrt();
    if dist > r {
        return Vec::new();
    }

    let mut hits = Vec::with_capacity(2);

    if b == 0.0 {
        // Senkrechte Gerade: x ist konstant, nach y auflösen
        let x = -c / a;
        let term = (r * r - (x - center.x) * (x - center.x)).max(0.0).sqrt();
        let (y_min, y_max) = segment.y_interval();
        for y in [center.y + term, center.y - term] {
            if (y_min..=y_max).contains(&y) {
                hits.push(DVec2::new(x, y));
            }
        }
    } else {
        // Steigungsform y = m·x + k, eingesetzt in die Kreisgleichung
        let m = -a / b;
        let k = -c / b;
        let qa = 1.0 + m * m;
        let qb = -2.0 * center.x + 2.0 * m * (k - center.y);
        let qc = center.x * center.x + (k - center.y) * (k - center.y) - r * r;

        let discriminant = qb * qb - 4.0 * qa * qc;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let root = discriminant.sqrt();
        let (x_min, x_max) = segment.x_interval();
        for x in [(-qb + root) / (2.0 * qa), (-qb - root) / (2.0 * qa)] {
            if (x_min..=x_max).contains(&x) {
                hits.push(DVec2::new(x, m * x + k));
            }
        }
    }

    dedup_coincident(hits)
}

/// Schnittpunkte zweier Kreise.
///
/// Standard-Konstruktion über den Mittelpunktabstand `d`: Versatz `a`
/// entlang der Mittelpunktlinie, halbe Sehnenhöhe `h`, Sehnenmittelpunkt
/// und zwei senkrechte Versätze um `h`. `d > r1 + r2` (disjunkt) und
/// `d < |r1 − r2|` (verschachtelt) liefern keine Punkte, `h == 0`
/// (Tangente) genau einen, sonst zwei.
pub fn circle_circle(first: &Circle, second: &Circle) -> Vec<DVec2> {
    let (c1, r1) = (first.center, first.radius);
    let (c2, r2) = (second.center, second.radius);

    let d = c1.distance(c2);
    if d > r1 + r2 || d < (r1 - r2).abs() {
        return Vec::new();
    }
    if d == 0.0 {
        // Deckungsgleiche Mittelpunkte: kein diskreter Schnittpunkt
        return Vec::new();
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let mid = c1 + a * (c2 - c1) / d;
    let offset = DVec2::new(h * (c2.y - c1.y) / d, -h * (c2.x - c1.x) / d);

    if h == 0.0 {
        vec![mid]
    } else {
        vec![mid + offset, mid - offset]
    }
}

/// Fasst zwei zusammenfallende Wurzeln zu einem Punkt zusammen (Tangentialfall).
fn dedup_coincident(hits: Vec<DVec2>) -> Vec<DVec2> {
    if hits.len() == 2 {
        let scale = hits[0].length().max(hits[1].length()).max(1.0);
        if hits[0].distance(hits[1]) <= ROOT_MERGE_EPS * scale {
            return vec![hits[0]];
        }
    }
    hits
}
