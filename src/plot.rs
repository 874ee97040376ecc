//! Plot Model
//!
//! Logical coordinates in [-5, 5] on both axes, fixed quadrant
//! classification, point CRUD with a single editing flag, and the average
//! position of all points.

use crate::ids;
use crate::models::Point;

/// Half the logical span of each axis.
pub const AXIS_EXTENT: f64 = 5.0;

/// One fixed region of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    pub id: u8,
    pub name: &'static str,
    pub color: &'static str,
    /// Inclusive [min, max] on x.
    pub x: [f64; 2],
    /// Inclusive [min, max] on y.
    pub y: [f64; 2],
}

/// The four quadrants, in classification order. Axis points fall into the
/// earliest matching quadrant; the order is part of the behavior.
pub const QUADRANTS: [Quadrant; 4] = [
    Quadrant {
        id: 1,
        name: "Radical Results",
        color: "#4ade80",
        x: [0.0, 5.0],
        y: [0.0, 5.0],
    },
    Quadrant {
        id: 2,
        name: "Good Vibes, Not Effective",
        color: "#60a5fa",
        x: [-5.0, 0.0],
        y: [0.0, 5.0],
    },
    Quadrant {
        id: 3,
        name: "Bad Vibes, Ineffective",
        color: "#f87171",
        x: [-5.0, 0.0],
        y: [-5.0, 0.0],
    },
    Quadrant {
        id: 4,
        name: "Effective with Bad Vibes",
        color: "#fb923c",
        x: [0.0, 5.0],
        y: [-5.0, 0.0],
    },
];

/// First quadrant whose inclusive bounds contain the point.
pub fn classify(x: f64, y: f64) -> Option<&'static Quadrant> {
    QUADRANTS
        .iter()
        .find(|q| x >= q.x[0] && x <= q.x[1] && y >= q.y[0] && y <= q.y[1])
}

/// Map a pointer position, as fractions [0, 1] of the plot area's width
/// and height, to logical coordinates. The y axis is inverted: screen-down
/// is logical-negative. Both coordinates round to one decimal.
pub fn pointer_to_logical(frac_x: f64, frac_y: f64) -> (f64, f64) {
    let x = frac_x * 2.0 * AXIS_EXTENT - AXIS_EXTENT;
    let y = -(frac_y * 2.0 * AXIS_EXTENT - AXIS_EXTENT);
    (round1(x), round1(y))
}

/// Round to one decimal, normalizing negative zero.
pub fn round1(v: f64) -> f64 {
    let r = (v * 10.0).round() / 10.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Session-scoped plotter state.
///
/// Selection and editing form a small ladder: unselected -> selected (point
/// click), selected -> editing (re-click or explicit edit), editing ->
/// selected (save), any -> unselected (delete).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotModel {
    points: Vec<Point>,
    selected: Option<i64>,
    editing: bool,
    draft: String,
}

impl PlotModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn selected(&self) -> Option<&Point> {
        self.selected
            .and_then(|id| self.points.iter().find(|p| p.id == id))
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// In-progress description text while editing.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Add a point at the clicked position, select it, and enter edit
    /// mode. Returns the new id, or `None` while another point is being
    /// edited (clicks are ignored then).
    pub fn add_point(&mut self, frac_x: f64, frac_y: f64) -> Option<i64> {
        if self.editing {
            return None;
        }
        let (x, y) = pointer_to_logical(frac_x, frac_y);
        let id = ids::next_id();
        self.points.push(Point {
            id,
            x,
            y,
            description: String::new(),
        });
        self.selected = Some(id);
        self.editing = true;
        self.draft.clear();
        Some(id)
    }

    /// Click a point: re-clicking the selected one enters edit mode seeded
    /// with its description; clicking another switches selection and
    /// leaves edit mode. Unknown ids are ignored.
    pub fn select_point(&mut self, id: i64) {
        let Some(point) = self.points.iter().find(|p| p.id == id) else {
            return;
        };
        if self.selected == Some(id) {
            self.draft = point.description.clone();
            self.editing = true;
        } else {
            self.selected = Some(id);
            self.editing = false;
        }
    }

    /// Select from the list view: plain selection, never enters edit
    /// mode, even for the already-selected point.
    pub fn focus_point(&mut self, id: i64) {
        if self.points.iter().any(|p| p.id == id) {
            self.selected = Some(id);
            self.editing = false;
        }
    }

    /// Explicit edit action on the selected point.
    pub fn start_editing(&mut self) {
        if let Some(point) = self.selected() {
            self.draft = point.description.clone();
            self.editing = true;
        }
    }

    /// Overwrite the point's description and leave edit mode.
    pub fn save_description(&mut self, id: i64, text: String) {
        if let Some(point) = self.points.iter_mut().find(|p| p.id == id) {
            point.description = text;
        }
        self.editing = false;
    }

    /// Remove the point; a selected point's removal clears selection.
    pub fn delete_point(&mut self, id: i64) {
        self.points.retain(|p| p.id != id);
        if self.selected == Some(id) {
            self.selected = None;
            self.editing = false;
        }
    }

    /// Mean position of all points, one-decimal rounded; needs at least
    /// two points.
    pub fn average(&self) -> Option<(f64, f64)> {
        if self.points.len() < 2 {
            return None;
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some((round1(sx / n), round1(sy / n)))
    }
}
