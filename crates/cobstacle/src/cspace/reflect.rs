//! Robot repositioning and point reflection.
//!
//! The reference vertex is the robot's first hull vertex. The robot is
//! translated so that vertex sits at the origin, its extents are recorded in
//! that translated pose, and every vertex is then mirrored through the origin.

use serde::Serialize;
use tracing::debug;

use crate::error::GeomError;
use crate::geom2::{Extents, Polygon, Pt2};

/// Robot mirrored through its reference vertex.
///
/// Owns its vertex list; vertex order matches the source polygon.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReflectedRobot {
    polygon: Polygon,
    /// Position of the reference vertex before translation.
    reference: Pt2,
    /// Bounds of the translated (not yet reflected) robot; always contain the origin.
    extents: Extents,
}

impl ReflectedRobot {
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn reference(&self) -> Pt2 {
        self.reference
    }

    #[inline]
    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    /// Undo the reflection and the translation: the original robot polygon.
    pub fn restore(&self) -> Polygon {
        Polygon::from_vertices(
            self.polygon
                .vertices()
                .iter()
                .map(|p| -p + self.reference)
                .collect(),
        )
    }
}

/// Translate the reference vertex to the origin, then negate every vertex.
pub fn reflect(robot: &Polygon) -> Result<ReflectedRobot, GeomError> {
    let reference = robot
        .first()
        .ok_or_else(|| GeomError::invalid_polygon("robot polygon has no vertices"))?;
    let mut extents = Extents::at(Pt2::zeros());
    let mut verts = Vec::with_capacity(robot.len());
    for p in robot.vertices() {
        let q = p - reference;
        extents.include(q);
        verts.push(-q);
    }
    debug!(
        ref_x = reference.x,
        ref_y = reference.y,
        n = verts.len(),
        "reflected robot"
    );
    Ok(ReflectedRobot {
        polygon: Polygon::from_vertices(verts),
        reference,
        extents,
    })
}
