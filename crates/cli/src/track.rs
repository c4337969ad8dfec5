//! Owned animation buffer: the robot body moved one displacement per tick.
//!
//! The geometry crate hands out immutable results; this is the only place a
//! robot pose is mutated, and the buffer is owned by the track.

use cobstacle::cspace::DisplacementSequence;
use cobstacle::{Polygon, Pt2};

pub struct RobotTrack<'a> {
    body: Vec<Pt2>,
    steps: &'a [Pt2],
    tick: usize,
}

/// Reference-point position after `index` ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub reference: Pt2,
}

impl<'a> RobotTrack<'a> {
    pub fn new(initial: &Polygon, seq: &'a DisplacementSequence) -> Self {
        Self {
            body: initial.vertices().to_vec(),
            steps: &seq.steps,
            tick: 0,
        }
    }

    #[inline]
    pub fn body(&self) -> &[Pt2] {
        &self.body
    }

    #[inline]
    pub fn reference(&self) -> Option<Pt2> {
        self.body.first().copied()
    }

    #[inline]
    pub fn ticks_left(&self) -> usize {
        self.steps.len() - self.tick
    }

    /// Apply the next displacement to every vertex. `false` once exhausted.
    pub fn advance(&mut self) -> bool {
        let Some(d) = self.steps.get(self.tick) else {
            return false;
        };
        for p in &mut self.body {
            *p += d;
        }
        self.tick += 1;
        true
    }

    /// Frame 0 (initial pose) followed by one frame per tick.
    pub fn frames(mut self) -> Vec<Frame> {
        let mut out = Vec::with_capacity(self.steps.len() + 1);
        if let Some(reference) = self.reference() {
            out.push(Frame {
                index: 0,
                reference,
            });
        }
        while self.advance() {
            if let Some(reference) = self.reference() {
                out.push(Frame {
                    index: self.tick,
                    reference,
                });
            }
        }
        out
    }
}
