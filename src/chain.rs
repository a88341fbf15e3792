/*
 * Chain Module
 *
 * This module defines the segment chain that forms a fish body. The chain is
 * an ordered sequence of rigid-length segments, head first, tail last. Each
 * frame the tail is asked to look at the fish's new position and the
 * reorientation cascades segment by segment toward the head, so the whole
 * chain trails the moving fish along a smooth curve.
 */

use nannou::prelude::*;

// Head segments are drawn hairline-thin; widths taper up to the configured
// body width at the tail.
const HEAD_WIDTH: f32 = 1.0;

// Color ramp along the chain, head to tail
const HEAD_HUE: f32 = 0.0;
const HUE_SHIFT: f32 = 0.12;
const VALUE_FADE: f32 = 0.55;

// A single rigid-length link of a fish body. The far end is always derived
// from the near end, angle and length.
#[derive(Clone)]
pub struct Segment {
    pub anchor_start: Point2,
    pub anchor_end: Point2,
    pub angle: f32,
    pub length: f32,
    pub width: f32,
    pub color: Hsva,
}

impl Segment {
    fn new(length: f32, width: f32, color: Hsva) -> Self {
        let mut segment = Self {
            anchor_start: pt2(0.0, 0.0),
            anchor_end: pt2(0.0, 0.0),
            angle: 0.0,
            length,
            width,
            color,
        };

        segment.recompute_anchor_end();
        segment
    }

    // Derive the far end from the near end, angle and length
    pub fn recompute_anchor_end(&mut self) {
        self.anchor_end =
            self.anchor_start + vec2(self.angle.cos(), self.angle.sin()) * self.length;
    }

    // Reorient this segment so its far end lands on `point`, pulling the near
    // end to exactly `length` away along the reverse heading. Returns the new
    // near end, which becomes the look-at target for the predecessor segment.
    pub fn look_at(&mut self, point: Point2) -> Point2 {
        let direction = point - self.anchor_start;
        self.angle = direction.y.atan2(direction.x);

        if direction.length() > 0.0 {
            self.anchor_start = point - direction.normalize() * self.length;
        } else {
            self.anchor_start = point;
        }

        self.recompute_anchor_end();
        self.anchor_start
    }
}

// An ordered run of segments forming one fish body, head at index 0
#[derive(Clone)]
pub struct Chain {
    segments: Vec<Segment>,
}

impl Chain {
    // Build the chain head to tail. Width tapers from hairline to the full
    // body width; color shifts in hue and fades in from the transparent head.
    // The chain is never resized afterwards, only its geometry mutates.
    pub fn new(num_segments: usize, total_length: f32, full_width: f32) -> Self {
        let segment_length = total_length / num_segments as f32;

        let segments = (0..num_segments)
            .map(|i| {
                let t = if num_segments > 1 {
                    i as f32 / (num_segments - 1) as f32
                } else {
                    1.0
                };

                let width = HEAD_WIDTH + (full_width - HEAD_WIDTH) * t;
                let color = hsva(HEAD_HUE + HUE_SHIFT * t, 1.0, 1.0 - VALUE_FADE * t, t);

                Segment::new(segment_length, width, color)
            })
            .collect();

        Self { segments }
    }

    // Cascade a look-at request from the tail toward the head. Each segment
    // reorients exactly once, then hands its new near end to its predecessor.
    // The head segment ends the cascade; its near end is not pinned back to
    // the fish position, leaving a little slack at the head.
    pub fn look_at(&mut self, point: Point2) {
        let mut target = point;

        for segment in self.segments.iter_mut().rev() {
            target = segment.look_at(target);
        }
    }

    // Refresh every segment's far end from its current angle and near end
    pub fn update(&mut self) {
        for segment in &mut self.segments {
            segment.recompute_anchor_end();
        }
    }

    // Segments in draw order, head to tail
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    // Tail-most segment, the entry point for look-at requests
    pub fn last_segment(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
