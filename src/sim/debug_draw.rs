//! Debug draw bridge
//!
//! Forwards body shapes to whatever drawing surface the host supplies. Has no
//! effect on the simulation.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::actor::{BodyKind, Shape};
use super::physics::BodyView;

/// Drawing surface for physics shapes
pub trait DebugDraw {
    /// Closed outline through `vertices`
    fn draw_polygon(&mut self, vertices: &[Vec2], color: [f32; 4]);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Colors per body kind
pub mod colors {
    pub const STATIC: [f32; 4] = [0.5, 0.9, 0.5, 1.0];
    pub const KINEMATIC: [f32; 4] = [0.5, 0.5, 0.9, 1.0];
    pub const DYNAMIC: [f32; 4] = [0.9, 0.7, 0.7, 1.0];
}

fn color_for(kind: BodyKind) -> [f32; 4] {
    match kind {
        BodyKind::Static => colors::STATIC,
        BodyKind::Kinematic => colors::KINEMATIC,
        BodyKind::Dynamic => colors::DYNAMIC,
    }
}

/// Draw every body's collision shape
pub fn draw_bodies<'a>(sink: &mut dyn DebugDraw, bodies: impl IntoIterator<Item = &'a BodyView>) {
    for body in bodies {
        let color = color_for(body.kind);
        match body.shape {
            Shape::Circle { radius } => sink.draw_circle(body.position, radius, color),
            Shape::Rect { half_extents } => {
                let p = body.position;
                let h = half_extents;
                let corners = [
                    Vec2::new(p.x - h.x, p.y - h.y),
                    Vec2::new(p.x + h.x, p.y - h.y),
                    Vec2::new(p.x + h.x, p.y + h.y),
                    Vec2::new(p.x - h.x, p.y + h.y),
                ];
                sink.draw_polygon(&corners, color);
            }
        }
    }
}

/// Line-list vertex, ready for upload to a GPU buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DebugVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl DebugVertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Sink that turns shapes into a line list
#[derive(Debug, Clone)]
pub struct LineBuffer {
    vertices: Vec<DebugVertex>,
    circle_segments: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(16)
    }
}

impl LineBuffer {
    pub fn new(circle_segments: usize) -> Self {
        Self {
            vertices: Vec::new(),
            circle_segments: circle_segments.max(3),
        }
    }

    fn push_loop(&mut self, points: &[Vec2], color: [f32; 4]) {
        if points.len() < 2 {
            return;
        }
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.vertices.push(DebugVertex::new(a.x, a.y, color));
            self.vertices.push(DebugVertex::new(b.x, b.y, color));
        }
    }

    pub fn vertices(&self) -> &[DebugVertex] {
        &self.vertices
    }

    /// Raw bytes of the line list
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl DebugDraw for LineBuffer {
    fn draw_polygon(&mut self, vertices: &[Vec2], color: [f32; 4]) {
        self.push_loop(vertices, color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let n = self.circle_segments;
        let points: Vec<Vec2> = (0..n)
            .map(|i| {
                let theta = i as f32 / n as f32 * std::f32::consts::TAU;
                center + Vec2::new(theta.cos(), theta.sin()) * radius
            })
            .collect();
        self.push_loop(&points, color);
    }
}
