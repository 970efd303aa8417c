use core::f32::consts::TAU;

use three_d::{CpuMesh, Indices, Positions, Vec2, Vec3};

/// Subdivisions of the body spheres.
pub const SPHERE_SUBDIVS: u32 = 48;

/// Subdivisions of the translucent star shells.
pub const SHELL_SUBDIVS: u32 = 24;

pub const ORBIT_RING_SEGMENTS: u32 = 64;
pub const PLANET_RING_SEGMENTS: u32 = 32;
pub const PROMINENCE_SEGMENTS: u32 = 8;

/// A flat ring in the XY plane, facing +Z.
#[derive(Clone, Debug)]
pub struct Annulus {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl Annulus {
    /// `segments` is clamped to at least 3.
    pub fn new(inner_radius: f32, outer_radius: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let vertex_count = (segments as usize + 1) * 2;

        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            for (radius, v) in [(inner_radius, 0.0), (outer_radius, 1.0)] {
                positions.push(Vec3::new(radius * cos, radius * sin, 0.0));
                uvs.push(Vec2::new(i as f32 / segments as f32, v));
            }
        }

        let mut indices = Vec::with_capacity(segments as usize * 6);
        for i in 0..segments {
            let inner = i * 2;
            let outer = inner + 1;
            let next_inner = inner + 2;
            let next_outer = inner + 3;
            indices.extend_from_slice(&[inner, outer, next_outer, inner, next_outer, next_inner]);
        }

        Self {
            positions,
            uvs,
            indices,
        }
    }

    pub fn to_cpu_mesh(&self) -> CpuMesh {
        CpuMesh {
            normals: Some(vec![Vec3::new(0.0, 0.0, 1.0); self.positions.len()]),
            uvs: Some(self.uvs.clone()),
            positions: Positions::F32(self.positions.clone()),
            indices: Indices::U32(self.indices.clone()),
            ..Default::default()
        }
    }
}
