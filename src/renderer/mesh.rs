//! CPU-side mesh builders
//!
//! Everything renders as flat triangle lists with per-vertex normals;
//! obstacles and the ball are rebuilt from sim state each frame, the
//! decorations (guide columns + starfield) once at startup.

use glam::{Mat3, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};

/// Spacing of the decorative guide columns along the track
const COLUMN_SPACING: i32 = 4;
const COLUMN_HEIGHT: f32 = 0.8;
const COLUMN_RADIUS: f32 = 0.1;
const COLUMN_X_OFFSET: f32 = 5.5;
const COLUMN_Y_MIN: i32 = -20;
const COLUMN_Y_MAX: i32 = 500;
const STAR_RADIUS: f32 = 0.09;

fn push_vertex(out: &mut Vec<Vertex>, pos: Vec3, normal: Vec3, color: [f32; 4]) {
    out.push(Vertex::new(pos.to_array(), normal.to_array(), color));
}

/// Append a lat/long sphere centered at `center`
pub fn uv_sphere(
    out: &mut Vec<Vertex>,
    center: Vec3,
    radius: f32,
    rings: u32,
    segments: u32,
    color: [f32; 4],
) {
    let point = |ring: u32, seg: u32| -> Vec3 {
        let lat = PI * ring as f32 / rings as f32 - PI / 2.0;
        let lon = 2.0 * PI * seg as f32 / segments as f32;
        Vec3::new(
            lat.cos() * lon.cos(),
            lat.sin(),
            lat.cos() * lon.sin(),
        )
    };

    for ring in 0..rings {
        for seg in 0..segments {
            let quad = [
                point(ring, seg),
                point(ring + 1, seg),
                point(ring + 1, seg + 1),
                point(ring, seg + 1),
            ];
            // Two triangles; normals are the unit directions themselves
            for &i in &[0usize, 1, 2, 0, 2, 3] {
                let n = quad[i];
                push_vertex(out, center + n * radius, n, color);
            }
        }
    }
}

/// Append an axis-aligned box centered at `center` with the given half extents
pub fn box_mesh(out: &mut Vec<Vertex>, center: Vec3, half: Vec3, color: [f32; 4]) {
    // (normal, tangent u, tangent v) per face
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];

    for (n, u, v) in FACES {
        let n = Vec3::from(n);
        let u = Vec3::from(u) * half;
        let v = Vec3::from(v) * half;
        let base = center + n * (n.abs() * half);
        let corners = [base - u - v, base + u - v, base + u + v, base - u + v];
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            push_vertex(out, corners[i], n, color);
        }
    }
}

/// Append a y-axis cylinder centered at `center`, rotated `rot_z` about z
pub fn cylinder(
    out: &mut Vec<Vertex>,
    center: Vec3,
    radius: f32,
    height: f32,
    segments: u32,
    rot_z: f32,
    color: [f32; 4],
) {
    let rot = Mat3::from_rotation_z(rot_z);
    let half = height / 2.0;

    for seg in 0..segments {
        let a0 = 2.0 * PI * seg as f32 / segments as f32;
        let a1 = 2.0 * PI * (seg + 1) as f32 / segments as f32;
        let r0 = Vec3::new(a0.cos(), 0.0, a0.sin());
        let r1 = Vec3::new(a1.cos(), 0.0, a1.sin());

        // Side quad
        let quad = [
            r0 * radius - Vec3::Y * half,
            r0 * radius + Vec3::Y * half,
            r1 * radius + Vec3::Y * half,
            r1 * radius - Vec3::Y * half,
        ];
        let normals = [r0, r0, r1, r1];
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            push_vertex(out, center + rot * quad[i], rot * normals[i], color);
        }

        // Caps
        for (dir, flip) in [(Vec3::Y, false), (-Vec3::Y, true)] {
            let (b, c) = if flip { (r1, r0) } else { (r0, r1) };
            let tri = [dir * half, b * radius + dir * half, c * radius + dir * half];
            for p in tri {
                push_vertex(out, center + rot * p, rot * dir, color);
            }
        }
    }
}

/// Build the static world decorations: grey guide columns along both sides
/// of the track and a starfield scattered around it. Deterministic for a
/// given seed so restarts keep the same sky.
pub fn decorations(seed: u64, star_count: u32) -> Vec<Vertex> {
    let mut out = Vec::new();

    let mut y = COLUMN_Y_MIN;
    while y <= COLUMN_Y_MAX {
        for x in [-COLUMN_X_OFFSET, COLUMN_X_OFFSET] {
            cylinder(
                &mut out,
                Vec3::new(x, y as f32, 0.0),
                COLUMN_RADIUS,
                COLUMN_HEIGHT,
                8,
                0.0,
                colors::DECOR_COLUMN,
            );
        }
        y += COLUMN_SPACING;
    }

    let mut rng = Pcg32::seed_from_u64(seed);
    for _ in 0..star_count {
        let x = (rng.random::<f32>() - 0.4) * 100.0;
        let y = (rng.random::<f32>() - 0.4) * 800.0;
        let z = (rng.random::<f32>() - 0.4) * 100.0;
        uv_sphere(
            &mut out,
            Vec3::new(x, y, z),
            STAR_RADIUS,
            2,
            4,
            colors::STAR,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_mesh_vertex_count_and_bounds() {
        let mut out = Vec::new();
        let center = Vec3::new(1.0, 2.0, 3.0);
        let half = Vec3::new(0.75, 0.25, 0.25);
        box_mesh(&mut out, center, half, [1.0; 4]);
        assert_eq!(out.len(), 36);
        for v in &out {
            let p = Vec3::from(v.position) - center;
            assert!(p.x.abs() <= half.x + 1e-5);
            assert!(p.y.abs() <= half.y + 1e-5);
            assert!(p.z.abs() <= half.z + 1e-5);
            assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_on_surface() {
        let mut out = Vec::new();
        uv_sphere(&mut out, Vec3::ZERO, 0.3, 8, 16, [1.0; 4]);
        assert_eq!(out.len(), (8 * 16 * 6) as usize);
        for v in &out {
            assert!((Vec3::from(v.position).length() - 0.3).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cylinder_rotation_moves_ends() {
        let mut upright = Vec::new();
        cylinder(&mut upright, Vec3::ZERO, 0.1, 4.0, 8, 0.0, [1.0; 4]);
        let mut tilted = Vec::new();
        cylinder(
            &mut tilted,
            Vec3::ZERO,
            0.1,
            4.0,
            8,
            std::f32::consts::FRAC_PI_2,
            [1.0; 4],
        );

        let max_y = |verts: &[Vertex]| {
            verts
                .iter()
                .map(|v| v.position[1])
                .fold(f32::MIN, f32::max)
        };
        let max_x = |verts: &[Vertex]| {
            verts
                .iter()
                .map(|v| v.position[0])
                .fold(f32::MIN, f32::max)
        };
        // A quarter turn about z swaps the long axis from y to x
        assert!(max_y(&upright) > 1.9 && max_x(&upright) < 0.2);
        assert!(max_x(&tilted) > 1.9 && max_y(&tilted) < 0.2);
    }

    #[test]
    fn test_decorations_deterministic() {
        let a = decorations(42, 100);
        let b = decorations(42, 100);
        assert_eq!(a.len(), b.len());
        assert!(!a.is_empty());
        for (va, vb) in a.iter().zip(&b) {
            assert_eq!(va.position, vb.position);
        }
    }
}
