//! Screen-space queries: pointer picking and label placement.
//!
//! Screen points are logical pixels with the origin at the top left,
//! matching the GUI.

use glam::{DMat4, DVec2, DVec3, DVec4, Mat4 as GlamMat4};
use three_d::Camera;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    /// Unit length.
    pub direction: DVec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
}

/// Combined view-projection matrix of the camera.
pub fn view_projection(camera: &Camera) -> DMat4 {
    let m: [[f32; 4]; 4] = (camera.projection() * camera.view()).into();
    GlamMat4::from_cols_array_2d(&m).as_dmat4()
}

/// Converts a screen point to normalized device coordinates.
fn to_ndc(point: DVec2, screen_size: DVec2) -> DVec2 {
    DVec2::new(
        2.0 * point.x / screen_size.x - 1.0,
        1.0 - 2.0 * point.y / screen_size.y,
    )
}

/// Casts a ray from the camera through a screen point.
///
/// Returns `None` for an empty screen or a degenerate matrix.
pub fn screen_ray(view_projection: DMat4, point: DVec2, screen_size: DVec2) -> Option<Ray> {
    if !(screen_size.x > 0.0 && screen_size.y > 0.0) {
        return None;
    }

    let inverse = view_projection.inverse();
    let ndc = to_ndc(point, screen_size);
    let unproject = |z: f64| -> Option<DVec3> {
        let p = inverse * DVec4::new(ndc.x, ndc.y, z, 1.0);
        (p.w.abs() > f64::EPSILON).then(|| p.truncate() / p.w)
    };

    let near = unproject(-1.0)?;
    let far = unproject(1.0)?;
    let direction = (far - near).try_normalize()?;

    Some(Ray {
        origin: near,
        direction,
    })
}

/// Distance along the ray to the first hit on the sphere, if any.
fn intersect(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let offset = ray.origin - sphere.center;
    let b = offset.dot(ray.direction);
    let c = offset.length_squared() - sphere.radius * sphere.radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    [-b - root, -b + root].into_iter().find(|&t| t >= 0.0)
}

/// Gets the index of the nearest sphere hit by the ray.
pub fn pick(ray: &Ray, spheres: impl IntoIterator<Item = Sphere>) -> Option<usize> {
    spheres
        .into_iter()
        .enumerate()
        .filter_map(|(i, sphere)| intersect(ray, &sphere).map(|t| (i, t)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

/// Projects a world position to a screen point.
///
/// Returns `None` if the position is behind the camera.
pub fn project(view_projection: DMat4, position: DVec3, screen_size: DVec2) -> Option<DVec2> {
    let clip = view_projection * position.extend(1.0);
    if clip.w <= f64::EPSILON {
        return None;
    }

    let ndc = clip.truncate() / clip.w;
    Some(DVec2::new(
        (ndc.x + 1.0) * 0.5 * screen_size.x,
        (1.0 - ndc.y) * 0.5 * screen_size.y,
    ))
}
