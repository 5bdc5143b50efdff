use glam::Vec3;

/// Values a keyframe track can blend between.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    /// Catmull-Rom spline through `p1`..`p2`, shaped by the neighbours
    /// `p0` and `p3`.
    fn interpolate_catmull_rom(p0: Self, p1: Self, p2: Self, p3: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }

    fn interpolate_catmull_rom(p0: Self, p1: Self, p2: Self, p3: Self, t: f32) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        0.5 * (2.0 * p1
            + (p2 - p0) * t
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
            + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn interpolate_catmull_rom(p0: Self, p1: Self, p2: Self, p3: Self, t: f32) -> Self {
        Vec3::new(
            f32::interpolate_catmull_rom(p0.x, p1.x, p2.x, p3.x, t),
            f32::interpolate_catmull_rom(p0.y, p1.y, p2.y, p3.y, t),
            f32::interpolate_catmull_rom(p0.z, p1.z, p2.z, p3.z, t),
        )
    }
}
