use super::camera::{pixel_to_ndc, Camera, Ray};
use super::cube::face_for_axis;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

/// Invisible pick volume: an axis-aligned box in model space, placed in the
/// world by `model`. Face indices match the visible cube's material slots.
#[derive(Clone, Copy, Debug)]
pub struct ProxyVolume {
    pub half_extent: f32,
    pub model: Mat4,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceHit {
    pub face: usize,
    pub distance: f32,
}

impl ProxyVolume {
    pub fn new(edge: f32, model: Mat4) -> Self {
        Self {
            half_extent: edge * 0.5,
            model,
        }
    }

    /// All surface crossings of `ray`, nearest first. The box is treated as
    /// double-sided, so both the entry and the exit face are reported.
    pub fn intersect(&self, ray: &Ray) -> SmallVec<[FaceHit; 2]> {
        let mut hits = SmallVec::new();
        let inv = self.model.inverse();
        let o = inv.transform_point3(ray.origin);
        let d = inv.transform_vector3(ray.dir);
        let h = self.half_extent;

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut near_face = 0usize;
        let mut far_face = 0usize;
        for axis in 0..3 {
            let (oa, da) = (o[axis], d[axis]);
            if da.abs() < 1e-8 {
                if oa < -h || oa > h {
                    return hits;
                }
                continue;
            }
            let t0 = (-h - oa) / da;
            let t1 = (h - oa) / da;
            // Moving toward -axis enters through the + face.
            let (t_in, t_out, in_face, out_face) = if da < 0.0 {
                (t1, t0, face_for_axis(axis, true), face_for_axis(axis, false))
            } else {
                (t0, t1, face_for_axis(axis, false), face_for_axis(axis, true))
            };
            if t_in > t_near {
                t_near = t_in;
                near_face = in_face;
            }
            if t_out < t_far {
                t_far = t_out;
                far_face = out_face;
            }
            if t_near > t_far {
                return hits;
            }
        }
        // An affine transform keeps the ray parameter, so local t is the
        // world distance along the unit world direction.
        if t_near >= 0.0 {
            hits.push(FaceHit {
                face: near_face,
                distance: t_near,
            });
        }
        if t_far >= 0.0 {
            hits.push(FaceHit {
                face: far_face,
                distance: t_far,
            });
        }
        hits
    }
}

/// Face under the pointer at viewport pixel (`px`, `py`), if any.
///
/// Shared by hover and click so both agree on the face under the cursor.
pub fn resolve(
    px: f32,
    py: f32,
    viewport_w: f32,
    viewport_h: f32,
    camera: &Camera,
    proxy: &ProxyVolume,
) -> Option<usize> {
    let ndc = pixel_to_ndc(px, py, viewport_w, viewport_h)?;
    let ray = camera.ray_through_ndc(ndc);
    if !ray.dir.is_finite() {
        return None;
    }
    proxy.intersect(&ray).first().map(|h| h.face)
}

/// World-space center of `face` on a box of edge `edge` placed by `model`.
pub fn face_center_world(face: usize, edge: f32, model: Mat4) -> Vec3 {
    model.transform_point3(super::cube::face_center(face, edge * 0.5))
}
