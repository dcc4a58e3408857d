use crate::math::Ray;

use smallvec::SmallVec;

/// Intersection times along a ray, in ascending order. a convex shape produces at most two.
pub type Intersections = SmallVec<[f32; 2]>;

pub trait Hittable {
    /// every `t` where the ray meets the surface, including negative ones behind the origin.
    fn intersect(&self, ray: &Ray) -> Intersections;
    fn get_instance_id(&self) -> usize;

    fn hit(&self, ray: &Ray) -> Option<f32> {
        self.intersect(ray).into_iter().find(|t| *t >= 0.0)
    }
}
