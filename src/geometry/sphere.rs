use crate::hittable::{Hittable, Intersections};
use crate::math::*;

use smallvec::smallvec;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out sphere ids starting at 0. ids are never reused, even after a sphere is dropped.
#[derive(Debug, Default)]
pub struct SphereIds {
    next: AtomicUsize,
}

impl SphereIds {
    pub const fn new() -> Self {
        SphereIds {
            next: AtomicUsize::new(0),
        }
    }

    pub fn next_id(&self) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Unit sphere centered at the origin. place it in a scene through a `Transform3`.
#[derive(Debug, PartialEq, Eq)]
pub struct Sphere {
    instance_id: usize,
}

impl Sphere {
    pub fn new(ids: &SphereIds) -> Sphere {
        Sphere {
            instance_id: ids.next_id(),
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Intersections {
        let sphere_to_ray = ray.origin() - Point4::ORIGIN;
        let direction = ray.direction();
        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Intersections::new();
        }
        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b - discriminant_sqrt) / (2.0 * a);
        let t2 = (-b + discriminant_sqrt) / (2.0 * a);
        if t1 <= t2 {
            smallvec![t1, t2]
        } else {
            smallvec![t2, t1]
        }
    }

    fn get_instance_id(&self) -> usize {
        self.instance_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;
    use std::sync::Arc;

    fn along_z(x: f32, y: f32, z: f32) -> Ray {
        Ray::new(Point4::position(x, y, z), Vec4::Z)
    }

    #[test]
    fn test_ray_through_center() {
        let sphere = Sphere::new(&SphereIds::new());
        assert_eq!(sphere.intersect(&along_z(0.0, 0.0, -5.0)).as_slice(), &[4.0, 6.0]);
    }

    #[test]
    fn test_ray_tangent() {
        let sphere = Sphere::new(&SphereIds::new());
        assert_eq!(sphere.intersect(&along_z(0.0, 1.0, -5.0)).as_slice(), &[5.0, 5.0]);
    }

    #[test]
    fn test_ray_misses() {
        let sphere = Sphere::new(&SphereIds::new());
        assert!(sphere.intersect(&along_z(0.0, 2.0, -5.0)).is_empty());
        assert_eq!(sphere.hit(&along_z(0.0, 2.0, -5.0)), None);
    }

    #[test]
    fn test_ray_inside_and_behind() {
        let sphere = Sphere::new(&SphereIds::new());
        assert_eq!(sphere.intersect(&along_z(0.0, 0.0, 0.0)).as_slice(), &[-1.0, 1.0]);
        assert_eq!(sphere.hit(&along_z(0.0, 0.0, 0.0)), Some(1.0));
        assert_eq!(sphere.intersect(&along_z(0.0, 0.0, 5.0)).as_slice(), &[-6.0, -4.0]);
        assert_eq!(sphere.hit(&along_z(0.0, 0.0, 5.0)), None);
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = Sphere::new(&SphereIds::new());
        let ray = Ray::new(Point4::position(0.0, 0.0, -5.0), Vec4::direction(0.0, 0.0, 2.0));
        assert_eq!(sphere.intersect(&ray).as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_transformed_sphere_via_local_ray() {
        let sphere = Sphere::new(&SphereIds::new());
        let transform = Transform3::new(scaling(2.0, 2.0, 2.0)).unwrap();
        let local = transform.to_local(along_z(0.0, 0.0, -5.0));
        assert_eq!(sphere.intersect(&local).as_slice(), &[3.0, 7.0]);

        let transform = Transform3::new(translation(5.0, 0.0, 0.0)).unwrap();
        let local = transform.to_local(along_z(0.0, 0.0, -5.0));
        assert!(sphere.intersect(&local).is_empty());
    }

    #[test]
    fn test_ids_are_sequential() {
        let ids = SphereIds::new();
        let spheres: Vec<Sphere> = (0..3).map(|_| Sphere::new(&ids)).collect();
        let got: Vec<usize> = spheres.iter().map(Hittable::get_instance_id).collect();
        assert_eq!(got, vec![0, 1, 2]);
        drop(spheres);
        assert_eq!(Sphere::new(&ids).get_instance_id(), 3);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let ids = Arc::new(SphereIds::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| Sphere::new(&ids).get_instance_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
