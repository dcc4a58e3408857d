pub mod canvas;
pub mod config;
pub mod geometry;
pub mod hittable;
pub mod math;
pub mod prelude;
pub mod scenes;
pub mod vec2d;
