use crate::math::{MathError, Transform3, TransformStack};

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config file: {0}")]
    Io(#[from] io::Error),
    #[error("couldn't parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TransformData {
    Translate { x: f32, y: f32, z: f32 },
    Scale { x: f32, y: f32, z: f32 },
    RotateX { radians: f32 },
    RotateY { radians: f32 },
    RotateZ { radians: f32 },
    Shear {
        xy: f32,
        xz: f32,
        yx: f32,
        yz: f32,
        zx: f32,
        zy: f32,
    },
}

impl TransformData {
    pub fn push_onto(&self, stack: TransformStack) -> TransformStack {
        match *self {
            TransformData::Translate { x, y, z } => stack.translate(x, y, z),
            TransformData::Scale { x, y, z } => stack.scale(x, y, z),
            TransformData::RotateX { radians } => stack.rotate_x(radians),
            TransformData::RotateY { radians } => stack.rotate_y(radians),
            TransformData::RotateZ { radians } => stack.rotate_z(radians),
            TransformData::Shear {
                xy,
                xz,
                yx,
                yz,
                zx,
                zy,
            } => stack.shear(xy, xz, yx, yz, zx, zy),
        }
    }
}

/// Composes the listed transforms in order, the first entry being applied first.
pub fn build_transform(transforms: &[TransformData]) -> Result<Transform3, MathError> {
    let stack = transforms
        .iter()
        .fold(TransformStack::new(), |stack, data| data.push_onto(stack));
    Transform3::try_from(stack)
}

#[derive(Deserialize, Clone, Debug)]
pub struct ProjectileSettings {
    pub filename: String,
    pub width: usize,
    pub height: usize,
    pub start: [f32; 3],
    pub velocity: [f32; 3],
    pub velocity_scale: f32,
    pub gravity: [f32; 3],
    pub wind: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Deserialize, Clone, Debug)]
pub struct ClockSettings {
    pub filename: String,
    pub size: usize,
    pub radius_fraction: f32,
    pub color: [f32; 3],
}

#[derive(Deserialize, Clone, Debug)]
pub struct SilhouetteSettings {
    pub filename: String,
    pub size: usize,
    pub wall_z: f32,
    pub wall_size: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub transforms: Vec<TransformData>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum SceneSettings {
    Projectile(ProjectileSettings),
    Clock(ClockSettings),
    Silhouette(SilhouetteSettings),
}

impl SceneSettings {
    pub fn filename(&self) -> &str {
        match self {
            SceneSettings::Projectile(settings) => &settings.filename,
            SceneSettings::Clock(settings) => &settings.filename,
            SceneSettings::Silhouette(settings) => &settings.filename,
        }
    }

    /// the filename without its directory or extension, used by `--only`.
    pub fn name(&self) -> &str {
        Path::new(self.filename())
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_else(|| self.filename())
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub output_directory: String,
    pub threads: Option<u16>,
    pub scenes: Vec<SceneSettings>,
}

pub fn parse_settings(input: &str) -> Result<Config, ConfigError> {
    let mut settings: Config = toml::from_str(input)?;
    if settings.threads.is_none() {
        settings.threads = Some(num_cpus::get() as u16);
    }
    Ok(settings)
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> Result<Config, ConfigError> {
    let mut input = String::new();
    File::open(filepath)?.read_to_string(&mut input)?;
    parse_settings(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{rotation_z, translation, Point4, PI};

    #[test]
    fn test_parsing_config() {
        let settings = get_settings("data/config.toml").unwrap();
        assert!(settings.threads.unwrap() > 0);
        assert!(!settings.scenes.is_empty());
        for scene in &settings.scenes {
            assert!(!scene.filename().is_empty());
        }
    }

    #[test]
    fn test_threads_default_to_cpu_count() {
        let settings = parse_settings("output_directory = \"output\"\nscenes = []\n").unwrap();
        assert_eq!(settings.threads, Some(num_cpus::get() as u16));

        let settings =
            parse_settings("output_directory = \"output\"\nthreads = 3\nscenes = []\n").unwrap();
        assert_eq!(settings.threads, Some(3));
    }

    #[test]
    fn test_tagged_scenes() {
        let input = r#"
output_directory = "output"

[[scenes]]
type = "Clock"
filename = "clock.ppm"
size = 100
radius_fraction = 0.375
color = [1.0, 1.0, 1.0]

[[scenes]]
type = "Silhouette"
filename = "renders/sphere.png"
size = 50
wall_z = 10.0
wall_size = 7.0
color = [1.0, 0.0, 0.0]
transforms = [
    { type = "Scale", x = 1.0, y = 0.5, z = 1.0 },
    { type = "RotateZ", radians = 0.5 },
]
"#;
        let settings = parse_settings(input).unwrap();
        assert_eq!(settings.scenes.len(), 2);
        assert!(matches!(settings.scenes[0], SceneSettings::Clock(ClockSettings { size: 100, .. })));
        assert_eq!(settings.scenes[0].name(), "clock");
        assert_eq!(settings.scenes[1].name(), "sphere");
        match &settings.scenes[1] {
            SceneSettings::Silhouette(silhouette) => {
                assert_eq!(
                    silhouette.transforms,
                    vec![
                        TransformData::Scale { x: 1.0, y: 0.5, z: 1.0 },
                        TransformData::RotateZ { radians: 0.5 },
                    ]
                );
            }
            other => panic!("expected a silhouette, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_scene_type_is_rejected() {
        let input = "output_directory = \"out\"\n[[scenes]]\ntype = \"Teapot\"\nfilename = \"t.ppm\"\n";
        assert!(matches!(parse_settings(input), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_build_transform_in_order() {
        let transform = build_transform(&[
            TransformData::Translate { x: 1.0, y: 0.0, z: 0.0 },
            TransformData::RotateZ { radians: PI },
        ])
        .unwrap();
        let expected = rotation_z(PI) * translation(1.0, 0.0, 0.0);
        let p = Point4::position(1.0, 2.0, 0.0);
        let got = transform.to_world(p);
        let want = expected * p;
        for i in 0..4 {
            assert!((got.at(i) - want.at(i)).abs() < 1e-5);
        }

        let singular = [TransformData::Scale { x: 0.0, y: 1.0, z: 1.0 }];
        assert_eq!(build_transform(&singular), Err(MathError::DegenerateInverse));
        assert_eq!(build_transform(&[]).unwrap(), Transform3::IDENTITY);
    }
}
