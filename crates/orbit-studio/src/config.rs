use orbit_engine::paint::Color;

/// Which scene object the studio shows.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Variant {
    /// Full-screen plane with the vertical gradient shader.
    #[default]
    Plane,
    /// Yellow wireframe unit box seen from `(0, 1, 5)`.
    Box,
}

/// How the camera is driven between frames.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CameraRig {
    /// Drag to orbit, wheel to dolly.
    #[default]
    Orbit,
    /// Camera follows the normalized cursor and looks at the origin.
    CursorLook,
}

/// Studio configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub variant: Variant,
    pub camera_rig: CameraRig,
    pub damping: bool,

    /// Manual spin of the object around Y, radians per second. `0` disables it.
    pub spin_speed: f32,

    /// Uploaded to the shader; unused by the default gradient.
    pub tint: Color,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Plane,
            camera_rig: CameraRig::Orbit,
            damping: true,
            spin_speed: 0.0,
            tint: Color::WHITE,
        }
    }
}

impl StudioConfig {
    /// Defaults with `ORBIT_*` environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Unknown values are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ORBIT_VARIANT") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "plane" => self.variant = Variant::Plane,
                "box" => self.variant = Variant::Box,
                other => log::warn!("ORBIT_VARIANT: unknown value {other:?}, keeping {:?}", self.variant),
            }
        }

        if let Some(raw) = lookup("ORBIT_CAMERA") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "orbit" => self.camera_rig = CameraRig::Orbit,
                "cursor" => self.camera_rig = CameraRig::CursorLook,
                other => log::warn!("ORBIT_CAMERA: unknown value {other:?}, keeping {:?}", self.camera_rig),
            }
        }

        if let Some(raw) = lookup("ORBIT_DAMPING") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "on" | "1" | "true" => self.damping = true,
                "off" | "0" | "false" => self.damping = false,
                other => log::warn!("ORBIT_DAMPING: unknown value {other:?}, keeping {}", self.damping),
            }
        }

        if let Some(raw) = lookup("ORBIT_SPIN") {
            match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => self.spin_speed = v,
                _ => log::warn!("ORBIT_SPIN: expected radians per second, got {raw:?}"),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn defaults_show_the_damped_plane() {
        let cfg = StudioConfig::default();
        assert_eq!(cfg.variant, Variant::Plane);
        assert_eq!(cfg.camera_rig, CameraRig::Orbit);
        assert!(cfg.damping);
        assert_eq!(cfg.spin_speed, 0.0);
    }

    #[test]
    fn overrides_are_case_insensitive() {
        let cfg = StudioConfig::default().with_overrides(lookup(&[
            ("ORBIT_VARIANT", "Box"),
            ("ORBIT_CAMERA", " cursor "),
            ("ORBIT_DAMPING", "OFF"),
            ("ORBIT_SPIN", "1.0"),
        ]));
        assert_eq!(cfg.variant, Variant::Box);
        assert_eq!(cfg.camera_rig, CameraRig::CursorLook);
        assert!(!cfg.damping);
        assert_eq!(cfg.spin_speed, 1.0);
    }

    #[test]
    fn unknown_values_keep_defaults() {
        let cfg = StudioConfig::default().with_overrides(lookup(&[
            ("ORBIT_VARIANT", "sphere"),
            ("ORBIT_DAMPING", "maybe"),
            ("ORBIT_SPIN", "fast"),
        ]));
        assert_eq!(cfg, StudioConfig::default());
    }
}
