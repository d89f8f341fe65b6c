use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Index of a selectable object in the scene.
///
/// Objects are created once and never removed, so an id stays valid for the
/// lifetime of the scene that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Model matrix (scale, then rotation, then translation).
    pub fn matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Error parsing a `#rrggbb` color string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have exactly 6 hex digits")]
    BadLength(String),
    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// RGB color in sRGB space, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` integer.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Packed `0xRRGGBB` value, each channel rounded to the nearest byte.
    pub fn to_hex(self) -> u32 {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.r) << 16) | (byte(self.g) << 8) | byte(self.b)
    }

    /// Build from hue, saturation, lightness. Hue wraps into `[0, 1)`,
    /// saturation and lightness are clamped to `[0, 1]`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let lo = 2.0 * l - hi;

        Self {
            r: hue_to_channel(lo, hi, h + 1.0 / 3.0),
            g: hue_to_channel(lo, hi, h),
            b: hue_to_channel(lo, hi, h - 1.0 / 3.0),
        }
    }

    /// Linear-light components, for writing into an sRGB render target.
    pub fn to_linear(self) -> [f32; 3] {
        let decode = |c: f32| {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        [decode(self.r), decode(self.g), decode(self.b)]
    }
}

fn hue_to_channel(lo: f32, hi: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(s.to_string()));
        }
        let hex =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        Ok(Self::from_hex(hex))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.matrix(), glam::Mat4::IDENTITY);
    }

    #[test]
    fn object_id_indexes() {
        assert_eq!(ObjectId(4).index(), 4);
        assert_eq!(ObjectId(4).to_string(), "#4");
    }

    #[test]
    fn hex_round_trip_gold() {
        let gold = Color::from_hex(0xffd700);
        assert_eq!(gold.r, 1.0);
        assert_eq!(gold.b, 0.0);
        assert_eq!(gold.to_hex(), 0xffd700);
        assert_eq!(gold.to_string(), "#ffd700");
    }

    #[test]
    fn hsl_primary_hues() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        assert_eq!(red.to_hex(), 0xff0000);
        let green = Color::from_hsl(1.0 / 3.0, 1.0, 0.5);
        assert_eq!(green.to_hex(), 0x00ff00);
        let blue = Color::from_hsl(2.0 / 3.0, 1.0, 0.5);
        assert_eq!(blue.to_hex(), 0x0000ff);
    }

    #[test]
    fn hsl_zero_saturation_is_gray() {
        let gray = Color::from_hsl(0.42, 0.0, 0.6);
        assert_eq!(gray.r, 0.6);
        assert_eq!(gray.g, 0.6);
        assert_eq!(gray.b, 0.6);
    }

    #[test]
    fn hsl_hue_wraps() {
        assert_eq!(Color::from_hsl(1.25, 0.8, 0.6), Color::from_hsl(0.25, 0.8, 0.6));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            "ffd700".parse::<Color>(),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            "#ffd7".parse::<Color>(),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            "#ffd7zz".parse::<Color>(),
            Err(ColorParseError::BadDigit(_))
        ));
        assert_eq!("#2c3e50".parse::<Color>().unwrap().to_hex(), 0x2c3e50);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let [r, g, b] = Color::WHITE.to_linear();
        assert!((r - 1.0).abs() < 1e-6 && (g - 1.0).abs() < 1e-6 && (b - 1.0).abs() < 1e-6);
    }
}
