//! Border style for the frameless window chrome
//!
//! A small value object holding the drawn border's thickness, corner
//! radius, and fill color. Thickness and radius are always clamped to
//! the configured minimums; the color falls back to a caller-supplied
//! default when unset.

/// RGBA color with channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 && digits.len() != 8 {
            return None;
        }
        let channel = |i: usize| -> Option<f64> {
            let byte = u8::from_str_radix(digits.get(i..i + 2)?, 16).ok()?;
            Some(byte as f64 / 255.0)
        };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 1.0 },
        })
    }

    /// All channels finite and within `[0.0, 1.0]`.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Border style for a frameless rounded-border widget.
///
/// Constructed with defaults and mutated only through [`BorderStyle::merge`]
/// and [`BorderStyle::apply`], both of which clamp thickness and radius to
/// the minimums and reject invalid colors with a diagnostic instead of
/// panicking or partially applying.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyle {
    thickness: u32,
    radius: u32,
    color: Option<Color>,
}

impl BorderStyle {
    pub const MIN_THICKNESS: u32 = 5;
    pub const MIN_RADIUS: u32 = 5;

    pub fn new() -> Self {
        Self {
            thickness: Self::MIN_THICKNESS,
            radius: Self::MIN_RADIUS,
            color: None,
        }
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness.max(Self::MIN_THICKNESS);
        self
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius.max(Self::MIN_RADIUS);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        if color.is_valid() {
            self.color = Some(color);
        } else {
            log::warn!("BorderStyle: ignoring invalid color {:?}", color);
        }
        self
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Resolved fill color: the explicit color, or `fallback` when unset.
    pub fn fill(&self, fallback: Color) -> Color {
        self.color.unwrap_or(fallback)
    }

    /// Apply individual overrides. `None` fields keep their current value.
    ///
    /// An already-set color is only replaced by an explicit new color;
    /// while the color is unset, `fallback_color` is adopted when no
    /// explicit color is given. An invalid color is rejected as a no-op
    /// with a diagnostic and the previous style is retained.
    pub fn apply(
        &mut self,
        thickness: Option<u32>,
        radius: Option<u32>,
        color: Option<Color>,
        fallback_color: Option<Color>,
    ) {
        if let Some(c) = color.or(if self.color.is_none() {
            fallback_color
        } else {
            None
        }) {
            if c.is_valid() {
                self.color = Some(c);
            } else {
                log::warn!("BorderStyle: rejected invalid color {:?}, keeping previous", c);
                return;
            }
        }

        if let Some(t) = thickness {
            self.thickness = t.max(Self::MIN_THICKNESS);
        }

        if let Some(r) = radius {
            self.radius = r.max(Self::MIN_RADIUS);
        }
    }

    /// Copy all fields from another style, re-applying the clamps.
    pub fn merge(&mut self, other: &BorderStyle, fallback_color: Option<Color>) {
        self.apply(
            Some(other.thickness),
            Some(other.radius),
            other.color,
            fallback_color,
        );
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::new()
    }
}
