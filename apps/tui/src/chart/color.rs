use std::fmt;

/// 8-bit RGB color with a straight (non-premultiplied) alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Gray shade used for grid and legend strokes.
    pub const fn gray(level: u8) -> Self {
        Self::opaque(level, level, level)
    }

    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Composite over an opaque background, dropping the alpha channel.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn over(self, background: Self) -> Self {
        let alpha = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            f32::from(fg)
                .mul_add(alpha, f32::from(bg) * (1.0 - alpha))
                .round() as u8
        };
        Self::opaque(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// CSS notation: `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_notation_depends_on_alpha() {
        assert_eq!(Rgba::opaque(0x4f, 0x46, 0xe5).to_css(), "#4f46e5");
        assert_eq!(Rgba::new(79, 70, 229, 0.3).to_css(), "rgba(79,70,229,0.3)");
        assert_eq!(Rgba::gray(0x99).to_string(), "#999999");
    }

    #[test]
    fn compositing_blends_toward_background() {
        let black = Rgba::opaque(0, 0, 0);
        let white = Rgba::opaque(255, 255, 255);

        assert_eq!(Rgba::new(200, 100, 50, 0.5).over(black), Rgba::opaque(100, 50, 25));
        assert_eq!(Rgba::new(0, 0, 0, 0.0).over(white), white);
        assert_eq!(Rgba::opaque(1, 2, 3).over(white), Rgba::opaque(1, 2, 3));
    }
}
