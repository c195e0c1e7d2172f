/// Color of a drawn pixel, either as RGB bytes or as an HSV triple that is
/// converted at draw time. Alpha is always opaque in the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    /// `h` in degrees `[0, 360)`, `s` and `v` as bytes.
    Hsv { h: f32, s: u8, v: u8 },
}

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    pub const fn hsv(h: f32, s: u8, v: u8) -> Self {
        Color::Hsv { h, s, v }
    }

    /// Resolves the color to RGB channel bytes.
    pub fn channels(self) -> [u8; 3] {
        match self {
            Color::Rgb { r, g, b } => [r, g, b],
            Color::Hsv { h, s, v } => hsv_to_rgb(h, s, v),
        }
    }
}

/// Standard sector decomposition of the HSV cone.
fn hsv_to_rgb(h: f32, s: u8, v: u8) -> [u8; 3] {
    if s == 0 {
        return [v, v, v];
    }

    let s = s as f32 / 255.;
    let v = v as f32 / 255.;
    let h = (h.rem_euclid(360.)) / 60.;
    let i = h.floor();
    let f = h - i;

    let p = v * (1. - s);
    let q = v * (1. - s * f);
    let t = v * (1. - s * (1. - f));

    let (r, g, b) = match i as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [
        (r * 255.).round() as u8,
        (g * 255.).round() as u8,
        (b * 255.).round() as u8,
    ]
}
