use crate::foundation::math::unit_to_u8;

/// Straight 8-bit-per-channel RGB color. Panels have no alpha plane; blending is explicit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb888 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb888 {
    /// Pure black (all channels off).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Return `true` when every channel is zero.
    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Per-channel linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Halve every channel (used for dimmed trail copies).
    pub fn halved(self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2)
    }

    /// Quantize through RGB565 and back, matching what a packed canvas stores.
    pub fn quantized(self) -> Self {
        Rgb565::from(self).into()
    }
}

/// Packed 5-6-5 color as stored by HUB75 panel drivers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl From<Rgb888> for Rgb565 {
    fn from(c: Rgb888) -> Self {
        Self((u16::from(c.r & 0xF8) << 8) | (u16::from(c.g & 0xFC) << 3) | u16::from(c.b >> 3))
    }
}

impl From<Rgb565> for Rgb888 {
    fn from(c: Rgb565) -> Self {
        let v = c.0;
        Self::new(
            ((v >> 11) << 3) as u8,
            (((v >> 5) & 0x3F) << 2) as u8,
            ((v & 0x1F) << 3) as u8,
        )
    }
}

/// HSL to RGB. `h` wraps modulo 1; `s` and `l` are clamped to `[0, 1]`.
///
/// Channels are truncated rather than rounded.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb888 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Rgb888::gray(unit_to_u8(l));
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Rgb888::new(
        unit_to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        unit_to_u8(hue_to_rgb(p, q, h)),
        unit_to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Composite `fg` over `bg`: `fg*alpha/255 + bg*(255-alpha)/255` per channel.
pub fn blend(bg: Rgb888, fg: Rgb888, alpha: u8) -> Rgb888 {
    match alpha {
        255 => fg,
        0 => bg,
        _ => {
            let a = u16::from(alpha);
            let inv = 255 - a;
            let mix = |f: u8, b: u8| {
                let sum = u32::from(f) * u32::from(a) + u32::from(b) * u32::from(inv);
                ((sum + 127) / 255) as u8
            };
            Rgb888::new(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
