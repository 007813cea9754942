//! Fixed "jet"-like color map used by field projection
//!
//! 256 data steps (indices 0..=256 inclusive, the top index being the clamp
//! target) followed by one reserved barrier color. Colors are also kept packed
//! as ABGR so the projection loop is a single table lookup per pixel.

/// Number of data color steps
pub const N_COLORS: usize = 256;
/// Reserved slot for solid cells; not part of the ramp
pub const BARRIER_INDEX: usize = N_COLORS + 1;
pub const PALETTE_LEN: usize = N_COLORS + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// ABGR packing (little-endian bytes [R, G, B, A]) for direct canvas copy
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: Vec<Rgb>,
    packed: Vec<u32>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::jet()
    }
}

impl ColorPalette {
    /// Blue → cyan → yellow → red ramp in five bands of `N_COLORS/8`,
    /// `N_COLORS/4`, `N_COLORS/4`, `N_COLORS/4` and `N_COLORS/8 + 1` steps.
    pub fn jet() -> Self {
        let n = N_COLORS as i32;
        let eighth = n / 8;
        let quarter = n / 4;

        let mut colors = vec![Rgb::BLACK; PALETTE_LEN];
        for c in 0..=n {
            let (r, g, b) = if c < eighth {
                (0, 0, 255 * (c + eighth) / quarter)
            } else if c < 3 * eighth {
                (0, 255 * (c - eighth) / quarter, 255)
            } else if c < 5 * eighth {
                let r = 255 * (c - 3 * eighth) / quarter;
                (r, 255, 255 - r)
            } else if c < 7 * eighth {
                (255, 255 * (7 * eighth - c) / quarter, 0)
            } else {
                (255 * (9 * eighth - c) / quarter, 0, 0)
            };
            colors[c as usize] = Rgb {
                r: r as u8,
                g: g as u8,
                b: b as u8,
            };
        }
        colors[BARRIER_INDEX] = Rgb::BLACK;

        let packed = colors.iter().map(|c| c.to_abgr()).collect();
        Self { colors, packed }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index.min(BARRIER_INDEX)]
    }

    #[inline]
    pub fn packed(&self, index: usize) -> u32 {
        self.packed[index.min(BARRIER_INDEX)]
    }

    #[inline]
    pub fn barrier(&self) -> Rgb {
        self.colors[BARRIER_INDEX]
    }

    /// Which of the five ramp bands a data index falls into
    pub fn band(index: usize) -> usize {
        let eighth = N_COLORS / 8;
        match index {
            i if i < eighth => 0,
            i if i < 3 * eighth => 1,
            i if i < 5 * eighth => 2,
            i if i < 7 * eighth => 3,
            _ => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_data_steps_plus_barrier_slot() {
        let palette = ColorPalette::jet();
        assert_eq!(palette.len(), 258);
        assert_eq!(palette.barrier(), Rgb::BLACK);
        assert_eq!(palette.packed(BARRIER_INDEX), 0xFF00_0000);
    }

    #[test]
    fn channels_are_monotonic_within_each_band() {
        let palette = ColorPalette::jet();
        for c in 1..=N_COLORS {
            if ColorPalette::band(c) != ColorPalette::band(c - 1) {
                continue;
            }
            let prev = palette.color(c - 1);
            let cur = palette.color(c);
            match ColorPalette::band(c) {
                0 => assert!(cur.b >= prev.b, "blue rises in band 0 at {c}"),
                1 => assert!(cur.g >= prev.g, "green rises in band 1 at {c}"),
                2 => {
                    assert!(cur.r >= prev.r, "red rises in band 2 at {c}");
                    assert!(cur.b <= prev.b, "blue falls in band 2 at {c}");
                }
                3 => assert!(cur.g <= prev.g, "green falls in band 3 at {c}"),
                _ => assert!(cur.r <= prev.r, "red falls in band 4 at {c}"),
            }
        }
    }

    #[test]
    fn ramp_endpoints() {
        let palette = ColorPalette::jet();
        assert_eq!(palette.color(0), Rgb { r: 0, g: 0, b: 127 });
        assert_eq!(palette.color(128), Rgb { r: 127, g: 255, b: 128 });
        assert_eq!(palette.color(N_COLORS), Rgb { r: 127, g: 0, b: 0 });
    }

    #[test]
    fn abgr_packing_puts_red_in_low_byte() {
        let c = Rgb { r: 0x11, g: 0x22, b: 0x33 };
        assert_eq!(c.to_abgr(), 0xFF33_2211);
    }
}
