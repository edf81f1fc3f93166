//! Rainbow color ramp over the iteration range.

const COLOR_CAP: u8 = 255;

/// Number of bands between the eight anchors.
pub const RAIN_RINGS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

pub const RED: Rgb = Rgb::new(COLOR_CAP, 0, 0);
pub const ORANGE: Rgb = Rgb::new(COLOR_CAP, COLOR_CAP / 2, 0);
pub const YELLOW: Rgb = Rgb::new(COLOR_CAP, COLOR_CAP, 0);
pub const GREEN: Rgb = Rgb::new(0, COLOR_CAP, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, COLOR_CAP);
pub const INDIGO: Rgb = Rgb::new(COLOR_CAP / 3, 0, COLOR_CAP / 2);
pub const VIOLET: Rgb = Rgb::new(COLOR_CAP / 2, 0, COLOR_CAP);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

pub const ANCHORS: [Rgb; RAIN_RINGS as usize + 1] =
    [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET, BLACK];

/// Color `i / range` of the way from `start` to `end`.
pub fn fade(start: Rgb, end: Rgb, i: u32, range: u32) -> Rgb {
    let channel = |s: u8, e: u8| {
        let s = s as i64;
        let e = e as i64;
        (s + i as i64 * (e - s) / range as i64) as u8
    };
    Rgb {
        r: channel(start.r, end.r),
        g: channel(start.g, end.g),
        b: channel(start.b, end.b),
    }
}

/// Splits `[0, max_iterations]` into seven equal bands and fades across
/// each one. Counts past the last full band saturate at the final anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    band_width: u32,
}

impl ColorRamp {
    pub fn new(max_iterations: u32) -> Self {
        ColorRamp { band_width: max_iterations / RAIN_RINGS }
    }

    pub fn band_width(&self) -> u32 {
        self.band_width
    }

    pub fn color(&self, count: u32) -> Rgb {
        let band = (count / self.band_width).min(RAIN_RINGS - 1);
        let offset = (count - band * self.band_width).min(self.band_width);
        let band = band as usize;
        fade(ANCHORS[band], ANCHORS[band + 1], offset, self.band_width)
    }
}
