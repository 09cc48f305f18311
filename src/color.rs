//! Readable card colors.
//!
//! Every card gets a random vivid background. The foreground is whichever of
//! pure white or pure black has the higher WCAG contrast ratio against that
//! background, so generated cards are always legible.

use rand::Rng;
use serde::Serialize;

/// Pure white foreground candidate.
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Pure black foreground candidate.
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// A color in HSL space (hue in degrees, saturation/lightness in percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Background/foreground pair for one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardColors {
    pub background: Hsl,
    pub foreground: Rgb,
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let k = |n: f64| (n + self.h / 30.0) % 12.0;
        let a = s * l.min(1.0 - l);
        let f = |n: f64| l - a * (-1.0_f64).max((k(n) - 3.0).min((9.0 - k(n)).min(1.0)));
        Rgb {
            r: (255.0 * f(0.0)).round() as u8,
            g: (255.0 * f(8.0)).round() as u8,
            b: (255.0 * f(4.0)).round() as u8,
        }
    }
}

/// WCAG relative luminance of an sRGB color.
pub fn relative_luminance(color: Rgb) -> f64 {
    fn channel(v: u8) -> f64 {
        let c = v as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(color.r) + 0.7152 * channel(color.g) + 0.0722 * channel(color.b)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let hi = l1.max(l2);
    let lo = l1.min(l2);
    (hi + 0.05) / (lo + 0.05)
}

/// Sample a card background and pick the higher-contrast foreground for it.
pub fn readable_colors<R: Rng>(rng: &mut R) -> CardColors {
    let background = Hsl {
        h: rng.gen_range(0..360) as f64,
        s: rng.gen_range(70..95) as f64,
        l: rng.gen_range(48..58) as f64,
    };
    let rgb = background.to_rgb();
    let foreground = if contrast_ratio(rgb, WHITE) >= contrast_ratio(rgb, BLACK) {
        WHITE
    } else {
        BLACK
    };
    CardColors {
        background,
        foreground,
    }
}

/// [`readable_colors`] with the thread-local RNG.
pub fn random_readable_colors() -> CardColors {
    readable_colors(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hsl_to_rgb_primaries() {
        let red = Hsl {
            h: 0.0,
            s: 100.0,
            l: 50.0,
        };
        assert_eq!(red.to_rgb(), Rgb { r: 255, g: 0, b: 0 });

        let green = Hsl {
            h: 120.0,
            s: 100.0,
            l: 50.0,
        };
        assert_eq!(green.to_rgb(), Rgb { r: 0, g: 255, b: 0 });

        let blue = Hsl {
            h: 240.0,
            s: 100.0,
            l: 50.0,
        };
        assert_eq!(blue.to_rgb(), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_hsl_to_rgb_grays() {
        let white = Hsl {
            h: 0.0,
            s: 0.0,
            l: 100.0,
        };
        assert_eq!(white.to_rgb(), WHITE);

        let black = Hsl {
            h: 180.0,
            s: 0.0,
            l: 0.0,
        };
        assert_eq!(black.to_rgb(), BLACK);
    }

    #[test]
    fn test_luminance_extremes() {
        assert!((relative_luminance(WHITE) - 1.0).abs() < 1e-9);
        assert!(relative_luminance(BLACK).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_white_on_black() {
        let ratio = contrast_ratio(WHITE, BLACK);
        assert!((ratio - 21.0).abs() < 1e-9);
        // Symmetric
        assert_eq!(ratio, contrast_ratio(BLACK, WHITE));
    }

    #[test]
    fn test_foreground_always_wins_contrast() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let colors = readable_colors(&mut rng);
            let bg = colors.background.to_rgb();
            let chosen = contrast_ratio(bg, colors.foreground);
            let rejected = if colors.foreground == WHITE {
                contrast_ratio(bg, BLACK)
            } else {
                contrast_ratio(bg, WHITE)
            };
            assert!(
                chosen >= rejected,
                "foreground {:?} loses against {:?}",
                colors.foreground,
                colors.background
            );
        }
    }

    #[test]
    fn test_sampling_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let colors = readable_colors(&mut rng);
            let Hsl { h, s, l } = colors.background;
            assert!((0.0..360.0).contains(&h));
            assert!((70.0..95.0).contains(&s));
            assert!((48.0..58.0).contains(&l));
        }
    }
}
