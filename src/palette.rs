//! Palette derivation: shade/tint/tone ramps, harmony sets, and random
//! palettes.
//!
//! Everything routes through the `Rgb`/`Hsl` conversions in
//! [`crate::color`] so the whole crate shares one source of numeric truth.
//! Hue arithmetic wraps modulo 360.

use rand::Rng;

use crate::color::{Hsl, Rgb};

/// 10 steps toward black, starting just below the base color and ending at
/// pure black. Each channel is scaled by 0.9, 0.8, … 0.0.
pub fn shades(base: Rgb) -> [Rgb; 10] {
    std::array::from_fn(|i| {
        let factor = (9 - i) as f64 / 10.0;
        scale_toward(base, 0.0, factor)
    })
}

/// 10 steps toward white, starting at the base color. Each channel moves
/// `(255 - channel) * factor` for factors 0.0, 0.1, … 0.9.
pub fn tints(base: Rgb) -> [Rgb; 10] {
    std::array::from_fn(|i| scale_toward(base, 255.0, 1.0 - i as f64 / 10.0))
}

/// 10 steps toward mid-gray (128), starting at the base color.
pub fn tones(base: Rgb) -> [Rgb; 10] {
    std::array::from_fn(|i| scale_toward(base, 128.0, 1.0 - i as f64 / 10.0))
}

// Interpolate each channel toward `target`, keeping `factor` of the
// original distance.
fn scale_toward(base: Rgb, target: f64, factor: f64) -> Rgb {
    let mix = |c: u8| (target + (c as f64 - target) * factor).round() as u8;
    Rgb::new(mix(base.r), mix(base.g), mix(base.b))
}

/// 5 colors at hue offsets −60°, −30°, 0°, +30°, +60° from the base.
pub fn analogous(base: Rgb) -> [Rgb; 5] {
    let hsl = Hsl::from(base);
    std::array::from_fn(|i| shifted(hsl, (i as i32 - 2) * 30))
}

/// The base color and its opposite on the hue circle.
pub fn complementary(base: Rgb) -> [Rgb; 2] {
    [base, shifted(Hsl::from(base), 180)]
}

/// 3 colors evenly spaced on the hue circle.
pub fn triadic(base: Rgb) -> [Rgb; 3] {
    let hsl = Hsl::from(base);
    std::array::from_fn(|i| shifted(hsl, i as i32 * 120))
}

/// The base color plus the two hues adjacent to its complement.
pub fn split_complementary(base: Rgb) -> [Rgb; 3] {
    let hsl = Hsl::from(base);
    [base, shifted(hsl, 150), shifted(hsl, 210)]
}

/// 4 colors forming a rectangle on the hue circle.
pub fn tetradic(base: Rgb) -> [Rgb; 4] {
    let hsl = Hsl::from(base);
    std::array::from_fn(|i| shifted(hsl, i as i32 * 90))
}

fn shifted(hsl: Hsl, degrees: i32) -> Rgb {
    let h = (hsl.h as i32 + degrees).rem_euclid(360) as u16;
    Rgb::from(Hsl::new(h, hsl.s, hsl.l))
}

/// Hue/saturation/lightness windows for [`random`]. Bounds are inclusive
/// lower, exclusive upper, matching the generator's sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranges {
    pub hue: (u16, u16),
    pub saturation: (u8, u8),
    pub lightness: (u8, u8),
}

impl Default for Ranges {
    fn default() -> Self {
        Self {
            hue: (0, 360),
            saturation: (50, 100),
            lightness: (30, 70),
        }
    }
}

/// 5 random colors: a base hue drawn from the hue window, stepped by one
/// fifth of the window width per color, with saturation and lightness
/// drawn independently for every color.
pub fn random(ranges: &Ranges, rng: &mut impl Rng) -> [Hsl; 5] {
    let (h_min, h_max) = ranges.hue;
    let width = h_max.saturating_sub(h_min);
    let spread = width as f64 / 5.0;
    let base = if width == 0 {
        h_min as f64
    } else {
        rng.gen_range(h_min..h_max) as f64
    };

    std::array::from_fn(|i| {
        let h = ((base + i as f64 * spread) % 360.0) as u16;
        Hsl::new(
            h,
            sample(rng, ranges.saturation.0, ranges.saturation.1),
            sample(rng, ranges.lightness.0, ranges.lightness.1),
        )
    })
}

fn sample(rng: &mut impl Rng, min: u8, max: u8) -> u8 {
    if max > min { rng.gen_range(min..max) } else { min }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn shades_run_from_near_base_to_black() {
        let base = Rgb::from_hex("#FF6B6B").unwrap();
        let ramp = shades(base);
        assert_eq!(ramp.len(), 10);
        // First entry is the base scaled by 0.9.
        assert_eq!(ramp[0], Rgb::new(230, 96, 96));
        assert_eq!(ramp[0].to_hex(), "#E66060");
        assert_eq!(ramp[9], Rgb::BLACK);
    }

    #[test]
    fn tints_start_at_base_and_approach_white() {
        let base = Rgb::new(255, 107, 107);
        let ramp = tints(base);
        assert_eq!(ramp[0], base);
        // Last step keeps a tenth of the distance to white.
        assert_eq!(ramp[9], Rgb::new(255, 240, 240));
    }

    #[test]
    fn tones_start_at_base_and_approach_mid_gray() {
        let base = Rgb::new(255, 107, 107);
        let ramp = tones(base);
        assert_eq!(ramp[0], base);
        assert_eq!(ramp[9], Rgb::new(141, 126, 126));
    }

    #[test]
    fn tones_of_mid_gray_are_constant() {
        let gray = Rgb::new(128, 128, 128);
        assert!(tones(gray).iter().all(|c| *c == gray));
    }

    #[test]
    fn triadic_spaces_hues_by_120_degrees() {
        let base = Rgb::new(255, 107, 107); // hsl(0, 100%, 71%)
        let set = triadic(base);
        let hues: Vec<u16> = set.iter().map(|c| Hsl::from(*c).h).collect();
        assert_eq!(hues, vec![0, 120, 240]);
        for c in set {
            let hsl = Hsl::from(c);
            assert_eq!((hsl.s, hsl.l), (100, 71));
        }
    }

    #[test]
    fn complementary_wraps_past_360() {
        let base = Rgb::from(Hsl::new(350, 80, 60));
        let pair = complementary(base);
        assert_eq!(pair[0], base);
        let second = Hsl::from(pair[1]);
        assert_eq!(second.h, 170);
    }

    #[test]
    fn split_complementary_keeps_the_base_verbatim() {
        let base = Rgb::new(59, 130, 246);
        let set = split_complementary(base);
        assert_eq!(set[0], base);
        let hsl = Hsl::from(base);
        assert_eq!(Hsl::from(set[1]).h, (hsl.h + 150) % 360);
        assert_eq!(Hsl::from(set[2]).h, (hsl.h + 210) % 360);
    }

    #[test]
    fn tetradic_spaces_hues_by_90_degrees() {
        let base = Rgb::new(255, 107, 107);
        let hues: Vec<u16> = tetradic(base).iter().map(|c| Hsl::from(*c).h).collect();
        assert_eq!(hues, vec![0, 90, 180, 270]);
    }

    #[test]
    fn analogous_centers_on_the_base_hue() {
        let base = Rgb::new(255, 107, 107);
        let hues: Vec<u16> = analogous(base).iter().map(|c| Hsl::from(*c).h).collect();
        assert_eq!(hues, vec![300, 330, 0, 30, 60]);
    }

    #[test]
    fn random_palette_respects_the_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranges = Ranges {
            hue: (100, 200),
            saturation: (60, 80),
            lightness: (40, 50),
        };
        for _ in 0..100 {
            for color in random(&ranges, &mut rng) {
                assert!(color.h < 360);
                assert!((60..80).contains(&color.s));
                assert!((40..50).contains(&color.l));
            }
        }
    }

    #[test]
    fn random_palette_steps_by_a_fifth_of_the_hue_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let ranges = Ranges {
            hue: (0, 100),
            ..Ranges::default()
        };
        let palette = random(&ranges, &mut rng);
        let base = palette[0].h;
        for (i, color) in palette.iter().enumerate() {
            assert_eq!(color.h, base + 20 * i as u16);
        }
    }

    #[test]
    fn degenerate_ranges_produce_fixed_components() {
        let mut rng = StdRng::seed_from_u64(1);
        let ranges = Ranges {
            hue: (120, 120),
            saturation: (50, 50),
            lightness: (40, 40),
        };
        for color in random(&ranges, &mut rng) {
            assert_eq!(color, Hsl::new(120, 50, 40));
        }
    }

    #[test]
    fn random_is_reproducible_per_seed() {
        let a = random(&Ranges::default(), &mut StdRng::seed_from_u64(9));
        let b = random(&Ranges::default(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
