//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 for internal use; hue is a
//! fraction of a full turn. Integer quantization happens at the
//! [`crate::color`] type boundary.

/// RGB → HSL. All values 0.0–1.0.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// HSL → RGB. All values 0.0–1.0.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// RGB → CMYK. All values 0.0–1.0. Pure black short-circuits to
/// `c = m = y = 0` so the key division stays defined.
pub(crate) fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        return (0.0, 0.0, 0.0, 1.0);
    }
    (
        (1.0 - r - k) / (1.0 - k),
        (1.0 - g - k) / (1.0 - k),
        (1.0 - b - k) / (1.0 - k),
        k,
    )
}

/// CMYK → RGB. All values 0.0–1.0.
pub(crate) fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    (
        (1.0 - c) * (1.0 - k),
        (1.0 - m) * (1.0 - k),
        (1.0 - y) * (1.0 - k),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        assert_eq!(rgb_to_hsl(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsl(1.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        let (h, s, l) = rgb_to_hsl(0.5, 0.5, 0.5);
        assert_eq!((h, s), (0.0, 0.0));
        assert!((l - 0.5).abs() < 1e-9);
    }

    #[test]
    fn black_cmyk_avoids_key_division() {
        assert_eq!(rgb_to_cmyk(0.0, 0.0, 0.0), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn primaries_land_on_exact_hues() {
        let (h, s, l) = rgb_to_hsl(1.0, 0.0, 0.0);
        assert_eq!((h, s, l), (0.0, 1.0, 0.5));
        let (h, _, _) = rgb_to_hsl(0.0, 1.0, 0.0);
        assert!((h - 1.0 / 3.0).abs() < 1e-9);
        let (h, _, _) = rgb_to_hsl(0.0, 0.0, 1.0);
        assert!((h - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn zero_saturation_reconstructs_gray() {
        assert_eq!(hsl_to_rgb(0.25, 0.0, 0.4), (0.4, 0.4, 0.4));
    }
}
