//! Approximate Pantone spot-color support.
//!
//! The table below is authoritative data, not derived: a small set of
//! common coated spot colors with their screen approximations. Matching is
//! a linear scan — at this size an index would be noise.

use crate::color::Rgb;

/// Named spot colors and their approximate RGB values. Order is part of the
/// contract: [`nearest`] keeps the first entry on a distance tie.
pub const PANTONE: &[(&str, Rgb)] = &[
    ("Warm Red C", Rgb::new(255, 107, 107)),
    ("Cool Gray 1 C", Rgb::new(241, 241, 241)),
    ("Cool Gray 5 C", Rgb::new(188, 188, 188)),
    ("Cool Gray 10 C", Rgb::new(99, 102, 106)),
    ("Process Blue C", Rgb::new(0, 133, 202)),
    ("Process Yellow C", Rgb::new(255, 242, 0)),
    ("Process Magenta C", Rgb::new(236, 0, 140)),
    ("Process Cyan C", Rgb::new(0, 174, 239)),
    ("Black C", Rgb::new(45, 41, 38)),
    ("Orange 021 C", Rgb::new(254, 80, 0)),
    ("Green C", Rgb::new(0, 171, 132)),
    ("Blue 072 C", Rgb::new(16, 6, 159)),
    ("Purple C", Rgb::new(187, 41, 187)),
    ("Red 032 C", Rgb::new(237, 41, 57)),
    ("Reflex Blue C", Rgb::new(0, 20, 137)),
    ("Rubine Red C", Rgb::new(206, 0, 88)),
    ("Rhodamine Red C", Rgb::new(225, 0, 152)),
    ("Yellow C", Rgb::new(254, 221, 0)),
];

/// Look up a spot color by name. Unknown names fall back to black rather
/// than failing; callers that need to distinguish should check
/// [`is_known`] first.
pub fn from_name(name: &str) -> Rgb {
    PANTONE
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(Rgb::BLACK)
}

/// Whether `name` is an entry in the table.
pub fn is_known(name: &str) -> bool {
    PANTONE.iter().any(|(entry, _)| *entry == name)
}

/// The name of the table entry closest to `color` in RGB space.
///
/// Squared Euclidean distance has the same minimum as the Euclidean form;
/// a strict comparison keeps the earliest of tied entries.
pub fn nearest(color: Rgb) -> &'static str {
    let mut best = PANTONE[0].0;
    let mut best_dist = u32::MAX;
    for (name, swatch) in PANTONE {
        let d = distance_sq(color, *swatch);
        if d < best_dist {
            best_dist = d;
            best = name;
        }
    }
    best
}

fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_match_themselves() {
        for (name, rgb) in PANTONE {
            assert_eq!(nearest(*rgb), *name);
        }
    }

    #[test]
    fn nearest_is_deterministic() {
        let color = Rgb::new(59, 130, 246);
        let first = nearest(color);
        assert_eq!(nearest(color), first);
    }

    #[test]
    fn near_misses_snap_to_the_closest_entry() {
        assert_eq!(nearest(Rgb::new(250, 100, 100)), "Warm Red C");
        assert_eq!(nearest(Rgb::new(5, 140, 200)), "Process Blue C");
        assert_eq!(nearest(Rgb::new(0, 0, 0)), "Black C");
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        assert_eq!(from_name("Warm Red C"), Rgb::new(255, 107, 107));
        assert_eq!(from_name("Pantone 404 C"), Rgb::BLACK);
        assert!(is_known("Yellow C"));
        assert!(!is_known("yellow c"));
    }

    #[test]
    fn round_trip_lands_on_the_stored_approximation() {
        // Pantone matching is lossy by design: going through a name yields
        // the table's RGB, not the original input.
        let input = Rgb::new(250, 100, 100);
        let name = nearest(input);
        assert_eq!(from_name(name), Rgb::new(255, 107, 107));
    }
}
