//! End-to-end checks of the public library surface: one committed color
//! fans out into every representation and derived set.

use rand::rngs::StdRng;
use rand::SeedableRng;

use floem_chroma::{export, palette, pantone, schemes, Cmyk, Hsl, Rgb};

#[test]
fn committed_color_fans_out_to_every_representation() {
    let color = Rgb::from_hex("#3B82F6").unwrap();

    assert_eq!(color, Rgb::new(59, 130, 246));
    assert_eq!(color.to_hex(), "#3B82F6");
    assert_eq!(Hsl::from(color), Hsl::new(217, 91, 60));
    assert_eq!(Cmyk::from(color), Cmyk::new(76, 47, 0, 4));
    assert_eq!(pantone::nearest(color), "Process Blue C");

    let shades = palette::shades(color);
    assert_eq!(shades[9], Rgb::new(0, 0, 0));
    let triadic = palette::triadic(color);
    let hues: Vec<u16> = triadic.iter().map(|c| Hsl::from(*c).h).collect();
    assert_eq!(hues, vec![217, 337, 97]);
}

#[test]
fn scheme_search_feeds_export() {
    let hits = schemes::filter(Some("dark"), "vibrant");
    assert_eq!(hits.len(), 1);
    let scheme = hits[0];

    let css = export::render(&scheme.colors, export::ExportFormat::Css);
    assert!(css.contains("--color-primary: #3B82F6;"));
    assert_eq!(
        export::file_name(scheme, export::ExportFormat::Json),
        "dark-mode-colors.json"
    );
}

#[test]
fn generated_palettes_and_schemes_are_seed_stable() {
    let palette_a = palette::random(&palette::Ranges::default(), &mut StdRng::seed_from_u64(11));
    let palette_b = palette::random(&palette::Ranges::default(), &mut StdRng::seed_from_u64(11));
    assert_eq!(palette_a, palette_b);

    let scheme_a = schemes::random_scheme(&mut StdRng::seed_from_u64(11));
    let scheme_b = schemes::random_scheme(&mut StdRng::seed_from_u64(11));
    assert_eq!(scheme_a.colors, scheme_b.colors);
}
