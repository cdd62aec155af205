//! Palette generator panel: random 5-color palettes within configurable
//! hue/saturation/lightness windows.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::{Hsl, Rgb};
use crate::constants;
use crate::inputs::{channel_input, copy_button, text_button};
use crate::palette::{self, Ranges};
use crate::swatch::swatch_strip;

/// Creates the generator panel.
pub fn generator_panel() -> impl IntoView {
    let ranges = RwSignal::new(Ranges::default());
    let current: RwSignal<[Hsl; 5]> =
        RwSignal::new(palette::random(&Ranges::default(), &mut rand::thread_rng()));

    let generate = move || {
        let next = palette::random(&ranges.get_untracked(), &mut rand::thread_rng());
        tracing::debug!(palette = %format_palette(&next), "generated palette");
        current.set(next);
    };

    v_stack((
        label(|| "Palette Generator").style(|s| {
            s.font_size(constants::HEADING_FONT)
                .color(Color::rgb8(60, 60, 60))
        }),
        range_row(
            "Hue",
            channel_input(
                "min",
                360,
                move || ranges.get().hue.0 as i64,
                move |v| ranges.update(|r| r.hue.0 = v as u16),
            ),
            channel_input(
                "max",
                360,
                move || ranges.get().hue.1 as i64,
                move |v| ranges.update(|r| r.hue.1 = v as u16),
            ),
        ),
        range_row(
            "Saturation",
            channel_input(
                "min",
                100,
                move || ranges.get().saturation.0 as i64,
                move |v| ranges.update(|r| r.saturation.0 = v as u8),
            ),
            channel_input(
                "max",
                100,
                move || ranges.get().saturation.1 as i64,
                move |v| ranges.update(|r| r.saturation.1 = v as u8),
            ),
        ),
        range_row(
            "Lightness",
            channel_input(
                "min",
                100,
                move || ranges.get().lightness.0 as i64,
                move |v| ranges.update(|r| r.lightness.0 = v as u8),
            ),
            channel_input(
                "max",
                100,
                move || ranges.get().lightness.1 as i64,
                move |v| ranges.update(|r| r.lightness.1 = v as u8),
            ),
        ),
        h_stack((
            text_button("Generate", generate),
            empty().style(|s| s.flex_grow(1.0)),
            copy_button(move || format_palette(&current.get())),
        ))
        .style(|s| s.gap(constants::GAP).items_center()),
        swatch_strip(move || current.get().map(Rgb::from)),
    ))
    .style(|s| s.gap(constants::GAP).width_full())
}

fn range_row(
    title: &'static str,
    min_input: impl IntoView + 'static,
    max_input: impl IntoView + 'static,
) -> impl IntoView {
    h_stack((
        label(move || title).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .width(60.0)
        }),
        min_input,
        max_input,
    ))
    .style(|s| s.gap(constants::GAP / 2.0).items_center())
}

// Clipboard form: comma-separated hsl() strings, one per palette entry.
fn format_palette(palette: &[Hsl; 5]) -> String {
    palette
        .iter()
        .map(Hsl::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
