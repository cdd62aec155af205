//! Color chart panel: shade/tint/tone ramps and harmony sets for a base
//! color, shown as clickable strips.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::Rgb;
use crate::constants;
use crate::inputs::hex_input;
use crate::palette;
use crate::swatch::{preview_swatch, swatch_strip};

/// Creates the chart panel.
pub fn chart_panel(color: RwSignal<Rgb>) -> impl IntoView {
    v_stack((
        label(|| "Color Chart").style(|s| {
            s.font_size(constants::HEADING_FONT)
                .color(Color::rgb8(60, 60, 60))
        }),
        h_stack((
            hex_input(color),
            empty().style(|s| s.flex_grow(1.0)),
            preview_swatch(move || color.get()),
        ))
        .style(|s| s.gap(constants::GAP).items_center()),
        v_stack((
            strip_row("Shades (Darker)", move || palette::shades(color.get())),
            strip_row("Tints (Lighter)", move || palette::tints(color.get())),
            strip_row("Tones (Mixed with Gray)", move || {
                palette::tones(color.get())
            }),
        ))
        .style(|s| s.gap(constants::GAP)),
        v_stack((
            strip_row("Analogous", move || palette::analogous(color.get())),
            strip_row("Complementary", move || {
                palette::complementary(color.get())
            }),
            strip_row("Triadic", move || palette::triadic(color.get())),
            strip_row("Split Complementary", move || {
                palette::split_complementary(color.get())
            }),
            strip_row("Tetradic (Rectangle)", move || {
                palette::tetradic(color.get())
            }),
        ))
        .style(|s| s.gap(constants::GAP)),
    ))
    .style(|s| s.gap(constants::GAP).width_full())
}

fn strip_row<const N: usize>(
    title: &'static str,
    colors: impl Fn() -> [Rgb; N] + Copy + 'static,
) -> impl IntoView {
    v_stack((
        label(move || title).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        swatch_strip(colors),
    ))
    .style(|s| s.gap(2.0).width_full())
}
