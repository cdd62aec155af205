//! Swatch views: single color cells and fixed-length strips.

use floem::prelude::*;
use floem::views::h_stack_from_iter;

use crate::color::Rgb;
use crate::constants;
use crate::inputs::copy_to_clipboard;

/// A clickable color cell. Clicking copies the hex string.
pub(crate) fn swatch_cell(color: impl Fn() -> Rgb + Copy + 'static) -> impl IntoView {
    empty()
        .style(move |s| {
            let c = color();
            s.height_full()
                .flex_grow(1.0)
                .background(Color::rgb8(c.r, c.g, c.b))
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            copy_to_clipboard(&color().to_hex());
        })
}

/// A horizontal strip of `N` cells driven by one derivation closure.
///
/// The closure runs per cell, so it must stay cheap; every derivation here
/// is a handful of integer conversions.
pub(crate) fn swatch_strip<const N: usize>(
    colors: impl Fn() -> [Rgb; N] + Copy + 'static,
) -> impl IntoView {
    h_stack_from_iter((0..N).map(move |i| swatch_cell(move || colors()[i])))
        .style(|s| {
            s.height(constants::STRIP_HEIGHT)
                .width_full()
                .gap(2.0)
                .border_radius(constants::RADIUS)
        })
}

/// The large single-color preview used by the converter panel.
pub(crate) fn preview_swatch(color: impl Fn() -> Rgb + Copy + 'static) -> impl IntoView {
    empty().style(move |s| {
        let c = color();
        s.width(constants::PREVIEW_SIZE)
            .height(constants::PREVIEW_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(Color::rgb8(c.r, c.g, c.b))
    })
}
