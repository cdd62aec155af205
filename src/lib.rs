//! # floem-chroma
//!
//! Color conversion, palette, and harmony tools for [Floem](https://github.com/lapce/floem).
//!
//! The core is a small pure library: integer [`Rgb`]/[`Hsl`]/[`Cmyk`] value
//! types with hex parsing, approximate Pantone matching ([`pantone`]),
//! palette derivation ([`palette`]), a preset UI scheme catalog
//! ([`schemes`]), and scheme export ([`export`]). On top of it sit three
//! composable panels: a format converter, a shades/harmonies chart, and a
//! random palette generator.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_chroma::{chroma_panel, Rgb};
//!
//! let color = RwSignal::new(Rgb::from_hex("#3B82F6").unwrap());
//! // Use `chroma_panel(color)` in your Floem view tree.
//! ```

mod chart;
mod color;
mod constants;
mod converter;
pub mod export;
mod generator;
mod inputs;
mod math;
pub mod palette;
pub mod pantone;
pub mod schemes;
mod swatch;

pub use chart::chart_panel;
pub use color::{is_valid_hex, Cmyk, Hsl, Rgb};
pub use converter::converter_panel;
pub use generator::generator_panel;

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the combined color utility panel: converter, chart, and
/// generator stacked in one view.
///
/// The converter and chart read from and write to `color`; external
/// changes to the signal are reflected everywhere, and user edits update
/// the signal before any derived strip re-renders.
pub fn chroma_panel(color: RwSignal<Rgb>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    v_stack((
        converter_panel(color),
        divider(),
        chart_panel(color),
        divider(),
        generator_panel(),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}

fn divider() -> impl IntoView {
    empty().style(|s| {
        s.height(1.0)
            .width_full()
            .background(Color::rgb8(210, 210, 210))
    })
}
