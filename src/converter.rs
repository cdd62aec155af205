//! Converter panel: hex, RGB, HSL, CMYK, and Pantone views of one color.
//!
//! State is a single canonical `RwSignal<Rgb>`. Every row derives its
//! display from that signal and commits edits back through it, so the
//! formats cannot drift apart.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::{Cmyk, Hsl, Rgb};
use crate::constants;
use crate::inputs::{channel_input, copy_button, hex_input};
use crate::pantone;
use crate::swatch::preview_swatch;

/// Creates the converter panel.
pub fn converter_panel(color: RwSignal<Rgb>) -> impl IntoView {
    v_stack((
        heading("Converter"),
        // Hex + preview row
        h_stack((
            hex_input(color),
            copy_button(move || color.get().to_hex()),
            empty().style(|s| s.flex_grow(1.0)),
            preview_swatch(move || color.get()),
        ))
        .style(|s| s.gap(constants::GAP).items_center()),
        rgb_row(color),
        hsl_row(color),
        cmyk_row(color),
        pantone_row(color),
    ))
    .style(|s| s.gap(constants::GAP).width_full())
}

fn heading(text: &'static str) -> impl IntoView {
    label(move || text).style(|s| {
        s.font_size(constants::HEADING_FONT)
            .color(Color::rgb8(60, 60, 60))
    })
}

fn rgb_row(color: RwSignal<Rgb>) -> impl IntoView {
    h_stack((
        channel_input(
            "R",
            255,
            move || color.get().r as i64,
            move |v| color.update(|c| c.r = v as u8),
        ),
        channel_input(
            "G",
            255,
            move || color.get().g as i64,
            move |v| color.update(|c| c.g = v as u8),
        ),
        channel_input(
            "B",
            255,
            move || color.get().b as i64,
            move |v| color.update(|c| c.b = v as u8),
        ),
        copy_button(move || color.get().to_string()),
    ))
    .style(|s| s.gap(constants::GAP / 2.0).items_center())
}

fn hsl_row(color: RwSignal<Rgb>) -> impl IntoView {
    let commit = move |edit: fn(&mut Hsl, i64)| {
        move |v: i64| {
            let mut hsl = Hsl::from(color.get_untracked());
            edit(&mut hsl, v);
            color.set(Rgb::from(hsl));
        }
    };
    h_stack((
        channel_input(
            "H",
            360,
            move || Hsl::from(color.get()).h as i64,
            commit(|hsl, v| hsl.h = v as u16),
        ),
        channel_input(
            "S",
            100,
            move || Hsl::from(color.get()).s as i64,
            commit(|hsl, v| hsl.s = v as u8),
        ),
        channel_input(
            "L",
            100,
            move || Hsl::from(color.get()).l as i64,
            commit(|hsl, v| hsl.l = v as u8),
        ),
        copy_button(move || Hsl::from(color.get()).to_string()),
    ))
    .style(|s| s.gap(constants::GAP / 2.0).items_center())
}

fn cmyk_row(color: RwSignal<Rgb>) -> impl IntoView {
    let commit = move |edit: fn(&mut Cmyk, i64)| {
        move |v: i64| {
            let mut cmyk = Cmyk::from(color.get_untracked());
            edit(&mut cmyk, v);
            color.set(Rgb::from(cmyk));
        }
    };
    h_stack((
        channel_input(
            "C",
            100,
            move || Cmyk::from(color.get()).c as i64,
            commit(|cmyk, v| cmyk.c = v as u8),
        ),
        channel_input(
            "M",
            100,
            move || Cmyk::from(color.get()).m as i64,
            commit(|cmyk, v| cmyk.m = v as u8),
        ),
        channel_input(
            "Y",
            100,
            move || Cmyk::from(color.get()).y as i64,
            commit(|cmyk, v| cmyk.y = v as u8),
        ),
        channel_input(
            "K",
            100,
            move || Cmyk::from(color.get()).k as i64,
            commit(|cmyk, v| cmyk.k = v as u8),
        ),
        copy_button(move || Cmyk::from(color.get()).to_string()),
    ))
    .style(|s| s.gap(constants::GAP / 2.0).items_center())
}

/// Nearest-match readout plus a name field for entering a spot color.
/// Committing an unknown name previews the documented black fallback.
fn pantone_row(color: RwSignal<Rgb>) -> impl IntoView {
    let text = RwSignal::new(String::new());

    // Color → nearest name
    create_effect(move |_| {
        let name = pantone::nearest(color.get());
        if text.get_untracked() != name {
            text.set(name.to_string());
        }
    });

    let on_commit = move || {
        let name = text.get_untracked();
        let rgb = pantone::from_name(&name);
        if color.get_untracked() != rgb {
            color.set(rgb);
        }
    };
    let on_commit_clone = on_commit;

    h_stack((
        text_input(text)
            .style(|s| {
                s.width(constants::NAME_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if let floem::event::Event::KeyDown(ke) = e {
                    if ke.key.logical_key
                        == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                    {
                        on_commit_clone();
                        return EventPropagation::Stop;
                    }
                }
                EventPropagation::Continue
            }),
        label(|| "Pantone (approx.)").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        copy_button(move || pantone::nearest(color.get()).to_string()),
    ))
    .style(|s| s.gap(constants::GAP / 2.0).items_center())
}
