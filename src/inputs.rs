//! Text input and button components shared by the panels.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::{is_valid_hex, Rgb};
use crate::constants;

/// An integer input bound to the canonical color through `read`/`write`.
///
/// The committed value is clamped to `0..=max`. Anything unparseable is
/// reset to the current value on commit.
pub(crate) fn channel_input(
    lbl: &'static str,
    max: i64,
    read: impl Fn() -> i64 + Copy + 'static,
    write: impl Fn(i64) + Copy + 'static,
) -> impl IntoView {
    let text = RwSignal::new(String::new());

    // Color → text (external updates)
    create_effect(move |_| {
        let expected = read().to_string();
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        if let Ok(num) = raw.trim().parse::<i64>() {
            let clamped = num.clamp(0, max);
            if clamped != read() {
                write(clamped);
            }
            let formatted = clamped.to_string();
            if raw != formatted {
                text.set(formatted);
            }
        } else {
            // Reset to the current value
            let formatted = read().to_string();
            if raw != formatted {
                text.set(formatted);
            }
        }
    };
    let on_commit_clone = on_commit;

    v_stack((
        text_input(text)
            .style(|s| {
                s.width(constants::INPUT_WIDTH)
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
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A hex field bound to the canonical color.
///
/// Valid hex (3 or 6 digits, optional `#`) is committed on every
/// keystroke. Invalid text stays in the field for further editing without
/// touching the color, and commit reverts it to the last committed value.
pub(crate) fn hex_input(color: RwSignal<Rgb>) -> impl IntoView {
    let text = RwSignal::new(color.get_untracked().to_hex());

    // Color → text, unless the field already denotes the same color
    create_effect(move |_| {
        let current = color.get();
        if Rgb::from_hex(&text.get_untracked()) != Some(current) {
            text.set(current.to_hex());
        }
    });

    // Text → color on every valid keystroke
    create_effect(move |_| {
        let raw = text.get();
        if is_valid_hex(&raw) {
            if let Some(parsed) = Rgb::from_hex(&raw) {
                if color.get_untracked() != parsed {
                    color.set(parsed);
                }
            }
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let canonical = match Rgb::from_hex(&raw) {
            Some(parsed) => {
                if color.get_untracked() != parsed {
                    color.set(parsed);
                }
                parsed.to_hex()
            }
            // Malformed input is never committed as a color
            None => color.get_untracked().to_hex(),
        };
        if raw != canonical {
            text.set(canonical);
        }
    };
    let on_commit_clone = on_commit;

    text_input(text)
        .style(|s| {
            s.width(constants::HEX_INPUT_WIDTH)
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
        })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

/// A bordered text button.
pub(crate) fn text_button(
    lbl: &'static str,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(label(move || lbl).style(|s| s.font_size(constants::INPUT_FONT)))
        .style(move |s| {
            let bg = if pressed.get() {
                Color::rgb8(220, 220, 220)
            } else {
                Color::rgb8(250, 250, 250)
            };
            s.padding_horiz(10.0)
                .padding_vert(4.0)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(constants::RADIUS)
                .background(bg)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(235, 235, 235)))
        })
        .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
            pressed.set(true);
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            pressed.set(false);
            on_press();
        })
}

#[cfg(feature = "clipboard")]
pub(crate) fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!("clipboard write failed: {err}");
            }
        }
        Err(err) => tracing::warn!("clipboard unavailable: {err}"),
    }
}

#[cfg(not(feature = "clipboard"))]
pub(crate) fn copy_to_clipboard(_text: &str) {}
