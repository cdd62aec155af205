//! Standalone demo: opens a window with the color utility panel.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_chroma::{chroma_panel, Rgb};

fn main() {
    let color = RwSignal::new(Rgb::from_hex("#3B82F6").unwrap());

    floem::Application::new()
        .window(
            move |_| {
                chroma_panel(color).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((380.0, 860.0))
                    .title("floem-chroma"),
            ),
        )
        .run();
}
