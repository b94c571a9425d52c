//! Mapping canvas view.
//!
//! Draws each mapping as `"<button> -> <pin>"` on a fixed 800x400 surface,
//! one row per entry, top to bottom in response order. The row layout is
//! computed as plain data so the geometry is testable without a browser;
//! painting against the 2d context happens only on WASM.

use dioxus::prelude::*;

use crate::app::api::Mapping;

/// Logical surface size in pixels.
pub const SURFACE_WIDTH: u32 = 800;
pub const SURFACE_HEIGHT: u32 = 400;

const TEXT_X: f64 = 20.0;
const FIRST_BASELINE: f64 = 40.0;
const ROW_HEIGHT: f64 = 20.0;

const BACKGROUND: &str = "#111";
const TEXT_COLOR: &str = "#0f0";

const CANVAS_ID: &str = "mapping-canvas";

/// One positioned text draw.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRow {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Everything a repaint needs: the visible rows plus how many entries fell
/// past the bottom edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasLayout {
    pub rows: Vec<TextRow>,
    pub hidden: usize,
}

/// Lay out mappings top to bottom. The i-th baseline sits at
/// `40 + i * 20`; rows whose baseline would land at or past the bottom
/// edge are clipped and counted instead of drawn off-surface.
pub fn layout_rows(mappings: &[Mapping]) -> CanvasLayout {
    let mut layout = CanvasLayout::default();
    for (i, mapping) in mappings.iter().enumerate() {
        let y = FIRST_BASELINE + i as f64 * ROW_HEIGHT;
        if y >= f64::from(SURFACE_HEIGHT) {
            layout.hidden = mappings.len() - i;
            break;
        }
        layout.rows.push(TextRow {
            text: format!("{} -> {}", mapping.controller_button, mapping.arduino_pin),
            x: TEXT_X,
            y,
        });
    }
    layout
}

/// Static render target for the mapping collection. Repaints the whole
/// surface from scratch whenever the collection changes; no incremental
/// diffing, no interactivity.
#[component]
pub fn MappingCanvas(mappings: ReadOnlySignal<Vec<Mapping>>) -> Element {
    let layout = use_memo(move || layout_rows(&mappings()));

    use_effect(move || {
        paint(&layout());
    });

    let hidden = layout.read().hidden;

    rsx! {
        section { id: "mappings",
            h2 { "Mappings" }
            canvas {
                id: CANVAS_ID,
                class: "mapping-canvas",
                width: "{SURFACE_WIDTH}",
                height: "{SURFACE_HEIGHT}",
            }
            if hidden > 0 {
                p {
                    small { "{hidden} more mapping(s) not shown" }
                }
            }
        }
    }
}

/// Full repaint: background fill first, then each visible row.
#[cfg(target_arch = "wasm32")]
fn paint(layout: &CanvasLayout) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    // The canvas is not in the DOM until after first render
    let Some(element) = document.get_element_by_id(CANVAS_ID) else {
        return;
    };
    let Ok(canvas) = element.dyn_into::<web_sys::HtmlCanvasElement>() else {
        return;
    };
    let Some(Some(context)) = canvas.get_context("2d").ok() else {
        return;
    };
    let Ok(context) = context.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };

    context.set_fill_style_str(BACKGROUND);
    context.fill_rect(
        0.0,
        0.0,
        f64::from(SURFACE_WIDTH),
        f64::from(SURFACE_HEIGHT),
    );

    context.set_fill_style_str(TEXT_COLOR);
    for row in &layout.rows {
        let _ = context.fill_text(&row.text, row.x, row.y);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn paint(_layout: &CanvasLayout) {}
