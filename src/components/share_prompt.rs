//! Manual-copy dialog: the last share fallback.
//!
//! Shows the card URL as selectable text next to a QR code of it.

use bizcard_ui::CloseButton;
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::theme::colors;

/// Render `data` as a responsive SVG QR code.
///
/// The rendered size is rounded up to whole modules, so the root element's
/// width/height are stripped by name rather than by value. CSS controls the
/// display size; the viewBox keeps it sharp.
pub(crate) fn qr_svg(data: &str, size: u32) -> Option<String> {
    match QrCode::new(data.as_bytes()) {
        Ok(code) => {
            let svg_string = code
                .render()
                .min_dimensions(size, size)
                .dark_color(svg::Color(colors::INK))
                .light_color(svg::Color(colors::PAPER))
                .build();
            Some(strip_root_size(&svg_string))
        }
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            None
        }
    }
}

/// Drop the first `width` and `height` attributes, which belong to `<svg>`.
fn strip_root_size(svg: &str) -> String {
    let mut out = svg.to_string();
    for attr in [" width=\"", " height=\""] {
        if let Some(start) = out.find(attr) {
            let value_start = start + attr.len();
            if let Some(len) = out[value_start..].find('"') {
                out.replace_range(start..value_start + len + 1, "");
            }
        }
    }
    out
}

#[component]
pub fn SharePrompt(url: String, on_close: EventHandler<()>) -> Element {
    let qr = use_memo({
        let url = url.clone();
        move || qr_svg(&url, 200)
    });

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "share-prompt",
                onclick: move |e| e.stop_propagation(),

                CloseButton {
                    aria_label: "Cerrar".to_string(),
                    onclick: move |_| on_close.call(()),
                }
                h2 { class: "share-prompt__title", "Copia este enlace" }
                input {
                    class: "share-prompt__url",
                    r#type: "text",
                    readonly: true,
                    value: "{url}",
                    onfocus: move |_| {
                        spawn(async move {
                            let select = "document.activeElement && document.activeElement.select();";
                            if let Err(e) = document::eval(select).await {
                                tracing::warn!("Failed to select share URL: {:?}", e);
                            }
                        });
                    },
                }
                if let Some(svg) = qr() {
                    div { class: "share-prompt__qr", dangerous_inner_html: "{svg}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_svg_is_responsive() {
        let svg = qr_svg("https://card.test/jane", 120).unwrap();
        let root_end = svg.find("<svg").and_then(|i| svg[i..].find('>').map(|j| i + j)).unwrap();
        let root = &svg[..root_end];
        assert!(root.contains("viewBox"));
        assert!(!root.contains(" width="));
        assert!(!root.contains(" height="));
    }

    #[test]
    fn strip_root_size_keeps_child_dimensions() {
        let svg = r#"<svg width="232" height="232" viewBox="0 0 232 232"><rect width="232" height="232"/></svg>"#;
        assert_eq!(
            strip_root_size(svg),
            r#"<svg viewBox="0 0 232 232"><rect width="232" height="232"/></svg>"#
        );
    }
}
