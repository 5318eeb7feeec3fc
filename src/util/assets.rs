use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Contents of `assets/tailwind.css`.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| load_text("tailwind.css"))
        .as_str()
}

/// Data URI for the window/tab icon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

fn load_text(name: &str) -> String {
    let asset = load_asset(name);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {name} is not valid UTF-8"))
}

fn load_asset(name: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(name)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {name}"))
}

/// Percent-encodes the handful of characters that break `data:` URIs when
/// embedding UTF-8 SVG markup directly.
fn svg_data_uri(svg: &str) -> String {
    let mut encoded = String::with_capacity(svg.len());
    for ch in svg.chars() {
        match ch {
            '#' => encoded.push_str("%23"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '"' => encoded.push_str("%22"),
            '%' => encoded.push_str("%25"),
            '\n' | '\r' => {}
            other => encoded.push(other),
        }
    }
    format!("data:image/svg+xml,{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_data_uri_escapes_markup() {
        let uri = svg_data_uri("<svg fill=\"#fff\">\n</svg>");
        assert!(uri.starts_with("data:image/svg+xml,"));
        assert!(!uri.contains('<'));
        assert!(!uri.contains('"'));
        assert!(!uri.contains('\n'));
        assert!(uri.contains("%23fff"));
    }
}
