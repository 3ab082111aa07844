// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at startup from the embedded SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/quiz_rush.svg");

/// Edge length of the window icon in pixels.
pub const ICON_SIZE: u32 = 128;

/// Renders the brand SVG into a square RGBA buffer of `size` pixels.
pub fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default())
        .map_err(|err| tracing::warn!(error = %err, "icon SVG rejected"))
        .ok()?;

    let natural = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / natural.width(),
        size as f32 / natural.height(),
    );
    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

/// The window title bar icon, or `None` if it cannot be rendered.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE)
        .map_err(|err| tracing::warn!(error = %err, "window icon rejected"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterized_icon_has_rgba_layout() {
        let rgba = rasterize(32).expect("embedded SVG renders");
        assert_eq!(rgba.len(), 32 * 32 * 4);
        // Center pixel is inside the badge, so it is not transparent.
        let center = (16 * 32 + 16) * 4;
        assert!(rgba[center + 3] > 0);
    }

    #[test]
    fn window_icon_builds() {
        assert!(load_window_icon().is_some());
    }
}
