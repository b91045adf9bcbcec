//! Anker-Auswahl für Popups, damit sie im sichtbaren Kartenbereich bleiben.

use glam::Vec2;

use super::ViewportBox;

/// Geschätzte Popup-Breite in Pixel (nicht gemessen).
pub const POPUP_WIDTH_ESTIMATE: f32 = 400.0;

/// Seite bzw. Ecke des Popups, die den Referenzpunkt berührt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    #[default]
    Left,
    Right,
}

impl PopupAnchor {
    /// Bezeichner wie in Mapbox-Popups (`top-left`, `right`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            PopupAnchor::TopLeft => "top-left",
            PopupAnchor::TopRight => "top-right",
            PopupAnchor::BottomLeft => "bottom-left",
            PopupAnchor::BottomRight => "bottom-right",
            PopupAnchor::Left => "left",
            PopupAnchor::Right => "right",
        }
    }
}

/// Wählt den Popup-Anker mit der festen Breitenschätzung von 400 px.
pub fn select_anchor(viewport_box: ViewportBox, click_pixel: Vec2) -> PopupAnchor {
    select_anchor_with_width(viewport_box, click_pixel, POPUP_WIDTH_ESTIMATE)
}

/// Wählt den Popup-Anker für einen Klickpunkt.
///
/// Oberes bzw. unteres Viertel der Höhe → Ecken-Anker; Klicks näher als
/// `popup_width` am rechten Rand öffnen das Popup nach links.
pub fn select_anchor_with_width(
    viewport_box: ViewportBox,
    click_pixel: Vec2,
    popup_width: f32,
) -> PopupAnchor {
    let half_height = viewport_box.height / 2.0;
    let right_limit = viewport_box.width - popup_width;

    let near_top = click_pixel.y <= half_height / 2.0;
    let near_bottom = click_pixel.y >= viewport_box.height - half_height / 2.0;
    let near_right = click_pixel.x >= right_limit;

    if near_top && !near_right {
        PopupAnchor::TopLeft
    } else if near_top {
        PopupAnchor::TopRight
    } else if near_bottom && !near_right {
        PopupAnchor::BottomLeft
    } else if near_bottom {
        PopupAnchor::BottomRight
    } else if near_right {
        PopupAnchor::Right
    } else {
        PopupAnchor::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> ViewportBox {
        ViewportBox::new(1000.0, 800.0)
    }

    #[test]
    fn top_right_when_near_top_and_right_edge() {
        assert_eq!(
            select_anchor(vp(), Vec2::new(900.0, 100.0)),
            PopupAnchor::TopRight
        );
    }

    #[test]
    fn center_click_keeps_default_left() {
        assert_eq!(
            select_anchor(vp(), Vec2::new(500.0, 400.0)),
            PopupAnchor::Left
        );
    }

    #[test]
    fn corner_quadrants() {
        assert_eq!(
            select_anchor(vp(), Vec2::new(10.0, 10.0)),
            PopupAnchor::TopLeft
        );
        assert_eq!(
            select_anchor(vp(), Vec2::new(599.0, 200.0)),
            PopupAnchor::TopLeft
        );
        assert_eq!(
            select_anchor(vp(), Vec2::new(600.0, 200.0)),
            PopupAnchor::TopRight
        );
        assert_eq!(
            select_anchor(vp(), Vec2::new(10.0, 790.0)),
            PopupAnchor::BottomLeft
        );
        assert_eq!(
            select_anchor(vp(), Vec2::new(990.0, 600.0)),
            PopupAnchor::BottomRight
        );
    }

    #[test]
    fn right_edge_at_mid_height_anchors_right() {
        let b = vp();
        assert_eq!(
            select_anchor(b, Vec2::new(b.width - 1.0, b.height / 2.0)),
            PopupAnchor::Right
        );
    }

    #[test]
    fn left_edge_at_mid_height_anchors_left() {
        let b = vp();
        assert_eq!(
            select_anchor(b, Vec2::new(0.0, b.height / 2.0)),
            PopupAnchor::Left
        );
    }

    #[test]
    fn narrow_viewport_always_counts_as_right_edge() {
        // Breite < Schätzung → jeder Klick liegt "rechts"
        let b = ViewportBox::new(300.0, 800.0);
        assert_eq!(
            select_anchor(b, Vec2::new(0.0, 400.0)),
            PopupAnchor::Right
        );
    }

    #[test]
    fn custom_width_moves_threshold() {
        let b = vp();
        assert_eq!(
            select_anchor_with_width(b, Vec2::new(850.0, 400.0), 100.0),
            PopupAnchor::Left
        );
        assert_eq!(
            select_anchor_with_width(b, Vec2::new(900.0, 400.0), 100.0),
            PopupAnchor::Right
        );
    }
}
