//! Viewport visibility predicate for scroll-reveal animations

use web_sys::Element;

/// Whether any part of the element's bounding box is within the vertical
/// extent of the viewport. Missing element or window yields `false`.
pub fn is_in_viewport(elem: Option<&Element>) -> bool {
    let Some(elem) = elem else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let rect = elem.get_bounding_client_rect();
    spans_viewport(rect.top(), rect.bottom(), viewport_height)
}

/// True iff `[top, bottom]` overlaps `[0, viewport_height]`.
pub fn spans_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom > 0.0 && top <= viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible() {
        assert!(spans_viewport(100.0, 300.0, 800.0));
    }

    #[test]
    fn test_partially_above() {
        assert!(spans_viewport(-50.0, 10.0, 800.0));
    }

    #[test]
    fn test_partially_below() {
        assert!(spans_viewport(799.0, 1200.0, 800.0));
        assert!(spans_viewport(800.0, 1200.0, 800.0));
    }

    #[test]
    fn test_scrolled_past() {
        assert!(!spans_viewport(-300.0, -10.0, 800.0));
        assert!(!spans_viewport(-300.0, 0.0, 800.0));
    }

    #[test]
    fn test_not_yet_reached() {
        assert!(!spans_viewport(801.0, 1000.0, 800.0));
    }
}
