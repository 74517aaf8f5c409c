use super::*;
use crate::foundation::core::Point;

fn segment() -> Segment {
    let mut color = Color::new(150, 5, 150);
    color.set_alpha(0.25);
    Segment {
        from: Point::new(10.0, 20.0),
        to: Point::new(10.0, 5.5),
        color,
        width: 10.0,
        cap: LineCap::Round,
    }
}

#[test]
fn document_has_surface_size_and_css_strokes() {
    let mut r = SvgRenderer::new(RenderSettings::default());
    r.clear(320, 240).unwrap();
    r.stroke_segment(&segment()).unwrap();
    let svg = r.finish().unwrap();

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="320" height="240" viewBox="0 0 320 240""#));
    assert!(svg.contains(
        r#"<line x1="10" y1="20" x2="10" y2="5.5" stroke="rgba(150,5,150,0.25)" stroke-width="10" stroke-linecap="round"/>"#
    ));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(!svg.contains("<rect"));
}

#[test]
fn clear_color_becomes_background_rect() {
    let mut r = SvgRenderer::new(RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
    });
    r.clear(4, 3).unwrap();
    let svg = r.finish().unwrap();
    assert!(svg.contains(r#"<rect width="4" height="3" fill="rgba(18,20,28,1)"/>"#));
}

#[test]
fn clear_starts_a_fresh_document() {
    let mut r = SvgRenderer::new(RenderSettings::default());
    r.clear(4, 4).unwrap();
    r.stroke_segment(&segment()).unwrap();
    r.clear(4, 4).unwrap();
    assert!(!r.finish().unwrap().contains("<line"));
}

#[test]
fn misuse_is_render_error() {
    let mut r = SvgRenderer::default();
    assert!(matches!(
        r.stroke_segment(&segment()),
        Err(LinefieldError::Render(_))
    ));
    assert!(matches!(r.finish(), Err(LinefieldError::Render(_))));
}
