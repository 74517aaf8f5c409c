use super::*;
use crate::field::color::Color;

fn black_bg() -> CpuRenderer {
    CpuRenderer::new(RenderSettings {
        clear_rgba: Some([0, 0, 0, 255]),
    })
}

fn vertical(x: f64, color: Color, cap: LineCap) -> Segment {
    Segment {
        from: Point::new(x, 8.0),
        to: Point::new(x, 24.0),
        color,
        width: 4.0,
        cap,
    }
}

#[test]
fn clear_fills_background() {
    let mut r = black_bg();
    r.clear(8, 4).unwrap();
    let frame = r.finish().unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn opaque_stroke_covers_its_pixels_only() {
    let mut r = black_bg();
    r.clear(32, 32).unwrap();
    r.stroke_segment(&vertical(16.0, Color::new(255, 255, 255), LineCap::Butt))
        .unwrap();
    let frame = r.finish().unwrap();

    let on = frame.pixel(15, 16).unwrap();
    assert!(on[0] > 200 && on[1] > 200 && on[2] > 200, "{on:?}");
    assert_eq!(frame.pixel(2, 2).unwrap(), [0, 0, 0, 255]);
    assert_eq!(frame.pixel(28, 16).unwrap(), [0, 0, 0, 255]);
}

#[test]
fn round_caps_extend_past_the_end_point() {
    let render_cap = |cap| {
        let mut r = black_bg();
        r.clear(32, 32).unwrap();
        r.stroke_segment(&vertical(16.0, Color::new(255, 255, 255), cap))
            .unwrap();
        r.finish().unwrap()
    };
    // Pixel row 25 lies below the end point (y = 24) but within half a stroke width of it.
    let butt = render_cap(LineCap::Butt).pixel(15, 25).unwrap();
    let round = render_cap(LineCap::Round).pixel(15, 25).unwrap();
    assert!(round[0] > butt[0], "round {round:?} butt {butt:?}");
}

#[test]
fn translucent_stroke_blends_with_background() {
    let mut r = black_bg();
    r.clear(32, 32).unwrap();
    let mut color = Color::new(200, 0, 0);
    color.set_alpha(0.5);
    r.stroke_segment(&vertical(16.0, color, LineCap::Round))
        .unwrap();
    let px = r.finish().unwrap().pixel(15, 16).unwrap();
    assert!(px[0] > 60 && px[0] < 140, "{px:?}");
    assert_eq!(px[3], 255);
}

#[test]
fn new_clear_discards_previous_strokes() {
    let mut r = black_bg();
    r.clear(32, 32).unwrap();
    r.stroke_segment(&vertical(16.0, Color::new(255, 255, 255), LineCap::Round))
        .unwrap();
    r.clear(32, 32).unwrap();
    let frame = r.finish().unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn misuse_and_oversized_surfaces_are_render_errors() {
    let mut r = black_bg();
    let seg = vertical(1.0, Color::new(1, 1, 1), LineCap::Round);
    assert!(matches!(
        r.stroke_segment(&seg),
        Err(LinefieldError::Render(_))
    ));
    assert!(matches!(r.finish(), Err(LinefieldError::Render(_))));
    assert!(matches!(r.clear(70_000, 4), Err(LinefieldError::Render(_))));
    assert!(matches!(r.clear(4, 0), Err(LinefieldError::Render(_))));
}
