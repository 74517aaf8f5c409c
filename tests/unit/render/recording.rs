use super::*;
use crate::{
    field::color::Color,
    foundation::core::Point,
    render::backend::LineCap,
};

fn seg(x: f64) -> Segment {
    Segment {
        from: Point::new(x, 0.0),
        to: Point::new(x, 10.0),
        color: Color::new(1, 1, 1),
        width: 2.0,
        cap: LineCap::Round,
    }
}

#[test]
fn last_frame_starts_at_latest_clear() {
    let mut rec = RecordingRenderer::new();
    assert!(rec.last_frame().is_empty());

    rec.clear(4, 4).unwrap();
    rec.stroke_segment(&seg(1.0)).unwrap();
    rec.clear(8, 8).unwrap();
    rec.stroke_segment(&seg(2.0)).unwrap();
    rec.stroke_segment(&seg(3.0)).unwrap();

    let frame = rec.last_frame();
    assert_eq!(frame.len(), 3);
    assert_eq!(frame[0], DrawCommand::Clear { width: 8, height: 8 });
    assert_eq!(rec.clear_count(), 2);
    assert_eq!(rec.strokes().count(), 3);
}

#[test]
fn take_drains_commands() {
    let mut rec = RecordingRenderer::new();
    rec.clear(1, 1).unwrap();
    rec.stroke_segment(&seg(0.0)).unwrap();
    let taken = rec.take();
    assert_eq!(taken.len(), 2);
    assert!(rec.commands().is_empty());
}

#[test]
fn works_through_a_mutable_reference() {
    fn draw_one(mut r: impl LineRenderer) {
        r.clear(2, 2).unwrap();
        r.stroke_segment(&seg(0.5)).unwrap();
    }

    let mut rec = RecordingRenderer::new();
    draw_one(&mut rec);
    assert_eq!(rec.commands().len(), 2);
}
