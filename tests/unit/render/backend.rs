use super::*;

#[test]
fn pixel_lookup_is_row_major() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: (0u8..16).collect(),
        premultiplied: true,
    };
    assert_eq!(frame.pixel(0, 0), Some([0, 1, 2, 3]));
    assert_eq!(frame.pixel(1, 0), Some([4, 5, 6, 7]));
    assert_eq!(frame.pixel(0, 1), Some([8, 9, 10, 11]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 2), None);
}

#[test]
fn truncated_frame_data_yields_none() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0; 5],
        premultiplied: false,
    };
    assert!(frame.pixel(0, 0).is_some());
    assert_eq!(frame.pixel(1, 0), None);
}

#[test]
fn default_cap_is_round() {
    assert_eq!(LineCap::default(), LineCap::Round);
}
