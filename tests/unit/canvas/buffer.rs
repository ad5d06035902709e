use super::*;

#[test]
fn set_then_get_roundtrips_quantized_colors() {
    let mut fb = FrameBuffer::panel();
    let colors = [
        Rgb888::new(248, 252, 248),
        Rgb888::new(0, 4, 8),
        Rgb888::new(136, 64, 200),
    ];
    for (i, c) in colors.into_iter().enumerate() {
        let (x, y) = (i as i32 * 40, i as i32 * 20);
        fb.set_pixel(x, y, c);
        assert_eq!(fb.get_pixel(x, y), c);
    }
}

#[test]
fn set_then_get_matches_quantize_for_any_color() {
    let mut fb = FrameBuffer::new(4, 4).unwrap();
    let c = Rgb888::new(255, 131, 7);
    fb.set_pixel(1, 2, c);
    assert_eq!(fb.get_pixel(1, 2), c.quantized());
}

#[test]
fn out_of_range_writes_are_ignored() {
    let mut fb = FrameBuffer::new(8, 4).unwrap();
    for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 4), (i32::MIN, i32::MAX)] {
        fb.set_pixel(x, y, Rgb888::WHITE);
        assert_eq!(fb.get_pixel(x, y), Rgb888::BLACK);
    }
    fb.present();
    assert_eq!(fb.snapshot().lit_pixels(), 0);
}

#[test]
fn present_publishes_back_buffer() {
    let mut fb = FrameBuffer::new(2, 2).unwrap();
    fb.set_pixel(1, 1, Rgb888::new(248, 0, 0));
    assert_eq!(fb.snapshot().pixel(1, 1), Some(Rgb888::BLACK));

    fb.present();
    assert_eq!(fb.presented_frames(), 1);
    assert_eq!(fb.snapshot().pixel(1, 1), Some(Rgb888::new(248, 0, 0)));
    assert_eq!(fb.snapshot().pixel(2, 0), None);
}

#[test]
fn rejects_degenerate_dimensions() {
    assert!(FrameBuffer::new(0, 10).is_err());
    assert!(FrameBuffer::new(10, 0).is_err());
    assert!(FrameBuffer::new(MAX_CANVAS_EDGE + 1, 10).is_err());
    assert!(FrameBuffer::new(MAX_CANVAS_EDGE, MAX_CANVAS_EDGE).is_ok());
}

#[test]
fn fill_and_clear_cover_every_pixel() {
    let mut fb = FrameBuffer::new(5, 3).unwrap();
    fb.fill(Rgb888::new(0, 0, 248));
    fb.present();
    assert_eq!(fb.snapshot().lit_pixels(), 15);
    fb.clear();
    fb.present();
    assert_eq!(fb.snapshot().lit_pixels(), 0);
}

#[test]
fn panel_matches_validated_default_size() {
    let panel = FrameBuffer::panel();
    let built = FrameBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT).unwrap();
    assert_eq!((panel.width(), panel.height()), (built.width(), built.height()));
    assert_eq!(panel.snapshot(), built.snapshot());
    assert_eq!(panel.presented_frames(), 0);
}
