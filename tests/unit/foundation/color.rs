use super::*;

#[test]
fn rgb565_roundtrip_is_exact_for_quantized_colors() {
    for c in [
        Rgb888::new(0, 0, 0),
        Rgb888::new(248, 252, 248),
        Rgb888::new(8, 4, 16),
        Rgb888::new(120, 200, 64),
    ] {
        let packed = Rgb565::from(c);
        assert_eq!(Rgb888::from(packed), c);
    }
}

#[test]
fn rgb565_drops_low_bits() {
    let c = Rgb888::new(255, 255, 255);
    assert_eq!(Rgb565::from(c).0, 0xFFFF);
    assert_eq!(c.quantized(), Rgb888::new(248, 252, 248));
}

#[test]
fn hsl_primary_hues() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb888::new(255, 0, 0));
    assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Rgb888::new(0, 255, 0));
    assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Rgb888::new(0, 0, 255));
}

#[test]
fn hsl_hue_wraps_modulo_one() {
    assert_eq!(hsl_to_rgb(1.25, 0.8, 0.4), hsl_to_rgb(0.25, 0.8, 0.4));
    assert_eq!(hsl_to_rgb(-0.75, 0.8, 0.4), hsl_to_rgb(0.25, 0.8, 0.4));
}

#[test]
fn hsl_zero_saturation_is_gray() {
    assert_eq!(hsl_to_rgb(0.3, 0.0, 1.0), Rgb888::WHITE);
    assert_eq!(hsl_to_rgb(0.7, 0.0, 0.0), Rgb888::BLACK);
}

#[test]
fn blend_alpha_extremes() {
    let backgrounds = [Rgb888::BLACK, Rgb888::new(13, 200, 77), Rgb888::WHITE];
    let foregrounds = [Rgb888::new(255, 0, 0), Rgb888::new(1, 2, 3), Rgb888::WHITE];
    for bg in backgrounds {
        for fg in foregrounds {
            assert_eq!(blend(bg, fg, 255), fg);
            assert_eq!(blend(bg, fg, 0), bg);
        }
    }
}

#[test]
fn blend_midpoint_is_average() {
    let out = blend(Rgb888::BLACK, Rgb888::new(200, 100, 50), 128);
    assert_eq!(out, Rgb888::new(100, 50, 25));
}

#[test]
fn lerp_endpoints() {
    let a = Rgb888::new(0, 0, 17);
    let b = Rgb888::new(0, 0, 51);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
}
