use super::*;

#[test]
fn only_video_activates_the_bridge() {
    assert!(MediaKind::Video.activates_bridge());
    assert!(!MediaKind::Image.activates_bridge());
    assert!(!MediaKind::Gallery.activates_bridge());
    assert!(!MediaKind::None.activates_bridge());
}

#[test]
fn aspect_ratio_rejects_zero_components() {
    assert!(AspectRatio::new(0, 9).is_err());
    assert!(AspectRatio::new(16, 0).is_err());
    let r = AspectRatio::new(1080, 1920).unwrap();
    assert!((r.as_f64() - 0.5625).abs() < 1e-12);
}

#[test]
fn landscape_hint_fixes_width_at_base() {
    let size = SurfaceSize::from_aspect(1280, AspectRatio::WIDESCREEN);
    assert_eq!(
        size,
        SurfaceSize {
            width: 1280,
            height: 720
        }
    );
}

#[test]
fn portrait_hint_fixes_height_at_base() {
    let size = SurfaceSize::from_aspect(1080, AspectRatio::PORTRAIT);
    assert_eq!(
        size,
        SurfaceSize {
            width: 608,
            height: 1080
        }
    );
}

#[test]
fn derived_dimension_rounds_to_nearest_pixel() {
    // 100 * 3/7 = 42.857... -> 43 either way around.
    let narrow = SurfaceSize::from_aspect(100, AspectRatio::new(3, 7).unwrap());
    assert_eq!(
        narrow,
        SurfaceSize {
            width: 43,
            height: 100
        }
    );
    let wide = SurfaceSize::from_aspect(100, AspectRatio::new(7, 3).unwrap());
    assert_eq!(
        wide,
        SurfaceSize {
            width: 100,
            height: 43
        }
    );
}

#[test]
fn square_hint_uses_base_for_both() {
    let size = SurfaceSize::from_aspect(640, AspectRatio::SQUARE);
    assert_eq!(
        size,
        SurfaceSize {
            width: 640,
            height: 640
        }
    );
}

#[test]
fn trim_window_validates_bounds() {
    assert!(TrimWindow::new(2.0, 1.0).is_err());
    assert!(TrimWindow::new(-1.0, 5.0).is_err());
    assert!(TrimWindow::new(f64::NAN, 5.0).is_err());
    assert!(TrimWindow::new(0.0, f64::INFINITY).is_err());
    assert!(TrimWindow::new(1.5, 1.5).is_ok());
}

#[test]
fn trim_window_clamps_and_contains() {
    let w = TrimWindow::new(2.0, 8.0).unwrap();
    assert_eq!(w.clamp(0.0), 2.0);
    assert_eq!(w.clamp(5.0), 5.0);
    assert_eq!(w.clamp(11.0), 8.0);
    assert_eq!(w.clamp(f64::NAN), 2.0);
    assert!(w.contains(2.0));
    assert!(w.contains(8.0));
    assert!(!w.contains(8.1));
    assert_eq!(w.len_secs(), 6.0);
}

#[test]
fn bridge_options_defaults_are_generous() {
    let opts = BridgeOptions::default();
    assert_eq!(opts.base_size, 1280);
    assert!(opts.playable_ceiling_secs >= 100_000.0);
}
