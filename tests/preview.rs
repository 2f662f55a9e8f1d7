use std::sync::Arc;

use ndarray::{Array1, Array2, Array3, array};
use pltpreview::{
    Clim, DisplayRange, Figures, FormatCoord, Image, PreviewConfig, Series, ShowOptions,
    colorbar, estimate_range, to_rgba,
};

#[test]
fn thousand_value_ramp_clips_the_top_bin() {
    let ramp = Array1::from_iter((0..1000).map(|v| v as f64))
        .into_shape((10, 100))
        .unwrap();
    let image = Image::gray(ramp).unwrap();
    let range = estimate_range(&image, Some(Clim::Auto)).unwrap();

    let bin = 999.0 / 256.0;
    assert_eq!(range.low(), 0.0);
    assert!((range.high() - 254.0 * bin).abs() < 1e-9);
}

#[test]
fn float_readout_inside_and_outside() {
    let image = Image::gray(Array2::from_shape_fn((3, 3), |(r, c)| (r * 3 + c) as f64)).unwrap();
    let readout = FormatCoord::new(Arc::new(image));
    assert_eq!(
        readout.format(1.0, 1.0),
        "x=1.00        y=1.00        I=4.00000     "
    );
    assert_eq!(readout.format(10.0, 10.0), "x=10.00       y=10.00       ");
}

#[test]
fn color_readout_pads_components() {
    let pixels = Array3::from_shape_vec((1, 2, 3), vec![1u8, 2, 3, 200, 10, 0]).unwrap();
    let readout = FormatCoord::new(Arc::new(Image::channels(pixels).unwrap()));
    assert!(readout.format(0.0, 0.0).ends_with("RGB=001,002,003"));
    assert!(readout.format(1.4, 0.0).ends_with("RGB=200,010,000"));
}

#[test]
fn half_coordinates_round_up() {
    let image = Image::gray(array![[0i32, 1, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
    let readout = FormatCoord::new(Arc::new(image));
    assert!(readout.format(1.5, 0.0).ends_with("I=2           "));
    assert!(readout.format(0.0, 1.5).ends_with("I=6           "));
    assert!(!readout.format(-0.6, 0.0).contains("I="));
    assert!(!readout.format(f64::NAN, 0.0).contains("I="));
}

#[test]
fn x_selects_columns_on_wide_images() {
    let image = Image::gray(array![[0u8, 1, 2, 3]]).unwrap();
    let readout = FormatCoord::new(Arc::new(image));
    assert!(readout.format(3.0, 0.0).ends_with("I=3           "));
    assert!(!readout.format(0.0, 3.0).contains("I="));
}

#[test]
fn raster_clamps_and_hides_nan() {
    let image = Image::gray(array![[-1.0, 0.5, 2.0, f64::NAN]]).unwrap();
    let rgba = to_rgba(&image, DisplayRange::new(0.0, 1.0).unwrap());
    assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
    assert_eq!(&rgba[8..12], &[255, 255, 255, 255]);
    assert_eq!(rgba[15], 0);
}

#[test]
fn uniform_image_has_point_range_and_no_colorbar() {
    let image = Image::gray(Array2::from_elem((5, 5), 3.25f32)).unwrap();
    let range = estimate_range(&image, Some(Clim::Auto)).unwrap();
    assert_eq!((range.low(), range.high()), (3.25, 3.25));
    assert!(colorbar(&image, range).is_none());
}

#[test]
fn queued_session_keeps_ids_in_order() {
    let mut figures = Figures::new();
    let image = Image::gray(array![[0.0, 1.0], [2.0, 3.0]]).unwrap();
    let first = figures.show(image, &ShowOptions::default()).unwrap();
    let lines = figures
        .plot(vec![Series::new(vec![1.0, 4.0, 9.0])], &Default::default())
        .unwrap();
    assert_eq!(first.figure.0, 1);
    assert_eq!(lines[0].figure.0, 2);
    assert_eq!(figures.pending().len(), 2);
    assert_eq!(figures.pending()[1].window_title(), "Figure 2");
}

#[test]
fn clim_text_round_trips() {
    for text in ["auto", "2.5", "10,200"] {
        let clim: Clim = text.parse().unwrap();
        assert_eq!(clim.to_string().parse::<Clim>().unwrap(), clim);
        let json = serde_json::to_string(&clim).unwrap();
        assert_eq!(serde_json::from_str::<Clim>(&json).unwrap(), clim);
    }
}

#[test]
fn config_file_defaults_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.json");
    std::fs::write(&path, r#"{ "plot": { "legend": false } }"#).unwrap();
    let config = PreviewConfig::from_json_file(&path).unwrap();
    assert!(!config.plot.legend);
    assert!(config.plot.grid);
    assert_eq!(config.show, ShowOptions::default());
}
