use std::io::{Cursor, Read};

use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use whiteborder::{
    AspectMode, AspectRatio, BorderConfig, Error, FitStrategy, Margins, MatAspect,
    OrientationSettings, UploadedImage, archive_to_vec, process_batch, process_files_to_archive,
    process_upload,
};

const FILL: Rgb<u8> = Rgb([30, 60, 90]);

fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

fn png_upload(name: &str, width: u32, height: u32) -> UploadedImage {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, FILL));
    UploadedImage::new(name, encode(img, ImageFormat::Png))
}

fn margins_only(portrait: Margins, landscape: Margins) -> BorderConfig {
    BorderConfig {
        aspect: AspectMode::KeepOriginal,
        portrait: OrientationSettings {
            margins: portrait,
            mat: None,
        },
        landscape: OrientationSettings {
            margins: landscape,
            mat: None,
        },
    }
}

fn entry_names(zip_bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(zip_bytes)).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[test]
fn portrait_percentage_border() {
    let config = margins_only(Margins::new(0.1, 0.1), Margins::new(0.0, 0.0));
    let out = process_upload(&png_upload("tall.png", 100, 200), &config).unwrap();

    assert_eq!(out.name, "bordered_tall.png");
    assert_eq!((out.width, out.height), (120, 240));

    let decoded = image::load_from_memory_with_format(&out.png, ImageFormat::Png)
        .unwrap()
        .to_rgb8();
    assert_eq!(decoded.dimensions(), (120, 240));

    // Image placed at (10, 20)
    assert_eq!(decoded.get_pixel(10, 20), &FILL);
    assert_eq!(decoded.get_pixel(109, 219), &FILL);
    assert_eq!(decoded.get_pixel(9, 20), &Rgb([255, 255, 255]));
    assert_eq!(decoded.get_pixel(10, 19), &Rgb([255, 255, 255]));
    assert_eq!(decoded.get_pixel(110, 219), &Rgb([255, 255, 255]));
    assert_eq!(decoded.get_pixel(109, 220), &Rgb([255, 255, 255]));
}

#[test]
fn every_border_pixel_is_white() {
    let config = margins_only(Margins::new(0.12, 0.06), Margins::new(0.06, 0.12));
    for &(w, h) in &[(64, 48), (48, 64), (50, 50), (33, 71)] {
        let out = process_upload(&png_upload("x.png", w, h), &config).unwrap();
        let decoded = image::load_from_memory(&out.png).unwrap().to_rgb8();
        assert!(out.width >= w && out.height >= h);

        let filled = decoded.pixels().filter(|px| **px == FILL).count();
        let white = decoded
            .pixels()
            .filter(|px| **px == Rgb([255, 255, 255]))
            .count();
        assert_eq!(filled as u32, w * h, "{}x{}", w, h);
        assert_eq!(filled + white, decoded.pixels().len(), "{}x{}", w, h);
    }
}

#[test]
fn landscape_batch_archive_has_one_entry_per_file() {
    let config = margins_only(Margins::new(0.0, 0.0), Margins::new(0.06, 0.12));
    let uploads = vec![
        png_upload("first.png", 200, 100),
        png_upload("second.png", 200, 100),
    ];

    let images = process_batch(&uploads, &config).unwrap();
    assert_eq!(images.len(), 2);
    for img in &images {
        // 200 * 1.12, 100 * 1.24
        assert_eq!((img.width, img.height), (224, 124));
    }

    let zip_bytes = archive_to_vec(&images).unwrap();
    assert_eq!(
        entry_names(&zip_bytes),
        vec!["bordered_first.png", "bordered_second.png"]
    );
}

#[test]
fn jpeg_input_is_stored_as_png_under_original_name() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, FILL));
    let upload = UploadedImage::new("holiday.jpg", encode(img, ImageFormat::Jpeg));

    let out = process_upload(&upload, &BorderConfig::default()).unwrap();
    assert_eq!(out.name, "bordered_holiday.jpg");
    assert_eq!(
        image::guess_format(&out.png).unwrap(),
        ImageFormat::Png
    );
}

#[test]
fn decode_failure_aborts_the_batch() {
    let uploads = vec![
        png_upload("good.png", 20, 20),
        UploadedImage::new("broken.png", b"\x89PNG but not really".to_vec()),
        png_upload("never.png", 20, 20),
    ];

    match process_batch(&uploads, &BorderConfig::default()) {
        Err(Error::Decode { name, .. }) => assert_eq!(name, "broken.png"),
        other => panic!("expected decode error, got {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn empty_batch_is_a_no_op() {
    let images = process_batch(&[], &BorderConfig::default()).unwrap();
    assert!(images.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.zip");
    let inputs: Vec<std::path::PathBuf> = Vec::new();
    let report = process_files_to_archive(&inputs, &output, &BorderConfig::default()).unwrap();
    assert_eq!(report.processed, 0);
    assert!(!output.exists());
}

#[test]
fn files_on_disk_to_archive() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    std::fs::write(&a, png_upload("a.png", 30, 60).data).unwrap();
    std::fs::write(&b, png_upload("b.png", 60, 30).data).unwrap();

    let output = dir.path().join("bordered_images.zip");
    let report = process_files_to_archive(&[&a, &b], &output, &BorderConfig::default()).unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.archive_bytes, std::fs::metadata(&output).unwrap().len());

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(entry_names(&bytes), vec!["bordered_a.png", "bordered_b.png"]);

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut png = Vec::new();
    archive
        .by_name("bordered_a.png")
        .unwrap()
        .read_to_end(&mut png)
        .unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    // 30x60 cropped to 8.5:11 -> 30x38, then 12% / 6% margins
    assert_eq!(decoded.dimensions(), (37, 42));
}

#[test]
fn duplicate_names_do_not_collide() {
    let uploads = vec![png_upload("dup.png", 10, 10), png_upload("dup.png", 10, 10)];
    let images = process_batch(&uploads, &BorderConfig::default()).unwrap();
    let zip_bytes = archive_to_vec(&images).unwrap();
    assert_eq!(
        entry_names(&zip_bytes),
        vec!["bordered_dup.png", "bordered_dup (2).png"]
    );
}

#[test]
fn crop_fit_stays_inside_and_matches_ratio() {
    let mut config = margins_only(Margins::new(0.0, 0.0), Margins::new(0.0, 0.0));
    config.aspect = AspectMode::Fit {
        ratio: AspectRatio::LETTER,
        strategy: FitStrategy::Crop,
    };

    for &(w, h) in &[(120, 90), (90, 120), (301, 97), (64, 64)] {
        let out = process_upload(&png_upload("c.png", w, h), &config).unwrap();
        assert!(out.width <= w && out.height <= h);

        let target: f64 = if out.width > out.height {
            11.0 / 8.5
        } else {
            8.5 / 11.0
        };
        let ratio = out.width as f64 / out.height as f64;
        let tolerance = 1.0 / out.width.min(out.height) as f64 * target.max(1.0);
        assert!((ratio - target).abs() <= tolerance, "{}x{} -> {}x{}", w, h, out.width, out.height);
    }
}

#[test]
fn resize_fit_with_mat_canvas() {
    let portrait_mat = MatAspect {
        border: AspectRatio::new(11.0, 14.0),
        image: AspectRatio::new(8.0, 10.0),
    };
    let landscape_mat = MatAspect {
        border: AspectRatio::new(14.0, 11.0),
        image: AspectRatio::new(10.0, 8.0),
    };
    let config = BorderConfig {
        aspect: AspectMode::Fit {
            ratio: AspectRatio::new(8.0, 10.0),
            strategy: FitStrategy::Resize,
        },
        portrait: OrientationSettings {
            margins: Margins::new(0.0, 0.0),
            mat: Some(portrait_mat),
        },
        landscape: OrientationSettings {
            margins: Margins::new(0.0, 0.0),
            mat: Some(landscape_mat),
        },
    };

    // 120x80 landscape: stretched to 120x96, mat 168x132
    let out = process_upload(&png_upload("wide.png", 120, 80), &config).unwrap();
    assert_eq!((out.width, out.height), (168, 132));

    // 80x120 portrait: stretched to 96x120, mat 132x168
    let out = process_upload(&png_upload("tall.png", 80, 120), &config).unwrap();
    assert_eq!((out.width, out.height), (132, 168));
}

#[test]
fn alpha_images_get_an_opaque_border() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0])));
    let upload = UploadedImage::new("clear.png", encode(img, ImageFormat::Png));
    let config = margins_only(Margins::new(0.5, 0.5), Margins::new(0.5, 0.5));

    let out = process_upload(&upload, &config).unwrap();
    let decoded = image::load_from_memory(&out.png).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    assert_eq!(decoded.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    assert_eq!(decoded.get_pixel(10, 10), Rgba([0, 0, 0, 0]));
}
