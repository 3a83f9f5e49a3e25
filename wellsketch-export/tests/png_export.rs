#![cfg(feature = "raster")]

use wellsketch_core::{Composer, ComposerOptions, ElementConfig, Margins, StaticProvider};
use wellsketch_export::{ExportConfig, ExportFormat, VectorExporter};

fn histogram(png_bytes: &[u8]) -> [u32; 256] {
    let img = image::load_from_memory(png_bytes).unwrap().to_rgba8();
    let mut hist = [0u32; 256];
    for p in img.pixels() {
        // bucket by red channel for stability across tiny colour diffs
        hist[p[0] as usize] += 1;
    }
    hist
}

#[test]
fn png_histogram_is_stable() {
    let exporter = VectorExporter::new(ExportConfig { width: 200, height: 400, ..ExportConfig::default() });
    let composer = Composer::default();
    let provider = StaticProvider::sample();

    let dir = tempfile::tempdir().unwrap();
    let f1 = dir.path().join("w1.png");
    let f2 = dir.path().join("w2.png");

    exporter.export(&f1, ExportFormat::Png, &composer, &provider).unwrap();
    exporter.export(&f2, ExportFormat::Png, &composer, &provider).unwrap();
    let h1 = histogram(&std::fs::read(&f1).unwrap());
    let h2 = histogram(&std::fs::read(&f2).unwrap());
    assert_eq!(h1, h2, "Histogram differs between identical renders");
}

#[test]
fn png_draws_casing_body_over_cement() {
    let exporter = VectorExporter::new(ExportConfig { width: 240, height: 440, ..ExportConfig::default() });
    let composer = Composer::new(ComposerOptions { margins: Margins::uniform(20.0), ..ComposerOptions::default() });
    let provider = StaticProvider::sample();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("well.png");
    let scene = exporter.export(&out, ExportFormat::Png, &composer, &provider).unwrap();

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (240, 440));

    // centre column, halfway down the casing run: gradient mid-stop
    let mid_md = 750.0;
    let y = (scene.scales.vertical.map(mid_md) + scene.offset.y) as u32;
    let centre = img.get_pixel(120, y);
    for (got, want) in centre.0[..3].iter().zip([0xf3u8, 0xf4, 0xf6]) {
        assert!(got.abs_diff(want) <= 4, "centre pixel {:?}", centre);
    }

    // outside the hole stays background
    assert_eq!(img.get_pixel(5, y).0, [255, 255, 255, 255]);
}

#[test]
fn png_export_clips_casing_far_below_the_hole() {
    let exporter = VectorExporter::new(ExportConfig { width: 200, height: 400, ..ExportConfig::default() });
    let provider = StaticProvider::single(ElementConfig::casing(17.5, 1900.0, 13.375, 213.0, 1.0e12));

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deep.png");
    exporter.export(&out, ExportFormat::Png, &Composer::default(), &provider).unwrap();

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (200, 400));
}
