use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyph_raster::{rasterize, Bitmap, RasterOptions, Rasterizer};
use raster_test_data::glyphs;

/// Scale applied to the test glyphs to get realistic pixel sizes.
const SCALE: f32 = 4.0;

fn one_shot(c: &mut Criterion) {
    let options = RasterOptions::scaled(SCALE);
    for glyph in glyphs::ALL {
        let width = (glyph.width as f32 * SCALE) as usize;
        let height = (glyph.height as f32 * SCALE) as usize;
        let mut bitmap = Bitmap::new(width, height);
        c.bench_function(&format!("one_shot/{}", glyph.name), |b| {
            b.iter(|| {
                rasterize(
                    &mut bitmap.as_bitmap_mut(),
                    black_box(glyph.points),
                    glyph.contour_lengths,
                    &options,
                )
                .unwrap()
            })
        });
    }
}

fn reused_context(c: &mut Criterion) {
    let options = RasterOptions::scaled(SCALE);
    let mut rasterizer = Rasterizer::new();
    for glyph in glyphs::ALL {
        let width = (glyph.width as f32 * SCALE) as usize;
        let height = (glyph.height as f32 * SCALE) as usize;
        let mut bitmap = Bitmap::new(width, height);
        c.bench_function(&format!("reused/{}", glyph.name), |b| {
            b.iter(|| {
                rasterizer
                    .rasterize(
                        &mut bitmap.as_bitmap_mut(),
                        black_box(glyph.points),
                        glyph.contour_lengths,
                        &options,
                    )
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, one_shot, reused_context);
criterion_main!(benches);
