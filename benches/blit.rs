use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blit_lessons::core::{Canvas, Color, Rect, RenderContext};
use blit_lessons::lessons::{GeometryLesson, Lesson};

fn sprite(width: u32, height: u32) -> Vec<Color> {
    (0..width * height)
        .map(|i| Color::rgba((i % 256) as u8, (i / 7 % 256) as u8, 80, 255))
        .collect()
}

fn bench_blit(c: &mut Criterion) {
    let source = sprite(200, 200);
    let src = Rect::new(0, 0, 200, 200);

    c.bench_function("blit_unscaled_200", |b| {
        let mut canvas = Canvas::new(640, 480);
        b.iter(|| canvas.blit(black_box(&source), 200, src, Rect::new(100, 100, 200, 200)));
    });

    c.bench_function("blit_stretched_640x480", |b| {
        let mut canvas = Canvas::new(640, 480);
        b.iter(|| canvas.blit(black_box(&source), 200, src, Rect::new(0, 0, 640, 480)));
    });
}

fn bench_geometry(c: &mut Criterion) {
    let lesson = GeometryLesson::new();

    c.bench_function("geometry_render_640x480", |b| {
        let mut ctx = RenderContext::new(640, 480);
        b.iter(|| lesson.render(black_box(&mut ctx)));
    });
}

criterion_group!(benches, bench_blit, bench_geometry);
criterion_main!(benches);
