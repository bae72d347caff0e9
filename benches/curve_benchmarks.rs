use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use linea::prelude::*;
use linea::{Curve, Quadtree, bounding_rect_for_points, score_ordering, squarify};
use linea_types::point::SpatialPoint;

fn scattered_points(n: usize) -> Vec<Point<f64>> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Point::new((t * 0.618_034).fract() * 360.0 - 180.0, (t * 0.414_214).fract() * 180.0 - 90.0)
        })
        .collect()
}

fn build_tree(points: &[Point<f64>]) -> Quadtree<usize> {
    let cell = squarify(bounding_rect_for_points(points).unwrap());
    let payloads = points
        .iter()
        .enumerate()
        .map(|(i, &p)| SpatialPoint::from_point(p, i))
        .collect();
    Quadtree::from_points(cell, payloads, 96, 1e-9).unwrap()
}

fn benchmark_quadtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree");

    for size in [100, 1_000, 10_000] {
        let points = scattered_points(size);

        group.bench_with_input(BenchmarkId::new("build", size), &points, |b, points| {
            b.iter(|| build_tree(black_box(points)))
        });

        let tree = build_tree(&points);
        for curve in [Curve::Hilbert, Curve::Morton] {
            group.bench_with_input(
                BenchmarkId::new(format!("traverse_{}", curve.name()), size),
                &tree,
                |b, tree| b.iter(|| curve.traverse(black_box(tree)).len()),
            );
        }
    }

    group.finish();
}

fn benchmark_quality(c: &mut Criterion) {
    let mut group = c.benchmark_group("quality");
    group.sample_size(20);

    for size in [50, 200, 500] {
        let points = scattered_points(size);
        let single = ProjectionConfig::default();
        let averaged = ProjectionConfig::default().with_average_over_k(true);

        group.bench_with_input(BenchmarkId::new("single_k", size), &points, |b, points| {
            b.iter(|| score_ordering(black_box(points), &single).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("averaged_k", size), &points, |b, points| {
            b.iter(|| score_ordering(black_box(points), &averaged).unwrap())
        });
    }

    group.finish();
}

fn benchmark_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    group.sample_size(10);

    // 20 regions x 20 districts x 10 sites
    let mut forest = Forest::new();
    let points = scattered_points(20 + 20 * 20 + 20 * 20 * 10);
    let mut next = points.iter();
    for r in 0..20 {
        let Some(&p) = next.next() else { break };
        let region = forest
            .add_root(Entity::new(format!("r{r}"), format!("Region {r}")).with_position(p.x(), p.y()))
            .unwrap();
        for d in 0..20 {
            let Some(&p) = next.next() else { break };
            let district = forest
                .add_child(
                    region,
                    Entity::new(format!("r{r}.d{d}"), format!("District {d}"))
                        .with_position(p.x(), p.y()),
                )
                .unwrap();
            for s in 0..10 {
                let Some(&p) = next.next() else { break };
                forest
                    .add_child(
                        district,
                        Entity::new(format!("r{r}.d{d}.s{s}"), format!("Site {s}"))
                            .with_position(p.x(), p.y()),
                    )
                    .unwrap();
            }
        }
    }

    let projector = Projector::default();
    for curve in [Curve::Hilbert, Curve::Morton] {
        let strategy = projector.curve_strategy(curve);
        group.bench_function(curve.name(), |b| {
            b.iter(|| projector.project_with(black_box(&forest), &strategy).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_quadtree,
    benchmark_quality,
    benchmark_projection
);
criterion_main!(benches);
