// benches/fill.rs
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use descfill::dom::{parse_snapshot, PageDoc};
use descfill::fill::{fill, PageSpec};
use descfill::mapping::Mapping;
use descfill::specs::DatasetKind;

/// Synthetic edit page: one header cell per built-in statcast column, plus
/// some unmapped noise columns.
fn synthetic_page(noise: usize) -> PageDoc {
    let mut html = String::from("<table><thead><tr>");
    for (name, _) in DatasetKind::Statcast.columns() {
        html.push_str(&format!(
            r#"<th><span title="{name}">{name}</span>
               <div><input placeholder="Please enter a description"></div></th>"#
        ));
    }
    for i in 0..noise {
        html.push_str(&format!(
            r#"<th><span title="extra_{i}">extra_{i}</span>
               <div><input placeholder="Please enter a description"></div></th>"#
        ));
    }
    html.push_str("</tr></thead></table>");
    parse_snapshot(&html).expect("synthetic page parses")
}

fn bench_fill(c: &mut Criterion) {
    let mapping = DatasetKind::Statcast.mapping();
    let spec = PageSpec::default();
    let doc = synthetic_page(100);

    c.bench_function("fill_statcast_plus_noise", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut d| {
                let r = fill(&mapping, &mut d, &spec, None);
                black_box(r.updated)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("parse_snapshot_statcast", |b| {
        let html = {
            let mut s = String::from("<table><tr>");
            for (name, _) in DatasetKind::Statcast.columns() {
                s.push_str(&format!(
                    r#"<th><span title="{name}"></span>
                       <input placeholder="Please enter a description"></th>"#
                ));
            }
            s.push_str("</tr></table>");
            s
        };
        b.iter(|| {
            let d = parse_snapshot(black_box(&html)).unwrap();
            black_box(d.len())
        })
    });
}

criterion_group!(benches, bench_fill);
criterion_main!(benches);
