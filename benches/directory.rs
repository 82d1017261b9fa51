use criterion::{criterion_group, criterion_main, Criterion, black_box};

use pleasure_map::{
    config::options::ImportOptions,
    data::{filter, CategoryFilter, Criteria, SortOrder},
    import,
    model::{default_categories, Category},
};

/// Synthetic sheet: a few hundred rows cycling through every rule family.
fn sample_csv(rows: usize) -> String {
    let kinds = [
        ("Coffee", "Fresh roasted beans"),
        ("Tap Bar", "Craft beer and live music"),
        ("Fudge", "Homemade ice cream"),
        ("Pier", "Family attraction on the ocean"),
        ("Grill", "Seafood, steaks and pizza on the waterfront"),
    ];
    let mut s = String::from("Name,Address,Website,X,Lat,Lng,Description,Phone\n");
    for i in 0..rows {
        let (name, desc) = kinds[i % kinds.len()];
        s.push_str(&format!(
            "{name} {i},\"{i} Lake Park Blvd, Unit {i}\",,,34.{i:04},-77.{i:04},{desc},910555{i:04}\n"
        ));
    }
    s
}

fn bench_directory(c: &mut Criterion) {
    let csv = sample_csv(300);
    let opts = ImportOptions::default();
    let records = import::import_text(&csv, &opts, None).records;
    let cats = default_categories();

    c.bench_function("import_300_rows", |b| {
        b.iter(|| {
            let out = import::import_text(black_box(&csv), &opts, None);
            black_box(out.records.len())
        })
    });

    let criteria = Criteria {
        search_text: "beer".into(),
        category: CategoryFilter::Only(Category::Bar),
        chamber_only: true,
    };
    c.bench_function("filter_members_first", |b| {
        b.iter(|| {
            let out = filter(black_box(&records), &cats, &criteria, SortOrder::MembersFirst);
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_directory);
criterion_main!(benches);
