use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_aton::{decode, encode, from_str, to_string, Value};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Clone)]
struct Catalog {
    products: Vec<Product>,
}

#[derive(Serialize, Deserialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice Smith".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn sample_nested() -> NestedData {
    NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    }
}

fn catalog(size: u32) -> Catalog {
    Catalog {
        products: (0..size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect(),
    }
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let text = "@id <123>\n@name [Alice Smith]\n@email alice@example.com\n@active <true>\n";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(text)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let data = catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&data)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_array");

    for size in [10, 50, 100, 500].iter() {
        let text = to_string(&catalog(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_str::<Catalog>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let data = sample_nested();
    let text = to_string(&data).unwrap();

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data)))
    });

    c.bench_function("deserialize_nested_struct", |b| {
        b.iter(|| from_str::<NestedData>(black_box(&text)))
    });
}

fn benchmark_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    let bare = Value::from("identifier_without_spaces");
    let bracketed = Value::from("This is a medium length string with some content");
    let escaped = Value::from(r"path\to\file ] with brackets ] and \ backslashes");

    for (name, value) in [("bare", bare), ("bracketed", bracketed), ("escaped", escaped)] {
        let doc: Value = [("s".to_string(), value)]
            .into_iter()
            .collect::<serde_aton::AtonMap>()
            .into();
        let text = encode(&doc).unwrap();

        group.bench_function(format!("encode_{}", name), |b| {
            b.iter(|| encode(black_box(&doc)))
        });
        group.bench_function(format!("decode_{}", name), |b| {
            b.iter(|| decode(black_box(&text)))
        });
    }

    group.finish();
}

fn benchmark_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalars");

    let numbers: Vec<i64> = (0..100).collect();
    let floats: Vec<f64> = (0..100).map(|i| i as f64 * 1.5).collect();
    let numbers_text = encode(&serde_aton::aton!({ "v": numbers })).unwrap();
    let floats_text = encode(&serde_aton::aton!({ "v": floats })).unwrap();

    group.bench_function("decode_integers", |b| {
        b.iter(|| decode(black_box(&numbers_text)))
    });

    group.bench_function("decode_floats", |b| {
        b.iter(|| decode(black_box(&floats_text)))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = sample_user();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("aton_serialize", |b| {
        b.iter(|| serde_aton::to_string(black_box(&user)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    let aton_str = serde_aton::to_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    group.bench_function("aton_deserialize", |b| {
        b.iter(|| serde_aton::from_str::<User>(black_box(&aton_str)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("roundtrip_simple", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&user)).unwrap();
            let _deserialized: User = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_array,
    benchmark_deserialize_array,
    benchmark_nested,
    benchmark_strings,
    benchmark_scalars,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
