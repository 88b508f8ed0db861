use criterion::{criterion_group, criterion_main, Criterion};
use directory_rbac::{ComparisonOperator, ConstraintCodec, Hierarchy, Relationship, Role, RoleConstraint};
use std::hint::black_box;

fn bench_constraint_encode(c: &mut Criterion) {
    let codec = ConstraintCodec::with_delimiter('$').unwrap();
    let constraint = RoleConstraint::filter("ecomm.merchant.id", "AccountId=12345&WithdrawLimit=500");

    c.bench_function("constraint_encode", |b| {
        b.iter(|| black_box(codec.encode("BANK_USER", &constraint).unwrap()))
    });
}

fn bench_constraint_decode(c: &mut Criterion) {
    let codec = ConstraintCodec::with_delimiter('$').unwrap();
    let raw = "BANK_USER$type$filter$ecomm.merchant.id$AccountId=12345&WithdrawLimit=500";

    c.bench_function("constraint_decode", |b| {
        b.iter(|| black_box(codec.decode(raw).unwrap()))
    });
}

fn bench_operator_lookup(c: &mut Criterion) {
    c.bench_function("operator_lookup", |b| {
        b.iter(|| black_box(ComparisonOperator::from_name(" gte ")))
    });
}

fn bench_ascendants(c: &mut Criterion) {
    let mut roles = Hierarchy::default();

    // Create a deep role hierarchy
    let names = ["role1", "role2", "role3", "role4", "role5", "role6", "role7", "role8"];
    for name in names.iter() {
        roles.insert_node(Role::new(*name)).unwrap();
    }

    // Set up inheritance chain
    for i in 1..names.len() {
        roles
            .add_relationship(&Relationship::new(names[i], names[i - 1]))
            .unwrap();
    }

    c.bench_function("hierarchy_ascendants", |b| {
        b.iter(|| black_box(roles.ascendants("role8").unwrap()))
    });
}

criterion_group!(
    benches,
    bench_constraint_encode,
    bench_constraint_decode,
    bench_operator_lookup,
    bench_ascendants
);
criterion_main!(benches);
