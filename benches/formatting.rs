//! Benchmarks for the per-token rendering helpers.
//!
//! These run once for every literal, name and member reference a decompiler view
//! writes, so they are measured on inputs typical for that hot path:
//! - Numeric literals with and without digit separators
//! - Name sanitizing for clean and hostile names
//! - Tuple rank of flat and nested instantiations
//! - Overload counting on a small hierarchy

extern crate dotscope_display;

use std::{hint::black_box, sync::Arc};

use criterion::{criterion_group, criterion_main, Criterion};
use dotscope_display::prelude::*;

/// Benchmark decimal and hex literals with separators.
fn bench_number_literals(c: &mut Criterion) {
    let decimal = FormatterOptions::new().with_digit_separators(true);
    let hex = decimal.with_hexadecimal(true);

    c.bench_function("number_decimal_grouped", |b| {
        b.iter(|| black_box(decimal.format_i64(black_box(-1_234_567_890))));
    });
    c.bench_function("number_hex_grouped", |b| {
        b.iter(|| black_box(hex.format_u64(black_box(0xDEAD_BEEF_CAFE))));
    });
    c.bench_function("number_plain", |b| {
        b.iter(|| black_box(to_formatted_number(false, "", black_box("1234567890"), 3)));
    });
}

/// Benchmark name sanitizing.
fn bench_filter_name(c: &mut Criterion) {
    let clean = "System.Collections.Generic.Dictionary`2";
    let hostile = "\u{1}\u{2}\u{3}".repeat(200);

    c.bench_function("filter_name_clean", |b| {
        b.iter(|| black_box(filter_name(black_box(Some(clean)))));
    });
    c.bench_function("filter_name_hostile", |b| {
        b.iter(|| black_box(filter_name(black_box(Some(hostile.as_str())))));
    });
}

/// Benchmark tuple rank of `(int, ..., int)` with 9 and with 50 elements.
fn bench_tuple_rank(c: &mut Criterion) {
    let tuples: Vec<CilTypeRc> = (1..=8u32)
        .map(|rank| {
            Arc::new(CilType::new(
                Token::new(0x0100_0000 + rank),
                CilFlavor::ValueType,
                "System",
                &format!("ValueTuple`{rank}"),
                Some("System.Runtime"),
            ))
        })
        .collect();
    let instantiate = |rank: usize, args: Vec<TypeSignature>| {
        SignatureGenericInst::new(
            TypeSignature::ValueType(CilTypeRef::new(&tuples[rank - 1])),
            args,
        )
    };
    let nest = |levels: usize, innermost: usize| {
        let mut inst = instantiate(innermost, vec![TypeSignature::I4; innermost]);
        for _ in 0..levels {
            let mut args = vec![TypeSignature::I4; 7];
            args.push(TypeSignature::GenericInst(inst));
            inst = instantiate(8, args);
        }
        inst
    };

    let nine = nest(1, 2);
    let fifty = nest(7, 1);

    c.bench_function("tuple_rank_9", |b| {
        b.iter(|| black_box(value_tuple_rank(black_box(&nine))));
    });
    c.bench_function("tuple_rank_50", |b| {
        b.iter(|| black_box(value_tuple_rank(black_box(&fifty))));
    });
}

/// Benchmark overload counting on a three-level hierarchy.
fn bench_count_overloads(c: &mut Criterion) {
    let mut parent: Option<CilTypeRc> = None;
    let mut hierarchy = Vec::new();
    for level in 0..3u32 {
        let ty = Arc::new(CilType::new(
            Token::new(0x0200_0001 + level),
            CilFlavor::Class,
            "App",
            &format!("Level{level}"),
            None,
        ));
        if let Some(parent) = &parent {
            ty.set_base(parent);
        }
        for arity in 0..10u32 {
            let method = Arc::new(Method::new(
                Token::new(0x0600_0001 + level * 100 + arity),
                if arity % 2 == 0 { "Draw" } else { "Paint" },
                SignatureMethod::instance(
                    TypeSignature::Void,
                    vec![TypeSignature::I4; (arity + level) as usize],
                ),
            ));
            method.set_declaring_type(&ty);
            ty.methods.push(method);
        }
        hierarchy.push(ty.clone());
        parent = Some(ty);
    }

    let leaf = hierarchy[2].clone();
    let classifier = MemberClassifier::new(&GraphResolver);
    c.bench_function("count_overloads", |b| {
        b.iter(|| black_box(classifier.count_overloads(black_box(&leaf), "Draw")));
    });
}

criterion_group!(
    benches,
    bench_number_literals,
    bench_filter_name,
    bench_tuple_rank,
    bench_count_overloads
);
criterion_main!(benches);
