//! Performance benchmarks for the minic lowering pipeline.
//!
//! Measures compilation of generated programs of increasing size:
//! - Straight-line: declarations and arithmetic only
//! - Branchy: nested conditionals inside one function
//!
//! ```bash
//! cargo bench --bench lowering_benchmarks
//! ```
//!
//! Run with `--features profile-with-puffin` to record per-function scopes.

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use minic::CompilerOptions;
use minic::ast::{AstBuilder, BinaryOp, Body, Node};
use std::hint::black_box;

const SIZES: [usize; 3] = [10, 100, 1000];

/// `let vN = vN-1 * 3 + N` repeated `count` times, then printed.
fn straight_line<'a>(ast: &AstBuilder<'a>, count: usize) -> Body<'a> {
    let mut stmts = vec![ast.let_("v0", ast.int(1))];
    for n in 1..count {
        let previous = ast.load(&format!("v{}", n - 1));
        let value = ast.binary(
            BinaryOp::Add,
            ast.binary(BinaryOp::Mul, previous, ast.int(3)),
            ast.int(n as i64),
        );
        stmts.push(ast.let_(&format!("v{}", n), value));
    }
    stmts.push(ast.print_int(ast.load(&format!("v{}", count - 1))));
    ast.body([ast.function("main", ast.body(stmts))])
}

/// `count` sibling if/else statements, each with a nested if.
fn branchy<'a>(ast: &AstBuilder<'a>, count: usize) -> Body<'a> {
    let mut stmts: Vec<Node<'a>> = vec![ast.let_("c", ast.read_char())];
    for n in 0..count {
        let inner = ast.if_(
            ast.binary(BinaryOp::Less, ast.load("c"), ast.int(n as i64)),
            ast.body([ast.print_char(ast.char('<'))]),
        );
        stmts.push(ast.if_else(
            ast.binary(BinaryOp::Equal, ast.load("c"), ast.int(n as i64)),
            ast.body([ast.print_char(ast.char('='))]),
            ast.body([inner]),
        ));
    }
    ast.body([ast.function("main", ast.body(stmts))])
}

fn bench_straight_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("straight_line");
    let options = CompilerOptions::default();

    for size in SIZES {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = straight_line(&ast, size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| minic::compile(black_box(*program), black_box(&options)))
        });
    }
    group.finish();
}

fn bench_branchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("branchy");
    let options = CompilerOptions::new().with_verification(true);

    for size in SIZES {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let program = branchy(&ast, size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| minic::compile_program(black_box(*program), black_box(&options)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_straight_line, bench_branchy);
criterion_main!(benches);
