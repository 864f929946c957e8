//! Property-based tests for lowering and listings using `proptest`.

use bumpalo::Bump;
use minic::ast::{AstBuilder, BinaryOp, Body, Node};
use minic::compiler::{CompilationContext, Lowerer, Slot, SymbolTable, verify_program};
use minic::{CompilerOptions, Ir, OpCode, Program, Span, listing};
use proptest::prelude::*;

/// Variables `v0..v{VARS}` are declared at the start of every generated program.
const VARS: usize = 3;

// ---------------------------------------------------------------------------
// Owned program shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Expr {
    Int(i64),
    Char(char),
    Var(usize),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
}

#[derive(Debug, Clone)]
enum Stmt {
    Print(Expr),
    Assign(usize, Expr),
    If(Expr, Vec<Stmt>, Option<Vec<Stmt>>),
}

fn var_name(index: usize) -> String {
    format!("v{}", index)
}

fn build_expr<'a>(ast: &AstBuilder<'a>, expr: &Expr) -> Node<'a> {
    match expr {
        Expr::Int(value) => ast.int(*value),
        Expr::Char(value) => ast.char(*value),
        Expr::Var(index) => ast.load(&var_name(*index)),
        Expr::Binary(op, left, right) => {
            ast.binary(*op, build_expr(ast, left), build_expr(ast, right))
        }
        Expr::Not(operand) => ast.not(build_expr(ast, operand)),
    }
}

fn build_stmt<'a>(ast: &AstBuilder<'a>, stmt: &Stmt) -> Node<'a> {
    match stmt {
        Stmt::Print(expr) => ast.print_int(build_expr(ast, expr)),
        Stmt::Assign(index, expr) => ast.assign(&var_name(*index), build_expr(ast, expr)),
        Stmt::If(condition, then_branch, None) => {
            ast.if_(build_expr(ast, condition), build_body(ast, then_branch))
        }
        Stmt::If(condition, then_branch, Some(else_branch)) => ast.if_else(
            build_expr(ast, condition),
            build_body(ast, then_branch),
            build_body(ast, else_branch),
        ),
    }
}

fn build_body<'a>(ast: &AstBuilder<'a>, stmts: &[Stmt]) -> Body<'a> {
    ast.body(stmts.iter().map(|stmt| build_stmt(ast, stmt)))
}

/// `fn main() { let v0 = 0; ...; <stmts> }`
fn build_program<'a>(ast: &AstBuilder<'a>, stmts: &[Stmt]) -> Body<'a> {
    let decls = (0..VARS).map(|index| ast.let_(&var_name(index), ast.int(0)));
    let body = ast.body(decls.chain(stmts.iter().map(|stmt| build_stmt(ast, stmt))));
    ast.body([ast.function("main", body)])
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_op() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(BinaryOp::ALL.to_vec())
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Expr::Int),
        prop::char::range(' ', '~').prop_map(Expr::Char),
        prop::char::range('\0', '\x1f').prop_map(Expr::Char),
        any::<char>().prop_map(Expr::Char),
        (0..VARS).prop_map(Expr::Var),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (arb_op(), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Expr::Binary(op, Box::new(l), Box::new(r))),
            inner.prop_map(|e| Expr::Not(Box::new(e))),
        ]
    })
}

fn arb_stmt() -> impl Strategy<Value = Stmt> {
    let simple = prop_oneof![
        arb_expr().prop_map(Stmt::Print),
        (0..VARS, arb_expr()).prop_map(|(index, expr)| Stmt::Assign(index, expr)),
    ];
    simple.prop_recursive(3, 24, 3, |inner| {
        (
            arb_expr(),
            prop::collection::vec(inner.clone(), 0..3),
            prop::option::of(prop::collection::vec(inner, 0..3)),
        )
            .prop_map(|(condition, then_branch, else_branch)| {
                Stmt::If(condition, then_branch, else_branch)
            })
    })
}

fn arb_program() -> impl Strategy<Value = Vec<Stmt>> {
    prop::collection::vec(arb_stmt(), 0..6)
}

fn lower_expr(expr: &Expr) -> Vec<Ir> {
    let arena = Bump::new();
    let ast = AstBuilder::new(&arena);
    let mut ctx = CompilationContext::default();
    for index in 0..VARS {
        ctx.symbols.declare(&var_name(index));
    }
    Lowerer::new(&mut ctx)
        .lower(&build_expr(&ast, expr), 0)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn literal_lowers_to_two_items(value in any::<i64>()) {
        let items = lower_expr(&Expr::Int(value));
        prop_assert_eq!(items.len(), 2);
        prop_assert_eq!(&items[0], &Ir::Op(OpCode::Push));
    }

    #[test]
    fn swapping_operands_keeps_length(
        op in prop::sample::select(vec![BinaryOp::Sub, BinaryOp::Div]),
        left in arb_expr(),
        right in arb_expr(),
    ) {
        let binary = |l: &Expr, r: &Expr| {
            Expr::Binary(op, Box::new(l.clone()), Box::new(r.clone()))
        };
        let forward = lower_expr(&binary(&left, &right));
        let swapped = lower_expr(&binary(&right, &left));

        prop_assert_eq!(forward.len(), swapped.len());
        prop_assert_eq!(forward.last(), swapped.last());
        if left != right {
            prop_assert_ne!(forward, swapped);
        }
    }

    #[test]
    fn slots_increase_from_zero(names in prop::collection::vec("[a-z]{1,4}", 1..20)) {
        let mut table = SymbolTable::new();
        for (index, name) in names.iter().enumerate() {
            prop_assert_eq!(table.declare(name), Slot(index as u32));
            prop_assert_eq!(table.resolve(name, Span::default()), Ok(Slot(index as u32)));
        }
        prop_assert_eq!(table.len(), names.len());
    }

    #[test]
    fn generated_programs_are_well_formed(stmts in arb_program()) {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let options = CompilerOptions::default();
        let program = minic::compile_program(build_program(&ast, &stmts), &options).unwrap();

        prop_assert_eq!(program.items().first(), Some(&Ir::Call("main".into())));
        prop_assert_eq!(program.items().last(), Some(&Ir::Halt));
        prop_assert_eq!(verify_program(&program), Ok(()));
    }

    #[test]
    fn listing_decode_preserves_lines(stmts in arb_program()) {
        let arena = Bump::new();
        let ast = AstBuilder::new(&arena);
        let options = CompilerOptions::default();
        let program = minic::compile_program(build_program(&ast, &stmts), &options).unwrap();
        let text = program.to_listing();

        let decoded = Program::from_items(listing::decode(&text).unwrap());
        prop_assert_eq!(text.lines().count(), program.line_count());
        prop_assert_eq!(decoded.line_count(), program.line_count());
        prop_assert_eq!(decoded.to_listing(), text);
    }
}
