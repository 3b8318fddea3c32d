//! Property tests over randomly generated expression trees.

use quickcheck::{Arbitrary, Gen, QuickCheck};

use dydx::{differentiate, is_well_formed, parse_str, render, Expression as E, Function, Number};

const VARS: [&str; 3] = ["x", "y", "t"];

/// A well-formed tree: only known functions, no Unsupported nodes.
#[derive(Debug, Clone)]
struct Tree(E<'static>);

impl Arbitrary for Tree {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(4);
        Tree(gen_tree(g, depth))
    }
}

fn gen_number(g: &mut Gen) -> Number {
    if bool::arbitrary(g) {
        // i64::MIN would read back as `-` applied to an out-of-range integer
        return Number::Int(i32::arbitrary(g).into());
    }

    // Scale across tiny and huge magnitudes
    let mantissa = f64::from(i32::arbitrary(g)) / 7.0;
    let exponent = i32::from(i8::arbitrary(g)) % 40;
    Number::Float(mantissa * 10f64.powi(exponent))
}

fn gen_tree(g: &mut Gen, depth: usize) -> E<'static> {
    let choice = if depth == 0 {
        u8::arbitrary(g) % 2
    } else {
        u8::arbitrary(g) % 7
    };

    match choice {
        0 => E::Const(gen_number(g)),
        1 => E::var(g.choose(&VARS).copied().unwrap_or("x")),
        2 => E::add(gen_tree(g, depth - 1), gen_tree(g, depth - 1)),
        3 => E::mul(gen_tree(g, depth - 1), gen_tree(g, depth - 1)),
        4 => E::div(gen_tree(g, depth - 1), gen_tree(g, depth - 1)),
        5 => E::pow(gen_tree(g, depth - 1), gen_tree(g, depth - 1)),
        _ => {
            let func = g.choose(&Function::ALL).copied().unwrap_or(Function::Sin);
            E::apply(func, gen_tree(g, depth - 1))
        }
    }
}

#[test]
fn constants_differentiate_to_zero() {
    fn prop(v: i64, w: f64) -> bool {
        differentiate(&E::num(v)) == E::num(0) && differentiate(&E::num(w)) == E::num(0)
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(i64, f64) -> bool);
}

#[test]
fn every_variable_differentiates_to_one() {
    fn prop(name: String) -> bool {
        differentiate(&E::var(&name)) == E::num(1)
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn sum_rule_is_structural() {
    fn prop(f: Tree, g: Tree) -> bool {
        let sum = E::add(f.0.clone(), g.0.clone());
        differentiate(&sum) == E::add(differentiate(&f.0), differentiate(&g.0))
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Tree, Tree) -> bool);
}

#[test]
fn zero_factor_annihilates() {
    fn prop(t: Tree) -> bool {
        differentiate(&E::mul(E::num(0), t.0.clone())) == E::num(0)
            && differentiate(&E::mul(t.0, E::num(0.0))) == E::num(0)
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Tree) -> bool);
}

#[test]
fn power_rule_shape() {
    fn prop(n: i32) -> bool {
        let n = i64::from(n);
        let expr = E::pow(E::var("x"), E::num(n));
        let expected = E::mul(
            E::mul(E::num(n), E::pow(E::var("x"), E::num(n - 1))),
            E::num(1),
        );
        differentiate(&expr) == expected
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(i32) -> bool);
}

#[test]
fn derivatives_stay_well_formed() {
    fn prop(t: Tree) -> bool {
        is_well_formed(&t.0) && is_well_formed(&differentiate(&t.0))
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Tree) -> bool);
}

#[test]
fn rendering_parses_back() {
    fn prop(t: Tree) -> bool {
        let rendered = render(&t.0);
        matches!(parse_str(&rendered), Ok(expr) if expr == t.0)
    }
    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Tree) -> bool);
}

#[test]
fn parser_never_panics() {
    fn prop(input: String) -> bool {
        let _ = parse_str(&input);
        true
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(String) -> bool);
}
