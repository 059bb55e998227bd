use pretty_assertions::assert_eq;

use super::{BinaryOp, Expr, UnaryOp};

#[test]
fn binary_symbols_round_trip() {
    for op in [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ] {
        assert_eq!(BinaryOp::parse(op.symbol()), Some(op));
    }
    assert_eq!(BinaryOp::parse("%"), None);
    assert_eq!(BinaryOp::parse("negate"), None);
}

#[test]
fn unary_symbols_round_trip() {
    for op in [UnaryOp::Negate, UnaryOp::Sin, UnaryOp::Cos] {
        assert_eq!(UnaryOp::parse(op.symbol()), Some(op));
    }
    assert_eq!(UnaryOp::parse("tan"), None);
    assert_eq!(UnaryOp::parse("+"), None);
}

#[test]
fn binary_apply_follows_ieee_semantics() {
    assert_eq!(BinaryOp::Add.apply(3.0, 4.0), 7.0);
    assert_eq!(BinaryOp::Sub.apply(3.0, 4.0), -1.0);
    assert_eq!(BinaryOp::Mul.apply(3.0, 4.0), 12.0);
    assert_eq!(BinaryOp::Pow.apply(2.0, 10.0), 1024.0);
    // Division by zero is not an error.
    assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
    assert_eq!(BinaryOp::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
    assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
}

#[test]
fn unary_apply() {
    assert_eq!(UnaryOp::Negate.apply(3.5), -3.5);
    assert_eq!(UnaryOp::Sin.apply(0.0), 0.0);
    assert_eq!(UnaryOp::Cos.apply(0.0), 1.0);
}

#[test]
fn fold_policy_is_asymmetric() {
    assert!(BinaryOp::Add.folds_constants());
    assert!(BinaryOp::Sub.folds_constants());
    assert!(BinaryOp::Mul.folds_constants());
    assert!(!BinaryOp::Div.folds_constants());
    assert!(!BinaryOp::Pow.folds_constants());
}

#[test]
fn constructors_build_expected_shapes() {
    let node = Expr::binary(BinaryOp::Add, Expr::number(3.0), Expr::variable("x"));
    let Expr::Operation { name, children } = &node else {
        panic!("expected operation node");
    };
    assert_eq!(name, "+");
    assert_eq!(children.len(), 2);
    assert_eq!(children.get(0), Some(&Expr::Number(3.0)));
    assert_eq!(children.get(1), Some(&Expr::Variable("x".to_owned())));
}

#[test]
fn accessors() {
    assert_eq!(Expr::number(4.0).as_number(), Some(4.0));
    assert_eq!(Expr::variable("x").as_number(), None);
    assert_eq!(Expr::variable("x").as_variable(), Some("x"));
    assert!(Expr::number(0.0).is_number());
    assert!(!Expr::variable("x").is_number());

    let call = Expr::call("toDouble", [Expr::number(1.0)]);
    assert_eq!(call.name(), Some("toDouble"));
    assert_eq!(call.children().map(calc_list::LinkedList::len), Some(1));
    assert_eq!(Expr::number(1.0).name(), None);
    assert_eq!(Expr::number(1.0).children(), None);
}

#[test]
fn display_renders_infix_and_call_forms() {
    let product = Expr::binary(BinaryOp::Mul, Expr::number(3.0), Expr::variable("x"));
    assert_eq!(product.to_string(), "(3 * x)");

    let nested = Expr::binary(
        BinaryOp::Add,
        product.clone(),
        Expr::unary(UnaryOp::Sin, Expr::variable("x")),
    );
    assert_eq!(nested.to_string(), "((3 * x) + sin(x))");

    let request = Expr::call(
        "plot",
        [
            product,
            Expr::variable("x"),
            Expr::number(2.0),
            Expr::number(5.0),
            Expr::number(0.5),
        ],
    );
    assert_eq!(request.to_string(), "plot((3 * x), x, 2, 5, 0.5)");
}

#[test]
fn structural_equality_is_order_sensitive() {
    let a = Expr::binary(BinaryOp::Sub, Expr::number(1.0), Expr::number(2.0));
    let b = Expr::binary(BinaryOp::Sub, Expr::number(2.0), Expr::number(1.0));
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}
