use super::table::chain_rule;
use crate::syntax::{Expression, Function};

/// Differentiates `expr` with respect to its single implicit variable.
///
/// Total: shapes the engine cannot handle come back wrapped in
/// [`Expression::Unsupported`] instead of failing. Every variable name is
/// treated as the same variable, so `d/dx y` is `1`.
pub fn differentiate<'src>(expr: &Expression<'src>) -> Expression<'src> {
    use Expression as E;

    match expr {
        E::Const(_) => E::num(0),
        E::Var(_) => E::num(1),
        E::Add(f, g) => E::add(differentiate(f), differentiate(g)),
        E::Multiply(f, g) => product_rule(f, g),
        E::Divide(f, g) => quotient_rule(f, g),
        E::Exponent(base, power) => power_rule(base, power),
        E::Call { id, arg } => match Function::from_name(id) {
            Some(func) => chain_rule(func, arg, differentiate(arg)),
            None => unsupported(expr),
        },
        E::Unsupported(_) => unsupported(expr),
    }
}

fn unsupported<'src>(expr: &Expression<'src>) -> Expression<'src> {
    log::warn!("cannot differentiate {expr:?}");
    Expression::unsupported(expr.clone())
}

fn product_rule<'src>(f: &Expression<'src>, g: &Expression<'src>) -> Expression<'src> {
    use Expression as E;

    if f.is_zero() || g.is_zero() {
        return E::num(0);
    }
    if let E::Const(_) = f {
        return E::mul(f.clone(), differentiate(g));
    }
    if let E::Const(_) = g {
        return E::mul(g.clone(), differentiate(f));
    }

    E::add(
        E::mul(differentiate(f), g.clone()),
        E::mul(f.clone(), differentiate(g)),
    )
}

// (f'g - fg') / g^2
fn quotient_rule<'src>(f: &Expression<'src>, g: &Expression<'src>) -> Expression<'src> {
    use Expression as E;

    E::div(
        E::sub(
            E::mul(differentiate(f), g.clone()),
            E::mul(f.clone(), differentiate(g)),
        ),
        E::pow(g.clone(), E::num(2)),
    )
}

fn power_rule<'src>(base: &Expression<'src>, power: &Expression<'src>) -> Expression<'src> {
    use Expression as E;

    match (base, power) {
        (E::Var(_), E::Const(n)) => E::mul(
            E::mul(E::Const(*n), E::pow(base.clone(), E::Const(n.pred()))),
            differentiate(base),
        ),
        // u^v * (ln(u) * v' + (v / u) * u')
        _ => {
            let du = differentiate(base);
            let dv = differentiate(power);
            E::mul(
                E::pow(base.clone(), power.clone()),
                E::add(
                    E::mul(E::apply(Function::Ln, base.clone()), dv),
                    E::mul(E::div(power.clone(), base.clone()), du),
                ),
            )
        }
    }
}
