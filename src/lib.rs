//! Symbolic differentiation of single-variable expressions.
//!
//! The pipeline is `tokenize -> parse -> differentiate -> render`:
//!
//! ```text
//! "x^2"  ->  Exponent(Var("x"), Const(2))  ->  "((2 * (x^1)) * 1)"
//! ```
//!
//! Derivatives are not simplified.

pub mod calculus;
pub mod error;
pub mod help;
pub mod printer;
pub mod syntax;
pub mod validate;

pub use calculus::{derive, differentiate, Derivative};
pub use error::{ErrorKind, PResult};
pub use printer::render;
pub use syntax::{parse, parse_str, tokenize, Expression, Function, Number, Token};
pub use validate::is_well_formed;

/// Parses `src` and differentiates it.
pub fn derivative_of(src: &str) -> PResult<Derivative<'_>> {
    let expr = parse_str(src)?;
    Ok(derive(&expr))
}

/// Parses `src`, differentiates it and renders the result. Unsupported
/// parts show up as [`printer::UNSUPPORTED_MARKER`].
pub fn render_derivative(src: &str) -> PResult<String> {
    Ok(render(derivative_of(src)?.expression()))
}
