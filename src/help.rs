use crate::syntax::Function;

/// Phrase that asks the interactive prompt for [`supported_functions`].
pub const HELP_PHRASE: &str = "show me supported functions";

pub fn supported_functions() -> String {
    let names: Vec<&str> = Function::ALL.iter().map(|f| f.name()).collect();

    format!(
        "The supported functions are:\n\
         Powers of x, rationals, composite functions, exponentials of base e, logarithms of base e,\n\
         trigonometric functions, hyperbolic functions, inverse trigonometric functions\n\
         Known function names: {}\n\
         Negative numbers may be written directly (`x^-1`); to negate anything else use `-1 * a`.",
        names.join(", ")
    )
}
