mod expr;
mod function;
mod lexer;
mod number;
mod parser;
mod token;

pub use expr::Expression;
pub use function::Function;
pub use lexer::{tokenize, Lexer};
pub use number::Number;
pub use parser::{parse, parse_str, Parser};
pub use token::{Operator, Token};
