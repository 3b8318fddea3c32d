/// The single-argument functions the differentiation engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Sinh,
    Cosh,
    Exp,
    Ln,
    Arcsin,
    Arccos,
    Arctan,
}

impl Function {
    pub const ALL: [Function; 13] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sec,
        Self::Csc,
        Self::Cot,
        Self::Sinh,
        Self::Cosh,
        Self::Exp,
        Self::Ln,
        Self::Arcsin,
        Self::Arccos,
        Self::Arctan,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "sec" => Self::Sec,
            "csc" => Self::Csc,
            "cot" => Self::Cot,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "exp" => Self::Exp,
            "ln" => Self::Ln,
            "arcsin" => Self::Arcsin,
            "arccos" => Self::Arccos,
            "arctan" => Self::Arctan,
            _ => return None,
        };
        Some(func)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cot => "cot",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
        }
    }

    pub fn is_known(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}
