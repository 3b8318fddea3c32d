use std::{fmt, ops::Neg};

/// A numeric literal. Literals written with a `.` are floats, everything
/// else is an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// `self - 1`, used by the power rule.
    pub fn pred(self) -> Self {
        match self {
            Self::Int(v) => match v.checked_sub(1) {
                Some(v) => Self::Int(v),
                None => Self::Float(v as f64 - 1.0),
            },
            Self::Float(v) => Self::Float(v - 1.0),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Int(v) => match v.checked_neg() {
                Some(v) => Self::Int(v),
                None => Self::Float(-(v as f64)),
            },
            Self::Float(v) => Self::Float(-v),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // Only reachable through the API; the lexer rejects these
            Self::Float(v) if !v.is_finite() => write!(f, "{v}"),
            // Plain decimal only, the lexer has no exponent syntax
            Self::Float(v) => {
                let s = v.to_string();
                if s.contains('.') {
                    f.write_str(&s)
                } else {
                    write!(f, "{s}.0")
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Number;

    #[test]
    fn display() {
        assert_eq!(Number::Int(2).to_string(), "2");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Number::Float(12.25).to_string(), "12.25");
    }

    #[test]
    fn display_never_uses_exponents() {
        assert_eq!(Number::Float(0.00001).to_string(), "0.00001");
        assert_eq!(Number::Float(1e20).to_string(), "100000000000000000000.0");
        assert_eq!(Number::Float(-0.0).to_string(), "-0.0");
        assert_eq!(
            Number::Float(1.0000000000065512e-5).to_string(),
            "0.000010000000000065512"
        );
    }

    #[test]
    fn display_non_finite() {
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn zero() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(0.0).is_zero());
        assert!(Number::Float(-0.0).is_zero());
        assert!(!Number::Int(-1).is_zero());
    }

    #[test]
    fn neg() {
        assert_eq!(-Number::Int(3), Number::Int(-3));
        assert_eq!(-Number::Float(0.5), Number::Float(-0.5));
    }

    #[test]
    fn pred() {
        assert_eq!(Number::Int(2).pred(), Number::Int(1));
        assert_eq!(Number::Float(2.5).pred(), Number::Float(1.5));
        assert_eq!(Number::Int(i64::MIN).pred(), Number::Float(i64::MIN as f64 - 1.0));
    }
}
