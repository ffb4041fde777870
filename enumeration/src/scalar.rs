use std::fmt;

/// A tagged scalar value carried by an enumeration member.
///
/// Lookups compare tagged values, never raw representations, so
/// [`Scalar::Int`]\(0\) and [`Scalar::Bool`]\(false\) are distinct and a
/// reverse lookup by `0` cannot resolve to a member declared as `false`.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl PartialEq<bool> for Scalar {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Self::Bool(value) if value == other)
    }
}

impl PartialEq<i32> for Scalar {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Self::Int(value) if *value == i64::from(*other))
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Self::Int(value) if value == other)
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Self::Float(value) if value == other)
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Str(value) if value == other)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "'{value}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn equality_is_type_sensitive() {
        assert_ne!(Scalar::Int(0), Scalar::Bool(false));
        assert_ne!(Scalar::Int(1), Scalar::Bool(true));
        assert_ne!(Scalar::Int(0), Scalar::Float(0.0));
        assert_ne!(Scalar::Str("0".to_owned()), Scalar::Int(0));
        assert_eq!(Scalar::Int(0), Scalar::Int(0));
        assert_eq!(Scalar::Bool(false), Scalar::Bool(false));
    }

    #[test]
    fn equality_against_primitives() {
        assert_eq!(Scalar::Int(1), 1);
        assert_eq!(Scalar::Bool(true), true);
        assert_eq!(Scalar::Float(1.5), 1.5);
        assert_eq!(Scalar::Str("on".to_owned()), "on");
        assert_ne!(Scalar::Bool(false), 0);
        assert_ne!(Scalar::Int(0), false);
    }

    #[test]
    fn display() {
        assert_eq!(Scalar::Int(-3).to_string(), "-3");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
        assert_eq!(Scalar::Str("rest".to_owned()).to_string(), "'rest'");
    }
}
