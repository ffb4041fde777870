use crate::Member;
use crate::Scalar;
use crate::registry::Registry;

/// The single failure kind of the engine: an assertive lookup that cannot
/// be resolved against the queried type's registry.
///
/// Boolean membership queries never produce this error; absence is
/// reported as `false` there.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UndefinedMemberError {
    #[error("'{member}' is not a member of enumeration '{enumeration}'")]
    UnknownName {
        enumeration: &'static str,
        member: String,
    },

    #[error("no member of enumeration '{enumeration}' has value {value}")]
    UnknownValue {
        enumeration: &'static str,
        value: Scalar,
    },

    #[error("member '{member}' belongs to enumeration '{owner}', not '{enumeration}'")]
    ForeignInstance {
        enumeration: &'static str,
        owner: &'static str,
        member: &'static str,
    },
}

impl UndefinedMemberError {
    pub(crate) fn unknown_name(registry: &Registry, member: &str) -> Self {
        Self::UnknownName {
            enumeration: registry.type_name(),
            member: member.to_owned(),
        }
    }

    pub(crate) fn unknown_value(registry: &Registry, value: Scalar) -> Self {
        Self::UnknownValue {
            enumeration: registry.type_name(),
            value,
        }
    }

    pub(crate) fn foreign_instance(registry: &Registry, member: &'static Member) -> Self {
        Self::ForeignInstance {
            enumeration: registry.type_name(),
            owner: member.owner(),
            member: member.name(),
        }
    }
}
