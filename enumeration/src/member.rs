use std::any::TypeId;
use std::fmt;

use crate::Scalar;
use crate::registry::Registry;

/// The singleton instance representing one declared member of one
/// enumeration type.
///
/// Members are only ever handed out as `&'static Member` by the declaring
/// type's [Registry], so two accessor calls for the same member always
/// return the identical reference.
#[derive(Debug)]
pub struct Member {
    name: &'static str,
    value: Scalar,
    owner: TypeId,
    owner_name: &'static str,
}

impl Member {
    pub(crate) fn new(
        name: &'static str,
        value: Scalar,
        owner: TypeId,
        owner_name: &'static str,
    ) -> Self {
        Self {
            name,
            value,
            owner,
            owner_name,
        }
    }

    /// The member's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The member's declared value.
    pub fn value(&self) -> &Scalar {
        &self.value
    }

    /// The name of the enumeration type that declares this member.
    pub fn owner(&self) -> &'static str {
        self.owner_name
    }

    pub(crate) fn belongs_to(&self, registry: &Registry) -> bool {
        self.owner == registry.type_id()
    }
}

/// Rendering a member as a string yields its name, not its value.
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A member reference accepted by lookups: either a member name or a
/// member instance obtained from an accessor.
pub enum MemberRef<'a> {
    Name(&'a str),
    Instance(&'static Member),
}

impl<'a> From<&'a str> for MemberRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'static Member> for MemberRef<'a> {
    fn from(member: &'static Member) -> Self {
        Self::Instance(member)
    }
}
