use std::any::TypeId;
use std::sync::OnceLock;

use tracing::debug;
use tracing::trace;

use crate::Member;
use crate::Scalar;

/// The ordered name→value table of one concrete enumeration type.
///
/// A registry is built once per type, on first use, inside the
/// [OnceLock] that the `#[enumeration]` macro generates, and lives for
/// the rest of the process. Declaration order is preserved and values
/// are not deduplicated; member instances are created lazily, one per
/// declared name.
pub struct Registry {
    type_name: &'static str,
    type_id: TypeId,
    members: Box<[MemberSlot]>,
    names: Box<[&'static str]>,
}

struct MemberSlot {
    name: &'static str,
    value: Scalar,
    instance: OnceLock<Member>,
}

impl Registry {
    /// Builds the registry for the enumeration type `T` from its declared
    /// (name, value) pairs, in declaration order.
    pub fn build<T: 'static>(
        type_name: &'static str,
        members: impl IntoIterator<Item = (&'static str, Scalar)>,
    ) -> Self {
        let members: Box<[MemberSlot]> = members
            .into_iter()
            .map(|(name, value)| MemberSlot {
                name,
                value,
                instance: OnceLock::new(),
            })
            .collect();
        let names = members.iter().map(|slot| slot.name).collect();
        debug!(
            enumeration = type_name,
            members = members.len(),
            "Built registry"
        );
        Self {
            type_name,
            type_id: TypeId::of::<T>(),
            members,
            names,
        }
    }

    /// The name of the enumeration type this registry belongs to.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|slot| slot.name == name)
    }

    /// The declared value of the named member, if declared.
    pub fn value_of(&self, name: &str) -> Option<&Scalar> {
        self.members
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| &slot.value)
    }

    /// The first declared member, in declaration order, whose value is
    /// equal to `value` under type-sensitive comparison.
    pub fn name_of(&self, value: &Scalar) -> Option<&'static str> {
        self.members
            .iter()
            .find(|slot| slot.value == *value)
            .map(|slot| slot.name)
    }

    /// All declared member names, in declaration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// The singleton instance of the named member, created on first access.
    pub fn instance(&'static self, name: &str) -> Option<&'static Member> {
        let index = self.members.iter().position(|slot| slot.name == name)?;
        Some(self.instance_at(index))
    }

    /// Backs the generated member accessors, which always pass an index
    /// inside the member table.
    ///
    /// Panics if `index` is out of range.
    pub fn instance_at(&'static self, index: usize) -> &'static Member {
        let slot = &self.members[index];
        slot.instance.get_or_init(|| {
            trace!(
                enumeration = self.type_name,
                member = slot.name,
                "Created member instance"
            );
            Member::new(slot.name, slot.value.clone(), self.type_id, self.type_name)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::Registry;
    use super::Scalar;

    struct Sample;

    fn sample() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Registry::build::<Sample>(
                "Sample",
                [
                    ("First", Scalar::Int(7)),
                    ("Second", Scalar::Int(7)),
                    ("Off", Scalar::Bool(false)),
                ],
            )
        })
    }

    #[test]
    fn declaration_order_is_preserved() {
        assert_eq!(sample().names(), ["First", "Second", "Off"]);
        assert_eq!(sample().len(), 3);
    }

    #[test]
    fn duplicate_values_resolve_to_the_first_declared_member() {
        assert_eq!(sample().name_of(&Scalar::Int(7)), Some("First"));
    }

    #[test]
    fn reverse_lookup_is_type_sensitive() {
        assert_eq!(sample().name_of(&Scalar::Bool(false)), Some("Off"));
        assert_eq!(sample().name_of(&Scalar::Int(0)), None);
    }

    #[test]
    fn instances_are_singletons() {
        let first = sample().instance("First").unwrap();
        let again = sample().instance("First").unwrap();
        let second = sample().instance("Second").unwrap();
        assert!(std::ptr::eq(first, again));
        assert!(!std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, sample().instance_at(0)));
    }

    #[test]
    fn unknown_names_are_not_resolved() {
        assert!(sample().value_of("Third").is_none());
        assert!(sample().instance("Third").is_none());
        assert!(!sample().contains("Third"));
    }
}
