#![doc = include_str!("../README.md")]

mod error;
mod member;
mod registry;
mod scalar;

pub use error::UndefinedMemberError;
pub use member::Member;
pub use member::MemberRef;
pub use registry::Registry;
pub use scalar::Scalar;

/// Attribute that turns an enum-shaped declaration into a closed-set
/// enumeration type: a non-constructible marker type with a lazily-built
/// member [Registry], one singleton accessor per member, and the
/// [Enumeration] introspection operations.
///
/// Every member must be a unit variant with an explicit literal value —
/// a boolean, integer, float or string. Declaration order is preserved
/// and values need not be unique.
///
/// Example:
///
/// ```
/// # use enumeration::Enumeration as _;
/// # use enumeration::enumeration;
/// #[enumeration]
/// enum Weekday {
///     Monday = 0,
///     Tuesday = 1,
///     Sabbath = "rest",
/// }
///
/// assert_eq!(Weekday::get_value("Tuesday").unwrap(), 1);
/// assert_eq!(Weekday::get_name("rest").unwrap(), "Sabbath");
/// assert!(std::ptr::eq(Weekday::Monday(), Weekday::Monday()));
/// ```
///
/// The generated type cannot be constructed directly; member instances
/// are only available through the accessors and [Enumeration::member]:
///
/// ```compile_fail
/// use enumeration::enumeration;
///
/// #[enumeration]
/// enum Switch {
///     On = true,
///     Off = false,
/// }
///
/// // The opaque field has no public constructor.
/// let switch = Switch {
///     _opaque: enumeration::Opaque { _private: () },
/// };
/// ```
pub use enumeration_macro::enumeration;

/// Zero-sized field type of generated enumeration types. Its only field
/// is private to this crate, which keeps the generated types from being
/// instantiated outside the engine.
pub struct Opaque {
    _private: (),
}

/// The shared introspection contract of every enumeration type, derived
/// entirely from the declared members. Implemented by the [enumeration]
/// macro; consumers only call the provided operations.
///
/// Assertive lookups ([get_value](Self::get_value),
/// [get_name](Self::get_name), [named](Self::named),
/// [member](Self::member) and their synonyms) fail with
/// [UndefinedMemberError] when they cannot resolve; membership queries
/// ([is_defined](Self::is_defined) and its synonyms) report absence as
/// `false` instead.
pub trait Enumeration: Sized + 'static {
    /// The registry of this type's declared members, built on first use
    /// and cached for the process lifetime.
    fn registry() -> &'static Registry;

    /// Resolves a member — by name, or by an instance of this type — to
    /// its declared value.
    ///
    /// ```
    /// # use enumeration::Enumeration as _;
    /// # use enumeration::enumeration;
    /// #[enumeration]
    /// enum Answer {
    ///     Yes = true,
    ///     No = false,
    /// }
    ///
    /// assert_eq!(Answer::get_value("No").unwrap(), false);
    /// assert_eq!(Answer::get_value(Answer::Yes()).unwrap(), true);
    /// ```
    fn get_value<'a>(member: impl Into<MemberRef<'a>>) -> Result<Scalar, UndefinedMemberError> {
        match member.into() {
            MemberRef::Name(name) => Self::named(name),
            MemberRef::Instance(member) => {
                let registry = Self::registry();
                if member.belongs_to(registry) {
                    Ok(member.value().clone())
                } else {
                    Err(UndefinedMemberError::foreign_instance(registry, member))
                }
            }
        }
    }

    /// Reverse lookup: the name of the first declared member whose value
    /// is equal to `value` under type-sensitive comparison, so `0` never
    /// resolves to a member declared as `false`.
    fn get_name(value: impl Into<Scalar>) -> Result<&'static str, UndefinedMemberError> {
        let registry = Self::registry();
        let value = value.into();
        match registry.name_of(&value) {
            Some(name) => Ok(name),
            None => Err(UndefinedMemberError::unknown_value(registry, value)),
        }
    }

    /// Synonym for [get_name](Self::get_name).
    fn with_value(value: impl Into<Scalar>) -> Result<&'static str, UndefinedMemberError> {
        Self::get_name(value)
    }

    /// Synonym for [get_value](Self::get_value) restricted to name input.
    fn named(name: &str) -> Result<Scalar, UndefinedMemberError> {
        let registry = Self::registry();
        registry
            .value_of(name)
            .cloned()
            .ok_or_else(|| UndefinedMemberError::unknown_name(registry, name))
    }

    /// Looks up the singleton instance of a member by name, like the
    /// generated accessors but resolved at runtime.
    fn member(name: &str) -> Result<&'static Member, UndefinedMemberError> {
        let registry = Self::registry();
        registry
            .instance(name)
            .ok_or_else(|| UndefinedMemberError::unknown_name(registry, name))
    }

    /// Whether a member — by name, or by instance — is declared on this
    /// type. An instance of a different enumeration type yields `false`,
    /// even if that type declares a same-named member.
    fn is_defined<'a>(member: impl Into<MemberRef<'a>>) -> bool {
        match member.into() {
            MemberRef::Name(name) => Self::registry().contains(name),
            MemberRef::Instance(member) => member.belongs_to(Self::registry()),
        }
    }

    /// Synonym for [is_defined](Self::is_defined) restricted to name input.
    fn contains(name: &str) -> bool {
        Self::registry().contains(name)
    }

    /// Synonym for [contains](Self::contains).
    fn has(name: &str) -> bool {
        Self::contains(name)
    }

    /// Synonym for [contains](Self::contains).
    fn defines(name: &str) -> bool {
        Self::contains(name)
    }

    /// All declared member names, in declaration order.
    fn all_members() -> &'static [&'static str] {
        Self::registry().names()
    }

    /// The concrete enumeration type's own name.
    fn get_type() -> &'static str {
        Self::registry().type_name()
    }
}
