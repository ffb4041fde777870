#![cfg(test)]

use std::ptr;

use enumeration::Enumeration as _;
use enumeration::Member;
use enumeration::UndefinedMemberError;
use enumeration::enumeration;
use tracing_subscriber::filter::LevelFilter;

#[enumeration]
pub enum TestEnum {
    TestMember = 0,
    OtherMember = 1,
    FalseMember = false,
    TrueMember = true,
}

#[enumeration]
pub enum AnotherEnum {
    DifferentMember = "some value",
}

/// Two types declaring a member with the same name must stay isolated.
#[enumeration]
pub enum Doors {
    Open = 0,
    Closed = 1,
}

#[enumeration]
pub enum Valves {
    Open = "open",
    Shut = "shut",
}

#[enumeration]
pub enum Limits {
    Floor = -40,
    Golden = 1.618,
    Freezing = -0.5,
}

#[enumeration]
pub enum Duplicates {
    First = 7,
    Second = 7,
}

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}

#[test]
fn each_enumeration_is_isolated() {
    enable_tracing();
    assert_eq!(
        AnotherEnum::get_value("DifferentMember").unwrap(),
        "some value"
    );
    assert_eq!(TestEnum::get_value("OtherMember").unwrap(), 1);

    assert!(matches!(
        TestEnum::get_value("DifferentMember"),
        Err(UndefinedMemberError::UnknownName { .. })
    ));
}

#[test]
fn undefined_member_lookup_fails() {
    assert!(matches!(
        TestEnum::member("NonExistent"),
        Err(UndefinedMemberError::UnknownName { .. })
    ));
}

#[test]
fn value_translates_to_member_name() {
    assert_eq!(TestEnum::get_name(0).unwrap(), "TestMember");
}

#[test]
fn with_value_is_a_synonym_for_get_name() {
    assert_eq!(TestEnum::with_value(0).unwrap(), "TestMember");
}

#[test]
fn get_name_fails_on_unmatched_value() {
    assert!(matches!(
        TestEnum::get_name("dummyValue"),
        Err(UndefinedMemberError::UnknownValue { .. })
    ));
}

#[test]
fn get_name_is_type_sensitive() {
    assert_eq!(TestEnum::get_name(0).unwrap(), "TestMember");
    assert_eq!(TestEnum::get_name(false).unwrap(), "FalseMember");
    assert_eq!(TestEnum::get_name(1).unwrap(), "OtherMember");
    assert_eq!(TestEnum::get_name(true).unwrap(), "TrueMember");
}

#[test]
fn members_resolve_by_name() {
    assert_eq!(TestEnum::get_value("OtherMember").unwrap(), 1);
    assert_eq!(TestEnum::get_value("FalseMember").unwrap(), false);
}

#[test]
fn named_is_a_synonym_for_get_value() {
    assert_eq!(TestEnum::named("OtherMember").unwrap(), 1);
    assert_eq!(TestEnum::named("FalseMember").unwrap(), false);
}

#[test]
fn member_existence() {
    assert!(TestEnum::is_defined("TestMember"));
    assert!(TestEnum::is_defined("FalseMember"));
    assert!(!TestEnum::is_defined("ImaginaryMember"));
}

#[test]
fn contains_has_and_defines_are_synonyms() {
    assert!(TestEnum::contains("FalseMember"));
    assert!(!TestEnum::contains("ImaginaryMember"));
    assert!(TestEnum::has("FalseMember"));
    assert!(!TestEnum::has("ImaginaryMember"));
    assert!(TestEnum::defines("FalseMember"));
    assert!(!TestEnum::defines("ImaginaryMember"));
}

#[test]
fn all_members_lists_names_in_declaration_order() {
    assert_eq!(
        TestEnum::all_members(),
        ["TestMember", "OtherMember", "FalseMember", "TrueMember"]
    );
    assert_eq!(AnotherEnum::all_members(), ["DifferentMember"]);
}

#[test]
fn get_type_returns_the_concrete_type_name() {
    assert_eq!(TestEnum::get_type(), "TestEnum");
    assert_eq!(AnotherEnum::get_type(), "AnotherEnum");
}

#[test]
fn accessors_return_member_instances() {
    let member = TestEnum::TestMember();
    assert_eq!(member.name(), "TestMember");
    assert_eq!(*member.value(), 0);
    assert_eq!(member.owner(), "TestEnum");
}

#[test]
fn only_a_single_instance_exists_per_member() {
    let first = TestEnum::TestMember();
    let second = TestEnum::TestMember();
    assert!(ptr::eq(first, second));
    assert!(!ptr::eq(first, TestEnum::OtherMember()));
    assert!(ptr::eq(first, TestEnum::member("TestMember").unwrap()));
}

#[test]
fn member_instances_render_as_their_name() {
    assert_eq!(TestEnum::TrueMember().to_string(), "TrueMember");
    assert_eq!(TestEnum::FalseMember().to_string(), "FalseMember");
    // The name, even when the value is itself a string.
    assert_eq!(AnotherEnum::DifferentMember().to_string(), "DifferentMember");
}

#[test]
fn get_value_accepts_an_instance() {
    assert_eq!(TestEnum::get_value(TestEnum::TestMember()).unwrap(), 0);
}

#[test]
fn get_value_rejects_a_foreign_instance() {
    assert!(matches!(
        TestEnum::get_value(AnotherEnum::DifferentMember()),
        Err(UndefinedMemberError::ForeignInstance { .. })
    ));
}

#[test]
fn is_defined_accepts_an_instance() {
    assert!(TestEnum::is_defined(TestEnum::TestMember()));
    assert!(!TestEnum::is_defined(AnotherEnum::DifferentMember()));
}

#[test]
fn same_named_members_of_unrelated_types_stay_isolated() {
    assert!(Valves::contains("Open"));
    assert!(!Valves::is_defined(Doors::Open()));
    assert!(matches!(
        Valves::get_value(Doors::Open()),
        Err(UndefinedMemberError::ForeignInstance { .. })
    ));
    assert_eq!(Doors::get_value(Doors::Closed()).unwrap(), 1);
    assert_eq!(Valves::get_value(Valves::Shut()).unwrap(), "shut");
}

#[test]
fn duplicate_values_resolve_to_the_first_declared_member() {
    assert_eq!(Duplicates::get_name(7).unwrap(), "First");
    assert!(!ptr::eq(Duplicates::First(), Duplicates::Second()));
}

#[test]
fn negative_and_float_values() {
    assert_eq!(Limits::get_value("Floor").unwrap(), -40);
    assert_eq!(Limits::get_value("Golden").unwrap(), 1.618);
    assert_eq!(Limits::get_name(-0.5).unwrap(), "Freezing");
    assert!(matches!(
        Limits::get_name(-40.0),
        Err(UndefinedMemberError::UnknownValue { .. })
    ));
}

#[test]
fn errors_name_the_queried_type_and_input() {
    let error = TestEnum::get_value("Nope").unwrap_err();
    let message = error.to_string();
    assert!(message.contains("'Nope'"), "{message}");
    assert!(message.contains("TestEnum"), "{message}");

    let error = Valves::get_value(Doors::Open()).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Doors"), "{message}");
    assert!(message.contains("Valves"), "{message}");
}

#[enumeration]
pub enum Lazy {
    Only = 1,
}

#[test]
fn concurrent_first_access_yields_a_single_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| Lazy::Only() as *const Member as usize))
        .collect();
    let mut addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    addresses.dedup();
    assert_eq!(addresses.len(), 1);
}
