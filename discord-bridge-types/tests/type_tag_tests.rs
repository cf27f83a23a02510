use discord_bridge_types::TypeTag;
use std::collections::HashSet;
use std::fmt::Debug;

trait Marker {}

#[test]
fn same_type_same_tag() {
    assert_eq!(TypeTag::of::<String>(), TypeTag::of::<String>());
}

#[test]
fn different_types_differ() {
    assert_ne!(TypeTag::of::<String>(), TypeTag::of::<u64>());
}

#[test]
fn unsized_types_are_taggable() {
    let tag = TypeTag::of::<dyn Marker>();
    assert!(tag.is::<dyn Marker>());
    assert!(!tag.is::<dyn Debug>());
}

#[test]
fn name_is_type_name() {
    assert_eq!(TypeTag::of::<u32>().name(), "u32");
    assert_eq!(TypeTag::of::<u32>().to_string(), "u32");
}

#[test]
fn debug_includes_name() {
    let debug = format!("{:?}", TypeTag::of::<bool>());
    assert_eq!(debug, "TypeTag(bool)");
}

#[test]
fn hashes_by_type_id() {
    let mut set = HashSet::new();
    set.insert(TypeTag::of::<i64>());
    set.insert(TypeTag::of::<i64>());
    set.insert(TypeTag::of::<f64>());
    assert_eq!(set.len(), 2);
}
