use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::Reflect;
use crate::derive::Reflect;
use crate::info::{DynamicTypePath, ReflectKind, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef, Struct, TupleStruct};

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Profile {
    #[convert(rename = "display_name")]
    name: String,
    #[convert(readonly)]
    id: u64,
    #[reflect(ignore)]
    cache: Vec<u8>,
    score: Option<u32>,
}

#[derive(Reflect, Debug, Clone, PartialEq)]
struct Meters(f64);

#[derive(Reflect)]
struct Wrapper<T> {
    inner: T,
}

#[derive(Reflect, Clone, Debug, PartialEq)]
#[reflect(opaque, clone, debug)]
enum Level {
    Low,
    High,
}

#[derive(Reflect)]
struct Marker;

#[derive(Reflect)]
#[reflect(type_path = "app::model::Renamed")]
struct Renamed {
    value: u8,
}

#[test]
fn struct_type_info() {
    let info = Profile::type_info().as_struct().unwrap();

    assert!(info.type_is::<Profile>());
    assert_eq!(info.field_len(), 3);
    assert_eq!(info.field_names(), ["name", "id", "score"]);

    let name = info.field("name").unwrap();
    assert_eq!(name.rename(), Some("display_name"));
    assert_eq!(name.dest_name(), "display_name");
    assert!(!name.is_readonly());

    let id = info.field("id").unwrap();
    assert_eq!(id.dest_name(), "id");
    assert!(id.is_readonly());

    assert!(info.field("cache").is_none());
    assert!(info.field("score").unwrap().type_is::<Option<u32>>());
}

#[test]
fn struct_field_access() {
    let mut profile = Profile {
        name: "neo".into(),
        id: 7,
        cache: Vec::new(),
        score: Some(3),
    };

    assert_eq!(profile.field_len(), 3);
    assert_eq!(profile.name_at(2), Some("score"));
    assert_eq!(profile.field("id").unwrap().downcast_ref::<u64>(), Some(&7));
    assert!(profile.field("cache").is_none());

    let ReflectMut::Struct(dyn_struct) = profile.reflect_mut() else {
        panic!("expected a struct");
    };
    dyn_struct
        .field_mut("name")
        .unwrap()
        .set(Box::new(String::from("trinity")))
        .unwrap();
    assert_eq!(profile.name, "trinity");
}

#[test]
fn default_and_clone() {
    let value = Profile::type_info().default_value().unwrap();
    assert_eq!(value.take::<Profile>().unwrap(), Profile::default());

    let profile = Profile {
        name: "neo".into(),
        id: 1,
        cache: Vec::from([1, 2]),
        score: None,
    };
    let cloned = profile.reflect_clone().unwrap().take::<Profile>().unwrap();
    assert_eq!(cloned.name, "neo");
    // Ignored fields are rebuilt from `Default`.
    assert!(cloned.cache.is_empty());
}

#[test]
fn newtype_info() {
    let info = Meters::type_info().as_tuple_struct().unwrap();
    assert!(info.newtype_field().unwrap().type_is::<f64>());

    let meters = Meters(2.5);
    assert_eq!(TupleStruct::field(&meters, 0).unwrap().downcast_ref::<f64>(), Some(&2.5));
    assert_eq!(format!("{:?}", &meters as &dyn Reflect), "Meters(2.5)");

    let wrap = info.wrap_fn().unwrap();
    let built = wrap(Box::new(4.0_f64)).unwrap();
    assert_eq!(built.take::<Meters>().unwrap(), Meters(4.0));
    let rejected = wrap(Box::new(4_u8)).unwrap_err();
    assert!(rejected.is::<u8>());
}

#[test]
fn newtype_with_ignored_field_has_no_wrap() {
    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Tagged(u32, #[reflect(ignore)] u8);

    let info = Tagged::type_info().as_tuple_struct().unwrap();
    assert!(info.newtype_field().is_some());
    assert!(info.wrap_fn().is_none());
    assert_eq!(Tagged(1, 2).1, 2);
}

#[test]
fn generic_type_path() {
    assert_eq!(
        Wrapper::<u8>::type_path(),
        "vc_reflect::tests::Wrapper<u8>"
    );
    assert_eq!(Wrapper::<Option<u8>>::type_name(), "Wrapper<Option<u8>>");
    assert_eq!(Wrapper::<u8>::type_ident(), "Wrapper");

    let info = Wrapper::<String>::type_info().as_struct().unwrap();
    assert!(info.field("inner").unwrap().type_is::<String>());
    assert!(Wrapper::<String>::type_info().default_fn().is_none());
}

#[test]
fn opaque_values() {
    assert_eq!(Level::type_info().kind(), ReflectKind::Opaque);
    assert_eq!(Marker::type_info().kind(), ReflectKind::Opaque);

    let level = Level::High;
    assert!(matches!(level.reflect_ref(), ReflectRef::Opaque(_)));
    assert_eq!(format!("{:?}", &level as &dyn Reflect), "High");

    let cloned = level.reflect_clone().unwrap().take::<Level>().unwrap();
    assert_eq!(cloned, Level::High);
    assert_ne!(cloned, Level::Low);

    assert!(Marker.reflect_clone().unwrap().is::<Marker>());
}

#[test]
fn custom_type_path() {
    assert_eq!(Renamed::type_path(), "app::model::Renamed");
    assert_eq!(Renamed::type_ident(), "Renamed");
    assert_eq!(Renamed::module_path(), Some("app::model"));
    assert_eq!(Renamed { value: 1 }.reflect_type_path(), "app::model::Renamed");
}

#[test]
fn struct_debug_uses_fields() {
    let profile = Profile {
        name: "neo".into(),
        id: 7,
        cache: Vec::new(),
        score: None,
    };
    assert_eq!(
        format!("{:?}", &profile as &dyn Reflect),
        "Profile { name: \"neo\", id: 7, score: None }"
    );
}
