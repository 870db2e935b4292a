use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::any::TypeId;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use vc_reflect::Reflect;
use vc_reflect::derive::Reflect;

use crate::{ConvertError, ConvertFn, ConvertRegistry};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Debug, Clone, PartialEq)]
struct T1 {
    a: String,
    b: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct T2 {
    a: String,
    b: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct T3 {
    a: Option<String>,
    b: Option<i32>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Foo {
    #[convert(rename = "bar")]
    foo: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Bar {
    bar: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Bar2 {
    bar: String,
}

#[derive(Reflect, Debug, PartialEq)]
struct Event {
    #[convert = "time_unix"]
    time: Option<SystemTime>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct EventUnix {
    time_unix: i64,
}

#[derive(Reflect, Debug, PartialEq)]
struct EventTime {
    time_unix: Option<SystemTime>,
}

fn registry_with_parse() -> ConvertRegistry {
    let mut registry = ConvertRegistry::new();
    registry.register(|s: &String| s.parse::<i32>());
    registry
}

fn unix_seconds(time: &SystemTime) -> Result<i64, crate::BoxError> {
    let secs = time.duration_since(UNIX_EPOCH)?.as_secs();
    Ok(i64::try_from(secs)?)
}

fn from_unix_seconds(secs: &i64) -> Result<SystemTime, crate::BoxError> {
    Ok(UNIX_EPOCH + Duration::from_secs(u64::try_from(*secs)?))
}

const NOV_7_2020: u64 = 1_604_707_200;

// -----------------------------------------------------------------------------
// Entry

#[test]
fn copy_same_fields() {
    let registry = ConvertRegistry::new();
    let from = T1 { a: "hello".into(), b: 7 };
    let mut to = T2::default();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, T2 { a: "hello".into(), b: 7 });
}

#[test]
fn destination_must_be_struct_or_list() {
    let registry = ConvertRegistry::new();
    let from = T1 { a: "x".into(), b: 1 };

    let err = registry.convert(&from, &mut 0_i32).unwrap_err();
    assert!(matches!(err, ConvertError::Unaddressable { type_path: "i32" }));

    let mut empty: Option<T2> = None;
    let err = registry.convert(&from, &mut empty).unwrap_err();
    assert!(matches!(err, ConvertError::Unaddressable { .. }));
    assert!(empty.is_none());
}

#[test]
fn destination_behind_option() {
    let registry = ConvertRegistry::new();
    let from = T1 { a: "x".into(), b: 1 };
    let mut to = Some(T2::default());

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, Some(T2 { a: "x".into(), b: 1 }));
}

#[test]
fn empty_source_copies_nothing() {
    let registry = ConvertRegistry::new();
    let from: Option<T1> = None;
    let mut to = T2 { a: "kept".into(), b: 3 };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, T2 { a: "kept".into(), b: 3 });

    let from = Some(T1 { a: "new".into(), b: 4 });
    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, T2 { a: "new".into(), b: 4 });
}

// -----------------------------------------------------------------------------
// Options

#[test]
fn value_into_option() {
    let registry = ConvertRegistry::new();
    let from = T1 { a: "x".into(), b: 5 };
    let mut to = T3::default();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, T3 { a: Some("x".into()), b: Some(5) });
}

#[test]
fn option_into_option() {
    let registry = ConvertRegistry::new();
    let from = T3 { a: Some("x".into()), b: None };
    let mut to = T3 { a: None, b: Some(9) };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, T3 { a: Some("x".into()), b: None });
}

#[test]
fn option_into_value() {
    let registry = ConvertRegistry::new();
    let from = T3 { a: Some("x".into()), b: None };
    let mut to = T2 { a: String::new(), b: 11 };

    registry.convert(&from, &mut to).unwrap();
    // `None` leaves a non-optional destination untouched.
    assert_eq!(to, T2 { a: "x".into(), b: 11 });
}

#[test]
fn existing_pointee_is_overwritten_in_place() {
    let registry = ConvertRegistry::new();
    let from = T1 { a: "new".into(), b: 2 };
    let mut to = T3 { a: Some("old".into()), b: Some(1) };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, T3 { a: Some("new".into()), b: Some(2) });
}

// -----------------------------------------------------------------------------
// Rename and converters

#[test]
fn rename_with_same_type() {
    let registry = ConvertRegistry::new();
    let from = Foo { foo: "x".into() };
    let mut to = Bar2::default();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.bar, "x");
}

#[test]
fn rename_ignores_the_source_name() {
    #[derive(Reflect)]
    struct Both {
        foo: String,
        bar: String,
    }

    let registry = ConvertRegistry::new();
    let from = Foo { foo: "yolo".into() };
    let mut to = Both {
        foo: "keep".into(),
        bar: String::new(),
    };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.foo, "keep");
    assert_eq!(to.bar, "yolo");
}

#[test]
fn rename_through_converter() {
    let registry = registry_with_parse();
    let from = Foo { foo: "42".into() };
    let mut to = Bar::default();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.bar, 42);
}

#[test]
fn missing_converter_leaves_field() {
    let registry = ConvertRegistry::new();
    let from = Foo { foo: "42".into() };
    let mut to = Bar::default();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.bar, 0);
}

#[test]
fn converter_error_aborts_the_copy() {
    #[derive(Reflect, Default, Debug)]
    #[reflect(default)]
    struct Source {
        name: String,
        count: String,
        tail: String,
    }

    #[derive(Reflect, Default, Debug)]
    #[reflect(default)]
    struct Dest {
        name: String,
        count: i32,
        tail: String,
    }

    let registry = registry_with_parse();
    let from = Source {
        name: "n".into(),
        count: "yolo".into(),
        tail: "t".into(),
    };
    let mut to = Dest::default();

    let err = registry.convert(&from, &mut to).unwrap_err();
    let ConvertError::Conversion { from, to: target, source } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(*from, "alloc::string::String");
    assert_eq!(*target, "i32");
    assert_eq!(source.to_string(), "invalid digit found in string");

    // Fields before the failing one keep their value, later ones are not written.
    assert_eq!(to.name, "n");
    assert_eq!(to.count, 0);
    assert_eq!(to.tail, "");
}

#[test]
fn option_source_through_converter() {
    let mut registry = ConvertRegistry::new();
    registry.register(unix_seconds);

    let from = Event {
        time: Some(UNIX_EPOCH + Duration::from_secs(NOV_7_2020)),
    };
    let mut to = EventUnix::default();
    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.time_unix, NOV_7_2020 as i64);

    let from = Event { time: None };
    let mut to = EventUnix { time_unix: 5 };
    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.time_unix, 5);
}

#[test]
fn option_pointee_seeded_by_converter() {
    let mut registry = ConvertRegistry::new();
    registry.register(from_unix_seconds);

    let from = EventUnix {
        time_unix: NOV_7_2020 as i64,
    };
    let mut to = EventTime { time_unix: None };
    registry.convert(&from, &mut to).unwrap();
    assert_eq!(
        to.time_unix,
        Some(UNIX_EPOCH + Duration::from_secs(NOV_7_2020))
    );
}

#[test]
fn option_pointee_without_default_or_converter_is_skipped() {
    let registry = ConvertRegistry::new();
    let from = EventUnix { time_unix: 1 };
    let mut to = EventTime { time_unix: None };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.time_unix, None);
}

#[test]
fn none_clears_option_without_default() {
    let registry = ConvertRegistry::new();
    let from = EventTime { time_unix: None };
    let mut to = EventTime {
        time_unix: Some(UNIX_EPOCH),
    };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.time_unix, None);
}

#[test]
fn option_pointee_seeded_by_clone() {
    let registry = ConvertRegistry::new();
    let time = UNIX_EPOCH + Duration::from_secs(NOV_7_2020);
    let from = EventTime {
        time_unix: Some(time),
    };
    let mut to = EventTime { time_unix: None };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.time_unix, Some(time));
}

// -----------------------------------------------------------------------------
// Coercions

#[test]
fn numeric_widening() {
    #[derive(Reflect)]
    struct Narrow {
        small: u16,
        ratio: f32,
        signed: i8,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Wide {
        small: u64,
        ratio: f64,
        signed: i64,
    }

    let registry = ConvertRegistry::new();
    let from = Narrow {
        small: 512,
        ratio: 0.5,
        signed: -3,
    };
    let mut to = Wide::default();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!((to.small, to.ratio, to.signed), (512, 0.5, -3));
}

#[test]
fn narrowing_needs_a_converter() {
    #[derive(Reflect)]
    struct Wide {
        value: i64,
    }

    #[derive(Reflect)]
    struct Narrow {
        value: i32,
    }

    let mut registry = ConvertRegistry::new();
    let from = Wide { value: 70 };
    let mut to = Narrow { value: 0 };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.value, 0);

    registry.register(|v: &i64| i32::try_from(*v));
    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.value, 70);
}

#[test]
fn newtype_wrap_and_unwrap() {
    #[derive(Reflect, Debug, Clone, Copy, PartialEq)]
    struct Meters(f64);

    #[derive(Reflect)]
    struct Raw {
        length: f64,
    }

    #[derive(Reflect)]
    struct Measured {
        length: Meters,
    }

    let registry = ConvertRegistry::new();

    let mut measured = Measured { length: Meters(0.0) };
    registry.convert(&Raw { length: 2.5 }, &mut measured).unwrap();
    assert_eq!(measured.length, Meters(2.5));

    let mut raw = Raw { length: 0.0 };
    registry.convert(&measured, &mut raw).unwrap();
    assert_eq!(raw.length, 2.5);
}

#[test]
fn newtype_wrap_into_empty_option() {
    #[derive(Reflect, Debug, Clone, Copy, PartialEq)]
    struct Meters(f64);

    #[derive(Reflect)]
    struct Raw {
        length: f64,
        width: u16,
    }

    #[derive(Reflect)]
    struct Measured {
        length: Option<Meters>,
        width: Option<u64>,
    }

    let registry = ConvertRegistry::new();
    let mut measured = Measured {
        length: None,
        width: None,
    };

    // `Meters` has no default value, it is built from the wrapped source.
    registry
        .convert(&Raw { length: 2.5, width: 3 }, &mut measured)
        .unwrap();
    assert_eq!(measured.length, Some(Meters(2.5)));
    assert_eq!(measured.width, Some(3));
}

#[test]
fn nested_struct_of_same_type_is_cloned() {
    #[derive(Reflect)]
    struct Outer {
        inner: T1,
        tags: Vec<String>,
    }

    let registry = ConvertRegistry::new();
    let from = Outer {
        inner: T1 { a: "in".into(), b: 1 },
        tags: vec!["x".into(), "y".into()],
    };
    let mut to = Outer {
        inner: T1 { a: String::new(), b: 0 },
        tags: vec!["old".into()],
    };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.inner, from.inner);
    // Only a top-level list appends, a list field is replaced as a value.
    assert_eq!(to.tags, from.tags);
}

// -----------------------------------------------------------------------------
// Field policy

#[test]
fn readonly_destination_is_not_written() {
    #[derive(Reflect)]
    struct Account {
        #[convert(readonly)]
        id: u64,
        name: String,
    }

    #[derive(Reflect)]
    struct Input {
        id: u64,
        name: String,
    }

    let registry = ConvertRegistry::new();
    let from = Input {
        id: 99,
        name: "new".into(),
    };
    let mut to = Account {
        id: 1,
        name: "old".into(),
    };

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.id, 1);
    assert_eq!(to.name, "new");
}

#[test]
fn ignored_and_unmatched_fields_are_skipped() {
    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Source {
        a: String,
        only_here: i32,
        #[reflect(ignore)]
        hidden: i32,
    }

    let registry = ConvertRegistry::new();
    let from = Source {
        a: "x".into(),
        only_here: 1,
        hidden: 2,
    };
    let mut to = T2::default();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to, T2 { a: "x".into(), b: 0 });
    assert_eq!(from.hidden, 2);
}

#[test]
fn mismatched_converter_output() {
    let mut registry = ConvertRegistry::new();
    let wrong: ConvertFn = Box::new(|_: &dyn Reflect| Ok(Box::new(1_u8) as Box<dyn Reflect>));
    registry.register_dyn(TypeId::of::<String>(), TypeId::of::<i32>(), wrong);

    let from = Foo { foo: "1".into() };
    let mut to = Bar::default();
    let err = registry.convert(&from, &mut to).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::MismatchedOutput {
            expected: "i32",
            found: "u8",
        }
    ));
}

// -----------------------------------------------------------------------------
// Sequences

#[test]
fn sequence_in_order() {
    let registry = ConvertRegistry::new();
    let from = vec![
        T1 { a: "1".into(), b: 1 },
        T1 { a: "2".into(), b: 2 },
        T1 { a: "3".into(), b: 3 },
    ];
    let mut to: Vec<T2> = Vec::new();

    registry.convert(&from, &mut to).unwrap();
    let names: Vec<&str> = to.iter().map(|t| t.a.as_str()).collect();
    assert_eq!(names, ["1", "2", "3"]);
    assert_eq!(to[2].b, 3);
}

#[test]
fn sequence_appends() {
    let registry = ConvertRegistry::new();
    let from = vec![T1 { a: "new".into(), b: 2 }];
    let mut to = vec![T2 { a: "old".into(), b: 1 }];

    registry.convert(&from, &mut to).unwrap();
    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.len(), 3);
    assert_eq!(to[0].a, "old");
    assert_eq!(to[2].a, "new");
}

#[test]
fn sequence_of_options() {
    let registry = ConvertRegistry::new();
    let from = vec![Some(T1 { a: "x".into(), b: 1 }), None];
    let mut to: Vec<Option<T2>> = Vec::new();

    registry.convert(&from, &mut to).unwrap();
    assert_eq!(
        to,
        vec![Some(T2 { a: "x".into(), b: 1 }), Some(T2::default())]
    );
}

#[test]
fn sequence_into_struct() {
    let registry = ConvertRegistry::new();
    let from = vec![T1 { a: "x".into(), b: 1 }];
    let mut to = T2::default();

    let err = registry.convert(&from, &mut to).unwrap_err();
    assert!(matches!(err, ConvertError::SequenceToNonSequence { .. }));
}

#[test]
fn sequence_element_without_default() {
    let registry = ConvertRegistry::new();
    let from = vec![T2::default()];
    let mut to: Vec<T1> = Vec::new();

    let err = registry.convert(&from, &mut to).unwrap_err();
    assert!(matches!(err, ConvertError::NoDefault { .. }));
    assert!(to.is_empty());
}

#[test]
fn sequence_failure_keeps_earlier_elements() {
    let registry = registry_with_parse();
    let from = vec![Foo { foo: "1".into() }, Foo { foo: "yolo".into() }];
    let mut to: Vec<Bar> = Vec::new();

    let err = registry.convert(&from, &mut to).unwrap_err();
    assert!(matches!(err, ConvertError::Conversion { .. }));
    assert_eq!(to, vec![Bar { bar: 1 }]);
}

// -----------------------------------------------------------------------------
// Shared registry

#[test]
fn shared_registry() {
    let shared = crate::ConvertRegistryArc::default();
    shared.write().register(|s: &String| s.parse::<i32>());

    let worker = shared.clone();
    let handle = std::thread::spawn(move || {
        let mut to = Bar::default();
        worker.convert(&Foo { foo: "8".into() }, &mut to).map(|()| to.bar)
    });
    assert_eq!(handle.join().unwrap().unwrap(), 8);
}

// -----------------------------------------------------------------------------
// Auto registration

#[cfg(feature = "auto_register")]
fn register_unix_seconds(registry: &mut ConvertRegistry) {
    registry.register(unix_seconds);
}

#[cfg(feature = "auto_register")]
crate::auto_register!(register_unix_seconds);

#[cfg(feature = "auto_register")]
#[test]
fn auto_registered_converter() {
    let mut registry = ConvertRegistry::new();
    assert!(registry.auto_register());
    assert!(registry.contains(TypeId::of::<SystemTime>(), TypeId::of::<i64>()));

    let from = Event {
        time: Some(UNIX_EPOCH + Duration::from_secs(NOV_7_2020)),
    };
    let mut to = EventUnix::default();
    registry.convert(&from, &mut to).unwrap();
    assert_eq!(to.time_unix, NOV_7_2020 as i64);
}
