use core::fmt;

use crate::ops::{List, Optional, Struct, TupleStruct};

/// The default debug formatting of a [`Struct`] reflection.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_ident());
    for (name, value) in dyn_struct.iter_fields() {
        debug.field(name, &value);
    }
    debug.finish()
}

/// The default debug formatting of a [`TupleStruct`] reflection.
pub fn tuple_struct_debug(
    dyn_tuple_struct: &dyn TupleStruct,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut debug = f.debug_tuple(dyn_tuple_struct.reflect_type_ident());
    for index in 0..dyn_tuple_struct.field_len() {
        if let Some(value) = dyn_tuple_struct.field(index) {
            debug.field(&value);
        }
    }
    debug.finish()
}

/// The default debug formatting of a [`List`] reflection.
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(dyn_list.iter()).finish()
}

/// The default debug formatting of an [`Optional`] reflection.
pub fn optional_debug(dyn_optional: &dyn Optional, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_optional.value() {
        Some(value) => f.debug_tuple("Some").field(&value).finish(),
        None => f.write_str("None"),
    }
}
