use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::{ReflectKind, TypeInfo};
use vc_reflect::ops::{List, Optional, ReflectMut, ReflectRef};

use crate::{Coercion, ConvertError, ConvertRegistry};

// -----------------------------------------------------------------------------
// Entry

pub(crate) fn convert(
    registry: &ConvertRegistry,
    from: &dyn Reflect,
    to: &mut dyn Reflect,
) -> Result<(), ConvertError> {
    let outer_path = to.reflect_type_path();
    let Some(to) = indirect_mut(to) else {
        return Err(ConvertError::Unaddressable {
            type_path: outer_path,
        });
    };

    if !matches!(to.reflect_kind(), ReflectKind::Struct | ReflectKind::List) {
        return Err(ConvertError::Unaddressable {
            type_path: to.reflect_type_path(),
        });
    }

    let Some(from) = indirect(from) else {
        log::trace!("source `{}` is `None`, nothing to copy", from.reflect_type_path());
        return Ok(());
    };

    match from.reflect_ref() {
        ReflectRef::List(list) => copy_sequence(registry, list, to),
        _ => copy_fields(registry, from, to),
    }
}

/// Follows `Some` until a non-optional value, `None` if an empty option is met.
fn indirect(mut value: &dyn Reflect) -> Option<&dyn Reflect> {
    while let ReflectRef::Optional(optional) = value.reflect_ref() {
        value = optional.value()?;
    }
    Some(value)
}

fn indirect_mut(mut value: &mut dyn Reflect) -> Option<&mut dyn Reflect> {
    while value.reflect_kind() == ReflectKind::Optional {
        let ReflectMut::Optional(optional) = value.reflect_mut() else {
            return None;
        };
        value = optional.value_mut()?;
    }
    Some(value)
}

// -----------------------------------------------------------------------------
// Sequence

fn copy_sequence(
    registry: &ConvertRegistry,
    from: &dyn List,
    to: &mut dyn Reflect,
) -> Result<(), ConvertError> {
    let to_path = to.reflect_type_path();
    let ReflectMut::List(to) = to.reflect_mut() else {
        return Err(ConvertError::SequenceToNonSequence {
            from: from.reflect_type_path(),
            to: to_path,
        });
    };

    let Ok(list_info) = to.reflect_type_info().as_list() else {
        return Err(ConvertError::SequenceToNonSequence {
            from: from.reflect_type_path(),
            to: to_path,
        });
    };

    // `Vec<Option<E>>` receives `Some(e)`, `Vec<E>` receives `e`.
    let item_info = list_info.item_info();
    let (slot_info, element_info) = match item_info.as_optional() {
        Ok(optional) => (Some(item_info), optional.some_info()),
        Err(_) => (None, item_info),
    };

    for item in from.iter() {
        let mut element = default_of(element_info)?;
        if let Some(item) = indirect(item) {
            copy_fields(registry, item, &mut *element)?;
        }

        let value = match slot_info {
            Some(slot_info) => {
                let mut slot = default_of(slot_info)?;
                wrap_some(&mut *slot, element)?;
                slot
            }
            None => element,
        };

        to.push(value)
            .map_err(|value| ConvertError::MismatchedOutput {
                expected: item_info.ty().path(),
                found: value.reflect_type_path(),
            })?;
    }

    Ok(())
}

fn default_of(info: &TypeInfo) -> Result<Box<dyn Reflect>, ConvertError> {
    info.default_value()
        .ok_or_else(|| ConvertError::NoDefault {
            type_path: info.ty().path(),
        })
}

fn wrap_some(slot: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), ConvertError> {
    let expected = slot.reflect_type_path();
    let ReflectMut::Optional(slot) = slot.reflect_mut() else {
        return Err(ConvertError::MismatchedOutput {
            expected,
            found: value.reflect_type_path(),
        });
    };
    slot.insert_value(value)
        .map(|_| ())
        .map_err(|value| ConvertError::MismatchedOutput {
            expected,
            found: value.reflect_type_path(),
        })
}

// -----------------------------------------------------------------------------
// Fields

/// Copies every field of a source struct into the destination struct.
///
/// Non-struct sources have no fields and copy nothing.
fn copy_fields(
    registry: &ConvertRegistry,
    from: &dyn Reflect,
    to: &mut dyn Reflect,
) -> Result<(), ConvertError> {
    let (ReflectRef::Struct(from_struct), Ok(from_info)) =
        (from.reflect_ref(), from.reflect_type_info().as_struct())
    else {
        return Ok(());
    };

    let to_info = to.reflect_type_info();
    let ReflectMut::Struct(to_struct) = to.reflect_mut() else {
        return Ok(());
    };
    let Ok(to_info) = to_info.as_struct() else {
        return Ok(());
    };

    for field in from_info.iter() {
        let name = field.name();
        let dest_name = field.dest_name();

        let Some(from_value) = from_struct.field(name) else {
            log::trace!("skip `{name}`: not present on `{}`", from_info.ty().path());
            continue;
        };

        match to_info.field(dest_name) {
            None => {
                log::trace!("skip `{name}`: no field `{dest_name}` on `{}`", to_info.ty().path());
                continue;
            }
            Some(dest) if dest.is_readonly() => {
                log::trace!("skip `{name}`: `{dest_name}` is readonly on `{}`", to_info.ty().path());
                continue;
            }
            Some(_) => {}
        }

        let Some(to_value) = to_struct.field_mut(dest_name) else {
            log::trace!("skip `{name}`: `{dest_name}` is not reachable on `{}`", to_info.ty().path());
            continue;
        };

        set(registry, to_value, from_value)?;
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// Transfer

/// Transfers one value, see the crate-level documentation for the rules.
fn set(registry: &ConvertRegistry, to: &mut dyn Reflect, from: &dyn Reflect) -> Result<(), ConvertError> {
    let to = if to.reflect_kind() == ReflectKind::Optional {
        match enter_pointee(registry, to, from)? {
            Some(pointee) => pointee,
            None => return Ok(()),
        }
    } else {
        to
    };

    if let Some(coercion) = Coercion::between(from.reflect_type_info(), to.reflect_type_info()) {
        return coercion.apply(from, to);
    }

    if let ReflectRef::Optional(optional) = from.reflect_ref() {
        return match optional.value() {
            Some(inner) => set(registry, to, inner),
            None => Ok(()),
        };
    }

    let Some(func) = registry.get(from.ty_id(), to.ty_id()) else {
        log::debug!(
            "no converter from `{}` to `{}`, value skipped",
            from.reflect_type_path(),
            to.reflect_type_path(),
        );
        return Ok(());
    };

    let from_path = from.reflect_type_path();
    let to_path = to.reflect_type_path();

    let value = func(from).map_err(|source| ConvertError::Conversion {
        from: from_path,
        to: to_path,
        source,
    })?;

    to.set(value).map_err(|value| ConvertError::MismatchedOutput {
        expected: to_path,
        found: value.reflect_type_path(),
    })
}

/// Handles an optional destination.
///
/// Returns the pointee to continue with, or `None` when the transfer is done.
fn enter_pointee<'a>(
    registry: &ConvertRegistry,
    to: &'a mut dyn Reflect,
    from: &dyn Reflect,
) -> Result<Option<&'a mut dyn Reflect>, ConvertError> {
    let to_info = to.reflect_type_info();
    let ReflectMut::Optional(to) = to.reflect_mut() else {
        return Ok(None);
    };

    // `None` into an option clears it.
    if let ReflectRef::Optional(from) = from.reflect_ref()
        && !from.is_some()
    {
        to.clear();
        return Ok(None);
    }

    if to.is_some() {
        return Ok(to.value_mut());
    }

    let Ok(to_info) = to_info.as_optional() else {
        return Ok(None);
    };
    let pointee_info = to_info.some_info();

    if let Some(pointee) = pointee_info.default_value() {
        return insert(to, pointee).map(Some);
    }

    // No default: build the pointee straight from the source when possible.
    match seed_pointee(registry, pointee_info, from)? {
        Some(pointee) => {
            insert(to, pointee)?;
        }
        None => log::debug!(
            "`{}` has no default value, `{}` skipped",
            pointee_info.ty().path(),
            from.reflect_type_path(),
        ),
    }
    Ok(None)
}

/// A pointee value made from `from` without a default to start with:
/// the result of a [`Coercion`] when one applies, else the output of a
/// registered converter.
fn seed_pointee(
    registry: &ConvertRegistry,
    pointee_info: &TypeInfo,
    from: &dyn Reflect,
) -> Result<Option<Box<dyn Reflect>>, ConvertError> {
    let Some(from) = indirect(from) else {
        return Ok(None);
    };
    let pointee_ty = pointee_info.ty();

    if let Some(coercion) = Coercion::between(from.reflect_type_info(), pointee_info)
        && let Some(value) = coercion.build(from, pointee_info)?
    {
        return Ok(Some(value));
    }

    let Some(func) = registry.get(from.ty_id(), pointee_ty.id()) else {
        return Ok(None);
    };

    func(from)
        .map(Some)
        .map_err(|source| ConvertError::Conversion {
            from: from.reflect_type_path(),
            to: pointee_ty.path(),
            source,
        })
}

fn insert<'a>(
    to: &'a mut dyn Optional,
    value: Box<dyn Reflect>,
) -> Result<&'a mut dyn Reflect, ConvertError> {
    let expected = to.reflect_type_path();
    to.insert_value(value)
        .map_err(|value| ConvertError::MismatchedOutput {
            expected,
            found: value.reflect_type_path(),
        })
}
