use crate::ConvertRegistry;

/// A registration function collected by [`inventory`].
#[doc(hidden)]
pub struct __AutoRegisterFunc(pub fn(&mut ConvertRegistry));

inventory::collect!(__AutoRegisterFunc);

pub(crate) fn register_all(registry: &mut ConvertRegistry) {
    let mut count = 0_usize;
    for func in inventory::iter::<__AutoRegisterFunc> {
        (func.0)(registry);
        count += 1;
    }
    log::debug!("auto registered {count} converter function(s)");
}

/// Declares a function that registers converters, run by
/// [`ConvertRegistry::auto_register`].
///
/// The function must have the signature `fn(&mut ConvertRegistry)`.
/// Requires the `auto_register` feature.
///
/// # Example
///
/// ```
/// use vc_convert::{ConvertRegistry, auto_register};
///
/// fn register_units(registry: &mut ConvertRegistry) {
///     registry.register(|meters: &f64| Ok::<_, core::convert::Infallible>(*meters as u32));
/// }
///
/// auto_register!(register_units);
///
/// let mut registry = ConvertRegistry::new();
/// assert!(registry.auto_register());
/// assert!(registry.contains(
///     core::any::TypeId::of::<f64>(),
///     core::any::TypeId::of::<u32>(),
/// ));
/// ```
#[macro_export]
macro_rules! auto_register {
    ($func:path) => {
        const _: () = {
            $crate::__macro_exports::inventory::submit! {
                $crate::__macro_exports::__AutoRegisterFunc($func)
            }
        };
    };
}
