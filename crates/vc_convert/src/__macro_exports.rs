//! Items used by [`auto_register!`](crate::auto_register!), not public API.
#![doc(hidden)]

pub use inventory;

pub use crate::auto_register::__AutoRegisterFunc;
