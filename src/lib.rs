//! Dispatch a runtime boolean to compile-time specialized code.
//!
//! Code that is generic over a `const` bool often has to be selected by a
//! flag that is only known at runtime. Writing the selection by hand means
//! duplicating the call in both branches of an `if`; [`bool_switch!`]
//! generates both branches instead, binding a constant of the matching
//! value in each:
//!
//! ```
//! fn len<const PADDED: bool>(n: usize) -> usize {
//!     if PADDED { n + 1 } else { n }
//! }
//!
//! let padded = true;
//! let n = static_switch::bool_switch!(padded, PADDED, len::<PADDED>(7));
//! assert_eq!(n, 8);
//! ```
//!
//! [`dispatch_bool`] is the same construct as a generic function, for
//! callers that prefer a trait bound over a macro:
//!
//! ```
//! use static_switch::{dispatch_bool, BoolOp};
//!
//! struct Len(usize);
//!
//! impl BoolOp for Len {
//!     type Output = usize;
//!
//!     fn call<const PADDED: bool>(self) -> usize {
//!         if PADDED { self.0 + 1 } else { self.0 }
//!     }
//! }
//!
//! assert_eq!(dispatch_bool(false, Len(7)), 7);
//! ```
//!
//! Both forms fail to build, rather than erroring at runtime, when the
//! body cannot be instantiated for one of the two constant values:
//!
//! ```compile_fail
//! let flag = true;
//! // Underflows in the `false` arm; both arms must compile.
//! let _ = static_switch::bool_switch!(flag, FLAG, [0u8; FLAG as usize - 1].len());
//! ```

mod dispatch;

pub use self::dispatch::{dispatch_bool, BoolOp};
pub use static_switch_macro_rules::bool_switch;
