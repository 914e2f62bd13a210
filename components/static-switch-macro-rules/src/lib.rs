//! This crate defines the `macro_rules` macros behind the
//! `static-switch` crate. They are re-exported from the root of
//! `static-switch`; depend on that crate rather than this one,
//! so the macro and library versions stay locked together.

mod bool_switch;
