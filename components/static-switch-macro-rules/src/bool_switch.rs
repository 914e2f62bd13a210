/// Evaluate `$cond` once and execute `$body` with `const $name: bool`
/// bound to the matching value.
///
/// The body tokens are expanded into both arms of a `match` on the
/// condition, so the body must type check with `$name` equal to `true`
/// *and* to `false`, and both expansions must share a common type.
/// Within the body `$name` is a genuine constant: it can appear in const
/// generic arguments, array lengths, or anywhere else a compile-time
/// `bool` is required.
///
/// The whole invocation is an expression and evaluates to whichever arm
/// ran, so invocations nest for multi-flag dispatch.
#[macro_export]
macro_rules! bool_switch {
    ($cond:expr, $name:ident, $body:expr) => {
        match $cond {
            true => {
                const $name: bool = true;
                $body
            }
            false => {
                const $name: bool = false;
                $body
            }
        }
    };
}
