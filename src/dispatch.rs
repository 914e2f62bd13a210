/// An operation that can be specialized over a compile-time boolean.
///
/// Implementors write `call` once, generic over `const FLAG: bool`, and
/// [`dispatch_bool`] selects the instantiation matching a runtime flag.
/// Both instantiations must produce the same [`Output`](BoolOp::Output)
/// type and must type check, even though only one runs for a given flag.
pub trait BoolOp {
    type Output;

    fn call<const FLAG: bool>(self) -> Self::Output;
}

/// Invoke `op` with a compile-time constant equal to `flag`.
///
/// The flag is evaluated exactly once and exactly one instantiation of
/// [`BoolOp::call`] runs. The operation is consumed, so it can carry
/// owned state into whichever instantiation is selected.
#[inline]
pub fn dispatch_bool<Op: BoolOp>(flag: bool, op: Op) -> Op::Output {
    if flag {
        op.call::<true>()
    } else {
        op.call::<false>()
    }
}
