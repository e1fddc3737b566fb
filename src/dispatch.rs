//! One trait, two layouts: static and dynamic dispatch.

use std::mem::size_of;

pub trait AcquireValue {
    fn acquire_value(&self) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct A {
    pub value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct B {
    pub content: i32,
}

impl AcquireValue for A {
    fn acquire_value(&self) -> i32 {
        self.value
    }
}

impl AcquireValue for B {
    fn acquire_value(&self) -> i32 {
        self.content
    }
}

/// Monomorphized per `T`; no vtable involved.
pub fn get_value<T: AcquireValue>(source: &T) -> i32 {
    source.acquire_value()
}

/// A single copy for all implementors, called through a vtable.
pub fn get_value_dyn(source: &dyn AcquireValue) -> i32 {
    source.acquire_value()
}

/// Sizes of a thin reference and a trait-object reference.
pub fn reference_sizes() -> (usize, usize) {
    (size_of::<&A>(), size_of::<&dyn AcquireValue>())
}
