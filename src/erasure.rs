//! Generic field types survive compilation.
//!
//! Each `Wrapper<T>` is monomorphized, so asking for the type of `value`
//! reports the concrete argument, never an erased upper bound.

use std::any::type_name;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wrapper<T> {
    value: T,
}

impl<T> Wrapper<T> {
    pub fn new(value: T) -> Self {
        Wrapper { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn field_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Numeric types accepted by [`NumberWrapper`].
pub trait Number: Copy + PartialOrd + std::fmt::Debug {}

impl Number for i32 {}
impl Number for i64 {}
impl Number for f32 {}
impl Number for f64 {}

/// Like [`Wrapper`], with the parameter bounded by [`Number`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberWrapper<T: Number> {
    value: T,
}

impl<T: Number> NumberWrapper<T> {
    pub fn new(value: T) -> Self {
        NumberWrapper { value }
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn field_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}
