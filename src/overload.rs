//! One `list_to_string` for several element types.
//!
//! Two functions differing only in their generic argument cannot coexist,
//! so the per-type formatting moves into a trait and the compiler picks the
//! implementation from the element type.

use itertools::Itertools;

pub trait ListElement {
    fn describe(&self) -> String;
}

impl ListElement for i32 {
    fn describe(&self) -> String {
        format!("Integer({self})")
    }
}

impl ListElement for String {
    fn describe(&self) -> String {
        format!("String({self})")
    }
}

impl ListElement for &str {
    fn describe(&self) -> String {
        format!("String({self})")
    }
}

/// Every element followed by `", "`, trailing separator included.
pub fn list_to_string<T: ListElement>(list: &[T]) -> String {
    list.iter().map(|item| format!("{}, ", item.describe())).join("")
}
