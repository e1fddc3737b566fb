//! Generic types nested inside themselves.
//!
//! [`Layer::nest`] adds one level the compiler can see. A depth chosen at
//! runtime cannot be a distinct type (every depth would need its own
//! instantiation), so [`Nested`] keeps the depth as data instead and
//! unwrapping is checked rather than cast.

#[derive(Debug, Clone, PartialEq)]
pub struct Layer<T> {
    value: T,
}

impl<T> Layer<T> {
    pub fn new(value: T) -> Self {
        Layer { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn nest(self) -> Layer<Layer<T>> {
        Layer::new(self)
    }
}

/// A value behind a runtime number of layers.
///
/// The layers are a count, not a chain of boxes, so depth, clone, compare
/// and drop cost the same at any depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Nested<T> {
    layers: usize,
    value: T,
}

impl<T> Nested<T> {
    pub fn new(value: T) -> Self {
        Nested { layers: 0, value }
    }

    /// Wraps `self` in `levels` more layers. Saturates at `usize::MAX`.
    pub fn nest(self, levels: usize) -> Self {
        Nested {
            layers: self.layers.saturating_add(levels),
            value: self.value,
        }
    }

    pub fn depth(&self) -> usize {
        self.layers
    }

    pub fn is_leaf(&self) -> bool {
        self.layers == 0
    }

    pub fn innermost(&self) -> &T {
        &self.value
    }

    /// Removes one layer; `None` on a leaf.
    pub fn peel(self) -> Option<Self> {
        let layers = self.layers.checked_sub(1)?;
        Some(Nested {
            layers,
            value: self.value,
        })
    }

    /// The value, but only if the nesting is exactly `depth` layers deep.
    pub fn at_depth(&self, depth: usize) -> Option<&T> {
        (self.layers == depth).then_some(&self.value)
    }

    pub fn into_innermost(self) -> T {
        self.value
    }
}
