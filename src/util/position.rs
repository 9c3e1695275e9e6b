use std::fmt::{Display, Formatter};
use std::ops::Range;

/// A value paired with the byte range of source text it was lowered from.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Positioned<V> {
    pub position: Range<usize>,
    pub value: V,
}

pub fn positioned<V>(v: V, position: Range<usize>) -> Positioned<V> {
    Positioned {
        position,
        value: v,
    }
}

impl<V: Display> Display for Positioned<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
