use std::fmt;
use std::ops::Deref;

/// One ticket: the values produced by a single draw.
///
/// Equality is element-wise and order-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DrawResult(Vec<i32>);

impl DrawResult {
    pub fn new(values: Vec<i32>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

impl Deref for DrawResult {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<i32>> for DrawResult {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
