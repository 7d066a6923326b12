use std::fmt::{self, Debug, Formatter};

/// Prints the contained string as-is, without the quotes that [`Debug`] would add.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prints every item yielded by a clone of the contained iterator as a list.
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
