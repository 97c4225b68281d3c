use std::fmt::{self, Display, Formatter};

/// Writes the provided items in the form `[a, b, c]`, using their [`Display`] implementations.
pub(crate) fn write_bracketed<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(f, "[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            write!(f, ", ")?;
        }
        Display::fmt(item, f)?;
    }
    write!(f, "]")
}
