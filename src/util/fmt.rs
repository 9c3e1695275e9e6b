use std::fmt::{Display, Error, Formatter};

pub fn write_separated_display<E: Display>(fmt: &mut Formatter, separator: &str, mut list: impl Iterator<Item=E>) -> Result<(), Error> {
    if let Some(first) = list.next() {
        write!(fmt, "{}", first)?
    }
    for item in list { write!(fmt, "{}{}", separator, item)? }
    Ok(())
}

pub fn write_comma_separated_list<E: Display>(fmt: &mut Formatter, list: &[E]) -> Result<(), Error> {
    write_separated_display(fmt, ", ", list.iter())
}
