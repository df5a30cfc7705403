use crate::char::any_char;
use crate::filter::FilterExt;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;

/// Parser that matches a single whitespace character
pub fn whitespace<'src>() -> impl Parser<'src, Output = char> {
    any_char().filter(|c| c.is_whitespace(), "expected whitespace")
}

/// Parser that consumes zero or more whitespace characters
///
/// Always succeeds; consuming nothing is a valid success with the cursor
/// unchanged.
pub fn skip_whitespace<'src>() -> impl Parser<'src, Output = ()> {
    many(whitespace()).map(|_| ())
}
