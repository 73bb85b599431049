use unicode_width::UnicodeWidthStr;

/// Width, measured in columns
pub type Width = u32;

/// The number of columns a string takes up, were it displayed in a
/// terminal-like medium.
///
/// This is what the [`string`](crate::doc_constructors::string) constructor
/// uses to measure its argument. If your output medium counts columns
/// differently (say the text contains escape sequences), measure the string
/// yourself and use
/// [`string_with_width`](crate::doc_constructors::string_with_width) instead.
pub fn str_width(s: &str) -> Width {
    s.width() as Width
}
