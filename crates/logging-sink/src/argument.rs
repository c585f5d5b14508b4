use std::fmt::{self, Write as _};

/// Opaque logging argument forwarded verbatim to a [`Sink`](crate::Sink).
///
/// Any [`fmt::Debug`] value qualifies. A bare `&str` renders quoted and
/// escaped; wrap human-readable text in [`Text`] or pass it through
/// [`format_args!`] to have it written as-is.
pub type Argument<'a> = &'a dyn fmt::Debug;

/// Argument adapter whose `Debug` rendering is the wrapped value's
/// [`fmt::Display`] output.
///
/// Context prefixes are forwarded wrapped in `Text`, so console output reads
/// `http listening` rather than `"http" "listening"`.
///
/// # Examples
///
/// ```
/// use logging_sink::{Text, render_arguments};
///
/// assert_eq!(render_arguments(&[&Text("a\tb"), &"a\tb"]), "a\tb \"a\\tb\"");
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Text<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: fmt::Display> fmt::Display for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Renders `args` as a single space-separated line using each value's
/// [`fmt::Debug`] implementation.
///
/// Zero arguments render as the empty string.
///
/// # Examples
///
/// ```
/// use logging_sink::render_arguments;
///
/// assert_eq!(render_arguments(&[]), "");
/// assert_eq!(render_arguments(&[&format_args!("copied"), &3, &[1, 2]]), "copied 3 [1, 2]");
/// ```
#[must_use]
pub fn render_arguments(args: &[Argument<'_>]) -> String {
    let mut line = String::new();
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "{arg:?}");
    }
    line
}
