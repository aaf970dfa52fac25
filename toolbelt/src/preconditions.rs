//! Checks for arguments, state and presence that fail with a formatted [`Error`].
//!
//! The macros only build their message when the check fails:
//!
//! ```
//! use toolbelt::check_argument;
//!
//! fn sqrt(value: f64) -> toolbelt::Result<f64> {
//!     check_argument!(value >= 0.0, "input is negative: %s", value)?;
//!     Ok(value.sqrt())
//! }
//!
//! assert!(sqrt(-1.0).is_err());
//! ```
use std::fmt::{self, Display, Write};

use crate::{Error, Result};

/// Substitutes each `%s` in `template` with the next argument.
///
/// Placeholders without an argument are left as they are. Arguments without a placeholder are
/// appended in square braces, e.g. `"a %s" + [1, 2, 3]` gives `"a 1 [2, 3]"`.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut rest = template;
    let mut args = args.iter();
    let mut next = args.next();

    while let Some(arg) = next {
        let Some(at) = rest.find("%s") else {
            break;
        };
        out.push_str(&rest[..at]);
        push(&mut out, *arg);
        rest = &rest[at + 2..];
        next = args.next();
    }
    out.push_str(rest);

    if let Some(arg) = next {
        out.push_str(" [");
        push(&mut out, *arg);
        for arg in args {
            out.push_str(", ");
            push(&mut out, *arg);
        }
        out.push(']');
    }

    out
}

fn push(out: &mut String, arg: &dyn Display) {
    // Writing to a String only fails if the Display impl itself does.
    let _ = write!(out, "{arg}");
}

pub fn check_argument(expression: bool, message: impl Display) -> Result<()> {
    if expression {
        Ok(())
    } else {
        Err(Error::IllegalArgument(message.to_string()))
    }
}

pub fn check_state(expression: bool, message: impl Display) -> Result<()> {
    if expression {
        Ok(())
    } else {
        Err(Error::IllegalState(message.to_string()))
    }
}

/// Returns the value inside `reference`, or fails with [`Error::Missing`].
pub fn check_not_none<T>(reference: Option<T>, message: impl Display) -> Result<T> {
    reference.ok_or_else(|| Error::Missing(message.to_string()))
}

/// [`check_position_index`] with the index described as `"index"`.
pub fn check_position(index: usize, size: usize) -> Result<usize> {
    check_position_index(index, size, "index")
}

/// Ensures `index` is a valid position in a sequence of `size` elements, i.e. `index <= size`.
pub fn check_position_index(index: usize, size: usize, desc: &str) -> Result<usize> {
    if index > size {
        return Err(Error::IndexOutOfBounds(bad_position_index(index, size, desc)));
    }
    Ok(index)
}

/// Ensures `start..end` is an in-order range of positions in a sequence of `size` elements.
pub fn check_position_indexes(start: usize, end: usize, size: usize) -> Result<()> {
    if end < start || end > size {
        let message = bad_position_indexes(start, end, size);
        return Err(Error::IndexOutOfBounds(message));
    }
    Ok(())
}

fn bad_position_index(index: usize, size: usize, desc: &str) -> String {
    format_message(
        "%s (%s) must not be greater than size (%s)",
        &[&desc, &index, &size],
    )
}

fn bad_position_indexes(start: usize, end: usize, size: usize) -> String {
    if start > size {
        return bad_position_index(start, size, "start index");
    }
    if end > size {
        return bad_position_index(end, size, "end index");
    }
    format_message(
        "end index (%s) must not be less than start index (%s)",
        &[&end, &start],
    )
}

/// Lets the macros take either a plain message or a template with arguments.
#[doc(hidden)]
pub struct Lazy<'a>(pub &'a str, pub &'a [&'a dyn Display]);

impl Display for Lazy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_message(self.0, self.1))
    }
}

/// `check_argument!(expr)`, `check_argument!(expr, message)` or
/// `check_argument!(expr, "template %s", args...)`. Evaluates to `Result<()>`.
#[macro_export]
macro_rules! check_argument {
    ($expression:expr $(,)?) => {
        $crate::preconditions::check_argument($expression, "")
    };
    ($expression:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        if $expression {
            Ok(())
        } else {
            $crate::preconditions::check_argument(
                false,
                $crate::preconditions::Lazy(
                    &$template.to_string(),
                    &[$(&$arg as &dyn ::std::fmt::Display),*],
                ),
            )
        }
    };
}

/// Like [`check_argument!`], failing with [`Error::IllegalState`].
#[macro_export]
macro_rules! check_state {
    ($expression:expr $(,)?) => {
        $crate::preconditions::check_state($expression, "")
    };
    ($expression:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        if $expression {
            Ok(())
        } else {
            $crate::preconditions::check_state(
                false,
                $crate::preconditions::Lazy(
                    &$template.to_string(),
                    &[$(&$arg as &dyn ::std::fmt::Display),*],
                ),
            )
        }
    };
}

/// Evaluates to `Result<T>` holding the value inside an `Option<T>`.
#[macro_export]
macro_rules! check_not_none {
    ($reference:expr $(,)?) => {
        $crate::preconditions::check_not_none($reference, "")
    };
    ($reference:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        match $reference {
            Some(value) => Ok(value),
            None => $crate::preconditions::check_not_none(
                None,
                $crate::preconditions::Lazy(
                    &$template.to_string(),
                    &[$(&$arg as &dyn ::std::fmt::Display),*],
                ),
            ),
        }
    };
}
