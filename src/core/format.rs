//! Positional template formatting
//!
//! Renders printf-style templates against an ordered argument list. Arguments
//! are converted to text at the call boundary ([`FormatArg`]), so the engine
//! itself only performs string-sequence indexing.
//!
//! Template syntax:
//!
//! - `%%` renders a literal `%` and consumes no argument.
//! - `%x` consumes the next argument and renders it with a `0x` prefix and
//!   hexadecimal digits; the flag applies to that one substitution only.
//! - Any other `%` consumes the next argument. An alphanumeric run directly
//!   after the placeholder is a vestigial type-specifier suffix and is
//!   discarded (`"%d end"` and `"%s end"` render identically).
//! - A placeholder with no argument left renders as a literal `%`.

use std::fmt;

/// A single pre-rendered format argument.
///
/// Captures the plain textual rendering eagerly; integer conversions also
/// capture the hexadecimal digits so `%x` can render them without keeping the
/// original typed value around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatArg {
    text: String,
    hex: Option<String>,
}

impl FormatArg {
    /// Convert any displayable value into an argument with no hexadecimal
    /// rendering. `%x` falls back to the plain text after the `0x` prefix.
    pub fn display<T: fmt::Display>(value: T) -> Self {
        Self {
            text: value.to_string(),
            hex: None,
        }
    }

    /// Plain textual rendering.
    pub fn as_text(&self) -> &str {
        &self.text
    }

    fn hex_digits(&self) -> &str {
        self.hex.as_deref().unwrap_or(&self.text)
    }
}

macro_rules! integer_arg {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for FormatArg {
            fn from(value: $t) -> Self {
                Self {
                    text: value.to_string(),
                    hex: Some(format!("{:x}", value)),
                }
            }
        }
    )*};
}

integer_arg!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! display_arg {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for FormatArg {
            fn from(value: $t) -> Self {
                FormatArg::display(value)
            }
        }
    )*};
}

display_arg!(&str, String, char, bool, f32, f64);

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        FormatArg::display(value)
    }
}

/// Render `template` by substituting `args` positionally.
///
/// Produces exactly one string per call, performs no I/O, and never fails:
/// malformed templates degrade to the literal-`%` fallback. Surplus arguments
/// are silently unused.
pub fn render(template: &str, args: &[FormatArg]) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if chars[i] != '%' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        if chars.get(i + 1) == Some(&'%') {
            out.push('%');
            i += 2;
            continue;
        }

        let hex = chars.get(i + 1) == Some(&'x');
        i += if hex { 2 } else { 1 };

        if let Some(arg) = args.get(next_arg) {
            next_arg += 1;
            if hex {
                out.push_str("0x");
                out.push_str(arg.hex_digits());
            } else {
                out.push_str(arg.as_text());
            }
        } else {
            out.push('%');
        }

        // Vestigial type-specifier suffix, discarded whether or not an
        // argument was substituted. ASCII only, matching isalnum().
        while i < chars.len() && chars[i].is_ascii_alphanumeric() {
            i += 1;
        }
    }

    out
}
