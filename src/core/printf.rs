//! C-style `printf` rendering over typed arguments
//!
//! Supports the conversions `d i u o x X f F e E g G s c %`, the flags
//! `- + space 0 #`, field width, precision and `*` for both. Length
//! modifiers (`hh h l ll q j z t L`) are accepted and ignored because every
//! argument already carries its type.
//!
//! Unlike C, a mismatched or missing argument is an error rather than
//! undefined behavior. Surplus arguments are ignored, as in C.
//!
//! Output is always valid UTF-8, so widths and `%s` precision count
//! characters, not bytes: `%.1s` of `"é"` yields `"é"`, where C would cut
//! the encoding in half.

use super::error::{LoggerError, Result};
use std::borrow::Cow;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Capacity reserved before rendering. The buffer grows past it as needed.
pub const INITIAL_CAPACITY: usize = 1024;

/// Widest field width or precision accepted.
pub const MAX_FIELD_WIDTH: usize = 1 << 20;

/// One argument of a printf-style call
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Bool(bool),
    Str(Cow<'a, str>),
}

impl FormatArg<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            FormatArg::Int(_) => "signed integer",
            FormatArg::UInt(_) => "unsigned integer",
            FormatArg::Float(_) => "float",
            FormatArg::Char(_) => "char",
            FormatArg::Bool(_) => "bool",
            FormatArg::Str(_) => "string",
        }
    }
}

impl fmt::Display for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Int(v) => write!(f, "{}", v),
            FormatArg::UInt(v) => write!(f, "{}", v),
            FormatArg::Float(v) => write!(f, "{}", v),
            FormatArg::Char(v) => write!(f, "{}", v),
            FormatArg::Bool(v) => write!(f, "{}", v),
            FormatArg::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_arg {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for FormatArg<'_> {
                fn from(value: $source) -> Self {
                    FormatArg::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from_arg!(Int as i64: i8, i16, i32, i64, isize);
impl_from_arg!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_arg!(Float as f64: f32, f64);

impl From<char> for FormatArg<'_> {
    fn from(value: char) -> Self {
        FormatArg::Char(value)
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(value: bool) -> Self {
        FormatArg::Bool(value)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for FormatArg<'_> {
    fn from(value: String) -> Self {
        FormatArg::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for FormatArg<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        FormatArg::Str(value)
    }
}

#[derive(Debug, Default)]
struct Spec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alt: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// A converted field before width padding
struct Field {
    sign: &'static str,
    prefix: &'static str,
    body: String,
    zero_pad: bool,
}

impl Field {
    fn text(body: String) -> Self {
        Self {
            sign: "",
            prefix: "",
            body,
            zero_pad: false,
        }
    }
}

/// Render `format` with `args` the way C `snprintf` would, except that
/// widths and precisions count characters (see the module docs).
///
/// # Examples
///
/// ```
/// use console_log::{sprintf, FormatArg};
///
/// let text = sprintf("%s scored %5.1f%%", &["alice".into(), 93.26.into()]).unwrap();
/// assert_eq!(text, "alice scored  93.3%");
///
/// assert!(sprintf("%d", &[]).is_err());
/// ```
pub fn sprintf(format: &str, args: &[FormatArg<'_>]) -> Result<String> {
    let mut out = String::with_capacity(INITIAL_CAPACITY.max(format.len()));
    let mut args = args.iter();
    let mut chars = format.chars().peekable();
    let mut conversion = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.left = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '0' => spec.zero = true,
                '#' => spec.alt = true,
                _ => break,
            }
            chars.next();
        }

        if chars.peek() == Some(&'*') {
            chars.next();
            conversion += 1;
            let width = star_argument(args.next(), format, conversion)?;
            if width < 0 {
                spec.left = true;
            }
            spec.width = Some(checked_width(width.unsigned_abs(), format)?);
        } else if let Some(width) = read_number(&mut chars) {
            spec.width = Some(checked_width(width as u64, format)?);
        }

        if chars.peek() == Some(&'.') {
            chars.next();
            if chars.peek() == Some(&'*') {
                chars.next();
                conversion += 1;
                let precision = star_argument(args.next(), format, conversion)?;
                // A negative precision is taken as if it were omitted.
                if precision >= 0 {
                    spec.precision = Some(checked_width(precision as u64, format)?);
                }
            } else {
                let precision = read_number(&mut chars).unwrap_or(0);
                spec.precision = Some(checked_width(precision as u64, format)?);
            }
        }

        while matches!(
            chars.peek(),
            Some(&('h' | 'l' | 'q' | 'j' | 'z' | 't' | 'L'))
        ) {
            chars.next();
        }

        let conv = chars.next().ok_or_else(|| {
            LoggerError::format(format, "incomplete conversion specification at end of format")
        })?;
        if conv == '%' {
            out.push('%');
            continue;
        }

        conversion += 1;
        let arg = args.next().ok_or_else(|| {
            LoggerError::format(format, format!("missing argument for conversion {}", conversion))
        })?;
        let field = convert(conv, &spec, arg).map_err(|message| LoggerError::format(format, message))?;
        pad_into(&mut out, &spec, field);
    }

    Ok(out)
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    value
}

fn checked_width(width: u64, format: &str) -> Result<usize> {
    match usize::try_from(width) {
        Ok(width) if width <= MAX_FIELD_WIDTH => Ok(width),
        _ => Err(LoggerError::format(
            format,
            format!("field width {} exceeds {}", width, MAX_FIELD_WIDTH),
        )),
    }
}

fn star_argument(arg: Option<&FormatArg<'_>>, format: &str, conversion: usize) -> Result<i64> {
    match arg {
        Some(FormatArg::Int(v)) => Ok(*v),
        Some(FormatArg::UInt(v)) => i64::try_from(*v)
            .map_err(|_| LoggerError::format(format, format!("'*' argument {} out of range", v))),
        Some(other) => Err(LoggerError::format(
            format,
            format!("'*' expects an integer argument, got {}", other.type_name()),
        )),
        None => Err(LoggerError::format(
            format,
            format!("missing argument for conversion {}", conversion),
        )),
    }
}

fn convert(conv: char, spec: &Spec, arg: &FormatArg<'_>) -> std::result::Result<Field, String> {
    match conv {
        'd' | 'i' => {
            let (negative, magnitude) = signed_argument(conv, arg)?;
            Ok(integer(spec, Some(negative), magnitude, 10, false))
        }
        'u' => Ok(integer(spec, None, unsigned_argument(conv, arg)?, 10, false)),
        'o' => Ok(integer(spec, None, unsigned_argument(conv, arg)?, 8, false)),
        'x' | 'X' => Ok(integer(
            spec,
            None,
            unsigned_argument(conv, arg)?,
            16,
            conv == 'X',
        )),
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => Ok(floating(spec, conv, float_argument(conv, arg)?)),
        's' => {
            let text = arg.to_string();
            // Precision truncates by character so multi-byte text stays intact.
            let text = match spec.precision {
                Some(max) => text.chars().take(max).collect(),
                None => text,
            };
            Ok(Field::text(text))
        }
        'c' => Ok(Field::text(char_argument(arg)?.to_string())),
        other => Err(format!("unsupported conversion '%{}'", other)),
    }
}

fn mismatch(conv: char, expected: &str, arg: &FormatArg<'_>) -> String {
    format!("%{} expects {}, got {}", conv, expected, arg.type_name())
}

fn signed_argument(conv: char, arg: &FormatArg<'_>) -> std::result::Result<(bool, u64), String> {
    match arg {
        FormatArg::Int(v) => Ok((*v < 0, v.unsigned_abs())),
        FormatArg::UInt(v) => Ok((false, *v)),
        FormatArg::Bool(v) => Ok((false, u64::from(*v))),
        FormatArg::Char(v) => Ok((false, u64::from(*v))),
        other => Err(mismatch(conv, "an integer", other)),
    }
}

fn unsigned_argument(conv: char, arg: &FormatArg<'_>) -> std::result::Result<u64, String> {
    match arg {
        // Reinterpreted as two's complement, like C.
        FormatArg::Int(v) => Ok(*v as u64),
        FormatArg::UInt(v) => Ok(*v),
        FormatArg::Bool(v) => Ok(u64::from(*v)),
        FormatArg::Char(v) => Ok(u64::from(*v)),
        other => Err(mismatch(conv, "an integer", other)),
    }
}

fn float_argument(conv: char, arg: &FormatArg<'_>) -> std::result::Result<f64, String> {
    match arg {
        FormatArg::Float(v) => Ok(*v),
        FormatArg::Int(v) => Ok(*v as f64),
        FormatArg::UInt(v) => Ok(*v as f64),
        other => Err(mismatch(conv, "a number", other)),
    }
}

fn char_argument(arg: &FormatArg<'_>) -> std::result::Result<char, String> {
    let code = match arg {
        FormatArg::Char(c) => return Ok(*c),
        FormatArg::Int(v) => u32::try_from(*v).ok(),
        FormatArg::UInt(v) => u32::try_from(*v).ok(),
        other => return Err(mismatch('c', "a char", other)),
    };
    code.and_then(char::from_u32)
        .ok_or_else(|| "%c argument is not a valid character".to_string())
}

/// `sign` is `None` for the unsigned conversions, which ignore `+` and space.
fn integer(spec: &Spec, sign: Option<bool>, magnitude: u64, radix: u32, upper: bool) -> Field {
    let mut digits = match (radix, upper) {
        (8, _) => format!("{:o}", magnitude),
        (16, true) => format!("{:X}", magnitude),
        (16, false) => format!("{:x}", magnitude),
        _ => magnitude.to_string(),
    };
    if let Some(precision) = spec.precision {
        if precision == 0 && magnitude == 0 {
            digits.clear();
        } else if digits.len() < precision {
            digits.insert_str(0, &"0".repeat(precision - digits.len()));
        }
    }

    let prefix = match radix {
        16 if spec.alt && magnitude != 0 => {
            if upper {
                "0X"
            } else {
                "0x"
            }
        }
        8 if spec.alt && !digits.starts_with('0') => "0",
        _ => "",
    };

    Field {
        sign: sign_for(spec, sign.unwrap_or(false), sign.is_some()),
        prefix,
        body: digits,
        zero_pad: spec.precision.is_none(),
    }
}

fn sign_for(spec: &Spec, negative: bool, signed: bool) -> &'static str {
    if negative {
        "-"
    } else if signed && spec.plus {
        "+"
    } else if signed && spec.space {
        " "
    } else {
        ""
    }
}

fn floating(spec: &Spec, conv: char, value: f64) -> Field {
    let upper = conv.is_ascii_uppercase();
    let sign = sign_for(spec, value.is_sign_negative() && !value.is_nan(), true);
    let magnitude = value.abs();

    if !magnitude.is_finite() {
        let text = if magnitude.is_nan() { "nan" } else { "inf" };
        let body = if upper {
            text.to_ascii_uppercase()
        } else {
            text.to_string()
        };
        return Field {
            sign,
            prefix: "",
            body,
            zero_pad: false,
        };
    }

    let precision = spec.precision.unwrap_or(6);
    let body = match conv.to_ascii_lowercase() {
        'f' => fixed(magnitude, precision, spec.alt),
        'e' => exponent(magnitude, precision, upper, spec.alt),
        _ => general(magnitude, precision, upper, spec.alt),
    };
    Field {
        sign,
        prefix: "",
        body,
        zero_pad: true,
    }
}

fn fixed(value: f64, precision: usize, alt: bool) -> String {
    let mut text = format!("{:.*}", precision, value);
    if alt && precision == 0 {
        text.push('.');
    }
    text
}

/// Rust renders `1.5e3`; C wants `1.500000e+03`.
fn exponent(value: f64, precision: usize, upper: bool, alt: bool) -> String {
    let rendered = format!("{:.*e}", precision, value);
    let (mantissa, exp) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    format!(
        "{}{}{}{}{:02}",
        mantissa,
        if alt && precision == 0 { "." } else { "" },
        if upper { 'E' } else { 'e' },
        if exp < 0 { '-' } else { '+' },
        exp.unsigned_abs()
    )
}

fn general(value: f64, precision: usize, upper: bool, alt: bool) -> String {
    let precision = precision.max(1);
    let probe = format!("{:.*e}", precision - 1, value);
    let exp: i64 = probe
        .split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0);

    let (mut body, suffix) = if exp < -4 || exp >= precision as i64 {
        let text = exponent(value, precision - 1, upper, alt);
        let split = text.find(['e', 'E']).unwrap_or(text.len());
        (text[..split].to_string(), text[split..].to_string())
    } else {
        let decimals = (precision as i64 - 1 - exp) as usize;
        (fixed(value, decimals, alt), String::new())
    };

    if !alt && body.contains('.') {
        body = body.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    body.push_str(&suffix);
    body
}

fn pad_into(out: &mut String, spec: &Spec, field: Field) {
    let len = field.sign.len() + field.prefix.len() + field.body.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);

    if spec.left {
        out.push_str(field.sign);
        out.push_str(field.prefix);
        out.push_str(&field.body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.zero && field.zero_pad {
        out.push_str(field.sign);
        out.push_str(field.prefix);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(&field.body);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(field.sign);
        out.push_str(field.prefix);
        out.push_str(&field.body);
    }
}
