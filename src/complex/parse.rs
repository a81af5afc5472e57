use crate::complex::Complex;
use crate::error::{ComplexError, Result};
use log::debug;
use regex::Regex;
use simple_error::{SimpleError, bail};
use std::str::FromStr;
use std::sync::OnceLock;

macro_rules! unwrap_or_bail {
    ($opt: expr, $msg: expr) => {
        match $opt {
            Some(v) => v,
            None => {
                bail!($msg);
            }
        }
    };
}

fn float_token() -> &'static Regex {
    static RE_FLOAT: OnceLock<Regex> = OnceLock::new();
    RE_FLOAT.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("Invalid regex!")
    })
}

// First few characters of the unread input, for error messages
fn lookahead(input: &str) -> String {
    if input.is_empty() {
        return "end of input".to_string();
    }
    format!("{:?}", input.chars().take(8).collect::<String>())
}

fn take_float<'a>(
    input: &'a str,
    what: &str,
) -> std::result::Result<(f64, &'a str), SimpleError> {
    let input = input.trim_start();
    let token = match float_token().find(input) {
        Some(token) => token,
        None => {
            return Err(SimpleError::new(format!(
                "expected {} but found {}",
                what,
                lookahead(input)
            )));
        }
    };
    let value = token.as_str().parse::<f64>().map_err(|e| {
        SimpleError::new(format!("invalid {} {:?}: {}", what, token.as_str(), e))
    })?;
    Ok((value, &input[token.end()..]))
}

fn take_char(input: &str) -> Option<(char, &str)> {
    let input = input.trim_start();
    let c = input.chars().next()?;
    Some((c, &input[c.len_utf8()..]))
}

fn take_complex(input: &str) -> std::result::Result<(Complex, &str), SimpleError> {
    let (real, rest) = take_float(input, "real part")?;

    let (sign, rest) = unwrap_or_bail!(
        take_char(rest),
        "expected '+' or '-' but found end of input"
    );
    if sign != '+' && sign != '-' {
        return Err(SimpleError::new(format!("expected '+' or '-' but found {:?}", sign)));
    }

    let (magnitude, rest) = take_float(rest, "imaginary part")?;

    let (unit, rest) =
        unwrap_or_bail!(take_char(rest), "expected 'i' but found end of input");
    if unit != 'i' {
        return Err(SimpleError::new(format!("expected 'i' but found {:?}", unit)));
    }

    let imaginary = if sign == '-' { -magnitude } else { magnitude };
    Ok((Complex::new(real, imaginary), rest))
}

impl Complex {
    /// Read one complex number from the front of `input`.
    ///
    /// The accepted shape is `<real> <sign><imaginary>i`, e.g. `2.5 -3.5i` or
    /// `1 + 1i`. Whitespace may separate the tokens. On success the unread
    /// remainder is returned so several values can be read from one buffer.
    ///
    /// ```
    /// use complexkit::complex::Complex;
    ///
    /// let (z, rest) = Complex::parse_next("2.5 -3.5i 1 + 1i").unwrap();
    /// assert_eq!(z, Complex::new(2.5, -3.5));
    /// assert_eq!(Complex::parse_next(rest).unwrap().0, Complex::new(1.0, 1.0));
    /// ```
    pub fn parse_next(input: &str) -> Result<(Complex, &str)> {
        take_complex(input).map_err(|e| {
            debug!("failed to parse complex from {}: {}", lookahead(input.trim_start()), e);
            ComplexError::from(e)
        })
    }
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self> {
        let (value, rest) = Complex::parse_next(s)?;
        let rest = rest.trim_start();
        if !rest.is_empty() {
            debug!("trailing input after complex {}: {}", value, lookahead(rest));
            return Err(ComplexError::ParseFormat(format!(
                "unexpected trailing input {}",
                lookahead(rest)
            )));
        }
        Ok(value)
    }
}
