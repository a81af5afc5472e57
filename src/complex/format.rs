use crate::complex::Complex;
use crate::math::to_polar;
use std::fmt;

impl Complex {
    /// Render as `r(cos(theta) + i*sin(theta))`.
    ///
    /// Both numbers always carry six fractional digits, so the output is the
    /// same on every platform: `1 + 1i` gives `1.414214(cos(0.785398) + i*sin(0.785398))`.
    pub fn trigonometric_form(&self) -> String {
        let (r, theta) = to_polar(self.real, self.imaginary);
        format!("{:.6}(cos({:.6}) + i*sin({:.6}))", r, theta, theta)
    }
}

fn format_part(value: f64, precision: Option<usize>, sign_plus: bool) -> String {
    match (precision, sign_plus) {
        (Some(prec), true) => format!("{:+.*}", prec, value),
        (Some(prec), false) => format!("{:.*}", prec, value),
        (None, true) => format!("{:+}", value),
        (None, false) => format!("{}", value),
    }
}

// `2.5`, `-3.5i` or `1 - 2i`; numbers use the shortest round-trip form
// unless the formatter carries a precision. Width, fill and alignment apply
// to the whole value, right-aligned by default like other numbers; `+`
// applies to the leading number only.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let real = self.real;
        let imag = self.imaginary;
        let precision = f.precision();
        let sign_plus = f.sign_plus();

        let text = if imag == 0.0 {
            format_part(real, precision, sign_plus)
        } else if real == 0.0 {
            format!("{}i", format_part(imag, precision, sign_plus))
        } else {
            format!(
                "{}{}{}i",
                format_part(real, precision, sign_plus),
                if imag > 0.0 { " + " } else { " - " },
                format_part(imag.abs(), precision, false)
            )
        };

        let width = f.width().unwrap_or(0);
        let len = text.chars().count();
        if len >= width {
            return f.write_str(&text);
        }

        let padding = width - len;
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..before {
            write!(f, "{}", fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            write!(f, "{}", fill)?;
        }
        Ok(())
    }
}
