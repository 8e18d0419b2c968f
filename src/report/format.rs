//! Number formatting for tables and reports
//!
//! Rounding is half away from zero on the exact binary value, so 0.25 shows
//! as "0.3" and 2.5 as "3".

/// Volumes: one decimal below 1 (except zero), otherwise whole numbers
pub fn format_number(value: f64) -> String {
    let digits = if value.abs() < 1.0 && value != 0.0 { 1 } else { 0 };
    group_thousands(&to_fixed(value, digits))
}

/// Currency: whole dollars with separators, sign after the `$` (`$-1,625`)
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(&to_fixed(value, 0)))
}

/// Plain-language time to ROI
pub fn roi_text(roi_month: Option<u32>) -> String {
    match roi_month {
        Some(month) => format!("Month {}", month),
        None => "Not achieved within 12 months".to_string(),
    }
}

/// Fixed-point rendering with half-away-from-zero rounding
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Enough extra digits to see past the rounding position exactly
    const GUARD: usize = 40;
    let exact = format!("{:.*}", digits + GUARD, value.abs());
    let (head, tail) = exact.split_at(exact.len() - GUARD);
    let head = head.strip_suffix('.').unwrap_or(head);

    let rounded = if tail.as_bytes()[0] >= b'5' {
        increment_decimal(head)
    } else {
        head.to_string()
    };

    if value < 0.0 {
        format!("-{}", rounded)
    } else {
        rounded
    }
}

/// Add one unit in the last place of an unsigned decimal string
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;

    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }

    let mut out = String::with_capacity(bytes.len() + 1);
    if carry {
        out.push('1');
    }
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}

/// Insert commas every three digits of the integer part
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}
