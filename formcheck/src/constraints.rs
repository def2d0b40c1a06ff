//! Constraints declared on a field element.

use std::collections::BTreeMap;

use formdom::Element;

/// Prefix of attributes carrying per-rule message overrides (`data-error-min`, ...).
pub const MESSAGE_OVERRIDE_PREFIX: &str = "data-error-";

/// Typed snapshot of the attributes rules consult when no literal is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclaredConstraints {
    /// `required`
    pub required: bool,
    /// `minlength`
    pub min_length: Option<usize>,
    /// `maxlength`
    pub max_length: Option<usize>,
    /// `min`
    pub min: Option<f64>,
    /// `max`
    pub max: Option<f64>,
    /// `data-min`: minimum number of selected options.
    pub min_selected: Option<usize>,
    /// `data-max`: maximum number of selected options.
    pub max_selected: Option<usize>,
    /// `type`
    pub input_type: Option<String>,
    /// `data-error-<rule>` overrides, keyed by rule name.
    pub messages: BTreeMap<String, String>,
}

impl DeclaredConstraints {
    pub fn from_element(element: &Element) -> Self {
        let messages = element
            .attrs
            .iter()
            .filter_map(|(key, value)| {
                let rule = key.strip_prefix(MESSAGE_OVERRIDE_PREFIX)?;
                (!rule.is_empty() && !value.is_empty()).then(|| (rule.to_string(), value.clone()))
            })
            .collect();

        Self {
            required: element.has_attr("required"),
            min_length: int_attr(element, "minlength"),
            max_length: int_attr(element, "maxlength"),
            min: float_attr(element, "min"),
            max: float_attr(element, "max"),
            min_selected: int_attr(element, "data-min"),
            max_selected: int_attr(element, "data-max"),
            input_type: element
                .get_attr("type")
                .map(|kind| kind.trim().to_ascii_lowercase()),
            messages,
        }
    }

    pub fn is_email(&self) -> bool {
        self.input_type.as_deref() == Some("email")
    }

    pub fn message_for(&self, rule: &str) -> Option<&str> {
        self.messages.get(rule).map(String::as_str)
    }
}

fn int_attr(element: &Element, key: &str) -> Option<usize> {
    let raw = element.get_attr(key).filter(|raw| !raw.trim().is_empty())?;
    let parsed = parse_leading_int(raw);
    if parsed.is_none() {
        log::warn!("[constraints] ignoring {key}={raw:?} on {}: not an integer", element.id);
    }
    parsed
}

fn float_attr(element: &Element, key: &str) -> Option<f64> {
    let raw = element.get_attr(key).filter(|raw| !raw.trim().is_empty())?;
    let parsed = parse_leading_float(raw);
    if parsed.is_none() {
        log::warn!("[constraints] ignoring {key}={raw:?} on {}: not a number", element.id);
    }
    parsed
}

/// Leading decimal number of `raw`, ignoring anything after it (`"18px"`
/// reads as 18, `"2.5e1em"` as 25). Non-finite results don't count.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let bytes = raw.trim_start().as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    std::str::from_utf8(&bytes[..end])
        .ok()?
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Leading non-negative integer of `raw`, ignoring anything after the digits
/// (`"5px"` reads as 5). Negative counts are meaningless and read as 0.
fn parse_leading_int(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}
