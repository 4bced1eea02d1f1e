//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Display formatting for dashboard metrics.
//! CONTEXT: Totals are shown either as grouped counts ("12,345") or as
//! amounts of money ("$1,234.56"). Both the text renderer and the chart
//! labels go through `format_number`.

/// How a metric value is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberFormat {
    /// Fixed decimals with thousands separators.
    Number { decimal_places: u8 },
    /// Symbol before the amount. Negative amounts are wrapped in parentheses.
    Currency { decimal_places: u8, symbol: String },
}

pub fn format_number(value: f64, format: &NumberFormat) -> String {
    match format {
        NumberFormat::Number { decimal_places } => group_thousands(&fixed(value, *decimal_places)),
        NumberFormat::Currency {
            decimal_places,
            symbol,
        } => {
            let text = fixed(value, *decimal_places);
            match text.strip_prefix('-') {
                Some(magnitude) => format!("({}{})", symbol, group_thousands(magnitude)),
                None => format!("{}{}", symbol, group_thousands(&text)),
            }
        }
    }
}

fn fixed(value: f64, decimal_places: u8) -> String {
    format!("{:.*}", usize::from(decimal_places), value)
}

/// "-1234567.5" -> "-1,234,567.5". Expects the output of `fixed`.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

/// The formats the dashboard renders with.
pub mod presets {
    use super::NumberFormat;

    /// Whole numbers ("12,345").
    pub fn count() -> NumberFormat {
        NumberFormat::Number { decimal_places: 0 }
    }

    pub fn currency_usd(decimal_places: u8) -> NumberFormat {
        NumberFormat::Currency {
            decimal_places,
            symbol: "$".to_string(),
        }
    }
}
