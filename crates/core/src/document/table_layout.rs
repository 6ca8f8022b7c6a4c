//! Column widths for annexure tables.

pub const TABLE_WIDTH_INCHES: f64 = 6.5;
pub const SR_NO_COLUMN_WIDTH_INCHES: f64 = 0.5;

/// Header length below which every column is sized alike.
const MIN_HEADER_LEN: usize = 10;

/// Minimum share of the table for the first column when there is no serial column.
const MIN_FIRST_COLUMN_RATIO: f64 = 0.25;

/// Whether `header` is a "Sr. No." variant.
pub fn is_serial_header(header: &str) -> bool {
    let normalized = header.replace('\n', " ").trim().to_lowercase();
    normalized.starts_with("sr.") || (normalized.contains("sr") && normalized.contains("no"))
}

/// Widths in inches, one per header, summing to the table width.
///
/// A leading serial column is fixed at half an inch. The remaining columns
/// share what is left in proportion to their header length.
pub fn column_widths<S: AsRef<str>>(headers: &[S]) -> Vec<f64> {
    let Some(first) = headers.first() else {
        return Vec::new();
    };

    let has_serial = is_serial_header(first.as_ref());
    let (mut widths, remaining, sized) = if has_serial {
        (
            vec![SR_NO_COLUMN_WIDTH_INCHES],
            (TABLE_WIDTH_INCHES - SR_NO_COLUMN_WIDTH_INCHES).max(0.1),
            &headers[1..],
        )
    } else {
        (Vec::new(), TABLE_WIDTH_INCHES, headers)
    };

    if sized.is_empty() {
        return widths;
    }

    let lengths: Vec<f64> = sized
        .iter()
        .map(|h| h.as_ref().chars().count().max(MIN_HEADER_LEN) as f64)
        .collect();
    let total: f64 = lengths.iter().sum();
    let mut proportional: Vec<f64> = lengths.iter().map(|l| remaining * l / total).collect();

    if !has_serial {
        let min_first = TABLE_WIDTH_INCHES * MIN_FIRST_COLUMN_RATIO;
        if proportional[0] < min_first {
            let excess = min_first - proportional[0];
            let others = remaining - proportional[0];
            if others > 0.0 {
                let scale = ((others - excess) / others).max(0.1);
                for width in proportional.iter_mut().skip(1) {
                    *width *= scale;
                }
            }
            proportional[0] = min_first;
        }
    }

    widths.extend(proportional);
    widths
}
