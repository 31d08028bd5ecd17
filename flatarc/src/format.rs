//! Human-readable size and count formatting for directory listings.

const SIZE_UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const COUNT_UNITS: [&str; 4] = ["", " K", " M", " B"];

/// Format a byte total with binary units: `"512 B"`, `"1.50 KB"`, `"2.00 MB"`.
pub fn format_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size, SIZE_UNITS[unit])
    } else {
        format!("{:.2} {}", value, SIZE_UNITS[unit])
    }
}

/// Format an entry total with decimal units: `"999"`, `"1.5 K"`, `"2.0 M"`.
/// Saturates at billions; archives do not need more.
pub fn format_count(count: u64) -> String {
    let mut value = count as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < COUNT_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{}", count)
    } else {
        format!("{:.1}{}", value, COUNT_UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(10 * 1024 * 1024), "10.00 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.0 K");
        assert_eq!(format_count(1500), "1.5 K");
        assert_eq!(format_count(2_000_000), "2.0 M");
        assert_eq!(format_count(7_800_000_000), "7.8 B");
    }
}
