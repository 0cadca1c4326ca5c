/// Size formatting utilities.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

const MIB: f64 = 1024.0 * 1024.0;

/// Format a byte count as mebibytes with two decimals, e.g. `"1.50 MB"`.
///
/// This is the unit used by chart labels and tooltips, regardless of
/// magnitude, so sizes stay comparable across arcs.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB)
}

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) labelled with the common short forms
/// (KB, MB, GB, TB). Used by the status bar.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const GB: f64 = MIB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MIB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MIB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

/// `"1 file"` / `"N files"`.
pub fn format_file_count(count: u64) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", format_count(count))
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.00 MB");
        assert_eq!(format_megabytes(1_048_576), "1.00 MB");
        assert_eq!(format_megabytes(1_572_864), "1.50 MB");
        assert_eq!(format_megabytes(100), "0.00 MB");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(1_099_511_627_776), "1.00 TB");
    }

    #[test]
    fn test_format_file_count_pluralises() {
        assert_eq!(format_file_count(0), "0 files");
        assert_eq!(format_file_count(1), "1 file");
        assert_eq!(format_file_count(2), "2 files");
        assert_eq!(format_file_count(12_345), "12,345 files");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
