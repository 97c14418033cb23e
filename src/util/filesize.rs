//! Human-readable byte sizes (base 2, JEDEC unit names).

#[cfg(test)]
#[path = "filesize_test.rs"]
mod filesize_test;

const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format `bytes` rounded half-up to one decimal, dropping a trailing `.0`.
pub fn format_size(bytes: u64) -> String {
    let bytes = u128::from(bytes);
    let mut exponent = 0;
    let mut divisor: u128 = 1;
    while exponent + 1 < UNITS.len() && bytes >= divisor * 1024 {
        divisor *= 1024;
        exponent += 1;
    }
    let mut tenths = round_tenths(bytes, divisor);
    // 1023.96 KB rounds to 1024 KB; show it as 1 MB instead.
    if tenths >= 10_240 && exponent + 1 < UNITS.len() {
        divisor *= 1024;
        exponent += 1;
        tenths = round_tenths(bytes, divisor);
    }
    let unit = UNITS[exponent];
    match tenths % 10 {
        0 => format!("{} {unit}", tenths / 10),
        frac => format!("{}.{frac} {unit}", tenths / 10),
    }
}

fn round_tenths(bytes: u128, divisor: u128) -> u128 {
    (bytes * 10 + divisor / 2) / divisor
}
