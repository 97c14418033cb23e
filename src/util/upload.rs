//! Splitting a file into upload parts.
//!
//! The backend hands out a part size when an upload starts and accepts part
//! numbers 1 through 10000, each with a non-empty body. Planning happens
//! before any bytes are read so oversized or empty files fail fast.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Highest part number the backend accepts.
pub const MAX_PARTS: u64 = 10_000;

/// Byte range `[start, end)` sent as part `number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadPart {
    pub number: u32,
    pub start: u64,
    pub end: u64,
}

/// Plan the parts for a file of `size` bytes.
///
/// # Errors
///
/// Returns the message to show when the file cannot be uploaded.
pub fn plan_parts(size: u64, part_size: u64) -> Result<Vec<UploadPart>, &'static str> {
    if size == 0 {
        return Err("Empty files cannot be uploaded.");
    }
    if part_size == 0 {
        return Err("The server reported an invalid part size.");
    }
    if size.div_ceil(part_size) > MAX_PARTS {
        return Err("File is too large to upload.");
    }
    Ok((0_u32..)
        .map(|index| {
            let start = u64::from(index) * part_size;
            UploadPart { number: index + 1, start, end: (start + part_size).min(size) }
        })
        .take_while(|part| part.start < size)
        .collect())
}
