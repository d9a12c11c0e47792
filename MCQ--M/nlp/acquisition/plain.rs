/// Decodes UTF-8, silently dropping invalid byte sequences.
#[must_use]
pub fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(err) => {
                let (valid, tail) = rest.split_at(err.valid_up_to());
                // `valid` was just checked by from_utf8.
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match err.error_len() {
                    Some(skip) => rest = &tail[skip..],
                    // Truncated sequence at the end of input.
                    None => return out,
                }
            }
        }
    }
}
