use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// Render arbitrary bytes as a classic hex dump.
///
/// One line per 16-byte chunk: each byte as two lowercase hex digits plus
/// a space, then padding so the ASCII column starts at the same offset on
/// every line, then the chunk again as characters with anything outside
/// printable ASCII (32..=126) shown as `.`. Total over any input; an empty
/// payload yields an empty string.
pub fn dump(payload: &[u8]) -> String {
    let lines: Vec<String> = payload.chunks(BYTES_PER_LINE).map(dump_line).collect();
    lines.join("\n")
}

fn dump_line(chunk: &[u8]) -> String {
    let mut line = String::new();

    for byte in chunk {
        // write! to a String cannot fail.
        write!(line, "{:02x} ", byte).unwrap();
    }

    let pad = (BYTES_PER_LINE - chunk.len()) * 3 + 4;
    for _ in 0..pad {
        line.push(' ');
    }

    for &byte in chunk {
        if (32..=126).contains(&byte) {
            line.push(byte as char);
        } else {
            line.push('.');
        }
    }

    line
}
