use unicode_normalization::UnicodeNormalization;

/// Clean scraped lyrics for writing to disk.
///
/// Converts to Unicode NFC, strips trailing whitespace from each line, and
/// keeps at most one blank line between stanzas. Leading and trailing blank
/// lines are dropped.
pub fn normalize_lyrics(input: &str) -> String {
    let nfc: String = input.nfc().collect();

    let mut out = String::with_capacity(nfc.len());
    let mut pending_blank = false;

    for line in nfc.lines().map(str::trim_end) {
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if pending_blank {
                out.push('\n');
            }
        }
        out.push_str(line);
        pending_blank = false;
    }

    out
}
