//! vCard line folding.

use tabcard_core::constants::{FOLD_CONTINUATION, MAX_LINE_OCTETS};

/// Folds a line to the maximum length of 75 octets.
///
/// See [`fold_line_to`].
#[must_use]
pub fn fold_line(line: &str) -> String {
    fold_line_to(line, MAX_LINE_OCTETS)
}

/// Folds a line so no physical line exceeds `max_octets`.
///
/// Lines longer than the limit are folded by inserting CRLF + space; the
/// space counts toward the continuation line's length. Folds only at UTF-8
/// character boundaries, so a character that cannot fit even on an otherwise
/// empty line is emitted alone and that line exceeds the limit.
///
/// Removing every CRLF + space from the result gives back `line`.
#[must_use]
pub fn fold_line_to(line: &str, max_octets: usize) -> String {
    if line.len() <= max_octets {
        return line.to_string();
    }

    let mut result = String::with_capacity(folded_capacity(line.len(), max_octets));
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        // Zero only before the first character; never fold ahead of it.
        if current_len > 0 && current_len + char_len > max_octets {
            result.push_str(FOLD_CONTINUATION);
            current_len = 1; // The space
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Upper bound on the folded size of an ASCII line of `len` octets.
///
/// Continuation lines hold at most `max_octets - 1` octets of content, and
/// each costs three more for CRLF + space.
const fn folded_capacity(len: usize, max_octets: usize) -> usize {
    let segment = if max_octets > 1 { max_octets - 1 } else { 1 };
    len + (len / segment + 1) * 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical_lines(folded: &str) -> Vec<&str> {
        folded.split("\r\n").collect()
    }

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn exactly_75_octets_unchanged() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line(&line);
        let lines = physical_lines(&folded);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1], format!(" {}", "X".repeat(5)));
    }

    #[test]
    fn continuation_lines_count_leading_space() {
        let line = "X".repeat(200);
        let folded = fold_line(&line);
        let lines = physical_lines(&folded);

        // 75 + 74 + 51
        assert_eq!(lines.len(), 3);
        for l in &lines {
            assert!(l.len() <= 75, "line too long: {}", l.len());
        }
        assert_eq!(lines[1].len(), 75);
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn fold_respects_utf8() {
        // 日 is 3 bytes in UTF-8
        let line = format!("NOTE:{}", "日".repeat(30)); // 5 + 90 bytes
        let folded = fold_line(&line);

        for part in physical_lines(&folded) {
            assert!(part.len() <= 75);
        }
        // 5 + 23 * 3 = 74; the 24th character would overflow.
        assert_eq!(physical_lines(&folded)[0].len(), 74);
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn oversized_character_stands_alone() {
        // 4-byte emoji against a 2-octet limit.
        let line = "a😀b";
        let folded = fold_line_to(line, 2);

        assert_eq!(folded, "a\r\n 😀\r\n b");
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn capacity_covers_folded_ascii() {
        for max in [0, 1, 2, 3, 10, 74, 75, 76] {
            for len in [76, 150, 151, 1000] {
                let folded = fold_line_to(&"X".repeat(len), max);
                assert!(
                    folded_capacity(len, max) >= folded.len(),
                    "len {len}, max {max}: {} < {}",
                    folded_capacity(len, max),
                    folded.len()
                );
            }
        }
    }

    #[test]
    fn zero_limit_never_emits_empty_segments() {
        let folded = fold_line_to("abc", 0);
        assert_eq!(folded, "a\r\n b\r\n c");
    }
}
