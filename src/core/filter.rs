//! Brace-balanced block deduplication
//!
//! A block starts at a line matching the [`LocationMarker`] and ends at the
//! line where the running `{`/`}` balance, seeded by the header line, comes
//! back to zero. The first matched block is copied through; every later
//! one is dropped whole. Lines outside matched blocks pass through as-is.

use crate::core::{LocationBlock, LocationMarker};

/// Outcome of a single deduplication pass
#[derive(Debug)]
pub struct DedupResult<'a> {
    /// Lines that survive, in source order
    pub lines: Vec<&'a str>,
    /// Every matched block in file order, the kept one first
    pub blocks: Vec<LocationBlock>,
    /// Number of lines scanned
    pub input_lines: usize,
    /// Header line of a block still open at end of input
    pub unterminated: Option<usize>,
}

impl DedupResult<'_> {
    /// Number of blocks matching the marker
    pub fn occurrences(&self) -> usize {
        self.blocks.len()
    }

    /// Number of blocks removed (zero when nothing matched)
    pub fn removed_blocks(&self) -> usize {
        self.occurrences().saturating_sub(1)
    }

    /// Blocks dropped from the output
    pub fn removed(&self) -> impl Iterator<Item = &LocationBlock> {
        self.blocks.iter().filter(|b| !b.is_kept())
    }

    /// Total lines dropped from the output
    pub fn removed_lines(&self) -> usize {
        self.removed().map(|b| b.line_count).sum()
    }

    /// Join the surviving lines back into file contents
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// Net brace balance of a line: opening minus closing braces
pub fn brace_delta(line: &str) -> i64 {
    line.bytes().fold(0, |acc, b| match b {
        b'{' => acc + 1,
        b'}' => acc - 1,
        _ => acc,
    })
}

/// Remove every block after the first one matching `marker`
///
/// A block whose braces never balance swallows the rest of the input and
/// is reported through [`DedupResult::unterminated`].
pub fn dedup_blocks<'a>(lines: &[&'a str], marker: &LocationMarker) -> DedupResult<'a> {
    let mut output = Vec::with_capacity(lines.len());
    let mut blocks: Vec<LocationBlock> = Vec::new();
    // Index into `blocks` of the block being scanned
    let mut open: Option<usize> = None;
    let mut depth: i64 = 0;

    for (idx, &line) in lines.iter().enumerate() {
        match open {
            Some(current) => {
                depth += brace_delta(line);
                let block = &mut blocks[current];
                block.line_count += 1;
                if block.is_kept() {
                    output.push(line);
                }
                if depth == 0 {
                    open = None;
                }
            }
            None if marker.matches(line) => {
                let block = LocationBlock::new(blocks.len() + 1, idx + 1);
                if block.is_kept() {
                    output.push(line);
                }
                blocks.push(block);

                // A header that balances its own braces is a one-line block
                depth = brace_delta(line);
                if depth != 0 {
                    open = Some(blocks.len() - 1);
                }
            }
            None => output.push(line),
        }
    }

    let unterminated = open.map(|current| blocks[current].start_line);

    DedupResult {
        lines: output,
        blocks,
        input_lines: lines.len(),
        unterminated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn images() -> LocationMarker {
        LocationMarker::new("/api/images")
    }

    fn split(text: &str) -> Vec<&str> {
        text.split_inclusive('\n').collect()
    }

    const NESTED_THREE: &str = "\
server {
    listen 80;
    location /api/images {
        if ($request_method = OPTIONS) {
            return 204;
        }
        proxy_pass http://localhost:3000;
    }
    location /api/users {
        proxy_pass http://localhost:3001;
    }
    location /api/images {
        if ($request_method = OPTIONS) { return 204; }
        proxy_pass http://localhost:4000;
    }
    location /api/images {
        if ($http_origin) {
            add_header X-Origin $http_origin;
        }
    }
}
";

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("location /api/images {"), 1);
        assert_eq!(brace_delta("}"), -1);
        assert_eq!(brace_delta("if ($x) { return 204; }"), 0);
        assert_eq!(brace_delta("    proxy_pass http://x;"), 0);
        assert_eq!(brace_delta("}}"), -2);
    }

    #[test]
    fn test_single_line_duplicates() {
        let input = "\
server {
    location /api/images { proxy_pass http://a; }
    location /health { return 200; }
    location /api/images { proxy_pass http://a; }
}
";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(
            result.to_text(),
            "\
server {
    location /api/images { proxy_pass http://a; }
    location /health { return 200; }
}
"
        );
        assert_eq!(result.removed_blocks(), 1);
        assert_eq!(result.removed_lines(), 1);
        assert_eq!(result.unterminated, None);
    }

    #[test]
    fn test_one_line_block_does_not_absorb_next_line() {
        let input = "\
location /api/images { return 204; }
location /api/images { return 204; }
keep me
";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(
            result.lines,
            vec!["location /api/images { return 204; }\n", "keep me\n"]
        );
        assert_eq!(result.blocks[1].line_count, 1);
    }

    #[test]
    fn test_nested_multi_line_blocks() {
        let lines = split(NESTED_THREE);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(
            result.to_text(),
            "\
server {
    listen 80;
    location /api/images {
        if ($request_method = OPTIONS) {
            return 204;
        }
        proxy_pass http://localhost:3000;
    }
    location /api/users {
        proxy_pass http://localhost:3001;
    }
}
"
        );
        assert_eq!(result.occurrences(), 3);
        assert_eq!(result.removed_blocks(), 2);

        let removed: Vec<_> = result.removed().cloned().collect();
        assert_eq!(
            removed,
            vec![
                LocationBlock {
                    occurrence: 2,
                    start_line: 12,
                    line_count: 4,
                },
                LocationBlock {
                    occurrence: 3,
                    start_line: 16,
                    line_count: 5,
                },
            ]
        );
        assert_eq!(result.blocks[0].line_count, 6);
    }

    #[test]
    fn test_conservation_of_lines() {
        let lines = split(NESTED_THREE);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(result.input_lines, lines.len());
        assert_eq!(
            result.lines.len(),
            result.input_lines - result.removed_lines()
        );
    }

    #[test]
    fn test_second_pass_is_noop() {
        let lines = split(NESTED_THREE);
        let first = dedup_blocks(&lines, &images()).to_text();

        let again = split(&first);
        let second = dedup_blocks(&again, &images());

        assert_eq!(second.to_text(), first);
        assert_eq!(second.occurrences(), 1);
        assert_eq!(second.removed_blocks(), 0);
    }

    #[test]
    fn test_no_matching_blocks() {
        let input = "server {\n    location /api/users {\n    }\n}\n";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(result.to_text(), input);
        assert_eq!(result.occurrences(), 0);
        assert_eq!(result.removed_blocks(), 0);
    }

    #[test]
    fn test_single_matching_block() {
        let input = "location /api/images {\n    root /srv;\n}\n";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(result.to_text(), input);
        assert_eq!(result.occurrences(), 1);
        assert_eq!(result.removed_blocks(), 0);
    }

    #[test]
    fn test_marker_inside_open_block_is_not_an_occurrence() {
        let input = "\
location /api/images {
    location /api/images/thumbs {
        expires 1d;
    }
}
location /api/images {
}
";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(result.occurrences(), 2);
        assert_eq!(result.blocks[0].line_count, 5);
        assert_eq!(result.removed_lines(), 2);
        assert_eq!(result.lines.len(), 5);
    }

    #[test]
    fn test_header_brace_on_next_line() {
        let input = "location /api/images\n{\n}\nafter\n";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        // Header delta is zero, so it is a one-line block
        assert_eq!(result.blocks[0].line_count, 1);
        assert_eq!(result.to_text(), input);
    }

    #[test]
    fn test_unterminated_block_is_reported() {
        let input = "\
location /api/images {
}
location /api/images {
    proxy_pass http://a;
tail
";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(result.unterminated, Some(3));
        assert_eq!(result.blocks[1].line_count, 3);
        assert_eq!(result.to_text(), "location /api/images {\n}\n");
    }

    #[test]
    fn test_preserves_crlf_and_missing_final_newline() {
        let input = "a\r\nlocation /api/images { }\r\nlocation /api/images { }\r\nz";
        let lines = split(input);
        let result = dedup_blocks(&lines, &images());

        assert_eq!(result.to_text(), "a\r\nlocation /api/images { }\r\nz");
    }

    #[test]
    fn test_empty_input() {
        let result = dedup_blocks(&[], &images());
        assert!(result.lines.is_empty());
        assert_eq!(result.removed_blocks(), 0);
        assert_eq!(result.unterminated, None);
    }
}
