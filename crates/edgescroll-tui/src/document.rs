//! Demo document shown in the scroll panel

use unicode_width::UnicodeWidthStr;

const FILLER: &str = "the quick brown fox jumps over the lazy dog · ";

/// Numbered lines, each padded with filler text to `width` columns
pub fn demo_lines(lines: usize, width: usize) -> Vec<String> {
    (1..=lines)
        .map(|n| {
            let mut line = format!("{n:>4} │ ");
            let mut filler = FILLER.chars().cycle().skip(n % FILLER.len());
            while line.width() < width {
                match filler.next() {
                    Some(c) => line.push(c),
                    None => break,
                }
            }
            line
        })
        .collect()
}

/// Widest line in display columns
pub fn content_width(lines: &[String]) -> usize {
    lines.iter().map(|line| line.width()).max().unwrap_or(0)
}
