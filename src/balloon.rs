use std::mem;

use concat_string::concat_string;

/// Hard per-chunk rune limit; longer input lines are split so no balloon
/// row gets wider than this.
pub const CHUNK_LIMIT: usize = 150;

const TAB: &str = "    ";

/// Splits a raw input line into chunks of at most CHUNK_LIMIT runes and
/// appends them to `out`. An empty line keeps its row in the balloon.
pub fn chunk_line(line: &str, out: &mut Vec<String>) {
    if line.is_empty() {
        out.push(String::new());
        return;
    }
    let mut chunk = String::with_capacity(line.len().min(4 * CHUNK_LIMIT));
    let mut count = 0;
    for c in line.chars() {
        chunk.push(c);
        count += 1;
        if count == CHUNK_LIMIT {
            out.push(mem::take(&mut chunk));
            count = 0;
        }
    }
    if count > 0 {
        out.push(chunk);
    }
}

/// Converts all tabs to four spaces so counting runes keeps lines aligned.
pub fn tabs_to_spaces(lines: &[String]) -> Vec<String> {
    lines.iter().map(|l| l.replace('\t', TAB)).collect()
}

/// Width in runes of the widest line.
pub fn max_width(lines: &[String]) -> usize {
    lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Right-pads every line with spaces until they all span `maxwidth` runes.
pub fn normalize_lengths(lines: &[String], maxwidth: usize) -> Vec<String> {
    lines
        .iter()
        .map(|l| concat_string!(l, " ".repeat(maxwidth - l.chars().count())))
        .collect()
}

/// Builds the balloon around lines already normalized to `maxwidth` runes.
/// A single line is framed `< like this >`; several lines get a `/`...`\`
/// opening row, `|` inner rows and a `\`...`/` closing row.
pub fn build_balloon(lines: &[String], maxwidth: usize) -> String {
    let border = concat_string!(" ", "_".repeat(maxwidth + 2));
    let mut o = String::with_capacity((maxwidth + 5) * (lines.len() + 2));

    o.push_str(&border);
    o.push('\n');
    match lines {
        [] => {}
        [only] => {
            o.push_str(&concat_string!("< ", only, " >\n"));
        }
        [first, inner @ .., last] => {
            o.push_str(&concat_string!("/ ", first, " \\\n"));
            for line in inner {
                o.push_str(&concat_string!("| ", line, " |\n"));
            }
            o.push_str(&concat_string!("\\ ", last, " /\n"));
        }
    }
    o.push_str(&border);
    o
}
