//! Layout of quotes for the terminal.
//!
//! Renderers are pure: they turn a quote and a [`Palette`] into output lines.
//! [`Presenter`] writes those lines to any [`Write`] sink.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::quotes::Quote;
use crate::utils::colors::Palette;
use crate::wrap::wrap;

/// Wrap width for quote text shown beside the portrait
pub const ART_WRAP_WIDTH: usize = 50;
/// Wrap width for quote text shown on its own
pub const TEXT_WRAP_WIDTH: usize = 70;

/// Columns between the widest art line and the quote column
const ART_GUTTER: usize = 2;
const RULE_WIDTH: usize = 50;
const AUTHOR_INDENT: &str = "    ";

/// Lay a quote out beside `art`, one output line per row.
///
/// The table has `max(art rows, quote rows + 2)` rows; the two extra rows
/// hold a blank separator and the author. The quote block starts at
/// `(rows - quote rows) / 2`. When that would push the author past the last
/// row, the table grows by the rows needed to show it.
pub fn with_ascii(quote: &Quote, art: &str, width: usize, palette: &Palette) -> Vec<String> {
    let art_lines: Vec<&str> = art.lines().collect();
    let quote_lines = wrap(quote.text, width);
    let art_width = art_lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap_or(0);

    let mut max_lines = art_lines.len().max(quote_lines.len() + 2);
    let quote_start = (max_lines - quote_lines.len()) / 2;
    let quote_end = quote_start + quote_lines.len();
    let author_row = quote_end + 1;
    max_lines = max_lines.max(author_row + 1);

    (0..max_lines)
        .map(|row| {
            let art_line = art_lines.get(row).copied().unwrap_or("");

            let right = if (quote_start..quote_end).contains(&row) {
                palette.quote(&quote_lines[row - quote_start])
            } else if row == author_row {
                palette.author(quote.author)
            } else {
                String::new()
            };

            if right.is_empty() {
                return palette.art(art_line);
            }

            // Pad on the plain text; escape codes have no width
            let padding = art_width - UnicodeWidthStr::width(art_line) + ART_GUTTER;
            format!("{}{}{}", palette.art(art_line), " ".repeat(padding), right)
        })
        .collect()
}

/// Quote text, a blank line, then the author, framed by blank lines
pub fn quote_only(quote: &Quote, palette: &Palette) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(
        wrap(quote.text, TEXT_WRAP_WIDTH)
            .iter()
            .map(|line| palette.quote(line)),
    );
    lines.push(String::new());
    lines.push(palette.author(quote.author));
    lines.push(String::new());
    lines
}

/// Numbered quote blocks separated by a rule. Never shows art.
pub fn multiple(quotes: &[Quote], palette: &Palette) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, quote) in quotes.iter().enumerate() {
        if i > 0 {
            lines.push(palette.rule(&"-".repeat(RULE_WIDTH)));
        }
        lines.push(String::new());

        let marker = format!("[{}] ", i + 1);
        let indent = " ".repeat(UnicodeWidthStr::width(marker.as_str()));
        let text_width = TEXT_WRAP_WIDTH.saturating_sub(indent.len());

        let wrapped = wrap(quote.text, text_width);
        match wrapped.split_first() {
            Some((first, rest)) => {
                lines.push(format!("{}{}", palette.number(&marker), palette.quote(first)));
                for line in rest {
                    lines.push(format!("{}{}", indent, palette.quote(line)));
                }
            }
            None => lines.push(palette.number(marker.trim_end())),
        }

        lines.push(format!("{}{}", AUTHOR_INDENT, palette.author(quote.author)));
    }

    lines.push(String::new());
    lines
}

/// Writes rendered quotes to an output stream
pub struct Presenter {
    palette: Palette,
}

impl Presenter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// One quote, beside the portrait unless `show_ascii` is off
    pub fn single<W: Write>(&self, out: &mut W, quote: &Quote, show_ascii: bool) -> io::Result<()> {
        if show_ascii {
            self.with_ascii(out, quote)
        } else {
            self.quote_only(out, quote)
        }
    }

    pub fn with_ascii<W: Write>(&self, out: &mut W, quote: &Quote) -> io::Result<()> {
        writeln!(out)?;
        let lines = with_ascii(quote, crate::art::naval_portrait(), ART_WRAP_WIDTH, &self.palette);
        write_lines(out, &lines)?;
        writeln!(out)
    }

    pub fn quote_only<W: Write>(&self, out: &mut W, quote: &Quote) -> io::Result<()> {
        write_lines(out, &quote_only(quote, &self.palette))
    }

    pub fn multiple<W: Write>(&self, out: &mut W, quotes: &[Quote]) -> io::Result<()> {
        write_lines(out, &multiple(quotes, &self.palette))
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
