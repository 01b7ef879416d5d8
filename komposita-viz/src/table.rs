//! Plain-text lemma tables.

use komposita_core::LemmaFrequency;
use unicode_width::UnicodeWidthStr;

const LEMMA_HEADER: &str = "Lemma";
const FREQUENCY_HEADER: &str = "Frequenz";

/// Two-column `Lemma` / `Frequenz` table, frequencies right-aligned
pub fn render_lemma_table(rows: &[LemmaFrequency]) -> String {
    let frequencies: Vec<String> = rows.iter().map(|row| row.frequency.to_string()).collect();

    let lemma_width = rows
        .iter()
        .map(|row| row.lemma.width())
        .chain(std::iter::once(LEMMA_HEADER.width()))
        .max()
        .unwrap_or_default();
    let frequency_width = frequencies
        .iter()
        .map(String::len)
        .chain(std::iter::once(FREQUENCY_HEADER.len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    push_row(&mut out, LEMMA_HEADER, FREQUENCY_HEADER, lemma_width, frequency_width);
    out.push_str(&"-".repeat(lemma_width));
    out.push_str("  ");
    out.push_str(&"-".repeat(frequency_width));
    out.push('\n');

    for (row, frequency) in rows.iter().zip(&frequencies) {
        push_row(&mut out, &row.lemma, frequency, lemma_width, frequency_width);
    }

    out
}

fn push_row(out: &mut String, lemma: &str, frequency: &str, lemma_width: usize, frequency_width: usize) {
    // Pad by display width so umlauts and wide glyphs stay aligned.
    out.push_str(lemma);
    out.push_str(&" ".repeat(lemma_width.saturating_sub(lemma.width())));
    out.push_str("  ");
    out.push_str(&" ".repeat(frequency_width.saturating_sub(frequency.len())));
    out.push_str(frequency);
    out.push('\n');
}
