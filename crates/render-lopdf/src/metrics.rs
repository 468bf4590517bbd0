//! Glyph widths for the two base-14 faces and the WinAnsi byte mapping.
//!
//! Widths are in thousandths of the font size, taken from the Adobe AFM files
//! for Helvetica and Helvetica-Bold.

use vitae_style::BuiltinFont;

const FIRST_ASCII: u8 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of one WinAnsi byte in thousandths of the font size.
pub fn glyph_width(font: BuiltinFont, byte: u8) -> u16 {
    let bold = font == BuiltinFont::HelveticaBold;
    if (FIRST_ASCII..=126).contains(&byte) {
        let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
        return table[usize::from(byte - FIRST_ASCII)];
    }
    match byte {
        0x85 | 0x97 | 0x89 => 1000,
        0x95 => 350,
        0x91 | 0x92 => {
            if bold {
                278
            } else {
                222
            }
        }
        0x93 | 0x94 => {
            if bold {
                500
            } else {
                333
            }
        }
        0x99 => 1000,
        0xA0 => 278,
        _ => 556,
    }
}

/// Advance width of `text` set in `font` at `size` points.
pub fn text_width(font: BuiltinFont, text: &str, size: f32) -> f32 {
    let units: u32 = to_win_ansi(text).into_iter().map(|byte| u32::from(glyph_width(font, byte))).sum();
    units as f32 * size / 1000.0
}

/// Encodes `text` for a WinAnsiEncoding font. Characters outside the code page become `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20AC}' => 0x80,
        '\u{2026}' => 0x85,
        '\u{2030}' => 0x89,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2122}' => 0x99,
        '\t' | '\n' | '\r' => b' ',
        c if (' '..='~').contains(&c) => c as u8,
        c if ('\u{A0}'..='\u{FF}').contains(&c) => c as u8,
        _ => b'?',
    }
}
