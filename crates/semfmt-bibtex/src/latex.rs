//! LaTeX character escaping
//!
//! Two static code-point tables drive the export:
//! - the LaTeX map turns extended-Latin and symbol characters into their
//!   LaTeX escape, wrapped in braces (`é` → `{\'e}`); unmapped characters
//!   pass through unchanged,
//! - the transliteration map handles the German umlauts and ß for citation
//!   keys (`ü` → `ue`), after which everything outside `[A-Za-z]` is
//!   stripped rather than escaped.
//!
//! Input is plain Unicode text; both maps operate on decoded code points.
//! Code points outside the tables pass through the LaTeX path unchanged and
//! never survive the key path's ASCII-letter filter.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Transliterations used for citation keys only.
const KEY_TRANSLITERATIONS: &[(char, &str)] = &[
    ('\u{00c4}', "Ae"),
    ('\u{00e4}', "ae"),
    ('\u{00d6}', "Oe"),
    ('\u{00f6}', "oe"),
    ('\u{00dc}', "Ue"),
    ('\u{00fc}', "ue"),
    ('\u{00df}', "ss"),
];

// ===== ASCII characters with BibTeX syntax meaning =====

const ASCII_ESCAPES: &[(char, &str)] = &[
    ('$', "\\$"),
    ('_', "\\_"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('\\', "\\textbackslash"),
    ('%', "\\%"),
    ('\t', " "),
    ('\n', "\\n"),
    ('#', "\\#"),
    ('&', "\\&"),
];

// ===== Latin-1 Supplement =====

const LATIN1_SUPPLEMENT: &[(char, &str)] = &[
    ('\u{00a0}', "~"),
    ('\u{00a1}', "!`"),
    ('\u{00a2}', "\\not{c}"),
    ('\u{00a3}', "\\pounds"),
    ('\u{00a7}', "\\S"),
    ('\u{00a8}', "\\\"{}"),
    ('\u{00a9}', "\\textcopyright"),
    ('\u{00ac}', "\\neg"),
    ('\u{00ad}', "\\-"),
    ('\u{00ae}', "\\textregistered"),
    ('\u{00af}', "\\={}"),
    ('\u{00b0}', "\\mbox{$^\\circ$}"),
    ('\u{00b1}', "\\mbox{$\\pm$}"),
    ('\u{00b2}', "\\mbox{$^2$}"),
    ('\u{00b3}', "\\mbox{$^3$}"),
    ('\u{00b4}', "\\'{}"),
    ('\u{00b5}', "\\mbox{$\\mu$}"),
    ('\u{00b6}', "\\P"),
    ('\u{00b7}', "\\mbox{$\\cdot$}"),
    ('\u{00b8}', "\\c{}"),
    ('\u{00b9}', "\\mbox{$^1$}"),
    ('\u{00bf}', "?`"),
    ('\u{00c0}', "\\`A"),
    ('\u{00c1}', "\\'A"),
    ('\u{00c2}', "\\^A"),
    ('\u{00c3}', "\\~A"),
    ('\u{00c4}', "\\\"A"),
    ('\u{00c5}', "\\AA"),
    ('\u{00c6}', "\\AE"),
    ('\u{00c7}', "\\c{C}"),
    ('\u{00c8}', "\\`E"),
    ('\u{00c9}', "\\'E"),
    ('\u{00ca}', "\\^E"),
    ('\u{00cb}', "\\\"E"),
    ('\u{00cc}', "\\`I"),
    ('\u{00cd}', "\\'I"),
    ('\u{00ce}', "\\^I"),
    ('\u{00cf}', "\\\"I"),
    ('\u{00d1}', "\\~N"),
    ('\u{00d2}', "\\`O"),
    ('\u{00d3}', "\\'O"),
    ('\u{00d4}', "\\^O"),
    ('\u{00d5}', "\\~O"),
    ('\u{00d6}', "\\\"O"),
    ('\u{00d7}', "\\mbox{$\\times$}"),
    ('\u{00d8}', "\\O"),
    ('\u{00d9}', "\\`U"),
    ('\u{00da}', "\\'U"),
    ('\u{00db}', "\\^U"),
    ('\u{00dc}', "\\\"U"),
    ('\u{00dd}', "\\'Y"),
    ('\u{00df}', "\\ss"),
    ('\u{00e0}', "\\`a"),
    ('\u{00e1}', "\\'a"),
    ('\u{00e2}', "\\^a"),
    ('\u{00e3}', "\\~a"),
    ('\u{00e4}', "\\\"a"),
    ('\u{00e5}', "\\aa"),
    ('\u{00e6}', "\\ae"),
    ('\u{00e7}', "\\c{c}"),
    ('\u{00e8}', "\\`e"),
    ('\u{00e9}', "\\'e"),
    ('\u{00ea}', "\\^e"),
    ('\u{00eb}', "\\\"e"),
    ('\u{00ec}', "\\`\\i"),
    ('\u{00ed}', "\\'\\i"),
    ('\u{00ee}', "\\^\\i"),
    ('\u{00ef}', "\\\"\\i"),
    ('\u{00f1}', "\\~n"),
    ('\u{00f2}', "\\`o"),
    ('\u{00f3}', "\\'o"),
    ('\u{00f4}', "\\^o"),
    ('\u{00f5}', "\\~o"),
    ('\u{00f6}', "\\\"o"),
    ('\u{00f7}', "\\mbox{$\\div$}"),
    ('\u{00f8}', "\\o"),
    ('\u{00f9}', "\\`u"),
    ('\u{00fa}', "\\'u"),
    ('\u{00fb}', "\\^u"),
    ('\u{00fc}', "\\\"u"),
    ('\u{00fd}', "\\'y"),
    ('\u{00ff}', "\\\"y"),
];

// ===== Latin Extended-A =====

const LATIN_EXTENDED_A: &[(char, &str)] = &[
    ('\u{0100}', "\\=A"),
    ('\u{0101}', "\\=a"),
    ('\u{0102}', "\\u{A}"),
    ('\u{0103}', "\\u{a}"),
    ('\u{0104}', "\\c{A}"),
    ('\u{0105}', "\\c{a}"),
    ('\u{0106}', "\\'C"),
    ('\u{0107}', "\\'c"),
    ('\u{0108}', "\\^C"),
    ('\u{0109}', "\\^c"),
    ('\u{010a}', "\\.C"),
    ('\u{010b}', "\\.c"),
    ('\u{010c}', "\\v{C}"),
    ('\u{010d}', "\\v{c}"),
    ('\u{010e}', "\\v{D}"),
    ('\u{010f}', "\\v{d}"),
    ('\u{0112}', "\\=E"),
    ('\u{0113}', "\\=e"),
    ('\u{0114}', "\\u{E}"),
    ('\u{0115}', "\\u{e}"),
    ('\u{0116}', "\\.E"),
    ('\u{0117}', "\\.e"),
    ('\u{0118}', "\\c{E}"),
    ('\u{0119}', "\\c{e}"),
    ('\u{011a}', "\\v{E}"),
    ('\u{011b}', "\\v{e}"),
    ('\u{011c}', "\\^G"),
    ('\u{011d}', "\\^g"),
    ('\u{011e}', "\\u{G}"),
    ('\u{011f}', "\\u{g}"),
    ('\u{0120}', "\\.G"),
    ('\u{0121}', "\\.g"),
    ('\u{0122}', "\\c{G}"),
    ('\u{0123}', "\\c{g}"),
    ('\u{0124}', "\\^H"),
    ('\u{0125}', "\\^h"),
    ('\u{0128}', "\\~I"),
    ('\u{0129}', "\\~\\i"),
    ('\u{012a}', "\\=I"),
    ('\u{012b}', "\\=\\i"),
    ('\u{012c}', "\\u{I}"),
    ('\u{012d}', "\\u\\i"),
    ('\u{012e}', "\\c{I}"),
    ('\u{012f}', "\\c{i}"),
    ('\u{0130}', "\\.I"),
    ('\u{0131}', "\\i"),
    ('\u{0132}', "IJ"),
    ('\u{0133}', "ij"),
    ('\u{0134}', "\\^J"),
    ('\u{0135}', "\\^\\j"),
    ('\u{0136}', "\\c{K}"),
    ('\u{0137}', "\\c{k}"),
    ('\u{0139}', "\\'L"),
    ('\u{013a}', "\\'l"),
    ('\u{013b}', "\\c{L}"),
    ('\u{013c}', "\\c{l}"),
    ('\u{013d}', "\\v{L}"),
    ('\u{013e}', "\\v{l}"),
    ('\u{0141}', "\\L"),
    ('\u{0142}', "\\l"),
    ('\u{0143}', "\\'N"),
    ('\u{0144}', "\\'n"),
    ('\u{0145}', "\\c{N}"),
    ('\u{0146}', "\\c{n}"),
    ('\u{0147}', "\\v{N}"),
    ('\u{0148}', "\\v{n}"),
    ('\u{014c}', "\\=O"),
    ('\u{014d}', "\\=o"),
    ('\u{014e}', "\\u{O}"),
    ('\u{014f}', "\\u{o}"),
    ('\u{0150}', "\\H{O}"),
    ('\u{0151}', "\\H{o}"),
    ('\u{0152}', "\\OE"),
    ('\u{0153}', "\\oe"),
    ('\u{0154}', "\\'R"),
    ('\u{0155}', "\\'r"),
    ('\u{0156}', "\\c{R}"),
    ('\u{0157}', "\\c{r}"),
    ('\u{0158}', "\\v{R}"),
    ('\u{0159}', "\\v{r}"),
    ('\u{015a}', "\\'S"),
    ('\u{015b}', "\\'s"),
    ('\u{015c}', "\\^S"),
    ('\u{015d}', "\\^s"),
    ('\u{015e}', "\\c{S}"),
    ('\u{015f}', "\\c{s}"),
    ('\u{0160}', "\\v{S}"),
    ('\u{0161}', "\\v{s}"),
    ('\u{0162}', "\\c{T}"),
    ('\u{0163}', "\\c{t}"),
    ('\u{0164}', "\\v{T}"),
    ('\u{0165}', "\\v{t}"),
    ('\u{0168}', "\\~U"),
    ('\u{0169}', "\\~u"),
    ('\u{016a}', "\\=U"),
    ('\u{016b}', "\\=u"),
    ('\u{016c}', "\\u{U}"),
    ('\u{016d}', "\\u{u}"),
    ('\u{016e}', "\\r{U}"),
    ('\u{016f}', "\\r{u}"),
    ('\u{0170}', "\\H{U}"),
    ('\u{0171}', "\\H{u}"),
    ('\u{0172}', "\\c{U}"),
    ('\u{0173}', "\\c{u}"),
    ('\u{0174}', "\\^W"),
    ('\u{0175}', "\\^w"),
    ('\u{0176}', "\\^Y"),
    ('\u{0177}', "\\^y"),
    ('\u{0178}', "\\\"Y"),
    ('\u{0179}', "\\'Z"),
    ('\u{017a}', "\\'z"),
    ('\u{017b}', "\\.Z"),
    ('\u{017c}', "\\.z"),
    ('\u{017d}', "\\v{Z}"),
    ('\u{017e}', "\\v{z}"),
];

// ===== Latin Extended-B =====

const LATIN_EXTENDED_B: &[(char, &str)] = &[
    ('\u{01c4}', "D\\v{Z}"),
    ('\u{01c5}', "D\\v{z}"),
    ('\u{01c6}', "d\\v{z}"),
    ('\u{01c7}', "LJ"),
    ('\u{01c8}', "Lj"),
    ('\u{01c9}', "lj"),
    ('\u{01ca}', "NJ"),
    ('\u{01cb}', "Nj"),
    ('\u{01cc}', "nj"),
    ('\u{01cd}', "\\v{A}"),
    ('\u{01ce}', "\\v{a}"),
    ('\u{01cf}', "\\v{I}"),
    ('\u{01d0}', "\\v\\i"),
    ('\u{01d1}', "\\v{O}"),
    ('\u{01d2}', "\\v{o}"),
    ('\u{01d3}', "\\v{U}"),
    ('\u{01d4}', "\\v{u}"),
    ('\u{01e6}', "\\v{G}"),
    ('\u{01e7}', "\\v{g}"),
    ('\u{01e8}', "\\v{K}"),
    ('\u{01e9}', "\\v{k}"),
    ('\u{01ea}', "\\c{O}"),
    ('\u{01eb}', "\\c{o}"),
    ('\u{01f0}', "\\v\\j"),
    ('\u{01f1}', "DZ"),
    ('\u{01f2}', "Dz"),
    ('\u{01f3}', "dz"),
    ('\u{01f4}', "\\'G"),
    ('\u{01f5}', "\\'g"),
    ('\u{01fc}', "\\'\\AE"),
    ('\u{01fd}', "\\'\\ae"),
    ('\u{01fe}', "\\'\\O"),
    ('\u{01ff}', "\\'\\o"),
];

// ===== Spacing modifier letters =====

const SPACING_MODIFIERS: &[(char, &str)] = &[
    ('\u{02c6}', "\\^{}"),
    ('\u{02c7}', "\\v{}"),
    ('\u{02d8}', "\\u{}"),
    ('\u{02d9}', "\\.{}"),
    ('\u{02da}', "\\r{}"),
    ('\u{02db}', "\\c{}"),
    ('\u{02dc}', "\\~{}"),
    ('\u{02dd}', "\\H{}"),
];

// ===== Punctuation, ligatures, math symbols =====

const SYMBOLS: &[(char, &str)] = &[
    ('\u{03c0}', "\\mbox{$\\pi$}"),
    ('\u{fb01}', "fi"),
    ('\u{fb02}', "fl"),
    ('\u{2013}', "--"),
    ('\u{2014}', "---"),
    ('\u{2018}', "`"),
    ('\u{2019}', "'"),
    ('\u{201c}', "``"),
    ('\u{201d}', "''"),
    ('\u{2020}', "\\dag"),
    ('\u{2021}', "\\ddag"),
    ('\u{2022}', "\\mbox{$\\bullet$}"),
    ('\u{2026}', "\\ldots"),
    ('\u{2122}', "\\texttrademark"),
    ('\u{2202}', "\\mbox{$\\partial$}"),
    ('\u{220f}', "\\mbox{$\\prod$}"),
    ('\u{2211}', "\\mbox{$\\sum$}"),
    ('\u{221a}', "\\mbox{$\\surd$}"),
    ('\u{221e}', "\\mbox{$\\infty$}"),
    ('\u{222b}', "\\mbox{$\\int$}"),
    ('\u{2248}', "\\mbox{$\\approx$}"),
    ('\u{2260}', "\\mbox{$\\neq$}"),
    ('\u{2264}', "\\mbox{$\\leq$}"),
    ('\u{2265}', "\\mbox{$\\geq$}"),
];

lazy_static! {
    /// Code point → LaTeX escape, for field values.
    static ref LATEX_MAP: HashMap<char, &'static str> = {
        let mut map = HashMap::new();
        for table in [
            ASCII_ESCAPES,
            LATIN1_SUPPLEMENT,
            LATIN_EXTENDED_A,
            LATIN_EXTENDED_B,
            SPACING_MODIFIERS,
            SYMBOLS,
        ] {
            for &(c, replacement) in table {
                map.insert(c, replacement);
            }
        }
        map
    };

    /// Code point → ASCII transliteration, for citation keys.
    static ref KEY_MAP: HashMap<char, &'static str> =
        KEY_TRANSLITERATIONS.iter().copied().collect();
}

/// Escape a field value for BibTeX output.
///
/// Mapped code points are replaced by their LaTeX escape wrapped in braces;
/// everything else passes through unchanged, so the function is idempotent
/// on plain ASCII.
pub fn escape_latex(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match LATEX_MAP.get(&c) {
            Some(replacement) => {
                output.push('{');
                output.push_str(replacement);
                output.push('}');
            }
            None => output.push(c),
        }
    }
    output
}

/// Transliterate text for use in a citation key.
///
/// Umlauts and ß are expanded to their two-letter forms, then every
/// character outside `[A-Za-z]` is dropped.
pub fn transliterate_key(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match KEY_MAP.get(&c) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(c),
        }
    }
    output.retain(|c| c.is_ascii_alphabetic());
    output
}
