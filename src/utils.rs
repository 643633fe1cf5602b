//! Utility functions for string processing.

/// Characters stripped from the ends of a token: ASCII space and every
/// control character below it. Unicode spaces such as U+00A0 are kept.
#[inline]
fn is_trimmed(c: char) -> bool {
    c <= ' '
}

/// True when the text is made only of characters [`tokens`] trims away.
///
/// This is the guard every scorer runs before tokenizing. It uses the same
/// character set as [`tokens`], so a text that passes it always yields at
/// least one token.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_trimmed)
}

/// Split a document into scoring tokens.
///
/// Splits on single ASCII spaces only, then trims control characters and
/// spaces from each piece and lowercases it. Pieces that are empty after
/// trimming (runs of spaces, leading/trailing spaces) are dropped. Tabs and
/// newlines inside a piece are not separators: `"rust\tgo"` is one token,
/// `"rust \tgo"` is two. A no-break space is an ordinary character.
///
/// ```
/// use jobsift::tokens;
///
/// let toks: Vec<String> = tokens("  Senior  Rust Engineer ").collect();
/// assert_eq!(toks, ["senior", "rust", "engineer"]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(' ')
        .map(|piece| piece.trim_matches(is_trimmed))
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
}

/// Join a list of strings with a separator. Empty lists join to `""`.
pub fn join_list(items: &[String], separator: &str) -> String {
    items.join(separator)
}

/// Format an integer compensation with thousands separators: `60000` → `"$60,000"`.
pub fn format_compensation(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
