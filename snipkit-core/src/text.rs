//! String capitalization helpers
//!
//! "Word character" means ASCII letters, digits and `_`. Anything else,
//! accented letters included, counts as a separator, so `"éa"` capitalizes
//! to `"éA"`.

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Upper-case the first word character of every word.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_word = false;

    for ch in text.chars() {
        let is_word = is_word_char(ch);
        if is_word && !previous_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        previous_is_word = is_word;
    }

    out
}

/// Upper-case the first character, if it is a word character.
pub fn capitalize_sentence(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_word_char(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_owned(),
    }
}

/// First character of every space-separated piece, joined.
///
/// Splits on single spaces only; runs of spaces produce empty pieces that
/// contribute nothing.
pub fn initials(text: &str) -> String {
    text.split(' ').filter_map(|word| word.chars().next()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("hello world"), "Hello World");
        assert_eq!(capitalize_words("jean-luc picard"), "Jean-Luc Picard");
        assert_eq!(capitalize_words("it's 9am_ok"), "It'S 9am_ok");
        assert_eq!(capitalize_words("éa ça"), "éA çA");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn capitalizes_sentence_start_only() {
        assert_eq!(capitalize_sentence("hello world"), "Hello world");
        assert_eq!(capitalize_sentence(" hello"), " hello");
        assert_eq!(capitalize_sentence("élan"), "élan");
        assert_eq!(capitalize_sentence(""), "");
    }

    #[test]
    fn collects_initials() {
        assert_eq!(initials("Grace Brewster Hopper"), "GBH");
        assert_eq!(initials("ada  lovelace"), "al");
        assert_eq!(initials(""), "");
        assert_eq!(initials("Émile Zola"), "ÉZ");
    }
}
