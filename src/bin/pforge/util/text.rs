/// Greedy word wrap by character count. Words longer than `width` are kept whole.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    match max_len {
        0 => String::new(),
        _ if s.chars().count() <= max_len => s.to_string(),
        1 => "…".to_string(),
        _ => {
            let mut out: String = s.chars().take(max_len - 1).collect();
            out.push('…');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("duplicate PDG code 11", 30), vec!["duplicate PDG code 11"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("missing lifetime for particle 4122", 20),
            vec!["missing lifetime for", "particle 4122"]
        );
    }

    #[test]
    fn wrap_counts_characters() {
        assert_eq!(wrap("Λ Σ Ξ Ω", 5), vec!["Λ Σ Ξ", "Ω"]);
    }

    #[test]
    fn wrap_empty_text() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate("MuMinus", 10), "MuMinus");
        assert_eq!(truncate("MuMinus", 7), "MuMinus");
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("SigmaStarCMinusBar", 8), "SigmaSt…");
        assert_eq!(truncate("Λ_c+", 3), "Λ_…");
        assert_eq!(truncate("Gamma", 1), "…");
        assert_eq!(truncate("Gamma", 0), "");
    }
}
