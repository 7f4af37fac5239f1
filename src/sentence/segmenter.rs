use anyhow::Result;
use regex::Regex;

/// French abbreviations whose trailing period must not end a sentence
pub const FRENCH_ABBREVIATIONS: &[&str] = &[
    "M", "Mme", "Mlle", "Dr", "Prof", "Sr", "Jr", "St", "Ste",
    "av", "bd", "pl", "etc", "ex", "cf", "vol", "p", "pp",
    "n", "no", "tel", "fax", "env", "min", "max", "approx",
];

const DOT_SENTINEL: &str = "<DOT>";
const DECIMAL_SENTINEL: &str = "<DECIMAL>";
const ELLIPSIS_SENTINEL: &str = "<ELLIPSIS>";
const HOUR_SENTINEL: &str = "<HOUR>";

/// Sentence segmenter for French and English transcript text
///
/// Splits text on terminal punctuation followed by whitespace and an
/// uppercase letter, after protecting abbreviation periods, decimal
/// numbers, ellipses and French time notation (e.g. "20h39") behind
/// sentinels. The abbreviation set is configurable; the same set is
/// applied to both languages.
#[derive(Debug, Clone)]
pub struct Segmenter {
    abbreviations: Vec<String>,
    abbreviation_re: Regex,
    decimal_re: Regex,
    hour_re: Regex,
    boundary_re: Regex,
}

impl Segmenter {
    /// Create a segmenter with the default French abbreviation set
    pub fn new() -> Self {
        Self::with_abbreviations(FRENCH_ABBREVIATIONS.iter().map(|s| s.to_string()))
            .expect("built-in segmentation patterns compile")
    }

    /// Create a segmenter with a custom abbreviation set
    pub fn with_abbreviations<I>(abbreviations: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let abbreviations: Vec<String> = abbreviations.into_iter().collect();

        // Case-insensitive, word-boundary delimited, and only when the
        // period is followed by whitespace. The whitespace is captured and
        // re-emitted so nothing is consumed from the text.
        let alternation = abbreviations
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");
        let abbreviation_re = Regex::new(&format!(r"(?i)\b({})\.(\s)", alternation))?;

        let decimal_re = Regex::new(r"(\d)\.(\d)")?;
        let hour_re = Regex::new(r"(\d+)h(\d+)")?;

        // Terminal mark, whitespace, then an uppercase Latin or accented
        // French letter. The mark stays with the left fragment and the
        // uppercase letter starts the right one.
        let boundary_re = Regex::new(r"([.!?])\s+([A-ZÀÂÄÉÈÊËÏÎÔÙÛÜŸÇ])")?;

        Ok(Self {
            abbreviations,
            abbreviation_re,
            decimal_re,
            hour_re,
            boundary_re,
        })
    }

    /// Get the active abbreviation set
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// Split text into sentences with original punctuation preserved
    ///
    /// Empty or whitespace-only input yields an empty vec. A terminal mark
    /// not followed by whitespace and an uppercase letter does not split,
    /// so the trailing fragment is always captured whole.
    pub fn segment(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let protected = self.protect(text);

        let mut fragments = Vec::new();
        let mut start = 0;
        for caps in self.boundary_re.captures_iter(&protected) {
            let mark = caps.get(1).expect("boundary mark group");
            let upper = caps.get(2).expect("boundary uppercase group");
            fragments.push(&protected[start..mark.end()]);
            start = upper.start();
        }
        fragments.push(&protected[start..]);

        fragments
            .into_iter()
            .map(restore)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Hide false sentence boundaries behind sentinels
    fn protect(&self, text: &str) -> String {
        let protected = self
            .abbreviation_re
            .replace_all(text, format!("${{1}}{}${{2}}", DOT_SENTINEL).as_str())
            .into_owned();
        let protected = self
            .decimal_re
            .replace_all(&protected, format!("${{1}}{}${{2}}", DECIMAL_SENTINEL).as_str())
            .into_owned();
        // The sentinel keeps a trailing period so an ellipsis still ends a
        // sentence when followed by whitespace and a capital.
        let protected = protected.replace("...", &format!("{}.", ELLIPSIS_SENTINEL));
        self.hour_re
            .replace_all(&protected, format!("${{1}}{}${{2}}", HOUR_SENTINEL).as_str())
            .into_owned()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverse every sentinel back to its literal form
fn restore(fragment: &str) -> String {
    fragment
        .replace(DOT_SENTINEL, ".")
        .replace(DECIMAL_SENTINEL, ".")
        .replace(&format!("{}.", ELLIPSIS_SENTINEL), "...")
        .replace(HOUR_SENTINEL, "h")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let segmenter = Segmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_basic_split() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Bonjour tout le monde. Comment allez-vous ?");
        assert_eq!(
            sentences,
            vec!["Bonjour tout le monde.", "Comment allez-vous ?"]
        );
    }

    #[test]
    fn test_abbreviation_and_decimal_do_not_split() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Le Dr. Martin est là. Il a 3.14 ans.");
        assert_eq!(
            sentences,
            vec!["Le Dr. Martin est là.", "Il a 3.14 ans."]
        );
    }

    #[test]
    fn test_abbreviation_case_insensitive() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Voir p. 12 pour la suite. Merci.");
        assert_eq!(sentences, vec!["Voir p. 12 pour la suite.", "Merci."]);

        let sentences = segmenter.segment("ETC. Voilà tout.");
        assert_eq!(sentences, vec!["ETC. Voilà tout."]);
    }

    #[test]
    fn test_ellipsis_preserved() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Il est parti... Elle est restée.");
        assert_eq!(sentences, vec!["Il est parti...", "Elle est restée."]);
    }

    #[test]
    fn test_time_notation_does_not_split() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Le train part à 20h39 ce soir. Ne sois pas en retard !");
        assert_eq!(
            sentences,
            vec![
                "Le train part à 20h39 ce soir.",
                "Ne sois pas en retard !"
            ]
        );
    }

    #[test]
    fn test_lowercase_after_mark_does_not_split() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Il a dit oui. et puis il est parti.");
        assert_eq!(sentences, vec!["Il a dit oui. et puis il est parti."]);
    }

    #[test]
    fn test_digit_after_mark_does_not_split() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Le score final. 3 buts partout.");
        assert_eq!(sentences, vec!["Le score final. 3 buts partout."]);
    }

    #[test]
    fn test_accented_uppercase_starts_sentence() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("C'est fini. À demain !");
        assert_eq!(sentences, vec!["C'est fini.", "À demain !"]);
    }

    #[test]
    fn test_exclamation_and_question_marks() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Quelle surprise ! Tu es venu ? Oui.");
        assert_eq!(sentences, vec!["Quelle surprise !", "Tu es venu ?", "Oui."]);
    }

    #[test]
    fn test_final_fragment_without_trailing_capital() {
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Première phrase. Deuxième phrase sans point final");
        assert_eq!(
            sentences,
            vec!["Première phrase.", "Deuxième phrase sans point final"]
        );
    }

    #[test]
    fn test_concatenation_preserves_content() {
        let segmenter = Segmenter::new();
        let input = "M. Dupont arrive à 9h15. Il apporte 2.5 kg de pommes... C'est beaucoup !";
        let sentences = segmenter.segment(input);
        assert_eq!(sentences.len(), 3);
        let rejoined = sentences.join(" ");
        let normalized: Vec<&str> = input.split_whitespace().collect();
        assert_eq!(rejoined.split_whitespace().collect::<Vec<_>>(), normalized);
    }

    #[test]
    fn test_custom_abbreviation_set() {
        let segmenter =
            Segmenter::with_abbreviations(vec!["env".to_string()]).unwrap();
        // "Dr" is not in the custom set, so its period now splits.
        let sentences = segmenter.segment("Le Dr. Martin est là. Il va bien.");
        assert_eq!(
            sentences,
            vec!["Le Dr.", "Martin est là.", "Il va bien."]
        );
        let sentences = segmenter.segment("Il reste env. 3 km. On continue.");
        assert_eq!(sentences, vec!["Il reste env. 3 km.", "On continue."]);
    }

    #[test]
    fn test_abbreviation_at_end_of_text_not_protected() {
        // The protection only applies when the period is followed by
        // whitespace, so a trailing "etc." stays as-is and never splits
        // anyway (no following capital).
        let segmenter = Segmenter::new();
        let sentences = segmenter.segment("Des pommes, des poires, etc.");
        assert_eq!(sentences, vec!["Des pommes, des poires, etc."]);
    }
}
