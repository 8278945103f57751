/// Plural form selection for numerus messages.
///
/// The form order matches what translators enter for the language in
/// Linguist, so `form_index(n)` indexes directly into the `<numerusform>` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Japanese, Chinese, ...).
    Single,
    /// Singular for exactly one, plural otherwise (Swedish, English, German, ...).
    OneOther,
    /// Singular for zero and one (French, Brazilian Portuguese).
    French,
    /// Three forms by last digits (Russian, Ukrainian, Serbian, ...).
    Slavic,
    /// Three forms: one, few (2-4 except 12-14), many.
    Polish,
    /// Three forms: one, few (2-4), other.
    Czech,
}

impl PluralRule {
    /// Pick the rule for a locale code such as `sv_SE`, `pt_BR` or `ru`.
    pub fn for_language(code: &str) -> Self {
        let code = code.replace('-', "_");
        if code == "pt_BR" {
            return Self::French;
        }
        let lang = code.split('_').next().unwrap_or_default().to_ascii_lowercase();
        match lang.as_str() {
            "ja" | "ko" | "zh" | "vi" | "th" | "id" | "ms" | "lo" | "my" => Self::Single,
            "fr" | "oc" => Self::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::Slavic,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            _ => Self::OneOther,
        }
    }

    pub fn form_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::OneOther | Self::French => 2,
            Self::Slavic | Self::Polish | Self::Czech => 3,
        }
    }

    pub fn form_index(&self, n: u64) -> usize {
        let last = n % 10;
        let last_two = n % 100;
        match self {
            Self::Single => 0,
            Self::OneOther => usize::from(n != 1),
            Self::French => usize::from(n > 1),
            Self::Slavic => {
                if last == 1 && last_two != 11 {
                    0
                } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
                    1
                } else {
                    2
                }
            }
            Self::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
                    1
                } else {
                    2
                }
            }
            Self::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_for_language() {
        assert_eq!(PluralRule::for_language("sv_SE"), PluralRule::OneOther);
        assert_eq!(PluralRule::for_language("ja"), PluralRule::Single);
        assert_eq!(PluralRule::for_language("pt_BR"), PluralRule::French);
        assert_eq!(PluralRule::for_language("pt-BR"), PluralRule::French);
        assert_eq!(PluralRule::for_language("pt_PT"), PluralRule::OneOther);
        assert_eq!(PluralRule::for_language("ru_RU"), PluralRule::Slavic);
        assert_eq!(PluralRule::for_language("PL"), PluralRule::Polish);
        assert_eq!(PluralRule::for_language(""), PluralRule::OneOther);
    }

    #[test]
    fn test_one_other() {
        let rule = PluralRule::OneOther;
        assert_eq!(rule.form_count(), 2);
        assert_eq!(rule.form_index(0), 1);
        assert_eq!(rule.form_index(1), 0);
        assert_eq!(rule.form_index(2), 1);
    }

    #[test]
    fn test_french() {
        let rule = PluralRule::French;
        assert_eq!(rule.form_index(0), 0);
        assert_eq!(rule.form_index(1), 0);
        assert_eq!(rule.form_index(2), 1);
    }

    #[test]
    fn test_slavic() {
        let rule = PluralRule::Slavic;
        let forms: Vec<_> = [1, 2, 5, 11, 12, 21, 22, 25, 111]
            .into_iter()
            .map(|n| rule.form_index(n))
            .collect();
        assert_eq!(forms, vec![0, 1, 2, 2, 2, 0, 1, 2, 2]);
    }

    #[test]
    fn test_polish_and_czech() {
        assert_eq!(PluralRule::Polish.form_index(1), 0);
        assert_eq!(PluralRule::Polish.form_index(21), 2);
        assert_eq!(PluralRule::Polish.form_index(22), 1);
        assert_eq!(PluralRule::Czech.form_index(3), 1);
        assert_eq!(PluralRule::Czech.form_index(22), 2);
        assert_eq!(PluralRule::Single.form_index(7), 0);
    }
}
