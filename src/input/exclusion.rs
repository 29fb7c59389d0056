//! Category-based line exclusion.
//!
//! Each rule pairs a configuration toggle with a predicate over the
//! trimmed line. The active rules are picked once per source and tried in
//! order; the first match excludes the line.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::config::FilterConfig;

/// Why a line was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Empty after trimming whitespace. Always applies.
    Empty,
    /// Starts with `#`, `~` or `/`.
    CommentLike,
    /// Starts with `.`.
    DotPrefixed,
    /// Starts with an ASCII digit.
    DigitPrefixed,
    /// Every letter is uppercase.
    AllUppercase,
    /// Every letter is lowercase.
    AllLowercase,
    /// First character is an uppercase letter.
    StartsUppercase,
    /// First character is a lowercase letter.
    StartsLowercase,
}

impl ExclusionReason {
    /// Short name used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::CommentLike => "comment-like",
            Self::DotPrefixed => "dot-prefixed",
            Self::DigitPrefixed => "digit-prefixed",
            Self::AllUppercase => "all-uppercase",
            Self::AllLowercase => "all-lowercase",
            Self::StartsUppercase => "starts-uppercase",
            Self::StartsLowercase => "starts-lowercase",
        }
    }
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any `L*` general category. Symbols and marks never count as letters.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Category `Lu`.
fn is_upper(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::UppercaseLetter)
}

/// Category `Ll`.
fn is_lower(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::LowercaseLetter)
}

struct Rule {
    reason: ExclusionReason,
    enabled: fn(&FilterConfig) -> bool,
    matches: fn(&str) -> bool,
}

static RULES: [Rule; 7] = [
    Rule {
        reason: ExclusionReason::CommentLike,
        enabled: |c| c.exclude_comment_lines,
        matches: |t| t.starts_with(['#', '~', '/']),
    },
    Rule {
        reason: ExclusionReason::DotPrefixed,
        enabled: |c| c.exclude_dot_lines,
        matches: |t| t.starts_with('.'),
    },
    Rule {
        reason: ExclusionReason::DigitPrefixed,
        enabled: |c| c.exclude_number_lines,
        matches: |t| t.as_bytes().first().is_some_and(u8::is_ascii_digit),
    },
    Rule {
        reason: ExclusionReason::AllUppercase,
        enabled: |c| c.exclude_uppercase,
        matches: |t| {
            !t.is_empty() && t.chars().all(|ch| !is_letter(ch) || is_upper(ch))
        },
    },
    Rule {
        reason: ExclusionReason::AllLowercase,
        enabled: |c| c.exclude_lowercase,
        matches: |t| {
            !t.is_empty() && t.chars().all(|ch| !is_letter(ch) || is_lower(ch))
        },
    },
    Rule {
        reason: ExclusionReason::StartsUppercase,
        enabled: |c| c.exclude_start_upper,
        matches: |t| t.chars().next().is_some_and(is_upper),
    },
    Rule {
        reason: ExclusionReason::StartsLowercase,
        enabled: |c| c.exclude_start_lower,
        matches: |t| t.chars().next().is_some_and(is_lower),
    },
];

/// The exclusion rules enabled by a [`FilterConfig`].
pub struct ExclusionRules {
    active: Vec<&'static Rule>,
}

impl ExclusionRules {
    /// Selects the rules whose toggles are set in `config`.
    #[must_use]
    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            active: RULES.iter().filter(|rule| (rule.enabled)(config)).collect(),
        }
    }

    /// Number of enabled toggle rules; the empty-line rule is not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` when no toggle rule is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the reason `line` is excluded, or `None` if it is kept.
    ///
    /// The line is trimmed of surrounding whitespace first. Invalid UTF-8
    /// is replaced with U+FFFD, which has no case.
    #[must_use]
    pub fn check(&self, line: &[u8]) -> Option<ExclusionReason> {
        let text = String::from_utf8_lossy(line);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Some(ExclusionReason::Empty);
        }
        self.active
            .iter()
            .find(|rule| (rule.matches)(trimmed))
            .map(|rule| rule.reason)
    }
}

impl std::fmt::Debug for ExclusionRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.active.iter().map(|rule| rule.reason))
            .finish()
    }
}

/// Returns `true` if `line` should be dropped under `config`.
#[must_use]
pub fn should_exclude(line: &[u8], config: &FilterConfig) -> bool {
    ExclusionRules::from_config(config).check(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config_with(toggle: impl FnOnce(&mut FilterConfig)) -> FilterConfig {
        let mut config = FilterConfig::default();
        toggle(&mut config);
        config
    }

    #[test]
    fn empty_lines_always_excluded() {
        let config = FilterConfig::default();
        assert!(should_exclude(b"", &config));
        assert!(should_exclude(b"   \t ", &config));
        assert!(!should_exclude(b"admin", &config));
    }

    #[test]
    fn no_toggles_keeps_everything_else() {
        let config = FilterConfig::default();
        for line in [&b"#x"[..], b".git", b"404", b"ABC", b"abc", b"~user"] {
            assert!(!should_exclude(line, &config), "{line:?}");
        }
    }

    #[test]
    fn comment_like_prefixes() {
        let config = config_with(|c| c.exclude_comment_lines = true);
        assert!(should_exclude(b"#x", &config));
        assert!(should_exclude(b"  ~backup", &config));
        assert!(should_exclude(b"/admin", &config));
        assert!(!should_exclude(b"admin/", &config));
    }

    #[test]
    fn dot_lines_only() {
        let config = config_with(|c| c.exclude_dot_lines = true);
        assert!(should_exclude(b".git", &config));
        assert!(!should_exclude(b"git", &config));
        assert!(!should_exclude(b"#git", &config));
    }

    #[test]
    fn digit_start() {
        let config = config_with(|c| c.exclude_number_lines = true);
        assert!(should_exclude(b"2020", &config));
        assert!(should_exclude(b" 9lives", &config));
        assert!(!should_exclude(b"v2", &config));
    }

    #[test]
    fn all_uppercase_ignores_non_letters() {
        let config = config_with(|c| c.exclude_uppercase = true);
        assert!(should_exclude(b"ABC123", &config));
        assert!(should_exclude(b"README.TXT", &config));
        assert!(!should_exclude(b"ABC123abc", &config));
        assert!(should_exclude(b"123", &config));
    }

    #[test]
    fn all_lowercase_ignores_non_letters() {
        let config = config_with(|c| c.exclude_lowercase = true);
        assert!(should_exclude(b"admin-1", &config));
        assert!(!should_exclude(b"Admin", &config));
    }

    #[test]
    fn case_checks_use_unicode() {
        let upper = config_with(|c| c.exclude_uppercase = true);
        assert!(should_exclude("ÉTÉ".as_bytes(), &upper));
        assert!(!should_exclude("été".as_bytes(), &upper));

        let start_upper = config_with(|c| c.exclude_start_upper = true);
        assert!(should_exclude("Éclair".as_bytes(), &start_upper));
        assert!(!should_exclude("éclair".as_bytes(), &start_upper));
    }

    #[test]
    fn case_checks_only_count_letters() {
        // Circled letters are symbols (So), U+0345 is a combining mark (Mn).
        let start_upper = config_with(|c| c.exclude_start_upper = true);
        assert!(!should_exclude("Ⓐbc".as_bytes(), &start_upper));

        let all_lower = config_with(|c| c.exclude_lowercase = true);
        assert!(should_exclude("aⒶ".as_bytes(), &all_lower));

        let all_upper = config_with(|c| c.exclude_uppercase = true);
        assert!(should_exclude("A\u{345}B".as_bytes(), &all_upper));
    }

    #[test]
    fn titlecase_letter_is_neither_case() {
        // U+01C5 is Lt: a letter, but not Lu or Ll.
        let all_upper = config_with(|c| c.exclude_uppercase = true);
        assert!(!should_exclude("\u{1c5}A".as_bytes(), &all_upper));

        let start_upper = config_with(|c| c.exclude_start_upper = true);
        assert!(!should_exclude("\u{1c5}a".as_bytes(), &start_upper));
    }

    #[test]
    fn start_case() {
        let upper = config_with(|c| c.exclude_start_upper = true);
        assert!(should_exclude(b"Admin", &upper));
        assert!(!should_exclude(b"aDMIN", &upper));
        assert!(!should_exclude(b"_Admin", &upper));

        let lower = config_with(|c| c.exclude_start_lower = true);
        assert!(should_exclude(b"aDMIN", &lower));
        assert!(!should_exclude(b"Admin", &lower));
    }

    #[test]
    fn invalid_utf8_has_no_case() {
        let config = config_with(|c| {
            c.exclude_start_upper = true;
            c.exclude_start_lower = true;
        });
        assert!(!should_exclude(&[0xff, b'a'], &config));
    }

    #[test]
    fn first_matching_rule_is_reported() {
        let config = config_with(|c| {
            c.exclude_dot_lines = true;
            c.exclude_lowercase = true;
        });
        let rules = ExclusionRules::from_config(&config);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.check(b".git"), Some(ExclusionReason::DotPrefixed));
        assert_eq!(rules.check(b"git"), Some(ExclusionReason::AllLowercase));
        assert_eq!(rules.check(b"Git"), None);
        assert_eq!(rules.check(b" "), Some(ExclusionReason::Empty));
    }

    #[test]
    fn reason_display() {
        assert_eq!(ExclusionReason::DigitPrefixed.to_string(), "digit-prefixed");
    }

    proptest! {
        #[test]
        fn whitespace_only_never_kept(line in "[ \t\r\u{a0}\u{2003}]{0,12}") {
            let config = FilterConfig::default();
            prop_assert!(should_exclude(line.as_bytes(), &config));
        }
    }
}
