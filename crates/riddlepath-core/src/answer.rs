//! Player answers and answer normalization.

/// Normalizes text for answer comparison.
///
/// Every whitespace character is removed (not only leading and trailing
/// whitespace) and the remaining text is lowercased. The same function is
/// applied to player input and to expected fragments.
///
/// # Examples
///
/// ```
/// use riddlepath_core::normalize_answer;
///
/// assert_eq!(normalize_answer(" YO "), "yo");
/// assert_eq!(normalize_answer("y o"), "yo");
/// assert_eq!(normalize_answer("ט\tו ן"), "טון");
/// ```
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    // Lowercase the whole string so context rules (final sigma) apply.
    raw.chars()
        .filter(|&c| !is_answer_whitespace(c))
        .collect::<String>()
        .to_lowercase()
}

/// Returns `true` for characters ignored in answers: Unicode whitespace and
/// the byte order mark `U+FEFF`.
#[must_use]
pub fn is_answer_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Free-form input submitted by the player.
///
/// Conversions never fail: absent input and bytes that are not valid UTF-8
/// become an empty answer, which matches no fragment.
///
/// # Examples
///
/// ```
/// use riddlepath_core::Answer;
///
/// assert_eq!(Answer::from(" Yo ").normalized(), "yo");
/// assert_eq!(Answer::from(None::<&str>).normalized(), "");
/// assert_eq!(Answer::from(&b"\xff\xfe"[..]).normalized(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    text: String,
}

impl Answer {
    /// Returns the normalized comparison value.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize_answer(&self.text)
    }

    /// Returns `true` if the answer matches `fragment` after normalizing both.
    #[must_use]
    pub fn matches(&self, fragment: &str) -> bool {
        self.normalized() == normalize_answer(fragment)
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&String> for Answer {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<Option<&str>> for Answer {
    fn from(text: Option<&str>) -> Self {
        text.map(Self::from).unwrap_or_default()
    }
}

impl From<Option<String>> for Answer {
    fn from(text: Option<String>) -> Self {
        text.map(Self::from).unwrap_or_default()
    }
}

impl From<&[u8]> for Answer {
    fn from(bytes: &[u8]) -> Self {
        std::str::from_utf8(bytes)
            .map(Self::from)
            .unwrap_or_default()
    }
}
