//! Suggestion candidates and selection cycling.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::word::is_word_char;

/// A source of completion suggestions.
///
/// Given the full current buffer text, the provider returns an ordered list
/// of *suffixes* to append at the cursor (not full words), best match first.
/// An empty list means no suggestion.
///
/// The provider runs synchronously on the editor thread; a slow provider
/// stalls the edit session for as long as it takes.
pub trait SuggestionProvider {
    /// Compute suggestion suffixes for the current buffer text.
    fn suggest(&mut self, text: &str) -> Result<Vec<String>>;
}

impl<F> SuggestionProvider for F
where
    F: FnMut(&str) -> Result<Vec<String>>,
{
    fn suggest(&mut self, text: &str) -> Result<Vec<String>> {
        self(text)
    }
}

/// Build a provider that completes the word ending at the cursor against a
/// fixed vocabulary, returning the remaining suffix of each match.
pub fn prefix_provider<I, S>(words: I) -> impl FnMut(&str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let vocabulary: Vec<String> = words.into_iter().map(Into::into).collect();
    move |text: &str| {
        let token: String = text
            .chars()
            .rev()
            .take_while(|c| is_word_char(*c))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if token.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vocabulary
            .iter()
            .filter(|w| w.len() > token.len() && w.starts_with(&token))
            .map(|w| w[token.len()..].to_string())
            .collect())
    }
}

/// The ranked candidate list and the active selection.
///
/// Recomputed after every buffer mutation; only the active index changes on
/// an explicit cycle.
#[derive(Clone, Debug, Default)]
pub struct SuggestionState {
    candidates: Vec<String>,
    active: usize,
}

impl SuggestionState {
    /// Create an empty suggestion state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the provider for fresh candidates and reset the selection.
    ///
    /// A provider failure is logged and treated as "no suggestions"; it never
    /// ends the edit session.
    pub fn recompute<P: SuggestionProvider + ?Sized>(&mut self, provider: &mut P, text: &str) {
        self.candidates = match provider.suggest(text) {
            Ok(candidates) => candidates,
            Err(e) => {
                emit_log(LogLevel::Warn, &format!("suggestion provider failed: {e}"));
                Vec::new()
            }
        };
        self.active = 0;
    }

    /// Advance the selection, wrapping past the end.
    pub fn cycle_next(&mut self) {
        if !self.candidates.is_empty() {
            self.active = (self.active + 1) % self.candidates.len();
        }
    }

    /// Retreat the selection, wrapping past the start.
    pub fn cycle_previous(&mut self) {
        if !self.candidates.is_empty() {
            self.active = (self.active + self.candidates.len() - 1) % self.candidates.len();
        }
    }

    /// The currently selected suggestion suffix, or "" if none.
    #[must_use]
    pub fn active_text(&self) -> &str {
        self.candidates
            .get(self.active)
            .map_or("", String::as_str)
    }

    /// The currently selected index (meaningless when empty).
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// All current candidates.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Whether there are any candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Drop all candidates.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.active = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn fixed(candidates: &[&str]) -> impl FnMut(&str) -> Result<Vec<String>> {
        let candidates: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        move |_| Ok(candidates.clone())
    }

    #[test]
    fn test_recompute_resets_selection() {
        let mut state = SuggestionState::new();
        state.recompute(&mut fixed(&["apple", "apricot"]), "a");
        state.cycle_next();
        assert_eq!(state.active_index(), 1);

        state.recompute(&mut fixed(&["banana"]), "b");
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.active_text(), "banana");
    }

    #[test]
    fn test_cycle_wraparound() {
        let mut state = SuggestionState::new();
        state.recompute(&mut fixed(&["apple", "apricot"]), "a");

        assert_eq!(state.active_index(), 0);
        state.cycle_next();
        assert_eq!(state.active_index(), 1);
        state.cycle_next();
        assert_eq!(state.active_index(), 0);
        state.cycle_previous();
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_cycle_empty_is_noop() {
        let mut state = SuggestionState::new();
        state.cycle_next();
        state.cycle_previous();
        assert_eq!(state.active_text(), "");
        assert!(state.is_empty());
    }

    #[test]
    fn test_provider_failure_downgrades_to_empty() {
        let mut state = SuggestionState::new();
        state.recompute(&mut fixed(&["something"]), "s");
        assert!(!state.is_empty());

        let mut failing = |_: &str| Err(Error::Provider("backend down".to_string()));
        state.recompute(&mut failing, "s");
        assert!(state.is_empty());
        assert_eq!(state.active_text(), "");
    }

    #[test]
    fn test_prefix_provider_suffixes() {
        let mut provider = prefix_provider(["apple", "apricot", "banana"]);
        let got = provider("ap").unwrap();
        assert_eq!(got, vec!["ple".to_string(), "ricot".to_string()]);
    }

    #[test]
    fn test_prefix_provider_last_token_only() {
        let mut provider = prefix_provider(["apple", "banana"]);
        let got = provider("eat ba").unwrap();
        assert_eq!(got, vec!["nana".to_string()]);
    }

    #[test]
    fn test_prefix_provider_empty_token() {
        let mut provider = prefix_provider(["apple"]);
        assert!(provider("").unwrap().is_empty());
        assert!(provider("apple ").unwrap().is_empty());
    }
}
