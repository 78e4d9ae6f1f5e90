//! Sentence segmentation for free-form input text

/// Splits raw text into sentences on the ASCII period.
///
/// Fragments are trimmed and dropped when empty, so trailing periods and
/// runs of consecutive periods produce no extra elements. Source order is
/// preserved. Text with no period yields a single element.
///
/// # Examples
///
/// ```
/// use frontend::analyzer::segmentation::split_sentences;
///
/// let sentences = split_sentences("A. B. C.");
/// assert_eq!(sentences, vec!["A", "B", "C"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(String::from)
        .collect()
}
