use shared::domain::Deck;
use tracing::debug;
use url::Url;

/// Resolves the startup section from a launch link such as
/// `prefdeck://present?tab=findings`.
///
/// Read once at startup. An unknown slug, a missing `tab` pair, or a link
/// that does not parse all degrade to the first section rather than
/// surfacing an error.
pub fn section_index_from_launch_url(deck: &Deck, raw: &str) -> usize {
    let Some(slug) = tab_query_value(raw) else {
        return 0;
    };
    match deck.index_of_slug(&slug) {
        Some(index) => index,
        None => {
            debug!(%slug, "unknown tab in launch link, keeping first section");
            0
        }
    }
}

fn tab_query_value(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "tab")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
