use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckDefinitionError {
    #[error("a deck needs at least one section")]
    Empty,
    #[error("duplicate section slug '{slug}'")]
    DuplicateSlug { slug: String },
}
