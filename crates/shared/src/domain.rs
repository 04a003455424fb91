use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DeckDefinitionError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(CardId);

/// One named, orderable content region selectable via the tab bar.
///
/// The slug is the stable identifier matched against the launch query
/// (`overview`, `method`, ...); the title is what the tab button shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub slug: String,
    pub title: String,
}

impl Section {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }
}

/// Fixed, ordered sequence of sections, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    sections: Vec<Section>,
}

impl Deck {
    /// A deck must have at least one section and unique slugs.
    pub fn new(sections: Vec<Section>) -> Result<Self, DeckDefinitionError> {
        if sections.is_empty() {
            return Err(DeckDefinitionError::Empty);
        }
        {
            let mut seen = HashSet::with_capacity(sections.len());
            for section in &sections {
                if !seen.insert(section.slug.as_str()) {
                    return Err(DeckDefinitionError::DuplicateSlug {
                        slug: section.slug.clone(),
                    });
                }
            }
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn index_of_slug(&self, slug: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.slug == slug)
    }
}
