//! Static content of the PrefPalette presentation: the five sections, their
//! cards, and the paper header. Pure data; the app shell decides how it is
//! drawn.

use shared::domain::{CardId, Deck, Section};
use shared::error::DeckDefinitionError;

pub const REPOSITORY_URL: &str = "https://github.com/ifsheldon/prefpalette_presentation";
pub const ARXIV_URL: &str = "https://arxiv.org/abs/2507.13541v1";

const CARD_PAPER_INTRO: CardId = CardId(1);
const CARD_VIS_RELEVANCE: CardId = CardId(2);
const CARD_RESEARCH_QUESTION: CardId = CardId(3);
const CARD_COUNTERFACTUAL: CardId = CardId(4);
const CARD_ATTENTION: CardId = CardId(5);

#[derive(Debug, Clone, Copy)]
pub struct PaperHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub venue: &'static str,
    pub affiliations: &'static str,
    pub date: &'static str,
}

pub fn header() -> PaperHeader {
    PaperHeader {
        title: "PrefPalette: Personalized Preference Modeling with Latent Attributes",
        subtitle: "A Framework for Community-Specific Preference Learning",
        venue: "Published at the Conference on Language Modeling (CoLM) 2025",
        affiliations: "Meta FAIR, University of Washington, Meta GenAI",
        date: "July 2025",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub stat: Option<Stat>,
    pub links: &'static [Link],
}

#[derive(Debug, Clone, Copy)]
pub enum Block {
    Card {
        title: &'static str,
        body: Body,
    },
    Expandable {
        id: CardId,
        title: &'static str,
        body: Body,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct SectionContent {
    pub subtitle: &'static str,
    pub blocks: &'static [Block],
}

pub fn paper_deck() -> Result<Deck, DeckDefinitionError> {
    Deck::new(vec![
        Section::new("overview", "Overview & Motivation"),
        Section::new("method", "PrefPalette Method"),
        Section::new("findings", "Key Findings"),
        Section::new("connections", "Connections to Visualization"),
        Section::new("discussion", "Discussion & Questions"),
    ])
}

/// Every expandable card in the deck, for registration at startup.
pub fn expandable_card_ids() -> Vec<CardId> {
    let mut ids = Vec::new();
    for content in [OVERVIEW, METHOD, FINDINGS, CONNECTIONS, DISCUSSION] {
        for block in content.blocks {
            if let Block::Expandable { id, .. } = block {
                ids.push(*id);
            }
        }
    }
    ids
}

pub fn section_content(slug: &str) -> SectionContent {
    match slug {
        "overview" => OVERVIEW,
        "method" => METHOD,
        "findings" => FINDINGS,
        "connections" => CONNECTIONS,
        "discussion" => DISCUSSION,
        _ => EMPTY,
    }
}

const EMPTY: SectionContent = SectionContent {
    subtitle: "",
    blocks: &[],
};

const OVERVIEW: SectionContent = SectionContent {
    subtitle: "Understanding the relevance to visualization research",
    blocks: &[
        Block::Expandable {
            id: CARD_PAPER_INTRO,
            title: "Paper Introduction",
            body: Body {
                paragraphs: &[
                    "Key Contribution: a framework that decomposes preferences into \
                     attribute dimensions and tailors prediction to distinct social \
                     community values.",
                ],
                bullets: &[],
                stat: None,
                links: &[Link {
                    label: "Open paper on arXiv ↗",
                    url: ARXIV_URL,
                }],
            },
        },
        Block::Expandable {
            id: CARD_VIS_RELEVANCE,
            title: "Why This Matters for Visualization",
            body: Body {
                paragraphs: &[
                    "Visualization also deals with implicit preferences and needs to \
                     consider different user groups and communities.",
                ],
                bullets: &[],
                stat: None,
                links: &[],
            },
        },
        Block::Expandable {
            id: CARD_RESEARCH_QUESTION,
            title: "Research Question",
            body: Body {
                paragraphs: &[
                    "How can we model and predict community-specific preferences for \
                     better AI personalization?",
                ],
                bullets: &[],
                stat: None,
                links: &[],
            },
        },
    ],
};

const METHOD: SectionContent = SectionContent {
    subtitle: "Two-stage framework for preference modeling",
    blocks: &[
        Block::Card {
            title: "Data",
            body: Body {
                paragraphs: &[
                    "This work models community-conditioned preferences using text from \
                     online communities and synthesized counterfactuals for attributes.",
                ],
                bullets: &[],
                stat: None,
                links: &[],
            },
        },
        Block::Expandable {
            id: CARD_COUNTERFACTUAL,
            title: "Counterfactual Attribute Synthesis",
            body: Body {
                paragraphs: &[
                    "Trains specialized attribute predictors with controlled \
                     generations instead of noisy human labels.",
                ],
                bullets: &[
                    "Pick an attribute dimension (e.g. Formality).",
                    "Generate controlled variations (counterfactuals) along it.",
                    "Preserve all other attributes so the signal stays clean.",
                    "Covers rare cases and sidesteps inconsistent annotation.",
                ],
                stat: None,
                links: &[],
            },
        },
        Block::Expandable {
            id: CARD_ATTENTION,
            title: "Attention-based Preference Modeling",
            body: Body {
                paragraphs: &[
                    "Each candidate response is represented by its attribute vector; \
                     per community, an attention mechanism produces weights over \
                     attributes and combines them into a preference score.",
                ],
                bullets: &[
                    "Flexible re-weighting per community and task.",
                    "Interpretable importance scores.",
                    "Dynamic adaptation with context.",
                ],
                stat: None,
                links: &[],
            },
        },
    ],
};

const FINDINGS: SectionContent = SectionContent {
    subtitle: "Performance results and community insights",
    blocks: &[
        Block::Card {
            title: "Performance Results",
            body: Body {
                paragraphs: &[],
                bullets: &[],
                stat: Some(Stat {
                    value: "46.6%",
                    caption: "Improvement over GPT-4o",
                }),
                links: &[],
            },
        },
        Block::Card {
            title: "Community-Specific Preference Profiles",
            body: Body {
                paragraphs: &[
                    "Examples for scholarly, conflict-oriented, and support-based \
                     communities.",
                ],
                bullets: &[],
                stat: None,
                links: &[],
            },
        },
    ],
};

const CONNECTIONS: SectionContent = SectionContent {
    subtitle: "Applying preference modeling to visualization design",
    blocks: &[Block::Card {
        title: "Target Audiences for Visualization",
        body: Body {
            paragraphs: &[
                "Visualization design serves many audiences at once: analysts, domain \
                 experts, casual readers, and decision makers, each with their own \
                 preferences over density, annotation, and style.",
            ],
            bullets: &[],
            stat: None,
            links: &[],
        },
    }],
};

const DISCUSSION: SectionContent = SectionContent {
    subtitle: "Research opportunities and challenges",
    blocks: &[Block::Card {
        title: "Research Questions",
        body: Body {
            paragraphs: &[],
            bullets: &[
                "How can we identify preference dimensions for visualization?",
                "What attributes matter most for different visualization tasks?",
                "Can we build similar preference models for visualization communities?",
            ],
            stat: None,
            links: &[],
        },
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_builds_with_five_sections() {
        let deck = paper_deck().expect("deck");
        assert_eq!(deck.section_count(), 5);
        assert_eq!(deck.index_of_slug("findings"), Some(2));
    }

    #[test]
    fn every_section_slug_has_content() {
        let deck = paper_deck().expect("deck");
        for section in deck.sections() {
            let content = section_content(&section.slug);
            assert!(
                !content.blocks.is_empty(),
                "section '{}' has no content",
                section.slug
            );
        }
    }

    #[test]
    fn unknown_slug_yields_empty_content() {
        assert!(section_content("bogus").blocks.is_empty());
    }

    #[test]
    fn expandable_card_ids_are_unique() {
        let ids = expandable_card_ids();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 5);
    }
}
