//! Detail-panel sections owned by each tile.

use shared::domain::ItemId;

use crate::i18n::I18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Heading, body and two tags.
    Intro,
    /// Heading and a list of points.
    Highlights,
    /// Heading and a closing quote.
    Quote,
    Leadership,
    Experts,
    Portfolio,
    ContactDetails,
    ContactForm,
    QuickChat,
    GenericIntro,
    GenericPoints,
    GenericCallToAction,
}

const SERVICE: &[Section] = &[Section::Intro, Section::Highlights, Section::Quote];
const TEAM: &[Section] = &[
    Section::Intro,
    Section::Leadership,
    Section::Experts,
    Section::Portfolio,
];
const CONTACT: &[Section] = &[
    Section::ContactDetails,
    Section::ContactForm,
    Section::QuickChat,
];
const GENERIC: &[Section] = &[
    Section::GenericIntro,
    Section::GenericPoints,
    Section::GenericCallToAction,
];

/// Ordered sections of a tile's detail panel.
pub fn sections_for(id: ItemId) -> &'static [Section] {
    match id {
        ItemId::DevSolutions
        | ItemId::Conseil
        | ItemId::Optimisation
        | ItemId::DataAnalysis
        | ItemId::Automatisation
        | ItemId::Formation
        | ItemId::Maintenance
        | ItemId::Finance
        | ItemId::WhyUs => SERVICE,
        ItemId::Team => TEAM,
        ItemId::Contact => CONTACT,
        ItemId::Hero => GENERIC,
    }
}

impl Section {
    /// Segment under `<namespace>.sections` holding this section's copy.
    pub fn key(self) -> &'static str {
        match self {
            Section::Intro | Section::GenericIntro => "intro",
            Section::Highlights => "highlights",
            Section::Quote => "quote",
            Section::Leadership => "leadership",
            Section::Experts => "experts",
            Section::Portfolio => "portfolio",
            Section::ContactDetails => "details",
            Section::ContactForm => "form",
            Section::QuickChat => "quickChat",
            Section::GenericPoints => "points",
            Section::GenericCallToAction => "cta",
        }
    }

    fn is_generic(self) -> bool {
        matches!(
            self,
            Section::GenericIntro | Section::GenericPoints | Section::GenericCallToAction
        )
    }

    pub fn is_form(self) -> bool {
        self == Section::ContactForm
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub title: String,
    pub text: String,
}

/// Resolved copy of one section in the current locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContent {
    pub section: Section,
    pub heading: String,
    pub body: Option<String>,
    pub tags: Vec<String>,
    pub points: Vec<Point>,
    pub quote: Option<String>,
    pub action: Option<String>,
}

impl SectionContent {
    pub fn resolve(id: ItemId, section: Section, i18n: &I18n) -> Self {
        let namespace = if section.is_generic() {
            "generic".to_string()
        } else {
            id.to_string()
        };
        let base = format!("{namespace}.sections.{}", section.key());
        let optional = |field: &str| i18n.translate(&format!("{base}.{field}")).into_text();
        let points_key = format!("{base}.points");
        let points = (0..i18n.translate(&points_key).len())
            .map(|index| Point {
                title: i18n.t(&format!("{points_key}.{index}.title")),
                text: i18n.t(&format!("{points_key}.{index}.text")),
            })
            .collect();
        Self {
            section,
            heading: i18n.t(&format!("{base}.heading")),
            body: optional("body"),
            tags: i18n.translate(&format!("{base}.tags")).strings(),
            points,
            quote: optional("quote"),
            action: optional("action"),
        }
    }
}

/// Every section of `id`, resolved in order.
pub fn resolve_all(id: ItemId, i18n: &I18n) -> Vec<SectionContent> {
    sections_for(id)
        .iter()
        .map(|section| SectionContent::resolve(id, *section, i18n))
        .collect()
}
