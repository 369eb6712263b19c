//! Static grid and vision catalog. Text here is the French source copy; the
//! translation trees override it per locale.

use shared::domain::{ItemId, ItemKind, TextTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Building,
    Monitor,
    Briefcase,
    Zap,
    BarChart,
    Cpu,
    GraduationCap,
    Wrench,
    DollarCircle,
    CheckCircle,
    Rocket,
    Users,
    ShieldCheck,
    TrendingUp,
    Lightbulb,
    Handshake,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridItem {
    pub id: ItemId,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    pub col_span: u8,
    pub row_span: u8,
    /// CSS colour of the tile surface.
    pub background: &'static str,
    pub hover_background: Option<&'static str>,
    pub text_tone: TextTone,
    pub kind: ItemKind,
    pub icon: Option<Icon>,
    pub image_url: Option<&'static str>,
    pub has_detail: bool,
}

impl GridItem {
    pub fn is_dark_theme(&self) -> bool {
        self.text_tone.is_dark_theme()
    }

    pub fn is_hero(&self) -> bool {
        self.kind == ItemKind::Logo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

const fn content(
    id: ItemId,
    title: &'static str,
    subtitle: Option<&'static str>,
    description: &'static str,
    col_span: u8,
    background: &'static str,
    text_tone: TextTone,
    icon: Icon,
    image_url: &'static str,
) -> GridItem {
    GridItem {
        id,
        title,
        subtitle,
        description,
        col_span,
        row_span: 1,
        background,
        hover_background: None,
        text_tone,
        kind: ItemKind::Content,
        icon: Some(icon),
        image_url: Some(image_url),
        has_detail: true,
    }
}

pub static GRID_ITEMS: [GridItem; 12] = [
    GridItem {
        id: ItemId::Hero,
        title: "Groupe Nolet & Andrews",
        subtitle: Some("Partenaires de votre croissance"),
        description: "Une vision 360° de vos affaires. Technologies, gestion, finances.",
        col_span: 2,
        row_span: 6,
        background: "#0D4715",
        hover_background: None,
        text_tone: TextTone::Light,
        kind: ItemKind::Logo,
        icon: Some(Icon::Building),
        image_url: Some("https://plexview.ca/assets/mission-DVJl6opv.png"),
        has_detail: false,
    },
    content(
        ItemId::DevSolutions,
        "Développement sur mesure",
        Some("Web & mobile apps"),
        "Web & Mobile Apps.",
        4,
        "#EEF2F6",
        TextTone::Dark,
        Icon::Monitor,
        "https://images.unsplash.com/photo-1555099962-4199c345e5dd?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::Conseil,
        "Conseils d'affaires",
        Some("Stratégie"),
        "Consultation senior.",
        6,
        "#D3E4F4",
        TextTone::Dark,
        Icon::Briefcase,
        "https://images.unsplash.com/photo-1552664730-d307ca884978?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::Optimisation,
        "Optimisation web et technique",
        Some("SEO & performance"),
        "SEO & Perf.",
        7,
        "#E1E6EC",
        TextTone::Dark,
        Icon::Zap,
        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::DataAnalysis,
        "Analyse de données",
        Some("BI & analytics"),
        "Clarté décisionnelle.",
        3,
        "#C0D9EE",
        TextTone::Dark,
        Icon::BarChart,
        "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::Automatisation,
        "Automatisation",
        Some("Workflows & IA"),
        "Workflows IA.",
        6,
        "#CBD3DC",
        TextTone::Dark,
        Icon::Cpu,
        "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::Formation,
        "Formation & accompagnement",
        Some("Coaching"),
        "Coaching.",
        4,
        "#A8C9E6",
        TextTone::Dark,
        Icon::GraduationCap,
        "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::Maintenance,
        "Maintenance",
        Some("& support"),
        "Veille & sécurité.",
        5,
        "#AEB8C4",
        TextTone::Dark,
        Icon::Wrench,
        "https://images.unsplash.com/photo-1581092921461-eab62e97a78e?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::Finance,
        "Support financier",
        Some("& subventions"),
        "Crédits R&D, CDAE.",
        5,
        "#8FB6DD",
        TextTone::Dark,
        Icon::DollarCircle,
        "https://images.unsplash.com/photo-1554224155-6726b3ff858f?q=80&w=2000&auto=format&fit=crop",
    ),
    content(
        ItemId::WhyUs,
        "Pourquoi nous choisir ?",
        None,
        "Une approche intégrée unique sur le marché.",
        10,
        "#6B7C8F",
        TextTone::Light,
        Icon::CheckCircle,
        "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?q=80&w=2000&auto=format&fit=crop",
    ),
    GridItem {
        hover_background: Some("#D96824"),
        ..content(
            ItemId::Contact,
            "Nous rejoindre",
            Some("Discussion & devis"),
            "Lancez votre projet.",
            6,
            "#E8772E",
            TextTone::Light,
            Icon::Rocket,
            "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?q=80&w=2000&auto=format&fit=crop",
        )
    },
    content(
        ItemId::Team,
        "Équipe & portfolio",
        Some("Talents & réalisations"),
        "Experts passionnés.",
        4,
        "#8A98A8",
        TextTone::Light,
        Icon::Users,
        "https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2000&auto=format&fit=crop",
    ),
];

pub static VISION_ITEMS: [VisionItem; 6] = [
    VisionItem { id: "vis-1", label: "Intégrité", icon: Icon::ShieldCheck, description: "Transparence totale." },
    VisionItem { id: "vis-2", label: "Croissance", icon: Icon::TrendingUp, description: "Objectifs dépassés." },
    VisionItem { id: "vis-3", label: "Innovation", icon: Icon::Lightbulb, description: "Futur assuré." },
    VisionItem { id: "vis-4", label: "Partenariat", icon: Icon::Handshake, description: "Succès partagé." },
    VisionItem { id: "vis-5", label: "Résultats", icon: Icon::Target, description: "Gains mesurables." },
    VisionItem { id: "vis-6", label: "Expertise", icon: Icon::Building, description: "Savoir-faire unique." },
];

/// Catalog entry for `id`. The catalog holds exactly one entry per `ItemId`.
pub fn item(id: ItemId) -> &'static GridItem {
    let index = ItemId::ALL
        .iter()
        .position(|candidate| *candidate == id)
        .unwrap_or_default();
    &GRID_ITEMS[index]
}

pub fn items() -> impl Iterator<Item = &'static GridItem> {
    GRID_ITEMS.iter()
}
