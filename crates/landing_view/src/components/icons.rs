//! Inline stroke icons (Lucide, 24px grid).

use content::Icon as Glyph;
use leptos::prelude::*;

/// Renders an inline SVG icon from path data.
#[component]
pub fn Icon(
    #[prop(into)] path: &'static str,
    #[prop(default = "20")] size: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Building => ICON_BUILDING,
        Glyph::Monitor => ICON_MONITOR,
        Glyph::Briefcase => ICON_BRIEFCASE,
        Glyph::Zap => ICON_ZAP,
        Glyph::BarChart => ICON_BAR_CHART,
        Glyph::Cpu => ICON_CPU,
        Glyph::GraduationCap => ICON_GRADUATION_CAP,
        Glyph::Wrench => ICON_WRENCH,
        Glyph::DollarCircle => ICON_DOLLAR_CIRCLE,
        Glyph::CheckCircle => ICON_CHECK_CIRCLE,
        Glyph::Rocket => ICON_ROCKET,
        Glyph::Users => ICON_USERS,
        Glyph::ShieldCheck => ICON_SHIELD_CHECK,
        Glyph::TrendingUp => ICON_TRENDING_UP,
        Glyph::Lightbulb => ICON_LIGHTBULB,
        Glyph::Handshake => ICON_HANDSHAKE,
        Glyph::Target => ICON_TARGET,
    }
}

pub const ICON_BUILDING: &str = "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2 M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2 M10 6h4 M10 10h4 M10 14h4 M10 18h4";
pub const ICON_MONITOR: &str = "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z M8 21h8 M12 17v4";
pub const ICON_BRIEFCASE: &str = "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16 M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z";
pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";
pub const ICON_BAR_CHART: &str = "M12 20V10 M18 20V4 M6 20v-4";
pub const ICON_CPU: &str = "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M9 9h6v6H9z M15 2v2 M15 20v2 M2 15h2 M2 9h2 M20 15h2 M20 9h2 M9 2v2 M9 20v2";
pub const ICON_GRADUATION_CAP: &str = "M22 10 12 5 2 10l10 5 10-5z M6 12v5c3 3 9 3 12 0v-5";
pub const ICON_WRENCH: &str = "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z";
pub const ICON_DOLLAR_CIRCLE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8 M12 18V6";
pub const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14 M22 4 12 14.01l-3-3";
pub const ICON_ROCKET: &str = "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z M12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z";
pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2 M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z M22 21v-2a4 4 0 0 0-3-3.87 M16 3.13a4 4 0 0 1 0 7.75";
pub const ICON_SHIELD_CHECK: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z M9 12l2 2 4-4";
pub const ICON_TRENDING_UP: &str = "M22 7 13.5 15.5 8.5 10.5 2 17 M16 7h6v6";
pub const ICON_LIGHTBULB: &str = "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5 M9 18h6 M10 22h4";
pub const ICON_HANDSHAKE: &str = "M11 17l2 2a1 1 0 1 0 3-3 M14 14l2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4 M21 3l1 11h-2 M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3 M3 4h8";
pub const ICON_TARGET: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z M12 6a6 6 0 1 0 0 12 6 6 0 1 0 0-12z M12 10a2 2 0 1 0 0 4 2 2 0 1 0 0-4z";

pub const ICON_LANGUAGES: &str = "m5 8 6 6 M4 14l6-6 2-3 M2 5h12 M7 2h1 m14 20-5-10-5 10 M14 18h6";
pub const ICON_CLOSE: &str = "M18 6 6 18 M6 6l12 12";
pub const ICON_CHEVRON_DOWN: &str = "m6 9 6 6 6-6";
pub const ICON_ARROW_LEFT: &str = "m12 19-7-7 7-7 M19 12H5";
