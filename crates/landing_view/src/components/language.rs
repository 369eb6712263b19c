use content::I18n;
use leptos::prelude::*;

use super::{Icon, ICON_LANGUAGES};
use crate::links::locale_path;

/// Floating locale toggle; links to the other locale.
#[component]
pub fn LanguageSwitcher(i18n: I18n) -> impl IntoView {
    let current = i18n.locale();
    let next = current.toggled();
    let label = match next {
        shared::domain::Locale::En => "Switch to English",
        shared::domain::Locale::Fr => "Passer au français",
    };
    view! {
        <a
            class="language-switcher"
            href=locale_path(next.as_str())
            aria-label=label
            title=i18n.t("common.langue")
            data-locale=current.as_str()
        >
            <Icon path=ICON_LANGUAGES size="18" />
            <span class="language-switcher__code">{current.as_str().to_uppercase()}</span>
        </a>
    }
}
