//! Root document component.

use leptos::prelude::*;

use super::{BentoGrid, LanguageSwitcher, MobilePage};
use crate::{snapshot::PageSnapshot, styles::LANDING_CSS};

#[component]
pub fn LandingDocument(snapshot: PageSnapshot) -> impl IntoView {
    let lang = snapshot.i18n.locale().as_str();
    let title = format!(
        "{} | {}",
        snapshot.i18n.t("hero.title"),
        snapshot.i18n.t("hero.subtitle")
    );
    let description = snapshot.i18n.t("hero.description");
    let layout = snapshot.state.layout;
    let body = if layout.is_mobile() {
        view! { <MobilePage snapshot=snapshot.clone() /> }.into_any()
    } else {
        view! { <BentoGrid snapshot=snapshot.clone() /> }.into_any()
    };
    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body class=format!("layout-{layout}") data-layout=layout.as_str()>
                {body}
                <LanguageSwitcher i18n=snapshot.i18n.clone() />
            </body>
        </html>
    }
}
