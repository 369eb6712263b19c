use content::I18n;
use landing_core::{contact_form::ContactFormState, paging::Presentation, LayoutClass};
use leptos::prelude::*;

use super::{Icon, SectionView, ICON_CHEVRON_DOWN, ICON_CLOSE};
use crate::{
    links::{item_path, with_layout, with_section, GRID_PATH},
    snapshot::OpenPanel,
};

/// Central content surface of the open tile.
#[component]
pub fn DetailPanel(
    open: OpenPanel,
    layout: LayoutClass,
    contact: ContactFormState,
    endpoint: String,
    i18n: I18n,
) -> impl IntoView {
    let OpenPanel {
        panel,
        sections,
        pager,
    } = open;
    let style = format!(
        "{}background:{};--enter-x:{}px;--enter-y:{}px;",
        panel.placement.css(),
        panel.background(),
        panel.entrance.x,
        panel.entrance.y
    );
    let class = format!(
        "panel panel--{} panel--{}",
        panel.theme.as_str(),
        presentation_name(pager.presentation())
    );
    let subtitle = panel
        .subtitle
        .clone()
        .map(|subtitle| view! { <p class="panel__subtitle">{subtitle}</p> });
    let close = if layout.is_portrait() {
        view! { "" }.into_any()
    } else {
        view! {
            <a class="panel__close" href=with_layout(GRID_PATH, layout) aria-label=i18n.t("common.fermer")>
                <Icon path=ICON_CLOSE size="20" />
            </a>
        }
        .into_any()
    };
    let current = pager.index();
    let articles = sections
        .into_iter()
        .enumerate()
        .map(|(index, content)| {
            view! {
                <SectionView
                    content=content
                    index=index
                    contact=contact.clone()
                    endpoint=endpoint.clone()
                    i18n=i18n.clone()
                />
            }
        })
        .collect::<Vec<_>>();

    let body = match pager.presentation() {
        Presentation::Stacked => view! { <div class="panel__stack">{articles}</div> }.into_any(),
        Presentation::Paged => {
            let path = item_path(panel.item);
            let dots = (0..pager.len())
                .map(|index| {
                    let class = if index == current {
                        "dot-rail__dot dot-rail__dot--active"
                    } else {
                        "dot-rail__dot"
                    };
                    let label = format!("{} {}", i18n.t("common.allerSection"), index + 1);
                    view! {
                        <a class=class href=with_section(&path, layout, index) aria-label=label></a>
                    }
                })
                .collect::<Vec<_>>();
            let hint = if pager.show_scroll_hint() {
                view! {
                    <div class="panel__hint">
                        <span>{i18n.t("common.defiler")}</span>
                        <Icon path=ICON_CHEVRON_DOWN size="18" />
                    </div>
                }
                .into_any()
            } else {
                view! { "" }.into_any()
            };
            view! {
                <div class="pager" data-index=current.to_string() data-count=pager.len().to_string()>
                    <div class="pager__track" style=format!("transform:translateY(-{}%);", current * 100)>
                        {articles}
                    </div>
                    <nav class="dot-rail" aria-label=i18n.t("common.section")>{dots}</nav>
                    {hint}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class=class style=style data-item=panel.item.as_str()>
            <header class="panel__header">
                <div>
                    <h2 class="panel__title">{panel.title.clone()}</h2>
                    {subtitle}
                </div>
                {close}
            </header>
            {body}
        </section>
    }
}

fn presentation_name(presentation: Presentation) -> &'static str {
    match presentation {
        Presentation::Paged => "paged",
        Presentation::Stacked => "stacked",
    }
}
