use content::catalog;
use landing_core::tile::{render_mode, PortraitRole, RenderMode};
use leptos::prelude::*;

use super::{CallToAction, DetailPanel, IntroOverlay, Tile, VisionStrip};
use crate::snapshot::PageSnapshot;

/// The 12×6 desktop grid: tiles, the open panel and the intro overlay.
#[component]
pub fn BentoGrid(snapshot: PageSnapshot) -> impl IntoView {
    let state = snapshot.state.clone();
    let stage = state.stage();
    let class = format!("bento bento--{} bento--{}", state.layout, stage.as_str());
    let panel = match snapshot.open_panel() {
        Some(open) => view! {
            <DetailPanel
                open=open
                layout=state.layout
                contact=snapshot.contact.clone()
                endpoint=snapshot.contact_endpoint.clone()
                i18n=snapshot.i18n.clone()
            />
        }
        .into_any(),
        None => view! { "" }.into_any(),
    };
    let closed_grid =
        !stage.is_intro_mode() && state.active_id().is_none() && state.layout.is_landscape();
    let vision = if closed_grid {
        view! {
            <VisionStrip i18n=snapshot.i18n.clone() />
            <CallToAction i18n=snapshot.i18n.clone() />
        }
        .into_any()
    } else {
        view! { "" }.into_any()
    };

    if state.layout.is_portrait() && stage.is_intro_mode() {
        let hero = catalog::item(shared::domain::ItemId::Hero);
        return view! {
            <main class=class data-stage=stage.as_str()>
                <Tile item=hero state=state.clone() i18n=snapshot.i18n.clone() />
                <IntroOverlay stage=stage i18n=snapshot.i18n.clone() />
            </main>
        }
        .into_any();
    }

    if state.layout.is_portrait() {
        let header = catalog::item(shared::domain::ItemId::Hero);
        let cells = catalog::items()
            .filter(|item| {
                matches!(
                    render_mode(item.id, &state),
                    RenderMode::PortraitNav(PortraitRole::NavCell { .. })
                )
            })
            .map(|item| view! { <Tile item=item state=state.clone() i18n=snapshot.i18n.clone() /> })
            .collect::<Vec<_>>();
        return view! {
            <main class=class data-stage=stage.as_str()>
                <Tile item=header state=state.clone() i18n=snapshot.i18n.clone() />
                {panel}
                <nav class="portrait-nav">{cells}</nav>
                <IntroOverlay stage=stage i18n=snapshot.i18n.clone() />
            </main>
        }
        .into_any();
    }

    let tiles = catalog::items()
        .map(|item| view! { <Tile item=item state=state.clone() i18n=snapshot.i18n.clone() /> })
        .collect::<Vec<_>>();
    view! {
        <main class=class data-stage=stage.as_str()>
            {tiles}
            {panel}
            <IntroOverlay stage=stage i18n=snapshot.i18n.clone() />
        </main>
        {vision}
    }
    .into_any()
}
