use content::I18n;
use landing_core::IntroStage;
use leptos::prelude::*;

/// Full-bleed overlay that covers the hero while the grid is swapped in.
#[component]
pub fn IntroOverlay(stage: IntroStage, i18n: I18n) -> impl IntoView {
    if !stage.overlay_visible() {
        return view! { "" }.into_any();
    }
    let caption = if stage.overlay_caption_visible() {
        view! {
            <div class="intro-overlay__caption">
                <p class="intro-overlay__title">{i18n.t("common.cestParti")}</p>
                <p class="intro-overlay__hint">
                    {i18n.t("common.naviguezTuiles")}
                    " "
                    <span>{i18n.t("common.enApprendrePlus")}</span>
                </p>
            </div>
        }
        .into_any()
    } else {
        view! { "" }.into_any()
    };
    view! {
        <div class=format!("intro-overlay intro-overlay--{}", stage.as_str()) data-stage=stage.as_str()>
            {caption}
        </div>
    }
    .into_any()
}
