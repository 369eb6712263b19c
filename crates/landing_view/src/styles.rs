//! Inline stylesheet for the landing page.

/// Complete CSS: desktop bento grid, portrait flow, phone two-pane layout.
pub const LANDING_CSS: &str = r#"
:root {
    --green-deep: #0D4715;
    --orange: #D96824;
    --ink: #1f2933;
    --paper: #f7f5f0;
    --gap: 12px;
    --radius: 18px;
    --ease: cubic-bezier(0.22, 1, 0.36, 1);
}
* { box-sizing: border-box; }
html, body { margin: 0; height: 100%; }
body {
    font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    background: var(--paper);
    color: var(--ink);
}
a { color: inherit; text-decoration: none; }

.bento {
    position: relative;
    display: grid;
    grid-template-columns: repeat(12, minmax(0, 1fr));
    grid-template-rows: repeat(6, minmax(0, 1fr));
    gap: var(--gap);
    height: 100vh;
    padding: var(--gap);
}
.bento--portrait {
    grid-template-rows: auto repeat(5, minmax(120px, auto));
    height: auto;
    min-height: 100vh;
}

.tile {
    position: relative;
    display: flex;
    overflow: hidden;
    border-radius: var(--radius);
    transition: transform 0.5s var(--ease), background 0.3s ease, opacity 0.4s ease;
}
.tile--on-dark { color: #ffffff; }
.tile--on-light { color: var(--ink); }
.tile:hover { background: var(--tile-hover, inherit); }
.tile__content {
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    gap: 6px;
    width: 100%;
    padding: 20px;
    transition: transform 0.5s var(--ease);
}
.tile__icon { opacity: 0.85; margin-bottom: auto; }
.tile__title { margin: 0; font-size: 1.15rem; font-weight: 700; }
.tile__subtitle { margin: 0; font-size: 0.85rem; opacity: 0.8; }
.tile__description { margin: 0; font-size: 0.85rem; opacity: 0.7; }
.tile--sidebar .tile__content { align-items: center; justify-content: center; padding: 8px; }
.tile--sidebar .tile__title { font-size: 0.7rem; text-align: center; }
.tile--active { outline: 3px solid var(--orange); }
.tile--palette .tile__content { justify-content: center; align-items: center; text-align: center; }
.tile--portrait-header { grid-column: 1 / -1; grid-row: 1; min-height: 180px; }
.tile--nav { min-height: 0; }
.tile--nav .tile__content { align-items: center; justify-content: center; padding: 10px; }
.tile--nav .tile__title { font-size: 0.8rem; text-align: center; }
.tile--selected { outline: 3px solid var(--orange); }

.hero__logo { max-width: 180px; max-height: 120px; object-fit: contain; }
.hero__title { margin: 0; font-size: clamp(1.8rem, 3vw, 3rem); }
.hero__subtitle { margin: 0; font-size: 1.1rem; opacity: 0.85; }
.hero__description { margin: 0; max-width: 46ch; opacity: 0.75; }
.hero__back { display: inline-flex; gap: 6px; align-items: center; margin-top: 12px; font-size: 0.85rem; }

.intro-overlay {
    position: absolute;
    inset: 0;
    z-index: 60;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--green-deep);
    color: #ffffff;
    animation: overlay-in 0.6s var(--ease) both;
}
.intro-overlay--reveal, .intro-overlay--return-reveal { animation: overlay-out 0.8s var(--ease) both; }
.intro-overlay__caption { text-align: center; }
.intro-overlay__title { margin: 0; font-size: clamp(2rem, 5vw, 4rem); font-weight: 800; }
.intro-overlay__hint { margin: 8px 0 0; opacity: 0.8; }
.intro-overlay__hint span { color: var(--orange); }
@keyframes overlay-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes overlay-out { from { opacity: 1; } to { opacity: 0; } }

.panel {
    position: relative;
    z-index: 45;
    display: flex;
    flex-direction: column;
    overflow: hidden;
    border-radius: var(--radius);
    animation: panel-in 0.6s var(--ease) both;
}
.panel--dark { color: #ffffff; }
.panel--light { color: var(--ink); }
.panel--stacked { overflow: visible; }
.panel__header { display: flex; justify-content: space-between; align-items: flex-start; padding: 24px 28px 8px; }
.panel__title { margin: 0; font-size: 1.8rem; }
.panel__subtitle { margin: 4px 0 0; opacity: 0.8; }
.panel__close { padding: 6px; border-radius: 999px; }
.panel__stack { display: flex; flex-direction: column; gap: 32px; padding: 16px 28px 32px; }
.panel__hint { position: absolute; bottom: 16px; left: 50%; transform: translateX(-50%); display: flex; gap: 6px; align-items: center; opacity: 0.7; font-size: 0.8rem; }
@keyframes panel-in {
    from { opacity: 0; transform: translate(var(--enter-x, 0), var(--enter-y, 0)); }
    to { opacity: 1; transform: translate(0, 0); }
}

.pager { position: relative; flex: 1; overflow: hidden; }
.pager__track { height: 100%; transition: transform 0.7s var(--ease); }
.pager__track > .section { height: 100%; overflow-y: auto; padding: 16px 64px 48px 28px; }
.dot-rail { position: absolute; right: 18px; top: 50%; transform: translateY(-50%); display: flex; flex-direction: column; gap: 10px; }
.dot-rail__dot { width: 10px; height: 10px; border-radius: 999px; background: currentColor; opacity: 0.35; }
.dot-rail__dot--active { opacity: 1; transform: scale(1.3); }

.section__heading { margin: 0 0 12px; font-size: 1.4rem; }
.section__body { margin: 0 0 12px; line-height: 1.6; max-width: 70ch; }
.section__tags { display: flex; flex-wrap: wrap; gap: 8px; padding: 0; margin: 0 0 12px; list-style: none; }
.section__tags li { padding: 4px 12px; border-radius: 999px; border: 1px solid currentColor; font-size: 0.8rem; }
.section__points { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 14px; padding: 0; list-style: none; }
.section__points li { display: flex; flex-direction: column; gap: 4px; }
.section__quote { margin: 12px 0; padding-left: 16px; border-left: 3px solid var(--orange); font-style: italic; }
.section__action { font-weight: 600; color: var(--orange); }

.contact-form { display: flex; flex-direction: column; gap: 14px; max-width: 640px; }
.contact-form__grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
.contact-form__field { display: flex; flex-direction: column; gap: 4px; font-size: 0.85rem; }
.contact-form__field:last-child { grid-column: 1 / -1; }
.contact-form__field input, .contact-form__field textarea {
    padding: 10px 12px;
    border-radius: 10px;
    border: 1px solid rgba(0, 0, 0, 0.15);
    font: inherit;
    color: var(--ink);
    background: #ffffff;
}
.contact-form__submit { align-self: flex-start; padding: 10px 22px; border: 0; border-radius: 999px; background: var(--orange); color: #ffffff; font: inherit; font-weight: 600; cursor: pointer; }
.contact-form__status--ok { color: #2f855a; }
.contact-form__status--error { color: #c53030; }

.vision { padding: 8px var(--gap) 0; }
.vision__title { margin: 0 0 8px; font-size: 0.9rem; text-transform: uppercase; letter-spacing: 0.08em; opacity: 0.7; }
.vision__list { display: grid; grid-template-columns: repeat(6, 1fr); gap: var(--gap); padding: 0; margin: 0; list-style: none; }
.vision__item { display: flex; flex-direction: column; gap: 4px; font-size: 0.8rem; }
.vision__label { font-weight: 700; }
.vision__description { opacity: 0.7; }
.cta { margin: var(--gap); padding: 32px; border-radius: var(--radius); background: var(--green-deep); color: #ffffff; text-align: center; }
.cta__heading { margin: 0 0 8px; }
.cta__description { margin: 0 0 18px; opacity: 0.8; }
.cta__button { display: inline-block; padding: 10px 24px; border-radius: 999px; background: var(--orange); font-weight: 600; }

.portrait-nav {
    grid-column: 1 / -1;
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: var(--gap);
}

.language-switcher {
    position: fixed;
    right: 24px;
    bottom: 24px;
    z-index: 100;
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 10px 18px;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.95);
    border: 1px solid rgba(148, 163, 184, 0.6);
    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.15);
    font-size: 0.85rem;
    font-weight: 600;
}

.mobile { height: 100vh; overflow: hidden; }
.mobile__hero, .mobile__list { height: 100vh; transition: transform 0.6s var(--ease); }
.mobile--list .mobile__hero, .mobile--list .mobile__list { transform: translateY(-100vh); }
.mobile__hero { display: flex; flex-direction: column; justify-content: center; gap: 12px; padding: 32px 24px; color: #ffffff; }
.mobile__discover { display: inline-flex; flex-direction: column; align-items: center; margin-top: auto; }
.mobile__list { overflow-y: auto; padding: 24px 16px 120px; }
.mobile__heading { margin: 0 0 16px; }
.accordion { display: flex; flex-direction: column; gap: 10px; padding: 0; margin: 0; list-style: none; }
.accordion__item { border-radius: 14px; background: var(--item-bg); overflow: hidden; }
.accordion__toggle { display: flex; align-items: center; gap: 12px; padding: 16px; }
.accordion__title { flex: 1; font-weight: 600; }
.accordion__item--open .accordion__chevron { transform: rotate(180deg); }
.accordion__body { display: flex; flex-direction: column; gap: 24px; padding: 0 16px 20px; }
.mobile__footer { padding: 24px 0; text-align: center; font-size: 0.75rem; opacity: 0; transition: opacity 0.3s ease; }
.mobile__footer--visible { opacity: 0.7; }
.contact-dock { position: fixed; left: 16px; right: 16px; bottom: 16px; border-radius: 18px; color: #ffffff; transition: all 0.4s var(--ease); }
.contact-dock--collapsed { left: auto; width: 60px; height: 60px; border-radius: 999px; }
.contact-dock--collapsed .contact-dock__label { display: none; }
.contact-dock--open { top: 16px; overflow-y: auto; }
.contact-dock__toggle { display: flex; align-items: center; justify-content: center; gap: 10px; min-height: 60px; padding: 0 18px; font-weight: 600; }
.contact-dock__body { padding: 0 18px 24px; }

@media (max-width: 767px) {
    .contact-form__grid { grid-template-columns: 1fr; }
}
"#;
