use super::*;
use crate::mobile::MobileSection;

fn landscape() -> UiState {
    UiState::new(Viewport::new(1440, 900))
}

fn portrait() -> UiState {
    UiState::new(Viewport::new(1024, 1366))
}

fn step(state: &mut UiState) -> Vec<UiAction> {
    let stage = state.stage();
    update(state, Msg::TimerElapsed(stage)).expect("timer for current stage")
}

fn schedule_of(actions: &[UiAction]) -> Option<(Duration, Msg)> {
    actions.iter().find_map(|action| match action {
        UiAction::Schedule { after, msg } => Some((*after, *msg)),
        UiAction::ScrollIntoView(_) => None,
    })
}

#[test]
fn activation_from_idle_plays_the_intro_then_opens_the_tile() {
    let mut state = landscape();
    let actions = update(&mut state, Msg::Activate(ItemId::Conseil)).expect("start");
    assert_eq!(state.scene, Scene::LogoOut { target: Some(ItemId::Conseil) });
    assert_eq!(
        schedule_of(&actions),
        Some((
            Duration::from_millis(1100),
            Msg::TimerElapsed(IntroStage::LogoOut)
        ))
    );
    assert_eq!(state.active_id(), None);

    let actions = step(&mut state);
    assert_eq!(state.stage(), IntroStage::OverlayIn);
    assert_eq!(schedule_of(&actions).map(|(d, _)| d), Some(Duration::from_millis(2400)));
    step(&mut state);
    assert_eq!(state.stage(), IntroStage::Reveal);
    assert_eq!(state.active_id(), None);
    let actions = step(&mut state);
    assert_eq!(state.scene, Scene::Finished { active: Some(ItemId::Conseil) });
    assert!(actions.is_empty());
}

#[test]
fn hero_or_close_from_idle_finishes_with_nothing_open() {
    for msg in [Msg::Activate(ItemId::Hero), Msg::Close] {
        let mut state = landscape();
        update(&mut state, msg).expect("start");
        assert_eq!(state.scene, Scene::LogoOut { target: None });
        step(&mut state);
        step(&mut state);
        step(&mut state);
        assert_eq!(state.scene, Scene::Finished { active: None });
    }
}

#[test]
fn activation_during_the_intro_is_rejected() {
    let mut state = landscape();
    update(&mut state, Msg::Activate(ItemId::Finance)).expect("start");
    let before = state.clone();
    assert_eq!(
        update(&mut state, Msg::Activate(ItemId::Team)),
        Err(TransitionRejected::IntroInProgress {
            stage: IntroStage::LogoOut
        })
    );
    assert_eq!(state, before);
    step(&mut state);
    assert!(update(&mut state, Msg::Close).is_err());
    assert_eq!(state.scene.pending_target(), Some(ItemId::Finance));
}

#[test]
fn stale_timers_are_rejected() {
    let mut state = landscape();
    update(&mut state, Msg::Close).expect("start");
    step(&mut state);
    assert_eq!(
        update(&mut state, Msg::TimerElapsed(IntroStage::LogoOut)),
        Err(TransitionRejected::StaleTimer {
            from: IntroStage::LogoOut,
            current: IntroStage::OverlayIn
        })
    );
    assert_eq!(state.stage(), IntroStage::OverlayIn);

    let mut idle = landscape();
    assert_eq!(
        update(&mut idle, Msg::TimerElapsed(IntroStage::Idle)),
        Err(TransitionRejected::Untimed {
            stage: IntroStage::Idle
        })
    );
}

#[test]
fn at_most_one_tile_is_active_and_hero_never_is() {
    let mut state = UiState::settled(LayoutClass::Landscape, Some(ItemId::Conseil));
    update(&mut state, Msg::Activate(ItemId::Team)).expect("switch");
    assert_eq!(state.active_id(), Some(ItemId::Team));
    assert_eq!(
        update(&mut state, Msg::Activate(ItemId::Hero)),
        Err(TransitionRejected::HeroHasNoDetail)
    );
    assert_eq!(state.active_id(), Some(ItemId::Team));
    update(&mut state, Msg::Close).expect("close");
    assert_eq!(state.scene, Scene::Finished { active: None });
}

#[test]
fn back_to_intro_only_from_finished() {
    let mut state = landscape();
    assert_eq!(
        update(&mut state, Msg::BackToIntro),
        Err(TransitionRejected::NotFinished {
            stage: IntroStage::Idle
        })
    );

    let mut state = UiState::settled(LayoutClass::Landscape, Some(ItemId::Formation));
    let actions = update(&mut state, Msg::BackToIntro).expect("return");
    assert_eq!(state.scene, Scene::ReturnOverlayIn { active: Some(ItemId::Formation) });
    assert_eq!(schedule_of(&actions).map(|(d, _)| d), Some(Duration::from_millis(600)));
    let actions = step(&mut state);
    assert_eq!(state.scene, Scene::ReturnReveal);
    assert_eq!(state.active_id(), None);
    assert_eq!(schedule_of(&actions).map(|(d, _)| d), Some(Duration::from_millis(800)));
    step(&mut state);
    assert_eq!(state.scene, Scene::Idle);
}

#[test]
fn portrait_intro_uses_short_timings_and_selects_instead_of_opening() {
    let mut state = portrait();
    let actions = update(&mut state, Msg::Activate(ItemId::Maintenance)).expect("start");
    assert_eq!(schedule_of(&actions).map(|(d, _)| d), Some(Duration::from_millis(600)));
    let actions = step(&mut state);
    assert_eq!(schedule_of(&actions).map(|(d, _)| d), Some(Duration::from_millis(1900)));
    step(&mut state);
    step(&mut state);
    assert_eq!(state.scene, Scene::Finished { active: None });
    assert_eq!(state.portrait_selection, ItemId::Maintenance);

    update(&mut state, Msg::Activate(ItemId::Team)).expect("select");
    assert_eq!(state.portrait_selection, ItemId::Team);
    assert_eq!(state.active_id(), None);
}

#[test]
fn portrait_hero_click_starts_the_intro() {
    let mut state = portrait();
    let actions = update(&mut state, Msg::Click(ItemId::Hero)).expect("click hero");
    assert_eq!(state.scene, Scene::LogoOut { target: None });
    assert_eq!(schedule_of(&actions).map(|(d, _)| d), Some(Duration::from_millis(600)));
    step(&mut state);
    step(&mut state);
    step(&mut state);
    assert_eq!(state.scene, Scene::Finished { active: None });
    assert_eq!(
        update(&mut state, Msg::Click(ItemId::Hero)),
        Ok(Vec::new()),
        "hero header is inert once the nav is shown"
    );
}

#[test]
fn portrait_selection_defaults_to_dev_solutions() {
    assert_eq!(portrait().portrait_selection, ItemId::DevSolutions);
}

#[test]
fn hover_is_kept_only_on_the_closed_landscape_grid() {
    let mut state = landscape();
    update(&mut state, Msg::Hover(Some(ItemId::Conseil))).expect("hover");
    assert_eq!(state.hovered, None, "intro mode clears hover");

    let mut state = UiState::settled(LayoutClass::Landscape, None);
    update(&mut state, Msg::Hover(Some(ItemId::Conseil))).expect("hover");
    assert_eq!(state.hovered, Some(ItemId::Conseil));
    update(&mut state, Msg::Activate(ItemId::Conseil)).expect("open");
    assert_eq!(state.hovered, None);

    let mut state = UiState::settled(LayoutClass::Landscape, None);
    update(&mut state, Msg::Hover(Some(ItemId::Team))).expect("hover");
    update(&mut state, Msg::Resize(Viewport::new(900, 1200))).expect("resize");
    assert_eq!(state.layout, LayoutClass::Portrait);
    assert_eq!(state.hovered, None);
}

#[test]
fn resizing_into_portrait_carries_the_open_tile_over() {
    let mut state = UiState::settled(LayoutClass::Landscape, Some(ItemId::Finance));
    update(&mut state, Msg::Resize(Viewport::new(1000, 1400))).expect("resize");
    assert_eq!(state.portrait_selection, ItemId::Finance);
}

#[test]
fn click_on_an_inactive_tile_defers_activation() {
    let mut state = UiState::settled(LayoutClass::Landscape, Some(ItemId::Conseil));
    let actions = update(&mut state, Msg::Click(ItemId::Formation)).expect("click");
    assert_eq!(
        actions,
        vec![UiAction::Schedule {
            after: Duration::from_millis(250),
            msg: Msg::Activate(ItemId::Formation)
        }]
    );
    assert_eq!(state.active_id(), Some(ItemId::Conseil));

    update(&mut state, Msg::Click(ItemId::Conseil)).expect("click active");
    assert_eq!(state.active_id(), None);
}

#[test]
fn mobile_messages_pass_through_to_the_two_pane_state() {
    let mut state = UiState::new(Viewport::new(390, 844));
    update(
        &mut state,
        Msg::Mobile(MobileMsg::Wheel {
            delta_y: 10.0,
            list_at_top: true,
        }),
    )
    .expect("wheel");
    assert_eq!(state.mobile.section, MobileSection::List);
    let actions = update(&mut state, Msg::Mobile(MobileMsg::Toggle(ItemId::Formation))).expect("toggle");
    assert_eq!(
        schedule_of(&actions),
        Some((
            Duration::from_millis(100),
            Msg::Mobile(MobileMsg::RevealExpanded(ItemId::Formation))
        ))
    );
    let actions =
        update(&mut state, Msg::Mobile(MobileMsg::RevealExpanded(ItemId::Formation))).expect("reveal");
    assert_eq!(actions, vec![UiAction::ScrollIntoView(ItemId::Formation)]);
}
