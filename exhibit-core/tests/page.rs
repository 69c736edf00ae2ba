mod support;

use std::time::Duration;

use exhibit_config::ConfigGuardRailError;
use exhibit_core::{
    CarouselError, CarouselKey, CarouselMount, CarouselSettings, Category, ExhibitConfig,
    ExhibitPage, IgnoreReason, InputEvent, InputOutcome, Key, ManualClock, NavOutcome, OpenDetail,
    Slide, SlideFilter, SlideId, SlideRole, StaticSlides,
};
use support::surface::RecordingSurface;

fn artworks(tags: &[&str]) -> Vec<Slide> {
    tags.iter()
        .zip(0u32..)
        .map(|(tag, id)| Slide::new(id).with_category(Category::new(*tag).unwrap()))
        .collect()
}

fn weeks(count: u32) -> Vec<Slide> {
    (100..100 + count).map(Slide::new).collect()
}

struct Harness {
    page: ExhibitPage<ManualClock>,
    clock: ManualClock,
    gallery: RecordingSurface,
    workshop: RecordingSurface,
}

fn mount(config: &ExhibitConfig) -> Harness {
    let clock = ManualClock::new();
    let gallery = RecordingSurface::new();
    let workshop = RecordingSurface::new();
    let page = ExhibitPage::mount_with_clock(
        config,
        vec![
            CarouselMount::gallery(StaticSlides::new(artworks(&["A", "B", "A", "C", "B"])))
                .with_surface(gallery.clone()),
            CarouselMount::workshop(StaticSlides::new(weeks(4))).with_surface(workshop.clone()),
        ],
        clock.clone(),
    )
    .expect("default config mounts");
    Harness {
        page,
        clock,
        gallery,
        workshop,
    }
}

fn quiet_config() -> ExhibitConfig {
    let mut config = ExhibitConfig::default();
    config.gallery.autoplay = None;
    config
}

#[test]
fn mount_renders_the_initial_state() {
    let harness = mount(&quiet_config());

    harness.gallery.snapshot(|recording| {
        assert_eq!(recording.styles.len(), 5);
        assert_eq!(recording.highlighted, Some(0));
        assert_eq!(recording.indicators.len(), 5);
        assert_eq!(recording.indicators[0].label, "Go to slide 1");
        assert_eq!(recording.role_of(0), Some(SlideRole::Active));
        assert_eq!(recording.role_of(4), Some(SlideRole::Prev));
        assert_eq!(recording.role_of(1), Some(SlideRole::Next));
    });
    harness.workshop.snapshot(|recording| {
        assert_eq!(recording.indicators[2].label, "Go to Week 3");
        let controls = recording.controls.unwrap();
        assert!(!controls.can_previous && controls.can_next);
    });
}

#[test]
fn missing_or_empty_regions_stay_static() {
    let clock = ManualClock::new();
    let page = ExhibitPage::mount_with_clock(
        &quiet_config(),
        vec![
            CarouselMount::gallery(StaticSlides::new(Vec::new())),
            CarouselMount::workshop(StaticSlides::missing()),
            CarouselMount::new(
                CarouselKey::Custom("press"),
                |key: &CarouselKey| -> exhibit_core::Result<Vec<Slide>> {
                    Err(CarouselError::Provider {
                        key: key.clone(),
                        message: "feed unavailable".into(),
                    })
                },
            ),
        ],
        clock,
    )
    .unwrap();

    assert!(!page.is_mounted(&CarouselKey::Gallery));
    assert!(!page.is_mounted(&CarouselKey::Workshop));
    assert!(!page.is_mounted(&CarouselKey::Custom("press")));
}

#[test]
fn guard_rail_failures_reject_the_page() {
    let mut config = quiet_config();
    config.workshop.transition = Duration::ZERO;

    let err = ExhibitPage::mount_with_clock(&config, Vec::new(), ManualClock::new()).unwrap_err();
    assert!(matches!(
        err,
        CarouselError::Config(ConfigGuardRailError::ZeroTransition { .. })
    ));
}

#[test]
fn arrows_follow_key_scope_and_focus() {
    let mut harness = mount(&quiet_config());

    let moved = harness.page.key_down(Key::ArrowRight, None);
    assert_eq!(
        moved,
        vec![(
            CarouselKey::Gallery,
            InputOutcome::Navigation(NavOutcome::Moved { from: 0, to: 1 })
        )]
    );

    harness.clock.advance_ms(800);
    let moved = harness
        .page
        .key_down(Key::ArrowRight, Some(&CarouselKey::Workshop));
    let keys: Vec<_> = moved.iter().map(|(key, _)| key.clone()).collect();
    assert_eq!(keys, vec![CarouselKey::Gallery, CarouselKey::Workshop]);
    assert_eq!(
        harness.page.carousel(&CarouselKey::Workshop).unwrap().active_index(),
        Some(1)
    );
    assert_eq!(
        harness.page.carousel(&CarouselKey::Gallery).unwrap().active_index(),
        Some(2)
    );

    harness.clock.advance_ms(800);
    harness
        .page
        .dispatch(&CarouselKey::Workshop, InputEvent::PointerEnter);
    assert!(harness.page.focus().is_active(&CarouselKey::Workshop));
    let moved = harness.page.key_down(Key::ArrowLeft, None);
    assert!(moved.iter().any(|(key, outcome)| {
        key == &CarouselKey::Workshop
            && outcome == &InputOutcome::Navigation(NavOutcome::Moved { from: 1, to: 0 })
    }));
}

#[test]
fn filtering_shrinks_the_indicator_row() {
    let mut harness = mount(&quiet_config());

    let outcome = harness.page.dispatch(
        &CarouselKey::Gallery,
        InputEvent::FilterSelected(SlideFilter::parse("B")),
    );
    assert_eq!(outcome, Some(InputOutcome::Filtered { visible: 2 }));

    let gallery = harness.page.carousel(&CarouselKey::Gallery).unwrap();
    assert_eq!(gallery.visible_count(), 2);
    assert_eq!(gallery.active_index(), Some(0));

    harness.gallery.snapshot(|recording| {
        assert_eq!(recording.indicators.len(), 2);
        assert_eq!(recording.highlighted, Some(0));
        assert!(recording.is_shown(1));
        assert!(recording.is_shown(4));
        assert!(!recording.is_shown(0));
        assert_eq!(recording.role_of(2), None);
    });
}

#[test]
fn active_slide_click_opens_detail_and_escape_closes_it() {
    let mut harness = mount(&quiet_config());

    let outcome = harness
        .page
        .dispatch(&CarouselKey::Gallery, InputEvent::SlideClick(0));
    assert_eq!(
        outcome,
        Some(InputOutcome::Navigation(NavOutcome::DetailOpened(SlideId(0))))
    );
    assert_eq!(
        harness.page.open_detail(),
        Some(&OpenDetail {
            carousel: CarouselKey::Gallery,
            slide: SlideId(0),
        })
    );

    let closed = harness.page.key_down(Key::Escape, None);
    assert_eq!(closed, vec![(CarouselKey::Gallery, InputOutcome::CloseDetail)]);
    assert_eq!(harness.page.open_detail(), None);
    assert!(harness.page.key_down(Key::Escape, None).is_empty());
}

#[test]
fn resize_bursts_collapse_into_one_relayout() {
    let mut harness = mount(&quiet_config());
    let writes_before = harness.gallery.snapshot(|recording| recording.style_writes);

    for _ in 0..3 {
        harness
            .page
            .dispatch(&CarouselKey::Gallery, InputEvent::Resize);
        harness.clock.advance_ms(100);
    }
    // Last resize at t=200; quiet window ends at 450.
    harness.clock.set_ms(449);
    assert!(!harness.page.poll().relaid_out);
    harness.clock.set_ms(450);
    assert!(harness.page.poll().relaid_out);
    assert!(!harness.page.poll().relaid_out);

    let writes_after = harness.gallery.snapshot(|recording| recording.style_writes);
    assert_eq!(writes_after - writes_before, 5);
    assert_eq!(
        harness.page.carousel(&CarouselKey::Gallery).unwrap().active_index(),
        Some(0)
    );
}

#[test]
fn autoplay_waits_while_the_page_is_hidden() {
    let mut harness = mount(&ExhibitConfig::default());

    harness.page.set_hidden(true);
    harness.clock.advance_ms(12_000);
    assert!(harness.page.poll().carousels.is_empty());

    harness.page.set_hidden(false);
    harness.clock.advance_ms(5_000);
    let tick = harness.page.poll();
    assert_eq!(tick.carousels.len(), 1);
    assert_eq!(tick.carousels[0].0, CarouselKey::Gallery);
    assert_eq!(
        tick.carousels[0].1.autoplay,
        Some(NavOutcome::Moved { from: 0, to: 1 })
    );
}

#[test]
fn workshop_buttons_stop_at_the_last_week() {
    let mut harness = mount(&quiet_config());
    for _ in 0..3 {
        harness
            .page
            .dispatch(&CarouselKey::Workshop, InputEvent::NextButton);
        harness.clock.advance_ms(800);
    }
    let outcome = harness
        .page
        .dispatch(&CarouselKey::Workshop, InputEvent::NextButton);
    assert_eq!(
        outcome,
        Some(InputOutcome::Navigation(NavOutcome::Ignored(
            IgnoreReason::AtBoundary
        )))
    );
    harness.workshop.snapshot(|recording| {
        assert_eq!(recording.highlighted, Some(3));
        assert!(!recording.controls.unwrap().can_next);
    });
}

#[test]
fn unmounted_page_ignores_everything() {
    let mut harness = mount(&ExhibitConfig::default());
    harness.page.unmount();

    assert_eq!(
        harness
            .page
            .dispatch(&CarouselKey::Gallery, InputEvent::NextButton),
        None
    );
    assert!(harness.page.key_down(Key::ArrowRight, None).is_empty());
    harness.clock.advance_ms(60_000);
    assert!(harness.page.poll().carousels.is_empty());
    assert!(
        harness
            .page
            .carousel(&CarouselKey::Gallery)
            .unwrap()
            .is_torn_down()
    );
}

#[test]
fn visibility_is_dispatched_per_carousel() {
    let clock = ManualClock::new();
    let press = CarouselKey::Custom("press");
    let mut page = ExhibitPage::mount_with_clock(
        &ExhibitConfig::default(),
        vec![
            CarouselMount::gallery(StaticSlides::new(weeks(3))),
            CarouselMount::new(press.clone(), StaticSlides::new(weeks(3)))
                .with_settings(CarouselSettings::gallery()),
        ],
        clock.clone(),
    )
    .unwrap();

    assert_eq!(
        page.dispatch(&press, InputEvent::VisibilityChanged { hidden: true }),
        Some(InputOutcome::Noop)
    );
    clock.advance_ms(5_000);
    let tick = page.poll();
    let fired: Vec<_> = tick.carousels.iter().map(|(key, _)| key.clone()).collect();
    assert_eq!(fired, vec![CarouselKey::Gallery]);

    page.dispatch(&press, InputEvent::VisibilityChanged { hidden: false });
    clock.advance_ms(5_000);
    let tick = page.poll();
    let fired: Vec<_> = tick
        .carousels
        .iter()
        .filter(|(_, report)| report.autoplay.is_some())
        .map(|(key, _)| key.clone())
        .collect();
    assert_eq!(fired, vec![CarouselKey::Gallery, press]);
}

#[test]
fn indicator_click_routes_through_the_page() {
    let mut harness = mount(&quiet_config());

    let outcome = harness
        .page
        .dispatch(&CarouselKey::Gallery, InputEvent::IndicatorClick(3));
    assert_eq!(
        outcome,
        Some(InputOutcome::Navigation(NavOutcome::Moved { from: 0, to: 3 }))
    );
    assert_eq!(
        harness
            .page
            .dispatch(&CarouselKey::Gallery, InputEvent::IndicatorClick(1)),
        Some(InputOutcome::Navigation(NavOutcome::Ignored(
            IgnoreReason::Locked
        )))
    );
    assert!(harness.page.focus().is_active(&CarouselKey::Gallery));
    harness.gallery.snapshot(|recording| {
        assert_eq!(recording.highlighted, Some(3));
        assert!(recording.indicators[3].active);
        assert_eq!(recording.role_of(3), Some(SlideRole::Active));
    });
}

#[test]
fn removed_carousel_loses_focus_and_detail() {
    let mut harness = mount(&quiet_config());
    harness
        .page
        .dispatch(&CarouselKey::Workshop, InputEvent::SlideClick(0));
    harness
        .page
        .dispatch(&CarouselKey::Workshop, InputEvent::PointerEnter);
    assert!(harness.page.open_detail().is_some());

    let removed = harness.page.remove(&CarouselKey::Workshop).unwrap();
    assert!(removed.is_torn_down());
    assert_eq!(harness.page.focus().active_key(), None);
    assert_eq!(harness.page.open_detail(), None);
    assert!(!harness.page.is_mounted(&CarouselKey::Workshop));

    let moved = harness.page.key_down(Key::ArrowRight, None);
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].0, CarouselKey::Gallery);
    assert!(harness.page.remove(&CarouselKey::Workshop).is_none());
}

#[test]
fn per_mount_settings_get_the_guard_rails() {
    let mut broken = CarouselSettings::workshop();
    broken.transition = Duration::ZERO;

    let page = ExhibitPage::mount_with_clock(
        &quiet_config(),
        vec![
            CarouselMount::gallery(StaticSlides::new(weeks(3))),
            CarouselMount::workshop(StaticSlides::new(weeks(3))).with_settings(broken),
        ],
        ManualClock::new(),
    )
    .unwrap();

    assert!(page.is_mounted(&CarouselKey::Gallery));
    assert!(!page.is_mounted(&CarouselKey::Workshop));
}
