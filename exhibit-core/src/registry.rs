//! Registry owning every carousel on a page, keyed by [`CarouselKey`].
//!
//! Carousels share nothing: each has its own slides, lock and timers, and a
//! call routed to one key never touches another. Iteration, and therefore
//! every batch result, follows `CarouselKey` order.

use std::collections::BTreeMap;

use tracing::info;

use crate::carousel::{Carousel, InputOutcome, PollReport};
use crate::clock::{Clock, MonotonicClock};
use crate::input::InputEvent;
use crate::types::CarouselKey;

#[derive(Debug)]
pub struct CarouselRegistry<C: Clock = MonotonicClock> {
    states: BTreeMap<CarouselKey, Carousel<C>>,
}

impl<C: Clock> Default for CarouselRegistry<C> {
    fn default() -> Self {
        Self {
            states: BTreeMap::new(),
        }
    }
}

impl<C: Clock> CarouselRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a carousel under its own key. A carousel already registered
    /// under that key is torn down and returned.
    pub fn insert(&mut self, carousel: Carousel<C>) -> Option<Carousel<C>> {
        let key = carousel.key().clone();
        let mut previous = self.states.insert(key, carousel);
        if let Some(replaced) = previous.as_mut() {
            replaced.teardown();
        }
        previous
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel<C>> {
        self.states.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel<C>> {
        self.states.get_mut(key)
    }

    pub fn contains(&self, key: &CarouselKey) -> bool {
        self.states.contains_key(key)
    }

    /// Remove and tear down a carousel.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<Carousel<C>> {
        let mut removed = self.states.remove(key)?;
        removed.teardown();
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CarouselKey> {
        self.states.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CarouselKey, &Carousel<C>)> {
        self.states.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&CarouselKey, &mut Carousel<C>)> {
        self.states.iter_mut()
    }

    /// Route an event to one carousel; `None` when the key is not registered.
    pub fn dispatch(&mut self, key: &CarouselKey, event: InputEvent) -> Option<InputOutcome> {
        self.states
            .get_mut(key)
            .map(|carousel| carousel.handle_input(event))
    }

    /// Poll every carousel's timers, keeping only reports with an edge.
    pub fn poll_all(&mut self) -> Vec<(CarouselKey, PollReport)> {
        self.states
            .iter_mut()
            .map(|(key, carousel)| (key.clone(), carousel.poll()))
            .filter(|(_, report)| report.settled || report.autoplay.is_some())
            .collect()
    }

    pub fn relayout_all(&mut self) {
        for carousel in self.states.values_mut() {
            carousel.relayout();
        }
    }

    pub fn set_hidden_all(&mut self, hidden: bool) {
        for carousel in self.states.values_mut() {
            carousel.set_hidden(hidden);
        }
    }

    pub fn teardown_all(&mut self) {
        for carousel in self.states.values_mut() {
            carousel.teardown();
        }
        info!(carousels = self.states.len(), "all carousels torn down");
    }
}

#[cfg(test)]
mod tests {
    use exhibit_config::CarouselSettings;
    use exhibit_model::Slide;

    use super::*;
    use crate::carousel::NavOutcome;
    use crate::clock::ManualClock;

    fn slides(count: u32) -> Vec<Slide> {
        (0..count).map(Slide::new).collect()
    }

    fn registry(clock: &ManualClock) -> CarouselRegistry<ManualClock> {
        let mut gallery_settings = CarouselSettings::gallery();
        gallery_settings.autoplay = None;
        let mut registry = CarouselRegistry::new();
        registry.insert(Carousel::gallery_with_clock(
            slides(5),
            gallery_settings,
            clock.clone(),
        ));
        registry.insert(Carousel::workshop_with_clock(
            slides(3),
            CarouselSettings::workshop(),
            clock.clone(),
        ));
        registry
    }

    #[test]
    fn carousels_do_not_share_locks() {
        let clock = ManualClock::new();
        let mut registry = registry(&clock);

        let gallery = registry.dispatch(&CarouselKey::Gallery, InputEvent::NextButton);
        let workshop = registry.dispatch(&CarouselKey::Workshop, InputEvent::NextButton);
        assert_eq!(
            gallery,
            Some(InputOutcome::Navigation(NavOutcome::Moved { from: 0, to: 1 }))
        );
        assert_eq!(
            workshop,
            Some(InputOutcome::Navigation(NavOutcome::Moved { from: 0, to: 1 }))
        );
    }

    #[test]
    fn unknown_keys_are_not_routed() {
        let clock = ManualClock::new();
        let mut registry = registry(&clock);
        assert_eq!(
            registry.dispatch(&CarouselKey::Custom("press"), InputEvent::NextButton),
            None
        );
    }

    #[test]
    fn poll_all_reports_only_edges() {
        let clock = ManualClock::new();
        let mut registry = registry(&clock);
        registry.dispatch(&CarouselKey::Workshop, InputEvent::NextButton);

        assert!(registry.poll_all().is_empty());
        clock.advance_ms(800);
        let edges = registry.poll_all();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].0, CarouselKey::Workshop);
        assert!(edges[0].1.settled);
    }

    #[test]
    fn replacing_a_key_tears_down_the_old_carousel() {
        let clock = ManualClock::new();
        let mut registry = registry(&clock);
        let replaced = registry
            .insert(Carousel::gallery_with_clock(
                slides(2),
                CarouselSettings::gallery(),
                clock.clone(),
            ))
            .unwrap();
        assert!(replaced.is_torn_down());
        assert_eq!(registry.get(&CarouselKey::Gallery).unwrap().total_count(), 2);
    }

    #[test]
    fn remove_tears_down() {
        let clock = ManualClock::new();
        let mut registry = registry(&clock);
        let removed = registry.remove(&CarouselKey::Workshop).unwrap();
        assert!(removed.is_torn_down());
        assert!(!registry.contains(&CarouselKey::Workshop));
        assert_eq!(registry.len(), 1);
    }
}
