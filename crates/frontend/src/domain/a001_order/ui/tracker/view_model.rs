use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use contracts::domain::a001_order::Order;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAudioElement;

use super::model;

const POLL_INTERVAL_MS: u32 = 3000;

/// The sound plays on a net increase of the preparing count between
/// snapshots, and only after the operator enabled it
fn should_ring(previous_count: Option<usize>, count: usize, enabled: bool) -> bool {
    enabled && previous_count.map(|prev| count > prev).unwrap_or(false)
}

/// ViewModel for the live order board
#[derive(Clone, Copy)]
pub struct TrackerViewModel {
    pub orders: RwSignal<Vec<Order>>,
    /// Wall clock driving the elapsed timers, ticked once a second
    pub now: RwSignal<DateTime<Utc>>,
    pub sound_enabled: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Single audio element, unlocked by the enable click and reused for
    /// every notification. iOS Safari unlocks autoplay per element, so a
    /// fresh element would stay muted.
    audio: StoredValue<Option<HtmlAudioElement>, LocalStorage>,
}

impl TrackerViewModel {
    pub fn new() -> Self {
        Self {
            orders: RwSignal::new(Vec::new()),
            now: RwSignal::new(Utc::now()),
            sound_enabled: RwSignal::new(false),
            error: RwSignal::new(None),
            audio: StoredValue::new_local(None),
        }
    }

    /// Start the polling and clock loops; both stop when the page unmounts
    pub fn start(&self) {
        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = alive.clone();
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }

        let vm = *self;
        let poll_alive = alive.clone();
        spawn_local(async move {
            let mut previous_count: Option<usize> = None;
            loop {
                if !poll_alive.load(Ordering::Relaxed) {
                    break;
                }
                match model::fetch_active().await {
                    Ok(orders) => {
                        let count = orders.len();
                        if should_ring(previous_count, count, vm.sound_enabled.get_untracked()) {
                            vm.play_notification();
                        }
                        previous_count = Some(count);
                        vm.orders.set(orders);
                        vm.error.set(None);
                    }
                    Err(e) => vm.error.set(Some(format!("Ошибка загрузки заказов: {}", e))),
                }
                gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
            }
        });

        let tick_alive = alive;
        let now = self.now;
        spawn_local(async move {
            loop {
                if !tick_alive.load(Ordering::Relaxed) {
                    break;
                }
                now.set(Utc::now());
                gloo_timers::future::TimeoutFuture::new(1000).await;
            }
        });
    }

    /// Browsers refuse to play audio before a user gesture; this runs from
    /// the button click, plays the element muted once and keeps it for
    /// later notifications
    pub fn enable_sound(&self) {
        if self.audio.with_value(|a| a.is_none()) {
            if let Ok(audio) = HtmlAudioElement::new_with_src("/notification.mp3") {
                audio.set_volume(0.0);
                let _ = audio.play();
                self.audio.set_value(Some(audio));
            }
        }
        self.sound_enabled.set(true);
    }

    fn play_notification(&self) {
        self.audio.with_value(|audio| {
            if let Some(audio) = audio {
                audio.set_volume(1.0);
                audio.set_current_time(0.0);
                let _ = audio.play();
            }
        });
    }

    pub fn toggle_item_ready(&self, order_id: &str, item_id: &str, ready: bool) {
        let vm = *self;
        let order_id = order_id.to_string();
        let item_id = item_id.to_string();
        spawn_local(async move {
            match model::set_item_ready(&order_id, &item_id, ready).await {
                Ok(updated) => vm.replace_order(updated),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }

    pub fn complete_command(&self, order_id: &str) {
        let vm = *self;
        let order_id = order_id.to_string();
        spawn_local(async move {
            match model::complete_order(&order_id).await {
                Ok(_) => {
                    // Completed orders leave the board immediately
                    vm.orders.update(|orders| orders.retain(|o| o.id != order_id));
                }
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }

    fn replace_order(&self, updated: Order) {
        self.orders.update(|orders| {
            if let Some(existing) = orders.iter_mut().find(|o| o.id == updated.id) {
                *existing = updated;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_fires_only_on_net_increase_when_enabled() {
        // First snapshot never rings, there is nothing to compare against
        assert!(!should_ring(None, 3, true));
        assert!(should_ring(Some(2), 3, true));
        assert!(!should_ring(Some(3), 3, true));
        assert!(!should_ring(Some(3), 2, true));
        assert!(!should_ring(Some(2), 3, false));
    }
}
