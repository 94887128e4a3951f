use crate::models::WateringState;
use crate::relay::Relay;
use std::sync::{atomic::AtomicBool, Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
    pub default_duration_secs: u64,
    pub data: Arc<Mutex<WateringState>>,
    /// Set while a watering action is in flight.
    pub watering: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(relay: Relay, default_duration_secs: u64) -> Self {
        Self {
            relay,
            default_duration_secs,
            data: Arc::new(Mutex::new(WateringState::default())),
            watering: Arc::new(AtomicBool::new(false)),
        }
    }
}
