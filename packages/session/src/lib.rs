mod bridge;
mod engine;
mod store;

pub use bridge::{
    host_bridge, BridgeError, EngineRequest, EngineResponse, HostBridge, RequestListener,
    Responder,
};
pub use engine::{
    screenshot_filename, Cooldown, EngineState, Hovered, InspectionEngine, SessionAction,
    SessionEvent, SCREENSHOT_COOLDOWN,
};
pub use store::{SettingsStore, StoreError, KEY_ENABLED, KEY_RULES, KEY_SCAN_RESULTS};
