pub mod config;
pub mod controller;
pub mod direction;
pub mod edge;
pub mod error;
pub mod pointer;
pub mod scheduler;
pub mod scroll;
pub mod surface;

pub use config::{AppConfig, AutoScrollConfig, GeneralConfig, UiConfig};
pub use controller::{
    AutoScroll, AutoScrollOptions, ControllerState, DirectionCallback, DEFAULT_STEP,
};
pub use direction::Direction;
pub use edge::{EdgeGeometry, EdgeThresholds};
pub use error::{Error, Result};
pub use pointer::{
    ListenerId, PointerChannels, PointerEvent, PointerEventSource, PointerListener, TrackingMode,
};
pub use scheduler::{FrameHandle, FrameQueue, FrameScheduler};
pub use scroll::{continuous_scroll, scrollable, ContinuousScrollOptions, ScrollLoop};
pub use surface::{MemorySurface, ScrollMetrics, ScrollableSurface};
