#![doc = include_str!("../README.md")]
mod ai;
mod api;
pub mod config;
pub mod dispatch;
mod error;
mod facade;
pub mod logging;
pub mod logic;
mod ship;
mod team;

pub use ai::{ShipAi, TeamAi};
pub use api::{CommonApi, ShipApi, TeamApi};
pub use config::{ApiConfig, LogConfig};
pub use dispatch::{ActionHandle, Dispatcher};
pub use error::{Error, Result};
pub use facade::Timer;
pub use logging::ApiLogger;
pub use logic::Logic;
pub use ship::ShipDebugApi;
pub use team::TeamDebugApi;

pub mod prelude {
    #[doc(inline)]
    pub use crate::{
        ActionHandle, ApiConfig, CommonApi, Logic, ShipAi, ShipApi, ShipDebugApi, TeamAi,
        TeamApi, TeamDebugApi,
    };
    #[doc(inline)]
    pub use sortie_proto::*;
}
