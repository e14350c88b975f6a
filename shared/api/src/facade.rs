//! Scaffolding shared by the ship and team debug APIs: the provider handle,
//! the logger, the play timer and the action dispatcher.

use crate::config::ApiConfig;
use crate::dispatch::{ActionHandle, Dispatcher};
use crate::error::Result;
use crate::logging::ApiLogger;
use crate::logic::{Logic, NO_SENDER, SESSION_OVER};
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use sortie_proto::MessageKind;
use std::sync::Arc;
use std::time::Instant;

/// Same layout as C `ctime`, without the trailing newline.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Start point for the "called at" offsets in log lines.
///
/// Starts at construction and is reset by [`Timer::start`].
pub struct Timer {
    start: Mutex<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Mutex::new(Instant::now()),
        }
    }

    pub fn start(&self) -> DateTime<Local> {
        *self.start.lock() = Instant::now();
        Local::now()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start.lock().elapsed().as_millis()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct ApiCore {
    logic: Arc<dyn Logic>,
    logger: Arc<ApiLogger>,
    timer: Arc<Timer>,
    dispatcher: Dispatcher,
}

impl ApiCore {
    pub fn new(logic: Arc<dyn Logic>, config: &ApiConfig) -> Result<Self> {
        let logger = ApiLogger::new(config.player_id, &config.log)?;
        Self::with_logger(logic, logger, config.worker_threads)
    }

    pub fn with_logger(
        logic: Arc<dyn Logic>,
        logger: ApiLogger,
        worker_threads: usize,
    ) -> Result<Self> {
        let name = format!("api-{}", logger.player_id());
        Ok(Self {
            logic,
            logger: Arc::new(logger),
            timer: Arc::new(Timer::new()),
            dispatcher: Dispatcher::new(worker_threads, &name)?,
        })
    }

    pub fn logic(&self) -> &dyn Logic {
        self.logic.as_ref()
    }

    pub fn logger(&self) -> &ApiLogger {
        &self.logger
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.timer.elapsed_ms()
    }

    pub fn start_timer(&self) {
        let now = self.timer.start();
        self.logger.info(format_args!("=== AI.play() ==="));
        self.logger
            .info(format_args!("StartTimer: {}", now.format(CTIME_FORMAT)));
    }

    pub fn end_timer(&self) {
        self.logger
            .info(format_args!("Time elapsed: {}ms", self.elapsed_ms()));
    }

    pub fn frame_count(&self) -> i32 {
        self.logic.get_counter()
    }

    /// Logs the call, runs `f` against the provider on a worker and logs a
    /// warning there if it reports failure.
    pub fn action<F>(&self, name: &'static str, args: String, f: F) -> ActionHandle<bool>
    where
        F: FnOnce(&dyn Logic) -> bool + Send + 'static,
    {
        if args.is_empty() {
            self.logger
                .info(format_args!("{name}: called at {}ms", self.elapsed_ms()));
        } else {
            self.logger
                .info(format_args!("{name}: {args}, called at {}ms", self.elapsed_ms()));
        }
        let logic = Arc::clone(&self.logic);
        let logger = Arc::clone(&self.logger);
        let timer = Arc::clone(&self.timer);
        self.dispatcher.dispatch(move || {
            let result = f(logic.as_ref());
            if !result {
                logger.warn(format_args!("{name}: failed at {}ms", timer.elapsed_ms()));
            }
            result
        })
    }

    pub fn send_message(
        &self,
        to_id: i64,
        message: String,
        kind: MessageKind,
    ) -> ActionHandle<bool> {
        let name = match kind {
            MessageKind::Text => "SendTextMessage",
            MessageKind::Binary => "SendBinaryMessage",
        };
        self.action(
            name,
            format!("to_id = {to_id}, message = {message}"),
            move |logic| logic.send(to_id, message, kind),
        )
    }

    pub fn have_message(&self) -> bool {
        self.logger
            .info(format_args!("HaveMessage: called at {}ms", self.elapsed_ms()));
        let result = self.logic.have_message();
        if !result {
            self.logger
                .warn(format_args!("HaveMessage: failed at {}ms", self.elapsed_ms()));
        }
        result
    }

    pub fn get_message(&self) -> (i64, String) {
        self.logger
            .info(format_args!("GetMessage: called at {}ms", self.elapsed_ms()));
        let result = self.logic.get_message();
        if result.0 == NO_SENDER {
            self.logger
                .warn(format_args!("GetMessage: failed at {}ms", self.elapsed_ms()));
        }
        result
    }

    pub fn wait(&self) -> bool {
        self.logger
            .info(format_args!("Wait: called at {}ms", self.elapsed_ms()));
        if self.logic.get_counter() == SESSION_OVER {
            false
        } else {
            self.logic.wait_thread()
        }
    }

    pub fn print(&self, text: &str) {
        self.logger.info(format_args!("{text}"));
    }
}

/// Implements [`CommonApi`](crate::api::CommonApi) for a facade with a
/// `core: ApiCore` field.
macro_rules! impl_common_api {
    ($facade:ty) => {
        impl $crate::api::CommonApi for $facade {
            fn start_timer(&self) {
                self.core.start_timer()
            }

            fn end_timer(&self) {
                self.core.end_timer()
            }

            fn get_frame_count(&self) -> i32 {
                self.core.frame_count()
            }

            fn send_text_message(
                &self,
                to_id: i64,
                message: String,
            ) -> $crate::dispatch::ActionHandle<bool> {
                self.core
                    .send_message(to_id, message, sortie_proto::MessageKind::Text)
            }

            fn send_binary_message(
                &self,
                to_id: i64,
                message: String,
            ) -> $crate::dispatch::ActionHandle<bool> {
                self.core
                    .send_message(to_id, message, sortie_proto::MessageKind::Binary)
            }

            fn have_message(&self) -> bool {
                self.core.have_message()
            }

            fn get_message(&self) -> (i64, String) {
                self.core.get_message()
            }

            fn wait(&self) -> bool {
                self.core.wait()
            }

            fn get_ships(&self) -> Vec<std::sync::Arc<sortie_proto::Ship>> {
                self.core.logic().get_ships()
            }

            fn get_enemy_ships(&self) -> Vec<std::sync::Arc<sortie_proto::Ship>> {
                self.core.logic().get_enemy_ships()
            }

            fn get_bullets(&self) -> Vec<std::sync::Arc<sortie_proto::Bullet>> {
                self.core.logic().get_bullets()
            }

            fn get_full_map(&self) -> Vec<Vec<sortie_proto::PlaceType>> {
                self.core.logic().get_full_map()
            }

            fn get_place_type(&self, cell_x: i32, cell_y: i32) -> sortie_proto::PlaceType {
                self.core.logic().get_place_type(cell_x, cell_y)
            }

            fn get_construction_hp(&self, cell_x: i32, cell_y: i32) -> i32 {
                self.core.logic().get_construction_hp(cell_x, cell_y)
            }

            fn get_worm_hp(&self, cell_x: i32, cell_y: i32) -> i32 {
                self.core.logic().get_worm_hp(cell_x, cell_y)
            }

            fn get_resource_state(&self, cell_x: i32, cell_y: i32) -> i32 {
                self.core.logic().get_resource_state(cell_x, cell_y)
            }

            fn get_home_hp(&self) -> i32 {
                self.core.logic().get_home_hp()
            }

            fn get_game_info(&self) -> std::sync::Arc<sortie_proto::GameInfo> {
                self.core.logic().get_game_info()
            }

            fn get_player_guids(&self) -> Vec<i64> {
                self.core.logic().get_player_guids()
            }

            fn get_money(&self) -> i32 {
                self.core.logic().get_money()
            }

            fn get_score(&self) -> i32 {
                self.core.logic().get_score()
            }

            fn print(&self, text: &str) {
                self.core.print(text)
            }
        }
    };
}

pub(crate) use impl_common_api;
