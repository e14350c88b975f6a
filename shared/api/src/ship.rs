use crate::ai::ShipAi;
use crate::api::ShipApi;
use crate::config::ApiConfig;
use crate::dispatch::ActionHandle;
use crate::error::Result;
use crate::facade::{impl_common_api, ApiCore};
use crate::logging::ApiLogger;
use crate::logic::Logic;
use sortie_proto::{ConstructionType, Ship};
use std::sync::Arc;

/// Ship facade that logs every call before forwarding it to the game logic.
pub struct ShipDebugApi {
    core: ApiCore,
}

impl ShipDebugApi {
    pub fn new(logic: Arc<dyn Logic>, config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            core: ApiCore::new(logic, config)?,
        })
    }

    pub fn with_logger(
        logic: Arc<dyn Logic>,
        logger: ApiLogger,
        worker_threads: usize,
    ) -> Result<Self> {
        Ok(Self {
            core: ApiCore::with_logger(logic, logger, worker_threads)?,
        })
    }

    pub fn logger(&self) -> &ApiLogger {
        self.core.logger()
    }

    /// Hands control to `ai` for one round of play.
    pub fn play(&self, ai: &mut dyn ShipAi) {
        ai.play(self)
    }

    fn log_ship(&self, banner: &str, ship: &Ship) {
        let logger = self.core.logger();
        logger.info(format_args!("{banner}"));
        logger.info(format_args!(
            "type={}, playerID={}, GUID={}, x={}, y={}",
            ship.ship_type, ship.player_id, ship.guid, ship.x, ship.y
        ));
        logger.info(format_args!(
            "state={}, speed={}, view range={}, facing direction={}",
            ship.ship_state, ship.speed, ship.view_range, ship.facing_direction
        ));
    }
}

impl_common_api!(ShipDebugApi);

impl ShipApi for ShipDebugApi {
    fn move_(&self, time_in_milliseconds: i64, angle_in_radian: f64) -> ActionHandle<bool> {
        self.core.action(
            "Move",
            format!(
                "time_in_milliseconds = {time_in_milliseconds}, angle_in_radian = {angle_in_radian}"
            ),
            move |logic| logic.move_(time_in_milliseconds, angle_in_radian),
        )
    }

    fn attack(&self, angle_in_radian: f64) -> ActionHandle<bool> {
        self.core.action(
            "Attack",
            format!("angle_in_radian = {angle_in_radian}"),
            move |logic| logic.attack(angle_in_radian),
        )
    }

    fn recover(&self) -> ActionHandle<bool> {
        self.core.action("Recover", String::new(), |logic| logic.recover())
    }

    fn produce(&self) -> ActionHandle<bool> {
        self.core.action("Produce", String::new(), |logic| logic.produce())
    }

    fn rebuild(&self, construction_type: ConstructionType) -> ActionHandle<bool> {
        self.core.action(
            "ReBuild",
            format!("construction_type = {construction_type}"),
            move |logic| logic.rebuild(construction_type),
        )
    }

    fn construct(&self, construction_type: ConstructionType) -> ActionHandle<bool> {
        self.core.action(
            "Construct",
            format!("construction_type = {construction_type}"),
            move |logic| logic.construct(construction_type),
        )
    }

    fn get_self_info(&self) -> Arc<Ship> {
        self.core.logic().ship_get_self_info()
    }

    fn have_view(&self, grid_x: i32, grid_y: i32) -> bool {
        let self_info = ShipApi::get_self_info(self);
        self.core.logic().have_view(
            grid_x,
            grid_y,
            self_info.x,
            self_info.y,
            self_info.view_range,
        )
    }

    fn print_ship(&self) {
        for ship in self.core.logic().get_ships() {
            self.log_ship("******Ship Info******", &ship);
            self.core.logger().info(format_args!("************************\n"));
        }
    }

    fn print_self_info(&self) {
        let ship = self.core.logic().ship_get_self_info();
        self.log_ship("******Self Info******", &ship);
        self.core.logger().info(format_args!("*********************\n"));
    }
}
