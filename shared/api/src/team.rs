use crate::ai::TeamAi;
use crate::api::TeamApi;
use crate::config::ApiConfig;
use crate::dispatch::ActionHandle;
use crate::error::Result;
use crate::facade::{impl_common_api, ApiCore};
use crate::logging::ApiLogger;
use crate::logic::Logic;
use sortie_proto::{ModuleType, ShipType, Team};
use std::sync::Arc;

/// Home base facade that logs every call before forwarding it to the game
/// logic.
pub struct TeamDebugApi {
    core: ApiCore,
}

impl TeamDebugApi {
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

    pub fn play(&self, ai: &mut dyn TeamAi) {
        ai.play(self)
    }
}

impl_common_api!(TeamDebugApi);

impl TeamApi for TeamDebugApi {
    fn get_self_info(&self) -> Arc<Team> {
        self.core.logic().team_get_self_info()
    }

    fn install_module(&self, player_id: i64, module_type: ModuleType) -> ActionHandle<bool> {
        self.core.action(
            "InstallModule",
            format!("player_id = {player_id}, module_type = {module_type}"),
            move |logic| logic.install_module(player_id, module_type),
        )
    }

    fn build_ship(&self, ship_type: ShipType, birth_index: i32) -> ActionHandle<bool> {
        self.core.action(
            "BuildShip",
            format!("ship_type = {ship_type}, birth_index = {birth_index}"),
            move |logic| logic.build_ship(ship_type, birth_index),
        )
    }

    fn print_self_info(&self) {
        let team = self.core.logic().team_get_self_info();
        let logger = self.core.logger();
        logger.info(format_args!("******Self Info******"));
        logger.info(format_args!(
            "playerID={}, teamID={}, score={}, money={}",
            team.player_id, team.team_id, team.score, team.money
        ));
        logger.info(format_args!("*********************\n"));
    }
}
