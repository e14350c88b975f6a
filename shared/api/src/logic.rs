use sortie_proto::{
    Bullet, ConstructionType, GameInfo, MessageKind, ModuleType, PlaceType, Ship, ShipType, Team,
};
use std::sync::Arc;

/// Frame counter value reported once the session is over.
pub const SESSION_OVER: i32 = -1;

/// Sender id reported by [`Logic::get_message`] when no message is pending.
pub const NO_SENDER: i64 = -1;

/// Source of truth for the game session.
///
/// Implementations own state synchronisation with the game server. The debug
/// APIs call these methods from the strategy thread and, for actions, from
/// worker threads, so implementations must be internally synchronised.
/// Failures are reported through the `bool` results and sentinels.
pub trait Logic: Send + Sync {
    fn get_ships(&self) -> Vec<Arc<Ship>>;
    fn get_enemy_ships(&self) -> Vec<Arc<Ship>>;
    fn get_bullets(&self) -> Vec<Arc<Bullet>>;
    fn ship_get_self_info(&self) -> Arc<Ship>;
    fn team_get_self_info(&self) -> Arc<Team>;

    fn get_full_map(&self) -> Vec<Vec<PlaceType>>;
    fn get_place_type(&self, cell_x: i32, cell_y: i32) -> PlaceType;
    fn get_construction_hp(&self, cell_x: i32, cell_y: i32) -> i32;
    fn get_worm_hp(&self, cell_x: i32, cell_y: i32) -> i32;
    fn get_resource_state(&self, cell_x: i32, cell_y: i32) -> i32;
    fn get_home_hp(&self) -> i32;
    fn get_game_info(&self) -> Arc<GameInfo>;
    fn get_player_guids(&self) -> Vec<i64>;
    fn get_money(&self) -> i32;
    fn get_score(&self) -> i32;

    fn send(&self, to_id: i64, message: String, kind: MessageKind) -> bool;
    fn have_message(&self) -> bool;
    /// Pops the oldest message as `(sender, payload)`, or `(NO_SENDER, "")`.
    fn get_message(&self) -> (i64, String);

    /// Blocks until the next frame is ready to be played.
    fn wait_thread(&self) -> bool;
    /// Current frame, or [`SESSION_OVER`].
    fn get_counter(&self) -> i32;

    fn move_(&self, time_in_milliseconds: i64, angle_in_radian: f64) -> bool;
    fn attack(&self, angle_in_radian: f64) -> bool;
    fn recover(&self) -> bool;
    fn produce(&self) -> bool;
    fn rebuild(&self, construction_type: ConstructionType) -> bool;
    fn construct(&self, construction_type: ConstructionType) -> bool;
    fn install_module(&self, player_id: i64, module_type: ModuleType) -> bool;
    fn build_ship(&self, ship_type: ShipType, birth_index: i32) -> bool;

    /// Whether grid point `(x, y)` is visible from `(self_x, self_y)` given
    /// `view_range`.
    fn have_view(&self, x: i32, y: i32, self_x: i32, self_y: i32, view_range: i32) -> bool;
}
