use crate::dispatch::ActionHandle;
use sortie_proto::{Bullet, ConstructionType, GameInfo, ModuleType, PlaceType, Ship, ShipType, Team};
use std::f64::consts::PI;
use std::sync::Arc;

/// Operations available to both ship and team strategies.
pub trait CommonApi {
    /// Resets the play timer and logs the wall-clock start time.
    fn start_timer(&self);
    /// Logs the time elapsed since [`CommonApi::start_timer`].
    fn end_timer(&self);

    /// Returns the current frame number, or `-1` once the session is over.
    fn get_frame_count(&self) -> i32;

    /// Sends a text message to player `to_id`.
    fn send_text_message(&self, to_id: i64, message: String) -> ActionHandle<bool>;
    /// Sends a binary message to player `to_id`.
    fn send_binary_message(&self, to_id: i64, message: String) -> ActionHandle<bool>;
    /// Returns whether a message is waiting.
    fn have_message(&self) -> bool;
    /// Pops the next message as `(sender, payload)`.
    ///
    /// The sender is `-1` when no message was waiting.
    fn get_message(&self) -> (i64, String);

    /// Blocks until the next frame.
    ///
    /// Returns `false` straight away if the session is over.
    fn wait(&self) -> bool;

    fn get_ships(&self) -> Vec<Arc<Ship>>;
    fn get_enemy_ships(&self) -> Vec<Arc<Ship>>;
    fn get_bullets(&self) -> Vec<Arc<Bullet>>;
    fn get_full_map(&self) -> Vec<Vec<PlaceType>>;
    fn get_place_type(&self, cell_x: i32, cell_y: i32) -> PlaceType;
    fn get_construction_hp(&self, cell_x: i32, cell_y: i32) -> i32;
    fn get_worm_hp(&self, cell_x: i32, cell_y: i32) -> i32;
    fn get_resource_state(&self, cell_x: i32, cell_y: i32) -> i32;
    fn get_home_hp(&self) -> i32;
    fn get_game_info(&self) -> Arc<GameInfo>;
    /// Returns the ids of every player in the session.
    fn get_player_guids(&self) -> Vec<i64>;
    fn get_money(&self) -> i32;
    fn get_score(&self) -> i32;

    /// Writes `text` to the log at info level.
    fn print(&self, text: &str);
}

/// Operations available to a ship strategy.
pub trait ShipApi: CommonApi {
    /// Moves for `time_in_milliseconds` towards `angle_in_radian`.
    fn move_(&self, time_in_milliseconds: i64, angle_in_radian: f64) -> ActionHandle<bool>;

    fn move_down(&self, time_in_milliseconds: i64) -> ActionHandle<bool> {
        self.move_(time_in_milliseconds, 0.0)
    }

    fn move_right(&self, time_in_milliseconds: i64) -> ActionHandle<bool> {
        self.move_(time_in_milliseconds, PI * 0.5)
    }

    fn move_up(&self, time_in_milliseconds: i64) -> ActionHandle<bool> {
        self.move_(time_in_milliseconds, PI)
    }

    fn move_left(&self, time_in_milliseconds: i64) -> ActionHandle<bool> {
        self.move_(time_in_milliseconds, PI * 1.5)
    }

    fn attack(&self, angle_in_radian: f64) -> ActionHandle<bool>;
    fn recover(&self) -> ActionHandle<bool>;
    fn produce(&self) -> ActionHandle<bool>;
    fn rebuild(&self, construction_type: ConstructionType) -> ActionHandle<bool>;
    fn construct(&self, construction_type: ConstructionType) -> ActionHandle<bool>;

    fn get_self_info(&self) -> Arc<Ship>;

    /// Returns whether grid point `(grid_x, grid_y)` is within this ship's
    /// view range from its current position.
    fn have_view(&self, grid_x: i32, grid_y: i32) -> bool;

    /// Logs every friendly ship.
    fn print_ship(&self);
    /// Logs this ship's snapshot.
    fn print_self_info(&self);
}

/// Operations available to a team strategy.
pub trait TeamApi: CommonApi {
    fn get_self_info(&self) -> Arc<Team>;
    fn install_module(&self, player_id: i64, module_type: ModuleType) -> ActionHandle<bool>;
    /// Builds a ship at the home base's `birth_index`-th spawn point.
    fn build_ship(&self, ship_type: ShipType, birth_index: i32) -> ActionHandle<bool>;
    /// Logs the team snapshot.
    fn print_self_info(&self);
}
