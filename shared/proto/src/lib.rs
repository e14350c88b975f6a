use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of grid units along one side of a map cell.
pub const CELL_SIZE: i32 = 1000;

pub fn grid_to_cell(grid: i32) -> i32 {
    grid / CELL_SIZE
}

/// Returns the grid coordinate of the centre of `cell`.
pub fn cell_to_grid(cell: i32) -> i32 {
    cell * CELL_SIZE + CELL_SIZE / 2
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum ShipType {
    #[default]
    NullShipType,
    CivilianShip,
    MilitaryShip,
    FlagShip,
}

impl ShipType {
    pub fn name(&self) -> &'static str {
        match self {
            ShipType::NullShipType => "null",
            ShipType::CivilianShip => "civilian",
            ShipType::MilitaryShip => "military",
            ShipType::FlagShip => "flag",
        }
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum ShipState {
    #[default]
    NullStatus,
    Idle,
    Producing,
    Constructing,
    Recovering,
    Attacking,
    Installing,
    Swinging,
    Stunned,
    Moving,
}

impl ShipState {
    pub fn name(&self) -> &'static str {
        match self {
            ShipState::NullStatus => "null",
            ShipState::Idle => "idle",
            ShipState::Producing => "producing",
            ShipState::Constructing => "constructing",
            ShipState::Recovering => "recovering",
            ShipState::Attacking => "attacking",
            ShipState::Installing => "installing",
            ShipState::Swinging => "swinging",
            ShipState::Stunned => "stunned",
            ShipState::Moving => "moving",
        }
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum PlaceType {
    #[default]
    NullPlaceType,
    Home,
    Space,
    Ruin,
    Shadow,
    Asteroid,
    Resource,
    Construction,
    Wormhole,
}

impl PlaceType {
    pub fn name(&self) -> &'static str {
        match self {
            PlaceType::NullPlaceType => "null",
            PlaceType::Home => "home",
            PlaceType::Space => "space",
            PlaceType::Ruin => "ruin",
            PlaceType::Shadow => "shadow",
            PlaceType::Asteroid => "asteroid",
            PlaceType::Resource => "resource",
            PlaceType::Construction => "construction",
            PlaceType::Wormhole => "wormhole",
        }
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum ConstructionType {
    #[default]
    NullConstructionType,
    Factory,
    Community,
    Fort,
}

impl ConstructionType {
    pub fn name(&self) -> &'static str {
        match self {
            ConstructionType::NullConstructionType => "null",
            ConstructionType::Factory => "factory",
            ConstructionType::Community => "community",
            ConstructionType::Fort => "fort",
        }
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum BulletType {
    #[default]
    NullBulletType,
    Laser,
    Plasma,
    Shell,
    Missile,
    Arc,
}

impl BulletType {
    pub fn name(&self) -> &'static str {
        match self {
            BulletType::NullBulletType => "null",
            BulletType::Laser => "laser",
            BulletType::Plasma => "plasma",
            BulletType::Shell => "shell",
            BulletType::Missile => "missile",
            BulletType::Arc => "arc",
        }
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum ModuleType {
    #[default]
    NullModuleType,
    ModuleProducer1,
    ModuleProducer2,
    ModuleProducer3,
    ModuleConstructor1,
    ModuleConstructor2,
    ModuleConstructor3,
    ModuleArmor1,
    ModuleArmor2,
    ModuleArmor3,
    ModuleShield1,
    ModuleShield2,
    ModuleShield3,
    ModuleLaserGun,
    ModulePlasmaGun,
    ModuleShellGun,
    ModuleMissileGun,
    ModuleArcGun,
}

impl ModuleType {
    pub fn name(&self) -> &'static str {
        match self {
            ModuleType::NullModuleType => "null",
            ModuleType::ModuleProducer1 => "producer1",
            ModuleType::ModuleProducer2 => "producer2",
            ModuleType::ModuleProducer3 => "producer3",
            ModuleType::ModuleConstructor1 => "constructor1",
            ModuleType::ModuleConstructor2 => "constructor2",
            ModuleType::ModuleConstructor3 => "constructor3",
            ModuleType::ModuleArmor1 => "armor1",
            ModuleType::ModuleArmor2 => "armor2",
            ModuleType::ModuleArmor3 => "armor3",
            ModuleType::ModuleShield1 => "shield1",
            ModuleType::ModuleShield2 => "shield2",
            ModuleType::ModuleShield3 => "shield3",
            ModuleType::ModuleLaserGun => "laser gun",
            ModuleType::ModulePlasmaGun => "plasma gun",
            ModuleType::ModuleShellGun => "shell gun",
            ModuleType::ModuleMissileGun => "missile gun",
            ModuleType::ModuleArcGun => "arc gun",
        }
    }
}

macro_rules! display_by_name {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

display_by_name!(
    ShipType,
    ShipState,
    PlaceType,
    ConstructionType,
    BulletType,
    ModuleType
);

/// Payload encoding of a message between players.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum MessageKind {
    Text,
    Binary,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
    pub hp: i32,
    pub armor: i32,
    pub shield: i32,
    pub team_id: i64,
    pub player_id: i64,
    pub guid: i64,
    pub ship_state: ShipState,
    pub ship_type: ShipType,
    pub view_range: i32,
    pub producer_type: ModuleType,
    pub constructor_type: ModuleType,
    pub armor_type: ModuleType,
    pub shield_type: ModuleType,
    pub weapon_type: ModuleType,
    /// Radians.
    pub facing_direction: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Bullet {
    pub bullet_type: BulletType,
    pub x: i32,
    pub y: i32,
    pub facing_direction: f64,
    pub guid: i64,
    pub team_id: i64,
    pub damage: i32,
    pub attack_range: f64,
    pub bomb_range: f64,
    pub explode_range: f64,
    pub speed: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Team {
    pub player_id: i64,
    pub team_id: i64,
    pub score: i32,
    pub money: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameInfo {
    pub game_time: i32,
    pub red_score: i32,
    pub blue_score: i32,
    pub red_money: i32,
    pub blue_money: i32,
    pub red_home_hp: i32,
    pub blue_home_hp: i32,
}
