#![allow(dead_code)]

use crossbeam::channel::{self, Receiver, Sender};
use log::{Level, LevelFilter};
use parking_lot::Mutex;
use sortie_api::logging::{BufferWriter, Sink};
use sortie_api::{ApiLogger, Logic, ShipDebugApi, TeamDebugApi};
use sortie_proto::{
    grid_to_cell, Bullet, ConstructionType, GameInfo, MessageKind, ModuleType, PlaceType, Ship,
    ShipState, ShipType, Team,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;

pub const PLAYER_ID: i64 = 1;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Send(i64, String, MessageKind),
    Move(i64, f64),
    Attack(f64),
    Recover,
    Produce,
    Rebuild(ConstructionType),
    Construct(ConstructionType),
    InstallModule(i64, ModuleType),
    BuildShip(ShipType, i32),
    HaveView(i32, i32, i32, i32, i32),
}

/// Scriptable game logic that records every action it receives.
pub struct FakeLogic {
    pub counter: AtomicI32,
    pub succeed: AtomicBool,
    pub wait_result: AtomicBool,
    pub waits: AtomicUsize,
    pub panic_on_action: AtomicBool,
    /// While set, actions stall until a token arrives on `release`.
    pub hold_actions: AtomicBool,
    pub release: Sender<()>,
    held: Receiver<()>,
    pub messages: Mutex<VecDeque<(i64, String)>>,
    pub calls: Mutex<Vec<Call>>,
    pub self_ship: Mutex<Ship>,
    pub team: Team,
    pub ships: Vec<Ship>,
}

impl FakeLogic {
    pub fn new() -> Self {
        let (release, held) = channel::unbounded();
        Self {
            counter: AtomicI32::new(0),
            succeed: AtomicBool::new(true),
            wait_result: AtomicBool::new(true),
            waits: AtomicUsize::new(0),
            panic_on_action: AtomicBool::new(false),
            hold_actions: AtomicBool::new(false),
            release,
            held,
            messages: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            self_ship: Mutex::new(Ship {
                x: 1500,
                y: 2500,
                speed: 3000,
                view_range: 8000,
                player_id: PLAYER_ID,
                guid: 100,
                team_id: 0,
                ship_type: ShipType::CivilianShip,
                ship_state: ShipState::Idle,
                ..Default::default()
            }),
            team: Team {
                player_id: 0,
                team_id: 0,
                score: 120,
                money: 4000,
            },
            ships: vec![
                Ship {
                    guid: 100,
                    player_id: 1,
                    ship_type: ShipType::CivilianShip,
                    ..Default::default()
                },
                Ship {
                    guid: 101,
                    player_id: 2,
                    ship_type: ShipType::MilitaryShip,
                    ship_state: ShipState::Moving,
                    ..Default::default()
                },
            ],
        }
    }

    pub fn failing() -> Self {
        let logic = Self::new();
        logic.succeed.store(false, Ordering::SeqCst);
        logic
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> bool {
        if self.panic_on_action.load(Ordering::SeqCst) {
            panic!("fake logic failure");
        }
        if self.hold_actions.load(Ordering::SeqCst) {
            let _ = self.held.recv();
        }
        self.calls.lock().push(call);
        self.succeed.load(Ordering::SeqCst)
    }
}

impl Logic for FakeLogic {
    fn get_ships(&self) -> Vec<Arc<Ship>> {
        self.ships.iter().cloned().map(Arc::new).collect()
    }

    fn get_enemy_ships(&self) -> Vec<Arc<Ship>> {
        vec![]
    }

    fn get_bullets(&self) -> Vec<Arc<Bullet>> {
        vec![Arc::new(Bullet {
            guid: 9,
            ..Default::default()
        })]
    }

    fn ship_get_self_info(&self) -> Arc<Ship> {
        Arc::new(self.self_ship.lock().clone())
    }

    fn team_get_self_info(&self) -> Arc<Team> {
        Arc::new(self.team.clone())
    }

    fn get_full_map(&self) -> Vec<Vec<PlaceType>> {
        vec![vec![PlaceType::Space; 4]; 4]
    }

    fn get_place_type(&self, cell_x: i32, cell_y: i32) -> PlaceType {
        let ship = self.self_ship.lock();
        if (cell_x, cell_y) == (grid_to_cell(ship.x), grid_to_cell(ship.y)) {
            PlaceType::Home
        } else {
            PlaceType::Space
        }
    }

    fn get_construction_hp(&self, cell_x: i32, _cell_y: i32) -> i32 {
        cell_x * 10
    }

    fn get_worm_hp(&self, _cell_x: i32, cell_y: i32) -> i32 {
        cell_y * 10
    }

    fn get_resource_state(&self, cell_x: i32, cell_y: i32) -> i32 {
        cell_x + cell_y
    }

    fn get_home_hp(&self) -> i32 {
        24000
    }

    fn get_game_info(&self) -> Arc<GameInfo> {
        Arc::new(GameInfo {
            game_time: 5000,
            ..Default::default()
        })
    }

    fn get_player_guids(&self) -> Vec<i64> {
        vec![100, 101]
    }

    fn get_money(&self) -> i32 {
        self.team.money
    }

    fn get_score(&self) -> i32 {
        self.team.score
    }

    fn send(&self, to_id: i64, message: String, kind: MessageKind) -> bool {
        self.record(Call::Send(to_id, message, kind))
    }

    fn have_message(&self) -> bool {
        !self.messages.lock().is_empty()
    }

    fn get_message(&self) -> (i64, String) {
        self.messages
            .lock()
            .pop_front()
            .unwrap_or((-1, String::new()))
    }

    fn wait_thread(&self) -> bool {
        self.waits.fetch_add(1, Ordering::SeqCst);
        self.wait_result.load(Ordering::SeqCst)
    }

    fn get_counter(&self) -> i32 {
        self.counter.load(Ordering::SeqCst)
    }

    fn move_(&self, time_in_milliseconds: i64, angle_in_radian: f64) -> bool {
        self.record(Call::Move(time_in_milliseconds, angle_in_radian))
    }

    fn attack(&self, angle_in_radian: f64) -> bool {
        self.record(Call::Attack(angle_in_radian))
    }

    fn recover(&self) -> bool {
        self.record(Call::Recover)
    }

    fn produce(&self) -> bool {
        self.record(Call::Produce)
    }

    fn rebuild(&self, construction_type: ConstructionType) -> bool {
        self.record(Call::Rebuild(construction_type))
    }

    fn construct(&self, construction_type: ConstructionType) -> bool {
        self.record(Call::Construct(construction_type))
    }

    fn install_module(&self, player_id: i64, module_type: ModuleType) -> bool {
        self.record(Call::InstallModule(player_id, module_type))
    }

    fn build_ship(&self, ship_type: ShipType, birth_index: i32) -> bool {
        self.record(Call::BuildShip(ship_type, birth_index))
    }

    fn have_view(&self, x: i32, y: i32, self_x: i32, self_y: i32, view_range: i32) -> bool {
        self.calls
            .lock()
            .push(Call::HaveView(x, y, self_x, self_y, view_range));
        let dx = (x - self_x) as i64;
        let dy = (y - self_y) as i64;
        dx * dx + dy * dy <= (view_range as i64) * (view_range as i64)
    }
}

/// Captured output of the file and console sinks.
pub struct Output {
    pub file: BufferWriter,
    pub console: BufferWriter,
}

impl Output {
    pub fn file_lines(&self) -> Vec<String> {
        self.file.lines()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.file
            .lines()
            .into_iter()
            .filter(|l| l.contains("] [warning] "))
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.file
            .lines()
            .into_iter()
            .filter(|l| l.contains("] [info] "))
            .collect()
    }
}

pub fn logger(console_level: LevelFilter) -> (ApiLogger, Output) {
    let output = Output {
        file: BufferWriter::new(),
        console: BufferWriter::new(),
    };
    let logger = ApiLogger::with_sinks(
        PLAYER_ID,
        vec![
            Sink::new(Box::new(output.file.clone()), LevelFilter::Trace).flush_on(Level::Warn),
            Sink::new(Box::new(output.console.clone()), console_level),
        ],
    );
    (logger, output)
}

pub fn ship_api(logic: &Arc<FakeLogic>) -> (ShipDebugApi, Output) {
    let (logger, output) = logger(LevelFilter::Info);
    let logic: Arc<dyn Logic> = logic.clone();
    (ShipDebugApi::with_logger(logic, logger, 2).unwrap(), output)
}

pub fn team_api(logic: &Arc<FakeLogic>) -> (TeamDebugApi, Output) {
    let (logger, output) = logger(LevelFilter::Info);
    let logic: Arc<dyn Logic> = logic.clone();
    (TeamDebugApi::with_logger(logic, logger, 2).unwrap(), output)
}
