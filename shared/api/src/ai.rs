use crate::api::{ShipApi, TeamApi};

/// Strategy controlling a single ship.
pub trait ShipAi {
    fn play(&mut self, api: &dyn ShipApi);
}

/// Strategy controlling the home base.
pub trait TeamAi {
    fn play(&mut self, api: &dyn TeamApi);
}

impl<F: FnMut(&dyn ShipApi)> ShipAi for F {
    fn play(&mut self, api: &dyn ShipApi) {
        self(api)
    }
}

impl<F: FnMut(&dyn TeamApi)> TeamAi for F {
    fn play(&mut self, api: &dyn TeamApi) {
        self(api)
    }
}
