use alusim_core::Simulator;
use alusim_core::config::Config;
use alusim_core::core::signals::{Opcode, Outputs, PinState};

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Power-aware configuration (gating and isolation on), reset applied.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// The ungated "basic" variant, reset applied.
    pub fn baseline() -> Self {
        Self::with_config(Config::baseline())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut sim = Simulator::new(config);
        // Bring the model out of its power-on state with one reset pulse,
        // the way a bench would before applying stimulus.
        sim.tick(PinState {
            reset_n: false,
            ..PinState::default()
        });
        Self { sim }
    }

    /// Clock one enabled operation through the datapath (one full period).
    pub fn op(&mut self, op: Opcode, a: u16, b: u16) {
        self.sim.tick(PinState {
            op_select: op.encode(),
            a,
            b,
            ..PinState::default()
        });
    }

    /// Clock one enabled period with a raw (possibly widened) selector.
    pub fn op_raw(&mut self, op_select: u8, a: u16, b: u16) {
        self.sim.tick(PinState {
            op_select,
            a,
            b,
            ..PinState::default()
        });
    }

    /// Clock one disabled period with the given stimulus still applied.
    pub fn idle(&mut self, op_select: u8, a: u16, b: u16) {
        self.sim.tick(PinState {
            enable: false,
            op_select,
            a,
            b,
            ..PinState::default()
        });
    }

    /// Apply one reset period.
    pub fn reset_pulse(&mut self) {
        self.sim.tick(PinState {
            reset_n: false,
            ..PinState::default()
        });
    }

    /// Snapshot of the registered outputs.
    pub fn outputs(&self) -> Outputs {
        self.sim.outputs()
    }

    pub fn result(&self) -> u16 {
        self.sim.result()
    }

    pub fn zero(&self) -> bool {
        self.sim.zero_flag()
    }

    pub fn carry(&self) -> bool {
        self.sim.carry_flag()
    }
}
