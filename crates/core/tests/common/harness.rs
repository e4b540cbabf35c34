use rv64sim_core::common::constants::INSTRUCTION_SIZE;
use rv64sim_core::common::data::AccessWidth;
use rv64sim_core::common::error::Trap;
use rv64sim_core::config::Config;
use rv64sim_core::mem::{Bus, Memory};
use rv64sim_core::sim::{Simulator, State};

pub struct TestContext {
    pub sim: Simulator<Memory>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            sim: Simulator::new(config),
        }
    }

    /// Load a sequence of 32-bit words into memory at `addr` and set the PC.
    pub fn load_program(mut self, addr: u64, program: &[u32]) -> Self {
        for (i, word) in program.iter().enumerate() {
            let offset = addr + (i as u64) * INSTRUCTION_SIZE;
            self.sim
                .mem
                .write(offset, AccessWidth::Word, u64::from(*word))
                .unwrap();
        }
        self.sim.machine.pc = addr;
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u64) {
        self.sim.machine.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u64 {
        self.sim.machine.regs.read(reg)
    }

    /// Current program counter.
    pub fn pc(&self) -> u64 {
        self.sim.machine.pc
    }

    /// Current driver state.
    pub fn state(&self) -> State {
        self.sim.state()
    }

    /// Run the simulator until it halts or faults.
    pub fn run(&mut self) -> Result<(), Trap> {
        self.sim.run()
    }
}
