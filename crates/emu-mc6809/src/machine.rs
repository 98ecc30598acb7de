//! The headless machine and its run loop.

use std::time::Duration;

use cpu_mc6809::{Cpu6809, CpuError};
use emu_core::{Bus, SimpleBus};

use crate::config::MachineConfig;
use crate::control::{Command, ControlChannel};
use crate::snapshot::Snapshot;

/// Timeout for the control poll while the CPU is paused. While running
/// the poll is non-blocking.
const PAUSED_POLL_TIMEOUT: Duration = Duration::from_secs(1);

/// A 6809 wired to flat RAM.
pub struct Machine {
    cpu: Cpu6809,
    bus: SimpleBus,
    config: MachineConfig,
    running: bool,
    quit: bool,
}

impl Machine {
    /// Build a machine. RAM starts zeroed; call [`Machine::load`] to
    /// place code, then [`Machine::reset`].
    #[must_use]
    pub fn new(config: MachineConfig) -> Self {
        Self {
            cpu: Cpu6809::new(config.cpu),
            bus: SimpleBus::new(),
            config,
            running: true,
            quit: false,
        }
    }

    /// Reset the CPU through the configured reset vector.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
    }

    /// Copy `data` into RAM at `address`.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        self.bus.load(address, data);
    }

    /// Read one byte of RAM without side effects.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.bus.peek(address)
    }

    /// Write one byte of RAM.
    pub fn poke(&mut self, address: u16, value: u8) {
        self.bus.write(address, value);
    }

    /// Execute a single instruction.
    pub fn step(&mut self) -> Result<u64, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Run until told to quit or the cycle budget is exhausted.
    ///
    /// Alternates between one control poll (non-blocking while running,
    /// bounded wait while paused) and a burst of at most `burst_count`
    /// instructions. Pause and quit take effect at burst boundaries.
    pub fn run<C: ControlChannel>(&mut self, control: &mut C) -> Result<(), CpuError> {
        while !self.quit {
            let timeout = if self.running {
                Duration::ZERO
            } else {
                PAUSED_POLL_TIMEOUT
            };
            if let Some(command) = control.poll(timeout) {
                self.handle_command(command);
            }

            for _ in 0..self.config.burst_count {
                if !self.running || self.quit {
                    break;
                }
                self.cpu.step(&mut self.bus)?;
            }

            if let Some(max) = self.config.max_cpu_cycles {
                if self.cpu.cycles().get() >= max {
                    self.quit = true;
                }
            }
        }
        Ok(())
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Pause => self.running = false,
            Command::Resume => self.running = true,
            Command::Quit => self.quit = true,
        }
    }

    /// Whether the run loop will keep executing instructions.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running && !self.quit
    }

    /// Capture the complete machine state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.cpu, &self.bus)
    }

    /// Restore a previously captured state.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        snapshot.apply(&mut self.cpu, &mut self.bus);
    }

    /// Reference to the CPU.
    #[must_use]
    pub fn cpu(&self) -> &Cpu6809 {
        &self.cpu
    }

    /// Mutable reference to the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu6809 {
        &mut self.cpu
    }

    /// Reference to the bus.
    #[must_use]
    pub fn bus(&self) -> &SimpleBus {
        &self.bus
    }

    /// Mutable reference to the bus.
    pub fn bus_mut(&mut self) -> &mut SimpleBus {
        &mut self.bus
    }
}
