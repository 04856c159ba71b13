/// Integrated emulator facade.
///
/// Owns the CPU, the main bus and the coprocessor stubs and interleaves
/// them the way the host outer loop expects: everything is single-threaded
/// and cooperative, one CPU instruction at a time with the PPU and APU
/// stepped in proportion.
use crate::apu::Apu;
use crate::bus::MainBus;
use crate::cpu::Cpu65816;
use crate::ppu::Ppu;

/// PPU dots advanced per CPU cycle (coarse master-clock ratio).
const DOTS_PER_CPU_CYCLE: u32 = 4;

/// Upper bound of CPU steps per `run_frame` call, as a runaway guard.
const MAX_STEPS_PER_FRAME: u32 = 200_000;

pub struct Emulator {
    cpu: Cpu65816,
    bus: MainBus,
    ppu: Ppu,
    apu: Apu,
}

impl Emulator {
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu65816::new(),
            bus: MainBus::new(Vec::new()),
            ppu: Ppu::new(),
            apu: Apu::new(),
        }
    }

    /// Load a raw ROM image and reset the machine around it.
    pub fn load_rom(&mut self, rom: Vec<u8>) -> Result<(), String> {
        if rom.is_empty() {
            return Err("ROM data is empty".to_string());
        }
        self.bus = MainBus::new(rom);
        self.reset();
        Ok(())
    }

    /// Reset every component; the CPU re-reads its reset vector.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.ppu.reset();
        self.apu.reset();
    }

    /// Execute one CPU instruction and keep the coprocessors in step.
    /// Returns the CPU cycles consumed.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        for _ in 0..cycles * DOTS_PER_CPU_CYCLE {
            self.ppu.step();
        }
        self.apu.step(cycles);
        cycles
    }

    /// Run until the PPU signals a completed frame.
    pub fn run_frame(&mut self) {
        self.ppu.clear_frame_complete();
        let mut steps = 0;
        while !self.ppu.frame_complete() {
            self.step();
            steps += 1;
            if steps >= MAX_STEPS_PER_FRAME {
                break;
            }
        }
    }

    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// Arm a maskable interrupt for the next CPU step.
    pub fn raise_irq(&mut self) {
        self.cpu.raise_irq();
    }

    /// Arm a non-maskable interrupt for the next CPU step.
    pub fn raise_nmi(&mut self) {
        self.cpu.raise_nmi();
    }

    pub fn cpu(&self) -> &Cpu65816 {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu65816 {
        &mut self.cpu
    }

    pub fn bus(&self) -> &MainBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut MainBus {
        &mut self.bus
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn apu(&self) -> &Apu {
        &self.apu
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
