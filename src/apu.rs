/// Audio-processing unit stub.
///
/// The sound coprocessor is out of scope for the CPU core; this stub only
/// tracks its clock so the host loop can keep it nominally in step.
pub struct Apu {
    cycles: u64,
}

impl Apu {
    pub fn new() -> Self {
        Apu { cycles: 0 }
    }

    pub fn reset(&mut self) {
        self.cycles = 0;
    }

    pub fn step(&mut self, cycles: u32) {
        self.cycles += cycles as u64;
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}
