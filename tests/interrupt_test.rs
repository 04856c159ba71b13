/// Interrupt plumbing, halt latches and the block-move loop.
use snes_core::{Bus, Cpu65816};

struct RamBus {
    mem: Vec<u8>,
}

impl RamBus {
    fn new() -> Self {
        RamBus {
            mem: vec![0; 0x100_0000],
        }
    }

    fn load(&mut self, origin: u32, bytes: &[u8]) {
        let start = (origin & 0xFF_FFFF) as usize;
        self.mem[start..start + bytes.len()].copy_from_slice(bytes);
    }
}

impl Bus for RamBus {
    fn read(&mut self, addr: u32) -> u8 {
        self.mem[(addr & 0xFF_FFFF) as usize]
    }

    fn write(&mut self, addr: u32, value: u8) {
        self.mem[(addr & 0xFF_FFFF) as usize] = value;
    }
}

fn cpu_at(pc: u16) -> Cpu65816 {
    let mut cpu = Cpu65816::new();
    cpu.pc = pc;
    cpu.pbr = 0;
    cpu
}

#[test]
fn irq_serviced_when_unmasked() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0xEA]); // NOP, never reached
    bus.load(0x00FFFE, &[0x00, 0x90]); // emulation IRQ vector -> $9000
    let mut cpu = cpu_at(0x8000);
    cpu.p.i = false;
    cpu.p.d = true;
    cpu.s = 0x01FF;

    cpu.raise_irq();
    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc, 0x9000);
    assert_eq!(cpu.pbr, 0);
    assert!(cpu.p.i);
    assert!(!cpu.p.d);
    // Emulation frame: PCH, PCL, P with the B bit clear
    assert_eq!(bus.read(0x01FF), 0x80);
    assert_eq!(bus.read(0x01FE), 0x00);
    assert_eq!(bus.read(0x01FD) & 0x10, 0x00);
}

#[test]
fn irq_stays_pending_while_masked() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0xEA, 0x58, 0xEA]); // NOP / CLI / NOP
    bus.load(0x00FFFE, &[0x00, 0x90]);
    let mut cpu = cpu_at(0x8000);
    cpu.p.i = true;

    cpu.raise_irq();
    cpu.step(&mut bus); // NOP executes, IRQ held off
    assert_eq!(cpu.pc, 0x8001);

    cpu.step(&mut bus); // CLI
    cpu.step(&mut bus); // pending IRQ fires now
    assert_eq!(cpu.pc, 0x9000);
}

#[test]
fn nmi_ignores_interrupt_mask() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0xEA]);
    bus.load(0x00FFFA, &[0x00, 0xA0]); // emulation NMI vector -> $A000
    let mut cpu = cpu_at(0x8000);
    cpu.p.i = true;

    cpu.raise_nmi();
    cpu.step(&mut bus);

    assert_eq!(cpu.pc, 0xA000);
}

#[test]
fn native_mode_interrupt_pushes_bank_and_costs_eight() {
    let mut bus = RamBus::new();
    bus.load(0x058000, &[0xEA]);
    bus.load(0x00FFEE, &[0x00, 0xB0]); // native IRQ vector -> $B000
    let mut cpu = Cpu65816::new();
    cpu.p.e = false;
    cpu.p.i = false;
    cpu.pbr = 0x05;
    cpu.pc = 0x8000;
    cpu.s = 0x01FF;

    cpu.raise_irq();
    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, 8);
    assert_eq!(cpu.pc, 0xB000);
    assert_eq!(cpu.pbr, 0);
    assert_eq!(bus.read(0x01FF), 0x05); // old program bank
    assert_eq!(bus.read(0x01FE), 0x80);
    assert_eq!(bus.read(0x01FD), 0x00);
}

#[test]
fn rti_resumes_interrupted_program() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0xA9, 0x42]); // LDA #$42, the interrupted instruction
    bus.load(0x9000, &[0x40]); // handler is just RTI
    bus.load(0x00FFFE, &[0x00, 0x90]);
    let mut cpu = cpu_at(0x8000);
    cpu.p.i = false;

    cpu.raise_irq();
    cpu.step(&mut bus); // service
    assert_eq!(cpu.pc, 0x9000);

    cpu.step(&mut bus); // RTI
    assert_eq!(cpu.pc, 0x8000);

    cpu.step(&mut bus); // the original instruction finally runs
    assert_eq!(cpu.a & 0xFF, 0x42);
}

#[test]
fn wai_halts_until_interrupt() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0xCB, 0xEA]); // WAI / NOP
    bus.load(0x00FFFE, &[0x00, 0x90]);
    let mut cpu = cpu_at(0x8000);
    cpu.p.i = false;

    cpu.step(&mut bus); // WAI
    assert!(cpu.waiting);

    // Halted steps burn one cycle each and move nothing
    let before = cpu.cycles();
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.cycles() - before, 2);
    assert_eq!(cpu.pc, 0x8001);
    assert!(cpu.waiting);

    cpu.raise_irq();
    cpu.step(&mut bus); // wake + service
    assert!(!cpu.waiting);
    assert_eq!(cpu.pc, 0x9000);
    // Return address on the stack points at the instruction after WAI
    assert_eq!(bus.read(0x01FF), 0x80);
    assert_eq!(bus.read(0x01FE), 0x01);
}

#[test]
fn wai_with_masked_irq_falls_through() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0xCB, 0xA9, 0x11]); // WAI / LDA #$11
    let mut cpu = cpu_at(0x8000);
    cpu.p.i = true; // IRQ masked: WAI wakes but no service happens

    cpu.step(&mut bus); // WAI
    cpu.raise_irq();
    cpu.step(&mut bus); // wakes, executes LDA instead of vectoring

    assert!(!cpu.waiting);
    assert_eq!(cpu.a & 0xFF, 0x11);
}

#[test]
fn stp_halts_until_reset() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0xDB, 0xEA]); // STP / NOP
    bus.load(0x00FFFC, &[0x00, 0x80]); // reset vector
    let mut cpu = cpu_at(0x8000);

    cpu.step(&mut bus); // STP
    assert!(cpu.stopped);

    cpu.raise_nmi();
    cpu.step(&mut bus); // still stopped; interrupts do not wake STP
    assert!(cpu.stopped);
    assert_eq!(cpu.pc, 0x8001);

    cpu.reset(&mut bus);
    assert!(!cpu.stopped);
    assert_eq!(cpu.pc, 0x8000);
}

#[test]
fn brk_and_rti_round_trip_in_emulation_mode() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0x00, 0x00, 0xA9, 0x77]); // BRK + signature, then LDA #$77
    bus.load(0x9000, &[0x40]); // RTI
    bus.load(0x00FFFE, &[0x00, 0x90]);
    let mut cpu = cpu_at(0x8000);

    cpu.step(&mut bus); // BRK
    assert_eq!(cpu.pc, 0x9000);

    cpu.step(&mut bus); // RTI resumes after the signature byte
    assert_eq!(cpu.pc, 0x8002);

    cpu.step(&mut bus);
    assert_eq!(cpu.a & 0xFF, 0x77);
}

#[test]
fn cop_uses_its_own_vector() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0x02, 0x00]); // COP + signature
    bus.load(0x00FFF4, &[0x00, 0xC0]); // emulation COP vector -> $C000
    let mut cpu = cpu_at(0x8000);

    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc, 0xC000);
    assert!(cpu.p.i);
}

#[test]
fn nmi_between_block_move_iterations() {
    let mut bus = RamBus::new();
    bus.load(0x8000, &[0x54, 0x00, 0x00]); // MVN within bank 0
    bus.load(0x9000, &[0x40]); // RTI
    bus.load(0x00FFEA, &[0x00, 0x90]); // native NMI vector
    bus.load(0x1000, &[0x01, 0x02, 0x03, 0x04]);
    let mut cpu = cpu_at(0x8000);
    cpu.p.e = false;
    cpu.p.x = false;
    cpu.a = 0x0003; // four bytes
    cpu.x = 0x1000;
    cpu.y = 0x2000;

    cpu.step(&mut bus); // first byte moved, PC rewound
    assert_eq!(bus.read(0x2000), 0x01);

    cpu.raise_nmi();
    cpu.step(&mut bus); // NMI taken between iterations
    assert_eq!(cpu.pc, 0x9000);

    cpu.step(&mut bus); // RTI lands back on the MVN opcode
    assert_eq!(cpu.pc, 0x8000);

    for _ in 0..3 {
        cpu.step(&mut bus);
    }

    assert_eq!(bus.read(0x2001), 0x02);
    assert_eq!(bus.read(0x2002), 0x03);
    assert_eq!(bus.read(0x2003), 0x04);
    assert_eq!(cpu.a, 0xFFFF);
    assert_eq!(cpu.pc, 0x8003);
}
