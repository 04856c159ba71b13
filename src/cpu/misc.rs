/// Register plumbing: stack pushes/pulls of registers, transfers, flag
/// operations, the REP/SEP and XCE mode switches, and the halt latches.
///
/// Width rules worth keeping straight: an 8-bit PLA *clears* the high byte
/// of A (unlike an 8-bit LDA, which preserves it); transfers into A respect
/// M, transfers into X/Y respect X; TXS/TCS never touch flags and keep the
/// stack in page 1 while in emulation mode.
use crate::bus::Bus;

use super::Cpu65816;

impl Cpu65816 {
    // ===== REGISTER PUSH/PULL =====

    pub(crate) fn pha(&mut self, bus: &mut impl Bus) -> u32 {
        if self.p.m {
            self.push_byte(bus, (self.a & 0xFF) as u8);
            3
        } else {
            self.push_word(bus, self.a);
            4
        }
    }

    /// 8-bit PLA clears the high byte of A.
    pub(crate) fn pla(&mut self, bus: &mut impl Bus) -> u32 {
        if self.p.m {
            let value = self.pull_byte(bus);
            self.a = value as u16;
            self.update_nz_8(value);
            4
        } else {
            let value = self.pull_word(bus);
            self.a = value;
            self.update_nz_16(value);
            5
        }
    }

    pub(crate) fn phx(&mut self, bus: &mut impl Bus) -> u32 {
        if self.p.x {
            self.push_byte(bus, (self.x & 0xFF) as u8);
            3
        } else {
            self.push_word(bus, self.x);
            4
        }
    }

    pub(crate) fn plx(&mut self, bus: &mut impl Bus) -> u32 {
        if self.p.x {
            let value = self.pull_byte(bus);
            self.x = value as u16;
            self.update_nz_8(value);
            4
        } else {
            let value = self.pull_word(bus);
            self.x = value;
            self.update_nz_16(value);
            5
        }
    }

    pub(crate) fn phy(&mut self, bus: &mut impl Bus) -> u32 {
        if self.p.x {
            self.push_byte(bus, (self.y & 0xFF) as u8);
            3
        } else {
            self.push_word(bus, self.y);
            4
        }
    }

    pub(crate) fn ply(&mut self, bus: &mut impl Bus) -> u32 {
        if self.p.x {
            let value = self.pull_byte(bus);
            self.y = value as u16;
            self.update_nz_8(value);
            4
        } else {
            let value = self.pull_word(bus);
            self.y = value;
            self.update_nz_16(value);
            5
        }
    }

    pub(crate) fn php(&mut self, bus: &mut impl Bus) -> u32 {
        self.push_byte(bus, self.p.to_byte());
        3
    }

    pub(crate) fn plp(&mut self, bus: &mut impl Bus) -> u32 {
        let value = self.pull_byte(bus);
        self.p.from_byte(value);
        self.enforce_width_invariants();
        4
    }

    pub(crate) fn phb(&mut self, bus: &mut impl Bus) -> u32 {
        self.push_byte(bus, self.dbr);
        3
    }

    pub(crate) fn plb(&mut self, bus: &mut impl Bus) -> u32 {
        let value = self.pull_byte(bus);
        self.dbr = value;
        self.update_nz_8(value);
        4
    }

    pub(crate) fn phd(&mut self, bus: &mut impl Bus) -> u32 {
        self.push_word(bus, self.d);
        4
    }

    pub(crate) fn pld(&mut self, bus: &mut impl Bus) -> u32 {
        let value = self.pull_word(bus);
        self.d = value;
        self.update_nz_16(value);
        5
    }

    pub(crate) fn phk(&mut self, bus: &mut impl Bus) -> u32 {
        self.push_byte(bus, self.pbr);
        3
    }

    // ===== TRANSFERS =====

    pub(crate) fn tax(&mut self) -> u32 {
        if self.p.x {
            self.x = self.a & 0xFF;
            self.update_nz_8(self.x as u8);
        } else {
            self.x = self.a;
            self.update_nz_16(self.x);
        }
        2
    }

    pub(crate) fn tay(&mut self) -> u32 {
        if self.p.x {
            self.y = self.a & 0xFF;
            self.update_nz_8(self.y as u8);
        } else {
            self.y = self.a;
            self.update_nz_16(self.y);
        }
        2
    }

    pub(crate) fn txa(&mut self) -> u32 {
        if self.p.m {
            self.a = (self.a & 0xFF00) | (self.x & 0xFF);
            self.update_nz_8(self.a as u8);
        } else {
            self.a = self.x;
            self.update_nz_16(self.a);
        }
        2
    }

    pub(crate) fn tya(&mut self) -> u32 {
        if self.p.m {
            self.a = (self.a & 0xFF00) | (self.y & 0xFF);
            self.update_nz_8(self.a as u8);
        } else {
            self.a = self.y;
            self.update_nz_16(self.a);
        }
        2
    }

    pub(crate) fn txy(&mut self) -> u32 {
        if self.p.x {
            self.y = self.x & 0xFF;
            self.update_nz_8(self.y as u8);
        } else {
            self.y = self.x;
            self.update_nz_16(self.y);
        }
        2
    }

    pub(crate) fn tyx(&mut self) -> u32 {
        if self.p.x {
            self.x = self.y & 0xFF;
            self.update_nz_8(self.x as u8);
        } else {
            self.x = self.y;
            self.update_nz_16(self.x);
        }
        2
    }

    pub(crate) fn tsx(&mut self) -> u32 {
        if self.p.x {
            self.x = self.s & 0xFF;
            self.update_nz_8(self.x as u8);
        } else {
            self.x = self.s;
            self.update_nz_16(self.x);
        }
        2
    }

    /// TXS sets no flags; emulation mode pins the stack to page 1.
    pub(crate) fn txs(&mut self) -> u32 {
        self.s = if self.p.e {
            0x0100 | (self.x & 0xFF)
        } else {
            self.x
        };
        2
    }

    /// TCS transfers the full 16-bit accumulator regardless of M; no flags.
    pub(crate) fn tcs(&mut self) -> u32 {
        self.s = if self.p.e {
            0x0100 | (self.a & 0xFF)
        } else {
            self.a
        };
        2
    }

    pub(crate) fn tsc(&mut self) -> u32 {
        self.a = self.s;
        self.update_nz_16(self.a);
        2
    }

    /// TCD/TDC move the full 16-bit accumulator regardless of M.
    pub(crate) fn tcd(&mut self) -> u32 {
        self.d = self.a;
        self.update_nz_16(self.d);
        2
    }

    pub(crate) fn tdc(&mut self) -> u32 {
        self.a = self.d;
        self.update_nz_16(self.a);
        2
    }

    // ===== FLAG OPERATIONS =====

    pub(crate) fn clc(&mut self) -> u32 {
        self.p.c = false;
        2
    }

    pub(crate) fn cld(&mut self) -> u32 {
        self.p.d = false;
        2
    }

    pub(crate) fn cli(&mut self) -> u32 {
        self.p.i = false;
        2
    }

    pub(crate) fn clv(&mut self) -> u32 {
        self.p.v = false;
        2
    }

    pub(crate) fn sec(&mut self) -> u32 {
        self.p.c = true;
        2
    }

    pub(crate) fn sed(&mut self) -> u32 {
        self.p.d = true;
        2
    }

    pub(crate) fn sei(&mut self) -> u32 {
        self.p.i = true;
        2
    }

    /// REP - clear the P bits named by the operand mask.
    pub(crate) fn rep(&mut self, bus: &mut impl Bus) -> u32 {
        let mask = self.fetch_byte(bus);
        let value = self.p.to_byte() & !mask;
        self.p.from_byte(value);
        self.enforce_width_invariants();
        3
    }

    /// SEP - set the P bits named by the operand mask.
    pub(crate) fn sep(&mut self, bus: &mut impl Bus) -> u32 {
        let mask = self.fetch_byte(bus);
        let value = self.p.to_byte() | mask;
        self.p.from_byte(value);
        self.enforce_width_invariants();
        3
    }

    // ===== MODE EXCHANGE =====

    /// XBA - swap the halves of A; N/Z reflect the new low byte.
    pub(crate) fn xba(&mut self) -> u32 {
        self.a = self.a.swap_bytes();
        self.update_nz_8((self.a & 0xFF) as u8);
        3
    }

    /// XCE - exchange carry with the emulation latch. Entering emulation
    /// forces 8-bit widths and the page-1 stack; entering native mode
    /// leaves M and X as they were.
    pub(crate) fn xce(&mut self) -> u32 {
        let carry = self.p.c;
        self.p.c = self.p.e;
        self.p.e = carry;
        self.enforce_width_invariants();
        2
    }

    // ===== SYSTEM =====

    pub(crate) fn nop(&mut self) -> u32 {
        2
    }

    /// WDM - the one reserved slot on this chip. Consumes its operand byte
    /// and reports through the diagnostic channel.
    pub(crate) fn wdm(&mut self, bus: &mut impl Bus) -> u32 {
        let operand = self.fetch_byte(bus);
        log::warn!(
            "WDM (reserved opcode) with operand {:#04X} at {:02X}:{:04X}",
            operand,
            self.pbr,
            self.pc.wrapping_sub(2)
        );
        2
    }

    /// WAI - halt until an interrupt is raised.
    pub(crate) fn wai(&mut self) -> u32 {
        self.waiting = true;
        3
    }

    /// STP - halt until reset.
    pub(crate) fn stp(&mut self) -> u32 {
        self.stopped = true;
        3
    }
}
