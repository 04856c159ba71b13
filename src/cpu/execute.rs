/// Opcode dispatch.
///
/// Every one of the 256 opcode slots is architecturally defined on this
/// chip and every one routes to a handler, so the match is total: dispatch
/// can neither crash nor desynchronise PC. Each arm resolves the operand
/// address and hands the base cycle count for its (mnemonic, mode) pair to
/// the semantic core; width and penalty cycles are added there.
use crate::bus::Bus;

use super::Cpu65816;

impl Cpu65816 {
    pub(crate) fn execute_opcode(&mut self, bus: &mut impl Bus, opcode: u8) -> u32 {
        match opcode {
            // ===== LOAD ACCUMULATOR =====
            0xA9 => self.lda_immediate(bus),
            0xA5 => { let ea = self.ea_direct(bus); self.lda_mem(bus, ea, 3) }
            0xB5 => { let ea = self.ea_direct_x(bus); self.lda_mem(bus, ea, 4) }
            0xB2 => { let ea = self.ea_indirect(bus); self.lda_mem(bus, ea, 5) }
            0xA7 => { let ea = self.ea_indirect_long(bus); self.lda_mem(bus, ea, 6) }
            0xA1 => { let ea = self.ea_indexed_indirect(bus); self.lda_mem(bus, ea, 6) }
            0xB1 => { let ea = self.ea_indirect_y_read(bus); self.lda_mem(bus, ea, 5) }
            0xB7 => { let ea = self.ea_indirect_long_y(bus); self.lda_mem(bus, ea, 6) }
            0xAD => { let ea = self.ea_absolute(bus); self.lda_mem(bus, ea, 4) }
            0xBD => { let ea = self.ea_absolute_x_read(bus); self.lda_mem(bus, ea, 4) }
            0xB9 => { let ea = self.ea_absolute_y_read(bus); self.lda_mem(bus, ea, 4) }
            0xAF => { let ea = self.ea_long(bus); self.lda_mem(bus, ea, 5) }
            0xBF => { let ea = self.ea_long_x(bus); self.lda_mem(bus, ea, 5) }
            0xA3 => { let ea = self.ea_stack_relative(bus); self.lda_mem(bus, ea, 4) }
            0xB3 => { let ea = self.ea_stack_relative_y(bus); self.lda_mem(bus, ea, 7) }

            // ===== LOAD INDEX REGISTERS =====
            0xA2 => self.ldx_immediate(bus),
            0xA6 => { let ea = self.ea_direct(bus); self.ldx_mem(bus, ea, 3) }
            0xB6 => { let ea = self.ea_direct_y(bus); self.ldx_mem(bus, ea, 4) }
            0xAE => { let ea = self.ea_absolute(bus); self.ldx_mem(bus, ea, 4) }
            0xBE => { let ea = self.ea_absolute_y_read(bus); self.ldx_mem(bus, ea, 4) }

            0xA0 => self.ldy_immediate(bus),
            0xA4 => { let ea = self.ea_direct(bus); self.ldy_mem(bus, ea, 3) }
            0xB4 => { let ea = self.ea_direct_x(bus); self.ldy_mem(bus, ea, 4) }
            0xAC => { let ea = self.ea_absolute(bus); self.ldy_mem(bus, ea, 4) }
            0xBC => { let ea = self.ea_absolute_x_read(bus); self.ldy_mem(bus, ea, 4) }

            // ===== STORE ACCUMULATOR =====
            0x85 => { let ea = self.ea_direct(bus); self.sta_mem(bus, ea, 3) }
            0x95 => { let ea = self.ea_direct_x(bus); self.sta_mem(bus, ea, 4) }
            0x92 => { let ea = self.ea_indirect(bus); self.sta_mem(bus, ea, 5) }
            0x87 => { let ea = self.ea_indirect_long(bus); self.sta_mem(bus, ea, 6) }
            0x81 => { let ea = self.ea_indexed_indirect(bus); self.sta_mem(bus, ea, 6) }
            0x91 => { let ea = self.ea_indirect_y_store(bus); self.sta_mem(bus, ea, 6) }
            0x97 => { let ea = self.ea_indirect_long_y(bus); self.sta_mem(bus, ea, 6) }
            0x8D => { let ea = self.ea_absolute(bus); self.sta_mem(bus, ea, 4) }
            0x9D => { let ea = self.ea_absolute_x_store(bus); self.sta_mem(bus, ea, 5) }
            0x99 => { let ea = self.ea_absolute_y_store(bus); self.sta_mem(bus, ea, 5) }
            0x8F => { let ea = self.ea_long(bus); self.sta_mem(bus, ea, 5) }
            0x9F => { let ea = self.ea_long_x(bus); self.sta_mem(bus, ea, 5) }
            0x83 => { let ea = self.ea_stack_relative(bus); self.sta_mem(bus, ea, 4) }
            0x93 => { let ea = self.ea_stack_relative_y(bus); self.sta_mem(bus, ea, 7) }

            // ===== STORE INDEX / ZERO =====
            0x86 => { let ea = self.ea_direct(bus); self.stx_mem(bus, ea, 3) }
            0x96 => { let ea = self.ea_direct_y(bus); self.stx_mem(bus, ea, 4) }
            0x8E => { let ea = self.ea_absolute(bus); self.stx_mem(bus, ea, 4) }

            0x84 => { let ea = self.ea_direct(bus); self.sty_mem(bus, ea, 3) }
            0x94 => { let ea = self.ea_direct_x(bus); self.sty_mem(bus, ea, 4) }
            0x8C => { let ea = self.ea_absolute(bus); self.sty_mem(bus, ea, 4) }

            0x64 => { let ea = self.ea_direct(bus); self.stz_mem(bus, ea, 3) }
            0x74 => { let ea = self.ea_direct_x(bus); self.stz_mem(bus, ea, 4) }
            0x9C => { let ea = self.ea_absolute(bus); self.stz_mem(bus, ea, 4) }
            0x9E => { let ea = self.ea_absolute_x_store(bus); self.stz_mem(bus, ea, 5) }

            // ===== ADD WITH CARRY =====
            0x69 => self.adc_immediate(bus),
            0x65 => { let ea = self.ea_direct(bus); self.adc_mem(bus, ea, 3) }
            0x75 => { let ea = self.ea_direct_x(bus); self.adc_mem(bus, ea, 4) }
            0x72 => { let ea = self.ea_indirect(bus); self.adc_mem(bus, ea, 5) }
            0x67 => { let ea = self.ea_indirect_long(bus); self.adc_mem(bus, ea, 6) }
            0x61 => { let ea = self.ea_indexed_indirect(bus); self.adc_mem(bus, ea, 6) }
            0x71 => { let ea = self.ea_indirect_y_read(bus); self.adc_mem(bus, ea, 5) }
            0x77 => { let ea = self.ea_indirect_long_y(bus); self.adc_mem(bus, ea, 6) }
            0x6D => { let ea = self.ea_absolute(bus); self.adc_mem(bus, ea, 4) }
            0x7D => { let ea = self.ea_absolute_x_read(bus); self.adc_mem(bus, ea, 4) }
            0x79 => { let ea = self.ea_absolute_y_read(bus); self.adc_mem(bus, ea, 4) }
            0x6F => { let ea = self.ea_long(bus); self.adc_mem(bus, ea, 5) }
            0x7F => { let ea = self.ea_long_x(bus); self.adc_mem(bus, ea, 5) }
            0x63 => { let ea = self.ea_stack_relative(bus); self.adc_mem(bus, ea, 4) }
            0x73 => { let ea = self.ea_stack_relative_y(bus); self.adc_mem(bus, ea, 7) }

            // ===== SUBTRACT WITH CARRY =====
            0xE9 => self.sbc_immediate(bus),
            0xE5 => { let ea = self.ea_direct(bus); self.sbc_mem(bus, ea, 3) }
            0xF5 => { let ea = self.ea_direct_x(bus); self.sbc_mem(bus, ea, 4) }
            0xF2 => { let ea = self.ea_indirect(bus); self.sbc_mem(bus, ea, 5) }
            0xE7 => { let ea = self.ea_indirect_long(bus); self.sbc_mem(bus, ea, 6) }
            0xE1 => { let ea = self.ea_indexed_indirect(bus); self.sbc_mem(bus, ea, 6) }
            0xF1 => { let ea = self.ea_indirect_y_read(bus); self.sbc_mem(bus, ea, 5) }
            0xF7 => { let ea = self.ea_indirect_long_y(bus); self.sbc_mem(bus, ea, 6) }
            0xED => { let ea = self.ea_absolute(bus); self.sbc_mem(bus, ea, 4) }
            0xFD => { let ea = self.ea_absolute_x_read(bus); self.sbc_mem(bus, ea, 4) }
            0xF9 => { let ea = self.ea_absolute_y_read(bus); self.sbc_mem(bus, ea, 4) }
            0xEF => { let ea = self.ea_long(bus); self.sbc_mem(bus, ea, 5) }
            0xFF => { let ea = self.ea_long_x(bus); self.sbc_mem(bus, ea, 5) }
            0xE3 => { let ea = self.ea_stack_relative(bus); self.sbc_mem(bus, ea, 4) }
            0xF3 => { let ea = self.ea_stack_relative_y(bus); self.sbc_mem(bus, ea, 7) }

            // ===== AND =====
            0x29 => self.and_immediate(bus),
            0x25 => { let ea = self.ea_direct(bus); self.and_mem(bus, ea, 3) }
            0x35 => { let ea = self.ea_direct_x(bus); self.and_mem(bus, ea, 4) }
            0x32 => { let ea = self.ea_indirect(bus); self.and_mem(bus, ea, 5) }
            0x27 => { let ea = self.ea_indirect_long(bus); self.and_mem(bus, ea, 6) }
            0x21 => { let ea = self.ea_indexed_indirect(bus); self.and_mem(bus, ea, 6) }
            0x31 => { let ea = self.ea_indirect_y_read(bus); self.and_mem(bus, ea, 5) }
            0x37 => { let ea = self.ea_indirect_long_y(bus); self.and_mem(bus, ea, 6) }
            0x2D => { let ea = self.ea_absolute(bus); self.and_mem(bus, ea, 4) }
            0x3D => { let ea = self.ea_absolute_x_read(bus); self.and_mem(bus, ea, 4) }
            0x39 => { let ea = self.ea_absolute_y_read(bus); self.and_mem(bus, ea, 4) }
            0x2F => { let ea = self.ea_long(bus); self.and_mem(bus, ea, 5) }
            0x3F => { let ea = self.ea_long_x(bus); self.and_mem(bus, ea, 5) }
            0x23 => { let ea = self.ea_stack_relative(bus); self.and_mem(bus, ea, 4) }
            0x33 => { let ea = self.ea_stack_relative_y(bus); self.and_mem(bus, ea, 7) }

            // ===== ORA =====
            0x09 => self.ora_immediate(bus),
            0x05 => { let ea = self.ea_direct(bus); self.ora_mem(bus, ea, 3) }
            0x15 => { let ea = self.ea_direct_x(bus); self.ora_mem(bus, ea, 4) }
            0x12 => { let ea = self.ea_indirect(bus); self.ora_mem(bus, ea, 5) }
            0x07 => { let ea = self.ea_indirect_long(bus); self.ora_mem(bus, ea, 6) }
            0x01 => { let ea = self.ea_indexed_indirect(bus); self.ora_mem(bus, ea, 6) }
            0x11 => { let ea = self.ea_indirect_y_read(bus); self.ora_mem(bus, ea, 5) }
            0x17 => { let ea = self.ea_indirect_long_y(bus); self.ora_mem(bus, ea, 6) }
            0x0D => { let ea = self.ea_absolute(bus); self.ora_mem(bus, ea, 4) }
            0x1D => { let ea = self.ea_absolute_x_read(bus); self.ora_mem(bus, ea, 4) }
            0x19 => { let ea = self.ea_absolute_y_read(bus); self.ora_mem(bus, ea, 4) }
            0x0F => { let ea = self.ea_long(bus); self.ora_mem(bus, ea, 5) }
            0x1F => { let ea = self.ea_long_x(bus); self.ora_mem(bus, ea, 5) }
            0x03 => { let ea = self.ea_stack_relative(bus); self.ora_mem(bus, ea, 4) }
            0x13 => { let ea = self.ea_stack_relative_y(bus); self.ora_mem(bus, ea, 7) }

            // ===== EOR =====
            0x49 => self.eor_immediate(bus),
            0x45 => { let ea = self.ea_direct(bus); self.eor_mem(bus, ea, 3) }
            0x55 => { let ea = self.ea_direct_x(bus); self.eor_mem(bus, ea, 4) }
            0x52 => { let ea = self.ea_indirect(bus); self.eor_mem(bus, ea, 5) }
            0x47 => { let ea = self.ea_indirect_long(bus); self.eor_mem(bus, ea, 6) }
            0x41 => { let ea = self.ea_indexed_indirect(bus); self.eor_mem(bus, ea, 6) }
            0x51 => { let ea = self.ea_indirect_y_read(bus); self.eor_mem(bus, ea, 5) }
            0x57 => { let ea = self.ea_indirect_long_y(bus); self.eor_mem(bus, ea, 6) }
            0x4D => { let ea = self.ea_absolute(bus); self.eor_mem(bus, ea, 4) }
            0x5D => { let ea = self.ea_absolute_x_read(bus); self.eor_mem(bus, ea, 4) }
            0x59 => { let ea = self.ea_absolute_y_read(bus); self.eor_mem(bus, ea, 4) }
            0x4F => { let ea = self.ea_long(bus); self.eor_mem(bus, ea, 5) }
            0x5F => { let ea = self.ea_long_x(bus); self.eor_mem(bus, ea, 5) }
            0x43 => { let ea = self.ea_stack_relative(bus); self.eor_mem(bus, ea, 4) }
            0x53 => { let ea = self.ea_stack_relative_y(bus); self.eor_mem(bus, ea, 7) }

            // ===== COMPARES =====
            0xC9 => self.cmp_immediate(bus),
            0xC5 => { let ea = self.ea_direct(bus); self.cmp_mem(bus, ea, 3) }
            0xD5 => { let ea = self.ea_direct_x(bus); self.cmp_mem(bus, ea, 4) }
            0xD2 => { let ea = self.ea_indirect(bus); self.cmp_mem(bus, ea, 5) }
            0xC7 => { let ea = self.ea_indirect_long(bus); self.cmp_mem(bus, ea, 6) }
            0xC1 => { let ea = self.ea_indexed_indirect(bus); self.cmp_mem(bus, ea, 6) }
            0xD1 => { let ea = self.ea_indirect_y_read(bus); self.cmp_mem(bus, ea, 5) }
            0xD7 => { let ea = self.ea_indirect_long_y(bus); self.cmp_mem(bus, ea, 6) }
            0xCD => { let ea = self.ea_absolute(bus); self.cmp_mem(bus, ea, 4) }
            0xDD => { let ea = self.ea_absolute_x_read(bus); self.cmp_mem(bus, ea, 4) }
            0xD9 => { let ea = self.ea_absolute_y_read(bus); self.cmp_mem(bus, ea, 4) }
            0xCF => { let ea = self.ea_long(bus); self.cmp_mem(bus, ea, 5) }
            0xDF => { let ea = self.ea_long_x(bus); self.cmp_mem(bus, ea, 5) }
            0xC3 => { let ea = self.ea_stack_relative(bus); self.cmp_mem(bus, ea, 4) }
            0xD3 => { let ea = self.ea_stack_relative_y(bus); self.cmp_mem(bus, ea, 7) }

            0xE0 => self.cpx_immediate(bus),
            0xE4 => { let ea = self.ea_direct(bus); self.cpx_mem(bus, ea, 3) }
            0xEC => { let ea = self.ea_absolute(bus); self.cpx_mem(bus, ea, 4) }

            0xC0 => self.cpy_immediate(bus),
            0xC4 => { let ea = self.ea_direct(bus); self.cpy_mem(bus, ea, 3) }
            0xCC => { let ea = self.ea_absolute(bus); self.cpy_mem(bus, ea, 4) }

            // ===== BIT =====
            0x89 => self.bit_immediate(bus),
            0x24 => { let ea = self.ea_direct(bus); self.bit_mem(bus, ea, 3) }
            0x34 => { let ea = self.ea_direct_x(bus); self.bit_mem(bus, ea, 4) }
            0x2C => { let ea = self.ea_absolute(bus); self.bit_mem(bus, ea, 4) }
            0x3C => { let ea = self.ea_absolute_x_read(bus); self.bit_mem(bus, ea, 4) }

            // ===== SHIFTS AND ROTATES =====
            0x0A => self.asl_accumulator(),
            0x06 => { let ea = self.ea_direct(bus); self.asl_mem(bus, ea, 5) }
            0x16 => { let ea = self.ea_direct_x(bus); self.asl_mem(bus, ea, 6) }
            0x0E => { let ea = self.ea_absolute(bus); self.asl_mem(bus, ea, 6) }
            0x1E => { let ea = self.ea_absolute_x_store(bus); self.asl_mem(bus, ea, 7) }

            0x4A => self.lsr_accumulator(),
            0x46 => { let ea = self.ea_direct(bus); self.lsr_mem(bus, ea, 5) }
            0x56 => { let ea = self.ea_direct_x(bus); self.lsr_mem(bus, ea, 6) }
            0x4E => { let ea = self.ea_absolute(bus); self.lsr_mem(bus, ea, 6) }
            0x5E => { let ea = self.ea_absolute_x_store(bus); self.lsr_mem(bus, ea, 7) }

            0x2A => self.rol_accumulator(),
            0x26 => { let ea = self.ea_direct(bus); self.rol_mem(bus, ea, 5) }
            0x36 => { let ea = self.ea_direct_x(bus); self.rol_mem(bus, ea, 6) }
            0x2E => { let ea = self.ea_absolute(bus); self.rol_mem(bus, ea, 6) }
            0x3E => { let ea = self.ea_absolute_x_store(bus); self.rol_mem(bus, ea, 7) }

            0x6A => self.ror_accumulator(),
            0x66 => { let ea = self.ea_direct(bus); self.ror_mem(bus, ea, 5) }
            0x76 => { let ea = self.ea_direct_x(bus); self.ror_mem(bus, ea, 6) }
            0x6E => { let ea = self.ea_absolute(bus); self.ror_mem(bus, ea, 6) }
            0x7E => { let ea = self.ea_absolute_x_store(bus); self.ror_mem(bus, ea, 7) }

            // ===== INCREMENT / DECREMENT =====
            0x1A => self.inc_accumulator(),
            0xE6 => { let ea = self.ea_direct(bus); self.inc_mem(bus, ea, 5) }
            0xF6 => { let ea = self.ea_direct_x(bus); self.inc_mem(bus, ea, 6) }
            0xEE => { let ea = self.ea_absolute(bus); self.inc_mem(bus, ea, 6) }
            0xFE => { let ea = self.ea_absolute_x_store(bus); self.inc_mem(bus, ea, 7) }

            0x3A => self.dec_accumulator(),
            0xC6 => { let ea = self.ea_direct(bus); self.dec_mem(bus, ea, 5) }
            0xD6 => { let ea = self.ea_direct_x(bus); self.dec_mem(bus, ea, 6) }
            0xCE => { let ea = self.ea_absolute(bus); self.dec_mem(bus, ea, 6) }
            0xDE => { let ea = self.ea_absolute_x_store(bus); self.dec_mem(bus, ea, 7) }

            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // ===== TEST AND SET/RESET =====
            0x04 => { let ea = self.ea_direct(bus); self.tsb_mem(bus, ea, 5) }
            0x0C => { let ea = self.ea_absolute(bus); self.tsb_mem(bus, ea, 6) }
            0x14 => { let ea = self.ea_direct(bus); self.trb_mem(bus, ea, 5) }
            0x1C => { let ea = self.ea_absolute(bus); self.trb_mem(bus, ea, 6) }

            // ===== BRANCHES =====
            0x10 => { let cond = !self.p.n; self.branch_if(bus, cond) }
            0x30 => { let cond = self.p.n; self.branch_if(bus, cond) }
            0x50 => { let cond = !self.p.v; self.branch_if(bus, cond) }
            0x70 => { let cond = self.p.v; self.branch_if(bus, cond) }
            0x90 => { let cond = !self.p.c; self.branch_if(bus, cond) }
            0xB0 => { let cond = self.p.c; self.branch_if(bus, cond) }
            0xD0 => { let cond = !self.p.z; self.branch_if(bus, cond) }
            0xF0 => { let cond = self.p.z; self.branch_if(bus, cond) }
            0x80 => self.branch_if(bus, true),
            0x82 => self.brl(bus),

            // ===== JUMPS AND SUBROUTINES =====
            0x4C => self.jmp_absolute(bus),
            0x6C => self.jmp_absolute_indirect(bus),
            0xDC => self.jmp_absolute_indirect_long(bus),
            0x7C => self.jmp_absolute_indexed_indirect(bus),
            0x5C => self.jmp_long(bus),
            0x20 => self.jsr_absolute(bus),
            0x22 => self.jsr_long(bus),
            0xFC => self.jsr_absolute_indexed_indirect(bus),
            0x60 => self.rts(bus),
            0x6B => self.rtl(bus),

            // ===== SOFTWARE INTERRUPTS =====
            0x00 => self.brk(bus),
            0x02 => self.cop(bus),
            0x40 => self.rti(bus),

            // ===== STACK =====
            0x48 => self.pha(bus),
            0x68 => self.pla(bus),
            0xDA => self.phx(bus),
            0xFA => self.plx(bus),
            0x5A => self.phy(bus),
            0x7A => self.ply(bus),
            0x08 => self.php(bus),
            0x28 => self.plp(bus),
            0x8B => self.phb(bus),
            0xAB => self.plb(bus),
            0x0B => self.phd(bus),
            0x2B => self.pld(bus),
            0x4B => self.phk(bus),
            0xF4 => self.pea(bus),
            0xD4 => { let ea = self.ea_direct(bus); self.pei(bus, ea) }
            0x62 => self.per(bus),

            // ===== BLOCK MOVES =====
            0x54 => self.mvn(bus),
            0x44 => self.mvp(bus),

            // ===== TRANSFERS =====
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x98 => self.tya(),
            0x9B => self.txy(),
            0xBB => self.tyx(),
            0xBA => self.tsx(),
            0x9A => self.txs(),
            0x1B => self.tcs(),
            0x3B => self.tsc(),
            0x5B => self.tcd(),
            0x7B => self.tdc(),

            // ===== FLAG OPERATIONS =====
            0x18 => self.clc(),
            0xD8 => self.cld(),
            0x58 => self.cli(),
            0xB8 => self.clv(),
            0x38 => self.sec(),
            0xF8 => self.sed(),
            0x78 => self.sei(),
            0xC2 => self.rep(bus),
            0xE2 => self.sep(bus),

            // ===== SYSTEM =====
            0xEB => self.xba(),
            0xFB => self.xce(),
            0xEA => self.nop(),
            0x42 => self.wdm(bus),
            0xCB => self.wai(),
            0xDB => self.stp(),
        }
    }
}
