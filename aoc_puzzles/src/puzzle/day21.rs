use std::collections::HashSet;

use aoc_core::error::Error;
use aoc_core::Result;
use tracing::{debug, info};

use crate::device::{Opcode, Program, Value};

pub fn parse_input(input: &str) -> Result<Program> {
    Program::parse(input)
}

/// The hash the program iterates until it equals register 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HaltHash {
    /// Or-ed into the previous value to start a round (`bori _ C _`).
    pub spread: Value,
    pub seed: Value,
    pub multiplier: Value,
    pub mask: Value,
}

impl HaltHash {
    /// Reads the constants off the instructions following `bori _ C _`.
    pub fn from_program(program: &Program) -> Result<HaltHash> {
        let missing = |what: &str| Error::parse("program", format!("no {} found", what));
        let ins = &program.instructions;
        let start = ins
            .iter()
            .position(|i| i.op == Opcode::Bori)
            .ok_or_else(|| missing("bori"))?;
        let spread = ins[start].b;
        let rest = &ins[start + 1..];
        let seed = rest
            .first()
            .filter(|i| i.op == Opcode::Seti)
            .ok_or_else(|| missing("seed"))?
            .a;
        let find = |op: Opcode, skip: Value| rest.iter().find(|i| i.op == op && i.b != skip);
        let mask = find(Opcode::Bani, 255).ok_or_else(|| missing("mask"))?.b;
        let multiplier = find(Opcode::Muli, 256).ok_or_else(|| missing("multiplier"))?.b;
        let hash = HaltHash {
            spread,
            seed,
            multiplier,
            mask,
        };
        debug!("{:?}", hash);
        Ok(hash)
    }

    pub fn next_value(&self, prev: Value) -> Value {
        let mut bytes = prev | self.spread;
        let mut value = self.seed;
        loop {
            value = (((value + (bytes & 0xff)) & self.mask) * self.multiplier) & self.mask;
            if bytes < 256 {
                return value;
            }
            bytes >>= 8;
        }
    }

    /// Values compared against register 0, in the order the program produces them.
    pub fn values(self) -> impl Iterator<Item = Value> {
        let mut prev = 0;
        std::iter::from_fn(move || {
            prev = self.next_value(prev);
            Some(prev)
        })
    }
}

/// Register 0 value halting the program after the fewest instructions.
pub fn fastest_halt(hash: HaltHash) -> Option<Value> {
    hash.values().next()
}

/// Register 0 value halting the program after the most instructions: the
/// last new value before the sequence starts repeating.
pub fn slowest_halt(hash: HaltHash) -> Option<Value> {
    let mut seen = HashSet::new();
    let mut last = None;
    for v in hash.values() {
        if !seen.insert(v) {
            info!("sequence repeats after {} values", seen.len());
            return last;
        }
        last = Some(v);
    }
    None
}

/// Address and register of the `eqrr` comparing a register with register 0.
pub fn halt_check(program: &Program) -> Option<(usize, usize)> {
    program
        .instructions
        .iter()
        .enumerate()
        .find_map(|(pc, i)| match (i.op, i.a, i.b) {
            (Opcode::Eqrr, 0, r) | (Opcode::Eqrr, r, 0) => Some((pc, usize::try_from(r).ok()?)),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Machine, Stop, NUM_REGISTERS};

    const PROGRAM: &str = "#ip 1
seti 123 0 3
bani 3 456 3
eqri 3 72 3
addr 3 1 1
seti 0 0 1
seti 0 9 3
bori 3 65536 5
seti 7637914 3 3
bani 5 255 2
addr 3 2 3
bani 3 16777215 3
muli 3 65899 3
bani 3 16777215 3
gtir 256 5 2
addr 2 1 1
addi 1 1 1
seti 27 3 1
seti 0 9 2
addi 2 1 4
muli 4 256 4
gtrr 4 5 4
addr 4 1 1
addi 1 1 1
seti 25 1 1
addi 2 1 2
seti 17 8 1
setr 2 2 5
seti 7 9 1
eqrr 3 0 2
addr 2 1 1
seti 5 3 1
";

    #[test]
    fn test_day21_constants() {
        let program = parse_input(PROGRAM).unwrap();
        assert_eq!(
            HaltHash::from_program(&program).unwrap(),
            HaltHash {
                spread: 65536,
                seed: 7637914,
                multiplier: 65899,
                mask: 16777215,
            }
        );
        assert_eq!(halt_check(&program), Some((28, 3)));
    }

    #[test]
    fn test_day21_answers() {
        let hash = HaltHash::from_program(&parse_input(PROGRAM).unwrap()).unwrap();
        assert_eq!(fastest_halt(hash), Some(2792537));
        assert_eq!(slowest_halt(hash), Some(10721810));
    }

    #[test]
    fn test_day21_matches_machine() {
        let program = parse_input(PROGRAM).unwrap();
        let hash = HaltHash::from_program(&program).unwrap();
        let (check_pc, reg) = halt_check(&program).unwrap();

        let mut machine = Machine::new(&program, [0; NUM_REGISTERS]);
        let mut observed = vec![];
        machine.run_until(1_000_000, |pc, regs| {
            if pc == check_pc {
                observed.push(regs[reg]);
            }
            observed.len() == 5
        });
        assert_eq!(observed, hash.values().take(5).collect::<Vec<_>>());

        let mut registers = [0; NUM_REGISTERS];
        registers[0] = 2792537;
        let mut machine = Machine::new(&program, registers);
        assert_eq!(machine.run(10_000), Stop::Halted);
    }

    #[test]
    fn test_day21_missing_constants() {
        let program = parse_input("#ip 1\nseti 1 0 0\n").unwrap();
        assert!(HaltHash::from_program(&program).is_err());
    }
}
