// The wrist device of days 16, 19 and 21: a small register machine with 16 opcodes.
//
// Every instruction has the form `op A B C`. Depending on the opcode, A and B are
// either register numbers or immediate values; C is always the output register.
// Programs of days 19 and 21 additionally bind the instruction pointer to one of
// the registers (`#ip N`).

use std::fmt;
use std::str::FromStr;

use aoc_core::error::{Error, Result};
use aoc_core::parser::{integer, parse_line, parse_lines, unsigned};
use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, space1},
    combinator::{map, map_res},
    sequence::{preceded, tuple},
    IResult,
};

pub type Value = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Opcode {
    Addr,
    Addi,
    Mulr,
    Muli,
    Banr,
    Bani,
    Borr,
    Bori,
    Setr,
    Seti,
    Gtir,
    Gtri,
    Gtrr,
    Eqir,
    Eqri,
    Eqrr,
}

impl Opcode {
    pub const ALL: [Opcode; 16] = [
        Opcode::Addr,
        Opcode::Addi,
        Opcode::Mulr,
        Opcode::Muli,
        Opcode::Banr,
        Opcode::Bani,
        Opcode::Borr,
        Opcode::Bori,
        Opcode::Setr,
        Opcode::Seti,
        Opcode::Gtir,
        Opcode::Gtri,
        Opcode::Gtrr,
        Opcode::Eqir,
        Opcode::Eqri,
        Opcode::Eqrr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Addr => "addr",
            Opcode::Addi => "addi",
            Opcode::Mulr => "mulr",
            Opcode::Muli => "muli",
            Opcode::Banr => "banr",
            Opcode::Bani => "bani",
            Opcode::Borr => "borr",
            Opcode::Bori => "bori",
            Opcode::Setr => "setr",
            Opcode::Seti => "seti",
            Opcode::Gtir => "gtir",
            Opcode::Gtri => "gtri",
            Opcode::Gtrr => "gtrr",
            Opcode::Eqir => "eqir",
            Opcode::Eqri => "eqri",
            Opcode::Eqrr => "eqrr",
        }
    }
}

impl FromStr for Opcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Opcode> {
        Opcode::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::parse("opcode", format!("unknown opcode {:?}", s)))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Applies one instruction to `regs`. Returns `None` if A, B or C names a
/// register that does not exist.
pub fn execute<const N: usize>(
    op: Opcode,
    a: Value,
    b: Value,
    c: Value,
    regs: &[Value; N],
) -> Option<[Value; N]> {
    let reg = |r: Value| -> Option<Value> {
        usize::try_from(r).ok().filter(|&r| r < N).map(|r| regs[r])
    };
    let value = match op {
        Opcode::Addr => reg(a)?.wrapping_add(reg(b)?),
        Opcode::Addi => reg(a)?.wrapping_add(b),
        Opcode::Mulr => reg(a)?.wrapping_mul(reg(b)?),
        Opcode::Muli => reg(a)?.wrapping_mul(b),
        Opcode::Banr => reg(a)? & reg(b)?,
        Opcode::Bani => reg(a)? & b,
        Opcode::Borr => reg(a)? | reg(b)?,
        Opcode::Bori => reg(a)? | b,
        Opcode::Setr => reg(a)?,
        Opcode::Seti => a,
        Opcode::Gtir => (a > reg(b)?) as Value,
        Opcode::Gtri => (reg(a)? > b) as Value,
        Opcode::Gtrr => (reg(a)? > reg(b)?) as Value,
        Opcode::Eqir => (a == reg(b)?) as Value,
        Opcode::Eqri => (reg(a)? == b) as Value,
        Opcode::Eqrr => (reg(a)? == reg(b)?) as Value,
    };
    let c = usize::try_from(c).ok().filter(|&c| c < N)?;
    let mut ret = *regs;
    ret[c] = value;
    Some(ret)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub op: Opcode,
    pub a: Value,
    pub b: Value,
    pub c: Value,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.op, self.a, self.b, self.c)
    }
}

fn opcode(input: &str) -> IResult<&str, Opcode> {
    map_res(alpha1, str::parse)(input)
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    map(
        tuple((
            opcode,
            preceded(space1, integer),
            preceded(space1, integer),
            preceded(space1, integer),
        )),
        |(op, a, b, c)| Instruction { op, a, b, c },
    )(input)
}

pub const NUM_REGISTERS: usize = 6;

pub type Registers = [Value; NUM_REGISTERS];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub ip_register: usize,
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn parse(input: &str) -> Result<Program> {
        let mut lines = input.lines().skip_while(|line| line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| Error::parse("program", "empty input"))?;
        let ip_register = parse_line(header, preceded(tag("#ip "), unsigned), "program")?;
        if ip_register >= NUM_REGISTERS {
            return Err(Error::parse(
                "program",
                format!("instruction pointer bound to missing register {}", ip_register),
            ));
        }
        let rest = lines.collect::<Vec<_>>().join("\n");
        let instructions = parse_lines(&rest, instruction, "program")?;
        Ok(Program {
            ip_register,
            instructions,
        })
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    /// The instruction pointer left the program.
    Halted,
    /// The breakpoint predicate fired before executing the instruction at this address.
    Breakpoint(usize),
    CycleLimit,
    /// The instruction at this address referenced a missing register.
    Fault(usize),
}

pub struct Machine<'a> {
    program: &'a Program,
    pub registers: Registers,
    /// Address of the next instruction. Written to the bound register before
    /// each instruction and read back (plus one) after it.
    pub ip: Value,
    pub cycles: u64,
}

impl<'a> Machine<'a> {
    pub fn new(program: &'a Program, registers: Registers) -> Machine<'a> {
        Machine {
            program,
            registers,
            ip: 0,
            cycles: 0,
        }
    }

    /// Address of the next instruction, `None` once the machine has halted.
    pub fn pc(&self) -> Option<usize> {
        usize::try_from(self.ip)
            .ok()
            .filter(|&pc| pc < self.program.len())
    }

    fn step_at(&mut self, pc: usize) -> bool {
        let ins = &self.program.instructions[pc];
        let ip_register = self.program.ip_register;
        let mut regs = self.registers;
        regs[ip_register] = pc as Value;
        match execute(ins.op, ins.a, ins.b, ins.c, &regs) {
            Some(regs) => {
                self.registers = regs;
                self.ip = regs[ip_register] + 1;
                self.cycles += 1;
                true
            }
            None => false,
        }
    }

    /// Runs until halting, until `breakpoint(pc, registers)` returns true, or
    /// until `max_cycles` instructions have been executed.
    pub fn run_until<F>(&mut self, max_cycles: u64, mut breakpoint: F) -> Stop
    where
        F: FnMut(usize, &Registers) -> bool,
    {
        let limit = self.cycles.saturating_add(max_cycles);
        loop {
            let pc = match self.pc() {
                Some(pc) => pc,
                None => return Stop::Halted,
            };
            if breakpoint(pc, &self.registers) {
                return Stop::Breakpoint(pc);
            }
            if self.cycles >= limit {
                return Stop::CycleLimit;
            }
            if !self.step_at(pc) {
                return Stop::Fault(pc);
            }
        }
    }

    pub fn run(&mut self, max_cycles: u64) -> Stop {
        self.run_until(max_cycles, |_, _| false)
    }
}
