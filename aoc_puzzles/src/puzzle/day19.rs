use aoc_core::error::Error;
use aoc_core::Result;
use tracing::{debug, info};

use crate::device::{Machine, Program, Stop, Value, NUM_REGISTERS};

pub const MAX_CYCLES: u64 = 100_000_000;

pub fn parse_input(input: &str) -> Result<Program> {
    Program::parse(input)
}

/// Register 0 once the program halts, starting with `r0` in register 0.
pub fn register0_after_halt(program: &Program, r0: Value, max_cycles: u64) -> Result<Value> {
    let mut registers = [0; NUM_REGISTERS];
    registers[0] = r0;
    let mut machine = Machine::new(program, registers);
    match machine.run(max_cycles) {
        Stop::Halted => {
            debug!("halted after {} cycles", machine.cycles);
            Ok(machine.registers[0])
        }
        Stop::Fault(pc) => Err(Error::parse(
            "program",
            format!("instruction {} uses a missing register", pc),
        )),
        _ => Err(Error::NoSolution("program did not halt within the cycle limit")),
    }
}

pub fn sum_of_divisors(n: Value) -> Value {
    let mut ret = 0;
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            ret += d;
            if d * d != n {
                ret += n / d;
            }
        }
        d += 1;
    }
    ret
}

/// The program sums the divisors of a number it computes in its setup code.
/// Runs the setup only, stopping at the first backward jump into the main
/// loop, and sums the divisors of the largest register directly.
pub fn divisor_sum_shortcut(program: &Program, r0: Value) -> Result<Value> {
    let mut registers = [0; NUM_REGISTERS];
    registers[0] = r0;
    let mut machine = Machine::new(program, registers);
    let mut last = None;
    let stop = machine.run_until(MAX_CYCLES, |pc, _| {
        let back = last.map_or(false, |l| pc < l);
        last = Some(pc);
        back
    });
    match stop {
        Stop::Breakpoint(pc) => {
            let target = machine.registers.iter().copied().max().unwrap_or(0);
            info!("main loop entered at {}; target {}", pc, target);
            Ok(sum_of_divisors(target))
        }
        Stop::Halted => Ok(machine.registers[0]),
        Stop::Fault(pc) => Err(Error::parse(
            "program",
            format!("instruction {} uses a missing register", pc),
        )),
        Stop::CycleLimit => Err(Error::NoSolution("setup code did not finish")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "#ip 0
seti 5 0 1
seti 6 0 2
addi 0 1 0
addr 1 2 3
setr 1 0 0
seti 8 0 4
seti 9 0 5
";

    // Sums the divisors of 978 (or of 10551378 when register 0 starts at 1).
    const DIVISORS: &str = "#ip 3
addi 3 16 3
seti 1 0 4
seti 1 7 2
mulr 4 2 1
eqrr 1 5 1
addr 1 3 3
addi 3 1 3
addr 4 0 0
addi 2 1 2
gtrr 2 5 1
addr 3 1 3
seti 2 3 3
addi 4 1 4
gtrr 4 5 1
addr 1 3 3
seti 1 6 3
mulr 3 3 3
addi 5 2 5
mulr 5 5 5
mulr 3 5 5
muli 5 11 5
addi 1 6 1
mulr 1 3 1
addi 1 10 1
addr 5 1 5
addr 3 0 3
seti 0 6 3
setr 3 1 1
mulr 1 3 1
addr 3 1 1
mulr 3 1 1
muli 1 14 1
mulr 1 3 1
addr 5 1 5
seti 0 0 0
seti 0 3 3
";

    #[test]
    fn test_day19_example() {
        let program = parse_input(EXAMPLE).unwrap();
        assert_eq!(register0_after_halt(&program, 0, 1000).unwrap(), 6);
    }

    #[test]
    fn test_day19_sum_of_divisors() {
        assert_eq!(sum_of_divisors(1), 1);
        assert_eq!(sum_of_divisors(12), 28);
        assert_eq!(sum_of_divisors(25), 31);
        assert_eq!(sum_of_divisors(978), 1968);
        assert_eq!(sum_of_divisors(10551378), 21211200);
    }

    #[test]
    fn test_day19_shortcut_matches_simulation() {
        let program = parse_input(DIVISORS).unwrap();
        assert_eq!(register0_after_halt(&program, 0, MAX_CYCLES).unwrap(), 1968);
        assert_eq!(divisor_sum_shortcut(&program, 0).unwrap(), 1968);
        assert_eq!(divisor_sum_shortcut(&program, 1).unwrap(), 21211200);
    }

    #[test]
    fn test_day19_cycle_limit() {
        let program = parse_input(DIVISORS).unwrap();
        assert!(register0_after_halt(&program, 0, 1000).is_err());
    }
}
