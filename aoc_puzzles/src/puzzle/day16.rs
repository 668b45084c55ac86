use aoc_core::error::Error;
use aoc_core::parser::{integer, parse_line, unsigned};
use aoc_core::Result;
use nom::{
    bytes::complete::tag,
    character::complete::{char, space1},
    combinator::map,
    sequence::{delimited, preceded, tuple},
    IResult,
};
use tracing::debug;

use crate::device::{execute, Opcode, Value};

pub type Registers = [Value; 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawInstruction {
    pub opcode: usize,
    pub a: Value,
    pub b: Value,
    pub c: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub before: Registers,
    pub instruction: RawInstruction,
    pub after: Registers,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manual {
    pub samples: Vec<Sample>,
    pub program: Vec<RawInstruction>,
}

fn registers(input: &str) -> IResult<&str, Registers> {
    map(
        delimited(
            char('['),
            tuple((
                integer,
                preceded(tag(", "), integer),
                preceded(tag(", "), integer),
                preceded(tag(", "), integer),
            )),
            char(']'),
        ),
        |(a, b, c, d)| [a, b, c, d],
    )(input)
}

fn raw_instruction(input: &str) -> IResult<&str, RawInstruction> {
    map(
        tuple((
            unsigned,
            preceded(space1, integer),
            preceded(space1, integer),
            preceded(space1, integer),
        )),
        |(opcode, a, b, c)| RawInstruction { opcode, a, b, c },
    )(input)
}

pub fn parse_input(input: &str) -> Result<Manual> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty()).peekable();
    let mut samples = vec![];
    while let Some(line) = lines.next_if(|line| line.starts_with("Before:")) {
        let before = parse_line(line, preceded(tag("Before: "), registers), "sample")?;
        let mut next = || {
            lines
                .next()
                .ok_or_else(|| Error::parse("sample", "truncated sample"))
        };
        let instruction = parse_line(next()?, raw_instruction, "sample")?;
        let after = parse_line(next()?, preceded(tag("After:  "), registers), "sample")?;
        samples.push(Sample {
            before,
            instruction,
            after,
        });
    }
    let program = lines
        .map(|line| parse_line(line, raw_instruction, "test program"))
        .collect::<Result<Vec<_>>>()?;
    if let Some(ins) = samples
        .iter()
        .map(|s| &s.instruction)
        .chain(program.iter())
        .find(|ins| ins.opcode >= Opcode::ALL.len())
    {
        return Err(Error::parse(
            "test program",
            format!("opcode number {} out of range", ins.opcode),
        ));
    }
    Ok(Manual { samples, program })
}

/// Bit set of the opcodes that behave like the sample.
pub fn matching_opcodes(sample: &Sample) -> u16 {
    let ins = &sample.instruction;
    let mut mask = 0;
    for (k, &op) in Opcode::ALL.iter().enumerate() {
        if execute(op, ins.a, ins.b, ins.c, &sample.before) == Some(sample.after) {
            mask |= 1 << k;
        }
    }
    mask
}

pub fn count_ambiguous_samples(samples: &[Sample]) -> usize {
    samples
        .iter()
        .filter(|s| matching_opcodes(s).count_ones() >= 3)
        .count()
}

/// Counts assignments consistent with `candidates`, stopping at two. The first
/// one found is left in `found`.
fn count_assignments(
    candidates: &[u16; 16],
    assigned: &mut [Option<usize>; 16],
    used: u16,
    found: &mut Option<[Option<usize>; 16]>,
) -> usize {
    let next = (0..16)
        .filter(|&n| assigned[n].is_none())
        .min_by_key(|&n| (candidates[n] & !used).count_ones());
    let n = match next {
        Some(n) => n,
        None => {
            found.get_or_insert(*assigned);
            return 1;
        }
    };
    let mut count = 0;
    for k in 0..16 {
        if candidates[n] & !used & (1 << k) != 0 {
            assigned[n] = Some(k);
            count += count_assignments(candidates, assigned, used | (1 << k), found);
            if count >= 2 {
                break;
            }
        }
    }
    assigned[n] = None;
    count
}

/// Opcode behind every opcode number, if the samples pin down exactly one
/// consistent assignment.
pub fn resolve_opcodes(samples: &[Sample]) -> Option<[Opcode; 16]> {
    let mut candidates = [u16::MAX; 16];
    for s in samples {
        candidates[s.instruction.opcode] &= matching_opcodes(s);
    }
    let mut found = None;
    match count_assignments(&candidates, &mut [None; 16], 0, &mut found) {
        1 => (),
        0 => {
            debug!("no opcode assignment fits the samples");
            return None;
        }
        _ => {
            debug!("samples leave the opcode assignment ambiguous");
            return None;
        }
    }
    let assigned = found?;
    let mut ret = [Opcode::Addr; 16];
    for n in 0..16 {
        ret[n] = Opcode::ALL[assigned[n]?];
        debug!("opcode {} is {}", n, ret[n]);
    }
    Some(ret)
}

pub fn run_program(opcodes: &[Opcode; 16], program: &[RawInstruction]) -> Option<Registers> {
    let mut regs = [0; 4];
    for ins in program {
        regs = execute(opcodes[ins.opcode], ins.a, ins.b, ins.c, &regs)?;
    }
    Some(regs)
}

pub fn register0_after_program(manual: &Manual) -> Option<Value> {
    let opcodes = resolve_opcodes(&manual.samples)?;
    run_program(&opcodes, &manual.program).map(|regs| regs[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day16_sample() {
        let manual = parse_input("Before: [3, 2, 1, 1]\n9 2 1 2\nAfter:  [3, 2, 2, 1]\n\n\n\n9 0 0 0\n").unwrap();
        assert_eq!(manual.samples.len(), 1);
        assert_eq!(manual.program.len(), 1);
        let mask = matching_opcodes(&manual.samples[0]);
        assert_eq!(mask.count_ones(), 3);
        for op in [Opcode::Mulr, Opcode::Addi, Opcode::Seti] {
            let k = Opcode::ALL.iter().position(|&o| o == op).unwrap();
            assert!(mask & (1 << k) != 0, "{}", op);
        }
        assert_eq!(count_ambiguous_samples(&manual.samples), 1);
    }

    fn sample_for(op: Opcode, opcode: usize, before: Registers, a: Value, b: Value, c: Value) -> Sample {
        Sample {
            before,
            instruction: RawInstruction { opcode, a, b, c },
            after: execute(op, a, b, c, &before).unwrap(),
        }
    }

    #[test]
    fn test_day16_resolve_and_run() {
        // Opcode numbers are the reverse of the declaration order; samples with
        // varied registers pin every opcode down.
        let mut samples = vec![];
        let befores = [[3, 5, 9, 12], [7, 1, 0, 7], [0, 2, 2, 0], [6, 6, 3, 1], [1, 0, 14, 2]];
        for (k, &op) in Opcode::ALL.iter().enumerate() {
            for before in befores {
                for (a, b, c) in [(0, 1, 2), (2, 3, 1), (3, 0, 0), (1, 1, 3)] {
                    samples.push(sample_for(op, 15 - k, before, a, b, c));
                }
            }
        }
        let opcodes = resolve_opcodes(&samples).unwrap();
        for (k, &op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(opcodes[15 - k], op);
        }

        // seti 7 _ 0; seti 5 _ 1; mulr 0 1 0
        let program = vec![
            RawInstruction { opcode: 6, a: 7, b: 0, c: 0 },
            RawInstruction { opcode: 6, a: 5, b: 0, c: 1 },
            RawInstruction { opcode: 13, a: 0, b: 1, c: 0 },
        ];
        assert_eq!(run_program(&opcodes, &program), Some([35, 5, 0, 0]));
    }

    #[test]
    fn test_day16_underdetermined_opcodes() {
        let no_samples = parse_input("9 7 0 0\n").unwrap();
        assert_eq!(resolve_opcodes(&no_samples.samples), None);
        assert_eq!(register0_after_program(&no_samples), None);

        let one_sample = parse_input("Before: [3, 2, 1, 1]\n9 2 1 2\nAfter:  [3, 2, 2, 1]\n\n\n\n9 0 0 0\n").unwrap();
        assert_eq!(resolve_opcodes(&one_sample.samples), None);
    }

    #[test]
    fn test_day16_contradictory_samples() {
        let mut samples = vec![];
        for (k, &op) in Opcode::ALL.iter().enumerate() {
            for before in [[3, 5, 9, 12], [7, 1, 0, 7], [0, 2, 2, 0]] {
                for (a, b, c) in [(0, 1, 2), (2, 3, 1), (3, 0, 0)] {
                    samples.push(sample_for(op, k, before, a, b, c));
                }
            }
        }
        assert!(resolve_opcodes(&samples).is_some());
        // Number 2 (mulr) behaving like addi leaves it without candidates.
        samples.push(sample_for(Opcode::Addi, 2, [1, 2, 3, 4], 0, 100, 3));
        assert_eq!(resolve_opcodes(&samples), None);
    }

    #[test]
    fn test_day16_parse_errors() {
        assert!(parse_input("Before: [3, 2, 1, 1]\n9 2 1 2\n").is_err());
        assert!(parse_input("16 0 0 0\n").is_err());
    }
}
