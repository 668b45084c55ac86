use std::cmp::Reverse;

use aoc_core::error::Error;
use aoc_core::parser::{parse_line, unsigned};
use aoc_core::Result;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::alpha1,
    combinator::{map, opt, value},
    multi::separated_list1,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Army {
    ImmuneSystem,
    Infection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub army: Army,
    pub units: i64,
    pub hit_points: i64,
    pub weaknesses: Vec<String>,
    pub immunities: Vec<String>,
    pub damage: i64,
    pub attack_type: String,
    pub initiative: i64,
}

impl Group {
    pub fn effective_power(&self) -> i64 {
        self.units * self.damage
    }

    /// Damage this group would deal to `other`, taking weaknesses and immunities into account.
    pub fn damage_to(&self, other: &Group) -> i64 {
        if other.immunities.contains(&self.attack_type) {
            0
        } else if other.weaknesses.contains(&self.attack_type) {
            self.effective_power() * 2
        } else {
            self.effective_power()
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Trait {
    Weak,
    Immune,
}

fn traits(input: &str) -> IResult<&str, Vec<(Trait, Vec<&str>)>> {
    delimited(
        tag("("),
        separated_list1(
            tag("; "),
            separated_pair(
                alt((value(Trait::Weak, tag("weak")), value(Trait::Immune, tag("immune")))),
                tag(" to "),
                separated_list1(tag(", "), alpha1),
            ),
        ),
        tag(") "),
    )(input)
}

fn group(army: Army) -> impl FnMut(&str) -> IResult<&str, Group> {
    move |input: &str| {
        map(
            tuple((
                terminated(unsigned, tag(" units each with ")),
                terminated(unsigned, tag(" hit points ")),
                opt(traits),
                preceded(tag("with an attack that does "), unsigned),
                delimited(tag(" "), alpha1, tag(" damage at initiative ")),
                unsigned,
            )),
            |(units, hit_points, traits, damage, attack_type, initiative)| {
                let mut weaknesses = vec![];
                let mut immunities = vec![];
                for (kind, types) in traits.unwrap_or_default() {
                    let types = types.into_iter().map(String::from);
                    match kind {
                        Trait::Weak => weaknesses.extend(types),
                        Trait::Immune => immunities.extend(types),
                    }
                }
                Group {
                    army,
                    units,
                    hit_points,
                    weaknesses,
                    immunities,
                    damage,
                    attack_type: String::from(attack_type),
                    initiative,
                }
            },
        )(input)
    }
}

pub fn parse_input(input: &str) -> Result<Vec<Group>> {
    let mut groups = vec![];
    let mut army = None;
    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match line {
            "Immune System:" => army = Some(Army::ImmuneSystem),
            "Infection:" => army = Some(Army::Infection),
            _ => {
                let army = army
                    .ok_or_else(|| Error::parse("armies", "group before any army header"))?;
                groups.push(parse_line(line, group(army), "armies")?);
            }
        }
    }
    Ok(groups)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory { winner: Army, units: i64 },
    /// A full round in which no unit died; the fight would go on forever.
    Stalemate,
}

pub fn fight(groups: &[Group], boost: i64) -> Outcome {
    let mut groups = groups.to_vec();
    for g in &mut groups {
        if g.army == Army::ImmuneSystem {
            g.damage += boost;
        }
    }
    let n = groups.len();

    loop {
        let alive = |army| groups.iter().any(|g| g.army == army && g.units > 0);
        match (alive(Army::ImmuneSystem), alive(Army::Infection)) {
            (true, true) => (),
            (immune, _) => {
                let winner = if immune {
                    Army::ImmuneSystem
                } else {
                    Army::Infection
                };
                let units = groups.iter().map(|g| g.units).sum();
                return Outcome::Victory { winner, units };
            }
        }

        let mut order = (0..n).filter(|&i| groups[i].units > 0).collect::<Vec<_>>();
        order.sort_by_key(|&i| Reverse((groups[i].effective_power(), groups[i].initiative)));
        let mut targeted = vec![false; n];
        let mut target = vec![None; n];
        for &i in &order {
            let attacker = &groups[i];
            let choice = (0..n)
                .filter(|&j| !targeted[j] && groups[j].units > 0 && groups[j].army != attacker.army)
                .map(|j| {
                    let g = &groups[j];
                    (attacker.damage_to(g), g.effective_power(), g.initiative, j)
                })
                .filter(|&(damage, ..)| damage > 0)
                .max();
            if let Some((.., j)) = choice {
                targeted[j] = true;
                target[i] = Some(j);
            }
        }

        order.sort_by_key(|&i| Reverse(groups[i].initiative));
        let mut killed = 0;
        for i in order {
            if groups[i].units <= 0 {
                continue;
            }
            if let Some(j) = target[i] {
                let damage = groups[i].damage_to(&groups[j]);
                let defender = &mut groups[j];
                let k = (damage / defender.hit_points).min(defender.units);
                defender.units -= k;
                killed += k;
            }
        }
        if killed == 0 {
            return Outcome::Stalemate;
        }
    }
}

/// Units left in the winning army without a boost; `None` on a stalemate.
pub fn remaining_units(groups: &[Group]) -> Option<i64> {
    match fight(groups, 0) {
        Outcome::Victory { units, .. } => Some(units),
        Outcome::Stalemate => None,
    }
}

/// Smallest boost letting the immune system win, with its remaining units.
pub fn smallest_boost(groups: &[Group]) -> Option<(i64, i64)> {
    // Beyond this boost any hit wipes out whole groups; more cannot help.
    let limit = groups
        .iter()
        .filter(|g| g.army == Army::Infection)
        .map(|g| g.units * g.hit_points)
        .max()?;
    for boost in 0..=limit {
        match fight(groups, boost) {
            Outcome::Victory {
                winner: Army::ImmuneSystem,
                units,
            } => {
                info!("immune system wins with boost {}", boost);
                return Some((boost, units));
            }
            outcome => debug!("boost {}: {:?}", boost, outcome),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Immune System:
17 units each with 5390 hit points (weak to radiation, bludgeoning) with an attack that does 4507 fire damage at initiative 2
989 units each with 1274 hit points (immune to fire; weak to bludgeoning, slashing) with an attack that does 25 slashing damage at initiative 3

Infection:
801 units each with 4706 hit points (weak to radiation) with an attack that does 116 bludgeoning damage at initiative 1
4485 units each with 2961 hit points (immune to radiation; weak to fire, cold) with an attack that does 12 slashing damage at initiative 4
";

    #[test]
    fn test_day24_parse() {
        let groups = parse_input(EXAMPLE).unwrap();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[1].army, Army::ImmuneSystem);
        assert_eq!(groups[1].immunities, vec!["fire"]);
        assert_eq!(groups[1].weaknesses, vec!["bludgeoning", "slashing"]);
        assert_eq!(groups[2].army, Army::Infection);
        assert_eq!(groups[2].attack_type, "bludgeoning");
        assert_eq!(groups[3].initiative, 4);
        assert_eq!(groups[0].effective_power(), 76619);

        let plain = parse_input(
            "Infection:\n10 units each with 20 hit points with an attack that does 3 cold damage at initiative 7\n",
        )
        .unwrap();
        assert!(plain[0].weaknesses.is_empty() && plain[0].immunities.is_empty());
        assert!(parse_input("10 units each with 20 hit points with an attack that does 3 cold damage at initiative 7\n").is_err());
    }

    #[test]
    fn test_day24_example() {
        let groups = parse_input(EXAMPLE).unwrap();
        assert_eq!(
            fight(&groups, 0),
            Outcome::Victory {
                winner: Army::Infection,
                units: 5216
            }
        );
        assert_eq!(remaining_units(&groups), Some(5216));
        assert_eq!(
            fight(&groups, 1570),
            Outcome::Victory {
                winner: Army::ImmuneSystem,
                units: 51
            }
        );
        assert_eq!(smallest_boost(&groups), Some((1570, 51)));
    }

    #[test]
    fn test_day24_stalemate() {
        let groups = parse_input(
            "Immune System:
10 units each with 20 hit points (immune to cold) with an attack that does 3 fire damage at initiative 2
Infection:
10 units each with 20 hit points (immune to fire) with an attack that does 3 cold damage at initiative 1
",
        )
        .unwrap();
        assert_eq!(fight(&groups, 0), Outcome::Stalemate);
        assert_eq!(remaining_units(&groups), None);
    }
}
