use aoc_core::error::Error;
use aoc_core::parser::{parse_all, unsigned};
use aoc_core::Result;
use nom::{
    character::complete::{multispace0, multispace1},
    multi::separated_list1,
    sequence::preceded,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub children: Vec<Node>,
    pub metadata: Vec<u32>,
}

fn next_symbol<I: Iterator<Item = u32>>(symbols: &mut I) -> Result<u32> {
    symbols
        .next()
        .ok_or_else(|| Error::parse("license", "unexpected end of input"))
}

fn read_node<I: Iterator<Item = u32>>(symbols: &mut I) -> Result<Node> {
    let n_children = next_symbol(symbols)?;
    let n_metadata = next_symbol(symbols)?;
    let children = (0..n_children)
        .map(|_| read_node(symbols))
        .collect::<Result<Vec<_>>>()?;
    let metadata = (0..n_metadata)
        .map(|_| next_symbol(symbols))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node { children, metadata })
}

pub fn parse_input(input: &str) -> Result<Node> {
    let symbols = parse_all(
        input,
        preceded(multispace0, separated_list1(multispace1, unsigned::<u32>)),
        "license",
    )?;
    let mut iter = symbols.into_iter();
    let root = read_node(&mut iter)?;
    if iter.next().is_some() {
        return Err(Error::parse("license", "trailing numbers after the root node"));
    }
    Ok(root)
}

pub fn metadata_sum(node: &Node) -> u64 {
    node.children.iter().map(metadata_sum).sum::<u64>()
        + node.metadata.iter().map(|&m| m as u64).sum::<u64>()
}

pub fn node_value(node: &Node) -> u64 {
    if node.children.is_empty() {
        return node.metadata.iter().map(|&m| m as u64).sum();
    }
    node.metadata
        .iter()
        .filter_map(|&m| (m as usize).checked_sub(1).and_then(|i| node.children.get(i)))
        .map(node_value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day08_example() {
        let root = parse_input("2 3 0 3 10 11 12 1 1 0 1 99 2 1 1 2\n").unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.metadata, vec![1, 1, 2]);
        assert_eq!(metadata_sum(&root), 138);
        assert_eq!(node_value(&root), 66);
    }

    #[test]
    fn test_day08_malformed() {
        assert!(parse_input("1 1 0 1").is_err());
        assert!(parse_input("0 1 5 7").is_err());
        assert!(parse_input("0 1 x").is_err());
    }
}
