use std::{
    collections::{btree_map, BTreeMap},
    fmt::{self, Display, Formatter},
};

use log::debug;

use crate::{bits::format_bits, tree::CodeTree, Bit, HuffmanError, Result, Symbol};

/// Maps every symbol of a code tree to its root-to-leaf path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Vec<Bit>>,
}

impl CodeTable {
    fn singleton(symbol: Symbol) -> Self {
        CodeTable {
            codes: BTreeMap::from([(symbol, vec![])]),
        }
    }

    /// Prefixes every path of `left` with 0 and every path of `right` with 1.
    fn merge(left: CodeTable, right: CodeTable) -> Self {
        let prefixed = |table: CodeTable, bit: Bit| {
            table.codes.into_iter().map(move |(symbol, code)| {
                let mut path = Vec::with_capacity(code.len() + 1);
                path.push(bit);
                path.extend(code);
                (symbol, path)
            })
        };
        CodeTable {
            codes: prefixed(left, 0).chain(prefixed(right, 1)).collect(),
        }
    }

    pub fn lookup(&self, symbol: Symbol) -> Result<&[Bit]> {
        self.codes
            .get(&symbol)
            .map(Vec::as_slice)
            .ok_or(HuffmanError::SymbolNotEncodable(symbol))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Symbol, Vec<Bit>> {
        self.codes.iter()
    }

    pub fn encode(&self, symbols: &[Symbol]) -> Result<Vec<Bit>> {
        let mut bits = Vec::new();
        for &symbol in symbols {
            bits.extend_from_slice(self.lookup(symbol)?);
        }
        Ok(bits)
    }
}

impl Display for CodeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self {
            writeln!(f, "{:?}: {}", symbol, format_bits(code))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (&'a Symbol, &'a Vec<Bit>);
    type IntoIter = btree_map::Iter<'a, Symbol, Vec<Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn convert(tree: &CodeTree) -> CodeTable {
    match tree {
        CodeTree::Leaf { symbol, .. } => CodeTable::singleton(*symbol),
        CodeTree::Fork { left, right, .. } => CodeTable::merge(convert(left), convert(right)),
    }
}

pub fn build_table(tree: &CodeTree) -> CodeTable {
    let table = convert(tree);
    debug!("built code table with {} entries", table.len());
    table
}

/// Builds the table for `tree` once and encodes `symbols` through it.
pub fn table_encode(tree: &CodeTree, symbols: &[Symbol]) -> Result<Vec<Bit>> {
    build_table(tree).encode(symbols)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{build_table, create_code_tree, encode, table_encode, tree::CodeTree, HuffmanError};

    #[test]
    fn test_build_table() {
        let text: Vec<char> = "abacba".chars().collect();
        let table = build_table(&create_code_tree(&text).unwrap());

        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup('a').unwrap(), &[0]);
        assert_eq!(table.lookup('c').unwrap(), &[1, 0]);
        assert_eq!(table.lookup('b').unwrap(), &[1, 1]);
    }

    #[test]
    fn test_build_table_single_leaf() {
        let table = build_table(&CodeTree::leaf('x', 3));
        assert_eq!(table.len(), 1);
        assert!(table.lookup('x').unwrap().is_empty());
    }

    #[test]
    fn test_lookup_missing_symbol() {
        let table = build_table(&CodeTree::leaf('x', 3));
        assert_eq!(table.lookup('y'), Err(HuffmanError::SymbolNotEncodable('y')));
    }

    #[rstest]
    #[case("abacba", "abc")]
    #[case("aabbc", "cab")]
    #[case("abcd", "dcba")]
    #[case("mississippi river", "prism")]
    fn test_table_encode_matches_tree_walk(#[case] source: &str, #[case] message: &str) {
        let source: Vec<char> = source.chars().collect();
        let message: Vec<char> = message.chars().collect();
        let tree = create_code_tree(&source).unwrap();

        assert_eq!(
            table_encode(&tree, &message).unwrap(),
            encode(&tree, &message).unwrap()
        );
    }

    #[test]
    fn test_table_encode_unknown_symbol() {
        let tree = create_code_tree(&['a', 'b', 'a']).unwrap();
        assert_eq!(
            table_encode(&tree, &['a', 'q']),
            Err(HuffmanError::SymbolNotEncodable('q'))
        );
    }

    #[test]
    fn test_display() {
        let tree = create_code_tree(&['a', 'b', 'a']).unwrap();
        assert_eq!(build_table(&tree).to_string(), "'a': 1\n'b': 0\n");
    }
}
