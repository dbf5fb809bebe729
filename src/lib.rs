//! Huffman prefix codes.
//!
//! Frequencies are counted from a body of text, turned into weighted leaves and
//! merged lightest-first into a [`CodeTree`]. The tree decodes bit sequences
//! back into symbols and encodes symbols either by walking the tree or through
//! a flattened [`CodeTable`].
//!
//! ```
//! use rhuffman::{create_code_tree, decode, encode};
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//! let tree = create_code_tree(&text)?;
//! let bits = encode(&tree, &text)?;
//! assert_eq!(decode(&tree, &bits)?, text);
//! # Ok::<(), rhuffman::HuffmanError>(())
//! ```

use std::collections::HashMap;

use log::debug;

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod sample;
pub mod table;
pub mod tree;

pub use decoder::decode;
pub use encoder::{encode, HuffmanEncoder};
pub use error::{HuffmanError, Result};
pub use table::{build_table, table_encode, CodeTable};
pub use tree::{combine_leaves, combine_step, make_leaves, merge_until_single, CodeTree};

pub type Symbol = char;

/// 0 selects the left branch, 1 the right one. Decoding reads any other value as 1.
pub type Bit = u8;

/// One (symbol, count) pair per distinct symbol, in order of first occurrence.
pub type Frequencies = Vec<(Symbol, usize)>;

pub fn count_frequencies<I: IntoIterator<Item = Symbol>>(symbols: I) -> Frequencies {
    let mut index: HashMap<Symbol, usize> = HashMap::new();
    let mut counts: Frequencies = Vec::new();
    for symbol in symbols {
        let slot = *index.entry(symbol).or_insert_with(|| {
            counts.push((symbol, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts
}

/// Builds the Huffman code tree for `symbols`.
pub fn create_code_tree(symbols: &[Symbol]) -> Result<CodeTree> {
    if symbols.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }
    let frequencies = count_frequencies(symbols.iter().copied());
    debug!(
        "counted {} distinct symbols in {} input symbols",
        frequencies.len(),
        symbols.len()
    );
    combine_leaves(make_leaves(&frequencies)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{
        count_frequencies, create_code_tree, decode, encode, CodeTree, HuffmanError, Symbol,
    };

    fn assert_equal_freq(counts: Vec<(Symbol, usize)>, expected: Vec<(Symbol, usize)>) {
        let counts_map: HashMap<Symbol, usize> = counts.into_iter().collect();
        let expected_map: HashMap<Symbol, usize> = expected.into_iter().collect();
        assert_eq!(counts_map, expected_map);
    }

    #[test]
    fn test_count_frequencies() {
        assert_equal_freq(count_frequencies("aa".chars()), vec![('a', 2)]);
        assert_equal_freq(
            count_frequencies("hello, I'm testing".chars()),
            vec![
                ('h', 1),
                ('e', 2),
                ('l', 2),
                ('o', 1),
                (',', 1),
                ('I', 1),
                ('\'', 1),
                ('m', 1),
                ('t', 2),
                ('i', 1),
                (' ', 2),
                ('s', 1),
                ('n', 1),
                ('g', 1),
            ],
        );
    }

    #[test]
    fn test_count_frequencies_first_occurrence_order() {
        assert_eq!(
            count_frequencies("abacba".chars()),
            vec![('a', 3), ('b', 2), ('c', 1)]
        );
        assert!(count_frequencies("".chars()).is_empty());
    }

    #[test]
    fn test_create_code_tree() {
        let tree = create_code_tree(&['a', 'b', 'a']).unwrap();
        assert_eq!(
            tree,
            CodeTree::fork(CodeTree::leaf('b', 1), CodeTree::leaf('a', 2))
        );
        assert_eq!(tree.symbols(), &['b', 'a']);
        assert_eq!(tree.weight(), 3);
    }

    #[test]
    fn test_create_code_tree_single_symbol() {
        let tree = create_code_tree(&['x', 'x', 'x']).unwrap();
        assert_eq!(tree, CodeTree::leaf('x', 3));
    }

    #[test]
    fn test_single_symbol_text_has_empty_code() {
        let tree = create_code_tree(&['a']).unwrap();
        let bits = encode(&tree, &['a']).unwrap();
        assert!(bits.is_empty());
        assert!(decode(&tree, &bits).unwrap().is_empty());
    }

    #[test]
    fn test_create_code_tree_empty() {
        assert_eq!(create_code_tree(&[]), Err(HuffmanError::EmptyInput));
    }
}
