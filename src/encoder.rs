use crate::{
    table::{build_table, CodeTable},
    tree::CodeTree,
    Bit, HuffmanError, Result, Symbol,
};

/// Encodes `symbols` by walking `tree` once per symbol.
///
/// At each fork the symbol goes left (bit 0) when the left subtree holds it and
/// right (bit 1) otherwise.
pub fn encode(tree: &CodeTree, symbols: &[Symbol]) -> Result<Vec<Bit>> {
    let mut bits = Vec::new();
    for &symbol in symbols {
        encode_symbol(tree, symbol, &mut bits)?;
    }
    Ok(bits)
}

fn encode_symbol(tree: &CodeTree, symbol: Symbol, bits: &mut Vec<Bit>) -> Result<()> {
    if !tree.contains(symbol) {
        return Err(HuffmanError::SymbolNotEncodable(symbol));
    }

    let mut current = tree;
    while let CodeTree::Fork { left, right, .. } = current {
        if left.contains(symbol) {
            bits.push(0);
            current = left.as_ref();
        } else {
            bits.push(1);
            current = right.as_ref();
        }
    }
    Ok(())
}

/// Table-backed encoder for repeated encoding with the same tree.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    table: CodeTable,
}

impl HuffmanEncoder {
    pub fn new(tree: &CodeTree) -> Self {
        HuffmanEncoder {
            table: build_table(tree),
        }
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn encode(&self, symbols: &[Symbol]) -> Result<Vec<Bit>> {
        self.table.encode(symbols)
    }
}
