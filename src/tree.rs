use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::{self, Display, Formatter},
    slice,
};

use itertools::Itertools;
use log::{debug, trace};

use crate::{HuffmanError, Result, Symbol};

/// A Huffman code tree.
///
/// Forks cache their total weight and the symbols reachable below them, left
/// subtree first. Build nodes with [`CodeTree::leaf`] and [`CodeTree::fork`]
/// so that the cached values stay consistent with the children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeTree {
    Leaf {
        symbol: Symbol,
        weight: usize,
    },
    Fork {
        left: Box<CodeTree>,
        right: Box<CodeTree>,
        symbols: Vec<Symbol>,
        weight: usize,
    },
}

impl CodeTree {
    pub fn leaf(symbol: Symbol, weight: usize) -> Self {
        CodeTree::Leaf { symbol, weight }
    }

    /// Joins two trees under a new fork, `left` on the 0 branch.
    pub fn fork(left: CodeTree, right: CodeTree) -> Self {
        let weight = left.weight() + right.weight();
        let symbols = left
            .symbols()
            .iter()
            .chain(right.symbols())
            .copied()
            .collect();
        CodeTree::Fork {
            left: Box::new(left),
            right: Box::new(right),
            symbols,
            weight,
        }
    }

    /// Like [`CodeTree::fork`], but refuses children that share a symbol.
    pub fn try_fork(left: CodeTree, right: CodeTree) -> Result<Self> {
        if let Some(&symbol) = left.symbols().iter().find(|&&s| right.contains(s)) {
            return Err(HuffmanError::DuplicateSymbol(symbol));
        }
        Ok(CodeTree::fork(left, right))
    }

    pub fn weight(&self) -> usize {
        match self {
            CodeTree::Leaf { weight, .. } => *weight,
            CodeTree::Fork { weight, .. } => *weight,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        match self {
            CodeTree::Leaf { symbol, .. } => slice::from_ref(symbol),
            CodeTree::Fork { symbols, .. } => symbols,
        }
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols().contains(&symbol)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeTree::Leaf { .. })
    }

    fn fmt_node(&self, f: &mut Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            CodeTree::Leaf { symbol, weight } => {
                writeln!(f, "{}{} {:?} [{}]", indent, label, symbol, weight)
            }
            CodeTree::Fork {
                left,
                right,
                symbols,
                weight,
            } => {
                writeln!(
                    f,
                    "{}{} fork {{{}}} [{}]",
                    indent,
                    label,
                    symbols.iter().join(""),
                    weight
                )?;
                left.fmt_node(f, depth + 1, "0")?;
                right.fmt_node(f, depth + 1, "1")
            }
        }
    }
}

impl Display for CodeTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, 0, "*")
    }
}

fn ensure_disjoint<'a, I: IntoIterator<Item = &'a Symbol>>(symbols: I) -> Result<()> {
    match symbols.into_iter().duplicates().next() {
        Some(&symbol) => Err(HuffmanError::DuplicateSymbol(symbol)),
        None => Ok(()),
    }
}

/// Turns frequency pairs into leaves sorted by ascending weight.
///
/// The sort is stable: leaves of equal weight keep the order of `frequencies`.
/// A symbol listed twice is rejected.
pub fn make_leaves(frequencies: &[(Symbol, usize)]) -> Result<Vec<CodeTree>> {
    ensure_disjoint(frequencies.iter().map(|(symbol, _)| symbol))?;
    Ok(frequencies
        .iter()
        .map(|&(symbol, weight)| CodeTree::leaf(symbol, weight))
        .sorted_by_key(CodeTree::weight)
        .collect())
}

/// Merges the two front trees of an ascending list into one fork.
///
/// The fork is inserted after every remaining tree that weighs no more than
/// it does, so the list stays sorted. Lists shorter than two are returned as is.
/// The trees must not share symbols; [`merge_until_single`] checks this once
/// up front.
pub fn combine_step(mut trees: Vec<CodeTree>) -> Vec<CodeTree> {
    if trees.len() < 2 {
        return trees;
    }
    let right = trees.remove(1);
    let left = trees.remove(0);

    let fork = CodeTree::fork(left, right);
    trace!("merged into fork of weight {}", fork.weight());

    let position = trees.partition_point(|tree| tree.weight() <= fork.weight());
    trees.insert(position, fork);
    trees
}

/// Applies [`combine_step`] until a single tree remains.
pub fn merge_until_single(mut trees: Vec<CodeTree>) -> Result<CodeTree> {
    ensure_disjoint(trees.iter().flat_map(CodeTree::symbols))?;
    while trees.len() > 1 {
        trees = combine_step(trees);
    }
    trees.pop().ok_or(HuffmanError::EmptyInput)
}

struct HeapEntry {
    weight: usize,
    order: usize,
    tree: CodeTree,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

impl Eq for HeapEntry {}

// BinaryHeap is a max-heap: compare reversed so the lightest, oldest entry pops first
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.order).cmp(&(self.weight, self.order))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the final code tree from leaves sorted by ascending weight.
///
/// Uses a min-heap keyed by (weight, creation order); the result is identical
/// to [`merge_until_single`].
pub fn combine_leaves(leaves: Vec<CodeTree>) -> Result<CodeTree> {
    ensure_disjoint(leaves.iter().flat_map(CodeTree::symbols))?;
    let leaf_count = leaves.len();
    let mut heap: BinaryHeap<HeapEntry> = leaves
        .into_iter()
        .enumerate()
        .map(|(order, tree)| HeapEntry {
            weight: tree.weight(),
            order,
            tree,
        })
        .collect();

    let mut next_order = leaf_count;
    let root = loop {
        let left = heap.pop().ok_or(HuffmanError::EmptyInput)?;
        let Some(right) = heap.pop() else {
            break left.tree;
        };
        let fork = CodeTree::fork(left.tree, right.tree);
        trace!("merged into fork of weight {}", fork.weight());
        heap.push(HeapEntry {
            weight: fork.weight(),
            order: next_order,
            tree: fork,
        });
        next_order += 1;
    };
    debug!(
        "built code tree from {} leaves in {} merges, root weight {}",
        leaf_count,
        next_order - leaf_count,
        root.weight()
    );
    Ok(root)
}
