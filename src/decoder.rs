use crate::{tree::CodeTree, Bit, HuffmanError, Result, Symbol};

/// Decodes `bits` by walking `tree` from the root once per symbol.
///
/// Bit 0 goes left and any non-zero bit goes right. A single-leaf tree spends
/// no bits per symbol, so it only accepts an empty bit sequence.
pub fn decode(tree: &CodeTree, bits: &[Bit]) -> Result<Vec<Symbol>> {
    if tree.is_leaf() && !bits.is_empty() {
        return Err(HuffmanError::MalformedBitstream {
            position: 0,
            reason: "single-symbol tree carries no bits",
        });
    }

    let mut output = Vec::new();
    let mut position = 0;

    while position < bits.len() {
        let mut current = tree;

        // Move on the tree based on bit value until we catch a leaf
        loop {
            match current {
                CodeTree::Leaf { symbol, .. } => {
                    output.push(*symbol);
                    break;
                }
                CodeTree::Fork { left, right, .. } => {
                    let bit = *bits.get(position).ok_or(HuffmanError::MalformedBitstream {
                        position,
                        reason: "bit stream ended in the middle of a code",
                    })?;
                    position += 1;
                    current = if bit == 0 { left.as_ref() } else { right.as_ref() };
                }
            }
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::{create_code_tree, decoder::decode, tree::CodeTree, HuffmanError};

    #[test]
    fn test_decode() {
        let text: Vec<char> = "abacba".chars().collect();
        let tree = create_code_tree(&text).unwrap();

        // a = 0, c = 10, b = 11
        let output = decode(&tree, &[0, 1, 1, 1, 0]).unwrap();
        assert_eq!(output, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_decode_two_symbols() {
        let tree = create_code_tree(&['a', 'b', 'a']).unwrap();
        assert_eq!(decode(&tree, &[1, 0]).unwrap(), vec!['a', 'b']);
    }

    #[test]
    fn test_decode_reads_non_zero_as_right() {
        let tree = create_code_tree(&['a', 'b', 'a']).unwrap();
        assert_eq!(decode(&tree, &[7, 0]).unwrap(), decode(&tree, &[1, 0]).unwrap());
    }

    #[test]
    fn test_decode_empty() {
        let tree = create_code_tree(&['a', 'b', 'a']).unwrap();
        assert!(decode(&tree, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_truncated_code() {
        let text: Vec<char> = "abacba".chars().collect();
        let tree = create_code_tree(&text).unwrap();

        assert_eq!(
            decode(&tree, &[0, 1]),
            Err(HuffmanError::MalformedBitstream {
                position: 2,
                reason: "bit stream ended in the middle of a code",
            })
        );
    }

    #[test]
    fn test_decode_single_leaf() {
        let tree = CodeTree::leaf('x', 3);
        assert!(decode(&tree, &[]).unwrap().is_empty());
        assert!(matches!(
            decode(&tree, &[0]),
            Err(HuffmanError::MalformedBitstream { position: 0, .. })
        ));
    }
}
