//! A reference code tree built from French letter frequencies, and a message
//! encoded with it.

use crate::{decode, tree::CodeTree, Bit, Result, Symbol};

fn leaf(symbol: Symbol, weight: usize) -> CodeTree {
    CodeTree::leaf(symbol, weight)
}

fn fork(left: CodeTree, right: CodeTree) -> CodeTree {
    CodeTree::fork(left, right)
}

/// The 26-letter code tree, weighted by letter counts in a French corpus.
pub fn french_code() -> CodeTree {
    let rare = fork(
        fork(
            fork(
                fork(leaf('z', 2093), fork(leaf('k', 745), leaf('w', 1747))),
                leaf('y', 4725),
            ),
            leaf('h', 11298),
        ),
        leaf('q', 20889),
    );
    let xjf = fork(fork(leaf('x', 5928), leaf('j', 8351)), leaf('f', 16351));
    let sd = fork(leaf('s', 121895), fork(leaf('d', 56269), fork(xjf, rare)));
    let olmpu = fork(
        fork(leaf('o', 82762), leaf('l', 83668)),
        fork(fork(leaf('m', 45521), leaf('p', 46335)), leaf('u', 96785)),
    );

    let rcvgb = fork(
        leaf('r', 100500),
        fork(
            leaf('c', 50003),
            fork(leaf('v', 24975), fork(leaf('g', 13288), leaf('b', 13822))),
        ),
    );
    let nt = fork(leaf('n', 108812), leaf('t', 111103));
    let eia = fork(
        leaf('e', 225947),
        fork(leaf('i', 115465), leaf('a', 117110)),
    );

    fork(fork(sd, olmpu), fork(fork(rcvgb, nt), eia))
}

/// A 63-bit message encoded with [`french_code`].
pub const SECRET: [Bit; 63] = [
    0, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1,
    1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0,
    1,
];

pub fn decoded_secret() -> Result<Vec<Symbol>> {
    decode(&french_code(), &SECRET)
}
