use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use rhuffman::{
    bits::{format_bits, parse_bits},
    build_table, create_code_tree, decode, encode,
    sample::{french_code, SECRET},
    table_encode, CodeTree, Symbol,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode the bundled sample message and encode it back
    Demo,
    /// Print the code tree built from a text
    Tree {
        /// Text the symbol frequencies are counted from
        #[arg(short, long)]
        text: String,
    },
    /// Print the code table built from a text
    Table {
        /// Text the symbol frequencies are counted from
        #[arg(short, long)]
        text: String,
    },
    /// Encode a message into bits
    Encode {
        /// Text the symbol frequencies are counted from
        #[arg(short, long)]
        text: String,

        /// Message to encode, defaults to the text itself
        #[arg(short, long)]
        message: Option<String>,

        /// Encode through the code table instead of walking the tree
        #[arg(long)]
        table: bool,
    },
    /// Decode a string of 0/1 bits back into text
    Decode {
        /// Text the symbol frequencies are counted from
        #[arg(short, long)]
        text: String,

        /// Bits to decode
        #[arg(short, long)]
        bits: String,
    },
}

fn tree_for(text: &str) -> Result<CodeTree> {
    let symbols: Vec<Symbol> = text.chars().collect();
    create_code_tree(&symbols).context("Error building the code tree")
}

fn demo() -> Result<()> {
    let tree = french_code();
    let decoded = decode(&tree, &SECRET)?;
    println!("decoded: {}", decoded.iter().collect::<String>());

    let encoded = encode(&tree, &decoded)?;
    println!("encoded: {}", format_bits(&encoded));
    ensure!(
        encoded == SECRET,
        "re-encoding did not reproduce the sample bits"
    );
    println!("round-trip ok");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Some(Commands::Demo) | None => demo()?,
        Some(Commands::Tree { text }) => print!("{}", tree_for(&text)?),
        Some(Commands::Table { text }) => print!("{}", build_table(&tree_for(&text)?)),
        Some(Commands::Encode {
            text,
            message,
            table,
        }) => {
            let tree = tree_for(&text)?;
            let message: Vec<Symbol> = message.as_deref().unwrap_or(&text).chars().collect();
            let bits = if table {
                table_encode(&tree, &message)
            } else {
                encode(&tree, &message)
            }
            .context("Error during encoding")?;
            println!("{}", format_bits(&bits));
        }
        Some(Commands::Decode { text, bits }) => {
            let tree = tree_for(&text)?;
            let bits = parse_bits(&bits)?;
            let decoded = decode(&tree, &bits).context("Error during decoding")?;
            println!("{}", decoded.iter().collect::<String>());
        }
    };
    Ok(())
}
