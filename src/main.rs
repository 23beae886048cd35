// Application to encode a message or decode a bitstring with a saved tree file

use std::error::Error;
use std::{env, fs, process};

use huffcode::{encode_message, serialize_tree, CodeTable, FreqTable};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut entries: Vec<String> = vec![];
    let mut exec_flag: String = String::from("");

    // parse arguments to program
    for i in 1..args.len() {
        let arg = &args[i];
        // if the arg begins with a -, then the arg is a flag
        if arg.starts_with('-') {
            exec_flag = String::from(arg);
        } else {
            entries.push(String::from(arg));
        }
    }

    if entries.len() < 2 {
        println!("Usage: huffcode [-e] <message> <tree-path> | -d <bitstring> <tree-path>");
        process::exit(1);
    }

    // execute a different command based on flag
    let result = match exec_flag.as_str() {
        "-d" => run_decode(&entries[0], &entries[1]),
        _ => run_encode(&entries[0], &entries[1]),
    };

    if let Err(e) = result {
        println!("Error: {}", e);
        process::exit(1);
    }
}

fn run_encode(message: &str, tree_path: &str) -> Result<(), Box<dyn Error>> {
    let freq_table = FreqTable::from_message(message.as_bytes())?;
    let root = huffcode::build_tree(&freq_table)?;
    let codes = CodeTable::from_tree(&root);

    // display each symbol and its binary code
    let mut code_listing: Vec<(u8, &str)> = codes.iter().collect();
    code_listing.sort();
    for (symbol, code) in code_listing {
        println!("{}  {}", symbol as char, code);
    }

    let bitstring = encode_message(message.as_bytes(), &codes)?;
    println!("Huffman encoded message: {}", bitstring);

    fs::write(tree_path, serialize_tree(&root))?;
    println!("Huffman tree is saved in {}", tree_path);
    Ok(())
}

fn run_decode(bitstring: &str, tree_path: &str) -> Result<(), Box<dyn Error>> {
    let tree_file = fs::read(tree_path)?;
    let message = huffcode::decode(bitstring, &tree_file)?;
    println!("Decoded message: {}", message);
    Ok(())
}
