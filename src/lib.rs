//! # huffcode
//!
//! Huffman coding for single-byte symbol messages.
//!
//! Builds a prefix-free binary code from the input text, encodes the text
//! into a bitstring of `'0'`/`'1'` characters, and serializes the code tree
//! so that a later, independent process can decode the bitstring.
//!
//! ```rust
//! let (bitstring, tree_file) = huffcode::encode("abracadabra")?;
//! let message = huffcode::decode(&bitstring, &tree_file)?;
//! assert_eq!(message, "abracadabra");
//! # Ok::<(), huffcode::HuffError>(())
//! ```

pub mod codec;
pub mod codes;
pub mod error;
pub mod freq;
pub mod serial;
pub mod tree;

pub use codec::{decode_message, encode_message};
pub use codes::CodeTable;
pub use error::HuffError;
pub use freq::{FreqTable, TABLE_SIZE};
pub use serial::{deserialize_tree, serialize_tree};
pub use tree::{build_tree, Tree};

/// Encodes a message into a bitstring and a serialized tree file.
pub fn encode(message: &str) -> Result<(String, Vec<u8>), HuffError> {
    let freq_table = FreqTable::from_message(message.as_bytes())?;
    let root = build_tree(&freq_table)?;
    let codes = CodeTable::from_tree(&root);
    let bitstring = encode_message(message.as_bytes(), &codes)?;
    let tree_file = serialize_tree(&root);
    Ok((bitstring, tree_file))
}

/// Decodes a bitstring using a tree file produced by a previous encode.
pub fn decode(bitstring: &str, tree_file: &[u8]) -> Result<String, HuffError> {
    let root = deserialize_tree(tree_file)?;
    let message = decode_message(bitstring, &root)?;
    String::from_utf8(message).map_err(|_| {
        HuffError::MalformedBitstream(String::from("decoded bytes are not valid utf-8"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    #[test]
    fn test_encode_decode_round_trip() {
        let (bitstring, tree_file) = encode("abracadabra").unwrap();

        assert_eq!(bitstring, "01101110100010101101110");
        assert_eq!(decode(&bitstring, &tree_file).unwrap(), "abracadabra");
    }

    #[test]
    fn test_degenerate_alphabet_round_trip() {
        let (bitstring, tree_file) = encode("aaaa").unwrap();

        assert_eq!(bitstring, "0000");
        assert_eq!(decode(&bitstring, &tree_file).unwrap(), "aaaa");
    }

    #[test]
    fn test_single_character_message() {
        let (bitstring, tree_file) = encode("a").unwrap();

        assert_eq!(bitstring, "0");
        assert_eq!(decode(&bitstring, &tree_file).unwrap(), "a");
    }

    #[test]
    fn test_empty_message() {
        let result = encode("");
        assert!(matches!(result, Err(HuffError::EmptyInput)));
    }

    #[test]
    fn test_random_messages_round_trip() {
        for _ in 0..20 {
            let len = rand::thread_rng().gen_range(1..200);
            let message: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();

            let (bitstring, tree_file) = encode(&message).unwrap();
            assert_eq!(decode(&bitstring, &tree_file).unwrap(), message);
        }
    }

    #[test]
    fn test_decode_with_truncated_tree_file() {
        let (bitstring, tree_file) = encode("abracadabra").unwrap();

        let result = decode(&bitstring, &tree_file[..tree_file.len() - 1]);
        assert!(matches!(result, Err(HuffError::CorruptTreeFile(_))));
    }
}
