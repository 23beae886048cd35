// Encodes a message into a bitstring and decodes a bitstring by walking the tree

use crate::codes::CodeTable;
use crate::error::HuffError;
use crate::tree::Tree;

// encodes each symbol in order by appending its code to the output bitstring
pub fn encode_message(message: &[u8], codes: &CodeTable) -> Result<String, HuffError> {
    let mut bitstring = String::new();
    for &symbol in message {
        let code = codes
            .code(symbol)
            .ok_or(HuffError::UnknownSymbol(symbol))?;
        bitstring.push_str(code);
    }
    log::debug!("encoded {} symbols into {} bits", message.len(), bitstring.len());
    Ok(bitstring)
}

// decodes a bitstring by moving a cursor down the tree, emitting a symbol at each leaf
pub fn decode_message(bitstring: &str, root: &Tree) -> Result<Vec<u8>, HuffError> {
    // a lone leaf has no branches to walk, each '0' bit stands for one symbol
    if root.is_leaf() {
        let mut message = Vec::new();
        for bit in bitstring.chars() {
            if bit != '0' {
                return Err(HuffError::MalformedBitstream(format!(
                    "unexpected {:?} in a single-symbol stream",
                    bit
                )));
            }
            message.push(root.symbol);
        }
        return Ok(message);
    }

    let mut message = Vec::new();
    let mut cursor = root;
    for bit in bitstring.chars() {
        let next = match bit {
            '0' => &cursor.left,
            '1' => &cursor.right,
            _ => {
                return Err(HuffError::MalformedBitstream(format!(
                    "invalid character {:?} in bitstring",
                    bit
                )))
            }
        };
        // a missing child can only happen with a tree loaded from a hostile file
        cursor = next.as_deref().ok_or_else(|| {
            HuffError::MalformedBitstream(String::from("bit sequence walked off the tree"))
        })?;

        if cursor.is_leaf() {
            message.push(cursor.symbol);
            cursor = root;
        }
    }

    // the last code must be complete, leaving the cursor back at the root
    if !std::ptr::eq(cursor, root) {
        return Err(HuffError::TruncatedStream);
    }
    log::debug!("decoded {} bits into {} symbols", bitstring.len(), message.len());
    Ok(message)
}
