// Writes and reads the tree structure as a binary record stream

use crate::error::HuffError;
use crate::tree::Tree;

// tag bytes distinguishing the two node kinds in the record stream
const INTERNAL_TAG: u8 = 0x00;
const LEAF_TAG: u8 = 0x01;

// signature identifying a persisted tree file
pub const SIG: u64 = str_to_u64("hufftree");

// converts a string to a u64 in bytes
const fn str_to_u64(str: &str) -> u64 {
    let mut buffer = [0u8; 8];
    let mut i = 0;
    while i < str.len() && i < 8 {
        buffer[i] = str.as_bytes()[i];
        i += 1;
    }
    u64::from_le_bytes(buffer)
}

struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    fn new() -> ByteWriter {
        ByteWriter { buffer: Vec::new() }
    }

    fn write_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    fn write_u64(&mut self, num: u64) {
        self.buffer.extend_from_slice(&num.to_le_bytes());
    }

    fn write_f64(&mut self, num: f64) {
        self.write_u64(num.to_bits());
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

struct ByteReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    fn new(buffer: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            buffer,
            position: 0,
        }
    }

    fn eof(&self) -> bool {
        self.position >= self.buffer.len()
    }

    fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    fn read_byte(&mut self) -> Result<u8, HuffError> {
        let byte = self
            .buffer
            .get(self.position)
            .copied()
            .ok_or_else(|| HuffError::CorruptTreeFile(String::from("unexpected end of file")))?;
        self.position += 1;
        Ok(byte)
    }

    fn read_u64(&mut self) -> Result<u64, HuffError> {
        let mut buffer = [0u8; 8];
        for i in 0..8 {
            buffer[i] = self.read_byte()?;
        }
        Ok(u64::from_le_bytes(buffer))
    }

    fn read_f64(&mut self) -> Result<f64, HuffError> {
        Ok(f64::from_bits(self.read_u64()?))
    }
}

// writes the signature, the record count, and one record per node in pre-order
pub fn serialize_tree(root: &Tree) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_u64(SIG);
    writer.write_u64(count_nodes(root));
    write_node(&mut writer, root);

    let bytes = writer.into_bytes();
    log::debug!("serialized tree into {} bytes", bytes.len());
    bytes
}

fn count_nodes(node: &Tree) -> u64 {
    if node.is_leaf() {
        return 1;
    }
    let left = node.left.as_ref().expect("Expected left node to be Some");
    let right = node.right.as_ref().expect("Expected right node to be Some");
    1 + count_nodes(left) + count_nodes(right)
}

fn write_node(writer: &mut ByteWriter, node: &Tree) {
    if node.is_leaf() {
        writer.write_byte(LEAF_TAG);
        writer.write_f64(node.weight);
        writer.write_byte(node.symbol);
    } else {
        writer.write_byte(INTERNAL_TAG);
        writer.write_f64(node.weight);
        // invariant: a non-leaf has both children in a full tree
        let left = node.left.as_ref().expect("Expected left node to be Some");
        write_node(writer, left);
        let right = node.right.as_ref().expect("Expected right node to be Some");
        write_node(writer, right);
    }
}

// reads the records back in the same pre-order, checking that the stream holds
// exactly one complete strict binary tree
pub fn deserialize_tree(bytes: &[u8]) -> Result<Box<Tree>, HuffError> {
    let mut reader = ByteReader::new(bytes);
    if reader.read_u64()? != SIG {
        return Err(HuffError::CorruptTreeFile(String::from(
            "missing tree file signature",
        )));
    }

    let expected = reader.read_u64()?;
    let mut count = 0u64;
    let root = read_node(&mut reader, &mut count)?;

    if count != expected {
        return Err(HuffError::CorruptTreeFile(format!(
            "expected {} records but read {}",
            expected, count
        )));
    }
    if !reader.eof() {
        return Err(HuffError::CorruptTreeFile(format!(
            "{} trailing bytes after the last record",
            reader.remaining()
        )));
    }
    Ok(root)
}

fn read_node(reader: &mut ByteReader, count: &mut u64) -> Result<Box<Tree>, HuffError> {
    *count += 1;
    match reader.read_byte()? {
        LEAF_TAG => {
            let weight = reader.read_f64()?;
            let symbol = reader.read_byte()?;
            Ok(Box::new(Tree::leaf(symbol, weight)))
        }
        INTERNAL_TAG => {
            let weight = reader.read_f64()?;
            let left = read_node(reader, count)?;
            let right = read_node(reader, count)?;
            Ok(Box::new(Tree::internal(left, right, weight)))
        }
        tag => Err(HuffError::CorruptTreeFile(format!(
            "unknown record tag {:#04x}",
            tag
        ))),
    }
}
