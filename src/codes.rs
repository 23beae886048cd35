// Derives the symbol-to-bitstring code table by walking the tree

use std::collections::HashMap;

use crate::tree::Tree;

// maps each symbol in the tree to its path from the root, '0' for left and '1' for right
pub struct CodeTable {
    codes: HashMap<u8, String>,
}

impl CodeTable {
    pub fn from_tree(root: &Tree) -> CodeTable {
        let mut codes = HashMap::new();
        if root.is_leaf() {
            // a lone leaf has no path from the root, so it gets an explicit one-bit code
            codes.insert(root.symbol, String::from("0"));
        } else {
            walk_tree(root, String::new(), &mut codes);
        }
        log::trace!("code table holds {} symbols", codes.len());
        CodeTable { codes }
    }

    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(|code| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

fn walk_tree(node: &Tree, path: String, codes: &mut HashMap<u8, String>) {
    if node.is_leaf() {
        codes.insert(node.symbol, path);
        return;
    }
    if let Some(left) = &node.left {
        let mut path = path.clone();
        path.push('0');
        walk_tree(left, path, codes);
    }
    if let Some(right) = &node.right {
        let mut path = path;
        path.push('1');
        walk_tree(right, path, codes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FreqTable;
    use crate::tree::build_tree;

    fn table_for(message: &[u8]) -> CodeTable {
        let freq_table = FreqTable::from_message(message).unwrap();
        let root = build_tree(&freq_table).unwrap();
        CodeTable::from_tree(&root)
    }

    #[test]
    fn test_abracadabra_codes() {
        let codes = table_for(b"abracadabra");

        assert_eq!(codes.code(b'a'), Some("0"));
        assert_eq!(codes.code(b'c'), Some("100"));
        assert_eq!(codes.code(b'd'), Some("101"));
        assert_eq!(codes.code(b'b'), Some("110"));
        assert_eq!(codes.code(b'r'), Some("111"));
        assert_eq!(codes.code(b'z'), None);
    }

    #[test]
    fn test_code_lengths_follow_frequency() {
        let codes = table_for(b"abracadabra");

        let len = |s: u8| codes.code(s).unwrap().len();
        assert!(len(b'a') <= len(b'b'));
        assert_eq!(len(b'b'), len(b'r'));
        assert!(len(b'b') <= len(b'c'));
        assert_eq!(len(b'c'), len(b'd'));
    }

    #[test]
    fn test_prefix_freedom() {
        let codes = table_for(b"the quick brown fox jumps over the lazy dog");

        for (symbol, code) in codes.iter() {
            for (other_symbol, other_code) in codes.iter() {
                if symbol != other_symbol {
                    assert!(!other_code.starts_with(code));
                }
            }
        }
    }

    #[test]
    fn test_lone_leaf_gets_one_bit_code() {
        let codes = table_for(b"aaaa");

        assert_eq!(codes.len(), 1);
        assert_eq!(codes.code(b'a'), Some("0"));
    }
}
