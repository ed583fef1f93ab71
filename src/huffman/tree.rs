use super::frequency::FrequencyTable;
use super::queue::PriorityQueue;
use crate::bits::BitBuffer;
use crate::container::MAX_BLOCK_SIZE;
use crate::error::{Error, Result};

/// Node of an arena-allocated Huffman tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf(u8),
    /// Child indices; `left` is reached with bit 0, `right` with bit 1
    Internal { left: usize, right: usize },
}

/// Prefix-code tree rebuilt from a frequency table for every block
///
/// Encoder and decoder build the tree from the same table, so the tree
/// itself is never stored.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl HuffmanTree {
    /// Merge the two lightest nodes until one remains
    ///
    /// The first node popped becomes the right child, the second the left.
    /// A table with a single entry yields a lone leaf.
    pub fn build(table: &FrequencyTable) -> Self {
        let mut nodes = Vec::with_capacity(table.len() * 2);
        let mut queue = PriorityQueue::with_capacity(table.len());

        for entry in table.entries() {
            nodes.push(Node::Leaf(entry.byte));
            queue.push(entry.count, nodes.len() - 1);
        }

        let mut root = None;
        while let Some((right_weight, right)) = queue.pop() {
            let Some((left_weight, left)) = queue.pop() else {
                root = Some(right);
                break;
            };
            nodes.push(Node::Internal { left, right });
            queue.push(right_weight + left_weight, nodes.len() - 1);
        }

        Self { nodes, root }
    }

    pub fn root(&self) -> Option<Node> {
        self.root.map(|index| self.nodes[index])
    }

    pub fn node(&self, index: usize) -> Option<Node> {
        self.nodes.get(index).copied()
    }

    /// Code of every byte present in the tree
    pub fn code_table(&self) -> CodeTable {
        let mut codes = CodeTable::default();
        let Some(root) = self.root else {
            return codes;
        };

        let mut stack = vec![(root, BitBuffer::new())];
        while let Some((index, prefix)) = stack.pop() {
            match self.nodes[index] {
                Node::Leaf(byte) => codes.codes[byte as usize] = Some(prefix),
                Node::Internal { left, right } => {
                    let mut left_code = prefix.clone();
                    left_code.push(false);
                    let mut right_code = prefix;
                    right_code.push(true);
                    stack.push((left, left_code));
                    stack.push((right, right_code));
                }
            }
        }
        codes
    }

    /// Walk the tree once per symbol, consuming `bits` from the root down
    ///
    /// A lone-leaf tree has an empty code, so its byte is repeated `symbols`
    /// times and the bit stream must be empty.
    pub fn decode(&self, bits: &BitBuffer, symbols: u64) -> Result<Vec<u8>> {
        let too_large = Error::SymbolCountTooLarge { count: symbols, max: MAX_BLOCK_SIZE };
        let count = match usize::try_from(symbols) {
            Ok(count) if count <= MAX_BLOCK_SIZE => count,
            _ => return Err(too_large),
        };

        let Some(root) = self.root else {
            if !bits.is_empty() {
                return Err(Error::UnexpectedBits(bits.len() as u64));
            }
            return Ok(Vec::new());
        };

        if let Node::Leaf(byte) = self.nodes[root] {
            if !bits.is_empty() {
                return Err(Error::UnexpectedBits(bits.len() as u64));
            }
            let mut output = Vec::new();
            output.try_reserve_exact(count).map_err(|_| too_large)?;
            output.resize(count, byte);
            return Ok(output);
        }

        let mut output = Vec::with_capacity(count.min(bits.len()));
        let mut node = root;
        for bit in bits.iter() {
            node = match self.nodes[node] {
                Node::Internal { left, right } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                Node::Leaf(_) => unreachable!("walk restarts at the root after every leaf"),
            };
            if let Node::Leaf(byte) = self.nodes[node] {
                output.push(byte);
                node = root;
            }
        }

        if node != root {
            return Err(Error::IncompleteCode);
        }
        let found = output.len() as u64;
        if found != symbols {
            return Err(Error::SymbolCountMismatch { expected: symbols, found });
        }
        Ok(output)
    }
}

/// Byte to prefix-code lookup
#[derive(Clone, Debug)]
pub struct CodeTable {
    codes: Vec<Option<BitBuffer>>,
}

impl CodeTable {
    pub fn get(&self, byte: u8) -> Option<&BitBuffer> {
        self.codes[byte as usize].as_ref()
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self { codes: vec![None; 256] }
    }
}
