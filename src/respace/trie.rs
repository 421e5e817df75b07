//! Cost trie over the embedded unigram table.
//!
//! Nodes live in one arena and reference children through sparse byte maps,
//! so the segmentation walk allocates nothing per character. A terminal cost
//! marks a complete word; costs come from `-ln(count / total)`, so frequent
//! words cut cheaply.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Probability floor for words with vanishing counts.
const MIN_PROBABILITY: f64 = 1e-12;

static UNIGRAM_TSV: &str = include_str!("../../resources/unigram_frequencies.tsv");

static UNIGRAM_TABLE: Lazy<Vec<(&'static str, u64)>> = Lazy::new(|| {
    UNIGRAM_TSV
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (word, count) = line.split_once('\t').expect("valid unigram table line");
            (word, count.parse().expect("valid unigram count"))
        })
        .collect()
});

/// Embedded word/count pairs, shared by the trie and the known-vocabulary set.
pub fn unigram_table() -> &'static [(&'static str, u64)] {
    &UNIGRAM_TABLE
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<u8, u32>,
    terminal_cost: Option<f64>,
}

/// Arena-backed prefix tree keyed by bytes, with a cost at every complete word.
#[derive(Debug, Clone)]
pub struct CostTrie {
    nodes: Vec<TrieNode>,
}

impl CostTrie {
    /// Root index of every walk.
    pub const ROOT: u32 = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Build from word counts; lower cost means more probable word.
    pub fn from_unigram_counts(entries: &[(&str, u64)]) -> Self {
        let total: u64 = entries.iter().map(|(_, count)| count).sum();
        let total = if total == 0 { 1.0 } else { total as f64 };
        let mut trie = Self::new();
        for (word, count) in entries {
            let cost = -((*count as f64 / total).max(MIN_PROBABILITY)).ln();
            trie.insert(word, cost);
        }
        trie
    }

    pub fn insert(&mut self, word: &str, cost: f64) {
        let mut node = Self::ROOT;
        for &byte in word.as_bytes() {
            let next = match self.nodes[node as usize].children.get(&byte) {
                Some(&idx) => idx,
                None => {
                    let idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(byte, idx);
                    idx
                }
            };
            node = next;
        }
        self.nodes[node as usize].terminal_cost = Some(cost);
    }

    /// One step down; `None` means no word continues this way.
    pub fn child(&self, node: u32, byte: u8) -> Option<u32> {
        self.nodes[node as usize].children.get(&byte).copied()
    }

    /// Cost of the word ending at `node`, if one does.
    pub fn terminal_cost(&self, node: u32) -> Option<f64> {
        self.nodes[node as usize].terminal_cost
    }

    /// Full-word lookup, mostly for diagnostics and tests.
    pub fn word_cost(&self, word: &str) -> Option<f64> {
        let mut node = Self::ROOT;
        for &byte in word.as_bytes() {
            node = self.child(node, byte)?;
        }
        self.terminal_cost(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for CostTrie {
    fn default() -> Self {
        Self::new()
    }
}
