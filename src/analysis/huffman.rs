//! Huffman prefix codes over region areas
//!
//! Smaller regions receive longer codes. Nodes live in an arena vector and
//! reference each other by index; the heap breaks weight ties by insertion
//! sequence so code assignment is deterministic.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

#[derive(Debug, Clone, Copy)]
struct Node {
    weight: usize,
    // Leaf nodes carry the region label
    label: Option<i32>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Huffman tree over a label → weight map
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    arena: Vec<Node>,
    root: Option<usize>,
}

impl HuffmanTree {
    /// Build the tree from region weights (typically pixel areas)
    ///
    /// An empty map yields an empty tree; a single region yields one leaf
    /// whose code is defined as `"0"`.
    pub fn from_weights(weights: &BTreeMap<i32, usize>) -> Self {
        let mut arena: Vec<Node> = Vec::with_capacity(weights.len().saturating_mul(2));
        let mut heap: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();

        for (&label, &weight) in weights {
            let index = arena.len();
            arena.push(Node {
                weight,
                label: Some(label),
                left: None,
                right: None,
            });
            heap.push(Reverse((weight, index)));
        }

        while heap.len() > 1 {
            let Some(Reverse((first_weight, first))) = heap.pop() else {
                break;
            };
            let Some(Reverse((second_weight, second))) = heap.pop() else {
                break;
            };

            let index = arena.len();
            arena.push(Node {
                weight: first_weight + second_weight,
                label: None,
                left: Some(first),
                right: Some(second),
            });
            heap.push(Reverse((first_weight + second_weight, index)));
        }

        let root = heap.pop().map(|Reverse((_, index))| index);
        Self { arena, root }
    }

    /// Total weight aggregated at the root
    pub fn total_weight(&self) -> usize {
        self.root
            .and_then(|index| self.arena.get(index))
            .map_or(0, |node| node.weight)
    }

    /// Walk the tree and emit each region's prefix code
    ///
    /// Left edges append `'0'`, right edges `'1'`. A lone leaf gets `"0"`.
    pub fn codes(&self) -> BTreeMap<i32, String> {
        let mut codes = BTreeMap::new();
        let Some(root) = self.root else {
            return codes;
        };

        // Iterative walk keeps the deny-recursion posture of the solvers
        let mut stack: Vec<(usize, String)> = vec![(root, String::new())];
        while let Some((index, prefix)) = stack.pop() {
            let Some(node) = self.arena.get(index) else {
                continue;
            };

            match (node.label, node.left, node.right) {
                (Some(label), None, None) => {
                    let code = if prefix.is_empty() {
                        "0".to_string()
                    } else {
                        prefix
                    };
                    codes.insert(label, code);
                }
                (_, left, right) => {
                    if let Some(child) = left {
                        stack.push((child, format!("{prefix}0")));
                    }
                    if let Some(child) = right {
                        stack.push((child, format!("{prefix}1")));
                    }
                }
            }
        }

        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_form_a_prefix_free_set() {
        let weights = BTreeMap::from([(1, 40), (2, 30), (3, 20), (4, 10)]);
        let tree = HuffmanTree::from_weights(&weights);
        let codes = tree.codes();

        assert_eq!(codes.len(), 4);
        assert_eq!(tree.total_weight(), 100);

        let all: Vec<&String> = codes.values().collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} prefixes {b}");
                }
            }
        }
    }

    #[test]
    fn heavier_regions_get_codes_no_longer_than_lighter_ones() {
        let weights = BTreeMap::from([(7, 1), (8, 2), (9, 100)]);
        let codes = HuffmanTree::from_weights(&weights).codes();

        let len_of = |label: i32| codes.get(&label).map_or(usize::MAX, String::len);
        assert!(len_of(9) <= len_of(8));
        assert!(len_of(9) <= len_of(7));
    }

    #[test]
    fn single_region_gets_the_zero_code() {
        let weights = BTreeMap::from([(5, 12)]);
        let codes = HuffmanTree::from_weights(&weights).codes();
        assert_eq!(codes.get(&5).map(String::as_str), Some("0"));
    }
}
