//! Arena-backed prefix tree over uppercase words.
//!
//! Nodes are stored in a `Vec` and addressed by [`NodeId`]; node 0 is the
//! root (the empty prefix). The solver walks the trie one letter at a time
//! with [`Trie::child`], clears end-of-word markers as words are found and
//! unlinks nodes whose subtrees no longer lead anywhere, so the trie only
//! shrinks while a search runs. Unlinked nodes stay in the arena but are
//! unreachable.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<u8, NodeId>,
    end_of_word: bool,
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Build a trie holding every word in `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Insert `word`, marking its last node as end-of-word. Inserting a word
    /// twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = self.root();
        for &b in word.as_bytes() {
            node = match self.child(node, b) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.0].children.insert(b, next);
                    next
                }
            };
        }
        self.nodes[node.0].end_of_word = true;
    }

    /// Child of `node` reached by `ch`, if any.
    #[inline]
    pub fn child(&self, node: NodeId, ch: u8) -> Option<NodeId> {
        self.nodes[node.0].children.get(&ch).copied()
    }

    #[inline]
    pub fn is_end_of_word(&self, node: NodeId) -> bool {
        self.nodes[node.0].end_of_word
    }

    #[inline]
    pub fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node.0].children.is_empty()
    }

    /// Clear the end-of-word marker on `node`. Returns whether it was set.
    pub fn consume(&mut self, node: NodeId) -> bool {
        core::mem::replace(&mut self.nodes[node.0].end_of_word, false)
    }

    /// Unlink the child of `parent` reached by `ch` when it has no children
    /// and does not end a word. Returns whether it was removed.
    pub fn prune(&mut self, parent: NodeId, ch: u8) -> bool {
        let Some(child) = self.child(parent, ch) else {
            return false;
        };
        if self.has_children(child) || self.is_end_of_word(child) {
            return false;
        }
        self.nodes[parent.0].children.remove(&ch);
        true
    }

    /// Node reached by walking `prefix` from the root.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(self.root(), |node, b| self.child(node, b))
    }

    /// True when `word` is still a live (unconsumed) word.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| self.is_end_of_word(n))
    }

    /// True when some path from the root spells `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// True when no word remains reachable from the root.
    pub fn is_empty(&self) -> bool {
        !self.has_children(self.root()) && !self.is_end_of_word(self.root())
    }

    /// Every reachable node, depth first from the root.
    pub fn reachable(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.values().copied());
        }
        out
    }
}
