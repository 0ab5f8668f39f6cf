//! Letter trie over the lowercase Latin alphabet
//!
//! A 26-way prefix tree storing a set of words. Each node owns its children
//! exclusively (`Option<Box<TrieNode>>` per letter slot), so teardown is
//! plain drop propagation. The word count is cached and kept consistent by
//! every mutating operation; `word_count` never traverses.

/// One slot per letter a-z
const SLOTS: usize = 26;

#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; SLOTS],
    is_word: bool,
}

/// Map a character to its child slot index
///
/// Returns `None` for anything that is not an ASCII letter; no edge can
/// exist for such a character.
#[inline]
fn slot(byte: u8) -> Option<usize> {
    byte.is_ascii_alphabetic()
        .then(|| (byte.to_ascii_lowercase() - b'a') as usize)
}

/// A set of words stored as a prefix tree
///
/// # Examples
/// ```
/// use spellbee::trie::LetterTrie;
///
/// let mut trie = LetterTrie::new();
/// assert!(trie.insert("dog"));
/// assert!(trie.insert("dogged"));
/// assert!(!trie.insert("dog")); // Duplicate
///
/// assert_eq!(trie.word_count(), 2);
/// assert_eq!(trie.words(), vec!["dog", "dogged"]);
/// ```
#[derive(Debug, Default)]
pub struct LetterTrie {
    root: Box<TrieNode>,
    count: usize,
}

impl LetterTrie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, case-insensitively
    ///
    /// Returns false without mutating anything if the word is empty,
    /// contains a non-letter character, or is already stored.
    pub fn insert(&mut self, word: &str) -> bool {
        // Validate up front so a bad character never leaves a half-built path
        if word.is_empty() || word.bytes().any(|b| !b.is_ascii_alphabetic()) {
            return false;
        }

        let mut node = &mut self.root;
        for byte in word.bytes() {
            let idx = (byte.to_ascii_lowercase() - b'a') as usize;
            node = node.children[idx].get_or_insert_with(Box::default);
        }

        if node.is_word {
            return false;
        }
        node.is_word = true;
        self.count += 1;
        true
    }

    /// Check whether the path spelled by `word` exists, case-insensitively
    ///
    /// This is path existence, not word membership: any prefix of a stored
    /// word resolves true, whether or not its own word flag is set. The
    /// engine's dictionary and already-found checks rely on exactly this.
    #[must_use]
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some()
    }

    fn walk(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for byte in word.bytes() {
            node = node.children[slot(byte)?].as_ref()?;
        }
        Some(node)
    }

    /// Remove a stored word
    ///
    /// Returns false (no mutation) if the path does not exist or does not
    /// end on a stored word. On success clears the terminal word flag,
    /// drops each of the terminal's child subtrees that holds no word, and
    /// detaches the terminal itself once nothing below it spells a word.
    /// Pruning reaches one level above the terminal only; dead chains
    /// further up are not reclaimed until a later removal walks past them.
    pub fn remove(&mut self, word: &str) -> bool {
        let mut indices = Vec::with_capacity(word.len());
        for byte in word.bytes() {
            let Some(idx) = slot(byte) else {
                return false;
            };
            indices.push(idx);
        }

        if !remove_at(&mut self.root, &indices) {
            return false;
        }
        self.count -= 1;
        true
    }

    /// Remove every word and release all nodes
    pub fn clear(&mut self) {
        self.root = Box::default();
        self.count = 0;
    }

    /// Number of stored words, O(1)
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.count
    }

    /// True if no words are stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All stored words in ascending lexicographic order
    ///
    /// Depth-first walk visiting child slots a to z, emitting each word
    /// before descending further, so the result is sorted by construction.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.count);
        let mut prefix = String::new();
        collect_words(&self.root, &mut prefix, &mut words);
        words
    }
}

fn remove_at(node: &mut TrieNode, indices: &[usize]) -> bool {
    let Some((&idx, rest)) = indices.split_first() else {
        // At the terminal node
        if !node.is_word {
            return false;
        }
        node.is_word = false;
        for child_slot in &mut node.children {
            if child_slot.as_ref().is_some_and(|child| !subtree_has_word(child)) {
                *child_slot = None;
            }
        }
        return true;
    };

    let Some(child) = node.children[idx].as_mut() else {
        return false;
    };
    if !remove_at(child, rest) {
        return false;
    }
    // Detach the terminal from its parent once it spells nothing; levels
    // further up keep their (possibly dead) chains.
    if rest.is_empty() && !subtree_has_word(child) {
        node.children[idx] = None;
    }
    true
}

fn subtree_has_word(node: &TrieNode) -> bool {
    node.is_word || node.children.iter().flatten().any(|child| subtree_has_word(child))
}

fn collect_words(node: &TrieNode, prefix: &mut String, words: &mut Vec<String>) {
    if node.is_word {
        words.push(prefix.clone());
    }
    for (idx, child) in node.children.iter().enumerate() {
        if let Some(child) = child {
            prefix.push((b'a' + idx as u8) as char);
            collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}
