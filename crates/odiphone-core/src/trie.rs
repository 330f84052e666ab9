use std::collections::HashMap;

#[derive(Debug)]
struct Node {
    children: HashMap<char, Node>,
    code: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            code: None,
        }
    }
}

/// Character trie over table keys, used for longest-cluster matching.
#[derive(Debug)]
pub(crate) struct GlyphTrie {
    root: Node,
    len: usize,
}

impl GlyphTrie {
    pub(crate) fn new() -> Self {
        Self {
            root: Node::new(),
            len: 0,
        }
    }

    pub(crate) fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut trie = Self::new();
        for (glyphs, code) in entries {
            trie.insert(glyphs, code);
        }
        trie
    }

    pub(crate) fn insert(&mut self, glyphs: &str, code: &str) {
        let mut node = &mut self.root;
        for c in glyphs.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        if node.code.replace(code.to_string()).is_none() {
            self.len += 1;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Longest key that is a prefix of `chars`, as `(char_count, code)`.
    pub(crate) fn longest_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in chars.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(code) = &node.code {
                best = Some((i + 1, code.as_str()));
            }
        }
        best
    }
}
