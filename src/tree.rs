//! Builds and renders the ASCII tree of included paths.

use std::collections::BTreeMap;

/// A node in the included-path hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(BTreeMap<String, TreeNode>),
    File,
}

impl Default for TreeNode {
    fn default() -> Self {
        TreeNode::Directory(BTreeMap::new())
    }
}

impl TreeNode {
    /// Builds a tree from `/`-separated relative paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TreeNode::default();
        for path in paths {
            root.insert(path.as_ref());
        }
        root
    }

    /// Inserts one relative path. A directory never gets replaced by a leaf of
    /// the same name; a leaf in the way of a directory is turned into one.
    pub fn insert(&mut self, path: &str) {
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
        let mut current = self;
        while let Some(segment) = segments.next() {
            let TreeNode::Directory(children) = current else {
                return;
            };
            if segments.peek().is_none() {
                children.entry(segment.to_string()).or_insert(TreeNode::File);
                return;
            }
            let child = children.entry(segment.to_string()).or_default();
            if *child == TreeNode::File {
                #[cfg(feature = "logging")]
                tracing::debug!("'{}' is both a file and a directory in {}", segment, path);
                *child = TreeNode::default();
            }
            current = child;
        }
    }

    /// Renders the children of this node, directories first, each group sorted
    /// case-insensitively.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into("", &mut lines);
        lines
    }

    fn render_into(&self, prefix: &str, lines: &mut Vec<String>) {
        let TreeNode::Directory(children) = self else {
            return;
        };
        let (mut dirs, mut files): (Vec<_>, Vec<_>) = children
            .iter()
            .partition(|(_, node)| matches!(node, TreeNode::Directory(_)));
        dirs.sort_by_key(|(name, _)| name.to_lowercase());
        files.sort_by_key(|(name, _)| name.to_lowercase());

        let count = dirs.len() + files.len();
        for (idx, (name, node)) in dirs.into_iter().chain(files).enumerate() {
            let last = idx + 1 == count;
            let branch = if last { "└── " } else { "├── " };
            lines.push(format!("{}{}{}", prefix, branch, name));
            if matches!(node, TreeNode::Directory(_)) {
                let extension = if last { "    " } else { "│   " };
                node.render_into(&format!("{}{}", prefix, extension), lines);
            }
        }
    }
}

/// The full tree text: a title line followed by the rendered nodes.
pub fn render_tree(title: &str, paths: &[&str]) -> String {
    let mut lines = vec![title.to_string()];
    lines.extend(TreeNode::from_paths(paths).render());
    lines.join("\n")
}
