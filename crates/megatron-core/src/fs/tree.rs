//! Immutable directory tree snapshot.
//!
//! [`FileTree::build`] walks a root directory once, eagerly, and stores every
//! entry in an arena. Nodes refer to each other through [`NodeId`] handles:
//! children are owned top-down by the arena, and the parent handle is a plain
//! lookup used when ascending.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::nfc_string;

/// Maximum directory depth walked before giving up.
///
/// Exceeding it is fatal even with [`BuildOptions::skip_unreadable`] set.
pub const MAX_TREE_DEPTH: usize = 64;

/// Handle to a node inside a [`FileTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Options controlling how [`FileTree::build_with`] reacts to failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Keep unreadable descendants as empty placeholder nodes instead of
    /// aborting the whole build.
    pub skip_unreadable: bool,
}

/// A single file or directory in the tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    path: PathBuf,
    name: String,
    is_dir: bool,
    is_file: bool,
    size: u64,
    unreadable: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl TreeNode {
    fn new(path: PathBuf, parent: Option<NodeId>, metadata: &fs::Metadata) -> Self {
        let name = display_name(&path);
        Self {
            path,
            name,
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
            size: if metadata.is_file() { metadata.len() } else { 0 },
            unreadable: false,
            parent,
            children: Vec::new(),
        }
    }

    fn placeholder(path: PathBuf, parent: NodeId) -> Self {
        let name = display_name(&path);
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        Self {
            path,
            name,
            is_dir,
            is_file: false,
            size: 0,
            unreadable: true,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Full path: the root path as given, joined with entry names.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// NFC-normalised base name of the path.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` for regular files (not directories, sockets, devices...).
    pub fn is_file(&self) -> bool {
        self.is_file
    }

    /// Size in bytes. For directories, the sum of every regular file beneath.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns `true` if this entry could not be read and was kept as a placeholder.
    pub fn is_unreadable(&self) -> bool {
        self.unreadable
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in listing order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-backed snapshot of a directory subtree.
#[derive(Debug, Clone)]
pub struct FileTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl FileTree {
    /// Builds the tree rooted at `root`, aborting on the first filesystem error.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if `root` does not resolve.
    /// - [`CoreError::NotADirectory`] if `root` is not a directory.
    /// - [`CoreError::PermissionDenied`] / [`CoreError::Io`] if any entry
    ///   beneath `root` cannot be read, or a symlink leads back to one of
    ///   its own ancestors.
    /// - [`CoreError::TooDeep`] past [`MAX_TREE_DEPTH`] levels.
    pub fn build(root: &Path) -> CoreResult<Self> {
        Self::build_with(root, BuildOptions::default())
    }

    /// Builds the tree rooted at `root` using the given [`BuildOptions`].
    ///
    /// The root itself must always be readable, even with
    /// [`BuildOptions::skip_unreadable`] set.
    pub fn build_with(root: &Path, options: BuildOptions) -> CoreResult<Self> {
        ensure_directory(root)?;

        let mut walker = Walker {
            nodes: Vec::new(),
            ancestors: Vec::new(),
            options,
        };
        let root_id = walker.visit(root.to_path_buf(), None, 0)?;
        let tree = Self {
            nodes: walker.nodes,
            root: root_id,
        };

        tracing::info!(
            root = %root.display(),
            nodes = tree.len(),
            bytes = tree.node(root_id).size(),
            "built directory tree"
        );
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Returns the `index`-th child of `id`, if any.
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// Iterates over the child nodes of `id` in listing order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> + '_ {
        self.node(id).children.iter().map(move |&c| self.node(c))
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Checks that `path` resolves to a directory.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if the path does not exist.
/// - [`CoreError::NotADirectory`] if it exists but is not a directory.
pub fn ensure_directory(path: &Path) -> CoreResult<()> {
    let metadata = fs::metadata(path).map_err(|e| CoreError::from_io(path, e))?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

struct Walker {
    nodes: Vec<TreeNode>,
    /// Canonical paths of the directories currently being walked, root first.
    ancestors: Vec<PathBuf>,
    options: BuildOptions,
}

impl Walker {
    fn push(&mut self, node: TreeNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Visits `path` and returns its id.
    ///
    /// Everything that can fail for this entry happens before the node is
    /// pushed, so an error never leaves an unlinked node in the arena.
    fn visit(&mut self, path: PathBuf, parent: Option<NodeId>, depth: usize) -> CoreResult<NodeId> {
        if depth > MAX_TREE_DEPTH {
            return Err(CoreError::TooDeep {
                limit: MAX_TREE_DEPTH,
                path,
            });
        }

        let metadata = fs::metadata(&path).map_err(|e| CoreError::from_io(&path, e))?;
        if !metadata.is_dir() {
            return Ok(self.push(TreeNode::new(path, parent, &metadata)));
        }

        let canonical = fs::canonicalize(&path).map_err(|e| CoreError::from_io(&path, e))?;
        if self.ancestors.contains(&canonical) {
            return Err(CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("symlink cycle at {}", path.display()),
            )));
        }

        let mut names = fs::read_dir(&path)
            .and_then(|rd| {
                rd.map(|entry| entry.map(|e| e.file_name()))
                    .collect::<std::io::Result<Vec<_>>>()
            })
            .map_err(|e| CoreError::from_io(&path, e))?;
        names.sort();

        let id = self.push(TreeNode::new(path.clone(), parent, &metadata));

        self.ancestors.push(canonical);
        let result = self.visit_children(id, &path, names, depth);
        self.ancestors.pop();
        result?;

        Ok(id)
    }

    fn visit_children(
        &mut self,
        id: NodeId,
        path: &Path,
        names: Vec<std::ffi::OsString>,
        depth: usize,
    ) -> CoreResult<()> {
        let mut size = 0u64;

        for name in names {
            let child_path = path.join(&name);
            let child = match self.visit(child_path.clone(), Some(id), depth + 1) {
                Ok(child) => child,
                Err(err @ CoreError::TooDeep { .. }) => return Err(err),
                Err(err) if self.options.skip_unreadable => {
                    tracing::warn!(path = %child_path.display(), "skipping unreadable entry: {err}");
                    self.push(TreeNode::placeholder(child_path, id))
                }
                Err(err) => return Err(err),
            };
            size += self.nodes[child.0].size;
            self.nodes[id.0].children.push(child);
        }

        self.nodes[id.0].size = size;
        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => nfc_string(&name.to_string_lossy()),
        None => nfc_string(&path.to_string_lossy()),
    }
}
