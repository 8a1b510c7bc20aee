//! Search and predecessor/successor lookup.
//!
//! A [`Loc`] names a node and a position inside it. It borrows the tree,
//! so it can never outlive the lookup that produced it.

use crate::common::{Error, Result};
use crate::index::btree::{Comparator, Node};
use crate::sequence::Position;

/// A node-and-position reference produced by a search.
#[derive(Debug, Clone, Copy)]
pub struct Loc<'a, K> {
    node: &'a Node<K>,
    position: Position,
}

impl<'a, K> Loc<'a, K> {
    fn new(node: &'a Node<K>, position: Position) -> Self {
        Self { node, position }
    }

    /// The node holding (or that would hold) the key.
    #[inline]
    pub fn node(&self) -> &'a Node<K> {
        self.node
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The key at this location, if the search hit.
    pub fn key(&self) -> Option<&'a K> {
        match self.position {
            Position::Found(i) => self.node.keys.get(i),
            Position::Vacant(_) => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.position.is_found()
    }
}

/// Walk from `node` towards `key`.
///
/// Returns the node holding `key` with [`Position::Found`], or the leaf
/// where it would be inserted with [`Position::Vacant`].
pub fn locate<'a, K, C: Comparator<K>>(node: &'a Node<K>, key: &K, cmp: &C) -> Loc<'a, K> {
    let mut current = node;
    loop {
        let position = current.position(key, cmp);
        match position {
            Position::Found(_) => return Loc::new(current, position),
            Position::Vacant(i) => match current.child(i) {
                Some(child) if !current.is_leaf() => current = child,
                _ => return Loc::new(current, position),
            },
        }
    }
}

/// Rightmost key of the subtree left of a key held in an internal node.
///
/// # Errors
/// Returns `Error::InvariantViolation` if `loc` is not a hit in an internal node.
pub fn predecessor_of<'a, K>(loc: &Loc<'a, K>) -> Result<Loc<'a, K>> {
    let index = internal_hit(loc)?;
    let mut current = loc.node.try_child(index)?;
    while !current.is_leaf() {
        current = current.try_child(current.children.len().saturating_sub(1))?;
    }
    last_key(current)
}

/// Leftmost key of the subtree right of a key held in an internal node.
///
/// # Errors
/// Returns `Error::InvariantViolation` if `loc` is not a hit in an internal node.
pub fn successor_of<'a, K>(loc: &Loc<'a, K>) -> Result<Loc<'a, K>> {
    let index = internal_hit(loc)?;
    let mut current = loc.node.try_child(index + 1)?;
    while !current.is_leaf() {
        current = current.try_child(0)?;
    }
    if current.is_empty() {
        return Err(Error::invariant("empty leaf below internal node"));
    }
    Ok(Loc::new(current, Position::Found(0)))
}

/// The key that replaces `key` when it is removed from an internal node.
///
/// For a key held in an internal node this is its in-order predecessor.
/// A key held in a leaf needs no replacement and is returned as-is.
///
/// # Errors
/// Returns `Error::KeyNotFound` if `key` is absent.
pub fn inorder_predecessor<'a, K, C: Comparator<K>>(
    root: &'a Node<K>,
    key: &K,
    cmp: &C,
) -> Result<Loc<'a, K>> {
    let loc = locate(root, key, cmp);
    if !loc.is_found() {
        return Err(Error::KeyNotFound);
    }
    if loc.node.is_leaf() {
        return Ok(loc);
    }
    predecessor_of(&loc)
}

/// Mirror of [`inorder_predecessor`] using the in-order successor.
///
/// # Errors
/// Returns `Error::KeyNotFound` if `key` is absent.
pub fn inorder_successor<'a, K, C: Comparator<K>>(
    root: &'a Node<K>,
    key: &K,
    cmp: &C,
) -> Result<Loc<'a, K>> {
    let loc = locate(root, key, cmp);
    if !loc.is_found() {
        return Err(Error::KeyNotFound);
    }
    if loc.node.is_leaf() {
        return Ok(loc);
    }
    successor_of(&loc)
}

fn internal_hit<K>(loc: &Loc<'_, K>) -> Result<usize> {
    match loc.position {
        Position::Found(i) if !loc.node.is_leaf() => Ok(i),
        _ => Err(Error::invariant(
            "predecessor/successor lookup needs a key in an internal node",
        )),
    }
}

fn last_key<K>(leaf: &Node<K>) -> Result<Loc<'_, K>> {
    match leaf.len() {
        0 => Err(Error::invariant("empty leaf below internal node")),
        n => Ok(Loc::new(leaf, Position::Found(n - 1))),
    }
}
