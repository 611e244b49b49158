//! Lattice methods for American option pricing.
//!
//! # Overview
//!
//! * [`convert_to_discrete`] — continuous market inputs → [`DiscreteParameters`]
//! * [`Lattice`] — recombining binomial grid of [`Node`]s stored as a flat arena
//! * [`BinomialModel`] — owns a lattice; futures valuation and American
//!   backward induction with early-exercise detection
//!
//! Node `(i, j)` is the state after `j` up-moves and `i − j` down-moves.
//! Links between nodes are index arithmetic: the up-successor of `(i, j)` is
//! `(i + 1, j + 1)` and the down-successor is `(i + 1, j)`.

pub mod binomial_model;
pub mod parameters;

pub use binomial_model::{BinomialModel, LatticePrice};
pub use parameters::{convert_to_discrete, DiscreteParameters};

use ol_core::{Error, Quantity, Real, Result};

// ─── Node ─────────────────────────────────────────────────────────────────────

/// The quantities held at one lattice node.
///
/// `stock` is fixed when the lattice is built.  `futures` and `option` start
/// empty and are filled by backward induction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Node {
    stock: Real,
    futures: Option<Real>,
    option: Option<Real>,
}

impl Node {
    /// Underlying stock price at this node.
    pub fn stock(&self) -> Real {
        self.stock
    }

    /// Futures fair value, if the futures pass has run.
    pub fn futures(&self) -> Option<Real> {
        self.futures
    }

    /// Option value from the most recent pricing pass, if it reached this node.
    pub fn option(&self) -> Option<Real> {
        self.option
    }

    /// Look up a quantity by name.
    pub fn get(&self, quantity: Quantity) -> Option<Real> {
        match quantity {
            Quantity::Stock => Some(self.stock),
            Quantity::Futures => self.futures,
            Quantity::Option => self.option,
        }
    }
}

// ─── Lattice ──────────────────────────────────────────────────────────────────

/// Offset of the first node of layer `i` in the flat arena.
#[inline]
fn layer_offset(i: usize) -> usize {
    i * (i + 1) / 2
}

/// A recombining binomial lattice.
///
/// The lattice has `steps + 1` layers, with layer `i` holding `i + 1` nodes.
/// All nodes live in one `Vec`, layer after layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    steps: usize,
    nodes: Vec<Node>,
}

impl Lattice {
    /// Build the lattice by forward propagation from the root.
    ///
    /// The root holds `spot`; every node passes `stock · up` to its
    /// up-successor and `stock · down` to its down-successor, so node
    /// `(i, j)` ends up at `spot · up^j · down^(i − j)`.
    ///
    /// # Errors
    /// [`Error::InvalidStepCount`] if `steps == 0`.
    pub fn build(spot: Real, up: Real, down: Real, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(Error::InvalidStepCount(steps));
        }

        let mut nodes = vec![Node::default(); layer_offset(steps + 1)];
        nodes[0].stock = spot;

        for i in 0..steps {
            let here = layer_offset(i);
            let next = layer_offset(i + 1);
            for j in 0..=i {
                let stock = nodes[here + j].stock;
                nodes[next + j + 1].stock = stock * up;
                nodes[next + j].stock = stock * down;
            }
        }

        Ok(Self { steps, nodes })
    }

    // ── Shape ────────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of nodes at time step `i` (always `i + 1`).
    pub fn size(&self, i: usize) -> usize {
        i + 1
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a lattice has at least two layers.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the descendant node at step `i + 1` for a given `branch`.
    ///
    /// `branch = 0` → down, `branch = 1` → up.
    pub fn descendant(&self, _i: usize, index: usize, branch: usize) -> usize {
        index + branch
    }

    /// Coordinates of the up-successor of `(i, j)`, `None` on the last layer.
    pub fn up_successor(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        (i < self.steps && j <= i).then_some((i + 1, j + 1))
    }

    /// Coordinates of the down-successor of `(i, j)`, `None` on the last layer.
    pub fn down_successor(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        (i < self.steps && j <= i).then_some((i + 1, j))
    }

    /// The node that reaches `(i, j)` by an up-move, absent when `j == 0`.
    pub fn up_predecessor(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        (i <= self.steps && j > 0 && j <= i).then(|| (i - 1, j - 1))
    }

    /// The node that reaches `(i, j)` by a down-move, absent when `j == i`.
    pub fn down_predecessor(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        (i <= self.steps && j < i).then(|| (i - 1, j))
    }

    // ── Node access ──────────────────────────────────────────────────────

    fn position(&self, i: usize, j: usize) -> Result<usize> {
        if i > self.steps {
            return Err(Error::IndexOutOfRange {
                index: i,
                size: self.steps + 1,
            });
        }
        if j > i {
            return Err(Error::IndexOutOfRange {
                index: j,
                size: i + 1,
            });
        }
        Ok(layer_offset(i) + j)
    }

    /// Node at `(i, j)`.
    pub fn node(&self, i: usize, j: usize) -> Result<&Node> {
        self.position(i, j).map(|p| &self.nodes[p])
    }

    /// All nodes of layer `i`, ordered by number of up-moves.
    pub fn layer(&self, i: usize) -> Result<&[Node]> {
        self.position(i, 0)?;
        Ok(self.layer_nodes(i))
    }

    /// Value of `quantity` at `(i, j)`.
    ///
    /// # Errors
    /// [`Error::ValueNotYetComputed`] if the pass producing `quantity` has
    /// not reached this node; [`Error::IndexOutOfRange`] for bad coordinates.
    pub fn value(&self, quantity: Quantity, i: usize, j: usize) -> Result<Real> {
        self.node(i, j)?
            .get(quantity)
            .ok_or(Error::ValueNotYetComputed {
                quantity,
                step: i,
                index: j,
            })
    }

    /// Stock price at `(i, j)`.
    pub fn stock(&self, i: usize, j: usize) -> Result<Real> {
        self.value(Quantity::Stock, i, j)
    }

    /// Futures fair value at `(i, j)`.
    pub fn futures(&self, i: usize, j: usize) -> Result<Real> {
        self.value(Quantity::Futures, i, j)
    }

    /// Option value at `(i, j)` from the most recent pricing pass.
    pub fn option(&self, i: usize, j: usize) -> Result<Real> {
        self.value(Quantity::Option, i, j)
    }

    /// Whether every node carries a futures value.
    pub fn has_futures(&self) -> bool {
        self.nodes.iter().all(|n| n.futures.is_some())
    }

    // ── Mutation (backward-induction passes) ─────────────────────────────

    pub(crate) fn layer_nodes(&self, i: usize) -> &[Node] {
        let start = layer_offset(i);
        &self.nodes[start..start + i + 1]
    }

    fn layer_mut(&mut self, i: usize) -> &mut [Node] {
        let start = layer_offset(i);
        &mut self.nodes[start..start + i + 1]
    }

    /// Store `values` as the futures quantity of layer `i`.
    pub(crate) fn set_futures(&mut self, i: usize, values: &[Real]) {
        for (node, &v) in self.layer_mut(i).iter_mut().zip(values) {
            node.futures = Some(v);
        }
    }

    /// Store `values` as the option quantity of layer `i`.
    pub(crate) fn set_options(&mut self, i: usize, values: &[Real]) {
        for (node, &v) in self.layer_mut(i).iter_mut().zip(values) {
            node.option = Some(v);
        }
    }

    /// Forget every option value.
    pub(crate) fn clear_options(&mut self) {
        for node in &mut self.nodes {
            node.option = None;
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
