//! Binomial model: a lattice plus the pricing passes that run over it.
//!
//! The stock lattice is built eagerly when the model is constructed.
//! Futures values are filled lazily the first time a futures-based option is
//! priced and then persist on the nodes.  Option values are recomputed from
//! scratch by every pricing call.

use ol_core::{
    ensure, ArbitragePolicy, Error, LatticeSettings, Probability, Quantity, Real, Result,
};
use ol_instruments::{OptionType, Payoff, PlainVanillaPayoff};
use tracing::{debug, warn};

use super::{DiscreteParameters, Lattice};

/// Result of an American pricing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePrice {
    /// Option value at the root node.
    pub value: Real,
    /// Earliest layer at which immediate exercise is strictly better than
    /// holding, at any node.  Equals the start layer when early exercise is
    /// never optimal.
    pub early_exercise_step: usize,
}

impl From<LatticePrice> for (Real, usize) {
    fn from(p: LatticePrice) -> Self {
        (p.value, p.early_exercise_step)
    }
}

/// A binomial pricing model owning one recombining lattice.
///
/// Pricing methods take `&mut self`: they write futures and option values
/// into the lattice, so one model cannot be priced from two threads at once.
#[derive(Debug, Clone)]
pub struct BinomialModel {
    spot: Real,
    up: Real,
    down: Real,
    probability: Probability,
    growth: Real,
    settings: LatticeSettings,
    lattice: Lattice,
    exercise_boundary: Vec<Vec<usize>>,
}

impl BinomialModel {
    /// Build a model with default [`LatticeSettings`].
    ///
    /// # Arguments
    /// * `spot` — initial underlying price
    /// * `up`, `down` — per-step multiplicative moves
    /// * `probability` — risk-neutral up-probability
    /// * `growth` — per-step riskless growth factor; continuation values are
    ///   discounted by `1 / growth`
    /// * `steps` — number of lattice steps
    pub fn new(
        spot: Real,
        up: Real,
        down: Real,
        probability: Probability,
        growth: Real,
        steps: usize,
    ) -> Result<Self> {
        Self::with_settings(
            spot,
            up,
            down,
            probability,
            growth,
            steps,
            LatticeSettings::default(),
        )
    }

    /// Build a model with explicit settings.
    ///
    /// # Errors
    /// * [`Error::InvalidStepCount`] if `steps == 0`
    /// * [`Error::Precondition`] for non-positive spot, factors or growth
    /// * [`Error::IllDefinedProbability`] if `probability` is NaN or infinite,
    ///   whatever the arbitrage policy
    /// * [`Error::ArbitrageViolation`] if `probability ∉ [0, 1]` under
    ///   [`ArbitragePolicy::Enforce`]
    #[allow(clippy::too_many_arguments)]
    pub fn with_settings(
        spot: Real,
        up: Real,
        down: Real,
        probability: Probability,
        growth: Real,
        steps: usize,
        settings: LatticeSettings,
    ) -> Result<Self> {
        if steps == 0 {
            return Err(Error::InvalidStepCount(steps));
        }
        ensure!(spot.is_finite() && spot > 0.0, "spot must be positive, got {spot}");
        ensure!(
            up.is_finite() && down.is_finite() && up > 0.0 && down > 0.0,
            "up/down factors must be positive, got u = {up}, d = {down}"
        );
        ensure!(
            growth.is_finite() && growth > 0.0,
            "growth factor must be positive, got {growth}"
        );
        if !probability.is_finite() {
            return Err(Error::IllDefinedProbability { up, down, growth });
        }

        if !settings.check_probability(probability)?
            && settings.arbitrage_policy == ArbitragePolicy::Warn
        {
            warn!(
                probability,
                up, down, "risk-neutral probability outside [0, 1]; inputs admit arbitrage"
            );
        }

        let lattice = Lattice::build(spot, up, down, steps)?;
        debug!(steps, nodes = lattice.len(), spot, up, down, "built binomial lattice");

        Ok(Self {
            spot,
            up,
            down,
            probability,
            growth,
            settings,
            lattice,
            exercise_boundary: Vec::new(),
        })
    }

    /// Build a model from converter output with default settings.
    pub fn from_parameters(params: &DiscreteParameters) -> Result<Self> {
        Self::from_parameters_with_settings(params, LatticeSettings::default())
    }

    /// Build a model from converter output with explicit settings.
    pub fn from_parameters_with_settings(
        params: &DiscreteParameters,
        settings: LatticeSettings,
    ) -> Result<Self> {
        Self::with_settings(
            params.spot,
            params.up,
            params.down,
            params.probability,
            params.growth,
            params.steps,
            settings,
        )
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Initial underlying price.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Up factor.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down factor.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Risk-neutral up-probability.
    pub fn probability(&self) -> Probability {
        self.probability
    }

    /// Per-step growth factor.
    pub fn growth(&self) -> Real {
        self.growth
    }

    /// Number of lattice steps.
    pub fn steps(&self) -> usize {
        self.lattice.steps()
    }

    /// Settings the model was built with.
    pub fn settings(&self) -> &LatticeSettings {
        &self.settings
    }

    /// The underlying lattice, with whatever quantities the last passes left.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Nodes (by up-move count) where the last pricing pass found immediate
    /// exercise strictly better than holding, one entry per layer from the
    /// root to the start layer.
    ///
    /// Empty before the first pricing call or when boundary recording is
    /// switched off.
    pub fn exercise_boundary(&self) -> &[Vec<usize>] {
        &self.exercise_boundary
    }

    // ── Futures ──────────────────────────────────────────────────────────

    /// Fill the futures quantity at every node.
    ///
    /// At the last layer the futures price equals the stock price.  Earlier
    /// layers take the undiscounted risk-neutral expectation of their
    /// successors.  Running it again overwrites the previous values.
    pub fn fill_futures(&mut self) {
        let n = self.lattice.steps();
        let q = self.probability;

        let mut values: Vec<Real> = self
            .lattice
            .layer_nodes(n)
            .iter()
            .map(|node| node.stock())
            .collect();
        self.lattice.set_futures(n, &values);

        for i in (0..n).rev() {
            for j in 0..self.lattice.size(i) {
                let d_up = self.lattice.descendant(i, j, 1);
                let d_down = self.lattice.descendant(i, j, 0);
                values[j] = q * values[d_up] + (1.0 - q) * values[d_down];
            }
            self.lattice.set_futures(i, &values[..=i]);
        }

        debug!(steps = n, root = values[0], "filled futures lattice");
    }

    // ── American options ─────────────────────────────────────────────────

    /// Price an American option by backward induction.
    ///
    /// With `futures_step = None` the exercise value is computed on the stock
    /// price and induction starts at the last layer.  With
    /// `futures_step = Some(m)` it is computed on the futures price (filled
    /// first if absent) and induction starts at layer `m`, which prices an
    /// option expiring before the futures contract does.
    ///
    /// Returns the root value and the earliest layer at which early exercise
    /// is strictly optimal somewhere.
    ///
    /// # Errors
    /// * [`Error::IndexOutOfRange`] if `m` exceeds the number of steps
    /// * [`Error::Precondition`] for a non-finite strike
    pub fn american_option(
        &mut self,
        strike: Real,
        option_type: OptionType,
        futures_step: Option<usize>,
    ) -> Result<LatticePrice> {
        ensure!(strike.is_finite(), "strike must be finite, got {strike}");

        let (base, start) = match futures_step {
            Some(m) => {
                if m > self.lattice.steps() {
                    return Err(Error::IndexOutOfRange {
                        index: m,
                        size: self.lattice.steps() + 1,
                    });
                }
                if !self.lattice.has_futures() {
                    self.fill_futures();
                }
                (Quantity::Futures, m)
            }
            None => (Quantity::Stock, self.lattice.steps()),
        };

        let payoff = PlainVanillaPayoff::new(option_type, strike);
        let discount = 1.0 / self.growth;
        let q = self.probability;
        let record = self.settings.record_exercise_boundary;

        self.lattice.clear_options();
        self.exercise_boundary.clear();
        if record {
            self.exercise_boundary.resize(start + 1, Vec::new());
        }

        // Exercise values at the start layer
        let mut values: Vec<Real> = (0..self.lattice.size(start))
            .map(|j| self.lattice.value(base, start, j).map(|s| payoff.value(s)))
            .collect::<Result<_>>()?;
        self.lattice.set_options(start, &values);

        // Roll back, allowing exercise at every node
        let mut early_exercise = start;
        for i in (0..start).rev() {
            for j in 0..self.lattice.size(i) {
                let d_up = self.lattice.descendant(i, j, 1);
                let d_down = self.lattice.descendant(i, j, 0);
                let hold = discount * (q * values[d_up] + (1.0 - q) * values[d_down]);
                let exercise = payoff.value(self.lattice.value(base, i, j)?);
                if exercise > hold {
                    early_exercise = early_exercise.min(i);
                    if record {
                        self.exercise_boundary[i].push(j);
                    }
                }
                values[j] = exercise.max(hold);
            }
            self.lattice.set_options(i, &values[..=i]);
        }

        let price = LatticePrice {
            value: values[0],
            early_exercise_step: early_exercise,
        };
        debug!(
            payoff = %payoff.description(),
            base = %base,
            start,
            value = price.value,
            early_exercise_step = price.early_exercise_step,
            "priced american option"
        );
        Ok(price)
    }

    /// American call; see [`american_option`](Self::american_option).
    pub fn american_call(&mut self, strike: Real, futures_step: Option<usize>) -> Result<LatticePrice> {
        self.american_option(strike, OptionType::Call, futures_step)
    }

    /// American put; see [`american_option`](Self::american_option).
    pub fn american_put(&mut self, strike: Real, futures_step: Option<usize>) -> Result<LatticePrice> {
        self.american_option(strike, OptionType::Put, futures_step)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
