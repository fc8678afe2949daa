//! Top-level arbitration state machine.

use super::{IntersectionState, PairResolver, StandardPairs, SystemClock, TimeSource};
use crate::config::{load_table, ConfigError, ConfigSource};
use crate::core::{State, StateTransition, TransitionHistory};
use crate::error::SignalError;
use crate::light::StepLabel;
use crate::pattern::{default_table, install_fail_safe};
use crate::sequencing::Synchronizer;
use crate::table::{Direction, LightSetTable};

/// Arbiter wired to the wall clock and the standard pairs.
pub type Intersection = Arbiter<SystemClock, StandardPairs>;

/// Owns the intersection's light sets and decides which pair is active.
///
/// The arbiter is driven entirely by the caller: each [`Arbiter::tick`]
/// advances the active pair once and swaps pairs when both members have
/// finished. Nothing here blocks, spawns or sleeps. A multi-threaded host
/// must guard the whole arbiter with a single lock, since the display side
/// reads the same light sets that ticking mutates.
///
/// # Example
///
/// ```rust
/// use signalbox::arbiter::{Arbiter, ManualClock, StandardPairs};
/// use signalbox::config::ConfigSource;
/// use signalbox::IntersectionState;
///
/// let mut arbiter = Arbiter::new(ManualClock::new(0), StandardPairs);
/// arbiter.init(&ConfigSource::Defaults).unwrap();
///
/// arbiter.tick(0);
/// assert_eq!(arbiter.state(), IntersectionState::NorthSouth);
///
/// // The default pattern finishes at 11 seconds. Each tick moves at most
/// // one step, so a late caller catches up over several ticks.
/// for _ in 0..5 {
///     arbiter.tick(11_000);
/// }
/// assert_eq!(arbiter.state(), IntersectionState::EastWest);
/// ```
pub struct Arbiter<C: TimeSource, R: PairResolver> {
    state: IntersectionState,
    table: LightSetTable,
    sync: Synchronizer,
    clock: C,
    resolver: R,
    fail_safe: bool,
    history: TransitionHistory<IntersectionState>,
}

impl Intersection {
    /// Arbiter on the wall clock with the default patterns installed.
    pub fn system() -> Self {
        Self::new(SystemClock, StandardPairs)
    }
}

impl<C: TimeSource, R: PairResolver> Arbiter<C, R> {
    /// Create an arbiter in the `Off` state running the default patterns.
    pub fn new(clock: C, resolver: R) -> Self {
        Self {
            state: IntersectionState::Off,
            table: default_table(),
            sync: Synchronizer::new(),
            clock,
            resolver,
            fail_safe: false,
            history: TransitionHistory::default(),
        }
    }

    /// Load configuration and return to `Off`.
    ///
    /// On failure the built-in defaults are installed for every direction
    /// and the error is returned for reporting; the arbiter stays usable
    /// either way. A latched fail-safe survives reloading.
    pub fn init(&mut self, source: &ConfigSource) -> Result<(), ConfigError> {
        let result = match load_table(source) {
            Ok(table) => {
                self.table = table;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load config, using default values");
                self.table = default_table();
                Err(err)
            }
        };

        if self.fail_safe {
            install_fail_safe(&mut self.table);
        }
        self.state = IntersectionState::Off;
        self.sync = Synchronizer::new();
        result
    }

    /// Advance the intersection by one step at `now_ms`.
    ///
    /// While a pair is active its sets are stepped; once both report `End`
    /// the other pair takes over. From any other state the arbiter starts
    /// north-south. A failed swap or start escalates to the fail-safe.
    pub fn tick(&mut self, now_ms: u64) {
        let attempt = match self.state.other_pair() {
            Some(other) => {
                if self.sync.tick(&mut self.table, now_ms) != StepLabel::End {
                    return;
                }
                self.change_active_direction(other, now_ms)
            }
            None => self.change_active_direction(IntersectionState::NorthSouth, now_ms),
        };

        if let Err(err) = attempt {
            if self.fail_safe {
                tracing::debug!(error = %err, "pair change failed while degraded");
            } else {
                tracing::error!(error = %err, from = self.state.name(), "pair change failed");
            }
            self.enter_fail_safe(now_ms);
        }
    }

    /// Read the injected clock and [`tick`](Self::tick).
    pub fn poll(&mut self) -> IntersectionState {
        let now_ms = self.clock.now_ms();
        self.tick(now_ms);
        self.state
    }

    /// Make `requested` the active pair, re-arming its cycle at `now_ms`.
    ///
    /// Only the two pair states can be requested. Asking for the current
    /// state succeeds without touching anything. The arbiter's state changes
    /// only once the synchronizer has accepted the pair.
    pub fn change_active_direction(
        &mut self,
        requested: IntersectionState,
        now_ms: u64,
    ) -> Result<(), SignalError> {
        if !requested.is_pair() {
            return Err(SignalError::InvalidStateRequest { requested });
        }
        if requested == self.state {
            return Ok(());
        }

        let [first, second] = self.resolver.resolve(requested);
        self.sync.assign(&mut self.table, first, second, now_ms)?;

        tracing::info!(
            from = self.state.name(),
            to = requested.name(),
            now_ms,
            "active pair changed"
        );
        self.record(requested, now_ms);
        Ok(())
    }

    /// Reprogram every direction with the flashing pattern and keep running
    /// it on the east-west pair.
    fn enter_fail_safe(&mut self, now_ms: u64) {
        if !self.fail_safe {
            tracing::error!(now_ms, "entering fail-safe flashing mode");
        }
        self.fail_safe = true;
        self.record(IntersectionState::Error, now_ms);

        install_fail_safe(&mut self.table);
        self.sync
            .install(&mut self.table, Direction::East, Direction::West, now_ms);
        self.record(IntersectionState::EastWest, now_ms);
    }

    fn record(&mut self, to: IntersectionState, at_ms: u64) {
        self.history.record(StateTransition {
            from: self.state,
            to,
            at_ms,
        });
        self.state = to;
    }

    pub fn state(&self) -> IntersectionState {
        self.state
    }

    /// Whether the fail-safe pattern has been installed.
    pub fn is_fail_safe(&self) -> bool {
        self.fail_safe
    }

    /// Handles of the pair currently being stepped.
    pub fn active_pair(&self) -> Option<(Direction, Direction)> {
        self.sync.active()
    }

    pub fn table(&self) -> &LightSetTable {
        &self.table
    }

    /// Mutable access for hosts that patch light sets directly.
    pub fn table_mut(&mut self) -> &mut LightSetTable {
        &mut self.table
    }

    pub fn history(&self) -> &TransitionHistory<IntersectionState> {
        &self.history
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
