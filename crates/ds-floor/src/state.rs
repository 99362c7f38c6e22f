//! The customer lifecycle states.

use std::fmt;

/// A customer's place in the service lifecycle.
///
/// Progression is strictly forward: waiting states escalate with wait
/// time, seating jumps any waiting state to `Seated`, and `Leaving` is
/// terminal.  Transitions are evaluated once per tick by
/// [`Customer::advance_tick`](crate::Customer::advance_tick) with at most
/// one firing per evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerState {
    /// In the queue, freshly arrived.
    Waiting,
    /// Waited too long; first satisfaction hit taken.
    Unhappy,
    /// Waited far too long; second satisfaction hit taken.
    Angry,
    /// Assigned a table, heading for or sitting at it.
    Seated,
    /// Order placed; the kitchen timer is running.
    Ordered,
    /// Food delivered; the eating timer is running.
    Eating,
    /// Done, one way or the other.  Swept at the end of the tick.
    Leaving,
}

impl CustomerState {
    /// States in which the customer is still queueing for a seat.
    #[inline]
    pub fn is_unseated(self) -> bool {
        matches!(
            self,
            CustomerState::Waiting | CustomerState::Unhappy | CustomerState::Angry
        )
    }
}

impl fmt::Display for CustomerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CustomerState::Waiting => "waiting",
            CustomerState::Unhappy => "unhappy",
            CustomerState::Angry => "angry",
            CustomerState::Seated => "seated",
            CustomerState::Ordered => "ordered",
            CustomerState::Eating => "eating",
            CustomerState::Leaving => "leaving",
        };
        f.write_str(name)
    }
}
