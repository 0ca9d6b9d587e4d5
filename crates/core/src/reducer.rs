//! Reducer trait for session state driven by discrete user actions.

/// Pure, deterministic state transition.
///
/// - **Input**: the current state (by value) and one action.
/// - **Output**: the next state.
///
/// Reducers must not perform IO. Logging through `tracing` is fine; it does not
/// influence the returned state.
pub trait Reducer: Sized {
    type Action: Clone + core::fmt::Debug;

    /// Fold a single action into the state.
    fn reduce(self, action: &Self::Action) -> Self;

    /// Fold a sequence of actions, in order.
    fn reduce_all<'a, I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        actions.into_iter().fold(self, |state, action| state.reduce(action))
    }
}
