//! Forward Euler solver for ODE problems.
//!
//! Steps a state forward with the explicit rule
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n) * dt
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ontologica_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&problem, initial, 0.1, 1000)?;
//! let last = solution.last();
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use ontologica_core::{Observer, OdeProblem, StepIntegrable};
use tracing::debug;

// Histories grow past this on demand.
const PREALLOCATED_STEPS: usize = 1024;

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Record the initial state and emit it as step 0.
/// 2. For each step:
///    - Compute the derivative of the current state.
///    - Step the state forward: `state + derivative * dt`.
///    - Record the new state and emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with the full history.
///
/// # Errors
///
/// Returns an error if the problem fails to compute a derivative.
pub fn solve<P, Obs>(
    problem: &P,
    initial: P::State,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::State: Clone,
    P::Delta: Clone,
    Obs: Observer<Event<P::State>, Action>,
{
    let mut history = Vec::with_capacity(steps.min(PREALLOCATED_STEPS) + 1);
    history.push(initial.clone());

    let event = Event {
        step: 0,
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(step = 0, "euler stopped by observer");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = event.state;

    for step in 1..=steps {
        let derivative = problem.derivative(&current).map_err(Error::problem)?;
        let next = current.step(derivative, dt.clone());

        history.push(next.clone());

        let event = Event { step, state: next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, "euler stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = event.state;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// # Errors
///
/// Returns an error if the problem fails to compute a derivative.
pub fn solve_unobserved<P>(
    problem: &P,
    initial: P::State,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::State: Clone,
    P::Delta: Clone,
{
    solve(problem, initial, dt, steps, ())
}
