//! Line transform infrastructure
//!
//! Every rewrite pass over an itinerary line is a stage implementing
//! [`Runnable`]. Stages compose into a [`Transform`] with `.then()`, and the
//! compiler checks that each stage's input matches the previous output:
//!
//! ```rust,ignore
//! let line = Transform::identity()
//!     .then(NormalizeVerticalWhitespace::new())
//!     .then(ExpandAirportCodes::new(directory))
//!     .then(ExpandTemporalTokens::new());
//! let pretty = line.run("Depart #LAX at T24(2024-03-15T10:00:00Z)".to_string());
//! ```
//!
//! The stateless passes are pre-built as `once_cell::sync::Lazy` statics in
//! [`standard`]. The airport pass owns a shared directory, so it is built per
//! run by [`standard::line_transform`].
//!
//! # Module Organization
//!
//! - [`stages`]: the individual rewrite passes
//! - [`standard`]: pre-built combinations used by the pipeline

pub mod stages;
pub mod standard;

/// Trait for anything that rewrites an input into an output
///
/// Stages never fail: a code that cannot be resolved or a payload that does
/// not parse is rendered as fallback text by the stage itself.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> O;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` is `Send + Sync`, so one instance can be shared by
/// everything that expands lines against the same directory.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| stage.run(prev_run(input))),
        }
    }

    /// Chain a pre-built static transform after this one
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| next.run(prev_run(input))),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> O {
        (self.run_fn)(input)
    }
}

impl<I> Transform<I, I> {
    /// A transform that returns its input unchanged, the start of a chain
    pub fn identity() -> Self
    where
        I: 'static,
    {
        Transform::from_fn(|input| input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> O {
        Transform::run(self, input)
    }
}
