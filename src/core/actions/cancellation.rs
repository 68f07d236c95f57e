/// Returned by a grid walk that stopped because its token asked it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "grid walk cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by cancelable walks from inside rayon tasks, hence `Send + Sync`.
///
/// Any `Fn() -> bool` closure is a token, so callers can cancel on whatever state they
/// already share with the walk.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;

    /// `Err(Cancelled)` once the token fires, for use with `?` inside a walk.
    fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Token for walks that must always run to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
