use lemni_core::{CarId, CoreError};
use lemni_render::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{what} length {got} does not match car count {expected}")]
    CarCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("worker pool could not be built: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("slot for {0} is already owned by another writer")]
    SlotTaken(CarId),

    #[error("frame sink lock poisoned")]
    SinkPoisoned,

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

pub type SimResult<T> = Result<T, SimError>;
