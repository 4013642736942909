//! 涵盖本 crate 一系列常用功能的便捷导入.

pub use crate::consts::{nhood, DEFAULT_IOU_THRESHOLD};
pub use crate::{compute_affinities, evaluate, relabel_sequential};
pub use crate::{EvalError, Idx2d, MatchReport, Offset2d};

#[cfg(feature = "rayon")]
pub use crate::par_evaluate_batch;
