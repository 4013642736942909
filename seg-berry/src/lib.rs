#![warn(missing_docs)]

//! 核心库. 提供 2D 实例分割标签图的评估指标与亲和图 (affinity map) 计算.
//!
//! 输入是稠密的二维整数标签图: `0` 表示背景, 每个正整数表示一个实例.
//! 所有算法都是纯函数, 不持有任何跨调用状态, 因此天然支持按图像对并发
//! (参见 `rayon` feature).
//!
//! # 注意
//!
//! 1. 标签值不要求连续, 也不要求从 1 开始; 评估结果只取决于像素的划分
//!    (哪些像素同标签), 与具体数值无关.
//! 2. 有符号标签类型中的负值一律按背景处理.
//!
//! # 功能
//!
//! ### 顺序重标号 ✅
//!
//! 将任意正整数标签按升序重映射为 `1..=k` 的连续 id.
//!
//! 实现位于 `src/relabel.rs`.
//!
//! ### 亲和图计算 ✅
//!
//! 对一组邻域偏移, 计算逐像素的同实例二值亲和平面.
//!
//! 实现位于 `src/affinity.rs`.
//!
//! ### 矩形最小代价指派 ✅
//!
//! 带势能的 Kuhn-Munkres 算法, 独立模块, 可单独复用.
//!
//! 实现位于 `src/matching.rs`.
//!
//! ### 实例分割评估 ✅
//!
//! IoU 阈值下的全局最优实例匹配, 归纳 precision / recall / accuracy.
//!
//! 实现位于 `src/eval`.

/// 二维索引 (高, 宽).
pub type Idx2d = (usize, usize);

/// 二维有符号像素偏移 (高, 宽). 用于描述邻域关系.
pub type Offset2d = (isize, isize);

pub mod affinity;
pub mod consts;
pub mod eval;
pub mod matching;
pub mod prelude;
pub mod relabel;

pub use affinity::compute_affinities;
pub use eval::{evaluate, EvalError, MatchReport};
pub use relabel::relabel_sequential;

#[cfg(feature = "rayon")]
pub use eval::par_evaluate_batch;
