//! 实例分割评估.
//!
//! 给定真值与预测标签图, 先分别顺序重标号, 再统计两图实例之间的像素
//! 重叠与 IoU, 在 IoU 阈值下求最小代价最优匹配, 最终归纳出
//! precision / recall / accuracy.

mod core;

use self::core::{count_true_positives, iou_matrix, overlap_matrix};
use crate::relabel::relabel_sequential;
use crate::Idx2d;
use ndarray::ArrayView2;
use num::PrimInt;
use std::fmt;

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
    }
}

/// 评估运行时错误.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// 两张标签图的分辨率不一致. 携带 (真值分辨率, 预测分辨率).
    ShapeMismatch(Idx2d, Idx2d),
}

/// 一次实例级评估的汇总结果.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    /// 真阳性: 被最优匹配选中且 IoU 严格超过阈值的实例对数.
    pub true_positives: usize,

    /// 假阳性: 预测实例中未能达标匹配的个数.
    pub false_positives: usize,

    /// 假阴性: 真值实例中未能达标匹配的个数.
    pub false_negatives: usize,

    /// `tp / max(1, tp + fp)`.
    pub precision: f64,

    /// `tp / max(1, tp + fn)`.
    pub recall: f64,

    /// `tp / (tp + fp + fn)`; 分母为 0 时按约定取 1.0.
    pub accuracy: f64,
}

/// 压缩到一行, 便于批量打印对比.
impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tp: {}, fp: {}, fn: {}, precision: {:.6}, recall: {:.6}, accuracy: {:.6}",
            self.true_positives,
            self.false_positives,
            self.false_negatives,
            self.precision,
            self.recall,
            self.accuracy
        )
    }
}

/// 以 IoU 阈值 `threshold` 评估预测标签图 `pred_labels`
/// 相对于真值 `gt_labels` 的实例级质量.
///
/// 两图标签值不要求连续; 有符号类型中的非正值一律按背景处理.
/// 匹配方向固定为 "行 = 真值实例, 列 = 预测实例", 以保证计数可复现.
///
/// # 返回值
///
/// - 两图分辨率不一致时返回 `Err(EvalError::ShapeMismatch)`;
/// - 否则返回 `Ok(MatchReport)`.
///
/// # 零实例约定
///
/// 两图都不含实例时 `tp + fp + fn == 0`, 此时 accuracy 取 1.0
/// (没有实例, 也没有漏检); precision 与 recall 因 `max(1, ·)`
/// 分母保护而为 0.0.
pub fn evaluate<L: PrimInt>(
    gt_labels: ArrayView2<L>,
    pred_labels: ArrayView2<L>,
    threshold: f64,
) -> Result<MatchReport, EvalError> {
    if gt_labels.dim() != pred_labels.dim() {
        return Err(EvalError::ShapeMismatch(gt_labels.dim(), pred_labels.dim()));
    }

    let (gt_rel, num_gt) = relabel_sequential(gt_labels);
    let (pred_rel, num_pred) = relabel_sequential(pred_labels);

    let overlap = overlap_matrix(&gt_rel, &pred_rel, num_gt, num_pred);
    let iou = iou_matrix(&overlap);
    let tp = count_true_positives(iou.view(), threshold);

    let false_positives = num_pred - tp;
    let false_negatives = num_gt - tp;
    let accuracy_denom = tp + false_positives + false_negatives;

    Ok(MatchReport {
        true_positives: tp,
        false_positives,
        false_negatives,
        precision: tp as f64 / (tp + false_positives).max(1) as f64,
        recall: tp as f64 / (tp + false_negatives).max(1) as f64,
        accuracy: if accuracy_denom == 0 {
            1.0
        } else {
            tp as f64 / accuracy_denom as f64
        },
    })
}

/// 借助 `rayon`, 并行地评估一批 (真值, 预测) 标签图对.
///
/// 结果顺序与输入一致. 批次中任何一对出错, 整体返回该错误.
#[cfg(feature = "rayon")]
pub fn par_evaluate_batch<L>(
    pairs: &[(ArrayView2<'_, L>, ArrayView2<'_, L>)],
    threshold: f64,
) -> Result<Vec<MatchReport>, EvalError>
where
    L: PrimInt + Sync,
{
    pairs
        .par_iter()
        .map(|(gt, pred)| evaluate(gt.view(), pred.view(), threshold))
        .collect()
}
