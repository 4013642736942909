//! 评估算法主体: 重叠直方图, IoU 矩阵与阈值化最优匹配.

use crate::matching;
use itertools::izip;
use ndarray::{Array2, ArrayView2, Axis};
use ordered_float::NotNan;

/// 联合统计两张重标号图的像素重叠计数, 形状 `(num_gt + 1, num_pred + 1)`.
///
/// 第 0 行/列对应背景. 行和与列和分别给出 gt / pred 各实例的像素总数.
pub(super) fn overlap_matrix(
    gt_rel: &Array2<u32>,
    pred_rel: &Array2<u32>,
    num_gt: usize,
    num_pred: usize,
) -> Array2<usize> {
    let mut overlap = Array2::<usize>::zeros((num_gt + 1, num_pred + 1));
    for (&g, &p) in izip!(gt_rel.iter(), pred_rel.iter()) {
        overlap[(g as usize, p as usize)] += 1;
    }
    overlap
}

/// 由重叠计数构建 IoU 矩阵, 形状 `(num_gt, num_pred)`, 背景行列被剔除.
pub(super) fn iou_matrix(overlap: &Array2<usize>) -> Array2<f64> {
    let gt_sizes = overlap.sum_axis(Axis(1));
    let pred_sizes = overlap.sum_axis(Axis(0));
    let (rows, cols) = overlap.dim();

    let mut iou = Array2::<f64>::zeros((rows - 1, cols - 1));
    for ((g, p), &c) in overlap.indexed_iter() {
        if g == 0 || p == 0 || c == 0 {
            continue;
        }
        let union = gt_sizes[g] + pred_sizes[p] - c;
        iou[(g - 1, p - 1)] = c as f64 / union as f64;
    }
    iou
}

/// 在 IoU 阈值 `threshold` 下求最优实例匹配, 返回真阳性个数.
///
/// 代价函数对 IoU 严格超过阈值的配对给予 -1 的强偏置, 再以
/// `iou / (2 * num_matches)` 的小项在达标配对之间按 IoU 择优.
/// 未达标配对的代价落在 `(-0.5 / num_matches, 0]`, 恒劣于任何达标配对
/// (代价不超过 -1), 故全局最优解总是先吃满所有可达标配对,
/// 不会为改善某个低质量配对而牺牲高置信配对.
pub(super) fn count_true_positives(iou: ArrayView2<f64>, threshold: f64) -> usize {
    let (num_gt, num_pred) = iou.dim();
    let num_matches = num_gt.min(num_pred);
    if num_matches == 0 {
        return 0;
    }

    // IoU 介于 [0, 1], 不可能为 NaN.
    let best = iou
        .iter()
        .map(|&x| NotNan::new(x).unwrap())
        .max()
        .map(NotNan::into_inner)
        .unwrap_or(0.0);
    if best <= threshold {
        return 0;
    }

    let denom = 2.0 * num_matches as f64;
    let costs = Array2::from_shape_fn((num_gt, num_pred), |(g, p)| {
        let x = iou[(g, p)];
        let bias = if x > threshold { -1.0 } else { 0.0 };
        bias - x / denom
    });

    let pairs = matching::min_cost_assignment(costs.view());
    debug_assert_eq!(pairs.len(), num_matches);

    pairs
        .into_iter()
        .filter(|&(g, p)| iou[(g, p)] > threshold)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_true_positives, iou_matrix, overlap_matrix};
    use ndarray::{array, Array2};

    /// 重叠矩阵逐元素正确, 背景行列参与计数.
    #[test]
    fn test_overlap_matrix_counts() {
        let gt = array![[1u32, 1, 0], [0, 2, 2], [0, 2, 2]];
        let pred = array![[1u32, 1, 0], [0, 0, 2], [0, 2, 2]];
        let overlap = overlap_matrix(&gt, &pred, 2, 2);
        assert_eq!(overlap.dim(), (3, 3));
        assert_eq!(overlap[(1, 1)], 2);
        assert_eq!(overlap[(2, 2)], 3);
        assert_eq!(overlap[(2, 0)], 1);
        assert_eq!(overlap[(0, 0)], 3);
        assert_eq!(overlap.sum(), 9);
    }

    /// IoU 由重叠与并集像素数定义, 无重叠处为 0.
    #[test]
    fn test_iou_matrix_values() {
        let gt = array![[1u32, 1, 0], [0, 2, 2], [0, 2, 2]];
        let pred = array![[1u32, 1, 0], [0, 0, 2], [0, 2, 2]];
        let overlap = overlap_matrix(&gt, &pred, 2, 2);
        let iou = iou_matrix(&overlap);
        assert_eq!(iou.dim(), (2, 2));
        assert!((iou[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((iou[(1, 1)] - 0.75).abs() < 1e-12);
        assert_eq!(iou[(0, 1)], 0.0);
        assert_eq!(iou[(1, 0)], 0.0);
    }

    /// 全局最优匹配不会为低质量配对牺牲高置信配对.
    #[test]
    fn test_global_optimum_saturates_threshold_pairs() {
        // 贪心法会把 pred 0 分给 gt 0 (IoU 0.9), 只得 1 个真阳性;
        // 全局最优取 (0, 1) 与 (1, 0), 得 2 个.
        let iou = array![[0.9, 0.6], [0.55, 0.0]];
        assert_eq!(count_true_positives(iou.view(), 0.5), 2);
    }

    /// 阈值比较是严格大于.
    #[test]
    fn test_strict_threshold() {
        let iou = array![[0.5]];
        assert_eq!(count_true_positives(iou.view(), 0.5), 0);
        assert_eq!(count_true_positives(iou.view(), 0.499_999), 1);
    }

    /// 空 IoU 矩阵没有匹配.
    #[test]
    fn test_empty_iou() {
        let iou = Array2::<f64>::zeros((0, 3));
        assert_eq!(count_true_positives(iou.view(), 0.5), 0);
        let iou = Array2::<f64>::zeros((3, 0));
        assert_eq!(count_true_positives(iou.view(), 0.5), 0);
    }
}
