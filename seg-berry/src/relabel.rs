//! 标签图的顺序重标号.

use itertools::Itertools;
use ndarray::{Array2, ArrayView2};
use num::PrimInt;

/// 将标签图中所有不同的正标签值按升序重映射为 `1..=k`,
/// 背景 (非正值) 保持为 0.
///
/// 返回重标号后的图像和实例个数 `k`. 重映射是双射, 像素划分保持不变:
/// 原图中同标签的像素在新图中仍然同标签, 反之亦然.
///
/// # 注意
///
/// id 的分配顺序 (按原标签值升序) 只影响具体数值, 不影响划分本身;
/// 下游评估指标对此不敏感.
pub fn relabel_sequential<L: PrimInt>(labels: ArrayView2<L>) -> (Array2<u32>, usize) {
    let forward: Vec<L> = labels
        .iter()
        .copied()
        .filter(|&v| v > L::zero())
        .sorted()
        .dedup()
        .collect();

    let relabeled = labels.map(|&v| {
        if v <= L::zero() {
            0
        } else {
            // forward 收录了所有正标签值, 查找必定命中.
            forward.binary_search(&v).unwrap() as u32 + 1
        }
    });
    (relabeled, forward.len())
}

#[cfg(test)]
mod tests {
    use super::relabel_sequential;
    use ndarray::{array, Array2};

    /// 非连续标签按升序压缩为连续 id.
    #[test]
    fn test_relabel_sparse_ids() {
        let img = array![[5u32, 5, 0], [9, 0, 3]];
        let (rel, k) = relabel_sequential(img.view());
        assert_eq!(k, 3);
        assert_eq!(rel, array![[2u32, 2, 0], [3, 0, 1]]);
    }

    /// 全背景图不产生实例.
    #[test]
    fn test_relabel_all_background() {
        let img = Array2::<u32>::zeros((4, 4));
        let (rel, k) = relabel_sequential(img.view());
        assert_eq!(k, 0);
        assert!(rel.iter().all(|&v| v == 0));
    }

    /// 有符号输入中的负值按背景处理.
    #[test]
    fn test_relabel_negative_is_background() {
        let img = array![[-3i32, 7, 7], [0, -3, 2]];
        let (rel, k) = relabel_sequential(img.view());
        assert_eq!(k, 2);
        assert_eq!(rel, array![[0u32, 2, 2], [0, 0, 1]]);
    }

    /// 已经连续的标签保持原样.
    #[test]
    fn test_relabel_identity_on_dense() {
        let img = array![[1u8, 1, 0], [0, 2, 2], [0, 2, 2]];
        let (rel, k) = relabel_sequential(img.view());
        assert_eq!(k, 2);
        assert_eq!(rel, array![[1u32, 1, 0], [0, 2, 2], [0, 2, 2]]);
    }
}
