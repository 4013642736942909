//! 矩形最小代价指派.
//!
//! 在 `n × m` 的有限代价矩阵上求全局最优的一对一指派, 恰好给出
//! `min(n, m)` 组行列配对. 算法为带行列势能 (potential) 的
//! Kuhn-Munkres, 复杂度 `O(min(n, m)^2 · max(n, m))`.

use ndarray::ArrayView2;

/// 求代价矩阵 `costs` 的最小代价指派.
///
/// 返回 `min(n, m)` 组 `(行, 列)` 配对, 按行下标升序排列.
/// 每行、每列至多出现一次, 配对总代价全局最小 (非贪心).
///
/// # 注意
///
/// `costs` 的所有元素必须是有限浮点数 (不含 NaN 与无穷), 否则行为未定义.
pub fn min_cost_assignment(costs: ArrayView2<f64>) -> Vec<(usize, usize)> {
    if costs.nrows() <= costs.ncols() {
        assign_rows(costs)
    } else {
        // 行多于列时在转置视图上求解, 再交换配对方向.
        let mut pairs: Vec<(usize, usize)> = assign_rows(costs.t())
            .into_iter()
            .map(|(col, row)| (row, col))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

/// `nrows <= ncols` 前提下的指派主体.
///
/// 行列下标从 1 开始, 0 号位固定为增广起点的虚拟节点.
fn assign_rows(costs: ArrayView2<f64>) -> Vec<(usize, usize)> {
    let n = costs.nrows();
    let m = costs.ncols();
    debug_assert!(n <= m);

    let mut u = vec![0.0_f64; n + 1];
    let mut v = vec![0.0_f64; m + 1];
    // row_of[j]: 第 j 列当前指派到的行, 0 表示空闲.
    let mut row_of = vec![0_usize; m + 1];
    let mut way = vec![0_usize; m + 1];

    for i in 1..=n {
        row_of[0] = i;
        let mut j0 = 0_usize;
        let mut minv = vec![f64::INFINITY; m + 1];
        let mut used = vec![false; m + 1];

        // 沿最短增广路扩展, 直到碰到空闲列.
        loop {
            used[j0] = true;
            let i0 = row_of[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0_usize;

            for j in 1..=m {
                if used[j] {
                    continue;
                }
                let reduced = costs[(i0 - 1, j - 1)] - u[i0] - v[j];
                if reduced < minv[j] {
                    minv[j] = reduced;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }
            for j in 0..=m {
                if used[j] {
                    u[row_of[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if row_of[j0] == 0 {
                break;
            }
        }

        // 回溯增广路, 翻转路径上的指派.
        while j0 != 0 {
            let j1 = way[j0];
            row_of[j0] = row_of[j1];
            j0 = j1;
        }
    }

    let mut pairs: Vec<(usize, usize)> = (1..=m)
        .filter(|&j| row_of[j] != 0)
        .map(|j| (row_of[j] - 1, j - 1))
        .collect();
    pairs.sort_unstable();
    pairs
}
