//! 亲和图 (affinity map) 计算.
//!
//! 对每个邻域偏移 `e`, 输出一张与原图同分辨率的二值平面:
//! 像素 `p` 处为 1 当且仅当 `p` 与 `p + e` 都在图内,
//! 且二者属于同一个非背景实例.

use crate::Offset2d;
use ndarray::{Array3, ArrayView2};
use num::PrimInt;

/// 试将下标 `i` 平移 `delta`. 越界 (或溢出) 时返回 `None`.
#[inline]
fn shifted(i: usize, delta: isize, len: usize) -> Option<usize> {
    let moved = (i as isize).checked_add(delta)?;
    (0..len as isize).contains(&moved).then_some(moved as usize)
}

/// 计算标签图 `seg` 在邻域 `nhood` 下的亲和图, 形状为 `(E, H, W)`,
/// 其中 `E == nhood.len()`.
///
/// 平面顺序与 `nhood` 一致. 偏移指向图外的像素对保持 0, 不回绕.
/// 偏移 `(0, 0)` 的平面即前景掩码; 偏移超出图像尺寸时平面全 0.
pub fn compute_affinities<L: PrimInt>(seg: ArrayView2<L>, nhood: &[Offset2d]) -> Array3<u8> {
    let (h_len, w_len) = seg.dim();
    let mut affinity = Array3::<u8>::zeros((nhood.len(), h_len, w_len));

    for (e, &(dh, dw)) in nhood.iter().enumerate() {
        for h in 0..h_len {
            let Some(h2) = shifted(h, dh, h_len) else {
                continue;
            };
            for w in 0..w_len {
                let Some(w2) = shifted(w, dw, w_len) else {
                    continue;
                };
                let a = seg[(h, w)];
                if a > L::zero() && a == seg[(h2, w2)] {
                    affinity[(e, h, w)] = 1;
                }
            }
        }
    }
    affinity
}
