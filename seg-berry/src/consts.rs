//! 通用常量.

/// 评估时默认的 IoU 匹配阈值.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// 常用邻域偏移组.
pub mod nhood {
    use crate::Offset2d;

    /// 自反偏移. 对应的亲和平面即前景掩码.
    pub const IDENTITY: Offset2d = (0, 0);

    /// 二维亲和图的标准 2-邻域: 上方与左方.
    pub const AFFINITY_2: [Offset2d; 2] = [(-1, 0), (0, -1)];

    /// 4-邻域.
    pub const N4: [Offset2d; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// 在 [`AFFINITY_2`] 基础上追加步长为 `delta` 的长程偏移,
    /// 得到 4 通道亲和邻域.
    ///
    /// `delta` 必须为正, 否则函数 panic.
    pub const fn affinity_with_range(delta: isize) -> [Offset2d; 4] {
        assert!(delta > 0, "长程步长必须为正");
        [(-1, 0), (0, -1), (-delta, 0), (0, -delta)]
    }
}
