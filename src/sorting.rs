// 排序
// 目前只有插入排序，外加一个给排序计时的小工具
use std::time::{ Duration, Instant };

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

// 插入排序，升序，稳定
// arr[0..i] 已经有序，把 arr[i] 往前插到合适的位置
// 用相邻交换代替“整体后移再放入”，T 不需要 Copy
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        // 严格大于才往前挪，相等的元素不会越过，保证稳定
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

// 1..=n 的随机排列
pub fn random_permutation<R: Rng + ?Sized>(n: u32, rng: &mut R) -> Vec<u32> {
    let mut arr: Vec<u32> = (1..=n).collect();
    arr.shuffle(rng);
    arr
}

// 拷贝一份再排，返回耗时，原数据不动，方便多个算法用同一份输入比较
pub fn measure_sort<T, F>(sort: F, data: &[T]) -> Duration where T: Clone, F: FnOnce(&mut [T]) {
    let mut copy = data.to_vec();
    let start = Instant::now();
    sort(&mut copy);
    let elapsed = start.elapsed();
    debug!("sorted {} elements in {:?}", data.len(), elapsed);
    elapsed
}
