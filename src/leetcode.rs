// 力扣练习
use std::collections::HashMap;

// 283. 移动零
// j 指向下一个非零元素该放的位置，非零元素依次换过去，零自然被挤到后面
pub fn move_zeroes(nums: &mut [i32]) {
    let mut j = 0;
    for i in 0..nums.len() {
        if nums[i] != 0 {
            if i != j {
                nums.swap(i, j);
            }
            j += 1;
        }
    }
}

// 1. 两数之和
// 一遍哈希：看 target - x 之前出现过没有
// 返回 (较小下标, 较大下标)
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (i, &x) in nums.iter().enumerate() {
        // 用i64算差，target - x 不会溢出
        let want = i64::from(target) - i64::from(x);
        if let Some(&j) = seen.get(&want) {
            return Some((j, i));
        }
        seen.entry(i64::from(x)).or_insert(i);
    }
    None
}
