// k 阶斐波那契数列
// f_0 = ... = f_{k-2} = 0, f_{k-1} = 1
// f_m = f_{m-1} + f_{m-2} + ... + f_{m-k}
//
// 两种算法：
// 1. 窗口里存最近k项，每次把窗口求和得到新项，O(k)一步
// 2. 相邻两项的关系 f_i = 2 f_{i-1} - f_{i-1-k}，O(1)一步
use std::collections::VecDeque;

use log::trace;

use crate::error::{ Error, Result };

fn check_order(k: usize) -> Result<()> {
    if k < 1 {
        return Err(Error::InvalidOrder { k });
    }
    Ok(())
}

// 前k+1项是定值：f_{k-1} = f_k = 1，更早的都是0
// k很大时用它直接给答案，不去开k个元素的窗口
fn leading_term(k: usize, m: usize) -> Option<u64> {
    if m < k - 1 {
        Some(0)
    } else if m <= k {
        Some(1)
    } else {
        None
    }
}

// 窗口初始化为 f_0 .. f_{k-1}
// 分配失败返回错误，不让它直接abort
fn initial_window(k: usize) -> Result<VecDeque<u64>> {
    let mut window = VecDeque::new();
    window
        .try_reserve(k)
        .map_err(|_| Error::AllocationFailed { len: k })?;
    window.extend(std::iter::repeat(0).take(k - 1));
    window.push_back(1);
    Ok(window)
}

fn window_sum(window: &VecDeque<u64>) -> Result<u64> {
    window
        .iter()
        .try_fold(0u64, |acc, &x| acc.checked_add(x))
        .ok_or(Error::Overflow("k-step fibonacci"))
}

pub fn k_fibonacci(k: usize, m: usize) -> Result<u64> {
    check_order(k)?;

    if let Some(term) = leading_term(k, m) {
        return Ok(term);
    }

    let mut window = initial_window(k)?;
    let mut next = 0;
    for i in k..=m {
        next = window_sum(&window)?;
        // 窗口左移，新项放到最后
        window.pop_front();
        window.push_back(next);
        trace!("f_{} = {}", i, next);
    }
    Ok(next)
}

pub fn k_fibonacci_running_sum(k: usize, m: usize) -> Result<u64> {
    check_order(k)?;

    if let Some(term) = leading_term(k, m) {
        return Ok(term);
    }

    // window存 f_{i-1-k} .. f_{i-2}，latest是 f_{i-1}
    // 初始 i = k+1：window = f_0 .. f_{k-1}，latest = f_k = 1
    let mut window = initial_window(k)?;
    let mut latest: u64 = 1;
    for _ in (k + 1)..=m {
        let oldest = window.pop_front().unwrap_or(0);
        window.push_back(latest);
        // f_{i-1} 是 oldest 在内的k项之和，不会比 oldest 小
        latest = latest
            .checked_add(latest - oldest)
            .ok_or(Error::Overflow("k-step fibonacci"))?;
    }
    Ok(latest)
}

// f_0 .. f_{count-1}
// 前k项直接写，后面的才要窗口
pub fn k_fibonacci_sequence(k: usize, count: usize) -> Result<Vec<u64>> {
    check_order(k)?;

    let mut seq = Vec::new();
    seq.try_reserve(count)
        .map_err(|_| Error::AllocationFailed { len: count })?;
    seq.extend((0..count.min(k)).map(|i| if i == k - 1 { 1 } else { 0 }));

    if count > k {
        let mut window = initial_window(k)?;
        for _ in k..count {
            let next = window_sum(&window)?;
            window.pop_front();
            window.push_back(next);
            seq.push(next);
        }
    }
    Ok(seq)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordinary_fibonacci() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (m, &value) in expected.iter().enumerate() {
            assert_eq!(k_fibonacci(2, m), Ok(value), "m = {}", m);
            assert_eq!(k_fibonacci_running_sum(2, m), Ok(value), "m = {}", m);
        }
        assert_eq!(k_fibonacci_sequence(2, expected.len()), Ok(expected.to_vec()));
    }

    #[test]
    fn tribonacci() {
        let expected = vec![0, 0, 1, 1, 2, 4, 7, 13, 24, 44];
        assert_eq!(k_fibonacci_sequence(3, 10), Ok(expected.clone()));
        for (m, &value) in expected.iter().enumerate() {
            assert_eq!(k_fibonacci_running_sum(3, m), Ok(value));
        }
    }

    #[test]
    fn order_one_is_all_ones() {
        assert_eq!(k_fibonacci_sequence(1, 5), Ok(vec![1, 1, 1, 1, 1]));
        assert_eq!(k_fibonacci(1, 100), Ok(1));
        assert_eq!(k_fibonacci_running_sum(1, 100), Ok(1));
    }

    #[test]
    fn both_algorithms_agree() {
        for k in 1..8 {
            for m in 0..40 {
                assert_eq!(k_fibonacci(k, m), k_fibonacci_running_sum(k, m), "k = {}, m = {}", k, m);
            }
        }
    }

    #[test]
    fn invalid_order() {
        assert_eq!(k_fibonacci(0, 5), Err(Error::InvalidOrder { k: 0 }));
        assert_eq!(k_fibonacci_running_sum(0, 5), Err(Error::InvalidOrder { k: 0 }));
        assert_eq!(k_fibonacci_sequence(0, 5), Err(Error::InvalidOrder { k: 0 }));
    }

    #[test]
    fn overflow_boundary() {
        // f_93 是 u64 能装下的最后一项
        assert_eq!(k_fibonacci(2, 93), Ok(12200160415121876738));
        assert_eq!(k_fibonacci_running_sum(2, 93), Ok(12200160415121876738));
        assert_eq!(k_fibonacci(2, 94), Err(Error::Overflow("k-step fibonacci")));
        assert_eq!(k_fibonacci_running_sum(2, 94), Err(Error::Overflow("k-step fibonacci")));
        assert!(k_fibonacci_sequence(2, 95).is_err());
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(k_fibonacci_sequence(4, 0), Ok(vec![]));
    }

    #[test]
    fn huge_order_leading_terms() {
        // 前k项都是定值，k再大也不用开窗口
        assert_eq!(k_fibonacci_sequence(usize::MAX, 3), Ok(vec![0, 0, 0]));
        assert_eq!(k_fibonacci(usize::MAX, 5), Ok(0));
        assert_eq!(k_fibonacci_running_sum(usize::MAX, usize::MAX - 1), Ok(1));
        assert_eq!(k_fibonacci(usize::MAX / 2, usize::MAX / 2), Ok(1));
        assert_eq!(k_fibonacci_sequence(3, 3), Ok(vec![0, 0, 1]));
    }

    #[test]
    fn window_too_large_is_an_error() {
        // f_{k+1} 要一个k项的窗口，这么大的k分配不出来
        let k = usize::MAX / 2;
        assert_eq!(k_fibonacci(k, k + 1), Err(Error::AllocationFailed { len: k }));
        assert_eq!(k_fibonacci_running_sum(k, k + 1), Err(Error::AllocationFailed { len: k }));

        let count = usize::MAX / 2;
        assert_eq!(k_fibonacci_sequence(2, count), Err(Error::AllocationFailed { len: count }));
    }
}
