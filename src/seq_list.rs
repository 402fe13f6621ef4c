// 顺序表
// 2.21 顺序表和数组的原地逆转
// 2.29 A、B、C递增，删掉A中同时出现在B和C里的元素
// 求两个递增表的交集

// 容量固定，满了就插不进去，这一点和定长数组一致
// 位置参数沿用教材习惯，从1开始数
use std::fmt::{ self, Debug, Display };
use std::cmp::Ordering;

use log::{ debug, trace };

use crate::error::{ Error, Result };

pub const DEFAULT_CAPACITY: usize = 100;

pub struct SeqList<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> SeqList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SeqList {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    // 在第pos个位置插入，pos取 1..=len+1
    pub fn insert(&mut self, pos: usize, elem: T) -> Result<()> {
        if pos < 1 || pos > self.len() + 1 {
            return Err(Error::PositionOutOfRange { pos, len: self.len() });
        }
        if self.is_full() {
            return Err(Error::CapacityExceeded { capacity: self.capacity });
        }
        // Vec::insert 就是把 pos 之后的元素整体后移一位
        self.data.insert(pos - 1, elem);
        Ok(())
    }

    // 删掉第pos个并返回，pos取 1..=len
    pub fn delete(&mut self, pos: usize) -> Result<T> {
        if pos < 1 || pos > self.len() {
            return Err(Error::PositionOutOfRange { pos, len: self.len() });
        }
        Ok(self.data.remove(pos - 1))
    }

    pub fn push(&mut self, elem: T) -> Result<()> {
        self.insert(self.len() + 1, elem)
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        pos.checked_sub(1).and_then(|i| self.data.get(i))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn reverse(&mut self) {
        reverse_array(&mut self.data);
    }
}

impl<T: Clone> SeqList<T> {
    pub fn from_slice(items: &[T]) -> Result<Self> {
        Self::from_slice_with_capacity(items, DEFAULT_CAPACITY)
    }

    pub fn from_slice_with_capacity(items: &[T], capacity: usize) -> Result<Self> {
        let mut list = Self::with_capacity(capacity);
        for item in items {
            list.push(item.clone())?;
        }
        Ok(list)
    }
}

impl<T: Ord + Clone> SeqList<T> {
    // a、b都递增，双指针同时扫，小的那边前进，相等就收下并一起前进
    pub fn intersection(a: &Self, b: &Self) -> Self {
        let mut c = Self::with_capacity(a.capacity);
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a.data[i].cmp(&b.data[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    // 交集不会比a长，不可能满
                    c.data.push(a.data[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        debug!("intersection of {} and {} elements has {}", a.len(), b.len(), c.len());
        c
    }
}

impl<T: Ord> SeqList<T> {
    // 利用有序性的版本：三个读指针加一个写指针，一趟扫完
    // j、k只会往前走，所以是 O(|A|+|B|+|C|)
    pub fn delete_common_sorted(&mut self, b: &Self, c: &Self) {
        let (mut j, mut k) = (0, 0);
        let mut w = 0;

        for i in 0..self.data.len() {
            {
                let x = &self.data[i];

                // j、k推到第一个 >= x 的位置
                while j < b.len() && b.data[j] < *x {
                    j += 1;
                }
                while k < c.len() && c.data[k] < *x {
                    k += 1;
                }

                let in_b = j < b.len() && b.data[j] == *x;
                let in_c = k < c.len() && c.data[k] == *x;
                if in_b && in_c {
                    trace!("drop element at index {}", i);
                    continue;
                }
            }

            // 保留：换到写指针处，被跳过的元素会被换到后面，最后截掉
            if w != i {
                self.data.swap(w, i);
            }
            w += 1;
        }

        debug!("delete_common_sorted kept {} of {}", w, self.data.len());
        self.data.truncate(w);
    }
}

impl<T: PartialEq> SeqList<T> {
    // 朴素版本：逐个查B、C，删一个就整体前移一次，最坏 O(n^2)
    pub fn delete_common(&mut self, b: &Self, c: &Self) {
        let mut i = 0;
        while i < self.data.len() {
            let x = &self.data[i];
            if b.data.contains(x) && c.data.contains(x) {
                // 删了之后不前进，重新检查当前位置
                self.data.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

// 数组逆转，左右两个指针相向交换
pub fn reverse_array<T>(arr: &mut [T]) {
    if arr.is_empty() {
        return;
    }
    let mut left = 0;
    let mut right = arr.len() - 1;
    while left < right {
        arr.swap(left, right);
        left += 1;
        right -= 1;
    }
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SeqList<T> {
    fn clone(&self) -> Self {
        SeqList {
            data: self.data.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for SeqList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Debug> Debug for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// 1 -> 2 -> 3 -> NULL
impl<T: Display> Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self.iter() {
            write!(f, "{} -> ", elem)?;
        }
        write!(f, "NULL")
    }
}

#[cfg(test)]
mod test {
    use super::{ reverse_array, SeqList };
    use crate::error::Error;

    fn seq(v: &[i32]) -> SeqList<i32> {
        SeqList::from_slice(v).unwrap()
    }

    #[test]
    fn insert_and_delete() {
        let mut list = SeqList::with_capacity(3);

        assert_eq!(list.insert(2, 10), Err(Error::PositionOutOfRange { pos: 2, len: 0 }));
        assert_eq!(list.insert(0, 10), Err(Error::PositionOutOfRange { pos: 0, len: 0 }));

        list.insert(1, 10).unwrap();
        list.insert(1, 5).unwrap();
        list.insert(3, 20).unwrap();
        assert_eq!(list.as_slice(), &[5, 10, 20]);

        // 满了
        assert_eq!(list.insert(2, 7), Err(Error::CapacityExceeded { capacity: 3 }));

        assert_eq!(list.delete(2), Ok(10));
        assert_eq!(list.as_slice(), &[5, 20]);
        assert_eq!(list.delete(3), Err(Error::PositionOutOfRange { pos: 3, len: 2 }));
        assert_eq!(list.delete(0), Err(Error::PositionOutOfRange { pos: 0, len: 2 }));

        assert_eq!(list.get(1), Some(&5));
        assert_eq!(list.get(0), None);
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn from_slice_respects_capacity() {
        let err = SeqList::from_slice_with_capacity(&[1, 2, 3], 2).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { capacity: 2 });

        let list = seq(&[1, 2, 3]);
        assert_eq!(list.capacity(), super::DEFAULT_CAPACITY);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn reverse_sample() {
        let mut list = seq(&[1, 2, 3, 4, 5]);
        assert_eq!(list.to_string(), "1 -> 2 -> 3 -> 4 -> 5 -> NULL");
        list.reverse();
        assert_eq!(list.to_string(), "5 -> 4 -> 3 -> 2 -> 1 -> NULL");

        let mut arr = [1, 2, 3, 4, 5];
        reverse_array(&mut arr);
        assert_eq!(arr, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn reverse_edge_cases() {
        let mut empty: [i32; 0] = [];
        reverse_array(&mut empty);

        let mut one = [7];
        reverse_array(&mut one);
        assert_eq!(one, [7]);

        let mut even = ["a", "b", "c", "d"];
        reverse_array(&mut even);
        assert_eq!(even, ["d", "c", "b", "a"]);

        let mut list: SeqList<i32> = SeqList::new();
        list.reverse();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "NULL");
    }

    #[test]
    fn intersection_sample() {
        let a = seq(&[1, 2, 4, 5, 6]);
        let b = seq(&[2, 3, 5, 7]);
        let c = SeqList::intersection(&a, &b);
        assert_eq!(c.as_slice(), &[2, 5]);
    }

    #[test]
    fn intersection_with_duplicates_and_empty() {
        let a = seq(&[1, 1, 2, 2, 2]);
        let b = seq(&[1, 2, 2]);
        assert_eq!(SeqList::intersection(&a, &b).as_slice(), &[1, 2, 2]);

        let empty = seq(&[]);
        assert!(SeqList::intersection(&a, &empty).is_empty());
        assert!(SeqList::intersection(&empty, &b).is_empty());
    }

    #[test]
    fn delete_common_sample() {
        // A = 1 2 3 4, B = 2 3, C = 3 4，只有3同时在B和C里
        let b = seq(&[2, 3]);
        let c = seq(&[3, 4]);

        let mut a = seq(&[1, 2, 3, 4]);
        a.delete_common_sorted(&b, &c);
        assert_eq!(a.to_string(), "1 -> 2 -> 4 -> NULL");

        let mut a = seq(&[1, 2, 3, 4]);
        a.delete_common(&b, &c);
        assert_eq!(a.as_slice(), &[1, 2, 4]);
    }

    #[test]
    fn delete_common_versions_agree() {
        let b = seq(&[2, 2, 5, 7, 9, 11]);
        let c = seq(&[1, 2, 5, 5, 9, 10]);
        let input = [1, 2, 2, 3, 5, 5, 6, 9, 9, 11, 12];

        let mut naive = seq(&input);
        naive.delete_common(&b, &c);
        let mut sorted = seq(&input);
        sorted.delete_common_sorted(&b, &c);

        assert_eq!(naive, sorted);
        assert_eq!(sorted.as_slice(), &[1, 3, 6, 11, 12]);
    }

    #[test]
    fn delete_common_nothing_or_everything() {
        let mut a = seq(&[1, 2, 3]);
        a.delete_common_sorted(&seq(&[]), &seq(&[1, 2, 3]));
        assert_eq!(a.as_slice(), &[1, 2, 3]);

        a.delete_common_sorted(&seq(&[1, 2, 3]), &seq(&[1, 2, 3]));
        assert!(a.is_empty());
    }
}
