// 单链表
// 2.19 有序链表删除 (mink, maxk) 区间内的结点
// 2.24 两个递增链表原地合并成一个递减链表，不开辟新结点

// 沿用不安全单链队列的写法：头尾都用裸指针
// 尾指针让 push_back 变成 O(1)
// 混用 Box 和裸指针会破坏借用栈，所以全用裸指针，只在创建和释放时经过 Box
use std::fmt::{ self, Debug, Display };
use std::ptr;

use log::debug;

pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
}

type Link<T> = *mut Node<T>;

struct Node<T> {
    elem: T,
    next: Link<T>,
}

pub struct IntoIter<T>(LinkedList<T>);

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    // 尾部增加结点
    pub fn push_back(&mut self, elem: T) {
        let new_tail = Box::into_raw(
            Box::new(Node {
                elem,
                next: ptr::null_mut(),
            })
        );

        if !self.tail.is_null() {
            unsafe {
                (*self.tail).next = new_tail;
            }
        } else {
            self.head = new_tail;
        }

        self.tail = new_tail;
        self.len += 1;
    }

    pub fn push_front(&mut self, elem: T) {
        let new_head = Box::into_raw(
            Box::new(Node {
                elem,
                next: self.head,
            })
        );

        if self.tail.is_null() {
            self.tail = new_head;
        }

        self.head = new_head;
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            None
        } else {
            // Box重新拿到所有权，之后head一定要指向下一个
            let head = unsafe { Box::from_raw(self.head) };
            self.head = head.next;

            if self.head.is_null() {
                self.tail = ptr::null_mut();
            }

            self.len -= 1;
            Some(head.elem)
        }
    }

    pub fn peek_front(&self) -> Option<&T> {
        unsafe { self.head.as_ref().map(|node| &node.elem) }
    }

    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.as_mut().map(|node| &mut node.elem) }
    }

    pub fn peek_back(&self) -> Option<&T> {
        unsafe { self.tail.as_ref().map(|node| &node.elem) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        unsafe {
            Iter {
                next: self.head.as_ref(),
            }
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe {
            IterMut {
                next: self.head.as_mut(),
            }
        }
    }
}

impl<T: PartialOrd> LinkedList<T> {
    // 表是递增的，删掉所有满足 mink < x < maxk 的结点，返回删了几个
    // 有序意味着要删的结点是连续的一段：先跳过 <= mink 的前缀，再删到 >= maxk 为止
    pub fn delete_range(&mut self, mink: &T, maxk: &T) -> usize {
        let mut removed = 0;

        unsafe {
            // prev为空表示要删的一段从表头开始
            let mut prev: Link<T> = ptr::null_mut();
            let mut cur = self.head;

            while !cur.is_null() && !((*cur).elem > *mink) {
                prev = cur;
                cur = (*cur).next;
            }

            while !cur.is_null() && (*cur).elem < *maxk {
                let node = Box::from_raw(cur);
                cur = node.next;
                removed += 1;
                // node在这里释放
            }

            // 把断开的两头接上
            if prev.is_null() {
                self.head = cur;
            } else {
                (*prev).next = cur;
            }

            // 删到了表尾，尾指针退回到prev
            if cur.is_null() {
                self.tail = prev;
            }
        }

        self.len -= removed;
        debug!("delete_range removed {} nodes, {} left", removed, self.len);
        removed
    }

    // 两个递增表合并成一个递减表
    // 每次取两表表头中较小的那个，头插到结果表上，所以结果自然是递减的
    // 只改next指针，不分配新结点
    // 相等时先取b的，和原题 l1 < l2 ? l1 : l2 一致
    pub fn merge_descending(mut a: Self, mut b: Self) -> Self {
        let mut merged = LinkedList::new();
        merged.len = a.len + b.len;

        // 两个输入表交出所有结点，之后它们drop时什么也不做
        let mut p = std::mem::replace(&mut a.head, ptr::null_mut());
        let mut q = std::mem::replace(&mut b.head, ptr::null_mut());
        a.tail = ptr::null_mut();
        b.tail = ptr::null_mut();
        a.len = 0;
        b.len = 0;

        unsafe {
            loop {
                let taken = if p.is_null() && q.is_null() {
                    break;
                } else if q.is_null() || (!p.is_null() && (*p).elem < (*q).elem) {
                    let taken = p;
                    p = (*p).next;
                    taken
                } else {
                    let taken = q;
                    q = (*q).next;
                    taken
                };

                // 头插
                (*taken).next = merged.head;
                merged.head = taken;

                // 第一个被摘下来的是最小的，它就是新表的尾
                if merged.tail.is_null() {
                    merged.tail = taken;
                }
            }
        }

        debug!("merge_descending produced {} nodes", merged.len);
        merged
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

// 1 -> 3 -> 5 -> NULL
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self {
            write!(f, "{} -> ", elem)?;
        }
        write!(f, "NULL")
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

//======================================================================

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

//====================================================================

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = unsafe { node.next.as_ref() };
            &node.elem
        })
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = unsafe { node.next.as_mut() };
            &mut node.elem
        })
    }
}
