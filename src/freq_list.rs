// 按访问频度排序的双向链表
// 每个结点带一个访问计数freq，整条链始终按freq非增排列
// LOCATE(x)：找到x，freq加一，往前挪到合适的位置
// INSERT(x)：新结点freq为1，排在所有freq>=1的结点后面

// 原题是带头结点的双向循环链表，头结点放一个极大的频度来省掉边界判断
// 这里沿用协变双向队列的写法：front/back两个Option<NonNull>，没有哨兵
// “前驱是哨兵”就是“前驱是None”，None看作频度无穷大
//
// 结点里 front 指向表头方向（前驱），back 指向表尾方向（后继）
use std::{ fmt::{ self, Debug, Display }, marker::PhantomData, ptr::NonNull };

use log::trace;

pub struct FreqList<T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
    _boo: PhantomData<T>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    front: Link<T>,
    back: Link<T>,
    elem: T,
    freq: usize,
}

pub struct Iter<'a, T> {
    front: Link<T>,
    len: usize,
    _boo: PhantomData<&'a T>,
}

pub struct IntoIter<T> {
    list: FreqList<T>,
}

impl<T> FreqList<T> {
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
            _boo: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // 插入新元素，频度置1
    // 从表尾往前找最后一个 freq >= 1 的结点，接在它后面
    // 所有结点的频度都至少是1，所以实际上总是接在表尾，同频度里排在最后
    pub fn insert(&mut self, elem: T) {
        unsafe {
            let new = NonNull::new_unchecked(
                Box::into_raw(
                    Box::new(Node {
                        front: None,
                        back: None,
                        elem,
                        freq: 1,
                    })
                )
            );

            let mut anchor = self.back;
            while let Some(node) = anchor {
                if (*node.as_ptr()).freq >= 1 {
                    break;
                }
                anchor = (*node.as_ptr()).front;
            }

            self.attach_after(anchor, new);
            self.len += 1;
        }
    }

    pub fn pop_front(&mut self) -> Option<(T, usize)> {
        unsafe {
            self.front.map(|node| {
                self.detach(node);
                self.len -= 1;
                let boxed_node = Box::from_raw(node.as_ptr());
                (boxed_node.elem, boxed_node.freq)
            })
        }
    }

    pub fn front(&self) -> Option<(&T, usize)> {
        unsafe { self.front.map(|node| (&(*node.as_ptr()).elem, (*node.as_ptr()).freq)) }
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.front,
            len: self.len,
            _boo: PhantomData,
        }
    }

    // 把结点从原位置摘下，两边接起来
    // 摘下之后结点自己的两个指针清空
    unsafe fn detach(&mut self, node: NonNull<Node<T>>) {
        let n = node.as_ptr();
        match (*n).front {
            Some(prev) => {
                (*prev.as_ptr()).back = (*n).back;
            }
            None => {
                self.front = (*n).back;
            }
        }
        match (*n).back {
            Some(next) => {
                (*next.as_ptr()).front = (*n).front;
            }
            None => {
                self.back = (*n).front;
            }
        }
        (*n).front = None;
        (*n).back = None;
    }

    // 把结点接在anchor后面：... anchor <-> node <-> anchor.back ...
    // anchor为None表示接在表头
    unsafe fn attach_after(&mut self, anchor: Link<T>, node: NonNull<Node<T>>) {
        let n = node.as_ptr();
        let next = match anchor {
            Some(a) => (*a.as_ptr()).back,
            None => self.front,
        };

        (*n).front = anchor;
        (*n).back = next;

        match anchor {
            Some(a) => {
                (*a.as_ptr()).back = Some(node);
            }
            None => {
                self.front = Some(node);
            }
        }
        match next {
            Some(nx) => {
                (*nx.as_ptr()).front = Some(node);
            }
            None => {
                self.back = Some(node);
            }
        }
    }
}

impl<T: PartialEq> FreqList<T> {
    fn find(&self, elem: &T) -> Link<T> {
        let mut cur = self.front;
        while let Some(node) = cur {
            unsafe {
                if (*node.as_ptr()).elem == *elem {
                    return Some(node);
                }
                cur = (*node.as_ptr()).back;
            }
        }
        None
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.find(elem).is_some()
    }

    pub fn frequency(&self, elem: &T) -> Option<usize> {
        self.find(elem).map(|node| unsafe { (*node.as_ptr()).freq })
    }

    // 访问一次elem，返回访问后的频度，不存在返回None
    pub fn locate(&mut self, elem: &T) -> Option<usize> {
        let node = self.find(elem)?;

        unsafe {
            let p = node.as_ptr();
            (*p).freq += 1;
            let freq = (*p).freq;

            // 前驱的频度已经不小于自己，位置本来就对，不用动
            // 后继原来就不大于自己的旧频度，更不会大于新频度，只看前面就够了
            let mut anchor = (*p).front;
            match anchor {
                None => {
                    return Some(freq);
                }
                Some(prev) if (*prev.as_ptr()).freq >= freq => {
                    return Some(freq);
                }
                _ => {}
            }

            // 往前找第一个 freq >= 新频度 的结点
            // 遇到相等就停，同频度的老结点不会被越过
            while let Some(q) = anchor {
                if (*q.as_ptr()).freq >= freq {
                    break;
                }
                anchor = (*q.as_ptr()).front;
            }

            trace!("locate moved node to frequency {}", freq);
            self.detach(node);
            self.attach_after(anchor, node);

            Some(freq)
        }
    }
}

impl<T> Drop for FreqList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for FreqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for FreqList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for FreqList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Debug> Debug for FreqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

// (5, 1) (3, 1) (8, 1)
impl<T: Display> Display for FreqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (elem, freq)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({}, {})", elem, freq)?;
        }
        Ok(())
    }
}

unsafe impl<T: Send> Send for FreqList<T> {}
unsafe impl<T: Sync> Sync for FreqList<T> {}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

// 迭代器 ==========================================
impl<'a, T> IntoIterator for &'a FreqList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = (&'a T, usize);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len > 0 {
            self.front.map(|node| unsafe {
                self.len -= 1;
                self.front = (*node.as_ptr()).back;
                (&(*node.as_ptr()).elem, (*node.as_ptr()).freq)
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> IntoIterator for FreqList<T> {
    type IntoIter = IntoIter<T>;
    type Item = (T, usize);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
