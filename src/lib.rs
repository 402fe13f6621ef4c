// 数据结构课的作业和平时的练习，一个题目一个模块，互不依赖
// 只有括号匹配和Ackermann非递归版借用了同一个栈
//
// 线性表：seq_list（顺序表）、linked_list（单链表）、freq_list（按频度排序的双向链表）
// 栈及其应用：stack、brackets、ackermann
// 其他：fibonacci（k阶斐波那契）、polynomial（稀疏多项式）、sorting、leetcode

pub mod error;

pub mod seq_list;
pub mod linked_list;
pub mod freq_list;

pub mod stack;
pub mod brackets;
pub mod ackermann;

pub mod fibonacci;
pub mod polynomial;
pub mod sorting;
pub mod leetcode;

pub use error::{ Error, Result };
