// 括号匹配
// 只看 () [] {} 三种括号，别的字符一律忽略
// 左括号进栈，右括号必须和栈顶配对，扫完栈必须为空
use std::fmt;

use log::trace;

use crate::stack::Stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    // 右括号没有对应的左括号，或者和栈顶对不上
    // expected 是栈顶左括号要的那个右括号，栈空时为None
    Unexpected {
        index: usize,
        found: char,
        expected: Option<char>,
    },
    // 扫完了还剩左括号，报最里层的那个
    Unclosed {
        index: usize,
        open: char,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Unexpected { index, found, expected: Some(expected) } => {
                write!(f, "expected '{}' but found '{}' at {}", expected, found, index)
            }
            Mismatch::Unexpected { index, found, expected: None } => {
                write!(f, "unmatched '{}' at {}", found, index)
            }
            Mismatch::Unclosed { index, open } => write!(f, "'{}' opened at {} is never closed", open, index),
        }
    }
}

fn is_left(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

fn is_right(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

fn closer_of(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

pub fn check_brackets(s: &str) -> Result<(), Mismatch> {
    // 栈里存(位置, 左括号)，报错时能指出是哪一个
    let mut stack: Stack<(usize, char)> = Stack::with_capacity(s.len());

    for (index, c) in s.chars().enumerate() {
        if is_left(c) {
            stack.push((index, c));
        } else if is_right(c) {
            let expected = stack.peek().and_then(|&(_, open)| closer_of(open));
            if expected != Some(c) {
                trace!("bracket mismatch at {}: found {:?}, expected {:?}", index, c, expected);
                return Err(Mismatch::Unexpected { index, found: c, expected });
            }
            stack.pop();
        }
    }

    match stack.pop() {
        Some((index, open)) => Err(Mismatch::Unclosed { index, open }),
        None => Ok(()),
    }
}

pub fn brackets_matched(s: &str) -> bool {
    check_brackets(s).is_ok()
}

#[cfg(test)]
mod test {
    use super::{ brackets_matched, check_brackets, Mismatch };

    #[test]
    fn sample_table() {
        let cases = [
            ("([{}])", true),
            ("([]{})", true),
            ("([}{])", false),
            ("([)]", false),
            ("([]", false),
            ("abc{[()]}123", true),
            ("", true),
            ("{[()]}[]{}", true),
            ("{[(])}", false),
            ("(((([[]]))){})", true),
        ];
        for (input, expected) in cases.iter() {
            assert_eq!(brackets_matched(input), *expected, "input: {:?}", input);
        }
    }

    #[test]
    fn reports_wrong_closer() {
        assert_eq!(
            check_brackets("([)]"),
            Err(Mismatch::Unexpected { index: 2, found: ')', expected: Some(']') })
        );
    }

    #[test]
    fn reports_closer_on_empty_stack() {
        assert_eq!(
            check_brackets("a)"),
            Err(Mismatch::Unexpected { index: 1, found: ')', expected: None })
        );
        assert_eq!(check_brackets("}").unwrap_err().to_string(), "unmatched '}' at 0");
    }

    #[test]
    fn reports_innermost_unclosed() {
        assert_eq!(check_brackets("([]"), Err(Mismatch::Unclosed { index: 0, open: '(' }));
        assert_eq!(check_brackets("{x[y"), Err(Mismatch::Unclosed { index: 2, open: '[' }));
    }

    #[test]
    fn index_counts_chars_not_bytes() {
        assert_eq!(
            check_brackets("括号(]"),
            Err(Mismatch::Unexpected { index: 3, found: ']', expected: Some(')') })
        );
        assert!(brackets_matched("（中文括号不算）"));
    }
}
