// Ackermann 函数
// akm(0, n) = n + 1
// akm(m, 0) = akm(m - 1, 1)
// akm(m, n) = akm(m - 1, akm(m, n - 1))
//
// 递归版照抄定义
// 非递归版用一个栈记下“算完内层之后还要做的外层 m-1”
// 两个版本都能记录求值轨迹，轨迹是数据，打印交给Display
use std::fmt;

use log::debug;

use crate::error::{ Error, Result };
use crate::stack::Stack;

fn succ(n: u64) -> Result<u64> {
    n.checked_add(1).ok_or(Error::Overflow("ackermann"))
}

// 递归深度和结果同阶，m = 3 时 n 到十几就会把线程栈用完
// 大一点的输入用 ackermann_iterative
pub fn ackermann_recursive(m: u64, n: u64) -> Result<u64> {
    if m == 0 {
        return succ(n);
    }
    if n == 0 {
        return ackermann_recursive(m - 1, 1);
    }
    let inner = ackermann_recursive(m, n - 1)?;
    ackermann_recursive(m - 1, inner)
}

pub fn ackermann_iterative(m: u64, n: u64) -> Result<u64> {
    let mut stack = Stack::with_capacity(16);
    let (mut m, mut n) = (m, n);
    loop {
        if m == 0 {
            n = succ(n)?;
            match stack.pop() {
                Some(outer) => {
                    m = outer;
                }
                None => {
                    return Ok(n);
                }
            }
        } else if n == 0 {
            m -= 1;
            n = 1;
        } else {
            stack.push(m - 1);
            n -= 1;
        }
    }
}

// 非递归轨迹 =========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterAction {
    // m == 0，n 加一后栈空，得到结果
    Return { n: u64 },
    // m == 0，n 加一后弹栈，回到外层
    Resume { n: u64, m: u64 },
    // n == 0，化成 (m-1, 1)
    Reduce { m: u64, n: u64 },
    // 压入外层的 m-1，先算内层
    Push { pushed: u64, n: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterStep {
    pub step: usize,
    pub m: u64,
    pub n: u64,
    // 执行这一步之前的栈，栈底在前
    pub stack: Vec<u64>,
    pub action: IterAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterTrace {
    pub m: u64,
    pub n: u64,
    pub steps: Vec<IterStep>,
    pub result: u64,
}

pub fn ackermann_iterative_trace(m: u64, n: u64) -> Result<IterTrace> {
    let mut stack: Stack<u64> = Stack::with_capacity(16);
    let mut steps = Vec::new();
    let (m0, n0) = (m, n);
    let (mut m, mut n) = (m, n);

    loop {
        let step = steps.len();
        let snapshot = stack.as_slice().to_vec();
        let (before_m, before_n) = (m, n);

        let action = if m == 0 {
            n = succ(n)?;
            match stack.pop() {
                Some(outer) => {
                    m = outer;
                    IterAction::Resume { n, m }
                }
                None => IterAction::Return { n },
            }
        } else if n == 0 {
            m -= 1;
            n = 1;
            IterAction::Reduce { m, n }
        } else {
            stack.push(m - 1);
            n -= 1;
            IterAction::Push { pushed: m - 1, n }
        };

        steps.push(IterStep {
            step,
            m: before_m,
            n: before_n,
            stack: snapshot,
            action,
        });

        if let IterAction::Return { n } = action {
            debug!("akm_iter({}, {}) = {} in {} steps", m0, n0, n, steps.len());
            return Ok(IterTrace {
                m: m0,
                n: n0,
                steps,
                result: n,
            });
        }
    }
}

impl fmt::Display for IterStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {:>2}: m={}, n={}, stack=[", self.step, self.m, self.n)?;
        for (i, item) in self.stack.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        writeln!(f, "]")?;

        match self.action {
            IterAction::Return { n } => {
                writeln!(f, "m==0 -> n=n+1 => n={}", n)?;
                write!(f, "stack empty -> result = {}", n)
            }
            IterAction::Resume { n, m } => {
                writeln!(f, "m==0 -> n=n+1 => n={}", n)?;
                write!(f, "pop -> resume outer with m={}", m)
            }
            IterAction::Reduce { m, n } => write!(f, "n==0 -> (m,n)=({},{})", m, n),
            IterAction::Push { pushed, n } => {
                write!(f, "push(m-1) & n-- -> push {}, now n={}", pushed, n)
            }
        }
    }
}

impl fmt::Display for IterTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trace for akm_iter({},{}):", self.m, self.n)?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

// 递归轨迹 ===========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecEvent {
    Call { step: usize, m: u64, n: u64 },
    // n == 0，化成 akm(m, n)，这里的 m、n 已经是化简后的
    Reduce { m: u64, n: u64 },
    // 先算内层 t = akm(m, n)
    Inner { m: u64, n: u64 },
    // 再算外层 akm(m, t)
    Outer { m: u64, n: u64 },
    Return { m: u64, n: u64, result: u64, base: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecTrace {
    pub m: u64,
    pub n: u64,
    // (缩进深度, 事件)
    pub events: Vec<(usize, RecEvent)>,
    pub result: u64,
}

impl RecTrace {
    pub fn calls(&self) -> usize {
        self.events
            .iter()
            .filter(|(_, event)| matches!(event, RecEvent::Call { .. }))
            .count()
    }
}

pub fn ackermann_recursive_trace(m: u64, n: u64) -> Result<RecTrace> {
    let mut events = Vec::new();
    let mut step = 0;
    let result = traced(m, n, 0, &mut step, &mut events)?;
    debug!("akm_rec({}, {}) = {} after {} calls", m, n, result, step);
    Ok(RecTrace { m, n, events, result })
}

// 子调用缩进加2
fn traced(
    m: u64,
    n: u64,
    depth: usize,
    step: &mut usize,
    events: &mut Vec<(usize, RecEvent)>
) -> Result<u64> {
    *step += 1;
    events.push((depth, RecEvent::Call { step: *step, m, n }));

    if m == 0 {
        let result = succ(n)?;
        events.push((depth, RecEvent::Return { m, n, result, base: true }));
        return Ok(result);
    }

    let result = if n == 0 {
        events.push((depth, RecEvent::Reduce { m: m - 1, n: 1 }));
        traced(m - 1, 1, depth + 2, step, events)?
    } else {
        events.push((depth, RecEvent::Inner { m, n: n - 1 }));
        let t = traced(m, n - 1, depth + 2, step, events)?;
        events.push((depth, RecEvent::Outer { m: m - 1, n: t }));
        traced(m - 1, t, depth + 2, step, events)?
    };

    events.push((depth, RecEvent::Return { m, n, result, base: false }));
    Ok(result)
}

impl fmt::Display for RecEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RecEvent::Call { step, m, n } => write!(f, "step {}: call  akm({},{})", step, m, n),
            RecEvent::Reduce { m, n } => write!(f, "-> reduce to akm({},{})", m, n),
            RecEvent::Inner { m, n } => write!(f, "-> compute inner t = akm({},{})", m, n),
            RecEvent::Outer { m, n } => write!(f, "-> then compute akm({},{})", m, n),
            RecEvent::Return { m, n, result, base: true } => {
                write!(f, "ret   akm({},{}) = {}  (m==0)", m, n, result)
            }
            RecEvent::Return { m, n, result, base: false } => {
                write!(f, "ret   akm({},{}) = {}", m, n, result)
            }
        }
    }
}

impl fmt::Display for RecTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trace for akm_rec({},{}):", self.m, self.n)?;
        for (depth, event) in &self.events {
            writeln!(f, "{:width$}{}", "", event, width = *depth)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(ackermann_recursive(0, 0), Ok(1));
        assert_eq!(ackermann_recursive(2, 1), Ok(5));
        assert_eq!(ackermann_iterative(2, 1), Ok(5));
        assert_eq!(ackermann_recursive(3, 3), Ok(61));
        assert_eq!(ackermann_iterative(3, 3), Ok(61));
    }

    #[test]
    fn closed_forms_for_small_m() {
        for n in 0..10 {
            assert_eq!(ackermann_iterative(0, n), Ok(n + 1));
            assert_eq!(ackermann_iterative(1, n), Ok(n + 2));
            assert_eq!(ackermann_iterative(2, n), Ok(2 * n + 3));
            assert_eq!(ackermann_iterative(3, n), Ok((1 << (n + 3)) - 3));
        }
    }

    #[test]
    fn recursive_and_iterative_agree() {
        for m in 0..4 {
            for n in 0..6 {
                assert_eq!(ackermann_recursive(m, n), ackermann_iterative(m, n), "akm({}, {})", m, n);
            }
        }
    }

    #[test]
    fn iterative_uses_heap_stack() {
        // 待算的外层放在堆上的栈里，深度只受内存限制
        assert_eq!(ackermann_iterative(3, 10), Ok(8189));
        assert_eq!(ackermann_iterative(4, 0), Ok(13));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(ackermann_iterative(0, u64::MAX), Err(Error::Overflow("ackermann")));
        assert_eq!(ackermann_recursive(0, u64::MAX), Err(Error::Overflow("ackermann")));
        assert!(ackermann_iterative_trace(0, u64::MAX).is_err());
        assert!(ackermann_recursive_trace(0, u64::MAX).is_err());
    }

    #[test]
    fn iterative_trace_sample() {
        let trace = ackermann_iterative_trace(2, 1).unwrap();
        assert_eq!(trace.result, 5);
        assert_eq!(trace.steps.len(), 14);

        assert_eq!(trace.steps[0].action, IterAction::Push { pushed: 1, n: 0 });
        assert_eq!(trace.steps[1].action, IterAction::Reduce { m: 1, n: 1 });
        assert_eq!(trace.steps[3].stack, vec![1, 0]);
        assert_eq!(trace.steps[5].action, IterAction::Resume { n: 3, m: 1 });
        assert_eq!(trace.steps[13].action, IterAction::Return { n: 5 });
        assert!(trace.steps[13].stack.is_empty());

        let text = trace.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Trace for akm_iter(2,1):"));
        assert_eq!(lines.next(), Some("step  0: m=2, n=1, stack=[]"));
        assert_eq!(lines.next(), Some("push(m-1) & n-- -> push 1, now n=0"));
        assert_eq!(lines.next(), Some("step  1: m=2, n=0, stack=[1]"));
        assert_eq!(lines.next(), Some("n==0 -> (m,n)=(1,1)"));
        assert_eq!(text.lines().last(), Some("stack empty -> result = 5"));
    }

    #[test]
    fn iterative_trace_base_case() {
        let trace = ackermann_iterative_trace(0, 7).unwrap();
        assert_eq!(trace.result, 8);
        assert_eq!(trace.steps.len(), 1);
    }

    #[test]
    fn recursive_trace_sample() {
        let trace = ackermann_recursive_trace(2, 1).unwrap();
        assert_eq!(trace.result, 5);

        let returns = trace.events
            .iter()
            .filter(|(_, event)| matches!(event, RecEvent::Return { .. }))
            .count();
        assert_eq!(trace.calls(), returns);

        let text = trace.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Trace for akm_rec(2,1):");
        assert_eq!(lines[1], "step 1: call  akm(2,1)");
        assert_eq!(lines[2], "-> compute inner t = akm(2,0)");
        assert_eq!(lines[3], "  step 2: call  akm(2,0)");
        assert_eq!(lines[4], "  -> reduce to akm(1,1)");
        assert_eq!(lines[5], "    step 3: call  akm(1,1)");
        assert_eq!(lines.last(), Some(&"ret   akm(2,1) = 5"));
    }

    #[test]
    fn recursive_trace_base_case() {
        let trace = ackermann_recursive_trace(0, 0).unwrap();
        assert_eq!(trace.events, vec![
            (0, RecEvent::Call { step: 1, m: 0, n: 0 }),
            (0, RecEvent::Return { m: 0, n: 0, result: 1, base: true })
        ]);
        assert_eq!(trace.to_string(), "Trace for akm_rec(0,0):\nstep 1: call  akm(0,0)\nret   akm(0,0) = 1  (m==0)\n");
    }
}
