// 一元稀疏多项式
// 单链表存非零项，按指数严格递减排列
// 支持：插入项、加、减、乘、求导、求值，输出系数-指数序列和代数形式
// 系数、指数溢出时返回 Error::Overflow
//
// 不用哨兵头结点，插入时拿 &mut Option<Box<Term>> 当游标
use std::fmt::{ self, Debug, Display };
use std::ops::{ Add, Mul, Neg, Sub };

use log::trace;

use crate::error::{ Error, Result };

pub struct Polynomial {
    head: Link,
}

type Link = Option<Box<Term>>;

struct Term {
    coef: i64,
    exp: i32,
    next: Link,
}

pub struct Terms<'a> {
    next: Option<&'a Term>,
}

impl Polynomial {
    pub fn new() -> Self {
        Polynomial { head: None }
    }

    // 任意顺序的 (系数, 指数)，同指数的项会合并
    pub fn from_terms<I: IntoIterator<Item = (i64, i32)>>(terms: I) -> Result<Self> {
        let mut poly = Polynomial::new();
        for (coef, exp) in terms {
            poly.insert_term(coef, exp)?;
        }
        Ok(poly)
    }

    // 已经按指数递减、没有零系数的项，直接从后往前头插
    fn from_descending(terms: Vec<(i64, i32)>) -> Self {
        let mut head = None;
        for (coef, exp) in terms.into_iter().rev() {
            head = Some(Box::new(Term { coef, exp, next: head }));
        }
        Polynomial { head }
    }

    // 插入 c x^e
    // 系数为0直接忽略；同指数就合并，合并成0就删掉这一项
    pub fn insert_term(&mut self, coef: i64, exp: i32) -> Result<()> {
        if coef == 0 {
            return Ok(());
        }

        // 游标停在第一个指数 <= exp 的项（或表尾）
        // 判断只拿共享借用，前进时再可变借用，可变借用不会留到循环外
        let mut cur = &mut self.head;
        while cur.as_ref().map_or(false, |term| term.exp > exp) {
            if let Some(term) = cur {
                cur = &mut term.next;
            }
        }

        if cur.as_ref().map_or(false, |term| term.exp == exp) {
            if let Some(term) = cur.as_mut() {
                term.coef = term.coef.checked_add(coef).ok_or_else(overflow)?;
                if term.coef != 0 {
                    return Ok(());
                }
            }
            if let Some(mut term) = cur.take() {
                *cur = term.next.take();
            }
        } else {
            let next = cur.take();
            *cur = Some(Box::new(Term { coef, exp, next }));
        }
        Ok(())
    }

    pub fn terms(&self) -> Terms<'_> {
        Terms {
            next: self.head.as_deref(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.terms().count()
    }

    // 零多项式没有次数
    pub fn degree(&self) -> Option<i32> {
        self.head.as_ref().map(|term| term.exp)
    }

    // 有序归并，negate为true时是减
    fn merge(&self, other: &Self, negate: bool) -> Result<Self> {
        let signed = |c: i64| {
            if negate { c.checked_neg().ok_or_else(overflow) } else { Ok(c) }
        };

        let mut out = Vec::new();
        let mut p = self.terms().peekable();
        let mut q = other.terms().peekable();

        loop {
            match (p.peek().copied(), q.peek().copied()) {
                (Some((pc, pe)), Some((qc, qe))) => {
                    if pe > qe {
                        out.push((pc, pe));
                        p.next();
                    } else if pe < qe {
                        out.push((signed(qc)?, qe));
                        q.next();
                    } else {
                        let c = if negate { pc.checked_sub(qc) } else { pc.checked_add(qc) };
                        let c = c.ok_or_else(overflow)?;
                        if c != 0 {
                            out.push((c, pe));
                        }
                        p.next();
                        q.next();
                    }
                }
                (Some(term), None) => {
                    out.push(term);
                    p.next();
                }
                (None, Some((qc, qe))) => {
                    out.push((signed(qc)?, qe));
                    q.next();
                }
                (None, None) => {
                    break;
                }
            }
        }

        Ok(Self::from_descending(out))
    }

    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.merge(other, false)
    }

    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.merge(other, true)
    }

    // 两两相乘，全部丢给 insert_term 去合并同类项
    // 运算符 + - * 都转到 plus / minus / multiply
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let mut result = Polynomial::new();
        for (pc, pe) in self.terms() {
            for (qc, qe) in other.terms() {
                let coef = pc.checked_mul(qc).ok_or_else(overflow)?;
                let exp = pe.checked_add(qe).ok_or_else(overflow)?;
                result.insert_term(coef, exp)?;
            }
        }
        trace!("product has {} terms", result.len());
        Ok(result)
    }

    pub fn negate(&self) -> Result<Self> {
        let terms = self
            .terms()
            .map(|(c, e)| c.checked_neg().map(|c| (c, e)).ok_or_else(overflow))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_descending(terms))
    }

    // 常数项求导为0，直接跳过
    pub fn derivative(&self) -> Result<Self> {
        let mut result = Polynomial::new();
        for (c, e) in self.terms() {
            if e != 0 {
                let coef = c.checked_mul(i64::from(e)).ok_or_else(overflow)?;
                let exp = e.checked_sub(1).ok_or_else(overflow)?;
                result.insert_term(coef, exp)?;
            }
        }
        Ok(result)
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.terms()
            .map(|(c, e)| (c as f64) * x.powi(e))
            .sum()
    }

    // 系数-指数序列："c1 e1 c2 e2 ..."，零多项式输出 "0 0"
    pub fn to_pairs(&self) -> String {
        if self.is_zero() {
            return "0 0".to_string();
        }
        self.terms()
            .map(|(c, e)| format!("{} {}", c, e))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn overflow() -> Error {
    Error::Overflow("polynomial")
}

impl Drop for Polynomial {
    // 逐项释放，长链不会递归爆栈
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut term) = cur {
            cur = term.next.take();
        }
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Polynomial {
    fn clone(&self) -> Self {
        Self::from_descending(self.terms().collect())
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms().eq(other.terms())
    }
}

impl Eq for Polynomial {}

impl<'a> Iterator for Terms<'a> {
    type Item = (i64, i32);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|term| {
            self.next = term.next.as_deref();
            (term.coef, term.exp)
        })
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.terms()).finish()
    }
}

// 代数形式：3x^2-x+1
// 首项为正不写+，系数绝对值为1且不是常数项时省略系数
impl Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (c, e)) in self.terms().enumerate() {
            if c < 0 {
                write!(f, "-")?;
            } else if i > 0 {
                write!(f, "+")?;
            }

            let abs = c.unsigned_abs();
            match e {
                0 => write!(f, "{}", abs)?,
                1 => {
                    if abs != 1 {
                        write!(f, "{}", abs)?;
                    }
                    write!(f, "x")?;
                }
                _ => {
                    if abs != 1 {
                        write!(f, "{}", abs)?;
                    }
                    write!(f, "x^{}", e)?;
                }
            }
        }
        Ok(())
    }
}

// 运算符 ===========================================
// 结果都是 Result<Polynomial>，溢出时不会panic
impl<'a> Add<&'a Polynomial> for &'a Polynomial {
    type Output = Result<Polynomial>;

    fn add(self, rhs: &'a Polynomial) -> Result<Polynomial> {
        self.plus(rhs)
    }
}

impl Add for Polynomial {
    type Output = Result<Polynomial>;

    fn add(self, rhs: Polynomial) -> Result<Polynomial> {
        self.plus(&rhs)
    }
}

impl<'a> Sub<&'a Polynomial> for &'a Polynomial {
    type Output = Result<Polynomial>;

    fn sub(self, rhs: &'a Polynomial) -> Result<Polynomial> {
        self.minus(rhs)
    }
}

impl Sub for Polynomial {
    type Output = Result<Polynomial>;

    fn sub(self, rhs: Polynomial) -> Result<Polynomial> {
        self.minus(&rhs)
    }
}

impl<'a> Mul<&'a Polynomial> for &'a Polynomial {
    type Output = Result<Polynomial>;

    fn mul(self, rhs: &'a Polynomial) -> Result<Polynomial> {
        self.multiply(rhs)
    }
}

impl Mul for Polynomial {
    type Output = Result<Polynomial>;

    fn mul(self, rhs: Polynomial) -> Result<Polynomial> {
        self.multiply(&rhs)
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Result<Polynomial>;

    fn neg(self) -> Result<Polynomial> {
        self.negate()
    }
}

impl Neg for Polynomial {
    type Output = Result<Polynomial>;

    fn neg(self) -> Result<Polynomial> {
        self.negate()
    }
}
