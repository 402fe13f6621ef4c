use thiserror::Error;

// 出错统一返回Result，不用-1这类哨兵值，调用方自己决定怎么报
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("order k must be at least 1, got {k}")]
    InvalidOrder { k: usize },
    #[error("position {pos} out of range for list of length {len}")]
    PositionOutOfRange { pos: usize, len: usize },
    #[error("sequence list is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
    #[error("cannot allocate room for {len} elements")]
    AllocationFailed { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
