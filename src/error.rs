use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 摘要计算过程中可能出现的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 字符编码超出单字节范围（0-255），拒绝截断
    #[error("character {code:#x} at position {position} does not fit in a single byte")]
    CharOutOfRange { position: usize, code: u32 },

    /// 消息的比特长度超出长度字段低32位所能表示的范围
    #[error("message of {bytes} bytes exceeds the 2^32 - 1 bit length limit")]
    MessageTooLong { bytes: usize },

    /// 压缩函数的输入字数必须是16的倍数
    #[error("word count {len} is not a multiple of 16")]
    UnalignedWords { len: usize },
}
