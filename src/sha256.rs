use std::fmt;

use crate::encode::{encode_base16, encode_base64_variant};
use crate::error::Result;

mod core;
mod message;

pub use self::core::{rotr, K};
pub use self::message::{pad, to_bytes, to_words};

/// 256比特的摘要，8个32位的字
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest([u32; 8]);

impl Digest {
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// 大端模式：[u32; 8] -> [u8; 32]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut hash: [u8; 32] = [0; 32];
        for (dst, w) in hash.chunks_exact_mut(4).zip(self.0.iter()) {
            dst.copy_from_slice(&w.to_be_bytes());
        }
        hash
    }

    /// 默认字母表的16进制字符串，长度64
    pub fn to_hex(&self) -> String {
        encode_base16(&self.0, None, None)
    }

    /// 默认字母表的变种base64字符串，长度43
    pub fn to_base64(&self) -> String {
        encode_base64_variant(&self.0, None, None)
    }
}

impl AsRef<[u32]> for Digest {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Digest> for [u32; 8] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 压缩已填充、已分字的消息；字数必须是16的倍数
pub fn process(words: &[u32]) -> Result<Digest> {
    core::process(words).map(Digest)
}

/// 计算字节消息的摘要
pub fn digest(message: &[u8]) -> Result<Digest> {
    let padded = pad(message)?;
    process(&to_words(&padded))
}

/// 计算文本的摘要，每个字符的编码必须在单字节范围内
pub fn digest_str(text: &str) -> Result<Digest> {
    digest(&to_bytes(text)?)
}
