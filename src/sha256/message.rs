use tracing::{debug, trace};

use crate::error::{Error, Result};

/// 将文本逐字符转换为字节，字符编码即字节值
///
/// 只接受编码在0-255范围内的字符，超出范围时返回错误而不是截断。
pub fn to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, c)| {
            u8::try_from(c).map_err(|_| {
                debug!(position, code = c as u32, "character outside single-byte range");
                Error::CharOutOfRange { position, code: c as u32 }
            })
        })
        .collect()
}

/// 计算长度为`len`字节的消息的比特长度，长度字段只使用低32位
pub(crate) fn bit_length(len: usize) -> Result<u32> {
    (len as u64)
        .checked_mul(8)
        .and_then(|l| u32::try_from(l).ok())
        .ok_or_else(|| {
            debug!(bytes = len, "message too long for the 32-bit length field");
            Error::MessageTooLong { bytes: len }
        })
}

/// 假设消息m的长度为l比特。首先将比特“1”添加到消息的末尾，再添加k个“0”，
/// k是满足l + 1 + k ≡ 448 mod 512的最小的非负整数。然后再添加一个64位比特串，该比特串是长度l的大端表示。
/// 长度字段的高32位固定为0，低32位为l。
/// 填充后的消息m′的比特长度为512的倍数。
pub fn pad(data: &[u8]) -> Result<Vec<u8>> {
    let l = bit_length(data.len())?;

    let mut out = Vec::with_capacity((data.len() + 9 + 63) / 64 * 64);
    out.extend_from_slice(data);
    // 将'10000000'添加到数据的末尾
    out.push(0x80);
    while out.len() % 64 != 56 {
        out.push(0x00);
    }
    out.extend_from_slice(&[0x00; 4]);
    out.extend_from_slice(&l.to_be_bytes());

    trace!(bytes = data.len(), padded = out.len(), "padded message");
    Ok(out)
}

/// 大端模式：每4个字节组成一个32位的字
pub fn to_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|b| u32::from(b[0]) << 24 | u32::from(b[1]) << 16 | u32::from(b[2]) << 8 | u32::from(b[3]))
        .collect()
}
