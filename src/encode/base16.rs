use crate::encode::{Alphabet, BASE16_ALPHABET, truncate};

/// 16进制编码
///
/// 每个字输出8个字符，高4位在前；每4位作为字母表的下标。
/// 字母表不足16个字符时循环使用，`length`给定时截取前`length`个字符。
pub fn encode_base16(words: &[u32], alphabet: Option<&str>, length: Option<usize>) -> String {
    let chars = Alphabet::new(alphabet, BASE16_ALPHABET);

    let mut out = String::with_capacity(words.len() * 8);
    for w in words {
        for i in 0..8 {
            let ci = (w >> ((7 - i) * 4)) & 0xf;
            out.push(chars.symbol(ci as usize));
        }
    }
    truncate(out, length)
}
