use crate::encode::{Alphabet, BASE64_ALPHABET, truncate};

/// 变种base64编码，不是RFC 4648的base64
///
/// 1. 每个字拆成高、低两个16位分组，然后整体逆序；
/// 2. 依次将分组移入缓冲区（新分组放在已有比特之上），缓冲区满6位就取低6位作为字母表下标，
///    得到的字符加在结果的最前面；
/// 3. 最后一个分组移入后，剩余不足6位的比特也要输出，不做填充。
///
/// 输出长度为 ceil(32 * 字数 / 6)，8个字的摘要输出43个字符。
pub fn encode_base64_variant(words: &[u32], alphabet: Option<&str>, length: Option<usize>) -> String {
    let chars = Alphabet::new(alphabet, BASE64_ALPHABET);

    let mut chunks: Vec<u32> = words.iter().flat_map(|w| [w >> 16, w & 0xffff]).collect();
    chunks.reverse();

    let last = chunks.len().saturating_sub(1);
    let mut symbols: Vec<char> = Vec::with_capacity((chunks.len() * 16 + 5) / 6);
    // 缓冲区最多20位有效比特
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;
    for (i, chunk) in chunks.iter().enumerate() {
        buffer |= chunk << bits;
        bits += 16;
        let threshold = if i == last { 1 } else { 6 };
        while bits >= threshold {
            symbols.push(chars.symbol((buffer & 0x3f) as usize));
            buffer >>= 6;
            bits = bits.saturating_sub(6);
        }
    }

    // 字符是从后往前生成的
    truncate(symbols.into_iter().rev().collect(), length)
}


#[cfg(test)]
mod tests {
    use crate::encode::base64::encode_base64_variant;

    #[test]
    fn main() {
        assert_eq!(encode_base64_variant(&[0x1234_5678], None, None), "ASNFZ4");
        assert_eq!(encode_base64_variant(&[0xffff_ffff], None, None), "D_____");
        assert_eq!(encode_base64_variant(&[0x0000_0001], None, None), "AAAAAB");
        assert_eq!(encode_base64_variant(&[0, 0, 0], None, None), "AAAAAAAAAAAAAAAA");
        assert_eq!(encode_base64_variant(&[], None, None), "");
    }

    #[test]
    fn output_length() {
        for n in 0..20usize {
            let words = vec![0xffff_ffffu32; n];
            let expected = (32 * n + 5) / 6;
            assert_eq!(encode_base64_variant(&words, None, None).chars().count(), expected);
        }
    }

    #[test]
    fn short_alphabet() {
        // 字母表循环使用，下标对2取模
        assert_eq!(encode_base64_variant(&[0x0000_0001], Some("01"), None), "000001");
        assert_eq!(encode_base64_variant(&[0x0000_0002], Some("01"), None), "000000");
    }

    #[test]
    fn length() {
        assert_eq!(encode_base64_variant(&[0x1234_5678], None, Some(2)), "AS");
        assert_eq!(encode_base64_variant(&[0x1234_5678], None, Some(0)), "");
    }
}
