use tracing::{debug, trace};

use crate::error::{Error, Result};

// 初始值，用于确定压缩函数寄存器的初态
pub(crate) const IV: [u32; 8] = [0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372, 0xa54f_f53a, 0x510e_527f, 0x9b05_688c, 0x1f83_d9ab, 0x5be0_cd19];

/// 轮常量K，每轮压缩使用一个
pub const K: [u32; 64] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5, 0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3, 0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc, 0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7, 0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13, 0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3, 0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5, 0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208, 0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

/// 32位循环右移
pub fn rotr(w: u32, n: u32) -> u32 {
    w.rotate_right(n)
}

fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// 压缩函数中的Σ0
fn ep0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// 压缩函数中的Σ1
fn ep1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// 消息扩展中的σ0
fn s0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// 消息扩展中的σ1
fn s1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

/// 压缩一个分组（16个字），结果累加到寄存器中
///
/// 1. 扩展：W0..W15取自分组，
///    FOR j=16 TO 63: Wj ← Wj−16 + σ0(Wj−15) + Wj−7 + σ1(Wj−2)
/// 2. 压缩：ABCDEFGH ← V(i)
///    FOR j=0 TO 63
///        T1 ← H + Σ1(E) + Ch(E, F, G) + Kj + Wj
///        T2 ← Σ0(A) + Maj(A, B, C)
///        H←G, G←F, F←E, E←D+T1, D←C, C←B, B←A, A←T1+T2
///    V(i+1) ← ABCDEFGH + V(i)
///
/// 所有加法都是模2^32
fn compress(registers: &mut [u32; 8], block: &[u32]) {
    let mut w: [u32; 64] = [0; 64];
    w[..16].copy_from_slice(&block[..16]);
    for i in 16..64 {
        w[i] = w[i - 16]
            .wrapping_add(s0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(s1(w[i - 2]));
    }

    let mut ra = registers[0];
    let mut rb = registers[1];
    let mut rc = registers[2];
    let mut rd = registers[3];
    let mut re = registers[4];
    let mut rf = registers[5];
    let mut rg = registers[6];
    let mut rh = registers[7];

    let mut t1: u32;
    let mut t2: u32;
    for i in 0..64 {
        t1 = rh
            .wrapping_add(ep1(re))
            .wrapping_add(ch(re, rf, rg))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        t2 = ep0(ra).wrapping_add(maj(ra, rb, rc));
        rh = rg;
        rg = rf;
        rf = re;
        re = rd.wrapping_add(t1);
        rd = rc;
        rc = rb;
        rb = ra;
        ra = t1.wrapping_add(t2);
    }

    registers[0] = registers[0].wrapping_add(ra);
    registers[1] = registers[1].wrapping_add(rb);
    registers[2] = registers[2].wrapping_add(rc);
    registers[3] = registers[3].wrapping_add(rd);
    registers[4] = registers[4].wrapping_add(re);
    registers[5] = registers[5].wrapping_add(rf);
    registers[6] = registers[6].wrapping_add(rg);
    registers[7] = registers[7].wrapping_add(rh);
}

/// 迭代压缩：依次处理每个512比特分组，输出256比特的哈希值
pub fn process(words: &[u32]) -> Result<[u32; 8]> {
    if words.len() % 16 != 0 {
        debug!(len = words.len(), "rejecting unaligned word sequence");
        return Err(Error::UnalignedWords { len: words.len() });
    }
    trace!(blocks = words.len() / 16, "compressing");

    let mut registers = IV;
    words.chunks_exact(16).for_each(|b| compress(&mut registers, b));
    Ok(registers)
}


#[cfg(test)]
mod tests {
    use crate::sha256::core::{IV, process, rotr};

    #[test]
    fn rotate() {
        assert_eq!(rotr(0x0000_0001, 1), 0x8000_0000);
        assert_eq!(rotr(0x1234_5678, 8), 0x7812_3456);
        assert_eq!(rotr(0xdead_beef, 0), 0xdead_beef);
        assert_eq!(rotr(0x8000_0000, 31), 0x0000_0001);
    }

    #[test]
    fn empty_word_sequence() {
        // 没有分组时直接输出初始值
        assert_eq!(process(&[]).unwrap(), IV);
    }

    #[test]
    fn padded_empty_block() {
        // 空消息填充后的唯一分组：0x80000000, 0 ...
        let mut block = [0u32; 16];
        block[0] = 0x8000_0000;
        let hash = process(&block).unwrap();
        assert_eq!(hash[0], 0xe3b0_c442);
        assert_eq!(hash[7], 0x7852_b855);
    }

    #[test]
    fn unaligned() {
        assert!(process(&[0; 15]).is_err());
        assert!(process(&[0; 17]).is_err());
    }
}
