mod base16;
mod base64;

pub use self::base16::encode_base16;
pub use self::base64::encode_base64_variant;

/// 16进制默认字母表
pub const BASE16_ALPHABET: &str = "0123456789abcdef";

/// 变种base64默认字母表：大写字母、小写字母、数字、`.`、`_`
pub const BASE64_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789._";


/// 摘要的输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Base16,
    Base64,
}

/// 输出配置：自定义字母表和截断长度，缺省时使用默认字母表、不截断
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub alphabet: Option<String>,
    pub length: Option<usize>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
}

impl Encoding {
    pub fn encode(&self, words: &[u32], options: &Options) -> String {
        let alphabet = options.alphabet.as_deref();
        match self {
            Encoding::Base16 => encode_base16(words, alphabet, options.length),
            Encoding::Base64 => encode_base64_variant(words, alphabet, options.length),
        }
    }
}


/// 字母表，长度不足时循环使用
struct Alphabet(Vec<char>);

impl Alphabet {
    fn new(chars: Option<&str>, default: &str) -> Self {
        match chars {
            Some(chars) if !chars.is_empty() => Alphabet(chars.chars().collect()),
            _ => Alphabet(default.chars().collect()),
        }
    }

    fn symbol(&self, index: usize) -> char {
        self.0[index % self.0.len()]
    }
}

/// 按字符截取前`length`个
fn truncate(out: String, length: Option<usize>) -> String {
    match length {
        Some(n) => out.chars().take(n).collect(),
        None => out,
    }
}
