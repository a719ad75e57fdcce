//! 通用换行的逐行读取
//!
//! `\n`、`\r\n`、单独的 `\r` 都视为行结束符，且不计入行内容。
//! 在字节层面切分后再做 UTF-8 解码：`\n` / `\r` 不会出现在多字节序列中，切分安全。
use std::io::{self, BufRead};

pub(crate) struct UniversalLines<R> {
    reader: R,
}

impl<R: BufRead> UniversalLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { reader }
    }

    /// 读取下一行的原始字节（不含结束符）；到达 EOF 返回 None
    pub(crate) fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                // 末尾无换行的残段也算一行；空文件没有行
                return Ok(if line.is_empty() { None } else { Some(line) });
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let is_cr = available[i] == b'\r';
                    line.extend_from_slice(&available[..i]);
                    self.reader.consume(i + 1);
                    if is_cr {
                        self.skip_lf()?;
                    }
                    return Ok(Some(line));
                }
                None => {
                    let n = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(n);
                }
            }
        }
    }

    /// `\r` 之后紧跟的 `\n` 属于同一个结束符
    fn skip_lf(&mut self) -> io::Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    if buf.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
