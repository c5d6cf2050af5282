use crate::error::{ReflectError, Result};

/// 标识符引号约定
///
/// 由起始引号、结束引号以及结束引号在标识符内部的转义形式组成，
/// 例如 MySQL 的反引号（`` ` `` / `` ` `` / ``` `` ```）或 ANSI 双引号（`"` / `"` / `""`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierQuoting {
    initial_quote: String,
    final_quote: String,
    escaped_final: String,
}

impl IdentifierQuoting {
    /// 创建自定义引号约定，三个记号都不能为空
    pub fn new(
        initial_quote: impl Into<String>,
        final_quote: impl Into<String>,
        escaped_final: impl Into<String>,
    ) -> Result<Self> {
        let quoting = Self {
            initial_quote: initial_quote.into(),
            final_quote: final_quote.into(),
            escaped_final: escaped_final.into(),
        };

        if quoting.initial_quote.is_empty() || quoting.final_quote.is_empty() {
            return Err(ReflectError::invalid_quoting("起始引号和结束引号不能为空"));
        }
        if quoting.escaped_final.is_empty() {
            return Err(ReflectError::invalid_quoting("结束引号的转义形式不能为空"));
        }
        if quoting.escaped_final == quoting.final_quote {
            return Err(ReflectError::invalid_quoting(format!(
                "转义形式 {:?} 不能与结束引号相同",
                quoting.escaped_final
            )));
        }

        Ok(quoting)
    }

    /// MySQL 默认的反引号约定
    pub fn backtick() -> Self {
        Self {
            initial_quote: "`".to_string(),
            final_quote: "`".to_string(),
            escaped_final: "``".to_string(),
        }
    }

    /// ANSI_QUOTES 模式下的双引号约定
    pub fn ansi() -> Self {
        Self {
            initial_quote: "\"".to_string(),
            final_quote: "\"".to_string(),
            escaped_final: "\"\"".to_string(),
        }
    }

    pub fn initial_quote(&self) -> &str {
        &self.initial_quote
    }

    pub fn final_quote(&self) -> &str {
        &self.final_quote
    }

    pub fn escaped_final(&self) -> &str {
        &self.escaped_final
    }

    /// 为标识符加引号，内部的结束引号会被转义
    pub fn quote_identifier(&self, name: &str) -> String {
        format!(
            "{}{}{}",
            self.initial_quote,
            name.replace(&self.final_quote, &self.escaped_final),
            self.final_quote
        )
    }

    /// 还原标识符内部被转义的结束引号
    pub fn unescape_identifier(&self, value: &str) -> String {
        value.replace(&self.escaped_final, &self.final_quote)
    }

    /// 将可能带 schema 限定的引号标识符拆分为各个部分
    ///
    /// `` `db`.`t` `` => `["db", "t"]`，`` `a``b` `` => ``["a`b"]``。
    /// 未加引号的部分按 `.` 切分后原样返回。
    pub fn unformat_identifiers(&self, identifiers: &str) -> Vec<String> {
        let mut parts = Vec::new();
        let mut rest = identifiers;

        while !rest.is_empty() {
            let (part, remaining) = match self.take_quoted(rest) {
                Some(found) => found,
                None => match rest.find('.') {
                    Some(idx) => (rest[..idx].to_string(), &rest[idx..]),
                    None => (rest.to_string(), ""),
                },
            };

            if !part.is_empty() {
                parts.push(self.unescape_identifier(&part));
            }
            rest = remaining.strip_prefix('.').unwrap_or(remaining);
        }

        parts
    }

    /// 读取一个完整的引号标识符，要求其后紧跟 `.` 或结尾
    fn take_quoted<'a>(&self, text: &'a str) -> Option<(String, &'a str)> {
        let mut rest = text.strip_prefix(self.initial_quote.as_str())?;
        let mut body = String::new();

        loop {
            if rest.starts_with(self.escaped_final.as_str()) {
                body.push_str(&self.escaped_final);
                rest = &rest[self.escaped_final.len()..];
            } else if let Some(after) = rest.strip_prefix(self.final_quote.as_str()) {
                if after.is_empty() || after.starts_with('.') {
                    return Some((body, after));
                }
                return None;
            } else {
                let ch = rest.chars().next()?;
                body.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
}

impl Default for IdentifierQuoting {
    fn default() -> Self {
        Self::backtick()
    }
}
