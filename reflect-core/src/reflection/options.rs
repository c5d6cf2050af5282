use super::patterns::compile;
use crate::constants::table_options::{
    DISCARDED, REGEX_DIRECTIVES, STRING_DIRECTIVES, WORD_DIRECTIVES,
};
use crate::error::Result;
use regex::Regex;
use std::collections::BTreeMap;

/// 指令与值之间的分隔：`=`（两侧可有空白）或至少一个空白
const OPTIONAL_EQUALS: &str = r"(?:\s*(?:=\s*)|\s+)";

#[derive(Debug, Clone, Copy)]
enum Cleanup {
    None,
    /// `\\` => `\`，`''` => `'`
    Unescape,
}

impl Cleanup {
    fn apply(self, value: &str) -> String {
        match self {
            Cleanup::None => value.to_string(),
            Cleanup::Unescape => value.replace("\\\\", "\\").replace("''", "'"),
        }
    }
}

#[derive(Debug, Clone)]
struct OptionPattern {
    regex: Regex,
    cleanup: Cleanup,
}

/// 表选项扫描器
///
/// 对 `) ENGINE=InnoDB ...` 这一行按注册顺序逐个尝试选项正则。每次命中后
/// 会把命中的文本从工作副本中删除，后面的正则看不到已经被认领的内容，
/// 因此结果依赖顺序，不能并行执行。
#[derive(Debug, Clone)]
pub(crate) struct TableOptionScanner {
    patterns: Vec<OptionPattern>,
}

impl TableOptionScanner {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::new();

        // 先处理字符串值，引号里的内容可能干扰后面的匹配
        for directive in STRING_DIRECTIVES {
            patterns.push(OptionPattern {
                regex: compile(&format!(
                    r"(?P<directive>{}){OPTIONAL_EQUALS}'(?P<val>(?:[^']|'')*)'",
                    regex::escape(directive)
                ))?,
                cleanup: Cleanup::Unescape,
            });
        }

        for directive in WORD_DIRECTIVES {
            patterns.push(OptionPattern {
                regex: compile(&format!(
                    r"(?P<directive>{}){OPTIONAL_EQUALS}(?P<val>\w+)",
                    regex::escape(directive)
                ))?,
                cleanup: Cleanup::None,
            });
        }

        for (directive, value) in REGEX_DIRECTIVES {
            patterns.push(OptionPattern {
                regex: compile(&format!(
                    r"(?P<directive>{}){OPTIONAL_EQUALS}(?P<val>{value})",
                    regex::escape(directive)
                ))?,
                cleanup: Cleanup::None,
            });
        }

        Ok(Self { patterns })
    }

    /// 扫描一行表选项，返回 `小写指令 => 值`
    ///
    /// auto_increment 属于瞬时值，data/index directory 与存储位置相关，都不保留。
    pub fn scan(&self, line: &str) -> BTreeMap<String, String> {
        let mut options = BTreeMap::new();

        if line.is_empty() || line == ")" {
            return options;
        }

        let mut rest_of_line = line.to_string();
        for pattern in &self.patterns {
            let Some((directive, value)) = pattern.regex.captures(&rest_of_line).map(|caps| {
                (
                    caps["directive"].to_lowercase(),
                    pattern.cleanup.apply(&caps["val"]),
                )
            }) else {
                continue;
            };

            options.insert(directive, value);
            rest_of_line = pattern.regex.replace_all(&rest_of_line, "").into_owned();
        }

        for nope in DISCARDED {
            options.remove(*nope);
        }

        options
    }
}
