use super::quoting::IdentifierQuoting;
use super::types::{KeyColumn, TypeArg};
use crate::error::Result;
use regex::{Regex, RegexBuilder};

/// 外键 ON DELETE / ON UPDATE 允许的动作
const REFERENTIAL_ACTIONS: &str = "RESTRICT|CASCADE|SET NULL|NO ACTION";

/// 编译正则：大小写不敏感，Unicode 感知
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(true)
        .build()?;
    Ok(regex)
}

/// 已转义、可直接拼进正则的三个引号记号
struct QuoteTokens {
    iq: String,
    fq: String,
    esc_fq: String,
}

impl QuoteTokens {
    fn new(quoting: &IdentifierQuoting) -> Self {
        Self {
            iq: regex::escape(quoting.initial_quote()),
            fq: regex::escape(quoting.final_quote()),
            esc_fq: regex::escape(quoting.escaped_final()),
        }
    }

    /// 带 `name` 捕获组的引号标识符，允许内部出现转义后的结束引号
    fn named_identifier(&self) -> String {
        format!(
            "{iq}(?P<name>(?:{esc}|[^{fq}])+){fq}",
            iq = self.iq,
            esc = self.esc_fq,
            fq = self.fq
        )
    }
}

/// SHOW CREATE TABLE 各类行的预编译正则
///
/// 每种引号约定构建一次，之后只读，可以在多个解析调用之间共享。
#[derive(Debug, Clone)]
pub(crate) struct Patterns {
    pub table_name: Regex,
    pub column: Regex,
    pub column_loose: Regex,
    pub key: Regex,
    pub key_version_sql: Regex,
    pub fk_constraint: Regex,
    pub ck_constraint: Regex,
    pub partition: Regex,
    keyexprs: Regex,
    csv_str: Regex,
    csv_int: Regex,
}

impl Patterns {
    pub fn new(quoting: &IdentifierQuoting) -> Result<Self> {
        let q = QuoteTokens::new(quoting);
        let ident = q.named_identifier();

        // CREATE [TEMPORARY] TABLE `name` (
        let table_name = compile(&format!(r"^CREATE (?:\w+ +)?TABLE +{ident} +\($"))?;

        // `col`,`col2`(32),`col3`(15) DESC
        let keyexprs = compile(&format!(
            r"{iq}(?P<name>(?:{esc}|[^{fq}])+){fq}(?:\((?P<length>\d+)\))?(?: +(?P<direction>ASC|DESC))?(?:,|$)",
            iq = q.iq,
            esc = q.esc_fq,
            fq = q.fq
        ))?;

        // 'foo' 或 'foo','bar' 或 'fo,o','ba''a''r'
        let csv_str = compile(r"'(?:''|[^'])*'")?;

        // 123 或 123,456
        let csv_int = compile(r"\d+")?;

        // `colname` <type> [type opts]
        //  (NOT NULL | NULL)
        //   DEFAULT ('value' | CURRENT_TIMESTAMP...)
        //   COMMENT 'comment'
        //  COLUMN_FORMAT (FIXED|DYNAMIC|DEFAULT)
        //  STORAGE (DISK|MEMORY)
        let column = compile(&format!(
            concat!(
                r"^  {ident} +",
                r"(?P<coltype>\w+)",
                r"(?:\((?P<arg>(?:\d+|\d+,\d+|(?:'(?:''|[^'])*',?)+))\))?",
                r"(?: +(?P<unsigned>UNSIGNED))?",
                r"(?: +(?P<zerofill>ZEROFILL))?",
                r"(?: +CHARACTER SET +(?P<charset>[\w_]+))?",
                r"(?: +COLLATE +(?P<collate>[\w_]+))?",
                r"(?: +(?P<notnull>(?:NOT )?NULL))?",
                r"(?: +DEFAULT +(?P<default>",
                r"(?:NULL|'(?:''|[^'])*'|[\w\.\(\)]+",
                r"(?: +ON UPDATE [\w\.\(\)]+)?)",
                r"))?",
                r"(?: +(?:GENERATED ALWAYS)? ?AS +(?P<generated>\(",
                r".*\))? ?(?P<persistence>VIRTUAL|STORED)?)?",
                r"(?: +(?P<autoincr>AUTO_INCREMENT))?",
                r"(?: +COMMENT +'(?P<comment>(?:''|[^'])*)')?",
                r"(?: +COLUMN_FORMAT +(?P<colfmt>\w+))?",
                r"(?: +STORAGE +(?P<storage>\w+))?",
                r"(?: +(?P<extra>.*))?",
                r",?$"
            ),
            ident = ident
        ))?;

        // 宽松匹配：只取名称、类型、单个参数，尽力识别 NOT NULL
        let column_loose = compile(&format!(
            concat!(
                r"^  {ident} +",
                r"(?P<coltype>\w+)",
                r"(?:\((?P<arg>(?:\d+|\d+,\d+|'(?:''|[^'])+'))\))?",
                r"(?:.*? (?P<notnull>NOT NULL))?"
            ),
            ident = ident
        ))?;

        // (PRIMARY|UNIQUE|FULLTEXT|SPATIAL) KEY `name` (USING (BTREE|HASH))?
        // (`col` (ASC|DESC)?, `col` (ASC|DESC)?)
        // KEY_BLOCK_SIZE size | WITH PARSER name  /*!50100 WITH PARSER name */
        let key = compile(&format!(
            concat!(
                r"^  (?:(?P<type>\S+) )?KEY",
                r"(?: +{ident})?",
                r"(?: +USING +(?P<using_pre>[^\s,]+))?",
                r" +\((?P<columns>.+?)\)",
                r"(?: +USING +(?P<using_post>[^\s,]+))?",
                r"(?: +KEY_BLOCK_SIZE *[ =]? *(?P<keyblock>[^\s,]+))?",
                r"(?: +WITH PARSER +(?P<parser>[^\s,]+))?",
                r"(?: +COMMENT +(?P<comment>(?:''|'[^']*?')+))?",
                r"(?: +/\*(?P<version_sql>.+)\*/ *)?",
                r",?$"
            ),
            ident = ident
        ))?;

        // /*!50100 ... */：服务器版本 >= 50100 时才执行注释中的内容
        let key_version_sql = compile(r"^!\d+ (?: *WITH PARSER +(?P<parser>\S+) *)?")?;

        // CONSTRAINT `name` FOREIGN KEY (`local_col`)
        // REFERENCES `remote` (`remote_col`)
        // MATCH FULL | MATCH PARTIAL | MATCH SIMPLE
        // ON DELETE CASCADE ON UPDATE RESTRICT
        let fk_constraint = compile(&format!(
            concat!(
                r"^  CONSTRAINT +{ident} +",
                r"FOREIGN KEY +",
                r"\((?P<local>[^\)]+?)\) REFERENCES +",
                r"(?P<table>{iq}[^{fq}]+{fq}",
                r"(?:\.{iq}[^{fq}]+{fq})?) +",
                r"\((?P<foreign>[^\)]+?)\)",
                r"(?: +(?P<match>MATCH \w+))?",
                r"(?: +ON DELETE (?P<ondelete>{on}))?",
                r"(?: +ON UPDATE (?P<onupdate>{on}))?"
            ),
            ident = ident,
            iq = q.iq,
            fq = q.fq,
            on = REFERENTIAL_ACTIONS
        ))?;

        // CONSTRAINT `CONSTRAINT_1` CHECK (`x` > 5)
        // 表达式本身可能带括号，直接匹配到行尾
        let ck_constraint = compile(&format!(
            r"^  CONSTRAINT +{ident} +CHECK +\((?P<sqltext>.+)\),?"
        ))?;

        let partition = compile(r"^.*(?:SUB)?PARTITION")?;

        Ok(Self {
            table_name,
            column,
            column_loose,
            key,
            key_version_sql,
            fk_constraint,
            ck_constraint,
            partition,
            keyexprs,
            csv_str,
            csv_int,
        })
    }

    /// 拆解 `` `col`(2),`col` ASC `` 形式的索引列列表
    pub fn parse_keyexprs(&self, quoting: &IdentifierQuoting, text: &str) -> Vec<KeyColumn> {
        self.keyexprs
            .captures_iter(text)
            .map(|caps| KeyColumn {
                name: quoting.unescape_identifier(&caps["name"]),
                length: caps.name("length").and_then(|m| m.as_str().parse().ok()),
                direction: caps.name("direction").map(|m| m.as_str().to_uppercase()),
            })
            .collect()
    }

    /// 解析类型的位置参数
    ///
    /// 以单引号开头并结尾的按字符串列表处理（保留引号），否则按整数列表处理。
    pub fn parse_type_args(&self, args: Option<&str>) -> Vec<TypeArg> {
        let Some(args) = args.filter(|a| !a.is_empty()) else {
            return Vec::new();
        };

        if args.len() >= 2 && args.starts_with('\'') && args.ends_with('\'') {
            self.csv_str
                .find_iter(args)
                .map(|m| TypeArg::Str(m.as_str().to_string()))
                .collect()
        } else {
            self.csv_int
                .find_iter(args)
                .filter_map(|m| m.as_str().parse().ok())
                .map(TypeArg::Int)
                .collect()
        }
    }
}
