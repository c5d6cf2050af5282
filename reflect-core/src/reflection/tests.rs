use super::{
    DescribeRow, IdentifierQuoting, KeyKind, LineKind, ReferentialAction, ReflectedState,
    ReflectionWarning, TableDefinitionParser, TypeArg, TypeKind, parse_describe_rows,
};

const USERS_DDL: &str = r#"CREATE TABLE `users` (
  `id` int(11) unsigned NOT NULL AUTO_INCREMENT,
  `name` varchar(64) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL DEFAULT '' COMMENT 'user''s name',
  `status` enum('active','disabled') NOT NULL DEFAULT 'active',
  `flags` set('a','','b') DEFAULT NULL,
  `created_at` timestamp(3) NOT NULL DEFAULT CURRENT_TIMESTAMP(3) ON UPDATE CURRENT_TIMESTAMP(3),
  `score` decimal(10,2) DEFAULT NULL,
  `org_id` bigint DEFAULT NULL,
  `full_name` varchar(130) GENERATED ALWAYS AS (concat(`name`,' ',`id`)) STORED,
  `note` text,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uk_name` (`name`(32)) USING BTREE,
  KEY `idx_status_created` (`status`,`created_at` DESC) KEY_BLOCK_SIZE=8 COMMENT 'hot path',
  CONSTRAINT `fk_users_org` FOREIGN KEY (`org_id`) REFERENCES `corp`.`orgs` (`id`) ON DELETE SET NULL ON UPDATE CASCADE,
  CONSTRAINT `chk_score` CHECK ((`score` >= 0))
) ENGINE=InnoDB AUTO_INCREMENT=17 DEFAULT CHARSET=utf8mb4 COMMENT='people'"#;

fn mysql() -> TableDefinitionParser {
    TableDefinitionParser::mysql().unwrap()
}

fn parse(ddl: &str) -> (ReflectedState, Vec<ReflectionWarning>) {
    let mut warnings = Vec::new();
    let state = mysql().parse(ddl, "utf8mb4", &mut warnings);
    (state, warnings)
}

/// 只有一列的简单表
fn single_column(column_line: &str) -> String {
    format!("CREATE TABLE `t` (\n{column_line}\n) ENGINE=InnoDB")
}

#[test]
fn test_parse_full_table() {
    let (state, warnings) = parse(USERS_DDL);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    assert_eq!(state.table_name.as_deref(), Some("users"));
    assert_eq!(state.charset, "utf8mb4");
    assert_eq!(state.columns.len(), 9);
    assert_eq!(state.keys.len(), 3);
    assert_eq!(state.fk_constraints.len(), 1);
    assert_eq!(state.ck_constraints.len(), 1);
    assert!(state.partitions.is_empty());
}

#[test]
fn test_column_order_matches_input() {
    let (state, _) = parse(USERS_DDL);
    let names: Vec<&str> = state.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "id",
            "name",
            "status",
            "flags",
            "created_at",
            "score",
            "org_id",
            "full_name",
            "note"
        ]
    );
}

#[test]
fn test_integer_column() {
    let (state, _) = parse(USERS_DDL);
    let id = state.column("id").unwrap();

    assert_eq!(id.column_type.name, "int");
    assert_eq!(id.column_type.kind, TypeKind::Integer);
    assert_eq!(id.column_type.args, vec![TypeArg::Int(11)]);
    assert!(id.column_type.unsigned);
    assert!(!id.column_type.zerofill);
    assert!(!id.nullable);
    assert_eq!(id.autoincrement, Some(true));
    assert_eq!(id.default, None);
    assert!(!id.degraded);

    // 整数列没有 AUTO_INCREMENT 时显式为 false
    let org_id = state.column("org_id").unwrap();
    assert_eq!(org_id.autoincrement, Some(false));
    assert!(org_id.nullable);
    assert_eq!(org_id.default, None);
}

#[test]
fn test_string_column_options() {
    let (state, _) = parse(USERS_DDL);
    let name = state.column("name").unwrap();

    assert_eq!(name.column_type.args, vec![TypeArg::Int(64)]);
    assert_eq!(name.column_type.charset.as_deref(), Some("utf8mb4"));
    assert_eq!(name.column_type.collation.as_deref(), Some("utf8mb4_bin"));
    assert!(!name.nullable);
    assert_eq!(name.default.as_deref(), Some("''"));
    assert_eq!(name.comment.as_deref(), Some("user's name"));
    // 非整数列未声明 AUTO_INCREMENT 时保持未指定
    assert_eq!(name.autoincrement, None);
}

#[test]
fn test_enum_and_set_values() {
    let (state, _) = parse(USERS_DDL);

    let status = state.column("status").unwrap();
    assert_eq!(status.column_type.kind, TypeKind::Enum);
    assert_eq!(
        status.column_type.args,
        vec![
            TypeArg::Str("active".to_string()),
            TypeArg::Str("disabled".to_string())
        ]
    );
    assert!(!status.column_type.retrieve_as_bitwise);
    assert_eq!(status.default.as_deref(), Some("'active'"));

    let flags = state.column("flags").unwrap();
    assert_eq!(flags.column_type.kind, TypeKind::Set);
    assert_eq!(
        flags.column_type.args,
        vec![
            TypeArg::Str("a".to_string()),
            TypeArg::Str(String::new()),
            TypeArg::Str("b".to_string())
        ]
    );
    assert!(flags.column_type.retrieve_as_bitwise);
    assert!(flags.nullable);
    assert_eq!(flags.default, None);
}

#[test]
fn test_set_without_empty_value() {
    let (state, _) = parse(&single_column("  `s` set('a','b') DEFAULT NULL"));
    let s = state.column("s").unwrap();
    assert!(!s.column_type.retrieve_as_bitwise);
    assert_eq!(s.column_type.args.len(), 2);
}

#[test]
fn test_enum_value_with_escaped_quote() {
    let (state, _) = parse(&single_column("  `e` enum('it''s','x,y') NOT NULL"));
    let e = state.column("e").unwrap();
    assert_eq!(
        e.column_type.args,
        vec![
            TypeArg::Str("it's".to_string()),
            TypeArg::Str("x,y".to_string())
        ]
    );
}

#[test]
fn test_fractional_seconds_precision() {
    let (state, _) = parse(USERS_DDL);
    let created = state.column("created_at").unwrap();

    assert_eq!(created.column_type.kind, TypeKind::Timestamp);
    assert_eq!(created.column_type.fsp, Some(3));
    assert!(created.column_type.args.is_empty());
    assert_eq!(
        created.default.as_deref(),
        Some("CURRENT_TIMESTAMP(3) ON UPDATE CURRENT_TIMESTAMP(3)")
    );
    assert_eq!(created.autoincrement, None);

    let (state, _) = parse(&single_column("  `d` datetime DEFAULT NULL"));
    assert_eq!(state.column("d").unwrap().column_type.fsp, None);
}

#[test]
fn test_decimal_arguments() {
    let (state, _) = parse(USERS_DDL);
    let score = state.column("score").unwrap();
    assert_eq!(score.column_type.kind, TypeKind::Numeric);
    assert_eq!(score.column_type.args, vec![TypeArg::Int(10), TypeArg::Int(2)]);
}

#[test]
fn test_generated_column() {
    let (state, _) = parse(USERS_DDL);
    let full_name = state.column("full_name").unwrap();
    let computed = full_name.computed.as_ref().unwrap();
    assert_eq!(computed.sqltext, "(concat(`name`,' ',`id`))");
    assert_eq!(computed.persisted, Some(true));

    let (state, _) = parse(&single_column(
        "  `v` int GENERATED ALWAYS AS ((`a` + 1)) VIRTUAL",
    ));
    let computed = state.column("v").unwrap().computed.clone().unwrap();
    assert_eq!(computed.sqltext, "((`a` + 1))");
    assert_eq!(computed.persisted, Some(false));

    // 普通列没有 computed
    assert!(USERS_DDL.contains("`note` text"));
    let (state, _) = parse(USERS_DDL);
    assert!(state.column("note").unwrap().computed.is_none());
}

#[test]
fn test_nullable_defaults_to_true() {
    let (state, _) = parse(&single_column("  `a` int,"));
    let a = state.column("a").unwrap();
    assert!(a.nullable);
    assert_eq!(a.autoincrement, Some(false));
}

#[test]
fn test_timestamp_null_keeps_nullable() {
    let (state, _) = parse(&single_column("  `ts` timestamp NULL DEFAULT NULL"));
    let ts = state.column("ts").unwrap();
    assert!(ts.nullable);
    assert_eq!(ts.default, None);
}

#[test]
fn test_comment_unescape() {
    let (state, _) = parse(&single_column(
        r"  `c` varchar(10) DEFAULT NULL COMMENT 'C:\\temp ''quoted'''",
    ));
    assert_eq!(
        state.column("c").unwrap().comment.as_deref(),
        Some(r"C:\temp 'quoted'")
    );
}

#[test]
fn test_column_format_and_storage() {
    let (state, _) = parse(&single_column(
        "  `f` int NOT NULL COLUMN_FORMAT FIXED STORAGE DISK,",
    ));
    let f = state.column("f").unwrap();
    assert_eq!(f.column_format.as_deref(), Some("FIXED"));
    assert_eq!(f.storage.as_deref(), Some("DISK"));
    assert_eq!(f.extra, None);
}

#[test]
fn test_primary_and_unique_keys() {
    let (state, _) = parse(USERS_DDL);

    let pk = state.primary_key().unwrap();
    assert_eq!(pk.name, None);
    assert_eq!(pk.columns.len(), 1);
    assert_eq!(pk.columns[0].name, "id");

    let uk = &state.keys[1];
    assert_eq!(uk.kind, Some(KeyKind::Unique));
    assert_eq!(uk.name.as_deref(), Some("uk_name"));
    assert_eq!(uk.columns[0].name, "name");
    assert_eq!(uk.columns[0].length, Some(32));
    assert_eq!(uk.using_pre, None);
    assert_eq!(uk.using_post.as_deref(), Some("BTREE"));
}

#[test]
fn test_key_kind_prefixes() {
    let ddl = "CREATE TABLE `g` (\n  `a` int,\n  `p` point NOT NULL,\n  spatial KEY `sp` (`p`),\n  BOGUS KEY `b` (`a`)\n) ENGINE=InnoDB";
    let (state, warnings) = parse(ddl);

    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(state.keys[0].kind, Some(KeyKind::Spatial));
    // 未知前缀不丢弃，按大写保留
    assert_eq!(state.keys[1].kind, Some(KeyKind::Other("BOGUS".to_string())));
    assert_eq!(state.keys[1].kind.as_ref().map(KeyKind::as_str), Some("BOGUS"));
    assert!(state.primary_key().is_none());
}

#[test]
fn test_plain_key_with_options() {
    let (state, _) = parse(USERS_DDL);
    let key = &state.keys[2];

    assert_eq!(key.kind, None);
    assert_eq!(key.name.as_deref(), Some("idx_status_created"));
    assert_eq!(key.columns.len(), 2);
    assert_eq!(key.columns[0].name, "status");
    assert_eq!(key.columns[0].direction, None);
    assert_eq!(key.columns[1].name, "created_at");
    assert_eq!(key.columns[1].direction.as_deref(), Some("DESC"));
    assert_eq!(key.key_block_size.as_deref(), Some("8"));
    assert_eq!(key.comment.as_deref(), Some("hot path"));
}

#[test]
fn test_key_block_size_separators() {
    let with_equals = "CREATE TABLE `t` (\n  `a` int,\n  KEY `k` (`a`) KEY_BLOCK_SIZE=8\n) ";
    let with_space = "CREATE TABLE `t` (\n  `a` int,\n  KEY `k` (`a`) KEY_BLOCK_SIZE 8\n) ";

    let (a, _) = parse(with_equals);
    let (b, _) = parse(with_space);
    assert_eq!(a.keys[0].key_block_size.as_deref(), Some("8"));
    assert_eq!(a.keys, b.keys);
}

#[test]
fn test_using_before_column_list() {
    let (state, _) = parse(&single_column("  KEY `k` USING HASH (`a`),"));
    let key = &state.keys[0];
    assert_eq!(key.using_pre.as_deref(), Some("HASH"));
    assert_eq!(key.using_post, None);
}

#[test]
fn test_key_comment_with_doubled_quotes() {
    let (state, _) = parse(&single_column("  KEY `k` (`a`) COMMENT 'it''s hot'"));
    assert_eq!(state.keys[0].comment.as_deref(), Some("it's hot"));
}

#[test]
fn test_fulltext_parser_from_version_comment() {
    let ddl = "CREATE TABLE `docs` (\n  `body` text,\n  FULLTEXT KEY `ft_body` (`body`) /*!50100 WITH PARSER `ngram` */ \n) ENGINE=InnoDB";
    let (state, warnings) = parse(ddl);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let key = &state.keys[0];
    assert_eq!(key.kind, Some(KeyKind::Fulltext));
    assert_eq!(key.version_sql.as_deref(), Some("!50100 WITH PARSER `ngram` "));
    assert_eq!(key.parser.as_deref(), Some("ngram"));
}

#[test]
fn test_fulltext_parser_direct() {
    let (state, _) = parse(&single_column("  FULLTEXT KEY `ft` (`body`) WITH PARSER ngram,"));
    let key = &state.keys[0];
    assert_eq!(key.parser.as_deref(), Some("ngram"));
    assert_eq!(key.version_sql, None);
}

#[test]
fn test_foreign_key() {
    let (state, _) = parse(USERS_DDL);
    let fk = &state.fk_constraints[0];

    assert_eq!(fk.name, "fk_users_org");
    assert_eq!(fk.local, vec!["org_id"]);
    assert_eq!(fk.table.schema.as_deref(), Some("corp"));
    assert_eq!(fk.table.name, "orgs");
    assert_eq!(fk.foreign, vec!["id"]);
    assert_eq!(fk.match_mode, None);
    assert_eq!(fk.on_delete, Some(ReferentialAction::SetNull));
    assert_eq!(fk.on_update, Some(ReferentialAction::Cascade));
}

#[test]
fn test_foreign_key_composite_with_match() {
    let (state, _) = parse(&single_column(
        "  CONSTRAINT `fk2` FOREIGN KEY (`a`,`b`) REFERENCES `other` (`x`,`y`) MATCH FULL ON DELETE NO ACTION",
    ));
    let fk = &state.fk_constraints[0];

    assert_eq!(fk.local, vec!["a", "b"]);
    assert_eq!(fk.table.schema, None);
    assert_eq!(fk.table.name, "other");
    assert_eq!(fk.foreign, vec!["x", "y"]);
    assert_eq!(fk.match_mode.as_deref(), Some("MATCH FULL"));
    assert_eq!(fk.on_delete, Some(ReferentialAction::NoAction));
    assert_eq!(fk.on_update, None);
}

#[test]
fn test_foreign_key_action_vocabulary_is_closed() {
    let (state, _) = parse(&single_column(
        "  CONSTRAINT `fk3` FOREIGN KEY (`a`) REFERENCES `other` (`x`) ON DELETE SET DEFAULT",
    ));
    let fk = &state.fk_constraints[0];
    assert_eq!(fk.on_delete, None);
    assert_eq!(fk.on_update, None);

    assert_eq!(ReferentialAction::parse("restrict"), Some(ReferentialAction::Restrict));
    assert_eq!(ReferentialAction::parse("SET  NULL"), Some(ReferentialAction::SetNull));
    assert_eq!(ReferentialAction::parse("SET DEFAULT"), None);
}

#[test]
fn test_check_constraint() {
    let (state, _) = parse(USERS_DDL);
    let ck = &state.ck_constraints[0];
    assert_eq!(ck.name, "chk_score");
    assert_eq!(ck.sqltext, "(`score` >= 0)");
}

#[test]
fn test_table_options() {
    let (state, _) = parse(USERS_DDL);
    let options = &state.table_options;

    assert_eq!(options.get("mysql_engine").map(String::as_str), Some("InnoDB"));
    assert_eq!(
        options.get("mysql_default charset").map(String::as_str),
        Some("utf8mb4")
    );
    assert_eq!(options.get("mysql_comment").map(String::as_str), Some("people"));
    assert!(!options.contains_key("mysql_auto_increment"));
    assert_eq!(options.len(), 3);
}

#[test]
fn test_table_options_use_dialect_prefix() {
    let parser = TableDefinitionParser::new("mariadb", IdentifierQuoting::backtick()).unwrap();
    let mut warnings = Vec::new();
    let state = parser.parse(&single_column("  `a` int"), "latin1", &mut warnings);
    assert_eq!(
        state.table_options.get("mariadb_engine").map(String::as_str),
        Some("InnoDB")
    );
}

#[test]
fn test_partition_lines_are_kept_opaque() {
    let ddl = "CREATE TABLE `p` (\n  `id` int NOT NULL\n) ENGINE=InnoDB\n/*!50100 PARTITION BY RANGE (`id`)\n(PARTITION p0 VALUES LESS THAN (10) ENGINE = InnoDB) */";
    let (state, warnings) = parse(ddl);

    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(state.partitions.len(), 2);
    assert_eq!(state.partitions[0], "/*!50100 PARTITION BY RANGE (`id`)");
    assert!(state.keys.is_empty());
}

#[test]
fn test_unknown_line_is_tolerated() {
    let ddl = "CREATE TABLE `t` (\n  `a` int NOT NULL,\n  SOMETHING WEIRD HERE,\n  `b` varchar(10),\n  PRIMARY KEY (`a`)\n) ENGINE=InnoDB";
    let (state, warnings) = parse(ddl);

    assert_eq!(state.columns.len(), 2);
    assert_eq!(state.keys.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        ReflectionWarning::UnknownSchemaContent { line } if line == "  SOMETHING WEIRD HERE,"
    ));
    assert_eq!(warnings[0].line(), Some("  SOMETHING WEIRD HERE,"));
}

#[test]
fn test_unknown_column_definition_is_skipped() {
    let ddl = "CREATE TABLE `t` (\n  `broken`,\n  `a` int\n) ";
    let (state, warnings) = parse(ddl);

    assert_eq!(state.columns.len(), 1);
    assert_eq!(state.columns[0].name, "a");
    assert_eq!(
        warnings,
        vec![ReflectionWarning::UnknownColumnDefinition {
            line: "  `broken`,".to_string()
        }]
    );
}

#[test]
fn test_loose_column_match_is_degraded() {
    let (state, warnings) = parse(&single_column("  `x` float(7,4,1) NOT NULL,"));

    let x = state.column("x").unwrap();
    assert!(x.degraded);
    assert_eq!(x.column_type.kind, TypeKind::Float);
    assert!(x.column_type.args.is_empty());
    assert!(!x.nullable);
    assert!(matches!(
        &warnings[..],
        [ReflectionWarning::IncompleteColumnReflection { .. }]
    ));
}

#[test]
fn test_unrecognized_type_falls_back_to_null() {
    let (state, warnings) = parse(&single_column("  `m` money NOT NULL,"));

    let m = state.column("m").unwrap();
    assert_eq!(m.column_type.kind, TypeKind::Null);
    assert_eq!(m.column_type.name, "money");
    assert_eq!(m.autoincrement, None);
    assert_eq!(
        warnings,
        vec![ReflectionWarning::UnrecognizedType {
            column: "m".to_string(),
            type_name: "money".to_string()
        }]
    );
}

#[test]
fn test_last_table_name_wins() {
    let ddl = "CREATE TABLE `first` (\n  `a` int\n)\nCREATE TABLE `second` (\n  `b` int\n)";
    let (state, warnings) = parse(ddl);

    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(state.table_name.as_deref(), Some("second"));
    // 列仍然按出现顺序全部累积
    assert_eq!(state.columns.len(), 2);
}

#[test]
fn test_ansi_quoting() {
    let parser = TableDefinitionParser::new("mysql", IdentifierQuoting::ansi()).unwrap();
    let ddl = "CREATE TABLE \"t\"\"x\" (\n  \"id\" int NOT NULL AUTO_INCREMENT,\n  PRIMARY KEY (\"id\")\n)";
    let mut warnings = Vec::new();
    let state = parser.parse(ddl, "utf8", &mut warnings);

    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(state.table_name.as_deref(), Some("t\"x"));
    let id = state.column("id").unwrap();
    assert_eq!(id.column_type.name, "int");
    assert!(!id.nullable);
    assert_eq!(id.autoincrement, Some(true));
    assert_eq!(state.keys[0].columns[0].name, "id");
    assert!(state.table_options.is_empty());
}

#[test]
fn test_escaped_identifier_in_column_name() {
    let (state, _) = parse(&single_column("  `we``ird` int"));
    assert_eq!(state.columns[0].name, "we`ird");
}

#[test]
fn test_crlf_line_endings() {
    let ddl = USERS_DDL.replace('\n', "\r\n");
    let (crlf, warnings) = parse(&ddl);
    let (lf, _) = parse(USERS_DDL);

    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(crlf, lf);
}

#[test]
fn test_parse_is_idempotent() {
    let parser = mysql();
    let mut first_warnings = Vec::new();
    let mut second_warnings = Vec::new();

    let ddl = format!("{USERS_DDL}\n  SOMETHING WEIRD HERE");
    let first = parser.parse(&ddl, "utf8mb4", &mut first_warnings);
    let second = parser.parse(&ddl, "utf8mb4", &mut second_warnings);

    assert_eq!(first, second);
    assert_eq!(first_warnings, second_warnings);
}

#[test]
fn test_empty_lines_and_terminator_ignored() {
    let ddl = "\nCREATE TABLE `t` (\n\n  `a` int\n)\n";
    let (state, warnings) = parse(ddl);
    assert!(warnings.is_empty());
    assert_eq!(state.columns.len(), 1);
    assert!(state.table_options.is_empty());
}

#[test]
fn test_classify_lines() {
    let parser = mysql();
    assert_eq!(parser.classify("  `a` int,"), LineKind::Column);
    assert_eq!(parser.classify(") ENGINE=InnoDB"), LineKind::TableOptions);
    assert_eq!(parser.classify(")"), LineKind::Terminator);
    assert_eq!(parser.classify("CREATE TABLE `t` ("), LineKind::TableName);
    assert_eq!(parser.classify(""), LineKind::Empty);
    assert_eq!(parser.classify("  PRIMARY KEY (`a`)"), LineKind::Constraint);
}

#[test]
fn test_parser_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TableDefinitionParser>();

    let parser = mysql();
    let results: Vec<ReflectedState> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let mut warnings = Vec::new();
                    parser.parse(USERS_DDL, "utf8mb4", &mut warnings)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_describe_to_create_format() {
    let parser = mysql();
    let rows = vec![
        DescribeRow {
            name: "id".to_string(),
            col_type: "int(11)".to_string(),
            nullable: false,
            default: None,
            extra: Some("auto_increment".to_string()),
        },
        DescribeRow {
            name: "name".to_string(),
            col_type: "varchar(32)".to_string(),
            nullable: true,
            default: Some("NULL".to_string()),
            extra: None,
        },
        DescribeRow {
            name: "created".to_string(),
            col_type: "timestamp".to_string(),
            nullable: false,
            default: Some("CURRENT_TIMESTAMP".to_string()),
            extra: Some("on update CURRENT_TIMESTAMP".to_string()),
        },
        DescribeRow {
            name: "title".to_string(),
            col_type: "varchar(10)".to_string(),
            nullable: false,
            default: Some("it's".to_string()),
            extra: None,
        },
        DescribeRow {
            name: "seq".to_string(),
            col_type: "bigint".to_string(),
            nullable: false,
            default: Some("auto_increment".to_string()),
            extra: None,
        },
    ];

    let ddl = parser.describe_to_create("v", &rows);
    assert_eq!(
        ddl,
        "CREATE TABLE `v` (\n  `id` int(11) NOT NULL auto_increment,\n  `name` varchar(32) DEFAULT NULL,\n  `created` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP on update CURRENT_TIMESTAMP,\n  `title` varchar(10) NOT NULL DEFAULT 'it''s',\n  `seq` bigint NOT NULL\n) "
    );
}

#[test]
fn test_describe_roundtrip() {
    let parser = mysql();
    let describe = "Field\tType\tNull\tKey\tDefault\tExtra\n\
id\tint(11) unsigned\tNO\tPRI\tNULL\tauto_increment\n\
name\tvarchar(32)\tYES\t\tNULL\t\n\
created\ttimestamp\tNO\t\tCURRENT_TIMESTAMP\ton update CURRENT_TIMESTAMP\n\
kind\tenum('a','b')\tNO\t\ta\t\n";
    let rows = parse_describe_rows(describe).unwrap();
    assert_eq!(rows.len(), 4);

    let ddl = parser.describe_to_create("my_view", &rows);
    let mut warnings = Vec::new();
    let state = parser.parse(&ddl, "utf8mb4", &mut warnings);

    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(state.table_name.as_deref(), Some("my_view"));
    assert_eq!(state.columns.len(), rows.len());
    for (row, column) in rows.iter().zip(&state.columns) {
        assert_eq!(column.name, row.name);
        assert!(row.col_type.starts_with(&column.column_type.name));
        assert_eq!(column.nullable, row.nullable);
    }

    let id = state.column("id").unwrap();
    assert!(id.column_type.unsigned);
    assert_eq!(id.autoincrement, Some(true));
    assert_eq!(state.column("kind").unwrap().default.as_deref(), Some("'a'"));
}

#[test]
fn test_parse_describe_rows_errors() {
    assert!(parse_describe_rows("id\tint").is_err());
    assert!(parse_describe_rows("id\tint\tMAYBE\t\t\t").is_err());
    assert!(parse_describe_rows("\n\n").unwrap().is_empty());
}
