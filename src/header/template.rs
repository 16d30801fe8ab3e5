/// Field lines of the header, before comment decoration.
pub const FIELD_LINES: &[&str] = &[
    "  File      : FILENAME",
    "  Project   : PROJECT",
    "  Date      : DATE",
    "  License   : See project's COPYING.TXT for full info.",
    "  Author    : USER_NAME <USER_EMAIL>",
    "  Copyright : USER_NAME - YEAR",
    "",
    "  Description :",
    "",
];

/// Optional decorative banner placed above the field lines.
pub const BANNER_LINES: &[&str] = &[
    r#"                               *       +"#,
    r#"                         '                  |"#,
    r#"                     ()    .-.,="``"=.    - o -"#,
    r#"                           '=/_       \     |"#,
    r#"                        *   |  '=._    |"#,
    r#"                             \     `=./`,        '"#,
    r#"                          .   '=.__.=' `='      *"#,
    r#"                 +                         +"#,
    r#"                      O      *        '       ."#,
    "",
];

/// Ordered template lines for one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    lines: Vec<&'static str>,
}

impl Default for Template {
    fn default() -> Self {
        Self::standard()
    }
}

impl Template {
    pub fn standard() -> Self {
        Self {
            lines: FIELD_LINES.to_vec(),
        }
    }

    pub fn with_banner() -> Self {
        Self {
            lines: BANNER_LINES.iter().chain(FIELD_LINES).copied().collect(),
        }
    }

    pub fn lines(&self) -> &[&'static str] {
        &self.lines
    }
}

/// Resolved values for the template placeholders.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    pub filename: String,
    pub project: String,
    pub date: String,
    pub year: String,
    pub user_name: String,
    pub user_email: String,
}

impl Placeholders {
    fn table(&self) -> [(&'static str, &str); 6] {
        [
            ("FILENAME", self.filename.as_str()),
            ("PROJECT", self.project.as_str()),
            ("DATE", self.date.as_str()),
            ("YEAR", self.year.as_str()),
            ("USER_NAME", self.user_name.as_str()),
            ("USER_EMAIL", self.user_email.as_str()),
        ]
    }
}

/// Replaces every placeholder in `line` in one left-to-right pass.
///
/// Substituted values are not scanned again, so a project called `DATE`
/// stays `DATE`. An empty email drops its surrounding ` <` and `>` too.
pub fn fill_line(
    line: &str,
    values: &Placeholders,
) -> String {
    let table = values.table();
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(c) = rest.chars().next() {
        match table.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                rest = &rest[token.len()..];
                if *token == "USER_EMAIL" && value.is_empty() {
                    if out.ends_with(" <") && rest.starts_with('>') {
                        out.truncate(out.len() - " <".len());
                        rest = &rest[1..];
                    }
                } else {
                    out.push_str(value);
                }
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> Placeholders {
        Placeholders {
            filename: "a.ts".into(),
            project: "demo".into(),
            date: "2023-01-01".into(),
            year: "2023".into(),
            user_name: "Jane".into(),
            user_email: "jane@x.com".into(),
        }
    }

    #[test]
    fn filename_is_substituted() {
        assert_eq!(fill_line("File : FILENAME", &values()), "File : a.ts");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        assert_eq!(fill_line("YEAR/YEAR", &values()), "2023/2023");
    }

    #[test]
    fn values_are_not_rescanned() {
        let v = Placeholders {
            project: "DATE".into(),
            ..values()
        };
        assert_eq!(fill_line("PROJECT on DATE", &v), "DATE on 2023-01-01");
    }

    #[test]
    fn author_line_without_email() {
        let v = Placeholders {
            user_email: String::new(),
            ..values()
        };
        assert_eq!(fill_line(FIELD_LINES[4], &v), "  Author    : Jane");
        assert_eq!(fill_line(FIELD_LINES[4], &values()), "  Author    : Jane <jane@x.com>");
    }

    #[test]
    fn literal_angle_brackets_in_name_survive_empty_email() {
        let v = Placeholders {
            user_name: "Jane <>".into(),
            user_email: String::new(),
            ..values()
        };
        assert_eq!(fill_line(FIELD_LINES[4], &v), "  Author    : Jane <>");
        assert_eq!(fill_line("USER_NAME - YEAR", &v), "Jane <> - 2023");
    }

    #[test]
    fn banner_precedes_fields() {
        let t = Template::with_banner();
        assert_eq!(t.lines().len(), BANNER_LINES.len() + FIELD_LINES.len());
        assert_eq!(t.lines()[BANNER_LINES.len()], FIELD_LINES[0]);
        assert_eq!(Template::standard().lines(), FIELD_LINES);
    }
}
