/// 使用者操作翻譯後的語意，交給 Coordinator 處理
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowAll,
    AddRequested,
    EditRequested(String),
    Delete(String),
    Search(String),
    TagSelected(String),
    ClearTagFilter,
    Refresh,
    Help,
    Usage(&'static str),
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  list                 show all contacts
  add                  create a contact
  edit <id>            edit a contact
  delete <id>          delete a contact
  search <text>        search by name, email, phone or tag (plain text works too)
  tag <name>           show contacts with exactly this tag
  clear                clear the tag filter
  refresh              reload contacts from the server
  help                 show this help
  quit                 exit";

/// 解析一行輸入；空白行回傳 None。無法辨識的文字當作搜尋字串
pub fn parse_command(line: &str) -> Option<Intent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let intent = match keyword.to_lowercase().as_str() {
        "list" | "ls" => Intent::ShowAll,
        "add" | "new" => Intent::AddRequested,
        "edit" if rest.is_empty() => Intent::Usage("usage: edit <id>"),
        "edit" => Intent::EditRequested(rest.to_string()),
        "delete" | "rm" if rest.is_empty() => Intent::Usage("usage: delete <id>"),
        "delete" | "rm" => Intent::Delete(rest.to_string()),
        "search" | "find" => Intent::Search(rest.to_string()),
        "tag" if rest.is_empty() => Intent::Usage("usage: tag <name>"),
        "tag" => Intent::TagSelected(rest.to_string()),
        "clear" => Intent::ClearTagFilter,
        "refresh" => Intent::Refresh,
        "help" | "?" => Intent::Help,
        "quit" | "exit" | "q" => Intent::Quit,
        _ => Intent::Search(line.to_string()),
    };

    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse_command("LIST"), Some(Intent::ShowAll));
        assert_eq!(parse_command("Add"), Some(Intent::AddRequested));
        assert_eq!(parse_command("quit"), Some(Intent::Quit));
    }

    #[test]
    fn test_arguments_keep_inner_spaces() {
        assert_eq!(
            parse_command("tag Spot Lead"),
            Some(Intent::TagSelected("Spot Lead".to_string()))
        );
        assert_eq!(
            parse_command("  delete   7 "),
            Some(Intent::Delete("7".to_string()))
        );
        assert_eq!(
            parse_command("edit abc"),
            Some(Intent::EditRequested("abc".to_string()))
        );
    }

    #[test]
    fn test_missing_arguments_yield_usage() {
        assert_eq!(parse_command("edit"), Some(Intent::Usage("usage: edit <id>")));
        assert_eq!(parse_command("rm"), Some(Intent::Usage("usage: delete <id>")));
        assert_eq!(parse_command("tag"), Some(Intent::Usage("usage: tag <name>")));
    }

    #[test]
    fn test_search_forms() {
        assert_eq!(parse_command("search"), Some(Intent::Search(String::new())));
        assert_eq!(
            parse_command("search phil"),
            Some(Intent::Search("phil".to_string()))
        );
        assert_eq!(
            parse_command("Chase Phil"),
            Some(Intent::Search("Chase Phil".to_string()))
        );
    }
}
