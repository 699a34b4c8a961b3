use ast_grep_core::Node;
use tracing::warn;

use crate::location::node_location;
use crate::types::ParseError;

const ERROR_KIND: &str = "ERROR";
const SNIPPET_CHARS: usize = 40;

/// One error per `ERROR` node. Error subtrees are not searched further.
pub(super) fn syntax_errors<D: ast_grep_core::Doc>(root: &Node<'_, D>) -> Vec<ParseError> {
    let mut errors = Vec::new();
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if node.kind().as_ref() == ERROR_KIND {
            let location = node_location(&node);
            let message = message_for(&node.text());
            warn!(line = location.start_line, column = location.start_column, "{message}");
            errors.push(ParseError::error(message, Some(location)));
            continue;
        }
        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }
    errors
}

fn message_for(text: &str) -> String {
    let line = text.trim().lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        return "Syntax error".to_string();
    }
    let mut snippet: String = line.chars().take(SNIPPET_CHARS).collect();
    if line.chars().nth(SNIPPET_CHARS).is_some() {
        snippet.push_str("...");
    }
    format!("Syntax error near `{snippet}`")
}
