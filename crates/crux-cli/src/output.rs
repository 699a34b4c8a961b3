use serde::Serialize;

/// Render a value as JSON, pretty or single-line.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let rendered = render_json(value, pretty)?;
    println!("{rendered}");
    Ok(())
}
