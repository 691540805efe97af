use chrono::{DateTime, Local, SecondsFormat};

pub fn render_index(count: usize, server_time: &DateTime<Local>) -> String {
    let count = count.to_string();
    let server_time = server_time.to_rfc3339_opts(SecondsFormat::Secs, false);
    render(
        INDEX_HTML,
        &[("COUNT", count.as_str()), ("SERVER_TIME", server_time.as_str())],
    )
}

/// Fill `{{NAME}}` placeholders. Every value is HTML-escaped, so nothing
/// substituted here can introduce markup.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{name}}}}}"), &html_escape(value));
    }
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Tasks</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }
    h1 { color: #333; }
    a { color: #007BFF; text-decoration: none; }
    a:hover { text-decoration: underline; }
    main { max-width: 600px; margin: 50px auto; }
  </style>
</head>
<body>
  <main>
    <h1>You did {{COUNT}} tasks today.</h1>
    <p><a href="/tasks">When?</a></p>

    <form method="POST" action="/new" target="_blank">
      <input type="password" name="token" placeholder="Token" />
      <input type="number" name="task_id" placeholder="Task ID" min="0" />
      <button type="submit">Add</button>
    </form>

    <p>Server time: {{SERVER_TIME}}</p>
  </main>
</body>
</html>
"#;
