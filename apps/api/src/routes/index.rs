use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>AI Review Response Generator</title>
</head>
<body>
  <h1>AI Review Response Generator</h1>
  <p>POST a review to <code>/api/generate-response</code> to get a reply.</p>
  <ul>
    <li><a href="/api/business-types">Business types</a></li>
    <li><a href="/api/demo">Demo payloads</a></li>
    <li><a href="/api/health">Health</a></li>
  </ul>
</body>
</html>
"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
