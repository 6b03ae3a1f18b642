/// Fallback entry document, used when no assets directory is configured
/// (or it has no `index.html`). The client application is expected to take
/// over routing from here.
pub(crate) const APP_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Documentation</title>
    <link rel="stylesheet" href="/assets/docs.css">
</head>
<body>
    <div id="app"></div>
    <script type="module" src="/assets/app.js"></script>
</body>
</html>
"#;
